use chrono::{
    DateTime,
    Local,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::DataDir;
use crate::{
    core::ConjugaError,
    srs::{
        ScheduledCard,
        Scheduler,
    },
};

pub const REVIEW_STATE_VERSION: u32 = 1;

/// Saved review progress: every scheduled card with its embedded card, ease,
/// interval, streak and due date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSnapshot {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub saved_at: Option<DateTime<Local>>,
    #[serde(default)]
    pub cards: Vec<ScheduledCard>,
}

impl ReviewSnapshot {
    pub fn capture(scheduler: &Scheduler, now: DateTime<Local>) -> Self {
        Self { version: REVIEW_STATE_VERSION, saved_at: Some(now), cards: scheduler.cards().to_vec() }
    }

    pub fn save(&self, dir: &DataDir, filename: &str) -> Result<(), ConjugaError> {
        dir.save_json(self, filename)?;
        log::info!("Saved review state for {} cards", self.cards.len());
        Ok(())
    }

    /// Missing file gives an empty snapshot.
    pub fn load(dir: &DataDir, filename: &str) -> Result<Self, ConjugaError> {
        let snapshot: Self = dir.load_json(filename)?;
        if snapshot.version > REVIEW_STATE_VERSION {
            return Err(ConjugaError::Custom(format!(
                "Review state version {} is newer than supported version {}",
                snapshot.version, REVIEW_STATE_VERSION
            )));
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{
        deck::{
            build_deck,
            CardMode,
            VerbFilter,
        },
        srs::ReviewGrade,
        verbs::{
            Catalog,
            ConjugationClass,
            Regularity,
            Verb,
        },
    };

    #[test]
    fn test_snapshot_survives_restart() {
        let now = Local.with_ymd_and_hms(2026, 2, 2, 18, 45, 0).single().unwrap();
        let catalog = Catalog::new(vec![Verb::new(
            "hablar",
            "to speak",
            ConjugationClass::Ar,
            Regularity::Regular,
        )]);
        let mut scheduler = Scheduler::new();
        scheduler.rebuild(build_deck(&catalog, &VerbFilter::new(), CardMode::AudioPrompt), now);
        scheduler.apply_grade(ReviewGrade::Easy, now);
        scheduler.apply_grade(ReviewGrade::Hard, now);

        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::at(tmp.path());
        ReviewSnapshot::capture(&scheduler, now).save(&dir, "review_state.json").unwrap();

        let loaded = ReviewSnapshot::load(&dir, "review_state.json").unwrap();
        assert_eq!(loaded.version, REVIEW_STATE_VERSION);
        assert_eq!(loaded.saved_at, Some(now));
        assert_eq!(loaded.cards, scheduler.cards());
    }

    #[test]
    fn test_missing_and_future_versions() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::at(tmp.path());
        assert!(ReviewSnapshot::load(&dir, "none.json").unwrap().cards.is_empty());

        std::fs::write(dir.file_path("future.json"), r#"{"version": 99, "cards": []}"#).unwrap();
        assert!(matches!(ReviewSnapshot::load(&dir, "future.json"), Err(ConjugaError::Custom(_))));
    }
}
