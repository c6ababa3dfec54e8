//! Per-card review state and the grade transition.
//!
//! Grades move the ease factor by a fixed delta and grow the interval by a fixed
//! multiplier on top of the previous interval:
//! - forgot: -0.4, interval back to 1 day, streak back to 0
//! - hard:   -0.2, x1.2
//! - medium:  0.0, x1.6
//! - easy:   +0.2, x2.3

use chrono::{
    DateTime,
    Days,
    Local,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::deck::{
    CardKey,
    Flashcard,
};

pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewGrade {
    Forgot,
    Hard,
    Medium,
    Easy,
}

impl ReviewGrade {
    pub const ALL: [ReviewGrade; 4] =
        [ReviewGrade::Forgot, ReviewGrade::Hard, ReviewGrade::Medium, ReviewGrade::Easy];

    pub fn id(&self) -> &'static str {
        match self {
            ReviewGrade::Forgot => "forgot",
            ReviewGrade::Hard => "hard",
            ReviewGrade::Medium => "medium",
            ReviewGrade::Easy => "easy",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        Self::ALL.into_iter().find(|grade| grade.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewGrade::Forgot => "Forgot",
            ReviewGrade::Hard => "Hard",
            ReviewGrade::Medium => "Medium",
            ReviewGrade::Easy => "Easy",
        }
    }

    pub fn ease_delta(&self) -> f64 {
        match self {
            ReviewGrade::Forgot => -0.4,
            ReviewGrade::Hard => -0.2,
            ReviewGrade::Medium => 0.0,
            ReviewGrade::Easy => 0.2,
        }
    }

    pub fn interval_multiplier(&self) -> f64 {
        match self {
            ReviewGrade::Forgot => 1.0,
            ReviewGrade::Hard => 1.2,
            ReviewGrade::Medium => 1.6,
            ReviewGrade::Easy => 2.3,
        }
    }
}

/// A card plus its review progress. The embedded card is refreshed on every deck
/// rebuild; the rest survives as long as the key stays in the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledCard {
    pub key: CardKey,
    pub card: Flashcard,
    pub ease_factor: f64,
    pub interval_days: u32,
    pub streak: u32,
    pub due: DateTime<Local>,
}

impl ScheduledCard {
    /// Fresh state, due immediately.
    pub fn new(card: Flashcard, now: DateTime<Local>) -> Self {
        Self {
            key: card.key(),
            card,
            ease_factor: INITIAL_EASE_FACTOR,
            interval_days: 0,
            streak: 0,
            due: now,
        }
    }

    pub fn next_interval(&self, grade: ReviewGrade) -> u32 {
        match grade {
            ReviewGrade::Forgot => 1,
            _ => {
                // A new card has interval 0; growing from 0 would never move.
                let base = self.interval_days.max(1);
                ((base as f64 * grade.interval_multiplier()).floor() as u32).max(1)
            }
        }
    }

    pub fn apply(&mut self, grade: ReviewGrade, now: DateTime<Local>) {
        self.ease_factor = (self.ease_factor + grade.ease_delta()).max(MIN_EASE_FACTOR);
        self.interval_days = self.next_interval(grade);
        self.streak = match grade {
            ReviewGrade::Forgot => 0,
            _ => self.streak + 1,
        };
        // Calendar days, so the wall-clock time of `now` is kept.
        self.due = now.checked_add_days(Days::new(self.interval_days as u64)).unwrap_or(now);
    }

    pub fn is_due_on(&self, today: DateTime<Local>) -> bool {
        self.due.date_naive() <= today.date_naive()
    }
}

/// Intervals each grade would give, in `ReviewGrade::ALL` order.
pub fn preview_intervals(card: &ScheduledCard) -> [u32; 4] {
    ReviewGrade::ALL.map(|grade| card.next_interval(grade))
}

pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
