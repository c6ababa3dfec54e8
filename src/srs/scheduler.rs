use std::collections::HashMap;

use chrono::{
    DateTime,
    Local,
};

use super::review::{
    ReviewGrade,
    ScheduledCard,
};
use crate::deck::{
    CardKey,
    Flashcard,
};

/// Owns every scheduled card of a session, kept sorted by due date, plus the
/// cursor of the card being presented.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    cards: Vec<ScheduledCard>,
    cursor: usize,
    due_today: usize,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection with `deck`. Keys that already had review state keep
    /// it and only get the new card content; keys no longer in `deck` are dropped.
    pub fn rebuild(&mut self, deck: Vec<Flashcard>, now: DateTime<Local>) {
        let mut existing: HashMap<CardKey, ScheduledCard> =
            self.cards.drain(..).map(|scheduled| (scheduled.key, scheduled)).collect();

        let mut kept = 0;
        self.cards = deck
            .into_iter()
            .map(|card| match existing.remove(&card.key()) {
                Some(mut scheduled) => {
                    kept += 1;
                    scheduled.card = card;
                    scheduled
                }
                None => ScheduledCard::new(card, now),
            })
            .collect();

        self.sort_by_due();
        self.cursor = 0;
        self.refresh_due_count(now);
        log::debug!(
            "Rebuilt deck: {} cards, {} with prior state, {} dropped, {} due",
            self.cards.len(),
            kept,
            existing.len(),
            self.due_today
        );
    }

    /// Grades the current card. The cursor is left where it is, so after the
    /// re-sort it may point at a different card.
    pub fn apply_grade(&mut self, grade: ReviewGrade, now: DateTime<Local>) -> Option<ScheduledCard> {
        let scheduled = self.cards.get_mut(self.cursor)?;
        scheduled.apply(grade, now);
        let updated = scheduled.clone();

        self.sort_by_due();
        self.refresh_due_count(now);
        log::debug!(
            "Graded {} as {}: interval {}d, ease {:.2}, streak {}",
            updated.key,
            grade.id(),
            updated.interval_days,
            updated.ease_factor,
            updated.streak
        );
        Some(updated)
    }

    /// Puts back previously saved states, e.g. from disk. A later `rebuild` merges
    /// them with the current deck.
    pub fn restore(&mut self, saved: Vec<ScheduledCard>, now: DateTime<Local>) {
        let mut seen: HashMap<CardKey, ScheduledCard> = HashMap::with_capacity(saved.len());
        for scheduled in saved {
            seen.insert(scheduled.key, scheduled);
        }
        self.cards = seen.into_values().collect();
        self.sort_by_due();
        self.cursor = 0;
        self.refresh_due_count(now);
    }

    pub fn advance(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.cards.len();
    }

    pub fn go_back(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cursor = (self.cursor + self.cards.len() - 1) % self.cards.len();
    }

    pub fn current(&self) -> Option<&ScheduledCard> {
        self.cards.get(self.cursor)
    }

    pub fn cards(&self) -> &[ScheduledCard] {
        &self.cards
    }

    pub fn get(&self, key: &CardKey) -> Option<&ScheduledCard> {
        self.cards.iter().find(|scheduled| scheduled.key == *key)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Due count as of the last rebuild or grade.
    pub fn due_today(&self) -> usize {
        self.due_today
    }

    pub fn count_due(&self, today: DateTime<Local>) -> usize {
        self.cards.iter().filter(|scheduled| scheduled.is_due_on(today)).count()
    }

    pub fn refresh_due_count(&mut self, now: DateTime<Local>) {
        self.due_today = self.count_due(now);
    }

    // Stable, so equal due dates keep deck order.
    fn sort_by_due(&mut self) {
        self.cards.sort_by_key(|scheduled| scheduled.due);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{
        Duration,
        TimeZone,
    };

    use super::*;
    use crate::{
        deck::{
            build_deck,
            CardMode,
            VerbFilter,
        },
        verbs::{
            Catalog,
            ConjugationClass,
            Person,
            Regularity,
            Tense,
            Verb,
        },
    };

    fn morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).single().unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Verb::new("hablar", "to speak", ConjugationClass::Ar, Regularity::Regular),
            Verb::new("comer", "to eat", ConjugationClass::Er, Regularity::Regular),
        ])
    }

    fn present_only() -> VerbFilter {
        let mut filter = VerbFilter::new();
        filter.tenses = [Tense::Present].into_iter().collect();
        filter.persons = [Person::FirstSingular, Person::SecondSingular].into_iter().collect();
        filter
    }

    fn scheduler() -> Scheduler {
        let mut scheduler = Scheduler::new();
        scheduler.rebuild(build_deck(&catalog(), &present_only(), CardMode::AudioPrompt), morning());
        scheduler
    }

    #[test]
    fn test_fresh_rebuild() {
        let scheduler = scheduler();
        assert_eq!(scheduler.len(), 4);
        assert_eq!(scheduler.cursor(), 0);
        assert_eq!(scheduler.due_today(), 4);
        assert!(scheduler.cards().iter().all(|c| c.interval_days == 0 && c.due == morning()));
        assert_eq!(scheduler.current().unwrap().card.conjugated_form, "hablo");
    }

    #[test]
    fn test_grade_resorts_but_keeps_cursor() {
        let mut scheduler = scheduler();
        let graded = scheduler.apply_grade(ReviewGrade::Medium, morning()).unwrap();

        assert_eq!(graded.card.conjugated_form, "hablo");
        assert_eq!(graded.streak, 1);
        assert_eq!(scheduler.cursor(), 0);
        assert_eq!(scheduler.due_today(), 3);
        assert_eq!(scheduler.cards().last().unwrap().key, graded.key);
        assert_eq!(scheduler.current().unwrap().card.conjugated_form, "hablas");
    }

    #[test]
    fn test_rebuild_preserves_review_state() {
        let mut scheduler = scheduler();
        scheduler.apply_grade(ReviewGrade::Easy, morning());
        let before = scheduler.cards().last().unwrap().clone();

        // Same filter, but the catalog entry now carries a provided form.
        let catalog = Catalog::new(vec![
            Verb::new("hablar", "to speak", ConjugationClass::Ar, Regularity::Irregular)
                .with_provided(Tense::Present, Person::FirstSingular, "hablo!"),
            Verb::new("comer", "to eat", ConjugationClass::Er, Regularity::Regular),
        ]);
        let later = morning() + Duration::hours(3);
        scheduler.rebuild(build_deck(&catalog, &present_only(), CardMode::AudioPrompt), later);

        let after = scheduler.get(&before.key).unwrap();
        assert_eq!(after.ease_factor, before.ease_factor);
        assert_eq!(after.interval_days, before.interval_days);
        assert_eq!(after.streak, before.streak);
        assert_eq!(after.due, before.due);
        assert_eq!(after.card.conjugated_form, "hablo!");
        assert_eq!(scheduler.len(), 4);
        assert_eq!(scheduler.due_today(), 3);
    }

    #[test]
    fn test_rebuild_drops_unmatched_and_resets_cursor() {
        let mut scheduler = scheduler();
        scheduler.advance();
        scheduler.advance();
        assert_eq!(scheduler.cursor(), 2);

        let mut filter = present_only();
        filter.toggle_class(ConjugationClass::Er);
        scheduler.rebuild(build_deck(&catalog(), &filter, CardMode::AudioPrompt), morning());

        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.cursor(), 0);
        assert!(scheduler.cards().iter().all(|c| c.card.verb.infinitive == "hablar"));
    }

    #[test]
    fn test_mode_change_creates_new_identities() {
        let mut scheduler = scheduler();
        scheduler.apply_grade(ReviewGrade::Easy, morning());

        scheduler.rebuild(build_deck(&catalog(), &present_only(), CardMode::WrittenPrompt), morning());
        assert!(scheduler.cards().iter().all(|c| c.streak == 0 && c.card.mode == CardMode::WrittenPrompt));
        assert_eq!(scheduler.due_today(), 4);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut scheduler = scheduler();
        scheduler.go_back();
        assert_eq!(scheduler.cursor(), 3);
        scheduler.advance();
        assert_eq!(scheduler.cursor(), 0);
    }

    #[test]
    fn test_empty_collection_is_a_no_op() {
        let mut scheduler = Scheduler::new();
        scheduler.advance();
        scheduler.go_back();
        assert_eq!(scheduler.cursor(), 0);
        assert!(scheduler.current().is_none());
        assert!(scheduler.apply_grade(ReviewGrade::Forgot, morning()).is_none());
        assert_eq!(scheduler.due_today(), 0);
    }

    #[test]
    fn test_restore_then_rebuild_keeps_saved_progress() {
        let mut original = scheduler();
        original.apply_grade(ReviewGrade::Easy, morning());
        let saved = original.cards().to_vec();

        let mut scheduler = Scheduler::new();
        scheduler.restore(saved, morning());
        assert_eq!(scheduler.len(), 4);
        scheduler.rebuild(build_deck(&catalog(), &present_only(), CardMode::AudioPrompt), morning());

        assert_eq!(scheduler.due_today(), 3);
        assert_eq!(scheduler.cards().last().unwrap().streak, 1);
        assert_eq!(scheduler.cards().last().unwrap().interval_days, 2);
    }

    #[test]
    fn test_due_count_uses_calendar_days() {
        let mut scheduler = scheduler();
        scheduler.apply_grade(ReviewGrade::Medium, morning());

        let tomorrow_early = Local.with_ymd_and_hms(2026, 5, 5, 0, 1, 0).single().unwrap();
        assert_eq!(scheduler.count_due(morning()), 3);
        assert_eq!(scheduler.count_due(tomorrow_early), 4);
    }
}
