use std::sync::{
    Arc,
    Mutex,
};

use chrono::{
    DateTime,
    Local,
};

use crate::{
    core::Settings,
    deck::{
        build_deck,
        CardMode,
        VerbFilter,
    },
    persistence::ReviewSnapshot,
    srs::{
        ReviewGrade,
        ScheduledCard,
        Scheduler,
    },
    verbs::Catalog,
};

/// One practice session: the catalog and filter it reads, and the scheduler it owns.
/// Changing the catalog, filter or mode rebuilds the deck.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    filter: VerbFilter,
    mode: CardMode,
    scheduler: Scheduler,
}

/// A session guarded by one lock. Rebuilds and grades both rewrite the whole
/// collection, so they must not interleave.
pub type SharedSession = Arc<Mutex<Session>>;

impl Session {
    pub fn new(catalog: Catalog, filter: VerbFilter, mode: CardMode, now: DateTime<Local>) -> Self {
        let mut session = Self { catalog, filter, mode, scheduler: Scheduler::new() };
        session.rebuild(now);
        session
    }

    /// Starts from saved settings and review progress. The saved states are put back
    /// before the first rebuild so surviving cards keep their schedule.
    pub fn from_saved(
        catalog: Catalog,
        settings: &Settings,
        snapshot: ReviewSnapshot,
        now: DateTime<Local>,
    ) -> Self {
        let mut session = Self {
            catalog,
            filter: settings.filter.clone(),
            mode: settings.mode,
            scheduler: Scheduler::new(),
        };
        session.restore_review_state(snapshot, now);
        session
    }

    /// Replaces all review progress with `snapshot`, then rebuilds. Saved states
    /// whose key is no longer in the deck are dropped.
    pub fn restore_review_state(&mut self, snapshot: ReviewSnapshot, now: DateTime<Local>) {
        self.scheduler.restore(snapshot.cards, now);
        self.rebuild(now);
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn rebuild(&mut self, now: DateTime<Local>) {
        let deck = build_deck(&self.catalog, &self.filter, self.mode);
        self.scheduler.rebuild(deck, now);
    }

    pub fn set_catalog(&mut self, catalog: Catalog, now: DateTime<Local>) {
        self.catalog = catalog;
        self.rebuild(now);
    }

    pub fn update_filter(&mut self, now: DateTime<Local>, update: impl FnOnce(&mut VerbFilter)) {
        update(&mut self.filter);
        self.rebuild(now);
    }

    pub fn set_filter(&mut self, filter: VerbFilter, now: DateTime<Local>) {
        self.update_filter(now, |current| *current = filter);
    }

    pub fn set_mode(&mut self, mode: CardMode, now: DateTime<Local>) {
        self.mode = mode;
        self.rebuild(now);
    }

    pub fn grade(&mut self, grade: ReviewGrade, now: DateTime<Local>) -> Option<ScheduledCard> {
        self.scheduler.apply_grade(grade, now)
    }

    pub fn advance(&mut self) {
        self.scheduler.advance();
    }

    pub fn go_back(&mut self) {
        self.scheduler.go_back();
    }

    pub fn current(&self) -> Option<&ScheduledCard> {
        self.scheduler.current()
    }

    pub fn cards(&self) -> &[ScheduledCard] {
        self.scheduler.cards()
    }

    pub fn cursor(&self) -> usize {
        self.scheduler.cursor()
    }

    pub fn due_count(&self) -> usize {
        self.scheduler.due_today()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &VerbFilter {
        &self.filter
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn review_snapshot(&self, now: DateTime<Local>) -> ReviewSnapshot {
        ReviewSnapshot::capture(&self.scheduler, now)
    }

    /// Copies filter and mode back into `settings` for saving.
    pub fn store_settings(&self, settings: &mut Settings) {
        settings.filter = self.filter.clone();
        settings.mode = self.mode;
    }
}
