pub mod conjugation;
pub mod core;
pub mod deck;
pub mod persistence;
pub mod session;
pub mod srs;
pub mod verbs;

pub use crate::core::{
    ConjugaError,
    Settings,
};

pub use deck::{
    build_deck,
    CardKey,
    CardMode,
    Flashcard,
    VerbFilter,
};
pub use persistence::{
    DataDir,
    ReviewSnapshot,
};
pub use session::{
    Session,
    SharedSession,
};
pub use srs::{
    ReviewGrade,
    ScheduledCard,
    Scheduler,
};
pub use verbs::{
    Catalog,
    Verb,
};
