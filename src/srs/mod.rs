pub mod review;
pub mod scheduler;

pub use review::{
    format_interval,
    preview_intervals,
    ReviewGrade,
    ScheduledCard,
    INITIAL_EASE_FACTOR,
    MIN_EASE_FACTOR,
};
pub use scheduler::Scheduler;
