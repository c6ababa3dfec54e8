pub mod builder;
pub mod card;
pub mod filter;

pub use builder::build_deck;
pub use card::{
    CardKey,
    CardMode,
    Flashcard,
};
pub use filter::VerbFilter;
