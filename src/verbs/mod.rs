pub mod catalog;
pub mod types;

pub use catalog::Catalog;
pub use types::{
    ConjugationClass,
    ConjugationTable,
    Person,
    Regularity,
    Tense,
    Verb,
};
