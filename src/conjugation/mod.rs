pub mod endings;

pub mod stem;

pub mod engine;

pub use engine::{
    conjugate,
    conjugation_grid,
    derive,
    resolve,
    Conjugation,
};
