pub mod errors;
pub mod settings;

pub use errors::ConjugaError;
pub use settings::Settings;
