use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConjugaError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Verb catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("ConjugaError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ConjugaError {
    fn from(error: std::io::Error) -> Self {
        ConjugaError::Io(Box::new(error))
    }
}
