use thiserror::Error;

pub type Result<T, E = IndexError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum IndexError {
    /// A document was submitted without one of its required fields. An empty
    /// id counts as missing.
    #[error("invalid document: missing or empty `{field}`")]
    InvalidDocument { field: &'static str },

    #[error("document not found: {id}")]
    DocumentNotFound { id: String },
}
