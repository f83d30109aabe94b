use thiserror::Error;

/// Errors that can occur while constructing or processing a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacturaError {
    /// One or more validation rules failed.
    #[error("validación fallida: {0}")]
    Validacion(String),

    /// Builder encountered invalid or missing configuration.
    #[error("error de construcción: {0}")]
    Builder(String),

    /// Document number sequencing error.
    #[error("error de numeración: {0}")]
    Numeracion(String),

    /// Monetary overflow or out-of-range amount.
    #[error("error aritmético: {0}")]
    Aritmetica(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "cliente.ruc").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
