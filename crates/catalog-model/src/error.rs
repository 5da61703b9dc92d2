use thiserror::Error;

/// Errors raised while parsing catalog vocabulary from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown token category: {0}")]
    InvalidTokenCategory(String),
    #[error("unknown platform: {0}")]
    InvalidPlatform(String),
    #[error("unknown prop type: {0}")]
    InvalidPropType(String),
    #[error("unknown accessibility constraint kind: {0}")]
    InvalidConstraintKind(String),
    #[error("unknown constraint scope: {0}")]
    InvalidConstraintScope(String),
    #[error("invalid threshold '{value}' for {kind}")]
    InvalidThreshold { kind: String, value: String },
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
