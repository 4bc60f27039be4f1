use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MorphError {
    #[error("unknown symbol or layout `{0}`")]
    UnknownSymbol(String),
    #[error("invalid color token `{0}`")]
    InvalidColor(String),
    #[error("canvas has zero area")]
    EmptyCanvas,
}
