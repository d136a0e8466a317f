#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Max gram length must be at least 1, got {0}")]
    InvalidGramLength(usize),

    #[error("Cannot build a single scalar from surrogate unit {0:#06x}")]
    SurrogateUnit(u16),

    #[error("Expected a high surrogate, got {0:#06x}")]
    NotHighSurrogate(u16),

    #[error("Expected a low surrogate, got {0:#06x}")]
    NotLowSurrogate(u16),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
