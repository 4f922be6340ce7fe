use thiserror::Error;

/// Configuration rejections raised when a generator is constructed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("At least one operation must be selected")]
    NoOperations,
    #[error("A problem needs at least two operands, got {0}")]
    TooFewOperands(usize),
    #[error("Range bounds must be at least 1: min={min}, max={max}")]
    NonPositiveRange { min: i64, max: i64 },
    #[error("Range lower bound exceeds upper bound: min={min}, max={max}")]
    InvertedRange { min: i64, max: i64 },
}
