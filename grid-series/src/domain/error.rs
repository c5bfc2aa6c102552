use chrono::NaiveDateTime;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("index is not strictly increasing at position {position} ({stamp})")]
    NotMonotonic { position: usize, stamp: NaiveDateTime },
    #[error("column '{column}' has {found} values, index has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
}
