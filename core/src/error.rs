use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("container is empty")]
    EmptyContainer,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("employee ID {id} not found")]
    NotFound { id: String },

    #[error("employee name \"{name}\" not found")]
    NameNotFound { name: String },

    #[error("invalid count {given}: must be between 1 and {max}")]
    InvalidCount { given: i64, max: i64 },

    #[error("invalid date \"{0}\": expected a valid DD-MM-YYYY calendar date")]
    InvalidDate(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("date of joining must be at least {years} years after date of birth")]
    UnderMinimumAge { years: i32 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
