use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid page size: {size} (must be between {min} and {max})")]
    InvalidPageSize { size: usize, min: usize, max: usize },
}
