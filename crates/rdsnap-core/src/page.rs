use std::fmt;

use crate::CoreError;

/// Upper bound on records requested per listing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    pub const MIN: usize = 1;
    pub const MAX: usize = 100;

    pub fn new(size: usize) -> Result<Self, CoreError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(CoreError::InvalidPageSize {
                size,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
