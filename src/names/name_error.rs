use std::error;
use std::fmt;

/// An error constructing a validated name.
#[derive(Debug)]
#[non_exhaustive]
pub struct NameError;

impl fmt::Display for NameError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid D-Bus name")
    }
}

impl error::Error for NameError {}
