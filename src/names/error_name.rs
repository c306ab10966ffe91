use std::fmt;
use std::str::from_utf8_unchecked;

use super::{validate_interface, NameError};

/// A validated error name.
///
/// Error names follow the same grammar as interface names.
#[derive(PartialEq, Eq)]
#[repr(transparent)]
pub struct ErrorName([u8]);

impl ErrorName {
    /// Test if a byte sequence is a valid error name.
    pub const fn is_valid(bytes: &[u8]) -> bool {
        validate_interface(bytes)
    }

    /// Construct a new error name in a constant context.
    ///
    /// # Panics
    ///
    /// Panics if the argument is not a valid error name.
    #[track_caller]
    pub const fn new_const(name: &[u8]) -> &Self {
        if !validate_interface(name) {
            panic!("Invalid D-Bus error name");
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Self::new_unchecked(name) }
    }

    /// Construct a new validated error name.
    ///
    /// # Errors
    ///
    /// Errors if the argument is not a valid error name.
    pub fn new<N>(name: &N) -> Result<&Self, NameError>
    where
        N: ?Sized + AsRef<[u8]>,
    {
        let name = name.as_ref();

        if !validate_interface(name) {
            return Err(NameError);
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Ok(Self::new_unchecked(name)) }
    }

    /// Construct a new unchecked error name.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the name is a valid error name.
    pub const unsafe fn new_unchecked(name: &[u8]) -> &Self {
        &*(name as *const _ as *const ErrorName)
    }

    /// Get the error name as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: Validation ensures the name is ASCII.
        unsafe { from_utf8_unchecked(&self.0) }
    }

    /// Get the error name as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ErrorName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
