use std::fmt;
use std::str::from_utf8_unchecked;

use super::{validate_member, NameError};

/// A validated member (method or signal) name.
///
/// A single element of the ASCII characters "[A-Z][a-z][0-9]_", not
/// beginning with a digit, containing no '.', and at most 255 bytes long.
///
/// # Examples
///
/// ```
/// use dbus_validate::MemberName;
///
/// assert!(MemberName::new(b"NameOwnerChanged").is_ok());
/// assert!(MemberName::new(b"Get2").is_ok());
/// assert!(MemberName::new(b"2Get").is_err());
/// assert!(MemberName::new(b"Name.Owner").is_err());
/// ```
#[derive(PartialEq, Eq)]
#[repr(transparent)]
pub struct MemberName([u8]);

impl MemberName {
    /// Test if a byte sequence is a valid member name.
    pub const fn is_valid(bytes: &[u8]) -> bool {
        validate_member(bytes)
    }

    /// Construct a new member name in a constant context.
    ///
    /// # Panics
    ///
    /// Panics if the argument is not a valid member name.
    #[track_caller]
    pub const fn new_const(name: &[u8]) -> &Self {
        if !validate_member(name) {
            panic!("Invalid D-Bus member name");
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Self::new_unchecked(name) }
    }

    /// Construct a new validated member name.
    ///
    /// # Errors
    ///
    /// Errors if the argument is not a valid member name.
    pub fn new<N>(name: &N) -> Result<&Self, NameError>
    where
        N: ?Sized + AsRef<[u8]>,
    {
        let name = name.as_ref();

        if !validate_member(name) {
            return Err(NameError);
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Ok(Self::new_unchecked(name)) }
    }

    /// Construct a new unchecked member name.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the name is a valid member name.
    pub const unsafe fn new_unchecked(name: &[u8]) -> &Self {
        &*(name as *const _ as *const MemberName)
    }

    /// Get the member name as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: Validation ensures the name is ASCII.
        unsafe { from_utf8_unchecked(&self.0) }
    }

    /// Get the member name as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for MemberName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Equality check between [`str`] and a [`MemberName`].
impl PartialEq<str> for MemberName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == *other.as_bytes()
    }
}
