use std::fmt;
use std::str::from_utf8_unchecked;

use super::{validate_interface, NameError};

/// A validated interface name.
///
/// Interface names are composed of two or more elements separated by a
/// period ('.') character. All elements must contain at least one character,
/// consist only of the ASCII characters "[A-Z][a-z][0-9]_", and must not
/// begin with a digit. The whole name must not exceed 255 bytes.
///
/// # Examples
///
/// ```
/// use dbus_validate::InterfaceName;
///
/// assert!(InterfaceName::new(b"org.freedesktop.DBus").is_ok());
/// assert!(InterfaceName::new(b"org").is_err());
/// assert!(InterfaceName::new(b"org..DBus").is_err());
/// assert!(InterfaceName::new(b"org.2DBus").is_err());
/// ```
#[derive(PartialEq, Eq)]
#[repr(transparent)]
pub struct InterfaceName([u8]);

impl InterfaceName {
    /// Test if a byte sequence is a valid interface name.
    pub const fn is_valid(bytes: &[u8]) -> bool {
        validate_interface(bytes)
    }

    /// Construct a new interface name in a constant context.
    ///
    /// # Panics
    ///
    /// Panics if the argument is not a valid interface name.
    #[track_caller]
    pub const fn new_const(name: &[u8]) -> &Self {
        if !validate_interface(name) {
            panic!("Invalid D-Bus interface name");
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Self::new_unchecked(name) }
    }

    /// Construct a new validated interface name.
    ///
    /// # Errors
    ///
    /// Errors if the argument is not a valid interface name.
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

    /// Construct a new unchecked interface name.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the name is a valid interface name.
    pub const unsafe fn new_unchecked(name: &[u8]) -> &Self {
        &*(name as *const _ as *const InterfaceName)
    }

    /// Get the interface name as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: Validation ensures the name is ASCII.
        unsafe { from_utf8_unchecked(&self.0) }
    }

    /// Get the interface name as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for InterfaceName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Equality check between [`str`] and an [`InterfaceName`].
impl PartialEq<str> for InterfaceName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == *other.as_bytes()
    }
}
