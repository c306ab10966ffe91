use std::fmt;
use std::str::from_utf8_unchecked;

use super::{validate_bus_name, NameError};

/// A validated bus name, either unique or well-known.
///
/// Unique names start with a ':' and their elements may consist of digits
/// alone, such as `:1.42`. Well-known names follow the interface grammar.
///
/// # Examples
///
/// ```
/// use dbus_validate::BusName;
///
/// assert!(BusName::new(b":1.0").is_ok());
/// assert!(BusName::new(b"org.freedesktop.DBus").is_ok());
/// assert!(BusName::new(b":").is_err());
/// assert!(BusName::new(b"org").is_err());
/// ```
#[derive(PartialEq, Eq)]
#[repr(transparent)]
pub struct BusName([u8]);

impl BusName {
    /// Test if a byte sequence is a valid bus name.
    pub const fn is_valid(bytes: &[u8]) -> bool {
        validate_bus_name(bytes)
    }

    /// Construct a new bus name in a constant context.
    ///
    /// # Panics
    ///
    /// Panics if the argument is not a valid bus name.
    #[track_caller]
    pub const fn new_const(name: &[u8]) -> &Self {
        if !validate_bus_name(name) {
            panic!("Invalid D-Bus bus name");
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Self::new_unchecked(name) }
    }

    /// Construct a new validated bus name.
    ///
    /// # Errors
    ///
    /// Errors if the argument is not a valid bus name.
    pub fn new<N>(name: &N) -> Result<&Self, NameError>
    where
        N: ?Sized + AsRef<[u8]>,
    {
        let name = name.as_ref();

        if !validate_bus_name(name) {
            return Err(NameError);
        }

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Ok(Self::new_unchecked(name)) }
    }

    /// Construct a new unchecked bus name.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the name is a valid bus name.
    pub const unsafe fn new_unchecked(name: &[u8]) -> &Self {
        &*(name as *const _ as *const BusName)
    }

    /// Test if this is a unique connection name.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_validate::BusName;
    ///
    /// assert!(BusName::new_const(b":1.0").is_unique());
    /// assert!(!BusName::new_const(b"org.freedesktop.DBus").is_unique());
    /// ```
    pub const fn is_unique(&self) -> bool {
        matches!(&self.0, [b':', ..])
    }

    /// Get the bus name as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: Validation ensures the name is ASCII.
        unsafe { from_utf8_unchecked(&self.0) }
    }

    /// Get the bus name as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for BusName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
