use std::fmt;
use std::str::from_utf8_unchecked;

use crate::validity::Invalid;

use super::{validate, Iter};

/// A validated D-Bus signature.
///
/// Holding a `&Signature` is proof that the bytes have passed
/// [`validate_signature`], which is what body validation relies on.
///
/// [`validate_signature`]: crate::validate_signature
///
/// # Examples
///
/// ```
/// use dbus_validate::Signature;
///
/// const SIG: &Signature = Signature::new_const(b"aaaai");
///
/// assert!(Signature::new(b"aai").is_ok());
/// assert!(Signature::new(b"a").is_err());
/// ```
#[derive(Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Signature([u8]);

impl Signature {
    /// The empty signature.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_validate::Signature;
    ///
    /// assert!(Signature::EMPTY.is_empty());
    /// assert_eq!(Signature::EMPTY, Signature::new(b"")?);
    /// # Ok::<_, dbus_validate::Invalid>(())
    /// ```
    pub const EMPTY: &'static Signature = Signature::new_const(b"");

    /// A single byte.
    pub const BYTE: &'static Signature = Signature::new_const(b"y");

    /// Boolean value: 0 is FALSE and 1 is TRUE, everything else is invalid.
    pub const BOOLEAN: &'static Signature = Signature::new_const(b"b");

    /// Signed (two's complement) 32-bit integer.
    pub const INT32: &'static Signature = Signature::new_const(b"i");

    /// Unsigned 32-bit integer.
    pub const UINT32: &'static Signature = Signature::new_const(b"u");

    /// Signed (two's complement) 64-bit integer.
    pub const INT64: &'static Signature = Signature::new_const(b"x");

    /// Unsigned 64-bit integer.
    pub const UINT64: &'static Signature = Signature::new_const(b"t");

    /// IEEE 754 double-precision floating point.
    pub const DOUBLE: &'static Signature = Signature::new_const(b"d");

    /// The signature of a nul-terminated string.
    pub const STRING: &'static Signature = Signature::new_const(b"s");

    /// The signature of an object path.
    pub const OBJECT_PATH: &'static Signature = Signature::new_const(b"o");

    /// The signature of a [`Signature`].
    pub const SIGNATURE: &'static Signature = Signature::new_const(b"g");

    /// The signature of a variant value.
    pub const VARIANT: &'static Signature = Signature::new_const(b"v");

    /// Construct a new signature with validation inside of a constant
    /// context.
    ///
    /// This will panic in case the signature is invalid.
    ///
    /// ```compile_fail
    /// use dbus_validate::Signature;
    ///
    /// const BAD: &Signature = Signature::new_const(b"(a)i(");
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_validate::Signature;
    ///
    /// const SIG: &Signature = Signature::new_const(b"i(ai)");
    /// ```
    #[inline]
    #[track_caller]
    pub const fn new_const(signature: &[u8]) -> &Signature {
        if validate(signature).is_err() {
            panic!("Invalid D-Bus signature")
        };

        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Self::new_unchecked(signature) }
    }

    /// Try to construct a new signature with validation.
    ///
    /// # Errors
    ///
    /// Returns the precise [`Invalid`] reason when the bytes do not satisfy
    /// the signature grammar.
    #[inline]
    pub fn new<S>(signature: &S) -> Result<&Signature, Invalid>
    where
        S: ?Sized + AsRef<[u8]>,
    {
        let signature = signature.as_ref();
        validate(signature)?;
        // SAFETY: The byte slice is repr transparent over this type.
        unsafe { Ok(Self::new_unchecked(signature)) }
    }

    /// Construct a new signature without validation. The caller is
    /// responsible for ensuring that the signature is valid.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the signature is a valid signature.
    #[inline]
    pub const unsafe fn new_unchecked(signature: &[u8]) -> &Self {
        &*(signature as *const _ as *const Signature)
    }

    /// Construct a new empty signature.
    pub const fn empty() -> &'static Self {
        unsafe { Self::new_unchecked(&[]) }
    }

    /// Test if the signature is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the length of the signature in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the complete top-level types of the signature.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbus_validate::signature::Type;
    /// use dbus_validate::Signature;
    ///
    /// let mut it = Signature::new(b"ya(ai)")?.iter();
    ///
    /// assert_eq!(it.next(), Some(Type::Signature(Signature::BYTE)));
    ///
    /// let Some(Type::Array(elem)) = it.next() else {
    ///     panic!("expected array");
    /// };
    ///
    /// assert_eq!(elem, "(ai)");
    /// assert!(it.next().is_none());
    /// # Ok::<_, dbus_validate::Invalid>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Get the signature as a string.
    pub fn as_str(&self) -> &str {
        // SAFETY: Validation indirectly ensures that the signature is valid
        // UTF-8.
        unsafe { from_utf8_unchecked(&self.0) }
    }

    /// Get the signature as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl AsRef<Signature> for Signature {
    #[inline]
    fn as_ref(&self) -> &Signature {
        self
    }
}

/// Equality check between [`[u8]`] and a [`Signature`].
///
/// # Examples
///
/// ```
/// use dbus_validate::Signature;
///
/// assert_eq!(*Signature::EMPTY, b""[..]);
/// assert_eq!(*Signature::STRING, b"s"[..]);
/// ```
impl PartialEq<[u8]> for Signature {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == *other
    }
}

/// Equality check between [`[u8]`] and a borrowed [`Signature`].
impl PartialEq<[u8]> for &Signature {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == *other
    }
}

/// Equality check between [`[u8; N]`] and a [`Signature`].
///
/// # Examples
///
/// ```
/// use dbus_validate::Signature;
///
/// assert_eq!(Signature::EMPTY, b"");
/// assert_eq!(Signature::STRING, b"s");
/// ```
impl<const N: usize> PartialEq<[u8; N]> for Signature {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == other[..]
    }
}

/// Equality check between [`[u8; N]`] and a borrowed [`Signature`].
impl<const N: usize> PartialEq<[u8; N]> for &Signature {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == other[..]
    }
}

/// Equality check between [`str`] and a [`Signature`].
///
/// # Examples
///
/// ```
/// use dbus_validate::Signature;
///
/// assert_eq!(*Signature::STRING, *"s");
/// ```
impl PartialEq<str> for Signature {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == *other.as_bytes()
    }
}

/// Equality check between [`str`] and a borrowed [`Signature`].
impl PartialEq<str> for &Signature {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == *other.as_bytes()
    }
}

/// Equality check between [`&str`][str] and a [`Signature`].
impl PartialEq<&str> for Signature {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other.as_bytes()
    }
}
