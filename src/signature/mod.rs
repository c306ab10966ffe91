pub use self::iter::{Iter, Type};
mod iter;

pub(crate) use self::validation::validate;
mod validation;

pub use self::signature::Signature;
mod signature;

#[cfg(test)]
mod tests;

use crate::validity::Validity;

/// The maximum length in bytes of a signature.
pub const MAX_SIGNATURE: usize = 255;

/// The maximum nesting depth of arrays or structs in a signature.
pub const MAX_CONTAINER_DEPTH: usize = 32;

/// Validate a signature, reporting the precise reason on rejection.
///
/// The length cap and both container depth caps are enforced here; the first
/// violation encountered is returned.
///
/// # Examples
///
/// ```
/// use dbus_validate::{validate_signature, Invalid};
///
/// assert!(validate_signature(b"a(iv)").is_ok());
/// assert_eq!(validate_signature(b"a"), Err(Invalid::MissingArrayElementType));
/// assert_eq!(validate_signature(b"()"), Err(Invalid::StructHasNoFields));
/// ```
pub const fn validate_signature(bytes: &[u8]) -> Validity {
    validation::validate(bytes)
}
