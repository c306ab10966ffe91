//! The validation core of a D-Bus wire-format implementation.
//!
//! This crate decides whether a byte sequence received from an untrusted
//! peer conforms to the D-Bus marshaling rules, and whether textual
//! identifiers (object paths; interface, member, error, and bus names; type
//! signatures) are well-formed. It decodes nothing and allocates nothing:
//! every validator is a pure function over borrowed bytes which reports the
//! first violation it encounters as a precise [`Invalid`] reason.
//!
//! Body validation is driven by a validated [`Signature`], which doubles as
//! the schema cursor: the signature iterator yields one complete type at a
//! time while the byte cursor advances through alignment padding, length
//! prefixes, nested containers, and variants.
//!
//! # Examples
//!
//! ```
//! use dbus_validate::{validate_body, Endianness, Invalid, Signature};
//!
//! // A string value: 4-byte length, payload, mandatory nul.
//! let body = b"\x05\x00\x00\x00hello\x00";
//! validate_body(Signature::STRING, Endianness::LITTLE, body)?;
//!
//! // Chopping off the nul no longer satisfies the signature.
//! assert_eq!(
//!     validate_body(Signature::STRING, Endianness::LITTLE, &body[..9]),
//!     Err(Invalid::NotEnoughData)
//! );
//! # Ok::<_, dbus_validate::Invalid>(())
//! ```

#![deny(missing_docs)]
#![allow(clippy::module_inception)]

#[macro_use]
mod macros;

#[doc(inline)]
pub use self::proto::{Endianness, Type};
mod proto;

#[doc(inline)]
pub use self::validity::{Invalid, Validity};
mod validity;

#[doc(inline)]
pub use self::signature::{validate_signature, Signature, MAX_CONTAINER_DEPTH, MAX_SIGNATURE};
/// Signatures: the grammar validator, the validated [`Signature`] wrapper,
/// and the iterator which walks a signature one complete type at a time.
pub mod signature;

#[doc(inline)]
pub use self::body::{validate_body, validate_body_partial};
mod body;

#[doc(inline)]
pub use self::object_path::{ObjectPath, ObjectPathError};
mod object_path;

#[doc(inline)]
pub use self::names::{BusName, ErrorName, InterfaceName, MemberName, NameError, MAX_NAME};
mod names;
