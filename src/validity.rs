use std::error;
use std::fmt;

use crate::proto::Type;

/// Result alias describing the outcome of a validation pass.
///
/// `Ok` is the `valid` outcome; every rejection carries the precise
/// [`Invalid`] reason.
pub type Validity<T = ()> = Result<T, Invalid>;

/// Every reason a signature, a message body, or an embedded value can be
/// rejected.
///
/// The set is closed: callers are expected to match on it exhaustively, for
/// instance to decide which D-Bus error to answer with. The first violation
/// encountered wins; validation never continues past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    /// A signature was longer than 255 bytes.
    SignatureTooLong,
    /// A byte in a signature is not a valid type code.
    UnknownTypeCode(Type),
    /// An array marker was not followed by an element type.
    MissingArrayElementType,
    /// A struct was opened but never closed.
    StructStartedButNotEnded,
    /// A struct was closed but never opened.
    StructEndedButNotStarted,
    /// A struct was closed immediately after it was opened.
    StructHasNoFields,
    /// More than 32 consecutive array markers.
    ExceededMaximumArrayRecursion,
    /// Structs nested more than 32 levels deep.
    ExceededMaximumStructRecursion,
    /// The body ended before the value the signature calls for.
    NotEnoughData,
    /// The body continues past the last value in the signature.
    TooMuchData,
    /// The byte order marker is neither `l` nor `B`.
    BadByteOrder,
    /// A padding byte between values was not nul.
    AlignmentPaddingNotNul,
    /// A boolean was a 32-bit value other than 0 or 1.
    BooleanNotZeroOrOne,
    /// A string or array length runs past the end of the body.
    StringLengthOutOfBounds,
    /// An object path value does not satisfy the path grammar.
    BadPath,
    /// A string value was not valid UTF-8.
    BadUtf8InString,
    /// A string value was not followed by its mandatory nul byte.
    StringMissingNul,
    /// A signature value runs past the end of the body.
    SignatureLengthOutOfBounds,
    /// A signature value does not satisfy the signature grammar.
    BadSignature,
    /// A signature value was not followed by its mandatory nul byte.
    SignatureMissingNul,
    /// A variant signature runs past the end of the body.
    VariantSignatureLengthOutOfBounds,
    /// A variant signature does not satisfy the signature grammar.
    VariantSignatureBad,
    /// A variant signature was not followed by its mandatory nul byte.
    VariantSignatureMissingNul,
    /// A variant signature contains no type.
    VariantSignatureEmpty,
    /// A variant signature contains more than one complete type.
    VariantSignatureSpecifiesMultipleValues,
    /// Array element values did not add up to the declared array length.
    ArrayLengthIncorrect,
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Invalid::SignatureTooLong => {
                write!(f, "Signature too long")
            }
            Invalid::UnknownTypeCode(code) => {
                write!(f, "Unknown type code: {code:?}")
            }
            Invalid::MissingArrayElementType => {
                write!(f, "Missing array element type")
            }
            Invalid::StructStartedButNotEnded => {
                write!(f, "Struct started but not ended")
            }
            Invalid::StructEndedButNotStarted => {
                write!(f, "Struct ended but not started")
            }
            Invalid::StructHasNoFields => {
                write!(f, "Struct has no fields")
            }
            Invalid::ExceededMaximumArrayRecursion => {
                write!(f, "Exceeded maximum array recursion")
            }
            Invalid::ExceededMaximumStructRecursion => {
                write!(f, "Exceeded maximum struct recursion")
            }
            Invalid::NotEnoughData => {
                write!(f, "Not enough data for value")
            }
            Invalid::TooMuchData => {
                write!(f, "Data past the end of the signature")
            }
            Invalid::BadByteOrder => {
                write!(f, "Bad byte order marker")
            }
            Invalid::AlignmentPaddingNotNul => {
                write!(f, "Alignment padding not nul")
            }
            Invalid::BooleanNotZeroOrOne => {
                write!(f, "Boolean not zero or one")
            }
            Invalid::StringLengthOutOfBounds => {
                write!(f, "String length out of bounds")
            }
            Invalid::BadPath => {
                write!(f, "Bad object path value")
            }
            Invalid::BadUtf8InString => {
                write!(f, "Bad UTF-8 in string value")
            }
            Invalid::StringMissingNul => {
                write!(f, "String missing nul terminator")
            }
            Invalid::SignatureLengthOutOfBounds => {
                write!(f, "Signature length out of bounds")
            }
            Invalid::BadSignature => {
                write!(f, "Bad signature value")
            }
            Invalid::SignatureMissingNul => {
                write!(f, "Signature missing nul terminator")
            }
            Invalid::VariantSignatureLengthOutOfBounds => {
                write!(f, "Variant signature length out of bounds")
            }
            Invalid::VariantSignatureBad => {
                write!(f, "Bad variant signature")
            }
            Invalid::VariantSignatureMissingNul => {
                write!(f, "Variant signature missing nul terminator")
            }
            Invalid::VariantSignatureEmpty => {
                write!(f, "Variant signature is empty")
            }
            Invalid::VariantSignatureSpecifiesMultipleValues => {
                write!(f, "Variant signature specifies multiple values")
            }
            Invalid::ArrayLengthIncorrect => {
                write!(f, "Array length incorrect")
            }
        }
    }
}

impl error::Error for Invalid {}
