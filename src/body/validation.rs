use std::str::from_utf8;

use crate::object_path::ObjectPath;
use crate::proto::{self, Endianness};
use crate::signature::{self, Signature, Type};
use crate::validity::{Invalid, Validity};

/// Validate a message body against its signature.
///
/// Offsets are measured from the start of `body`, which is assumed to sit at
/// an 8-aligned position in the containing message, so alignment padding can
/// be computed relative to it.
///
/// The body must be consumed exactly: bytes left over after the last value
/// are [`Invalid::TooMuchData`]. Use [`validate_body_partial`] to permit and
/// count trailing bytes instead.
///
/// # Examples
///
/// ```
/// use dbus_validate::{validate_body, Endianness, Invalid, Signature};
///
/// validate_body(Signature::BYTE, Endianness::LITTLE, &[0x2a])?;
///
/// assert_eq!(
///     validate_body(Signature::BOOLEAN, Endianness::LITTLE, &[2, 0, 0, 0]),
///     Err(Invalid::BooleanNotZeroOrOne)
/// );
/// # Ok::<_, dbus_validate::Invalid>(())
/// ```
pub fn validate_body(signature: &Signature, endianness: Endianness, body: &[u8]) -> Validity {
    let remaining = validate_body_partial(signature, endianness, body)?;

    if remaining != 0 {
        return Err(Invalid::TooMuchData);
    }

    Ok(())
}

/// Validate the leading values of a buffer against a signature, returning
/// the number of bytes left over after the last value.
///
/// # Examples
///
/// ```
/// use dbus_validate::{validate_body_partial, Endianness, Signature};
///
/// let remaining = validate_body_partial(Signature::BYTE, Endianness::LITTLE, &[0x2a, 0xff])?;
/// assert_eq!(remaining, 1);
/// # Ok::<_, dbus_validate::Invalid>(())
/// ```
pub fn validate_body_partial(
    signature: &Signature,
    endianness: Endianness,
    body: &[u8],
) -> Validity<usize> {
    if !matches!(endianness, Endianness::LITTLE | Endianness::BIG) {
        return Err(Invalid::BadByteOrder);
    }

    let at = validate_values(signature, endianness, body, 0)?;
    Ok(body.len() - at)
}

/// Validate one value per type in `signature`, in declared order.
fn validate_values(
    signature: &Signature,
    endianness: Endianness,
    buf: &[u8],
    mut at: usize,
) -> Validity<usize> {
    for ty in signature.iter() {
        at = validate_value(ty, endianness, buf, at)?;
    }

    Ok(at)
}

/// Validate a single complete value of type `ty` at `at`.
fn validate_value(ty: Type<'_>, endianness: Endianness, buf: &[u8], at: usize) -> Validity<usize> {
    if at >= buf.len() {
        return Err(Invalid::NotEnoughData);
    }

    match ty {
        Type::Array(element) => validate_array(element, endianness, buf, at),
        Type::Struct(fields) => {
            let at = align(8, buf, at)?;
            validate_values(fields, endianness, buf, at)
        }
        Type::Signature(s) => {
            let code = match s.as_bytes() {
                [b, ..] => proto::Type::new(*b),
                [] => proto::Type::INVALID,
            };

            match code {
                proto::Type::BYTE => Ok(at + 1),
                proto::Type::BOOLEAN => validate_boolean(endianness, buf, at),
                proto::Type::INT32 | proto::Type::UINT32 => validate_fixed(buf, at, 4),
                proto::Type::INT64 | proto::Type::UINT64 | proto::Type::DOUBLE => {
                    validate_fixed(buf, at, 8)
                }
                proto::Type::STRING => validate_string(endianness, buf, at),
                proto::Type::OBJECT_PATH => validate_object_path(endianness, buf, at),
                proto::Type::SIGNATURE => validate_signature_value(buf, at),
                proto::Type::VARIANT => validate_variant(endianness, buf, at),
                code => Err(Invalid::UnknownTypeCode(code)),
            }
        }
    }
}

/// Advance `at` to the next multiple of `alignment`.
///
/// The padding must fit in the buffer and every skipped byte must be nul.
fn align(alignment: usize, buf: &[u8], at: usize) -> Validity<usize> {
    let aligned = (at + alignment - 1) / alignment * alignment;

    if aligned > buf.len() {
        return Err(Invalid::NotEnoughData);
    }

    for b in &buf[at..aligned] {
        if *b != 0 {
            return Err(Invalid::AlignmentPaddingNotNul);
        }
    }

    Ok(aligned)
}

/// Unpack an aligned `u32` at `at`.
fn load_u32(endianness: Endianness, buf: &[u8], at: usize) -> Validity<(usize, u32)> {
    if buf.len() - at < 4 {
        return Err(Invalid::NotEnoughData);
    }

    let bytes = [buf[at], buf[at + 1], buf[at + 2], buf[at + 3]];
    Ok((at + 4, endianness.get_u32(bytes)))
}

/// Require a nul byte at `at`, reporting `reason` when it is something else.
fn expect_nul(buf: &[u8], at: usize, reason: Invalid) -> Validity<usize> {
    if at >= buf.len() {
        return Err(Invalid::NotEnoughData);
    }

    if buf[at] != 0 {
        return Err(reason);
    }

    Ok(at + 1)
}

fn validate_fixed(buf: &[u8], at: usize, width: usize) -> Validity<usize> {
    let at = align(width, buf, at)?;

    if buf.len() - at < width {
        return Err(Invalid::NotEnoughData);
    }

    Ok(at + width)
}

fn validate_boolean(endianness: Endianness, buf: &[u8], at: usize) -> Validity<usize> {
    let at = align(4, buf, at)?;
    let (at, value) = load_u32(endianness, buf, at)?;

    if value > 1 {
        return Err(Invalid::BooleanNotZeroOrOne);
    }

    Ok(at)
}

fn validate_string(endianness: Endianness, buf: &[u8], at: usize) -> Validity<usize> {
    let at = align(4, buf, at)?;
    let (at, len) = load_u32(endianness, buf, at)?;
    let len = len as usize;

    if len > buf.len() - at {
        return Err(Invalid::StringLengthOutOfBounds);
    }

    if from_utf8(&buf[at..at + len]).is_err() {
        return Err(Invalid::BadUtf8InString);
    }

    expect_nul(buf, at + len, Invalid::StringMissingNul)
}

fn validate_object_path(endianness: Endianness, buf: &[u8], at: usize) -> Validity<usize> {
    let at = align(4, buf, at)?;
    let (at, len) = load_u32(endianness, buf, at)?;
    let len = len as usize;

    if len > buf.len() - at {
        return Err(Invalid::StringLengthOutOfBounds);
    }

    if !ObjectPath::is_valid(&buf[at..at + len]) {
        return Err(Invalid::BadPath);
    }

    expect_nul(buf, at + len, Invalid::StringMissingNul)
}

fn validate_signature_value(buf: &[u8], at: usize) -> Validity<usize> {
    // Single length byte, alignment 1.
    let len = buf[at] as usize;
    let at = at + 1;

    if len + 1 > buf.len() - at {
        return Err(Invalid::SignatureLengthOutOfBounds);
    }

    if signature::validate(&buf[at..at + len]).is_err() {
        return Err(Invalid::BadSignature);
    }

    let at = at + len;

    if buf[at] != 0 {
        return Err(Invalid::SignatureMissingNul);
    }

    Ok(at + 1)
}

fn validate_array(
    element: &Signature,
    endianness: Endianness,
    buf: &[u8],
    at: usize,
) -> Validity<usize> {
    let at = align(4, buf, at)?;
    let (at, len) = load_u32(endianness, buf, at)?;
    let len = len as usize;

    let Some(ty) = element.iter().next() else {
        // Cannot be produced by a validated signature.
        return Err(Invalid::MissingArrayElementType);
    };

    // Padding up to the element alignment is present even when the array is
    // empty.
    let at = align(ty.alignment(), buf, at)?;

    if len > buf.len() - at {
        return Err(Invalid::StringLengthOutOfBounds);
    }

    let end = at + len;
    let mut at = at;

    while at < end {
        at = validate_value(ty, endianness, buf, at)?;
    }

    if at != end {
        return Err(Invalid::ArrayLengthIncorrect);
    }

    Ok(end)
}

fn validate_variant(endianness: Endianness, buf: &[u8], at: usize) -> Validity<usize> {
    // Single length byte, alignment 1.
    let len = buf[at] as usize;
    let at = at + 1;

    if len + 1 > buf.len() - at {
        return Err(Invalid::VariantSignatureLengthOutOfBounds);
    }

    if signature::validate(&buf[at..at + len]).is_err() {
        return Err(Invalid::VariantSignatureBad);
    }

    // SAFETY: Validated just above; borrows the body rather than copying.
    let embedded = unsafe { Signature::new_unchecked(&buf[at..at + len]) };
    let at = at + len;

    if buf[at] != 0 {
        return Err(Invalid::VariantSignatureMissingNul);
    }

    let at = at + 1;

    // The contained alignment comes from peeking the first type code. The
    // padding is consumed, and checked for nul, before the empty signature
    // case is considered.
    let contained = match embedded.as_bytes() {
        [b, ..] => proto::Type::new(*b).alignment(),
        [] => 1,
    };

    let at = align(contained, buf, at)?;

    let mut types = embedded.iter();

    let Some(ty) = types.next() else {
        return Err(Invalid::VariantSignatureEmpty);
    };

    let at = validate_value(ty, endianness, buf, at)?;

    if types.next().is_some() {
        return Err(Invalid::VariantSignatureSpecifiesMultipleValues);
    }

    Ok(at)
}
