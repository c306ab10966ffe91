use crate::proto::Type;
use crate::validity::{Invalid, Validity};

use super::{MAX_CONTAINER_DEPTH, MAX_SIGNATURE};

pub(crate) const fn validate(bytes: &[u8]) -> Validity {
    if bytes.len() > MAX_SIGNATURE {
        return Err(Invalid::SignatureTooLong);
    }

    let mut struct_depth = 0;
    let mut array_depth = 0;
    let mut last = Type::INVALID;
    let mut n = 0;

    while n < bytes.len() {
        let t = Type::new(bytes[n]);
        n += 1;

        match t {
            Type::BYTE
            | Type::BOOLEAN
            | Type::INT32
            | Type::UINT32
            | Type::INT64
            | Type::UINT64
            | Type::DOUBLE
            | Type::STRING
            | Type::OBJECT_PATH
            | Type::SIGNATURE
            | Type::VARIANT => {}
            Type::ARRAY => {
                array_depth += 1;

                if array_depth > MAX_CONTAINER_DEPTH {
                    return Err(Invalid::ExceededMaximumArrayRecursion);
                }
            }
            Type::OPEN_PAREN => {
                struct_depth += 1;

                if struct_depth > MAX_CONTAINER_DEPTH {
                    return Err(Invalid::ExceededMaximumStructRecursion);
                }
            }
            Type::CLOSE_PAREN => {
                if struct_depth == 0 {
                    return Err(Invalid::StructEndedButNotStarted);
                }

                if matches!(last, Type::OPEN_PAREN) {
                    return Err(Invalid::StructHasNoFields);
                }

                struct_depth -= 1;
            }
            // Catches the reserved struct code 'r' along with every byte
            // outside the alphabet.
            t => return Err(Invalid::UnknownTypeCode(t)),
        }

        // Counts consecutive array markers waiting for an element type, not
        // a nesting stack.
        if !matches!(t, Type::ARRAY) {
            array_depth = 0;
        }

        last = t;
    }

    if array_depth > 0 {
        return Err(Invalid::MissingArrayElementType);
    }

    if struct_depth > 0 {
        return Err(Invalid::StructStartedButNotEnded);
    }

    Ok(())
}
