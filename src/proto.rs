//! Low level details of the D-Bus wire format.

raw_enum! {
    /// The endianness of a message body.
    #[repr(u8)]
    pub enum Endianness {
        /// Little endian.
        LITTLE = b'l',
        /// Big endian.
        BIG = b'B',
    }
}

impl Endianness {
    /// Unpack four bytes as a `u32` in this endianness.
    ///
    /// Only the little/big distinction matters here; callers are expected to
    /// have rejected anything else up front.
    pub(crate) const fn get_u32(self, bytes: [u8; 4]) -> u32 {
        if matches!(self, Endianness::BIG) {
            u32::from_be_bytes(bytes)
        } else {
            u32::from_le_bytes(bytes)
        }
    }
}

raw_enum! {
    /// A single type code inside of a signature.
    #[repr(u8)]
    pub enum Type {
        /// Not a valid type code, used to terminate signatures.
        INVALID = b'\0',
        /// 8-bit unsigned integer.
        BYTE = b'y',
        /// Boolean value, 0 is FALSE and 1 is TRUE. Everything else is invalid.
        BOOLEAN = b'b',
        /// 32-bit signed integer.
        INT32 = b'i',
        /// 32-bit unsigned integer.
        UINT32 = b'u',
        /// 64-bit signed integer.
        INT64 = b'x',
        /// 64-bit unsigned integer.
        UINT64 = b't',
        /// IEEE 754 double.
        DOUBLE = b'd',
        /// UTF-8 string. Must be nul terminated.
        STRING = b's',
        /// Name of an object instance.
        OBJECT_PATH = b'o',
        /// A type signature.
        SIGNATURE = b'g',
        /// Array.
        ARRAY = b'a',
        /// Struct; type code 114 'r' is reserved for use in bindings and
        /// implementations to represent the general concept of a struct, and
        /// must not appear in signatures used on D-Bus.
        STRUCT = b'r',
        /// Struct opening delimiter.
        OPEN_PAREN = b'(',
        /// Struct closing delimiter.
        CLOSE_PAREN = b')',
        /// Variant type (the type of the value is part of the value itself).
        VARIANT = b'v',
    }
}

impl Type {
    /// The natural alignment of a marshalled value of this type.
    ///
    /// Strings, object paths and arrays align to their 4-byte length prefix.
    /// Signatures and variants carry a single length byte and align to 1.
    pub const fn alignment(self) -> usize {
        match self {
            Type::BOOLEAN | Type::INT32 | Type::UINT32 => 4,
            Type::STRING | Type::OBJECT_PATH | Type::ARRAY => 4,
            Type::INT64 | Type::UINT64 | Type::DOUBLE => 8,
            Type::STRUCT | Type::OPEN_PAREN => 8,
            _ => 1,
        }
    }
}
