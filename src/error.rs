use thiserror::Error;

use crate::item_type::ItemType;

/// Errors that can occur while encoding an entry. All of them are detected before any byte
/// is produced and are caused by the caller's input, so retrying with the same input is pointless.
/// Marked as non-exhaustive to allow for future additions without breaking the API.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The max key length is 15 bytes plus null terminator.
    #[error("key too long")]
    KeyTooLong,

    /// The key contains a null byte, readers would cut it off there.
    #[error("key malformed")]
    KeyMalformed,

    /// The value does not match the declared item type, which is reported
    #[error("item type mismatch: {0}")]
    TypeMismatch(ItemType),

    /// The numeric value does not fit into the declared item type
    #[error("value out of range for {0}")]
    ValueOutOfRange(ItemType),

    /// Strings including their null terminator are limited to `MAX_STRING_SIZE` bytes
    #[error("value too large")]
    ValueTooLarge,

    /// The raw type code is unknown or refers to a type this crate does not encode
    #[error("unsupported item type: {0:#04x}")]
    UnsupportedType(u8),
}
