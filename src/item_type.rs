use crate::error::Error;

/// Type tags as stored in byte 1 of an entry header, using the ESP-IDF codes.
///
/// The lower nibble of the primitive types is their width in bytes, signed
/// types additionally carry `0x10`.
#[derive(strum::FromRepr, strum::Display, Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemType {
    U8 = 0x01,
    I8 = 0x11,
    U16 = 0x02,
    I16 = 0x12,
    U32 = 0x04,
    I32 = 0x14,
    U64 = 0x08,
    I64 = 0x18,
    Sized = 0x21,
    Blob = 0x41,
    BlobData = 0x42,
    BlobIndex = 0x48,
    Any = 0xff,
}

impl ItemType {
    /// Width of the little-endian value inside the 8 byte data field. Fails for
    /// everything that is not a primitive.
    pub fn get_primitive_bytes_width(&self) -> Result<usize, Error> {
        match self {
            ItemType::U8 | ItemType::I8 => Ok(1),
            ItemType::U16 | ItemType::I16 => Ok(2),
            ItemType::U32 | ItemType::I32 => Ok(4),
            ItemType::U64 | ItemType::I64 => Ok(8),
            _ => Err(Error::TypeMismatch(*self)),
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.get_primitive_bytes_width().is_ok()
    }

    /// Whether this crate can produce entries of the type. Blobs and the
    /// wildcard are registry members but not encodable here.
    pub fn is_supported(&self) -> bool {
        self.is_primitive() || *self == ItemType::Sized
    }
}

impl TryFrom<u8> for ItemType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ItemType::from_repr(code).ok_or(Error::UnsupportedType(code))
    }
}

impl From<ItemType> for u8 {
    fn from(val: ItemType) -> Self {
        val as u8
    }
}
