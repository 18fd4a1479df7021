use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
#[cfg(feature = "defmt")]
use defmt::{trace, warn};

use crate::consts::*;
use crate::error::Error;
use crate::item_type::ItemType;
use crate::key::Key;
use crate::platform::{Crc, Ieee};
use crate::value::{NvsValue, Value};

/// A logical entry: a typed value stored under `key` in the namespace with the given index.
///
/// Nothing is validated until the entry is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub namespace_index: u8,
    pub item_type: ItemType,
    pub key: String,
    pub value: Value,
}

impl Entry {
    pub fn new(
        namespace_index: u8,
        item_type: ItemType,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            namespace_index,
            item_type,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an entry whose item type is derived from the Rust type of `value`.
    ///
    /// Usage: `Entry::typed(1, "count", 42u32)`
    pub fn typed<V: NvsValue>(namespace_index: u8, key: impl Into<String>, value: V) -> Self {
        Self::new(namespace_index, V::ITEM_TYPE, key, value.into_value())
    }

    /// Creates the entry that defines a namespace: a `U8` in the namespace table whose key is the
    /// namespace name and whose value is the index the namespace's entries refer to.
    pub fn namespace(name: impl Into<String>, index: u8) -> Self {
        Self::new(NAMESPACE_TABLE_INDEX, ItemType::U8, name, index)
    }

    /// Encodes the entry using the standard CRC-32 for header and payload checksums.
    pub fn encode(&self) -> Result<EncodedEntry, Error> {
        self.encode_with::<Ieee>()
    }

    /// Encodes the entry using `C` for header and payload checksums.
    pub fn encode_with<C: Crc>(&self) -> Result<EncodedEntry, Error> {
        let result = self.try_encode::<C>();

        #[cfg(feature = "defmt")]
        if let Err(e) = &result {
            warn!(
                "encode: rejected ns_idx {} type {}: {}",
                self.namespace_index, self.item_type, e
            );
        }
        #[cfg(all(feature = "debug-logs", target_arch = "x86_64"))]
        if let Err(e) = &result {
            println!(
                "encode: rejected ns_idx {} type {:?}: {e}",
                self.namespace_index, self.item_type
            );
        }

        result
    }

    fn try_encode<C: Crc>(&self) -> Result<EncodedEntry, Error> {
        let key = Key::new(&self.key)?;

        if !self.item_type.is_supported() {
            return Err(Error::UnsupportedType(self.item_type.into()));
        }

        let (span, data, payload) = match self.item_type {
            ItemType::Sized => {
                let (data, payload) = encode_sized::<C>(&self.value)?;
                let span = u8::try_from(1 + payload.len() / ENTRY_SIZE)
                    .map_err(|_| Error::ValueTooLarge)?;
                (span, data, payload)
            }
            _ => (1, encode_primitive(self.item_type, &self.value)?, Vec::new()),
        };

        let header = Header {
            namespace_index: self.namespace_index,
            item_type: self.item_type,
            span,
            chunk_index: CHUNK_INDEX_ANY,
            key,
            data,
        }
        .to_bytes::<C>();

        #[cfg(feature = "defmt")]
        trace!(
            "encode: ns_idx {} type {} key {} span {}",
            self.namespace_index, self.item_type, key, span
        );
        #[cfg(all(feature = "debug-logs", target_arch = "x86_64"))]
        println!(
            "encode: ns_idx {} type {:?} key {key:?} span {span}",
            self.namespace_index, self.item_type
        );

        Ok(EncodedEntry {
            header,
            data: payload,
        })
    }
}

impl TryFrom<&Entry> for EncodedEntry {
    type Error = Error;

    fn try_from(entry: &Entry) -> Result<Self, Self::Error> {
        entry.encode()
    }
}

/// The fields of an entry header, serialized by [`Header::to_bytes`] at their fixed offsets.
struct Header {
    namespace_index: u8,
    item_type: ItemType,
    span: u8,
    chunk_index: u8,
    key: Key,
    data: [u8; DATA_FIELD_SIZE],
}

impl Header {
    fn to_bytes<C: Crc>(&self) -> [u8; ENTRY_SIZE] {
        let mut buf = [0xFFu8; ENTRY_SIZE];
        buf[OFFSET_NAMESPACE] = self.namespace_index;
        buf[OFFSET_TYPE] = self.item_type.into();
        buf[OFFSET_SPAN] = self.span;
        buf[OFFSET_CHUNK_INDEX] = self.chunk_index;
        buf[OFFSET_KEY..OFFSET_DATA].copy_from_slice(self.key.as_bytes());
        buf[OFFSET_DATA..].copy_from_slice(&self.data);

        let crc = C::crc32_entry(&buf);
        buf[OFFSET_CRC..OFFSET_KEY].copy_from_slice(&crc.to_le_bytes());
        buf
    }
}

/// Writes the value little-endian with the width of `item_type`, the remaining bytes stay 0xFF.
fn encode_primitive(item_type: ItemType, value: &Value) -> Result<[u8; DATA_FIELD_SIZE], Error> {
    let value = match value {
        Value::Unsigned(v) => i128::from(*v),
        Value::Signed(v) => i128::from(*v),
        Value::String(_) => return Err(Error::TypeMismatch(item_type)),
    };

    let (min, max) = match item_type {
        ItemType::U8 => (0, i128::from(u8::MAX)),
        ItemType::U16 => (0, i128::from(u16::MAX)),
        ItemType::U32 => (0, i128::from(u32::MAX)),
        ItemType::U64 => (0, i128::from(u64::MAX)),
        ItemType::I8 => (i128::from(i8::MIN), i128::from(i8::MAX)),
        ItemType::I16 => (i128::from(i16::MIN), i128::from(i16::MAX)),
        ItemType::I32 => (i128::from(i32::MIN), i128::from(i32::MAX)),
        ItemType::I64 => (i128::from(i64::MIN), i128::from(i64::MAX)),
        _ => return Err(Error::TypeMismatch(item_type)),
    };
    if !(min..=max).contains(&value) {
        return Err(Error::ValueOutOfRange(item_type));
    }

    let width = item_type.get_primitive_bytes_width()?;
    // truncation keeps the two's complement representation of signed values
    let raw = (value as u64).to_le_bytes();

    let mut data = [0xFFu8; DATA_FIELD_SIZE];
    data[..width].copy_from_slice(&raw[..width]);
    Ok(data)
}

/// Returns the data field `[size: u16, reserved: u16, crc32: u32]` and the payload
/// (string + null terminator), padded with 0xFF to a multiple of the entry size.
fn encode_sized<C: Crc>(value: &Value) -> Result<([u8; DATA_FIELD_SIZE], Vec<u8>), Error> {
    let Value::String(s) = value else {
        return Err(Error::TypeMismatch(ItemType::Sized));
    };

    // ESP-IDF stores strings with a null terminator included in the size
    let size = s.len() + 1;
    if size > MAX_STRING_SIZE {
        return Err(Error::ValueTooLarge);
    }
    let size_u16 = u16::try_from(size).map_err(|_| Error::ValueTooLarge)?;

    let mut payload = vec![0xFFu8; size.div_ceil(ENTRY_SIZE) * ENTRY_SIZE];
    payload[..s.len()].copy_from_slice(s.as_bytes());
    payload[s.len()] = b'\0';

    let mut data = [0u8; DATA_FIELD_SIZE];
    data[..2].copy_from_slice(&size_u16.to_le_bytes());
    data[2..4].copy_from_slice(&RESERVED_U16.to_le_bytes());
    data[4..].copy_from_slice(&C::crc32(&payload[..size]).to_le_bytes());

    Ok((data, payload))
}

/// An encoded entry: the header slot followed by `span - 1` slots of string payload.
///
/// The caller places `header` and `data` contiguously into a page, see [`EncodedEntry::to_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEntry {
    header: [u8; ENTRY_SIZE],
    data: Vec<u8>,
}

impl EncodedEntry {
    pub fn header(&self) -> &[u8; ENTRY_SIZE] {
        &self.header
    }

    /// The payload slots, empty for primitives.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn namespace_index(&self) -> u8 {
        self.header[OFFSET_NAMESPACE]
    }

    pub fn item_type(&self) -> ItemType {
        // only supported types are ever written to the header
        ItemType::from_repr(self.header[OFFSET_TYPE]).unwrap_or(ItemType::Any)
    }

    pub fn span(&self) -> u8 {
        self.header[OFFSET_SPAN]
    }

    pub fn chunk_index(&self) -> u8 {
        self.header[OFFSET_CHUNK_INDEX]
    }

    /// The key field including null terminator and zero padding.
    pub fn key_bytes(&self) -> &[u8] {
        &self.header[OFFSET_KEY..OFFSET_DATA]
    }

    /// The 8 byte data field at the end of the header.
    pub fn data_field(&self) -> [u8; DATA_FIELD_SIZE] {
        let mut data = [0u8; DATA_FIELD_SIZE];
        data.copy_from_slice(&self.header[OFFSET_DATA..]);
        data
    }

    pub fn header_crc(&self) -> u32 {
        let mut crc = [0u8; 4];
        crc.copy_from_slice(&self.header[OFFSET_CRC..OFFSET_KEY]);
        u32::from_le_bytes(crc)
    }

    /// Header and payload as one contiguous buffer, ready to be written to flash.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(ENTRY_SIZE + self.data.len());
        buf.extend_from_slice(&self.header);
        buf.extend_from_slice(&self.data);
        buf
    }

    pub fn into_parts(self) -> ([u8; ENTRY_SIZE], Vec<u8>) {
        (self.header, self.data)
    }
}
