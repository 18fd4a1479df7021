//! On-flash layout constants of a single NVS entry.

/// Size of one entry slot. Headers and string payload chunks are aligned to it.
pub const ENTRY_SIZE: usize = 32;

/// Entry slots in one 4k flash sector after the page header and state bitmap.
pub const ENTRIES_PER_PAGE: usize = 126;

/// Maximum Key length is 15 bytes + 1 byte for the null terminator.
pub const MAX_KEY_LENGTH: usize = 15;
pub const MAX_KEY_NUL_TERMINATED_LENGTH: usize = MAX_KEY_LENGTH + 1;

// A string and its header have to fit on a single page, -1 is for the header entry.
pub const MAX_STRING_SIZE: usize = (ENTRIES_PER_PAGE - 1) * ENTRY_SIZE; // 4000 bytes

/// Chunk index of every entry that is not a blob data chunk.
pub const CHUNK_INDEX_ANY: u8 = 0xFF;

/// Namespace definitions live in this namespace, keyed by their name.
pub const NAMESPACE_TABLE_INDEX: u8 = 0;

// Reserved value for unused fields
pub const RESERVED_U16: u16 = 0xFFFF;

// Byte offsets inside an entry header
pub(crate) const OFFSET_NAMESPACE: usize = 0;
pub(crate) const OFFSET_TYPE: usize = 1;
pub(crate) const OFFSET_SPAN: usize = 2;
pub(crate) const OFFSET_CHUNK_INDEX: usize = 3;
pub(crate) const OFFSET_CRC: usize = 4;
pub(crate) const OFFSET_KEY: usize = 8;
pub(crate) const OFFSET_DATA: usize = 24;
pub(crate) const DATA_FIELD_SIZE: usize = 8;

const _: () = assert!(
    OFFSET_KEY + MAX_KEY_NUL_TERMINATED_LENGTH == OFFSET_DATA
        && OFFSET_DATA + DATA_FIELD_SIZE == ENTRY_SIZE,
    "Entry header fields must cover exactly one entry slot"
);
