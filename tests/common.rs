#![allow(dead_code)]

// filename according to https://doc.rust-lang.org/book/ch11-03-test-organization.html
use nvs_entry::consts::ENTRY_SIZE;
use nvs_entry::platform::Crc;

pub const OFFSET_CRC: usize = 4;
pub const OFFSET_KEY: usize = 8;
pub const OFFSET_DATA: usize = 24;

/// zlib's crc32, used as reference for the checksums of the crate.
pub fn zlib_crc32(init: u32, data: &[u8]) -> u32 {
    unsafe { libz_sys::crc32(init as _, data.as_ptr(), data.len() as _) as u32 }
}

/// Standard CRC-32 computed by zlib
pub struct ZlibIeee;

impl Crc for ZlibIeee {
    fn crc32(data: &[u8]) -> u32 {
        zlib_crc32(0, data)
    }
}

/// The seeded CRC-32 of the ESP-IDF driver computed by zlib
pub struct ZlibEspIdf;

impl Crc for ZlibEspIdf {
    fn crc32(data: &[u8]) -> u32 {
        zlib_crc32(u32::MAX, data)
    }
}

/// Header CRC recomputed by hand over bytes [0..4) ++ [8..32).
pub fn header_crc(init: u32, header: &[u8; ENTRY_SIZE]) -> u32 {
    let mut scope = Vec::with_capacity(ENTRY_SIZE - 4);
    scope.extend_from_slice(&header[..OFFSET_CRC]);
    scope.extend_from_slice(&header[OFFSET_KEY..]);
    zlib_crc32(init, &scope)
}

pub fn stored_crc(header: &[u8; ENTRY_SIZE]) -> u32 {
    u32::from_le_bytes(header[OFFSET_CRC..OFFSET_KEY].try_into().unwrap())
}

/// A string with exactly `len` bytes of UTF-8
pub fn string_of_len(len: usize) -> String {
    (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect()
}
