use crate::consts::{ENTRY_SIZE, OFFSET_CRC, OFFSET_KEY};

const POLYNOMIAL: u32 = 0xEDB88320;

/// CRC32 using the IEEE 802.3 polynomial (0xEDB88320, bit-reversed 0x04C11DB7).
///
/// This is the plain zlib `crc32(0, data)`, which is what NVS partition generators use for
/// entry and payload checksums.
///
/// This function is intentionally public so that callers can verify or compute
/// CRCs over NVS data independently of the encoder.
pub fn crc32(data: &[u8]) -> u32 {
    crc32_seeded(0, data)
}

/// Continue a zlib style CRC32 from `seed`, the result of a previous call (or an explicit
/// starting value). `crc32_seeded(0, data)` equals [`crc32`].
pub fn crc32_seeded(seed: u32, data: &[u8]) -> u32 {
    let mut crc = !seed;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
        }
    }

    !crc
}

/// Compute an NVS entry CRC over all bytes except the CRC field at offset 4..8.
pub fn crc32_entry(header: &[u8; ENTRY_SIZE]) -> u32 {
    crc32(&entry_crc_scope(header))
}

/// The bytes covered by the header checksum: `[0..4)` followed by `[8..32)`.
pub(crate) fn entry_crc_scope(header: &[u8; ENTRY_SIZE]) -> [u8; ENTRY_SIZE - 4] {
    let mut combined = [0u8; ENTRY_SIZE - 4];
    combined[..OFFSET_CRC].copy_from_slice(&header[..OFFSET_CRC]);
    combined[OFFSET_CRC..].copy_from_slice(&header[OFFSET_KEY..]);
    combined
}
