//! The checksum seam of the encoder.

use crate::consts::ENTRY_SIZE;
use crate::crc::{crc32, crc32_seeded, entry_crc_scope};

/// Checksum used for both the header CRC and the payload CRC of string entries.
///
/// Readers on the target have to agree on the variant, see [`Ieee`] and [`EspIdf`].
pub trait Crc {
    fn crc32(data: &[u8]) -> u32;

    /// Header checksum, covering every header byte except the CRC field itself.
    fn crc32_entry(header: &[u8; ENTRY_SIZE]) -> u32 {
        Self::crc32(&entry_crc_scope(header))
    }
}

/// Standard CRC-32 (zlib `crc32(0, data)`), check value `0xCBF43926`. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ieee;

impl Crc for Ieee {
    fn crc32(data: &[u8]) -> u32 {
        crc32(data)
    }
}

/// The variant the ESP-IDF C++ driver computes: `crc32_le(0xFFFFFFFF, data)`, which is zlib's
/// `crc32(0xFFFFFFFF, data)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EspIdf;

impl Crc for EspIdf {
    fn crc32(data: &[u8]) -> u32 {
        crc32_seeded(u32::MAX, data)
    }
}

#[cfg(any(
    feature = "esp32",
    feature = "esp32s2",
    feature = "esp32s3",
    feature = "esp32c2",
    feature = "esp32c3",
    feature = "esp32c6",
    feature = "esp32h2",
))]
mod chip {
    use crate::platform::Crc;

    /// [`super::EspIdf`] computed by the ROM of the chip.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct EspRom;

    impl Crc for EspRom {
        fn crc32(data: &[u8]) -> u32 {
            esp_hal::rom::crc::crc32_le(u32::MAX, data)
        }
    }
}

#[cfg(any(
    feature = "esp32",
    feature = "esp32s2",
    feature = "esp32s3",
    feature = "esp32c2",
    feature = "esp32c3",
    feature = "esp32c6",
    feature = "esp32h2",
))]
pub use chip::*;
