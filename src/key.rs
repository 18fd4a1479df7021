use core::fmt;

use crate::consts::{MAX_KEY_LENGTH, MAX_KEY_NUL_TERMINATED_LENGTH};
use crate::error::Error;

/// A 16-byte key as stored in bytes 8..24 of an entry header (15 characters + null terminator).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Key([u8; MAX_KEY_NUL_TERMINATED_LENGTH]);

impl Key {
    /// Creates a 16 byte, null-padded byte array used as key for values and namespaces.
    ///
    /// Fails with [`Error::KeyTooLong`] for keys above 15 bytes and with [`Error::KeyMalformed`]
    /// if the key contains a null byte.
    pub fn new(key: &str) -> Result<Self, Error> {
        let src = key.as_bytes();
        if src.len() > MAX_KEY_LENGTH {
            return Err(Error::KeyTooLong);
        }
        if src.contains(&b'\0') {
            return Err(Error::KeyMalformed);
        }

        let mut dst = [0u8; MAX_KEY_NUL_TERMINATED_LENGTH];
        dst[..src.len()].copy_from_slice(src);
        Ok(Self(dst))
    }

    /// Creates a 16 byte, null-padded byte array used as key for values and namespaces.
    ///
    /// Usage: `Key::from_str("my_key")`
    ///
    /// Tip: use a const context if possible to ensure that the key is transformed at compile time:
    ///   `let my_key = const { Key::from_str("my_key") };`
    ///
    /// Panics if the key is longer than 15 bytes or contains a null byte.
    pub const fn from_str(s: &str) -> Self {
        let src = s.as_bytes();
        assert!(src.len() <= MAX_KEY_LENGTH);
        let mut dst = [0u8; MAX_KEY_NUL_TERMINATED_LENGTH];
        let mut i = 0;
        while i < src.len() {
            assert!(src[i] != b'\0');
            dst[i] = src[i];
            i += 1;
        }
        Self(dst)
    }

    /// The raw key field including the terminator and zero padding.
    pub const fn as_bytes(&self) -> &[u8; MAX_KEY_NUL_TERMINATED_LENGTH] {
        &self.0
    }

    /// Length of the key without the terminator.
    pub fn len(&self) -> usize {
        self.0
            .iter()
            .position(|&b| b == b'\0')
            .unwrap_or(MAX_KEY_LENGTH)
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == b'\0'
    }
}

impl TryFrom<&str> for Key {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Key::new(value)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(b\"")?;

        // the last byte is always the terminator
        for &byte in &self.0[..self.len()] {
            write!(f, "{}", core::ascii::escape_default(byte))?;
        }

        write!(f, "\")")
    }
}
