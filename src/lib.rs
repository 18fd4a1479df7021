#![doc = include_str ! ("../README.md")]
#![cfg_attr(not(target_arch = "x86_64"), no_std)]

pub mod consts;
pub mod crc;
mod entry;
pub mod error;
mod item_type;
mod key;
pub mod platform;
mod value;

extern crate alloc;

pub use entry::{EncodedEntry, Entry};
pub use error::Error;
pub use item_type::ItemType;
pub use key::Key;
pub use value::{NvsValue, Value};
