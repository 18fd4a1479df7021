use alloc::string::String;

use crate::item_type::ItemType;

/// The value of a logical entry. Checked against the declared [`ItemType`] when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    String(String),
}

/// Rust values that know their NVS item type.
///
/// Type support:
///  * bool, signed and unsigned integers up to 64-bit width: saved as primitive value within the header
///  * &str and String: saved as `Sized` entry followed by the null terminated payload
pub trait NvsValue {
    const ITEM_TYPE: ItemType;

    fn into_value(self) -> Value;
}

impl NvsValue for bool {
    const ITEM_TYPE: ItemType = ItemType::U8;

    fn into_value(self) -> Value {
        Value::Unsigned(self as u64)
    }
}

macro_rules! impl_nvs_value {
    ($($ty:ty => $item_type:ident, $variant:ident;)*) => {
        $(
            impl NvsValue for $ty {
                const ITEM_TYPE: ItemType = ItemType::$item_type;

                fn into_value(self) -> Value {
                    Value::$variant(self.into())
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_nvs_value! {
    u8 => U8, Unsigned;
    u16 => U16, Unsigned;
    u32 => U32, Unsigned;
    u64 => U64, Unsigned;
    i8 => I8, Signed;
    i16 => I16, Signed;
    i32 => I32, Signed;
    i64 => I64, Signed;
}

impl NvsValue for &str {
    const ITEM_TYPE: ItemType = ItemType::Sized;

    fn into_value(self) -> Value {
        Value::String(self.into())
    }
}

impl NvsValue for String {
    const ITEM_TYPE: ItemType = ItemType::Sized;

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
