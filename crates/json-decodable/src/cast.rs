//! Primitive casts out of a [`serde_json::Value`].
//!
//! Every cast is an exhaustive match on the value's variant; a value of the
//! wrong variant (or a number outside the target's range) yields `None` and the
//! caller turns that into [`DecodeError::WrongType`](crate::DecodeError::WrongType).

use serde_json::{Map, Value};

/// A type that can be cast directly out of a single JSON value.
pub trait FromJson: Sized {
    /// Name reported as the expected type when the cast fails.
    const EXPECTED: &'static str;

    fn from_json(value: &Value) -> Option<Self>;
}

impl FromJson for String {
    const EXPECTED: &'static str = "String";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromJson for bool {
    const EXPECTED: &'static str = "bool";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

macro_rules! signed_from_json {
    ($($ty:ty),*) => {
        $(
            impl FromJson for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_json(value: &Value) -> Option<Self> {
                    match value {
                        Value::Number(n) => n.as_i64().and_then(|n| <$ty>::try_from(n).ok()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

macro_rules! unsigned_from_json {
    ($($ty:ty),*) => {
        $(
            impl FromJson for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_json(value: &Value) -> Option<Self> {
                    match value {
                        Value::Number(n) => n.as_u64().and_then(|n| <$ty>::try_from(n).ok()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

signed_from_json!(i64, i32);
unsigned_from_json!(u64, u32, usize);

impl FromJson for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl FromJson for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(|n| n as f32)
                .filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl FromJson for Value {
    const EXPECTED: &'static str = "any";

    fn from_json(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromJson for Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Object(obj) => Some(obj.clone()),
            _ => None,
        }
    }
}

impl FromJson for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Array(arr) => Some(arr.clone()),
            _ => None,
        }
    }
}
