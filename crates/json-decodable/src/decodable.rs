//! The [`Decodable`] capability and the document-level entry points.

use serde_json::{Map, Value};
use tracing::debug;

use crate::decoder::Decoder;
use crate::error::{DecodeError, FromBytesError};

/// A type that can construct itself from a [`Decoder`].
///
/// Implementations describe their shape by the lookups they perform:
///
/// ```
/// use json_decodable::{Decodable, DecodeError, Decoder};
///
/// struct Point {
///     x: i64,
///     y: i64,
///     label: Option<String>,
/// }
///
/// impl Decodable for Point {
///     fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
///         Ok(Point {
///             x: decoder.lookup("x")?,
///             y: decoder.lookup("y")?,
///             label: decoder.optional("label")?,
///         })
///     }
/// }
///
/// let point: Point = json_decodable::from_str(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!((point.x, point.y, point.label), (1, 2, None));
/// ```
pub trait Decodable: Sized {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError>;
}

impl<T: Decodable> Decodable for Box<T> {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        T::decode(decoder).map(Box::new)
    }
}

/// Decode `T` from a root object.
pub fn from_json<T: Decodable>(object: &Map<String, Value>) -> Result<T, DecodeError> {
    T::decode(&Decoder::new(object))
}

/// Decode `T` from a parsed document, which must be an object.
pub fn from_value<T: Decodable>(value: &Value) -> Result<T, DecodeError> {
    match value {
        Value::Object(object) => from_json(object),
        other => {
            debug!(value = %other, "top-level JSON value is not an object");
            Err(DecodeError::InvalidJson(other.clone()))
        }
    }
}

/// Parse `bytes` as JSON and decode `T` from the resulting document.
pub fn from_bytes<T: Decodable>(bytes: &[u8]) -> Result<T, FromBytesError> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(from_value(&value)?)
}

pub fn from_str<T: Decodable>(input: &str) -> Result<T, FromBytesError> {
    from_bytes(input.as_bytes())
}
