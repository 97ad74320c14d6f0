//! json-decodable - type-safe extraction of application types from JSON trees.
//!
//! A type implements [`Decodable`] by pulling named fields out of a
//! [`Decoder`]. Every lookup either yields a typed value or a [`DecodeError`]
//! naming the dotted path of the field that failed (`person.name.first`).
//!
//! ```
//! use json_decodable::{Decodable, DecodeError, Decoder};
//!
//! #[derive(Debug)]
//! struct Name {
//!     first: String,
//! }
//!
//! impl Decodable for Name {
//!     fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
//!         Ok(Name { first: decoder.lookup("first")? })
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Person {
//!     name: Name,
//!     age: i64,
//! }
//!
//! impl Decodable for Person {
//!     fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
//!         Ok(Person {
//!             name: decoder.lookup_decodable("name")?,
//!             age: decoder.lookup("age")?,
//!         })
//!     }
//! }
//!
//! let err = json_decodable::from_str::<Person>(r#"{"name": {}, "age": 25}"#).unwrap_err();
//! assert_eq!(err.to_string(), "missing key `name.first`");
//! ```

mod cast;
mod date;
mod decodable;
mod decoder;
mod error;
mod kind;

pub use cast::FromJson;
pub use date::{DateFormat, DateParser, InvalidFormatDescription};
pub use decodable::{from_bytes, from_json, from_str, from_value, Decodable};
pub use decoder::Decoder;
pub use error::{DecodeError, FromBytesError};
pub use kind::JsonKind;

pub use serde_json::{Map, Value};
pub use time::OffsetDateTime;
pub use url::Url;
