//! Path-tracking lookups over a JSON object.
//!
//! A [`Decoder`] wraps one object of the document together with the keys that
//! lead to it from the root. Descending into a nested object produces a new
//! decoder with the key appended; a decoder is never mutated, so the path it
//! reports in errors is always the path it was created with.

use serde_json::{Map, Value};
use time::OffsetDateTime;
use tracing::{debug, trace};
use url::Url;

use crate::cast::FromJson;
use crate::date::DateParser;
use crate::decodable::{self, Decodable};
use crate::error::DecodeError;
use crate::kind::JsonKind;

const ARRAY_OF_OBJECTS: &str = "array of objects";

/// Keyed, path-aware view of one JSON object.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    json: &'a Map<String, Value>,
    path: Vec<String>,
}

impl<'a> Decoder<'a> {
    /// Root decoder (empty path).
    pub fn new(json: &'a Map<String, Value>) -> Self {
        Self {
            json,
            path: Vec::new(),
        }
    }

    pub fn with_path(json: &'a Map<String, Value>, path: Vec<String>) -> Self {
        Self { json, path }
    }

    pub fn json(&self) -> &'a Map<String, Value> {
        self.json
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// `path + [key]` joined with `.`.
    pub fn resolved_path(&self, key: &str) -> String {
        let mut out = String::new();
        for segment in &self.path {
            out.push_str(segment);
            out.push('.');
        }
        out.push_str(key);
        out
    }

    fn child_path(&self, key: &str) -> Vec<String> {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(key.to_owned());
        path
    }

    fn raw(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.json.get(key).ok_or_else(|| {
            let path = self.resolved_path(key);
            debug!(path = %path, "missing key");
            DecodeError::MissingKey(path)
        })
    }

    fn wrong_type(&self, key: &str, expected: &'static str, value: &Value) -> DecodeError {
        let path = self.resolved_path(key);
        let actual = JsonKind::of(value);
        debug!(path = %path, expected, actual = %actual, "wrong type");
        DecodeError::WrongType {
            key: path,
            expected,
            actual,
        }
    }

    fn object(&self, key: &str) -> Result<&'a Map<String, Value>, DecodeError> {
        match self.raw(key)? {
            Value::Object(obj) => Ok(obj),
            other => Err(self.wrong_type(key, <Map<String, Value>>::EXPECTED, other)),
        }
    }

    fn string(&self, key: &str) -> Result<&'a str, DecodeError> {
        match self.raw(key)? {
            Value::String(s) => Ok(s),
            other => Err(self.wrong_type(key, String::EXPECTED, other)),
        }
    }

    /// Cast the value at `key` to `T`.
    pub fn lookup<T: FromJson>(&self, key: &str) -> Result<T, DecodeError> {
        let value = self.raw(key)?;
        T::from_json(value).ok_or_else(|| self.wrong_type(key, T::EXPECTED, value))
    }

    /// Decode the object at `key` as `V`, one path level deeper.
    pub fn lookup_decodable<V: Decodable>(&self, key: &str) -> Result<V, DecodeError> {
        V::decode(&self.sub_decoder(key)?)
    }

    /// Decode every element of the array of objects at `key`.
    ///
    /// Elements are decoded as documents of their own, so errors inside an
    /// element report paths relative to that element.
    pub fn lookup_array<V: Decodable>(&self, key: &str) -> Result<Vec<V>, DecodeError> {
        let value = self.raw(key)?;
        let objects = match value {
            Value::Array(items) => items
                .iter()
                .map(Value::as_object)
                .collect::<Option<Vec<_>>>(),
            _ => None,
        };
        let objects = objects.ok_or_else(|| self.wrong_type(key, ARRAY_OF_OBJECTS, value))?;
        objects.into_iter().map(decodable::from_json).collect()
    }

    /// Decoder over the object at `key`.
    pub fn sub_decoder(&self, key: &str) -> Result<Decoder<'a>, DecodeError> {
        let json = self.object(key)?;
        Ok(Decoder::with_path(json, self.child_path(key)))
    }

    pub fn lookup_url(&self, key: &str) -> Result<Url, DecodeError> {
        let string_value = self.string(key)?;
        Url::parse(string_value).map_err(|err| {
            let path = self.resolved_path(key);
            debug!(path = %path, value = string_value, error = %err, "invalid URL");
            DecodeError::InvalidUrl {
                key: path,
                string_value: string_value.to_owned(),
            }
        })
    }

    pub fn lookup_date<P>(&self, key: &str, parser: &P) -> Result<OffsetDateTime, DecodeError>
    where
        P: DateParser + ?Sized,
    {
        let string_value = self.string(key)?;
        parser.parse(string_value).ok_or_else(|| {
            let path = self.resolved_path(key);
            let format = parser.description();
            debug!(path = %path, value = string_value, format = %format, "invalid date");
            DecodeError::InvalidDate {
                key: path,
                string_value: string_value.to_owned(),
                format,
            }
        })
    }

    pub fn optional<T: FromJson>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        ignore_missing_key(self.lookup(key))
    }

    pub fn optional_decodable<V: Decodable>(&self, key: &str) -> Result<Option<V>, DecodeError> {
        ignore_missing_key(self.lookup_decodable(key))
    }

    pub fn optional_array<V: Decodable>(&self, key: &str) -> Result<Option<Vec<V>>, DecodeError> {
        ignore_missing_key(self.lookup_array(key))
    }

    pub fn optional_sub_decoder(&self, key: &str) -> Result<Option<Decoder<'a>>, DecodeError> {
        ignore_missing_key(self.sub_decoder(key))
    }

    pub fn optional_url(&self, key: &str) -> Result<Option<Url>, DecodeError> {
        ignore_missing_key(self.lookup_url(key))
    }

    pub fn optional_date<P>(
        &self,
        key: &str,
        parser: &P,
    ) -> Result<Option<OffsetDateTime>, DecodeError>
    where
        P: DateParser + ?Sized,
    {
        ignore_missing_key(self.lookup_date(key, parser))
    }
}

/// Maps a `MissingKey` failure to `None`; every other error passes through.
fn ignore_missing_key<T>(result: Result<T, DecodeError>) -> Result<Option<T>, DecodeError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DecodeError::MissingKey(path)) => {
            trace!(path = %path, "optional lookup recovered missing key");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
