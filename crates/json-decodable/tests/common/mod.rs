//! Decodable fixtures shared by the integration matrices.
#![allow(dead_code)]

use json_decodable::{
    DateFormat, Decodable, DecodeError, Decoder, Map, OffsetDateTime, Url, Value,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub first: String,
    pub second: String,
}

impl Decodable for Name {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        Ok(Name {
            first: decoder.lookup("first")?,
            second: decoder.lookup("second")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: Name,
    pub age: i64,
    pub email: Option<String>,
}

impl Decodable for Person {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        Ok(Person {
            name: decoder.lookup_decodable("name")?,
            age: decoder.lookup("age")?,
            email: decoder.optional("email")?,
        })
    }
}

/// Exercises URL, date and sub-decoder lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub homepage: Url,
    pub avatar: Option<Url>,
    pub joined: OffsetDateTime,
    pub last_seen: Option<OffsetDateTime>,
    pub theme: String,
    pub font_size: u32,
}

impl Decodable for Profile {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        let settings = decoder.sub_decoder("settings")?;
        Ok(Profile {
            homepage: decoder.lookup_url("homepage")?,
            avatar: decoder.optional_url("avatar")?,
            joined: decoder.lookup_date("joined", &DateFormat::Rfc3339)?,
            last_seen: decoder.optional_date("last_seen", &DateFormat::Rfc3339)?,
            theme: settings.lookup("theme")?,
            font_size: settings.lookup("font_size")?,
        })
    }
}

/// Self-referential document shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub label: String,
    pub children: Vec<Tree>,
    pub parent_hint: Option<Box<Tree>>,
}

impl Decodable for Tree {
    fn decode(decoder: &Decoder<'_>) -> Result<Self, DecodeError> {
        Ok(Tree {
            label: decoder.lookup("label")?,
            children: decoder.optional_array("children")?.unwrap_or_default(),
            parent_hint: decoder.optional_decodable("parent_hint")?,
        })
    }
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(obj) => obj,
        other => panic!("fixture is not an object: {other}"),
    }
}
