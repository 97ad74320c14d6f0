//! Date parsing collaborators for [`Decoder::lookup_date`](crate::Decoder::lookup_date).
//!
//! The decoder itself is format-agnostic: it hands the string at a key to a
//! [`DateParser`] and reports [`DecodeError::InvalidDate`](crate::DecodeError::InvalidDate)
//! when the parser declines it. [`DateFormat`] covers the common cases; any
//! `Fn(&str) -> Option<OffsetDateTime>` can stand in for anything else.

use time::format_description::well_known::{Iso8601, Rfc2822, Rfc3339};
use time::format_description::{self, OwnedFormatItem};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub use time::error::InvalidFormatDescription;

/// Turns a string into a timestamp, or declines.
pub trait DateParser {
    fn parse(&self, input: &str) -> Option<OffsetDateTime>;

    /// Human-readable name of the accepted format, reported in errors.
    fn description(&self) -> String {
        "custom".to_owned()
    }
}

impl<F> DateParser for F
where
    F: Fn(&str) -> Option<OffsetDateTime>,
{
    fn parse(&self, input: &str) -> Option<OffsetDateTime> {
        self(input)
    }
}

/// Date format configuration.
#[derive(Debug, Clone)]
pub enum DateFormat {
    Rfc3339,
    Rfc2822,
    Iso8601,
    /// A `time` format description such as `[year]-[month]-[day]`.
    ///
    /// Built with [`DateFormat::pattern`]. Values without an offset are read as
    /// UTC; values without a time of day are read as midnight.
    Pattern {
        source: String,
        items: OwnedFormatItem,
    },
}

impl DateFormat {
    /// Compile a format description (version 2 syntax).
    pub fn pattern(source: &str) -> Result<Self, InvalidFormatDescription> {
        let items = format_description::parse_owned::<2>(source)?;
        Ok(DateFormat::Pattern {
            source: source.to_owned(),
            items,
        })
    }
}

impl DateParser for DateFormat {
    fn parse(&self, input: &str) -> Option<OffsetDateTime> {
        match self {
            DateFormat::Rfc3339 => OffsetDateTime::parse(input, &Rfc3339).ok(),
            DateFormat::Rfc2822 => OffsetDateTime::parse(input, &Rfc2822).ok(),
            DateFormat::Iso8601 => OffsetDateTime::parse(input, &Iso8601::DEFAULT).ok(),
            DateFormat::Pattern { items, .. } => OffsetDateTime::parse(input, items)
                .ok()
                .or_else(|| {
                    PrimitiveDateTime::parse(input, items)
                        .ok()
                        .map(PrimitiveDateTime::assume_utc)
                })
                .or_else(|| {
                    Date::parse(input, items)
                        .ok()
                        .map(|date| date.midnight().assume_utc())
                }),
        }
    }

    fn description(&self) -> String {
        match self {
            DateFormat::Rfc3339 => "RFC 3339".to_owned(),
            DateFormat::Rfc2822 => "RFC 2822".to_owned(),
            DateFormat::Iso8601 => "ISO 8601".to_owned(),
            DateFormat::Pattern { source, .. } => source.clone(),
        }
    }
}
