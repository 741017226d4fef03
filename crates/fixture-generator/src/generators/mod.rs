//! Individual value generators.
//!
//! Each submodule holds the generation logic for one family of values.
//! [`ValueKind`] names every generator together with its parameters so that
//! generators can be selected from configuration.

pub mod contact;
pub mod string;
pub mod timestamp;
pub mod website;

use crate::between::random_between;
use crate::charset::CharRange;
use crate::error::Result;
use crate::source::RandomSource;
use serde::{Deserialize, Serialize};

fn default_char_from() -> u32 {
    CharRange::ASCII_PRINTABLE.from
}

fn default_char_to() -> u32 {
    CharRange::ASCII_PRINTABLE.to
}

/// Generator configuration for a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueKind {
    /// Integer in an inclusive range
    Between {
        /// Minimum value (inclusive)
        from: i64,
        /// Maximum value (inclusive)
        to: i64,
    },

    /// Characters drawn from a code range (printable ASCII by default)
    String {
        length: usize,
        #[serde(default = "default_char_from")]
        from: u32,
        #[serde(default = "default_char_to")]
        to: u32,
    },

    /// Decimal digits
    Numeric { length: usize },

    /// Mixed-case letters
    Alpha { length: usize },

    /// Letters and digits
    AlphaNumeric { length: usize },

    /// Shuffle of two fixed strings
    Merge { a: String, b: String },

    /// Email address
    Email,

    /// 9-digit mobile number
    MobileNumber,

    /// Website URL
    Website,

    /// Formatted instant in `[start, end)`
    FormattedDate {
        /// RFC 3339 or `YYYY-MM-DD`; defaults to the Unix epoch
        #[serde(default)]
        start: Option<String>,
        /// RFC 3339 or `YYYY-MM-DD`; defaults to now
        #[serde(default)]
        end: Option<String>,
        /// strftime pattern; defaults to RFC 3339 with milliseconds
        #[serde(default)]
        format: Option<String>,
    },
}

/// Generate a value based on the generator configuration.
pub fn generate_value<S: RandomSource + ?Sized>(kind: &ValueKind, source: &S) -> Result<String> {
    match kind {
        ValueKind::Between { from, to } => Ok(random_between(*from, *to, source)?.to_string()),

        ValueKind::String { length, from, to } => {
            string::random_string(*length, CharRange::new(*from, *to), source)
        }

        ValueKind::Numeric { length } => string::random_numeric(*length, source),

        ValueKind::Alpha { length } => string::random_alpha(*length, source),

        ValueKind::AlphaNumeric { length } => string::random_alpha_numeric(*length, source),

        ValueKind::Merge { a, b } => string::random_merge(a, b, source),

        ValueKind::Email => contact::random_email(source),

        ValueKind::MobileNumber => contact::random_mobile_number(source),

        ValueKind::Website => website::random_website(source),

        ValueKind::FormattedDate { start, end, format } => {
            let start = start
                .as_deref()
                .map(timestamp::parse_timestamp)
                .transpose()?;
            let end = end.as_deref().map(timestamp::parse_timestamp).transpose()?;
            let formatter = format
                .as_deref()
                .map(timestamp::StrftimeFormatter::new)
                .transpose()?;

            timestamp::random_formatted_date(
                start,
                end,
                formatter.as_ref().map(|f| f as &dyn timestamp::DateFormatter),
                source,
            )
        }
    }
}
