//! Random date generation and formatting.

use crate::between::random_between;
use crate::error::{GeneratorError, Result};
use crate::source::RandomSource;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Turns a generated instant into text.
pub trait DateFormatter {
    fn format(&self, value: &DateTime<Utc>) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(&DateTime<Utc>) -> String,
{
    fn format(&self, value: &DateTime<Utc>) -> String {
        self(value)
    }
}

/// Default formatter: RFC 3339 with millisecond precision, e.g. `2021-03-04T05:06:07.089Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3339Formatter;

impl DateFormatter for Rfc3339Formatter {
    fn format(&self, value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Formats with a `chrono` strftime pattern such as `%Y-%m-%d`.
#[derive(Debug, Clone)]
pub struct StrftimeFormatter {
    pattern: String,
}

impl StrftimeFormatter {
    /// Validate `pattern` up front; `chrono` panics when rendering an invalid one.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(GeneratorError::InvalidDateFormat(pattern));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl DateFormatter for StrftimeFormatter {
    fn format(&self, value: &DateTime<Utc>) -> String {
        value.format(&self.pattern).to_string()
    }
}

/// Draw an instant uniformly from `[start, end)` at millisecond resolution.
///
/// `start` defaults to the Unix epoch and `end` to the current time.
pub fn random_date<S: RandomSource + ?Sized>(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    source: &S,
) -> Result<DateTime<Utc>> {
    let start = start.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    let end = end.unwrap_or_else(Utc::now);

    let span_ms = (end - start).num_milliseconds();
    if span_ms <= 0 {
        return Err(GeneratorError::InvalidDateRange { start, end });
    }

    let offset = random_between(0, span_ms - 1, source)?;
    Ok(start + Duration::milliseconds(offset))
}

/// Draw an instant from `[start, end)` and format it.
///
/// Without a `formatter` the result is RFC 3339 with milliseconds.
///
/// # Errors
///
/// [`GeneratorError::InvalidDateRange`] when `end` is not at least one
/// millisecond after `start`.
pub fn random_formatted_date<S: RandomSource + ?Sized>(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    formatter: Option<&dyn DateFormatter>,
    source: &S,
) -> Result<String> {
    let value = random_date(start, end, source)?;
    Ok(match formatter {
        Some(formatter) => formatter.format(&value),
        None => Rfc3339Formatter.format(&value),
    })
}

/// Parse a configured timestamp: RFC 3339, or `YYYY-MM-DD` as midnight UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| GeneratorError::InvalidTimestamp(s.to_string()))
}
