//! Random fixture values for test data.
//!
//! This crate maps a pluggable source of uniform `[0, 1)` doubles into bounded
//! integers, then into character sequences, and finally into plausible-looking
//! synthetic values.
//!
//! # Architecture
//!
//! ```text
//! RandomSource (next_double)
//!        │
//!        ▼
//! random_between ── validates range and draw
//!        │
//!        ▼
//! random_string ── one draw per character
//!        │
//!        ▼
//! numeric / alpha / alpha_numeric ── random_merge (shuffle)
//!        │
//!        ▼
//! email / mobile_number / website / formatted_date
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::{random_between, random_numeric, RngSource};
//!
//! let source = RngSource::seeded(42);
//! let age = random_between(18, 80, &source).unwrap();
//! assert!((18..=80).contains(&age));
//!
//! let pin = random_numeric(6, &source).unwrap();
//! assert_eq!(pin.len(), 6);
//! ```
//!
//! # Sources
//!
//! - [`ThreadRandom`] - `rand`'s thread-local generator (default)
//! - [`RngSource`] - any caller-supplied `rand` generator, e.g. seeded `StdRng`
//! - [`SequenceSource`] - replays fixed doubles, for tests
//!
//! No source is trusted: a draw outside `[0, 1)` fails with
//! [`GeneratorError::InvalidRandomValue`].

pub mod between;
pub mod charset;
pub mod error;
pub mod generator;
pub mod generators;
pub mod source;

// Re-exports for convenience
pub use between::{random_between, MAX_SUPPORTED, MIN_SUPPORTED};
pub use charset::CharRange;
pub use error::{GeneratorError, RangeError, Result};
pub use generator::Generator;
pub use generators::contact::{
    random_email, random_mobile_number, EMAIL_DOMAINS, MOBILE_PREFIXES,
};
pub use generators::string::{
    random_alpha, random_alpha_numeric, random_merge, random_numeric, random_string,
};
pub use generators::timestamp::{
    random_date, random_formatted_date, DateFormatter, Rfc3339Formatter, StrftimeFormatter,
};
pub use generators::website::{random_website, WEBSITE_TLDS};
pub use generators::{generate_value, ValueKind};
pub use source::{RandomSource, RngSource, SequenceSource, ThreadRandom};
