//! Email address and mobile number generators.

use crate::between::random_between;
use crate::error::Result;
use crate::generators::string::random_alpha_numeric;
use crate::source::RandomSource;

/// Domains an email address is drawn from.
pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "example.com",
];

/// Two-digit prefixes a mobile number is drawn from.
pub const MOBILE_PREFIXES: &[&str] = &["32", "33", "34", "35", "36", "37", "38", "39"];

/// Length of the generated email local part.
pub const EMAIL_LOCAL_LENGTH: usize = 10;

const MOBILE_SUFFIX_MIN: i64 = 1_000_000;
const MOBILE_SUFFIX_MAX: i64 = 9_999_999;

/// Pick one element of `items` uniformly.
///
/// `items` must be non-empty; every caller passes one of the constant tables above.
pub(crate) fn pick<'a, S: RandomSource + ?Sized>(items: &[&'a str], source: &S) -> Result<&'a str> {
    let idx = random_between(0, items.len() as i64 - 1, source)? as usize;
    Ok(items[idx])
}

/// Generate an email address such as `k3v9x0aqzt@example.com`.
pub fn random_email<S: RandomSource + ?Sized>(source: &S) -> Result<String> {
    let local = random_alpha_numeric(EMAIL_LOCAL_LENGTH, source)?.to_lowercase();
    let domain = pick(EMAIL_DOMAINS, source)?;
    Ok(format!("{local}@{domain}"))
}

/// Generate a 9-digit mobile number: a two-digit prefix and a 7-digit suffix.
pub fn random_mobile_number<S: RandomSource + ?Sized>(source: &S) -> Result<String> {
    let prefix = pick(MOBILE_PREFIXES, source)?;
    let suffix = random_between(MOBILE_SUFFIX_MIN, MOBILE_SUFFIX_MAX, source)?;
    Ok(format!("{prefix}{suffix}"))
}
