//! Website URL generator.

use crate::charset::CharRange;
use crate::error::Result;
use crate::generators::contact::pick;
use crate::generators::string::random_string;
use crate::source::RandomSource;

/// Scheme and host prefix of every generated website.
pub const WEBSITE_SCHEME: &str = "https://www.";

/// Top-level domains a website is drawn from.
pub const WEBSITE_TLDS: &[&str] = &[".com", ".net", ".org", ".io", ".dev", ".info"];

/// Length of the generated domain label.
pub const WEBSITE_LABEL_LENGTH: usize = 8;

/// Generate a URL whose 8-character label is drawn from printable ASCII,
/// e.g. `https://www.q$h~Z(m2.org`.
pub fn random_website<S: RandomSource + ?Sized>(source: &S) -> Result<String> {
    let label = random_string(WEBSITE_LABEL_LENGTH, CharRange::ASCII_PRINTABLE, source)?;
    let tld = pick(WEBSITE_TLDS, source)?;
    Ok(format!("{WEBSITE_SCHEME}{label}{tld}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, SequenceSource};

    #[test]
    fn test_random_website_shape() {
        let source = RngSource::seeded(42);
        for _ in 0..50 {
            let url = random_website(&source).unwrap();
            let rest = url.strip_prefix(WEBSITE_SCHEME).unwrap();
            let (label, tld) = rest.split_at(WEBSITE_LABEL_LENGTH);

            assert!(label.chars().all(|c| c.is_ascii_graphic()));
            assert!(WEBSITE_TLDS.contains(&tld));
        }
    }

    #[test]
    fn test_random_website_deterministic() {
        let source = SequenceSource::constant(0.0);
        assert_eq!(random_website(&source).unwrap(), "https://www.!!!!!!!!.com");
    }

    #[test]
    fn test_label_spans_printable_ascii() {
        let source = SequenceSource::constant(0.9999);
        assert_eq!(random_website(&source).unwrap(), "https://www.~~~~~~~~.info");

        let seeded = RngSource::seeded(5);
        let non_lowercase = (0..50).any(|_| {
            let url = random_website(&seeded).unwrap();
            url[WEBSITE_SCHEME.len()..][..WEBSITE_LABEL_LENGTH]
                .chars()
                .any(|c| !c.is_ascii_lowercase())
        });
        assert!(non_lowercase);
    }
}
