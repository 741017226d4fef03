//! Character-sequence and composite string generators.

use crate::between::{draw_unit, random_between};
use crate::charset::CharRange;
use crate::error::{GeneratorError, RangeError, Result};
use crate::source::RandomSource;

/// Convert a character count into an inclusive upper bound for [`random_between`].
fn length_bound(length: usize) -> Result<i64> {
    i64::try_from(length).map_err(|_| RangeError::AboveMaximum { to: i64::MAX }.into())
}

/// Generate `length` characters, each drawn independently from `range`.
///
/// A zero length yields an empty string without validating `range`.
pub fn random_string<S: RandomSource + ?Sized>(
    length: usize,
    range: CharRange,
    source: &S,
) -> Result<String> {
    let mut result = String::with_capacity(length);
    for _ in 0..length {
        let code = random_between(i64::from(range.from), i64::from(range.to), source)?;
        // Bounds come from u32, so the drawn code fits in u32.
        let code = code as u32;
        let c = char::from_u32(code).ok_or(GeneratorError::InvalidCharCode(code))?;
        result.push(c);
    }
    Ok(result)
}

/// Generate `length` decimal digits.
pub fn random_numeric<S: RandomSource + ?Sized>(length: usize, source: &S) -> Result<String> {
    random_string(length, CharRange::DIGITS, source)
}

/// Two normalized weights for a lower/upper split.
///
/// The split itself is drawn separately; these draws only keep the number and
/// order of draws per call stable.
fn draw_split_weights<S: RandomSource + ?Sized>(source: &S) -> Result<(f64, f64)> {
    let first = draw_unit(source)?;
    let second = draw_unit(source)?;
    let total = first + second;
    if total == 0.0 {
        return Ok((0.5, 0.5));
    }
    Ok((first / total, second / total))
}

/// Generate `length` ASCII letters with a random lowercase/uppercase split.
pub fn random_alpha<S: RandomSource + ?Sized>(length: usize, source: &S) -> Result<String> {
    let _weights = draw_split_weights(source)?;

    let lower_len = random_between(0, length_bound(length)?, source)? as usize;
    let lower = random_string(lower_len, CharRange::LOWER_ALPHA, source)?;
    let upper = random_string(length - lower_len, CharRange::UPPER_ALPHA, source)?;

    random_merge(&lower, &upper, source)
}

/// Generate `length` characters mixing letters and digits with a random split.
pub fn random_alpha_numeric<S: RandomSource + ?Sized>(
    length: usize,
    source: &S,
) -> Result<String> {
    let alpha_len = random_between(0, length_bound(length)?, source)? as usize;
    let alpha = random_alpha(alpha_len, source)?;
    let numeric = random_numeric(length - alpha_len, source)?;

    random_merge(&alpha, &numeric, source)
}

/// Concatenate `a` and `b` and shuffle the result uniformly (Fisher-Yates).
///
/// Every swap index is drawn through [`random_between`].
pub fn random_merge<S: RandomSource + ?Sized>(a: &str, b: &str, source: &S) -> Result<String> {
    let mut chars: Vec<char> = a.chars().chain(b.chars()).collect();

    for i in (1..chars.len()).rev() {
        let j = random_between(0, length_bound(i)?, source)? as usize;
        chars.swap(i, j);
    }

    Ok(chars.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, SequenceSource};

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_random_string_zero_length() {
        let source = SequenceSource::constant(0.5);
        assert_eq!(random_string(0, CharRange::default(), &source).unwrap(), "");
        // Bounds are not checked when nothing is drawn
        assert_eq!(
            random_string(0, CharRange::new(90, 10), &source).unwrap(),
            ""
        );
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_random_string_default_range() {
        let source = RngSource::seeded(42);
        let s = random_string(200, CharRange::default(), &source).unwrap();

        assert_eq!(s.chars().count(), 200);
        assert!(s.chars().all(|c| CharRange::ASCII_PRINTABLE.contains(c)));
    }

    #[test]
    fn test_random_string_maps_draws_to_codes() {
        // 0.0 -> 'a', 0.999 -> 'z'
        let source = SequenceSource::new(vec![0.0, 0.999]);
        let s = random_string(2, CharRange::LOWER_ALPHA, &source).unwrap();
        assert_eq!(s, "az");
    }

    #[test]
    fn test_random_string_inverted_range() {
        let source = SequenceSource::constant(0.5);
        let result = random_string(3, CharRange::new(90, 65), &source);
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidRange(RangeError::Inverted { .. }))
        ));
    }

    #[test]
    fn test_random_string_surrogate_code() {
        let source = SequenceSource::constant(0.0);
        let result = random_string(1, CharRange::new(0xD800, 0xD800), &source);
        assert_eq!(result, Err(GeneratorError::InvalidCharCode(0xD800)));
    }

    #[test]
    fn test_random_numeric() {
        let source = RngSource::seeded(42);
        let s = random_numeric(20, &source).unwrap();

        assert_eq!(s.len(), 20);
        assert!(s.chars().all(|c| ('0'..='9').contains(&c)));
    }

    #[test]
    fn test_random_alpha_lengths() {
        let source = RngSource::seeded(42);
        for length in [0, 1, 50] {
            let s = random_alpha(length, &source).unwrap();
            assert_eq!(s.chars().count(), length);
            assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_random_alpha_split_follows_split_draw() {
        // Two weight draws, then split draw 0.0 -> no lowercase letters.
        let source = SequenceSource::new(vec![0.9, 0.9, 0.0, 0.5]);
        let s = random_alpha(6, &source).unwrap();
        assert!(s.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_alpha_weight_draws_are_validated() {
        let source = SequenceSource::new(vec![0.5, 1.0]);
        assert_eq!(
            random_alpha(4, &source),
            Err(GeneratorError::InvalidRandomValue(1.0))
        );
    }

    #[test]
    fn test_random_alpha_numeric_lengths() {
        let source = RngSource::seeded(7);
        for length in [0, 1, 50] {
            let s = random_alpha_numeric(length, &source).unwrap();
            assert_eq!(s.chars().count(), length);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_random_merge_is_permutation() {
        let source = RngSource::seeded(42);
        for _ in 0..100 {
            let merged = random_merge("abc", "XYZ", &source).unwrap();
            assert_eq!(merged.len(), 6);
            assert_eq!(sorted(&merged), sorted("abcXYZ"));
        }
    }

    #[test]
    fn test_random_merge_keeps_duplicates() {
        let source = RngSource::seeded(3);
        let merged = random_merge("aab", "bb", &source).unwrap();
        assert_eq!(sorted(&merged), sorted("aabbb"));
    }

    #[test]
    fn test_random_merge_empty_inputs() {
        let source = SequenceSource::constant(0.5);
        assert_eq!(random_merge("", "", &source).unwrap(), "");
        assert_eq!(random_merge("x", "", &source).unwrap(), "x");
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_random_merge_reaches_every_position() {
        let source = RngSource::seeded(11);
        let mut positions = [false; 4];
        for _ in 0..500 {
            let merged = random_merge("a", "bcd", &source).unwrap();
            let pos = merged.find('a').unwrap();
            positions[pos] = true;
        }
        assert!(positions.iter().all(|p| *p));
    }
}
