//! Random suffix generation for unique resource names.
//!
//! Suffixes are drawn from the operating system CSPRNG. Each character is
//! chosen uniformly from the charset by rejection sampling, so charsets whose
//! size does not divide `2^32` carry no modulo bias.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{Error, Result};

/// Lowercase ASCII letters and digits, safe for DNS labels.
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated uid.
pub const DEFAULT_UID_LENGTH: usize = 4;

/// A source of uniformly distributed random words.
///
/// Implementations must report failure rather than fall back to a weaker
/// source.
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource: Send + Sync {
    /// Returns the next random `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the source cannot produce randomness.
    fn next_u32(&self) -> Result<u32>;
}

/// Entropy from the operating system random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_u32(&self) -> Result<u32> {
        OsRng.try_next_u32().map_err(|e| Error::Entropy {
            reason: e.to_string(),
        })
    }
}

/// Returns a string of `length` characters drawn uniformly from `charset`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `charset` is empty (or larger than
/// `u32::MAX` characters) while `length` is non-zero, and
/// [`Error::Entropy`] if the OS random source fails.
///
/// # Examples
///
/// ```
/// use e2e_options::random::string_with_charset;
///
/// let s = string_with_charset(8, "01").unwrap();
/// assert_eq!(s.len(), 8);
/// assert!(s.chars().all(|c| c == '0' || c == '1'));
/// ```
pub fn string_with_charset(length: usize, charset: &str) -> Result<String> {
    string_with_charset_from(&OsEntropy, length, charset)
}

/// Like [`string_with_charset`], reading randomness from `source`.
///
/// # Errors
///
/// See [`string_with_charset`]; source errors are propagated unchanged.
pub fn string_with_charset_from(
    source: &dyn EntropySource,
    length: usize,
    charset: &str,
) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }

    let symbols: Vec<char> = charset.chars().collect();
    let bound = u32::try_from(symbols.len())
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| Error::Validation {
            field: "charset".into(),
            message: format!(
                "must contain between 1 and {} characters, got {}",
                u32::MAX,
                symbols.len()
            ),
        })?;

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let index = uniform_below(source, bound)?;
        out.push(symbols[index as usize]);
    }
    Ok(out)
}

/// Returns a suffix of [`DEFAULT_UID_LENGTH`] characters from [`DEFAULT_CHARSET`].
///
/// # Errors
///
/// Returns [`Error::Entropy`] if the random source fails.
pub fn random_suffix(source: &dyn EntropySource) -> Result<String> {
    string_with_charset_from(source, DEFAULT_UID_LENGTH, DEFAULT_CHARSET)
}

// Rejects draws from the incomplete top bucket of the u32 range.
fn uniform_below(source: &dyn EntropySource, bound: u32) -> Result<u32> {
    let zone = u32::MAX - (u32::MAX % bound);
    loop {
        let draw = source.next_u32()?;
        if draw < zone {
            return Ok(draw % bound);
        }
    }
}


#[cfg(test)]
mod proptests;
