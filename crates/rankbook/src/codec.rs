//! Reversible masking for stored credentials.
//!
//! **This is not encryption.** Every character is shifted by a fixed offset
//! within the 0–255 code point range, so anyone holding the ledger file can
//! recover the original text. It only keeps credentials from being readable at
//! a glance (for example while screen-sharing). The transform is kept exactly
//! as-is so that existing ledger files stay readable.

use crate::error::{Error, Result};

/// Fixed offset applied to every code point.
pub const SHIFT: u8 = 3;

/// Mask `text` for storage.
///
/// Fails on characters outside U+0000..=U+00FF, which the transform cannot
/// round-trip.
pub fn encode(text: &str) -> Result<String> {
    text.chars()
        .map(|ch| shift(ch, |b| b.wrapping_add(SHIFT)))
        .collect()
}

/// Recover text previously produced by [`encode`].
pub fn decode(text: &str) -> Result<String> {
    text.chars()
        .map(|ch| shift(ch, |b| b.wrapping_sub(SHIFT)))
        .collect()
}

fn shift(ch: char, op: impl Fn(u8) -> u8) -> Result<char> {
    let byte = u8::try_from(ch).map_err(|_| Error::Unmaskable {
        ch,
        code: ch as u32,
    })?;
    Ok(char::from(op(byte)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_shifts_by_three() {
        assert_eq!(encode("abc").unwrap(), "def");
        assert_eq!(encode("xyz").unwrap(), "{|}");
    }

    #[test]
    fn test_round_trip_full_range() {
        let all: String = (0u8..=255).map(char::from).collect();
        let masked = encode(&all).unwrap();
        assert_ne!(masked, all);
        assert_eq!(decode(&masked).unwrap(), all);
    }

    #[test]
    fn test_wraps_at_range_end() {
        assert_eq!(encode("\u{FF}").unwrap(), "\u{2}");
        assert_eq!(decode("\u{0}").unwrap(), "\u{FD}");
    }

    #[test]
    fn test_round_trip_latin1_password() {
        let password = "Pässwörd#123!";
        assert_eq!(decode(&encode(password).unwrap()).unwrap(), password);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_rejects_characters_outside_range() {
        let err = encode("비밀번호").unwrap_err();
        assert!(matches!(err, Error::Unmaskable { code: 0xBE44, .. }));
        assert!(decode("€").is_err());
    }
}
