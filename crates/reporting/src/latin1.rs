//! Latin-1 encoding for the printable report.
//!
//! The report format can only carry single-byte characters. Encoding is
//! lossy by contract: anything outside Latin-1 becomes the substitute
//! character instead of failing the export.

use kinesio_core::CoreError;

pub const SUBSTITUTE: u8 = b'?';

/// Encodes `text` as Latin-1, replacing each character above U+00FF
/// with `substitute`.
pub fn encode_lossy(text: &str, substitute: u8) -> Vec<u8> {
    text.chars()
        .map(|ch| match u32::from(ch) {
            code @ 0..=0xFF => code as u8,
            _ => substitute,
        })
        .collect()
}

/// Pre-flight check: fails with `Encoding` on the first character that
/// the report encoding would substitute. Callers use this to warn
/// before exporting; the export itself never fails on content.
pub fn ensure_encodable(text: &str) -> Result<(), CoreError> {
    match text.chars().find(|ch| u32::from(*ch) > 0xFF) {
        Some(ch) => Err(CoreError::Encoding(ch)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode_lossy("Score: 85", SUBSTITUTE), b"Score: 85");
    }

    #[test]
    fn latin1_passes_through() {
        // U+00E9 is a single Latin-1 byte.
        assert_eq!(encode_lossy("café", SUBSTITUTE), b"caf\xe9");
    }

    #[test]
    fn wide_characters_are_substituted() {
        // The label dash U+2013 is outside Latin-1.
        assert_eq!(
            encode_lossy("Weak – Detrimental", SUBSTITUTE),
            b"Weak ? Detrimental"
        );
        assert_eq!(encode_lossy("水", b'#'), b"#");
    }

    #[test]
    fn ensure_encodable_reports_the_character() {
        assert!(ensure_encodable("plain text").is_ok());
        assert!(ensure_encodable("café").is_ok());
        assert!(matches!(
            ensure_encodable("Weak – Detrimental"),
            Err(CoreError::Encoding('–'))
        ));
    }
}
