//! Deterministic scoring of a test from its text fields.
//!
//! The seed template is a fixed contract: changing it changes every
//! score this tool has ever produced. The digest is exposed alongside
//! the score so a result can be audited by hand.

use sha2::{Digest, Sha256};

/// Outcome of scoring one test: the score and the digest it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    /// Derived score in `0..=99`.
    pub score: u8,
    /// Lowercase hex SHA-256 digest of the seed string.
    pub digest: String,
}

/// Scores one test deterministically.
///
/// The seed string is `"<subject> + [<intention>] + <item>"`, and iff
/// `timing` is non-empty, `" + <timing>"` is appended. The score is the
/// first 32 bits of the SHA-256 digest of the seed's UTF-8 bytes,
/// reduced modulo 100.
///
/// Any string inputs are accepted, including empty ones; required-field
/// validation belongs to the evaluation layer, not the scorer.
pub fn score(subject: &str, intention: &str, item: &str, timing: &str) -> ScoreOutcome {
    let mut seed = format!("{subject} + [{intention}] + {item}");
    if !timing.is_empty() {
        seed.push_str(" + ");
        seed.push_str(timing);
    }

    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    let hash = hasher.finalize();

    // The first four digest bytes are exactly the first eight hex
    // characters of the rendered digest, read big-endian.
    let prefix = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);
    let score = (prefix % 100) as u8;
    let digest = hex::encode(hash);

    ScoreOutcome { score, digest }
}
