use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::interpret::Interpretation;

/// One evaluated test. The derived fields (`score`, `interpretation`,
/// `digest`) are pure functions of the four text fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub subject: String,
    pub intention: String,
    pub item: String,
    /// Timing note; empty means absent.
    pub timing: String,
    pub score: u8,
    pub interpretation: Interpretation,
    pub digest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub session_id: Uuid,
    pub started_at: OffsetDateTime,
}

impl SessionMeta {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: OffsetDateTime::now_utc(),
        }
    }
}

impl Default for SessionMeta {
    fn default() -> Self {
        Self::new()
    }
}
