use serde::{Deserialize, Serialize};

use kinesio_core::{ResultRecord, Session, SessionMeta, Strength};

pub mod json;
pub mod latin1;
pub mod report;
pub mod spreadsheet;

pub use report::ReportOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub meta: SessionMeta,
    pub subject: String,
    pub records: Vec<ResultRecord>,
    pub stats: ReportStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: u32,
    pub weak: u32,
    pub neutral: u32,
    pub strong: u32,
}

impl SessionReport {
    pub fn new(meta: SessionMeta, subject: String, records: Vec<ResultRecord>) -> Self {
        let stats = ReportStats::from_records(&records);
        Self {
            meta,
            subject,
            records,
            stats,
        }
    }

    pub fn from_session(session: &Session) -> Self {
        let subject = session.subject().name().unwrap_or_default().to_string();
        Self::new(
            session.meta().clone(),
            subject,
            session.log().records().to_vec(),
        )
    }

    pub fn human_summary(&self) -> String {
        if self.stats.total == 0 {
            return format!("No items tested for {}.", self.subject);
        }
        format!(
            "{total} item(s) tested for {subject}.\n{strong} tested strong, {neutral} neutral, {weak} weak.",
            total = self.stats.total,
            subject = self.subject,
            strong = self.stats.strong,
            neutral = self.stats.neutral,
            weak = self.stats.weak,
        )
    }
}

impl ReportStats {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        let mut stats = ReportStats {
            total: 0,
            weak: 0,
            neutral: 0,
            strong: 0,
        };

        for record in records {
            stats.total = stats.total.saturating_add(1);
            match record.interpretation.strength() {
                Strength::Weak => stats.weak = stats.weak.saturating_add(1),
                Strength::Neutral => stats.neutral = stats.neutral.saturating_add(1),
                Strength::Strong => stats.strong = stats.strong.saturating_add(1),
            }
        }

        stats
    }
}
