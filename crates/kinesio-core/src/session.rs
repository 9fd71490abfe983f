//! One interactive session: the subject name, set exactly once, and the
//! append-only log of results produced while it runs.

use crate::error::CoreError;
use crate::interpret;
use crate::scoring;
use crate::types::{ResultRecord, SessionMeta};

/// Subject name state machine. The only legal transition is
/// `Unset -> Set`; a second set attempt is rejected.
#[derive(Debug, Clone, Default)]
pub enum Subject {
    #[default]
    Unset,
    Set(String),
}

impl Subject {
    pub fn name(&self) -> Option<&str> {
        match self {
            Subject::Unset => None,
            Subject::Set(name) => Some(name),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Subject::Set(_))
    }
}

/// Append-only ordered log of results. Records are never mutated,
/// reordered, or removed; identical inputs append identical records.
#[derive(Debug, Default)]
pub struct ResultLog {
    records: Vec<ResultRecord>,
}

impl ResultLog {
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }
}

#[derive(Debug, Default)]
pub struct Session {
    meta: SessionMeta,
    subject: Subject,
    log: ResultLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta(&self) -> &SessionMeta {
        &self.meta
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    /// Sets the subject name for the session. Fails with `MissingInput`
    /// on an empty name and with `SubjectLocked` once a name is set.
    pub fn set_subject(&mut self, name: &str) -> Result<(), CoreError> {
        if self.subject.is_set() {
            return Err(CoreError::SubjectLocked);
        }
        if name.is_empty() {
            return Err(CoreError::MissingInput("subject name"));
        }
        self.subject = Subject::Set(name.to_string());
        Ok(())
    }

    /// Evaluates one test without a timing note.
    pub fn evaluate(&mut self, intention: &str, item: &str) -> Result<ResultRecord, CoreError> {
        self.evaluate_timed(intention, item, "")
    }

    /// Evaluates one test: validates inputs, scores, classifies, and
    /// appends the record. On any failure nothing is appended and the
    /// scorer is not called; the session stays usable.
    pub fn evaluate_timed(
        &mut self,
        intention: &str,
        item: &str,
        timing: &str,
    ) -> Result<ResultRecord, CoreError> {
        let subject = self
            .subject
            .name()
            .ok_or(CoreError::MissingInput("subject name"))?;
        if intention.is_empty() {
            return Err(CoreError::MissingInput("intention"));
        }
        if item.is_empty() {
            return Err(CoreError::MissingInput("item"));
        }

        let outcome = scoring::score(subject, intention, item, timing);
        let interpretation = interpret::interpret(outcome.score)?;
        let record = ResultRecord {
            subject: subject.to_string(),
            intention: intention.to_string(),
            item: item.to_string(),
            timing: timing.to_string(),
            score: outcome.score,
            interpretation,
            digest: outcome.digest,
        };
        self.log.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::Interpretation;

    #[test]
    fn subject_set_exactly_once() {
        let mut session = Session::new();
        assert!(!session.subject().is_set());
        session.set_subject("Alice").unwrap();
        assert_eq!(session.subject().name(), Some("Alice"));
        assert!(matches!(
            session.set_subject("Mallory"),
            Err(CoreError::SubjectLocked)
        ));
        assert_eq!(session.subject().name(), Some("Alice"));
    }

    #[test]
    fn empty_subject_rejected() {
        let mut session = Session::new();
        assert!(matches!(
            session.set_subject(""),
            Err(CoreError::MissingInput("subject name"))
        ));
        assert!(!session.subject().is_set());
    }

    #[test]
    fn evaluate_appends_in_order() {
        let mut session = Session::new();
        session.set_subject("Alice").unwrap();
        session.evaluate("feel energetic", "banana").unwrap();
        session.evaluate("feel energetic", "egg").unwrap();
        let records = session.log().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item, "banana");
        assert_eq!(records[1].item, "egg");
    }

    #[test]
    fn evaluate_is_deterministic_and_duplicates_append() {
        let mut session = Session::new();
        session.set_subject("Alice").unwrap();
        let first = session.evaluate("feel energetic", "banana").unwrap();
        let second = session.evaluate("feel energetic", "banana").unwrap();
        assert_eq!(first.score, 85);
        assert_eq!(first.interpretation, Interpretation::Beneficial);
        assert_eq!(first.score, second.score);
        assert_eq!(first.digest, second.digest);
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn failed_evaluation_leaves_log_unchanged() {
        let mut session = Session::new();

        // No subject yet.
        assert!(matches!(
            session.evaluate("feel energetic", "banana"),
            Err(CoreError::MissingInput("subject name"))
        ));
        assert!(session.log().is_empty());

        session.set_subject("Alice").unwrap();
        assert!(matches!(
            session.evaluate("", "banana"),
            Err(CoreError::MissingInput("intention"))
        ));
        assert!(matches!(
            session.evaluate("feel energetic", ""),
            Err(CoreError::MissingInput("item"))
        ));
        assert!(session.log().is_empty());

        session.evaluate("feel energetic", "banana").unwrap();
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn timing_note_reaches_record_and_seed() {
        let mut session = Session::new();
        session.set_subject("Alice").unwrap();
        let untimed = session.evaluate("feel energetic", "banana").unwrap();
        let timed = session
            .evaluate_timed("feel energetic", "banana", "at breakfast")
            .unwrap();
        assert_eq!(untimed.timing, "");
        assert_eq!(timed.timing, "at breakfast");
        assert_eq!(timed.score, 74);
        assert_ne!(untimed.digest, timed.digest);
    }
}
