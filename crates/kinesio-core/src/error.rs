use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    #[error("batch table schema: {0}")]
    Schema(String),
    #[error("score {0} is outside the classifier domain 0..=99")]
    Domain(u8),
    #[error("character {0:?} cannot be represented in the report encoding")]
    Encoding(char),
    #[error("subject name is already set for this session")]
    SubjectLocked,
}
