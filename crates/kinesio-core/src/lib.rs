pub mod config;
pub mod error;
pub mod interpret;
pub mod scoring;
pub mod session;
pub mod types;

pub use config::{Config, ConfigPaths};
pub use error::CoreError;
pub use interpret::{interpret, Interpretation, Strength};
pub use scoring::{score, ScoreOutcome};
pub use session::{ResultLog, Session, Subject};
pub use types::{ResultRecord, SessionMeta};
