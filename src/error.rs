use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the review core.
///
/// Kept `Clone` so results can travel through GUI messages.
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("failed to read config file {}: {reason}", .path.display())]
    ConfigRead { path: PathBuf, reason: String },

    #[error("invalid config file {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("analysis failed: {0}")]
    Analysis(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
