pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod intake;
pub mod labels;
pub mod logging;
pub mod models;
pub mod render;
pub mod review;
pub mod session;

pub use analyzer::{AnalysisFuture, Analyzer, MockAnalyzer, DEFAULT_LATENCY};
pub use config::{ConfigOverrides, ReviewConfig};
pub use error::ReviewError;
pub use labels::Labels;
pub use models::{AnalysisReport, DetailLevel, IssueDetail, Locale, Profile, ReportStatus};
pub use review::{AnalysisRequest, ImageSelection, ReviewPhase, ReviewState, SelectionId};
pub use session::ReviewSession;

#[cfg(feature = "gui")]
pub mod gui;
