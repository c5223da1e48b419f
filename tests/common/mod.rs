mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from imgcheck for tests
pub use imgcheck::{
    AnalysisReport, AnalysisRequest, Analyzer, DetailLevel, Locale, MockAnalyzer, Profile,
    ReportStatus, ReviewError, ReviewPhase, ReviewState,
};
