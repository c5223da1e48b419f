use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::Result;
use crate::models::AnalysisReport;
use crate::review::AnalysisRequest;

/// Default wait before the mock report appears
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

pub type AnalysisFuture = Pin<Box<dyn Future<Output = Result<AnalysisReport>> + Send + 'static>>;

/// Produces a report for a request after some interval.
///
/// Object safe so front ends can hold an `Arc<dyn Analyzer>` and tests can
/// swap in an implementation they control.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisFuture;

    /// Human-readable name for this analyzer (used in log output)
    fn name(&self) -> &str;
}

/// Waits a fixed latency, then hands back the canned report for the
/// request's profile. The image itself is never read.
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    pub latency: Duration,
}

impl MockAnalyzer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisFuture {
        let latency = self.latency;
        let profile = request.profile;
        Box::pin(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            Ok(AnalysisReport::canned(profile))
        })
    }

    fn name(&self) -> &str {
        "Mock Analyzer"
    }
}
