use std::path::Path;
use std::sync::Arc;

use crate::analyzer::{AnalysisFuture, Analyzer};
use crate::error::Result;
use crate::intake;
use crate::models::{AnalysisReport, Profile};
use crate::review::{AnalysisRequest, ReviewState};

/// Drives the review flow without a window: pick a file, analyze, read the
/// report
pub struct ReviewSession {
    state: ReviewState,
    analyzer: Arc<dyn Analyzer>,
    profile: Profile,
}

impl ReviewSession {
    pub fn new(analyzer: Arc<dyn Analyzer>, profile: Profile) -> Self {
        Self {
            state: ReviewState::new(),
            analyzer,
            profile,
        }
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    /// Select a file. Returns `false` (state untouched) if the path is not a file.
    pub fn select(&mut self, path: impl AsRef<Path>) -> bool {
        let Some(picked) = intake::select_path(path) else {
            return false;
        };
        self.state = std::mem::take(&mut self.state).select(picked);
        true
    }

    /// Start an analysis and hand back its request and the analyzer's
    /// future. `None` when nothing is selected or a run is already pending.
    ///
    /// The caller drives the future and passes its outcome to `finish`;
    /// selections made in between make the outcome stale.
    pub fn start(&mut self) -> Option<(AnalysisRequest, AnalysisFuture)> {
        let (state, request) = std::mem::take(&mut self.state).begin_analysis(self.profile);
        self.state = state;
        let request = request?;

        tracing::debug!(analyzer = self.analyzer.name(), "waiting for analyzer");
        let pending = self.analyzer.analyze(&request);
        Some((request, pending))
    }

    /// Apply the outcome of a run started with `start`
    pub fn finish(&mut self, request: &AnalysisRequest, outcome: Result<AnalysisReport>) {
        self.state = std::mem::take(&mut self.state).complete_analysis(request, outcome);
    }

    /// Run one analysis to completion.
    ///
    /// `Ok(None)` means nothing was selected.
    pub async fn analyze(&mut self) -> Result<Option<&AnalysisReport>> {
        let Some((request, pending)) = self.start() else {
            return Ok(None);
        };
        let outcome = pending.await;
        self.finish(&request, outcome);

        if let Some(e) = self.state.failure() {
            return Err(e.clone());
        }
        Ok(self.state.report())
    }
}
