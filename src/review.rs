//! Review panel state and its transitions.
//!
//! Every event is a consuming function from one `ReviewState` to the next.
//! Front ends own the state value and feed it events; nothing here touches
//! timers or widgets.

use std::path::PathBuf;

use crate::error::{Result, ReviewError};
use crate::intake::PickedImage;
use crate::models::{AnalysisReport, Profile};

/// Tag issued for every selection, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(u64);

impl SelectionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Reference to the displayable preview of a selection.
///
/// Valid for as long as its selection is current. Nothing is released when a
/// selection is replaced; the old reference simply stops being used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRef {
    pub selection: SelectionId,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub id: SelectionId,
    pub path: PathBuf,
    pub file_name: String,
    pub dimensions: Option<(u32, u32)>,
    pub preview: PreviewRef,
}

/// An analysis in flight, tagged with the selection it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub selection: SelectionId,
    pub path: PathBuf,
    pub profile: Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPhase {
    Empty,
    Selected,
    Analyzing,
    Reported,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    selection: Option<ImageSelection>,
    report: Option<AnalysisReport>,
    pending: Option<AnalysisRequest>,
    failure: Option<ReviewError>,
    next_id: u64,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&ImageSelection> {
        self.selection.as_ref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn pending(&self) -> Option<&AnalysisRequest> {
        self.pending.as_ref()
    }

    /// Error from the last analysis, if it failed
    pub fn failure(&self) -> Option<&ReviewError> {
        self.failure.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the analyze control should be enabled
    pub fn can_analyze(&self) -> bool {
        self.selection.is_some() && self.pending.is_none()
    }

    pub fn phase(&self) -> ReviewPhase {
        match (&self.selection, &self.pending, &self.report) {
            (None, _, _) => ReviewPhase::Empty,
            (Some(_), Some(_), _) => ReviewPhase::Analyzing,
            (Some(_), None, Some(_)) => ReviewPhase::Reported,
            (Some(_), None, None) => ReviewPhase::Selected,
        }
    }

    /// A file was chosen. Replaces the selection, drops any report and
    /// abandons a pending analysis.
    pub fn select(mut self, picked: PickedImage) -> Self {
        self.next_id += 1;
        let id = SelectionId(self.next_id);

        if let Some(abandoned) = self.pending.take() {
            tracing::info!(
                selection = abandoned.selection.value(),
                "selection changed, abandoning pending analysis"
            );
        }

        tracing::info!(selection = id.value(), file = %picked.file_name, "image selected");

        self.selection = Some(ImageSelection {
            id,
            preview: PreviewRef {
                selection: id,
                path: picked.path.clone(),
            },
            path: picked.path,
            file_name: picked.file_name,
            dimensions: picked.dimensions,
        });
        self.report = None;
        self.failure = None;
        self
    }

    /// The analyze control was activated.
    ///
    /// Returns the request to hand to an analyzer, or `None` (and an
    /// unchanged state) when nothing is selected or an analysis is already
    /// running.
    pub fn begin_analysis(mut self, profile: Profile) -> (Self, Option<AnalysisRequest>) {
        let target = self
            .selection
            .as_ref()
            .filter(|_| self.pending.is_none())
            .map(|selection| (selection.id, selection.path.clone()));
        let Some((id, path)) = target else {
            return (self, None);
        };

        let request = AnalysisRequest {
            selection: id,
            path,
            profile,
        };
        tracing::info!(
            selection = request.selection.value(),
            locale = request.profile.locale.code(),
            "analysis started"
        );

        self.report = None;
        self.failure = None;
        self.pending = Some(request.clone());
        (self, Some(request))
    }

    /// An analyzer finished. Results for a request that is no longer
    /// pending are dropped.
    pub fn complete_analysis(mut self, request: &AnalysisRequest, outcome: Result<AnalysisReport>) -> Self {
        if self.pending.as_ref() != Some(request) {
            tracing::warn!(
                selection = request.selection.value(),
                "discarding stale analysis result"
            );
            return self;
        }

        self.pending = None;
        match outcome {
            Ok(report) => {
                tracing::info!(
                    selection = request.selection.value(),
                    issues = report.issues.len(),
                    "analysis finished"
                );
                self.report = Some(report);
            }
            Err(e) => {
                tracing::warn!(selection = request.selection.value(), error = %e, "analysis failed");
                self.failure = Some(e);
            }
        }
        self
    }
}
