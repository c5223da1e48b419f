use std::path::PathBuf;
use std::sync::Mutex;

use image::{ImageBuffer, Rgb};
use imgcheck::intake::{self, PickedImage};
use imgcheck::{AnalysisFuture, AnalysisReport, AnalysisRequest, Analyzer, ReviewError};
use tokio::sync::oneshot;
use tempfile::TempDir;

/// English minimal report issues, in display order
pub const ENGLISH_ISSUES: [&str; 2] = [
    "Contains partial nudity (suggest blurring)",
    "Caption includes hate-related term (‘xxx’) — replace or remove",
];

pub const ENGLISH_SUGGESTION: &str = "Blur the middle part and rephrase text to avoid hate speech.";

/// Bengali detailed report issues, in display order
pub const BENGALI_ISSUES: [&str; 2] = [
    "ছবিতে আংশিক নগ্নতা রয়েছে",
    "ক্যাপশনে ঘৃণাসূচক শব্দ (‘xxx’) ব্যবহার করা হয়েছে",
];

/// Writes a solid-colour 100x100 image named `name` into `dir`.
/// The format follows the file extension.
pub fn create_test_image(dir: &TempDir, name: &str, color: [u8; 3]) -> PathBuf {
    let img = ImageBuffer::from_fn(100, 100, |_, _| Rgb(color));
    let path = dir.path().join(name);
    img.save(&path).expect("Failed to save test image");
    path
}

/// Creates an image in a fresh temp dir and runs it through intake.
/// Returns both the picked image and the temp directory (which must be kept alive).
pub fn pick_test_image(name: &str) -> (PickedImage, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = create_test_image(&dir, name, [255, 0, 0]);
    let picked = intake::select_path(&path).expect("Test image should be selectable");
    (picked, dir)
}

/// Analyzer that always fails immediately
pub struct FailingAnalyzer;

impl Analyzer for FailingAnalyzer {
    fn analyze(&self, _request: &AnalysisRequest) -> AnalysisFuture {
        Box::pin(async { Err(ReviewError::Analysis("backend unavailable".to_string())) })
    }

    fn name(&self) -> &str {
        "Failing Analyzer"
    }
}

/// Analyzer that holds its report back until the test opens the gate.
/// Only the first run is gated; later runs complete immediately.
pub struct GatedAnalyzer {
    rx: Mutex<Option<oneshot::Receiver<()>>>,
}

impl GatedAnalyzer {
    /// Returns the analyzer and the sender that releases it
    pub fn new() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { rx: Mutex::new(Some(rx)) }, tx)
    }
}

impl Analyzer for GatedAnalyzer {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisFuture {
        let gate = self.rx.lock().expect("gate lock poisoned").take();
        let profile = request.profile;
        Box::pin(async move {
            if let Some(gate) = gate {
                if gate.await.is_err() {
                    return Err(ReviewError::Analysis("gate dropped".to_string()));
                }
            }
            Ok(AnalysisReport::canned(profile))
        })
    }

    fn name(&self) -> &str {
        "Gated Analyzer"
    }
}
