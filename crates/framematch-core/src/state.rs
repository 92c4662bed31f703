// crates/framematch-core/src/state.rs
// Runtime UI state. No egui, no network handles.

use crate::detection::DetectionResult;

/// Lifecycle of one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    Idle,
    /// `percent` is 0–100 and only meaningful in this variant.
    Uploading { percent: u8 },
    Succeeded,
    Failed { message: String },
}

impl Default for UploadState {
    fn default() -> Self {
        UploadState::Idle
    }
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading { .. })
    }

    pub fn percent(&self) -> Option<u8> {
        match self {
            UploadState::Uploading { percent } => Some(*percent),
            _ => None,
        }
    }
}

/// Cross-component state held by the page shell. Replaced wholesale by the
/// next successful submission; failures leave it untouched.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub result:          Option<DetectionResult>,
    /// Absolute URL of the annotated output video.
    pub video_url:       Option<String>,
    /// Server's one-line summary.
    pub summary:         Option<String>,
    /// Endpoint the result came from; relative frame images resolve
    /// against this, not against whatever the endpoint is now.
    pub base_url:        String,
    /// Gates the result panel.
    pub processing_done: bool,
}
