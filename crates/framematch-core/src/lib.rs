// crates/framematch-core/src/lib.rs
//
// Plain data and state machines for FrameMatch. No egui, no network;
// framematch-net and framematch-ui both build on this.

pub mod commands;
pub mod detection;
pub mod error;
pub mod helpers;
pub mod intake;
pub mod media_types;
pub mod notify;
pub mod preview;
pub mod render;
pub mod state;
pub mod upload;

pub use detection::{DetectionEntry, DetectionResponse, DetectionResult};
pub use media_types::{MediaKind, PreviewRef, SelectedFile, UploadEvent, UploadJob};
pub use state::{PageState, UploadState};
