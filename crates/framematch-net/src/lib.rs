// crates/framematch-net/src/lib.rs
//
// No egui dependency; communicates with framematch-ui via channels only.

pub mod client;
pub mod error;
pub mod multipart;
pub mod progress;
pub mod worker;

// Re-export the main public API so framematch-ui imports are simple.
pub use client::{ClientConfig, DetectionClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::TransportError;
pub use worker::UploadWorker;
