// crates/framematch-core/src/error.rs

use std::path::PathBuf;

/// Could not produce a preview reference for a file.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File selection failed before the slot could be filled.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("cannot open {}: {source}", path.display())]
    Metadata {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a regular file", path.display())]
    NotAFile { path: PathBuf },
    #[error(transparent)]
    Preview(#[from] PreviewError),
}

/// Rejected before anything reaches the network.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please upload both an image and a video.")]
    Validation,
}
