// crates/framematch-net/src/error.rs

use std::path::PathBuf;

/// Anything that stops a structurally valid response from reaching the
/// controller. Shown to users only as a generic message.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("cannot open {} for upload: {source}", path.display())]
    OpenFile {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("HTTP {status}: response is not a detection payload: {source}")]
    Malformed {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
