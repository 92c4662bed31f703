// crates/framematch-core/src/commands.rs
//
// Every user action on the form is expressed as a FormCommand.
// Panels emit these during the UI pass; app.rs applies them afterwards, so
// no state (and no preview reference) changes while a frame is being drawn.

use std::path::PathBuf;

use crate::media_types::{DroppedFile, MediaKind};

#[derive(Debug, Clone)]
pub enum FormCommand {
    // ── Intake ───────────────────────────────────────────────────────────────
    /// Picker returned a file (cancelled dialogs emit nothing).
    SelectFile { kind: MediaKind, path: PathBuf },
    /// OS drop landed on the `kind` zone.
    DropFiles { kind: MediaKind, files: Vec<DroppedFile> },
    ClearFile(MediaKind),

    // ── Upload ───────────────────────────────────────────────────────────────
    Submit,

    // ── Results ──────────────────────────────────────────────────────────────
    /// Open the annotated output video in the system browser.
    OpenVideo(String),

    // ── Settings ─────────────────────────────────────────────────────────────
    SetEndpoint(String),
}
