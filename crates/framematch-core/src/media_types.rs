// crates/framematch-core/src/media_types.rs
//
// Types that describe the files a user picks and the messages that flow
// across the channel between framematch-net and framematch-ui.
// Plain data only: no egui, no ureq.

use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::detection::DetectionResponse;

/// The two file slots on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "avi", "webm", "m4v"];

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Image, MediaKind::Video];

    /// Slot index, used for fixed-size per-kind arrays.
    pub fn index(self) -> usize {
        match self {
            MediaKind::Image => 0,
            MediaKind::Video => 1,
        }
    }

    /// Multipart field name expected by the detection endpoint.
    pub fn field_name(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "Reference image",
            MediaKind::Video => "Video",
        }
    }

    /// Picker filter. Advisory only: intake never rejects a file whose
    /// extension is not in this list.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Video => VIDEO_EXTENSIONS,
        }
    }

    /// True when `path`'s extension is one this kind normally accepts.
    pub fn accepts(self, path: &Path) -> bool {
        extension_of(path)
            .map(|ext| self.extensions().contains(&ext.as_str()))
            .unwrap_or(false)
    }

    /// Best-effort kind detection from an extension.
    pub fn from_path(path: &Path) -> Option<MediaKind> {
        MediaKind::ALL.into_iter().find(|k| k.accepts(path))
    }

    /// Content type sent with the multipart part. Unknown extensions fall
    /// back to `application/octet-stream`.
    pub fn content_type(path: &Path) -> &'static str {
        match extension_of(path).as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png")                => "image/png",
            Some("webp")               => "image/webp",
            Some("bmp")                => "image/bmp",
            Some("gif")                => "image/gif",
            Some("mp4") | Some("m4v")  => "video/mp4",
            Some("mov")                => "video/quicktime",
            Some("mkv")                => "video/x-matroska",
            Some("avi")                => "video/x-msvideo",
            Some("webm")               => "video/webm",
            _                          => "application/octet-stream",
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase())
}

/// Opaque handle that lets the UI render a selected file before upload.
/// Each acquisition produces a fresh, never-reused URI.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PreviewRef(String);

impl PreviewRef {
    pub fn new(kind: MediaKind, path: &Path) -> Self {
        let ext = extension_of(path).unwrap_or_else(|| "bin".into());
        Self(format!("bytes://preview/{}/{}.{ext}", kind.field_name(), Uuid::new_v4()))
    }

    pub fn uri(&self) -> &str {
        &self.0
    }
}

/// A file occupying one of the form's slots.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub kind:       MediaKind,
    pub path:       PathBuf,
    pub name:       String,
    pub size_bytes: u64,
    pub preview:    PreviewRef,
}

/// One entry of an OS drag-and-drop transfer, stripped of any UI types.
#[derive(Clone, Debug, Default)]
pub struct DroppedFile {
    pub path: Option<PathBuf>,
    pub name: String,
}

/// A file part of an upload job.
#[derive(Clone, Debug)]
pub struct FilePart {
    pub path: PathBuf,
    pub name: String,
}

impl From<&SelectedFile> for FilePart {
    fn from(f: &SelectedFile) -> Self {
        Self { path: f.path.clone(), name: f.name.clone() }
    }
}

/// Everything the upload thread needs for one submission.
#[derive(Clone, Debug)]
pub struct UploadJob {
    pub job_id: Uuid,
    pub image:  FilePart,
    pub video:  FilePart,
}

/// Transport-level failure as seen by the controller. The detail is for
/// logs only and never reaches the user.
#[derive(Clone, Debug)]
pub struct TransportFailure {
    pub detail: String,
}

/// Results sent from the upload thread to the UI.
#[derive(Debug)]
pub enum UploadEvent {
    Progress { job_id: Uuid, sent: u64, total: u64 },
    Finished { job_id: Uuid, outcome: Result<DetectionResponse, TransportFailure> },
}

impl UploadEvent {
    pub fn job_id(&self) -> Uuid {
        match self {
            UploadEvent::Progress { job_id, .. } | UploadEvent::Finished { job_id, .. } => *job_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_is_case_insensitive() {
        assert!(MediaKind::Image.accepts(Path::new("face.JPG")));
        assert!(MediaKind::Video.accepts(Path::new("clip.Mp4")));
        assert!(!MediaKind::Image.accepts(Path::new("clip.mp4")));
        assert!(!MediaKind::Video.accepts(Path::new("noext")));
    }

    #[test]
    fn from_path_picks_matching_kind() {
        assert_eq!(MediaKind::from_path(Path::new("a.png")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("a.webm")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("a.txt")), None);
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(MediaKind::content_type(Path::new("x.xyz")), "application/octet-stream");
        assert_eq!(MediaKind::content_type(Path::new("x.jpeg")), "image/jpeg");
    }

    #[test]
    fn preview_refs_are_unique() {
        let a = PreviewRef::new(MediaKind::Image, Path::new("a.png"));
        let b = PreviewRef::new(MediaKind::Image, Path::new("a.png"));
        assert_ne!(a, b);
        assert!(a.uri().starts_with("bytes://preview/image/"));
        assert!(a.uri().ends_with(".png"));
    }
}
