// crates/framematch-core/src/detection.rs
//
// Wire format of the detection endpoint's response, and the result type the
// page shell keeps after a successful submission.

use serde::{Deserialize, Serialize};

/// Message the backend uses for its single "nothing found" entry.
pub const NO_MATCH_SENTINEL: &str = "No matches found";

/// One reported frame-level match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionEntry {
    /// Absent on the sentinel entry.
    #[serde(default)]
    pub frame:      u64,
    #[serde(default)]
    pub similarity: Option<f32>,
    #[serde(default)]
    pub message:    String,
    /// Path of the annotated frame, usually relative to the service origin.
    #[serde(default, rename = "imageUrl")]
    pub image_url:  Option<String>,
}

impl DetectionEntry {
    pub fn is_sentinel(&self) -> bool {
        self.message == NO_MATCH_SENTINEL
    }
}

/// Body of `POST /upload/`. `detections` is present when `success` is true,
/// `error` when it is false.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub success:    bool,
    #[serde(default)]
    pub error:      Option<String>,
    #[serde(default)]
    pub detections: Option<Vec<DetectionEntry>>,
    /// Annotated output video, relative to the service origin.
    #[serde(default, rename = "videoUrl")]
    pub video_url:  Option<String>,
    /// One-line summary such as "2 face(s) detected".
    #[serde(default)]
    pub message:    Option<String>,
}

impl DetectionResponse {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}

/// Ordered detection entries from one successful submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionResult {
    entries: Vec<DetectionEntry>,
}

impl DetectionResult {
    pub fn new(entries: Vec<DetectionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DetectionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the only entry is the backend's "no matches" sentinel.
    pub fn is_no_match(&self) -> bool {
        matches!(self.entries.as_slice(), [only] if only.is_sentinel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_payload() {
        let body = r#"{
            "success": true,
            "videoUrl": "/output/abc_processed.mp4",
            "message": "2 face(s) detected",
            "detections": [
                {"frame": 5, "similarity": 0.95, "message": "match", "imageUrl": "/f5.jpg"},
                {"frame": 9, "similarity": 0.62, "message": "match"}
            ]
        }"#;
        let resp = DetectionResponse::from_json(body).unwrap();
        assert!(resp.success);
        let d = resp.detections.unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d[0].frame, 5);
        assert_eq!(d[0].image_url.as_deref(), Some("/f5.jpg"));
        assert_eq!(d[1].image_url, None);
        assert_eq!(resp.video_url.as_deref(), Some("/output/abc_processed.mp4"));
    }

    #[test]
    fn parses_failure_payload() {
        let resp = DetectionResponse::from_json(r#"{"success": false, "error": "low quality"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("low quality"));
        assert!(resp.detections.is_none());
    }

    #[test]
    fn sentinel_entry_needs_no_frame_or_score() {
        let resp = DetectionResponse::from_json(
            r#"{"success": true, "detections": [{"message": "No matches found"}]}"#,
        ).unwrap();
        let result = DetectionResult::new(resp.detections.unwrap());
        assert!(result.is_no_match());
    }

    #[test]
    fn sentinel_among_real_entries_is_not_no_match() {
        let real = DetectionEntry {
            frame: 1, similarity: Some(0.9), message: "match".into(), image_url: None,
        };
        let sentinel = DetectionEntry {
            frame: 0, similarity: None, message: NO_MATCH_SENTINEL.into(), image_url: None,
        };
        assert!(!DetectionResult::new(vec![real, sentinel]).is_no_match());
        assert!(!DetectionResult::default().is_no_match());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(DetectionResponse::from_json("<html>502</html>").is_err());
    }
}
