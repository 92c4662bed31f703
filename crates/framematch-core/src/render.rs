// crates/framematch-core/src/render.rs
//
// Pure view-model for the result panel. framematch-ui draws whatever this
// returns; nothing here touches egui or mutates its input.

use crate::detection::DetectionResult;
use crate::helpers::url::resolve;

/// Scores strictly above this are graded high confidence. There is no "low"
/// grade: everything else is moderate.
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceGrade {
    High,
    Moderate,
}

impl ConfidenceGrade {
    pub fn from_similarity(similarity: Option<f32>) -> Self {
        match similarity {
            Some(s) if s > HIGH_CONFIDENCE_THRESHOLD => ConfidenceGrade::High,
            _ => ConfidenceGrade::Moderate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceGrade::High     => "High confidence",
            ConfidenceGrade::Moderate => "Moderate confidence",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchCard {
    pub frame:      u64,
    pub similarity: Option<f32>,
    pub grade:      ConfidenceGrade,
    pub message:    String,
    /// Absolute URL of the annotated frame.
    pub image_url:  Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    /// Nothing has been returned yet (or an empty list came back).
    NoResultsYet,
    /// The backend explicitly reported no match.
    NoMatch,
    Cards(Vec<MatchCard>),
}

/// Map a detection result onto what the panel should show. Card order is
/// the order the service sent; nothing is re-sorted.
pub fn render(result: Option<&DetectionResult>, base_url: &str) -> ResultView {
    let Some(result) = result.filter(|r| !r.is_empty()) else {
        return ResultView::NoResultsYet;
    };
    if result.is_no_match() {
        return ResultView::NoMatch;
    }

    let cards = result
        .entries()
        .iter()
        .map(|e| MatchCard {
            frame:      e.frame,
            similarity: e.similarity,
            grade:      ConfidenceGrade::from_similarity(e.similarity),
            message:    e.message.clone(),
            image_url:  e.image_url.as_deref().map(|p| resolve(base_url, p)),
        })
        .collect();
    ResultView::Cards(cards)
}

/// "95%" style label for a similarity score.
pub fn format_similarity(similarity: Option<f32>) -> String {
    match similarity {
        Some(s) => format!("{:.0}%", (s * 100.0).clamp(0.0, 100.0)),
        None    => "—".into(),
    }
}
