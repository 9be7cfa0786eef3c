//! Lexical relevance scoring.
//!
//! Text is lower-cased and checked for two fixed phrase sets: terms that
//! indicate synthetic or manipulated media, and terms that indicate
//! legitimate coverage. Each phrase counts once if it occurs anywhere as a
//! substring, so `"really"` counts as `"real"` and `"deepfake video"` also
//! counts as `"fake video"`.
//!
//! ```text
//! confidence = deepfake_hits / (deepfake_hits + legitimacy_hits)
//! is_related = confidence > threshold
//! ```

use crate::types::Relevance;

/// Phrases indicating deepfake or manipulated-media content.
pub const DEEPFAKE_TERMS: &[&str] = &[
    "deepfake",
    "deep fake",
    "ai generated",
    "synthetic media",
    "face swap",
    "face-swap",
    "fake video",
    "manipulated video",
    "ai video",
    "generated video",
    "fake image",
    "manipulated image",
    "deep learning fake",
    "neural network fake",
    "gan generated",
];

/// Phrases indicating legitimate content.
pub const LEGITIMACY_TERMS: &[&str] = &[
    "official",
    "real",
    "authentic",
    "genuine",
    "original",
    "verified",
    "confirmed",
    "legitimate",
    "actual",
];

/// Default threshold above which a result counts as related.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Classifies text as deepfake-related. Pure and stateless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceScorer {
    threshold: f64,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RelevanceScorer {
    /// Create a scorer flagging text whose confidence is strictly above
    /// `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Score `text`.
    pub fn score(&self, text: &str) -> Relevance {
        let lowered = text.to_lowercase();
        let deepfake_hits = count_hits(&lowered, DEEPFAKE_TERMS);
        let legitimacy_hits = count_hits(&lowered, LEGITIMACY_TERMS);

        let total = deepfake_hits + legitimacy_hits;
        if total == 0 {
            return Relevance::NONE;
        }

        let confidence = deepfake_hits as f64 / total as f64;
        Relevance {
            is_related: confidence > self.threshold,
            confidence,
        }
    }
}

fn count_hits(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text.contains(*term)).count()
}
