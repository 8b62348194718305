//! Concept and embedding types.

use serde::{Deserialize, Serialize};

/// An embedding vector.
///
/// The dimensionality is model-dependent and opaque to the pipeline;
/// all vectors within one invocation must share the same length.
pub type Embedding = Vec<f32>;

/// A short text label representing a key idea in source text.
///
/// Labels are at most three words after cleanup. Identity is the
/// normalized string form; duplicates may exist prior to merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Normalized label (e.g., "reinforcement learning")
    pub label: String,
    /// Importance score in [0.0, 1.0]; 1.0 = central thesis
    #[serde(default = "default_importance")]
    pub importance: f32,
}

fn default_importance() -> f32 {
    0.5
}

impl Concept {
    /// Create a concept with the default importance of 0.5.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            importance: default_importance(),
        }
    }

    /// Set the importance score, clamped to [0.0, 1.0].
    pub fn with_importance(mut self, importance: f32) -> Self {
        self.importance = importance.clamp(0.0, 1.0);
        self
    }

    /// Word count of the label.
    pub fn word_count(&self) -> usize {
        self.label.split_whitespace().count()
    }
}
