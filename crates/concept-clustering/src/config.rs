//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::ClusterError;

/// Configuration for the concept clustering pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Cosine similarity above which concepts merge (strict inequality)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Number of k-means clusters
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    /// Dimensionality reduction settings
    #[serde(default)]
    pub reduction: ReductionConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            clusters: default_clusters(),
            reduction: ReductionConfig::default(),
        }
    }
}

fn default_similarity_threshold() -> f32 {
    0.8
}
fn default_clusters() -> usize {
    3
}

/// Dimensionality reduction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionConfig {
    /// Projection method
    #[serde(default)]
    pub method: ReductionMethod,

    /// Output dimensionality (3 for visualization)
    #[serde(default = "default_target_dims")]
    pub target_dims: usize,

    /// t-SNE neighbor count; must be < number of points - 1
    #[serde(default = "default_perplexity")]
    pub perplexity: f32,

    /// Seed for stochastic stages (k-means init, t-SNE jitter)
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            method: ReductionMethod::default(),
            target_dims: default_target_dims(),
            perplexity: default_perplexity(),
            seed: default_seed(),
        }
    }
}

fn default_target_dims() -> usize {
    3
}
fn default_perplexity() -> f32 {
    5.0
}
fn default_seed() -> u64 {
    42
}

/// Supported dimensionality reduction methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReductionMethod {
    /// Linear, deterministic, variance-maximizing projection
    #[default]
    Pca,
    /// Stochastic neighbor embedding; deterministic under a fixed seed
    Tsne,
}

impl ReductionMethod {
    /// Parse a method name from its string form.
    ///
    /// Anything other than "pca" or "tsne" is an explicit configuration
    /// error, never a silent fallback.
    pub fn parse(name: &str) -> Result<Self, ClusterError> {
        match name {
            "pca" => Ok(Self::Pca),
            "tsne" => Ok(Self::Tsne),
            other => Err(ClusterError::InvalidConfig(format!(
                "unsupported reduction method: {other} (use \"pca\" or \"tsne\")"
            ))),
        }
    }
}
