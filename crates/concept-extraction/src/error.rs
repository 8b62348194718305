//! Extraction error types.

use thiserror::Error;

/// Errors that can occur while driving the extraction pipeline.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The extractor produced zero concepts for non-trivial input
    #[error("No concepts could be extracted from the provided text")]
    NoConceptsExtracted,

    /// A collaborator returned no usable data; surfaced, never retried here
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Core clustering error, propagated unchanged
    #[error("Clustering error: {0}")]
    Clustering(#[from] concept_clustering::ClusterError),
}
