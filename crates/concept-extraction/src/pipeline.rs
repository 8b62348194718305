//! End-to-end extraction pipeline.
//!
//! Drives the injected collaborators (extractor, embedder) and hands
//! their validated output to the clustering core. One invocation
//! processes one text to completion; nothing is shared or retained
//! across invocations.

use concept_clustering::{cluster_concepts, ClusteredGroup, PipelineConfig};
use concept_types::Concept;
use tracing::info;

use crate::error::ExtractionError;
use crate::extractor::{ConceptExtractor, TextEmbedder};

/// Extraction-to-visualization pipeline.
///
/// Collaborators are passed in at construction and used read-only
/// during processing, so one pipeline value can serve concurrent
/// requests without locking.
pub struct ConceptPipeline<X, E> {
    extractor: X,
    embedder: E,
    config: PipelineConfig,
}

impl<X: ConceptExtractor, E: TextEmbedder> ConceptPipeline<X, E> {
    /// Create a pipeline with explicit collaborators and configuration.
    pub fn new(extractor: X, embedder: E, config: PipelineConfig) -> Self {
        Self {
            extractor,
            embedder,
            config,
        }
    }

    /// Create a pipeline with the default configuration.
    pub fn with_defaults(extractor: X, embedder: E) -> Self {
        Self::new(extractor, embedder, PipelineConfig::default())
    }

    /// Process raw text into clustered, visualization-ready groups.
    ///
    /// Steps: extract concepts, embed their labels, validate the 1:1
    /// positional correspondence, then run the clustering core. An
    /// extractor returning zero concepts is surfaced as
    /// [`ExtractionError::NoConceptsExtracted`] so callers can tell it
    /// apart from a legitimately empty clustering result.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Upstream`] when the embedder breaks
    /// the positional contract, and propagates collaborator and core
    /// errors unchanged.
    pub async fn process(&self, text: &str) -> Result<Vec<ClusteredGroup>, ExtractionError> {
        info!(text_len = text.len(), "processing text");

        let concepts: Vec<Concept> = self.extractor.extract(text).await?;
        if concepts.is_empty() {
            return Err(ExtractionError::NoConceptsExtracted);
        }

        let labels: Vec<String> = concepts.iter().map(|c| c.label.clone()).collect();
        let embeddings = self.embedder.embed(&labels).await?;

        if embeddings.len() != concepts.len() {
            return Err(ExtractionError::Upstream(format!(
                "embedder returned {} vectors for {} concepts",
                embeddings.len(),
                concepts.len()
            )));
        }

        let clustered = cluster_concepts(&concepts, &embeddings, &self.config)?;

        info!(
            concepts = concepts.len(),
            groups = clustered.len(),
            "text processed"
        );

        Ok(clustered)
    }
}
