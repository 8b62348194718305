//! Collaborator trait definitions.
//!
//! The pipeline never talks to a model service directly; it consumes
//! these two seams. Implementations own their transport, retry policy,
//! and model configuration.

use async_trait::async_trait;
use concept_types::{Concept, Embedding};

use crate::error::ExtractionError;

/// Trait for concept extraction from raw text.
///
/// Implementations return short labels (at most three words after
/// cleanup) with importance scores. The pipeline treats the output as
/// opaque; it does not re-validate label quality.
///
/// # Example
///
/// ```rust,ignore
/// struct FixedExtractor;
///
/// #[async_trait::async_trait]
/// impl ConceptExtractor for FixedExtractor {
///     async fn extract(&self, _text: &str) -> Result<Vec<Concept>, ExtractionError> {
///         Ok(vec![Concept::new("inflation")])
///     }
/// }
/// ```
#[async_trait]
pub trait ConceptExtractor: Send + Sync {
    /// Extract salient concepts from the given text.
    ///
    /// Returning an empty list is valid for trivially empty input; the
    /// pipeline maps it to [`ExtractionError::NoConceptsExtracted`].
    async fn extract(&self, text: &str) -> Result<Vec<Concept>, ExtractionError>;
}

/// Trait for embedding generation.
///
/// Implementations must return exactly one vector per input label, in
/// input order. The pipeline validates the count after the call and
/// treats any mismatch as an upstream failure.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Generate one embedding per label, positionally matched.
    async fn embed(&self, labels: &[String]) -> Result<Vec<Embedding>, ExtractionError>;
}
