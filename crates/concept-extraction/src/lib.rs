//! # concept-extraction
//!
//! Upstream seam for the concept clustering pipeline.
//!
//! Concept extraction and embedding generation are external
//! collaborators: a generative model service produces short concept
//! labels, an embedding model turns labels into vectors. This crate
//! defines those collaborators as dependency-injected traits, provides
//! a network-free statistical extractor as the default implementation,
//! and drives collaborators plus the clustering core end to end.
//!
//! ## Collaborators
//! - [`ConceptExtractor`]: raw text in, concepts out
//! - [`TextEmbedder`]: labels in, one vector per label out
//!
//! Both are constructed explicitly and passed into [`ConceptPipeline`],
//! never looked up from ambient globals, so the pipeline is fully
//! testable without network access.

pub mod error;
pub mod extractor;
pub mod keywords;
pub mod pipeline;
pub mod text;

pub use error::ExtractionError;
pub use extractor::{ConceptExtractor, TextEmbedder};
pub use keywords::{CandidateKeyword, KeywordExtractor};
pub use pipeline::ConceptPipeline;
pub use text::{clean_text, normalize_label};
