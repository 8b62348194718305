//! # concept-types
//!
//! Shared domain types for the concept clustering pipeline.
//!
//! This crate defines the data that flows between the extraction seam
//! and the clustering core:
//! - Concepts: short labeled ideas extracted from source text
//! - Embeddings: opaque dense vectors associated 1:1 with concepts
//!
//! ## Usage
//!
//! ```rust
//! use concept_types::Concept;
//!
//! let concept = Concept::new("reinforcement learning").with_importance(0.9);
//! assert_eq!(concept.label, "reinforcement learning");
//! ```

pub mod concept;

pub use concept::{Concept, Embedding};
