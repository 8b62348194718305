//! # concept-clustering
//!
//! Concept merging and clustering for 3D visualization.
//!
//! This crate takes noisy, possibly-duplicate concept labels with their
//! embedding vectors and produces a clean, clustered, visualization-ready
//! structure:
//!
//! 1. Near-duplicate concepts are merged into groups by cosine
//!    similarity (greedy single pass, averaged embedding per group).
//! 2. Groups are partitioned into a fixed number of clusters using
//!    seeded k-means over their mean embeddings.
//! 3. Group embeddings are jointly projected to 3D (PCA by default,
//!    t-SNE optionally) so groups share one coordinate space.
//!
//! The whole pipeline is synchronous, request-scoped, and deterministic
//! given identical input order, values, and configuration.

pub mod config;
pub mod error;
pub mod kmeans;
pub mod merge;
pub mod pipeline;
pub mod reduce;
pub mod similarity;
pub mod types;

pub use config::{PipelineConfig, ReductionConfig, ReductionMethod};
pub use error::ClusterError;
pub use kmeans::assign_clusters;
pub use merge::merge_similar;
pub use pipeline::cluster_concepts;
pub use reduce::reduce;
pub use similarity::{cosine_similarity, mean_embedding, pairwise_similarities};
pub use types::{ClusteredGroup, ConceptGroup};
