//! Pipeline output types.

use concept_types::Embedding;
use serde::{Deserialize, Serialize};

/// A group of near-duplicate concepts merged by similarity.
///
/// Every input concept appears in exactly one group (a partition of the
/// input, not a cover), and a group always has at least one member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptGroup {
    /// Member labels in first-seen input order
    pub concepts: Vec<String>,
    /// Per-dimension arithmetic mean of the members' embeddings
    pub embedding: Embedding,
}

impl ConceptGroup {
    /// Number of merged member concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// True when the group has no members. Merger output never
    /// produces an empty group.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// Final visualization-ready record for one merged group.
///
/// Serializes to plain JSON arrays and numbers:
/// `{"concepts":["..."],"reduced_embedding":[x,y,z],"cluster":0}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteredGroup {
    /// Member labels, identical to the merged group at the same index
    pub concepts: Vec<String>,
    /// 3D coordinate from the joint projection of all group embeddings
    pub reduced_embedding: Vec<f32>,
    /// Cluster id in [0, effective_k)
    pub cluster: usize,
}
