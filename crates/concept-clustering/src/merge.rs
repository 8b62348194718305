//! Similarity-based concept merging.
//!
//! Merges near-duplicate concepts into groups using a greedy single
//! pass over the pairwise cosine-similarity matrix. The pass is
//! order-dependent on purpose: anchor concept `i` collects every later
//! unprocessed `j` whose similarity to `i` exceeds the threshold, and a
//! concept assigned to a group is never reconsidered. This is NOT a
//! transitive closure: if A merges with B, and B is similar to C but A
//! is not, C stays outside A's group. The behavior is intentional and
//! must not be "fixed" into full transitive clustering.

use concept_types::{Concept, Embedding};
use tracing::debug;

use crate::error::ClusterError;
use crate::similarity::{mean_embedding, pairwise_similarities};
use crate::types::ConceptGroup;

/// Merge near-duplicate concepts into groups.
///
/// Concepts merge when their cosine similarity is strictly greater than
/// `threshold` (equal-to-threshold does not merge). Each group's
/// embedding is the per-dimension arithmetic mean of its members.
///
/// Empty input yields an empty output. A single concept yields a single
/// singleton group. A threshold at or below -1 merges everything into
/// the first anchor's group, since cosine similarity never goes lower.
///
/// # Errors
///
/// Returns `ClusterError::InvalidInput` if concept and embedding counts
/// differ or the embeddings do not share one dimension.
pub fn merge_similar(
    concepts: &[Concept],
    embeddings: &[Embedding],
    threshold: f32,
) -> Result<Vec<ConceptGroup>, ClusterError> {
    if concepts.len() != embeddings.len() {
        return Err(ClusterError::InvalidInput(format!(
            "concept count ({}) does not match embedding count ({})",
            concepts.len(),
            embeddings.len()
        )));
    }

    if concepts.is_empty() {
        return Ok(Vec::new());
    }

    let dim = embeddings[0].len();
    if embeddings.iter().any(|e| e.len() != dim) {
        return Err(ClusterError::InvalidInput(
            "embeddings must all have the same dimension".to_string(),
        ));
    }

    let similarities = pairwise_similarities(embeddings);

    let mut groups = Vec::new();
    let mut processed = vec![false; concepts.len()];

    for i in 0..concepts.len() {
        if processed[i] {
            continue;
        }

        // Anchor i collects later unprocessed concepts above threshold
        let mut member_indices = vec![i];
        for j in (i + 1)..concepts.len() {
            if !processed[j] && similarities[i][j] > threshold {
                member_indices.push(j);
            }
        }

        let group_concepts: Vec<String> = member_indices
            .iter()
            .map(|&idx| concepts[idx].label.clone())
            .collect();

        let member_embeddings: Vec<&[f32]> = member_indices
            .iter()
            .map(|&idx| embeddings[idx].as_slice())
            .collect();
        let embedding = mean_embedding(&member_embeddings);

        for &idx in &member_indices {
            processed[idx] = true;
        }

        groups.push(ConceptGroup {
            concepts: group_concepts,
            embedding,
        });
    }

    debug!(
        input = concepts.len(),
        groups = groups.len(),
        threshold,
        "merged similar concepts"
    );

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concepts(labels: &[&str]) -> Vec<Concept> {
        labels.iter().map(|l| Concept::new(*l)).collect()
    }

    #[test]
    fn test_merge_empty_input() {
        let groups = merge_similar(&[], &[], 0.8).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_merge_single_concept() {
        let groups = merge_similar(&concepts(&["fox"]), &[vec![1.0, 0.0, 0.0]], 0.8).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].concepts, vec!["fox"]);
        assert_eq!(groups[0].embedding, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_merge_near_identical() {
        // Cosine similarity ~0.9999 > 0.8, so both labels land in one group
        let groups = merge_similar(
            &concepts(&["happy prince", "golden statue"]),
            &[vec![1.0, 0.01, 0.0], vec![1.0, 0.0, 0.01]],
            0.8,
        )
        .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].concepts, vec!["happy prince", "golden statue"]);
    }

    #[test]
    fn test_merge_dissimilar_stay_apart() {
        let groups = merge_similar(
            &concepts(&["fox", "economy"]),
            &[vec![1.0, 0.0], vec![0.0, 1.0]],
            0.8,
        )
        .unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        // Orthogonal vectors have cosine exactly 0.0. At threshold 0.0
        // (similarity == threshold) they must NOT merge; just below,
        // they must.
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        let at = merge_similar(&concepts(&["x", "y"]), &[a.clone(), b.clone()], 0.0).unwrap();
        assert_eq!(at.len(), 2);

        let below = merge_similar(&concepts(&["x", "y"]), &[a, b], -0.1).unwrap();
        assert_eq!(below.len(), 1);
    }

    #[test]
    fn test_greedy_not_transitive() {
        // b sits between a and c: sim(a,b) and sim(b,c) are high but
        // sim(a,c) is below threshold. Greedy anchoring at a takes b and
        // leaves c as its own group.
        let a = vec![1.0, 0.0];
        let b = vec![(0.5f32).sqrt(), (0.5f32).sqrt()]; // 45 degrees
        let c = vec![0.0, 1.0]; // 90 degrees from a
        let groups =
            merge_similar(&concepts(&["a", "b", "c"]), &[a, b, c], 0.6).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].concepts, vec!["a", "b"]);
        assert_eq!(groups[1].concepts, vec!["c"]);
    }

    #[test]
    fn test_partition_property() {
        let labels = ["a", "b", "c", "d", "e"];
        let embeddings = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.99, 0.1, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.98, 0.2],
            vec![0.0, 0.0, 1.0],
        ];
        let groups = merge_similar(&concepts(&labels), &embeddings, 0.8).unwrap();

        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.concepts.iter().map(|s| s.as_str()))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = labels.to_vec();
        expected.sort_unstable();
        // Every input appears exactly once across all groups
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_mean_invariant() {
        let embeddings = vec![vec![1.0, 0.0], vec![0.8, 0.6]];
        let groups = merge_similar(&concepts(&["a", "b"]), &embeddings, 0.7).unwrap();
        assert_eq!(groups.len(), 1);
        assert!((groups[0].embedding[0] - 0.9).abs() < 1e-6);
        assert!((groups[0].embedding[1] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_below_minus_one_merges_all() {
        let embeddings = vec![vec![1.0, 0.0], vec![-1.0, 0.0], vec![0.0, 1.0]];
        let groups = merge_similar(&concepts(&["a", "b", "c"]), &embeddings, -1.5).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].concepts.len(), 3);
    }

    #[test]
    fn test_zero_norm_embedding_never_merges() {
        // Zero vector has similarity 0 with everything, below any
        // positive threshold
        let embeddings = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
        let groups = merge_similar(&concepts(&["zero", "one"]), &embeddings, 0.5).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = merge_similar(&concepts(&["a", "b", "c"]), &[vec![1.0], vec![1.0]], 0.8)
            .unwrap_err();
        assert!(matches!(err, ClusterError::InvalidInput(_)));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = merge_similar(
            &concepts(&["a", "b"]),
            &[vec![1.0, 0.0], vec![1.0, 0.0, 0.0]],
            0.8,
        )
        .unwrap_err();
        assert!(matches!(err, ClusterError::InvalidInput(_)));
    }
}
