//! Pipeline orchestration.
//!
//! Composes the merger, the cluster assigner, and the reducer into one
//! deterministic transform from (concepts, embeddings) to
//! visualization-ready clustered groups.

use concept_types::{Concept, Embedding};
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::ClusterError;
use crate::kmeans::assign_clusters;
use crate::merge::merge_similar;
use crate::reduce::reduce;
use crate::types::ClusteredGroup;

/// Run the full clustering pipeline over extracted concepts.
///
/// Steps, strictly ordered:
/// 1. Validate that concept and embedding counts match.
/// 2. Merge near-duplicate concepts into groups.
/// 3. Assign each group to a k-means cluster over the group means.
/// 4. Project all group means jointly into `target_dims` coordinates,
///    so every group lives in the same reduced space.
/// 5. Zip groups, cluster ids, and coordinates by index.
///
/// No group is dropped or reordered between steps: index `i` of the
/// output corresponds to the `i`-th merged group throughout. Zero
/// extracted concepts is a legitimate degenerate case and yields an
/// empty (successful) result, distinct from any error.
///
/// # Errors
///
/// Returns `ClusterError::InvalidInput` on a count or dimension
/// mismatch, and `ClusterError::InvalidConfig` for an invalid cluster
/// count or reduction settings.
pub fn cluster_concepts(
    concepts: &[Concept],
    embeddings: &[Embedding],
    config: &PipelineConfig,
) -> Result<Vec<ClusteredGroup>, ClusterError> {
    if concepts.len() != embeddings.len() {
        return Err(ClusterError::InvalidInput(format!(
            "concept count ({}) does not match embedding count ({})",
            concepts.len(),
            embeddings.len()
        )));
    }

    let groups = merge_similar(concepts, embeddings, config.similarity_threshold)?;
    if groups.is_empty() {
        return Ok(Vec::new());
    }

    let group_embeddings: Vec<Embedding> =
        groups.iter().map(|g| g.embedding.clone()).collect();

    let clusters = assign_clusters(&group_embeddings, config.clusters, config.reduction.seed)?;
    let reduced = reduce(&group_embeddings, &config.reduction)?;

    let clustered: Vec<ClusteredGroup> = groups
        .into_iter()
        .zip(clusters)
        .zip(reduced)
        .map(|((group, cluster), reduced_embedding)| ClusteredGroup {
            concepts: group.concepts,
            reduced_embedding,
            cluster,
        })
        .collect();

    info!(
        concepts = concepts.len(),
        groups = clustered.len(),
        k = config.clusters,
        "clustered concepts"
    );

    Ok(clustered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concepts(labels: &[&str]) -> Vec<Concept> {
        labels.iter().map(|l| Concept::new(*l)).collect()
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let err = cluster_concepts(
            &concepts(&["a", "b", "c"]),
            &[vec![1.0, 0.0], vec![0.0, 1.0]],
            &PipelineConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ClusterError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_input_is_empty_success() {
        let result = cluster_concepts(&[], &[], &PipelineConfig::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_fox() {
        let result = cluster_concepts(
            &concepts(&["fox"]),
            &[vec![1.0, 0.0, 0.0]],
            &PipelineConfig::default(),
        )
        .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].concepts, vec!["fox"]);
        assert_eq!(result[0].cluster, 0);
        assert_eq!(result[0].reduced_embedding, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_near_duplicates_merge() {
        let result = cluster_concepts(
            &concepts(&["happy prince", "golden statue"]),
            &[vec![1.0, 0.05, 0.0], vec![1.0, 0.0, 0.05]],
            &PipelineConfig::default(),
        )
        .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].concepts, vec!["happy prince", "golden statue"]);
    }

    #[test]
    fn test_index_alignment() {
        let embeddings = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ];
        let labels = ["alpha", "beta", "gamma"];
        let config = PipelineConfig::default();

        let merged =
            merge_similar(&concepts(&labels), &embeddings, config.similarity_threshold).unwrap();
        let clustered = cluster_concepts(&concepts(&labels), &embeddings, &config).unwrap();

        assert_eq!(clustered.len(), merged.len());
        for (group, clustered_group) in merged.iter().zip(clustered.iter()) {
            assert_eq!(group.concepts, clustered_group.concepts);
        }
    }

    #[test]
    fn test_determinism() {
        let embeddings: Vec<Embedding> = (0..9)
            .map(|i| vec![(i % 3) as f32, (i / 3) as f32, i as f32 * 0.3])
            .collect();
        let labels: Vec<Concept> = (0..9).map(|i| Concept::new(format!("c{i}"))).collect();
        let config = PipelineConfig::default();

        let first = cluster_concepts(&labels, &embeddings, &config).unwrap();
        let second = cluster_concepts(&labels, &embeddings, &config).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.concepts, b.concepts);
            assert_eq!(a.cluster, b.cluster);
            assert_eq!(a.reduced_embedding, b.reduced_embedding);
        }
    }

    #[test]
    fn test_groups_fewer_than_k_still_assigned() {
        let result = cluster_concepts(
            &concepts(&["one", "two"]),
            &[vec![1.0, 0.0], vec![0.0, 1.0]],
            &PipelineConfig::default(),
        )
        .unwrap();

        assert_eq!(result.len(), 2);
        for group in &result {
            assert!(group.cluster < 2);
            assert_eq!(group.reduced_embedding.len(), 3);
        }
    }
}
