//! Seeded k-means cluster assignment.
//!
//! Standard Lloyd's algorithm with k-means++ initialization. All
//! randomness comes from a caller-supplied seed, so identical input
//! order, values, and seed always reproduce the same assignment.

use concept_types::Embedding;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::ClusterError;

const MAX_ITERATIONS: usize = 100;
const CONVERGENCE_TOLERANCE: f32 = 1e-6;

/// Partition embeddings into at most `k` clusters.
///
/// Returns one cluster id per input embedding, parallel to input order,
/// with ids in `[0, effective_k)`. When there are fewer points than
/// `k`, the effective cluster count is reduced to the point count so
/// small inputs never fail. Empty input yields an empty assignment.
///
/// # Errors
///
/// Returns `ClusterError::InvalidConfig` if `k` is 0, and
/// `ClusterError::InvalidInput` if the embeddings do not share one
/// dimension.
pub fn assign_clusters(
    embeddings: &[Embedding],
    k: usize,
    seed: u64,
) -> Result<Vec<usize>, ClusterError> {
    if k == 0 {
        return Err(ClusterError::InvalidConfig(
            "cluster count k must be > 0".to_string(),
        ));
    }

    if embeddings.is_empty() {
        return Ok(Vec::new());
    }

    let dim = embeddings[0].len();
    if embeddings.iter().any(|e| e.len() != dim) {
        return Err(ClusterError::InvalidInput(
            "embeddings must all have the same dimension".to_string(),
        ));
    }

    let n = embeddings.len();
    let effective_k = k.min(n);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids = init_centroids(embeddings, effective_k, &mut rng);
    let mut assignments = vec![0usize; n];

    for iteration in 0..MAX_ITERATIONS {
        // Assignment step: nearest centroid, first wins on ties
        for (i, embedding) in embeddings.iter().enumerate() {
            let mut min_dist = f32::MAX;
            let mut best = 0;
            for (j, centroid) in centroids.iter().enumerate() {
                let dist = distance_squared(embedding, centroid);
                if dist < min_dist {
                    min_dist = dist;
                    best = j;
                }
            }
            assignments[i] = best;
        }

        // Update step: recompute centroids as member means; a cluster
        // that lost all members keeps its previous centroid
        let mut sums = vec![vec![0.0f32; dim]; effective_k];
        let mut counts = vec![0usize; effective_k];
        for (embedding, &cluster) in embeddings.iter().zip(assignments.iter()) {
            counts[cluster] += 1;
            for (d, &val) in embedding.iter().enumerate() {
                sums[cluster][d] += val;
            }
        }

        let mut max_movement = 0.0f32;
        for (cluster, (sum, &count)) in sums.into_iter().zip(counts.iter()).enumerate() {
            if count == 0 {
                continue;
            }
            let new_centroid: Vec<f32> =
                sum.into_iter().map(|v| v / count as f32).collect();
            let movement = distance_squared(&new_centroid, &centroids[cluster]).sqrt();
            max_movement = max_movement.max(movement);
            centroids[cluster] = new_centroid;
        }

        if max_movement < CONVERGENCE_TOLERANCE {
            debug!(iteration, effective_k, "k-means converged");
            break;
        }
    }

    Ok(assignments)
}

/// k-means++ initialization: the first centroid is drawn uniformly,
/// each subsequent one with probability proportional to its squared
/// distance from the nearest existing centroid.
fn init_centroids(embeddings: &[Embedding], k: usize, rng: &mut StdRng) -> Vec<Vec<f32>> {
    let n = embeddings.len();
    let mut centroids: Vec<Vec<f32>> = Vec::with_capacity(k);
    centroids.push(embeddings[rng.random_range(0..n)].clone());

    let mut min_distances = vec![f32::MAX; n];

    while centroids.len() < k {
        let last = &centroids[centroids.len() - 1];
        for (i, embedding) in embeddings.iter().enumerate() {
            let dist = distance_squared(embedding, last);
            if dist < min_distances[i] {
                min_distances[i] = dist;
            }
        }

        let total: f32 = min_distances.iter().sum();
        let next = if total <= 0.0 {
            // All points coincide with an existing centroid; any pick
            // is equivalent, draw uniformly to stay seed-stable
            rng.random_range(0..n)
        } else {
            let mut target = rng.random::<f32>() * total;
            let mut chosen = n - 1;
            for (i, &dist) in min_distances.iter().enumerate() {
                target -= dist;
                if target <= 0.0 {
                    chosen = i;
                    break;
                }
            }
            chosen
        };
        centroids.push(embeddings[next].clone());
    }

    centroids
}

fn distance_squared(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
