//! Dimensionality reduction for visualization.
//!
//! Projects group embeddings into a low-dimensional coordinate space.
//! PCA is the default: covariance-based with power iteration and
//! deflation, fully deterministic, and tolerant of low-rank input
//! (dimensions beyond the available variance come out as zeros).
//! t-SNE is a simplified neighbor-embedding refinement, deterministic
//! under the configured seed, and requires `perplexity < n - 1`.

use concept_types::Embedding;
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{ReductionConfig, ReductionMethod};
use crate::error::ClusterError;

const POWER_ITERATIONS: usize = 100;
const TSNE_ITERATIONS: usize = 250;
const TSNE_LEARNING_RATE: f64 = 200.0;

/// Project embeddings to `config.target_dims` coordinates.
///
/// The projection is fit jointly across all inputs, so output
/// coordinates share one space and are directly comparable. Output
/// order matches input order. Empty input yields an empty output.
///
/// # Errors
///
/// Returns `ClusterError::InvalidConfig` if the t-SNE perplexity
/// precondition is violated, and `ClusterError::InvalidInput` if the
/// embeddings do not share one dimension.
pub fn reduce(
    embeddings: &[Embedding],
    config: &ReductionConfig,
) -> Result<Vec<Vec<f32>>, ClusterError> {
    if embeddings.is_empty() {
        return Ok(Vec::new());
    }

    let dim = embeddings[0].len();
    if embeddings.iter().any(|e| e.len() != dim) {
        return Err(ClusterError::InvalidInput(
            "embeddings must all have the same dimension".to_string(),
        ));
    }

    match config.method {
        ReductionMethod::Pca => Ok(pca_project(embeddings, config.target_dims, config.seed)),
        ReductionMethod::Tsne => tsne_project(embeddings, config),
    }
}

/// PCA projection onto the top principal components.
fn pca_project(embeddings: &[Embedding], target_dims: usize, seed: u64) -> Vec<Vec<f32>> {
    let n = embeddings.len();
    let dim = embeddings[0].len();

    let mut data = Array2::<f64>::zeros((n, dim));
    for (i, embedding) in embeddings.iter().enumerate() {
        for (j, &val) in embedding.iter().enumerate() {
            data[[i, j]] = f64::from(val);
        }
    }

    // Center each feature on its mean
    let mean = data
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(dim));
    for i in 0..n {
        for j in 0..dim {
            data[[i, j]] -= mean[j];
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let components = principal_components(&data, target_dims, &mut rng);

    debug!(points = n, dim, target_dims, "fitted PCA projection");

    (0..n)
        .map(|i| {
            let row = data.row(i);
            components
                .iter()
                .map(|component| row.dot(component) as f32)
                .collect()
        })
        .collect()
}

/// Extract up to `count` principal components via power iteration with
/// deflation. Components past the available variance (low-rank input,
/// single point, D < count) are zero vectors, so their projected
/// coordinates are exactly 0.0 rather than an error.
fn principal_components(data: &Array2<f64>, count: usize, rng: &mut StdRng) -> Vec<Array1<f64>> {
    let (n, dim) = data.dim();
    let mut cov = data.t().dot(data) / (n as f64);
    let mut components = Vec::with_capacity(count);

    for _ in 0..count {
        let direction = power_iteration(&cov, POWER_ITERATIONS, rng);
        let eigenvalue = direction.dot(&cov.dot(&direction));

        if eigenvalue <= 1e-12 {
            components.push(Array1::zeros(dim));
            continue;
        }

        // Deflate: remove the found component's variance
        for i in 0..dim {
            for j in 0..dim {
                cov[[i, j]] -= eigenvalue * direction[i] * direction[j];
            }
        }
        components.push(direction);
    }

    components
}

/// Power iteration for the dominant eigenvector of a symmetric matrix.
fn power_iteration(matrix: &Array2<f64>, iterations: usize, rng: &mut StdRng) -> Array1<f64> {
    let dim = matrix.dim().0;
    let trace: f64 = (0..dim).map(|i| matrix[[i, i]]).sum();
    let mut v = Array1::from_elem(dim, 1.0 / (dim as f64).sqrt());

    for _ in 0..iterations {
        let mut next = matrix.dot(&v);
        let mut norm: f64 = next.iter().map(|x| x * x).sum::<f64>().sqrt();

        // The current vector can sit exactly orthogonal to the dominant
        // eigenvector, annihilating the product even though the matrix
        // carries variance. Restart from a seeded random direction.
        if norm <= 1e-10 && trace > 1e-12 {
            next = Array1::from_shape_fn(dim, |_| rng.random::<f64>() - 0.5);
            norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        }

        if norm > 1e-10 {
            next /= norm;
        }
        v = next;
    }

    v
}

/// Simplified t-SNE: PCA initialization with seeded jitter, then
/// gradient descent pulling low-dimensional distances toward the
/// high-dimensional ones through a Student-t weighting.
fn tsne_project(
    embeddings: &[Embedding],
    config: &ReductionConfig,
) -> Result<Vec<Vec<f32>>, ClusterError> {
    let n = embeddings.len();
    let target_dims = config.target_dims;

    // Neighbor count must be satisfiable; violating this is a caller
    // configuration error, not a degradable case
    if f64::from(config.perplexity) >= (n as f64) - 1.0 {
        return Err(ClusterError::InvalidConfig(format!(
            "t-SNE perplexity ({}) must be less than the number of points minus one ({})",
            config.perplexity,
            n.saturating_sub(1)
        )));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut positions: Vec<Vec<f64>> = pca_project(embeddings, target_dims, config.seed)
        .into_iter()
        .map(|coords| {
            coords
                .into_iter()
                .map(|c| f64::from(c) + (rng.random::<f64>() - 0.5) * 1e-4)
                .collect()
        })
        .collect();

    let high_dist = pairwise_distances(embeddings);

    for iteration in 0..TSNE_ITERATIONS {
        let mut gradients = vec![vec![0.0f64; target_dims]; n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }

                let low_dist = euclidean(&positions[i], &positions[j]).max(1e-10);
                let weight = 1.0 / (1.0 + low_dist * low_dist);
                let pull = 4.0 * (high_dist[[i, j]] - low_dist) * weight;

                for d in 0..target_dims {
                    gradients[i][d] += pull * (positions[i][d] - positions[j][d]);
                }
            }
        }

        let rate = TSNE_LEARNING_RATE * (1.0 - iteration as f64 / TSNE_ITERATIONS as f64);
        for i in 0..n {
            for d in 0..target_dims {
                positions[i][d] -= rate * gradients[i][d] / n as f64;
            }
        }
    }

    debug!(points = n, target_dims, "fitted t-SNE projection");

    Ok(positions
        .into_iter()
        .map(|coords| coords.into_iter().map(|c| c as f32).collect())
        .collect())
}

fn pairwise_distances(embeddings: &[Embedding]) -> Array2<f64> {
    let n = embeddings.len();
    let mut distances = Array2::zeros((n, n));

    for i in 0..n {
        for j in (i + 1)..n {
            let dist: f64 = embeddings[i]
                .iter()
                .zip(&embeddings[j])
                .map(|(a, b)| f64::from(a - b).powi(2))
                .sum::<f64>()
                .sqrt();
            distances[[i, j]] = dist;
            distances[[j, i]] = dist;
        }
    }

    distances
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
