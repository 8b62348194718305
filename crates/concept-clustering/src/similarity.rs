//! Vector similarity functions.
//!
//! Pure Rust implementations without external dependencies.

/// Calculate cosine similarity between two vectors.
///
/// Returns value in [-1.0, 1.0] where 1.0 = identical direction.
/// A zero-norm vector has similarity 0.0 with every other vector, by
/// convention, so degenerate embeddings never cause a division by zero.
///
/// # Panics
/// Panics if vectors have different dimensions.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same dimension");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Calculate the per-dimension arithmetic mean of multiple embeddings.
///
/// The result is NOT re-normalized: a merged group's embedding is the
/// plain average of its members.
pub fn mean_embedding(embeddings: &[&[f32]]) -> Vec<f32> {
    if embeddings.is_empty() {
        return Vec::new();
    }

    let dim = embeddings[0].len();
    let n = embeddings.len() as f32;
    let mut mean = vec![0.0f32; dim];

    for embedding in embeddings {
        assert_eq!(
            embedding.len(),
            dim,
            "All embeddings must have same dimension"
        );
        for (i, &val) in embedding.iter().enumerate() {
            mean[i] += val;
        }
    }

    for val in mean.iter_mut() {
        *val /= n;
    }

    mean
}

/// Calculate the full pairwise cosine-similarity matrix.
///
/// Diagonal entries are 1.0 (except for zero-norm vectors, which are
/// 0.0 everywhere per the cosine convention above).
pub fn pairwise_similarities(embeddings: &[Vec<f32>]) -> Vec<Vec<f32>> {
    let n = embeddings.len();
    let mut similarities = vec![vec![0.0f32; n]; n];

    for i in 0..n {
        similarities[i][i] = cosine_similarity(&embeddings[i], &embeddings[i]);
        for j in (i + 1)..n {
            let sim = cosine_similarity(&embeddings[i], &embeddings[j]);
            similarities[i][j] = sim;
            similarities[j][i] = sim;
        }
    }

    similarities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_scale_invariant() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![2.0, 4.0, 6.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_mean_embedding() {
        let e1 = vec![1.0, 0.0, 0.0];
        let e2 = vec![0.0, 1.0, 0.0];
        let embeddings: Vec<&[f32]> = vec![&e1, &e2];
        let mean = mean_embedding(&embeddings);
        assert!((mean[0] - 0.5).abs() < 0.001);
        assert!((mean[1] - 0.5).abs() < 0.001);
        assert!(mean[2].abs() < 0.001);
    }

    #[test]
    fn test_mean_embedding_not_normalized() {
        let e1 = vec![2.0, 0.0];
        let e2 = vec![4.0, 0.0];
        let embeddings: Vec<&[f32]> = vec![&e1, &e2];
        let mean = mean_embedding(&embeddings);
        // Plain average, magnitude preserved
        assert!((mean[0] - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_mean_embedding_empty() {
        let embeddings: Vec<&[f32]> = vec![];
        assert!(mean_embedding(&embeddings).is_empty());
    }

    #[test]
    fn test_mean_embedding_single() {
        let e1 = vec![3.0, 4.0];
        let embeddings: Vec<&[f32]> = vec![&e1];
        let mean = mean_embedding(&embeddings);
        assert!((mean[0] - 3.0).abs() < 0.001);
        assert!((mean[1] - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_pairwise_similarities() {
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]];
        let sims = pairwise_similarities(&embeddings);
        assert!((sims[0][2] - 1.0).abs() < 0.001); // Identical
        assert!(sims[0][1].abs() < 0.001); // Orthogonal
        assert!((sims[1][0] - sims[0][1]).abs() < 0.001); // Symmetric
    }

    #[test]
    fn test_pairwise_similarities_diagonal() {
        let embeddings = vec![vec![1.0, 2.0], vec![0.0, 0.0]];
        let sims = pairwise_similarities(&embeddings);
        assert!((sims[0][0] - 1.0).abs() < 0.001);
        // Zero-norm vector is 0 even against itself
        assert!(sims[1][1].abs() < 0.001);
    }

    #[test]
    #[should_panic(expected = "Vectors must have same dimension")]
    fn test_cosine_similarity_different_dimensions() {
        let a = vec![1.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        cosine_similarity(&a, &b);
    }
}
