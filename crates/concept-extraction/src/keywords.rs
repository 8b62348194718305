//! Statistical keyword extraction.
//!
//! A network-free [`ConceptExtractor`] built on TF-IDF scoring: the
//! input text is split into sentence documents, terms are scored by
//! frequency within the text against rarity across sentences, and the
//! top terms become concepts. An LLM-backed extractor can replace this
//! one behind the same trait; this implementation needs no external
//! service and keeps the pipeline testable offline.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use concept_types::Concept;
use tracing::debug;

use crate::error::ExtractionError;
use crate::extractor::ConceptExtractor;
use crate::text::{clean_text, split_sentences};

/// A scored keyword candidate.
#[derive(Debug, Clone)]
pub struct CandidateKeyword {
    /// Candidate term
    pub phrase: String,
    /// Raw TF-IDF score (unnormalized)
    pub score: f32,
}

/// TF-IDF based concept extractor.
///
/// Scores are normalized against the best candidate to produce
/// importance values, so the top concept always gets importance 1.0.
pub struct KeywordExtractor {
    /// Maximum number of concepts to emit
    top_concepts: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self { top_concepts: 15 }
    }
}

impl KeywordExtractor {
    /// Create an extractor emitting at most `top_concepts` concepts.
    pub fn new(top_concepts: usize) -> Self {
        Self { top_concepts }
    }

    /// Rank candidate keywords for the given text.
    pub fn candidates(&self, text: &str) -> Vec<CandidateKeyword> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Vec::new();
        }

        let sentence_count = sentences.len() as f32;
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut sentence_counts: HashMap<String, usize> = HashMap::new();

        for sentence in &sentences {
            let terms = tokenize(sentence);
            let unique: HashSet<&String> = terms.iter().collect();
            for term in unique {
                *sentence_counts.entry(term.clone()).or_insert(0) += 1;
            }
            for term in terms {
                *term_counts.entry(term).or_insert(0) += 1;
            }
        }

        let total_terms: usize = term_counts.values().sum();
        if total_terms == 0 {
            return Vec::new();
        }

        let mut candidates: Vec<CandidateKeyword> = term_counts
            .iter()
            .map(|(term, &count)| {
                let tf = count as f32 / total_terms as f32;
                let df = sentence_counts.get(term).copied().unwrap_or(0) as f32;
                // Smoothed IDF keeps terms present in every sentence
                // from zeroing out
                let idf = ((sentence_count + 1.0) / (df + 1.0)).ln() + 1.0;
                CandidateKeyword {
                    phrase: term.clone(),
                    score: tf * idf,
                }
            })
            .collect();

        // Score descending, then alphabetical so equal scores rank
        // deterministically
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        candidates.truncate(self.top_concepts);
        candidates
    }
}

#[async_trait]
impl ConceptExtractor for KeywordExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<Concept>, ExtractionError> {
        let candidates = self.candidates(text);
        let max_score = candidates.first().map(|c| c.score).unwrap_or(0.0);

        let concepts: Vec<Concept> = candidates
            .into_iter()
            .map(|candidate| {
                let importance = if max_score > 0.0 {
                    candidate.score / max_score
                } else {
                    0.5
                };
                Concept::new(candidate.phrase).with_importance(importance)
            })
            .collect();

        debug!(concepts = concepts.len(), "extracted statistical concepts");
        Ok(concepts)
    }
}

/// Tokenize a sentence into candidate terms.
///
/// Drops stop words, single characters, and purely numeric tokens.
fn tokenize(sentence: &str) -> Vec<String> {
    clean_text(sentence)
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.len() > 1)
        .filter(|t| !t.chars().all(|c| c.is_numeric()))
        .filter(|t| !is_stop_word(t))
        .map(String::from)
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "an", "as", "at", "be", "by", "do", "if", "in", "is", "it", "no", "of", "on", "or",
        "so", "to", "up", "we",
        "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was",
        "one", "our", "out", "has", "have", "this", "that", "with", "they", "from", "been",
        "were", "which", "their", "there", "would", "could", "should", "about", "into",
        "such", "these", "those", "them", "then", "than", "when", "where", "while", "also",
        "more", "most", "some", "other", "only", "over", "very", "just", "its", "his", "she",
        "him", "who", "what", "how", "why", "will", "may", "each", "any", "because", "between",
        "both", "does", "doing", "during", "few", "here", "itself", "own", "same", "too",
        "under", "until", "again", "against",
    ];
    STOP_WORDS.contains(&word)
}
