mod originality;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{CorpusDocument, PlagiarismReport, SimilarityMatch, SubmissionId};
use super::metrics;

/// Similarity dials, resolved by the caller from the admin-tunable
/// sensitivity settings. Nothing here is a compiled-in constant of the
/// detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismConfig {
    /// A report is flagged when the highest similarity reaches this value.
    pub flag_threshold: f64,
    /// Matches below this similarity are dropped to bound output size.
    pub noise_floor: f64,
    /// Submissions with fewer tokens than this are still compared, but the
    /// report confidence scales down accordingly.
    pub short_text_token_floor: usize,
}

impl Default for PlagiarismConfig {
    fn default() -> Self {
        Self {
            flag_threshold: 70.0,
            noise_floor: 10.0,
            short_text_token_floor: 40,
        }
    }
}

/// Stateless detector comparing one submission against a caller-supplied
/// corpus. Performs no I/O; corpus retrieval is the caller's concern.
pub struct PlagiarismDetector {
    config: PlagiarismConfig,
}

impl PlagiarismDetector {
    pub fn new(config: PlagiarismConfig) -> Self {
        Self { config }
    }

    pub fn detect(
        &self,
        submission_id: &SubmissionId,
        text: &str,
        corpus: &[CorpusDocument],
    ) -> PlagiarismReport {
        let submission_terms = term_frequencies(text);

        let mut matches: Vec<SimilarityMatch> = corpus
            .iter()
            .filter(|document| document.candidate_id != *submission_id)
            .map(|document| SimilarityMatch {
                candidate_id: document.candidate_id.clone(),
                similarity: similarity(&submission_terms, &term_frequencies(&document.text)),
            })
            .filter(|candidate| candidate.similarity >= self.config.noise_floor)
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });

        let highest_similarity = matches
            .first()
            .map(|candidate| candidate.similarity)
            .unwrap_or(0.0);
        let is_flagged = !matches.is_empty() && highest_similarity >= self.config.flag_threshold;

        let token_count: usize = submission_terms.values().sum();
        let confidence = if self.config.short_text_token_floor == 0 {
            0.9
        } else {
            0.9 * (token_count as f64 / self.config.short_text_token_floor as f64).min(1.0)
        };

        let ai_detection = originality::assess(text);

        debug!(
            candidates = corpus.len(),
            reported = matches.len(),
            highest_similarity,
            is_flagged,
            "similarity check completed"
        );

        PlagiarismReport {
            submission_id: submission_id.clone(),
            matches,
            highest_similarity,
            is_flagged,
            confidence,
            ai_detection,
        }
    }
}

pub(crate) fn term_frequencies(text: &str) -> BTreeMap<String, usize> {
    let mut frequencies = BTreeMap::new();
    for token in metrics::tokens(text) {
        *frequencies.entry(token).or_insert(0) += 1;
    }
    frequencies
}

/// Blend of cosine similarity over term-frequency vectors and Jaccard
/// overlap over token sets, on a 0-100 scale. Symmetric and reflexive:
/// identical texts score 100.
pub(crate) fn similarity(a: &BTreeMap<String, usize>, b: &BTreeMap<String, usize>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, &count)| b.get(term).map(|&other| (count * other) as f64))
        .sum();
    let norm_a = a.values().map(|&count| (count * count) as f64).sum::<f64>().sqrt();
    let norm_b = b.values().map(|&count| (count * count) as f64).sum::<f64>().sqrt();
    let cosine = dot / (norm_a * norm_b);

    let shared = a.keys().filter(|term| b.contains_key(*term)).count() as f64;
    let union = (a.len() + b.len()) as f64 - shared;
    let jaccard = shared / union;

    ((0.7 * cosine + 0.3 * jaccard) * 100.0).clamp(0.0, 100.0)
}
