use std::collections::BTreeMap;

use super::super::domain::AiDetection;
use super::super::metrics;

/// Below this sentence count variance cannot be measured meaningfully.
const MIN_SENTENCES: usize = 4;
const SIGNAL_COUNT: usize = 4;
/// At least two independent signals must agree before asserting a text is
/// likely generated.
const REQUIRED_SIGNALS: usize = 2;
const SHORT_TEXT_CONFIDENCE: f64 = 0.2;

/// Sentence word counts tighter than this read as machine-uniform.
const UNIFORM_LENGTH_FLOOR: f64 = 2.5;
/// Token-frequency coefficient of variation below this means low
/// burstiness; natural prose is top-heavy.
const UNIFORM_FREQUENCY_FLOOR: f64 = 0.75;

const FORMAL_OPENERS: &[&str] = &[
    "furthermore",
    "moreover",
    "however",
    "therefore",
    "additionally",
    "consequently",
    "in conclusion",
    "in summary",
];

const PERSONAL_MARKERS: &[&str] = &[
    "i think",
    "i believe",
    "i feel",
    "in my opinion",
    "personally",
];

/// Corpus-free estimate of whether a text is machine-generated. Confidence
/// is the triggered-signal ratio, reported as evidence strength.
pub(crate) fn assess(text: &str) -> AiDetection {
    let sentences = metrics::sentences(text);
    if sentences.len() < MIN_SENTENCES {
        return AiDetection {
            is_likely_generated: false,
            confidence: SHORT_TEXT_CONFIDENCE,
        };
    }

    let lengths: Vec<f64> = sentences
        .iter()
        .map(|sentence| metrics::tokens(sentence).len() as f64)
        .collect();
    let uniform_lengths = stddev(&lengths) < UNIFORM_LENGTH_FLOOR;

    let tokens = metrics::tokens(text);
    let mut frequencies: BTreeMap<&str, usize> = BTreeMap::new();
    for token in &tokens {
        *frequencies.entry(token.as_str()).or_insert(0) += 1;
    }
    let counts: Vec<f64> = frequencies.values().map(|&count| count as f64).collect();
    let mean = counts.iter().sum::<f64>() / counts.len() as f64;
    let uniform_vocabulary = stddev(&counts) / mean < UNIFORM_FREQUENCY_FLOOR;

    let lowered = text.to_lowercase();
    let impersonal = !lowered.contains('\'')
        && !PERSONAL_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker));

    let formal_openings = sentences
        .iter()
        .filter(|sentence| {
            let opening = sentence.trim_start().to_lowercase();
            FORMAL_OPENERS.iter().any(|opener| opening.starts_with(opener))
        })
        .count();
    let formulaic = formal_openings as f64 / sentences.len() as f64 >= 0.3;

    let triggered = [uniform_lengths, uniform_vocabulary, impersonal, formulaic]
        .iter()
        .filter(|&&signal| signal)
        .count();

    AiDetection {
        is_likely_generated: triggered >= REQUIRED_SIGNALS,
        confidence: triggered as f64 / SIGNAL_COUNT as f64,
    }
}

fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
