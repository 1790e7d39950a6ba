use super::common::*;
use crate::workflows::assessment::metrics::{analyze, sentences, syllables, tokens};

#[test]
fn empty_text_yields_zeroed_metrics() {
    for degenerate in ["", "   ", "\n\n\t", "... !!! ???"] {
        let metrics = analyze(degenerate);
        assert_eq!(metrics.word_count, 0, "input {degenerate:?}");
        assert_eq!(metrics.sentence_count, 0);
        assert_eq!(metrics.vocabulary_diversity, 0.0);
        assert_eq!(metrics.readability, 50.0);
        assert_eq!(metrics.sentiment, 0.0);
    }
}

#[test]
fn counts_words_and_sentences() {
    let metrics = analyze("The river rose overnight. Nobody expected it! Was anyone watching?");
    assert_eq!(metrics.word_count, 10);
    assert_eq!(metrics.sentence_count, 3);
    assert!((metrics.avg_words_per_sentence - 10.0 / 3.0).abs() < 1e-9);
}

#[test]
fn unterminated_text_counts_one_sentence() {
    let metrics = analyze("no punctuation here at all");
    assert_eq!(metrics.sentence_count, 1);
    assert_eq!(metrics.word_count, 5);
}

#[test]
fn vocabulary_diversity_reflects_repetition() {
    let repetitive = analyze("word word word word word.");
    let varied = analyze("Every token here differs completely.");

    assert!((repetitive.vocabulary_diversity - 0.2).abs() < 1e-9);
    assert_eq!(varied.vocabulary_diversity, 1.0);
}

#[test]
fn contractions_stay_single_tokens() {
    assert_eq!(
        tokens("Don't stop, it's fine."),
        vec!["don't", "stop", "it's", "fine"]
    );
}

#[test]
fn readability_stays_bounded() {
    for text in [
        "Go.",
        "One.",
        ESSAY,
        "Antidisestablishmentarianism characterizes institutionalization paradoxically notwithstanding.",
    ] {
        let metrics = analyze(text);
        assert!((0.0..=100.0).contains(&metrics.readability), "input {text:?}");
    }
}

#[test]
fn syllable_counts_are_plausible() {
    assert_eq!(syllables("cat"), 1);
    assert_eq!(syllables("water"), 2);
    assert_eq!(syllables("beautiful"), 3);
    // Silent e drops a syllable but never below one.
    assert_eq!(syllables("time"), 1);
    assert_eq!(syllables("e"), 1);
}

#[test]
fn grammar_penalizes_sloppy_mechanics() {
    let clean = analyze("The results were clear. Every test passed on the first run.");
    let sloppy = analyze("the results were clear,, every test passed!! but but nobody checked");

    assert!(clean.grammar_score > sloppy.grammar_score);
    assert!((0.0..=100.0).contains(&sloppy.grammar_score));
}

#[test]
fn sentiment_tracks_tone_lexicons() {
    let positive = analyze("The outcome was good, even excellent.");
    let negative = analyze("A poor plan with a harmful outcome is a problem.");
    let neutral = analyze("The committee met on Tuesday.");

    assert!(positive.sentiment > 0.0);
    assert!(negative.sentiment < 0.0);
    assert_eq!(neutral.sentiment, 0.0);
    assert!((-1.0..=1.0).contains(&positive.sentiment));
    assert!((-1.0..=1.0).contains(&negative.sentiment));
}

#[test]
fn sentence_split_drops_empty_segments() {
    let segments = sentences("First... second!? Third.");
    assert_eq!(segments, vec!["First", "second", "Third"]);
}
