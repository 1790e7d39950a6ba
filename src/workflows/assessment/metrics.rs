use super::domain::TextMetrics;

/// Readability reported when the text has no measurable words.
pub(crate) const NEUTRAL_READABILITY: f64 = 50.0;

const POSITIVE_TONE: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "beneficial",
    "effective",
    "clear",
    "strong",
    "compelling",
    "insightful",
];

const NEGATIVE_TONE: &[&str] = &[
    "bad",
    "poor",
    "negative",
    "harmful",
    "ineffective",
    "problem",
    "weak",
    "confusing",
    "flawed",
    "wrong",
];

/// Compute primitive statistics for a text. Total over all inputs: empty or
/// malformed text yields zeroed counts, zero diversity, and the neutral
/// readability baseline instead of an error.
pub fn analyze(text: &str) -> TextMetrics {
    let tokens = tokens(text);
    let sentences = sentences(text);

    let word_count = tokens.len();
    let sentence_count = sentences.len();

    if word_count == 0 {
        return TextMetrics {
            word_count: 0,
            sentence_count: 0,
            avg_words_per_sentence: 0.0,
            vocabulary_diversity: 0.0,
            readability: NEUTRAL_READABILITY,
            grammar_score: 0.0,
            sentiment: 0.0,
        };
    }

    let avg_words_per_sentence = word_count as f64 / sentence_count.max(1) as f64;

    let mut unique = std::collections::BTreeSet::new();
    for token in &tokens {
        unique.insert(token.as_str());
    }
    let vocabulary_diversity = unique.len() as f64 / word_count as f64;

    let total_syllables: usize = tokens.iter().map(|token| syllables(token)).sum();
    let avg_syllables_per_word = total_syllables as f64 / word_count as f64;

    // Flesch reading ease, clamped to its nominal scale.
    let readability = (206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word)
        .clamp(0.0, 100.0);

    let grammar_score = grammar_score(text, &sentences, &tokens);
    let sentiment = sentiment(&tokens);

    TextMetrics {
        word_count,
        sentence_count,
        avg_words_per_sentence,
        vocabulary_diversity,
        readability,
        grammar_score,
        sentiment,
    }
}

/// Lowercased word tokens: maximal alphanumeric runs, apostrophes kept
/// word-internal so contractions stay single tokens.
pub(crate) fn tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            current.extend(ch.to_lowercase());
        } else if ch == '\'' && !current.is_empty() {
            current.push('\'');
        } else {
            push_token(&mut tokens, &mut current);
        }
    }
    push_token(&mut tokens, &mut current);

    tokens
}

fn push_token(tokens: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim_end_matches('\'');
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    current.clear();
}

/// Sentence segments split on terminal punctuation. A trailing unterminated
/// segment counts, so any text with at least one word has at least one
/// sentence.
pub(crate) fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .collect()
}

/// Approximate syllable count: vowel groups with a silent-e correction,
/// never below one.
pub(crate) fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Proxy score for mechanical correctness. Inspects capitalization after
/// terminal punctuation, balanced quotes and parentheses, repeated
/// punctuation, duplicated words, and the final terminator. Not a
/// parser-backed grammar check.
fn grammar_score(text: &str, sentences: &[&str], tokens: &[String]) -> f64 {
    let mut score: f64 = 100.0;

    let uncapitalized = sentences
        .iter()
        .filter(|sentence| {
            sentence
                .chars()
                .find(|ch| ch.is_alphabetic())
                .is_some_and(|ch| ch.is_lowercase())
        })
        .count();
    if !sentences.is_empty() {
        score -= 25.0 * uncapitalized as f64 / sentences.len() as f64;
    }

    if text.matches('"').count() % 2 != 0 {
        score -= 10.0;
    }
    if text.matches('(').count() != text.matches(')').count() {
        score -= 10.0;
    }

    let mut repeated_punctuation = 0usize;
    let mut previous = ' ';
    for ch in text.chars() {
        if ch == previous && matches!(ch, '!' | '?' | ',') {
            repeated_punctuation += 1;
        }
        previous = ch;
    }
    score -= (5.0 * repeated_punctuation as f64).min(15.0);

    let duplicated_words = tokens
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .count();
    score -= (5.0 * duplicated_words as f64).min(20.0);

    let terminated = text
        .trim_end()
        .chars()
        .last()
        .is_some_and(|ch| matches!(ch, '.' | '!' | '?'));
    if !terminated {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}

/// Lexicon tone signal in [-1, 1]; zero when neither polarity occurs.
fn sentiment(tokens: &[String]) -> f64 {
    let positive = tokens
        .iter()
        .filter(|token| POSITIVE_TONE.contains(&token.as_str()))
        .count() as f64;
    let negative = tokens
        .iter()
        .filter(|token| NEGATIVE_TONE.contains(&token.as_str()))
        .count() as f64;

    if positive + negative == 0.0 {
        return 0.0;
    }

    (positive - negative) / (positive + negative)
}
