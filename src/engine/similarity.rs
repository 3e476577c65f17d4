use super::tokenizer::{TermFrequencies, tokenize};


/// Cosine similarity of the term-frequency vectors of two texts, in `[0, 1]`.
///
/// Returns exactly `0.0` when either text has no terms.
pub fn cosine_similarity(text_a: &str, text_b: &str) -> f64 {
    term_cosine_similarity(&tokenize(text_a), &tokenize(text_b))
}


/// Cosine similarity of two term-frequency vectors.
///
/// The dot product only visits terms present in both vectors. Sums are kept
/// as integers and the magnitudes combined under a single square root, so
/// the result is symmetric bit-for-bit and a vector scores exactly `1.0`
/// against itself. Scores may differ from `dot / (sqrt(|a|²) * sqrt(|b|²))`
/// in the last ulp.
pub fn term_cosine_similarity(a: &TermFrequencies, b: &TermFrequencies) -> f64 {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: u64 = smaller
        .iter()
        .filter_map(|(term, &count)| larger.get(term).map(|&other| (count * other) as u64))
        .sum();

    let denominator = (squared_magnitude(a) as f64 * squared_magnitude(b) as f64).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (dot as f64 / denominator).clamp(0.0, 1.0)
}


fn squared_magnitude(tf: &TermFrequencies) -> u64 {
    tf.values().map(|&c| (c * c) as u64).sum()
}
