use std::collections::HashMap;


/// Distinct token to occurrence count.
pub type TermFrequencies = HashMap<String, usize>;


/// Lowercases `text`, splits it on whitespace runs and counts each token.
///
/// There is no punctuation stripping or stemming: `"visuals,"` and
/// `"visuals"` are different terms.
pub fn tokenize(text: &str) -> TermFrequencies {
    let mut counts = TermFrequencies::new();
    for token in text.to_lowercase().split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}
