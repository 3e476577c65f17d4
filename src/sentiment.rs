//! Keyword sentiment labelling for short review snippets.
//!
//! Stateless and independent of ranking: a text is lowercased, split on
//! whitespace and its tokens counted against two fixed keyword sets.

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::catalog::models::{Review, Sentiment};

lazy_static! {
    static ref POSITIVE_WORDS: HashSet<&'static str> =
        ["great", "amazing", "excellent", "good", "wonderful", "fantastic"]
            .into_iter()
            .collect();
    static ref NEGATIVE_WORDS: HashSet<&'static str> =
        ["bad", "poor", "terrible", "awful", "horrible"].into_iter().collect();
}


/// Tokens keep their punctuation, so `"great!"` does not count as `"great"`.
pub fn classify(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let (positive, negative) = lowered.split_whitespace().fold((0usize, 0usize), |(p, n), word| {
        (
            p + usize::from(POSITIVE_WORDS.contains(word)),
            n + usize::from(NEGATIVE_WORDS.contains(word)),
        )
    });

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentSummary {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Label with the strictly highest count; ties and empty summaries are neutral.
    pub fn dominant(&self) -> Sentiment {
        if self.positive > self.neutral && self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.neutral && self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }
}


/// Tallies the stored labels of `reviews`.
pub fn summarize<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> SentimentSummary {
    let mut summary = SentimentSummary::default();
    for review in reviews {
        summary.record(review.sentiment);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_positive() {
        assert_eq!(classify("Great movie with AMAZING visuals"), Sentiment::Positive);
    }

    #[test]
    fn test_classify_negative() {
        assert_eq!(classify("bad plot and terrible acting, good score"), Sentiment::Negative);
    }

    #[test]
    fn test_classify_tie_is_neutral() {
        assert_eq!(classify("good but bad"), Sentiment::Neutral);
        assert_eq!(classify(""), Sentiment::Neutral);
        assert_eq!(classify("Dark and intense superhero movie"), Sentiment::Neutral);
    }

    #[test]
    fn test_classify_keeps_punctuation() {
        assert_eq!(classify("great!"), Sentiment::Neutral);
        assert_eq!(classify("great! great"), Sentiment::Positive);
    }

    #[test]
    fn test_summarize_and_dominant() {
        let reviews = vec![
            Review::new("1", "great").with_sentiment(Sentiment::Positive),
            Review::new("1", "meh").with_sentiment(Sentiment::Neutral),
            Review::new("1", "wonderful").with_sentiment(Sentiment::Positive),
        ];
        let summary = summarize(&reviews);
        assert_eq!(summary, SentimentSummary { positive: 2, neutral: 1, negative: 0 });
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.dominant(), Sentiment::Positive);
    }

    #[test]
    fn test_dominant_tie_and_empty() {
        let tie = SentimentSummary { positive: 1, neutral: 0, negative: 1 };
        assert_eq!(tie.dominant(), Sentiment::Neutral);
        assert_eq!(SentimentSummary::default().dominant(), Sentiment::Neutral);
    }
}
