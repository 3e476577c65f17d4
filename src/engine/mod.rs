

pub mod models;
pub mod profile;
pub mod ranker;
pub mod recommender;
pub mod similarity;
pub mod tokenizer;

pub use models::Recommendation;
pub use profile::{ProfileBuilder, build_profile};
pub use recommender::Recommender;
pub use similarity::{cosine_similarity, term_cosine_similarity};
pub use tokenizer::{TermFrequencies, tokenize};
