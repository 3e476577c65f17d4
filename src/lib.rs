pub mod catalog;
pub mod core;
pub mod engine;
pub mod sentiment;
pub mod utils;

pub use utils::{render_recommendation, truncate_ellipsis};


pub use catalog::{CatalogSource, InMemoryCatalog, Movie, Review, Sentiment};
pub use crate::core::config::CinematchConfig;
pub use crate::core::error::{CinematchError, Result, validate_limit};
pub use engine::{Recommendation, Recommender, cosine_similarity, tokenize};


pub const DEFAULT_RECOMMENDATION_COUNT: usize = 2;


pub const DEMO_QUERY: &str =
    "I love sci-fi movies with deep philosophical themes and amazing visual effects";
