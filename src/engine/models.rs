use serde::{Deserialize, Serialize};

use crate::catalog::Movie;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub movie: Movie,
    /// Cosine similarity to the query, in `[0, 1]`.
    pub similarity: f64,
}

impl Recommendation {
    pub fn new(movie: Movie, similarity: f64) -> Self {
        Self { movie, similarity }
    }

    pub fn item_id(&self) -> &str {
        &self.movie.id
    }
}
