use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use super::models::{Movie, Review, Sentiment, new_review_id};
use super::source::CatalogSource;
use crate::core::error::{CinematchError, Result};


/// Insertion-ordered in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    movies: Vec<Movie>,
    index: HashMap<String, usize>,
    reviews: HashMap<String, Vec<Review>>,
}


#[derive(Debug, Deserialize)]
struct CatalogSnapshot {
    #[serde(default)]
    movies: Vec<Movie>,
    #[serde(default)]
    reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Deserialize)]
struct ReviewRecord {
    id: Option<String>,
    movie_id: String,
    text: String,
    rating: Option<f32>,
    sentiment: Option<Sentiment>,
    timestamp: Option<DateTime<Utc>>,
}

impl From<ReviewRecord> for Review {
    fn from(record: ReviewRecord) -> Self {
        let sentiment = record
            .sentiment
            .unwrap_or_else(|| crate::sentiment::classify(&record.text));

        Review {
            id: record.id.unwrap_or_else(new_review_id),
            movie_id: record.movie_id,
            text: record.text,
            rating: record.rating,
            sentiment,
            timestamp: record.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_movie(&mut self, movie: Movie) -> Result<()> {
        if self.index.contains_key(&movie.id) {
            warn!("Rejected duplicate movie id {}", movie.id);
            return Err(CinematchError::DuplicateItem(movie.id));
        }
        self.index.insert(movie.id.clone(), self.movies.len());
        self.movies.push(movie);
        Ok(())
    }

    /// Appends a review. The referenced movie must already be present.
    pub fn insert_review(&mut self, review: Review) -> Result<()> {
        if !self.index.contains_key(&review.movie_id) {
            warn!("Review {} references unknown movie {}", review.id, review.movie_id);
            return Err(CinematchError::ItemNotFound(review.movie_id));
        }
        self.reviews
            .entry(review.movie_id.clone())
            .or_default()
            .push(review);
        Ok(())
    }

    pub fn with_movie(mut self, movie: Movie) -> Result<Self> {
        self.insert_movie(movie)?;
        Ok(self)
    }

    pub fn with_review(mut self, review: Review) -> Result<Self> {
        self.insert_review(review)?;
        Ok(self)
    }

    pub fn review_count(&self) -> usize {
        self.reviews.values().map(Vec::len).sum()
    }

    /// Parses a `{ "movies": [...], "reviews": [...] }` snapshot. Reviews
    /// without a sentiment label are classified on load.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for movie in snapshot.movies {
            catalog.insert_movie(movie)?;
        }
        for record in snapshot.reviews {
            catalog.insert_review(record.into())?;
        }

        debug!(
            "Loaded catalog snapshot: {} movies, {} reviews",
            catalog.movies.len(),
            catalog.review_count()
        );
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// The three-film demonstration catalog.
    pub fn sample() -> Self {
        let movies = [
            Movie::new(
                "1",
                "The Matrix",
                "A computer programmer discovers a mysterious world of artificial reality.",
                &["sci-fi", "action"],
            ),
            Movie::new(
                "2",
                "Inception",
                "A thief who enters the dreams of others to steal secrets.",
                &["sci-fi", "action", "thriller"],
            ),
            Movie::new(
                "3",
                "The Dark Knight",
                "Batman faces his greatest challenge against the Joker.",
                &["action", "crime", "drama"],
            ),
        ];

        let reviews = [
            (
                "1",
                "Mind-blowing special effects and deep philosophical themes",
                Sentiment::Positive,
            ),
            ("1", "Revolutionary sci-fi that changed the genre", Sentiment::Positive),
            ("2", "Complex plot with amazing visuals", Sentiment::Positive),
            ("2", "Sometimes confusing but overall great", Sentiment::Neutral),
            ("3", "Heath Ledger's performance is legendary", Sentiment::Positive),
            ("3", "Dark and intense superhero movie", Sentiment::Positive),
        ];

        let mut catalog = Self::new();
        for (position, movie) in movies.into_iter().enumerate() {
            catalog.index.insert(movie.id.clone(), position);
            catalog.movies.push(movie);
        }
        for (movie_id, text, sentiment) in reviews {
            catalog
                .reviews
                .entry(movie_id.to_string())
                .or_default()
                .push(Review::new(movie_id, text).with_sentiment(sentiment));
        }
        catalog
    }
}

impl CatalogSource for InMemoryCatalog {
    fn item_ids(&self) -> Vec<String> {
        self.movies.iter().map(|m| m.id.clone()).collect()
    }

    fn get_item(&self, id: &str) -> Option<Movie> {
        self.index.get(id).map(|&i| self.movies[i].clone())
    }

    fn get_reviews(&self, id: &str) -> Vec<Review> {
        self.reviews.get(id).cloned().unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.movies.len()
    }
}
