use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};


#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


/// A catalog entry. Read-only to the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub genres: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u16>,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        overview: impl Into<String>,
        genres: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            overview: overview.into(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            poster_url: None,
            rating: None,
            release_year: None,
        }
    }

    pub fn with_poster_url(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_release_year(mut self, release_year: u16) -> Self {
        self.release_year = Some(release_year);
        self
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub movie_id: String,
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
}

impl Review {
    /// New review labelled by the keyword classifier.
    pub fn new(movie_id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let sentiment = crate::sentiment::classify(&text);
        Self {
            id: new_review_id(),
            movie_id: movie_id.into(),
            text,
            rating: None,
            sentiment,
            timestamp: Utc::now(),
        }
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }
}


pub(crate) fn new_review_id() -> String {
    format!("rev_{}", &uuid::Uuid::new_v4().simple().to_string()[..12])
}
