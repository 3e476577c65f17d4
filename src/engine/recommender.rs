use tracing::{debug, info};

use super::models::Recommendation;
use super::profile::ProfileBuilder;
use super::ranker;
use crate::catalog::CatalogSource;
use crate::core::cache::CacheStats;
use crate::core::config::CinematchConfig;
use crate::core::error::Result;


/// Ranking entry point over an injected catalog source.
pub struct Recommender<S: CatalogSource> {
    source: S,
    profiles: ProfileBuilder,
    default_limit: usize,
}

impl<S: CatalogSource> Recommender<S> {

    pub fn new(source: S) -> Self {
        Self::with_config(source, &CinematchConfig::default())
    }

    pub fn with_config(source: S, config: &CinematchConfig) -> Self {
        info!(
            "Recommender initialized: items={}, default_limit={}, profile_cache={}",
            source.len(),
            config.default_limit,
            config.profile_cache_size
        );

        Self {
            source,
            profiles: ProfileBuilder::with_cache(config.profile_cache_size),
            default_limit: config.default_limit,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Top `n` items by similarity of their review profile to `query`.
    pub fn recommend(&self, query: &str, n: usize) -> Result<Vec<Recommendation>> {
        let results = ranker::recommend(&self.source, &self.profiles, query, n)?;
        debug!("Query returned {} of {} requested results", results.len(), n);
        Ok(results)
    }

    pub fn recommend_default(&self, query: &str) -> Result<Vec<Recommendation>> {
        self.recommend(query, self.default_limit)
    }

    /// Every item, sorted, without truncation.
    pub fn score_all(&self, query: &str) -> Result<Vec<Recommendation>> {
        ranker::score_all(&self.source, &self.profiles, query)
    }

    pub fn invalidate_profile(&self, item_id: &str) {
        self.profiles.invalidate(item_id);
    }

    pub fn clear_profile_cache(&self) {
        self.profiles.clear();
    }

    pub fn profile_cache_stats(&self) -> Option<CacheStats> {
        self.profiles.cache_stats()
    }
}
