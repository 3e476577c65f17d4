use tracing::debug;

use crate::catalog::CatalogSource;
use crate::core::cache::{CacheStats, ProfileCache};


/// Builds the representative text of an item from its reviews.
pub struct ProfileBuilder {
    cache: Option<ProfileCache>,
}

impl ProfileBuilder {

    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Memoizes up to `capacity` profiles. A zero capacity means no memo.
    pub fn with_cache(capacity: usize) -> Self {
        Self {
            cache: ProfileCache::new(capacity),
        }
    }

    /// Review texts joined by single spaces, in the order the source yields
    /// them. An item without reviews has an empty profile.
    pub fn build<S: CatalogSource + ?Sized>(&self, source: &S, item_id: &str) -> String {
        if let Some(cache) = &self.cache {
            if let Some(profile) = cache.get(item_id) {
                return profile;
            }
        }

        let profile = join_review_texts(source, item_id);
        debug!("Built profile for {} ({} chars)", item_id, profile.len());

        if let Some(cache) = &self.cache {
            cache.set(item_id, profile.clone());
        }
        profile
    }

    pub fn invalidate(&self, item_id: &str) {
        if let Some(cache) = &self.cache {
            cache.invalidate(item_id);
        }
    }

    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ProfileCache::stats)
    }
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}


/// Uncached profile of one item.
pub fn build_profile<S: CatalogSource + ?Sized>(source: &S, item_id: &str) -> String {
    join_review_texts(source, item_id)
}

fn join_review_texts<S: CatalogSource + ?Sized>(source: &S, item_id: &str) -> String {
    source
        .get_reviews(item_id)
        .iter()
        .map(|review| review.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, Movie, Review};

    #[test]
    fn test_profile_joins_in_review_order() {
        let catalog = InMemoryCatalog::sample();
        assert_eq!(
            build_profile(&catalog, "1"),
            "Mind-blowing special effects and deep philosophical themes Revolutionary sci-fi that changed the genre"
        );
    }

    #[test]
    fn test_profile_without_reviews_is_empty() {
        let catalog = InMemoryCatalog::new()
            .with_movie(Movie::new("1", "Silent", "", &[]))
            .unwrap();
        assert_eq!(build_profile(&catalog, "1"), "");
        assert_eq!(build_profile(&catalog, "missing"), "");
    }

    #[test]
    fn test_profile_keeps_duplicates() {
        let catalog = InMemoryCatalog::new()
            .with_movie(Movie::new("1", "Echo", "", &[]))
            .unwrap()
            .with_review(Review::new("1", "again"))
            .unwrap()
            .with_review(Review::new("1", "again"))
            .unwrap();
        assert_eq!(build_profile(&catalog, "1"), "again again");
    }

    #[test]
    fn test_cached_builder_matches_uncached() {
        let catalog = InMemoryCatalog::sample();
        let builder = ProfileBuilder::with_cache(8);

        for id in ["1", "2", "3", "1", "2", "3"] {
            assert_eq!(builder.build(&catalog, id), build_profile(&catalog, id));
        }

        let stats = builder.cache_stats().unwrap();
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.size, 3);
    }

    #[test]
    fn test_invalidate_rebuilds_after_review_change() {
        let mut catalog = InMemoryCatalog::new()
            .with_movie(Movie::new("1", "Draft", "", &[]))
            .unwrap()
            .with_review(Review::new("1", "first"))
            .unwrap();
        let builder = ProfileBuilder::with_cache(4);
        assert_eq!(builder.build(&catalog, "1"), "first");

        catalog.insert_review(Review::new("1", "second")).unwrap();
        assert_eq!(builder.build(&catalog, "1"), "first");

        builder.invalidate("1");
        assert_eq!(builder.build(&catalog, "1"), "first second");
    }

    #[test]
    fn test_uncached_builder_has_no_stats() {
        let builder = ProfileBuilder::default();
        assert!(builder.cache_stats().is_none());
        builder.invalidate("1");
        builder.clear();
    }
}
