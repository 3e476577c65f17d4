use tracing::{debug, warn};

use super::models::Recommendation;
use super::profile::ProfileBuilder;
use super::similarity::term_cosine_similarity;
use super::tokenizer::tokenize;
use crate::catalog::CatalogSource;
use crate::core::error::{CinematchError, Result};


/// Scores every catalog item against `query` and sorts by descending
/// similarity.
///
/// The sort is stable, so equal scores keep catalog order. An id listed by
/// the source that it cannot resolve is an integrity error, not a skip.
pub fn score_all<S: CatalogSource + ?Sized>(
    source: &S,
    profiles: &ProfileBuilder,
    query: &str,
) -> Result<Vec<Recommendation>> {
    let query_terms = tokenize(query);
    let ids = source.item_ids();
    let mut scored = Vec::with_capacity(ids.len());

    for id in ids {
        let Some(movie) = source.get_item(&id) else {
            warn!("Catalog lists item {} but cannot resolve it", id);
            return Err(CinematchError::ItemNotFound(id));
        };

        let profile = profiles.build(source, &id);
        let similarity = term_cosine_similarity(&query_terms, &tokenize(&profile));
        debug!("Scored {} ({}): {:.4}", id, movie.title, similarity);

        scored.push(Recommendation::new(movie, similarity));
    }

    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    Ok(scored)
}


/// The `n` best matches; fewer when the catalog is smaller, none for `n = 0`.
pub fn recommend<S: CatalogSource + ?Sized>(
    source: &S,
    profiles: &ProfileBuilder,
    query: &str,
    n: usize,
) -> Result<Vec<Recommendation>> {
    let mut ranked = score_all(source, profiles, query)?;
    ranked.truncate(n);
    Ok(ranked)
}
