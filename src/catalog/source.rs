use super::models::{Movie, Review};


/// Read-only view of movies and their reviews.
///
/// The engine only ever reads through this trait, so a persistent store can
/// replace [`super::InMemoryCatalog`] without touching ranking code. An
/// implementation must present a stable snapshot for the duration of one
/// ranking call.
pub trait CatalogSource {
    /// All item ids, in catalog order. Ranking ties fall back to this order.
    fn item_ids(&self) -> Vec<String>;

    fn get_item(&self, id: &str) -> Option<Movie>;

    /// Reviews for `id` in storage order; empty when there are none.
    fn get_reviews(&self, id: &str) -> Vec<Review>;

    fn len(&self) -> usize {
        self.item_ids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn item_ids(&self) -> Vec<String> {
        (**self).item_ids()
    }

    fn get_item(&self, id: &str) -> Option<Movie> {
        (**self).get_item(id)
    }

    fn get_reviews(&self, id: &str) -> Vec<Review> {
        (**self).get_reviews(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<T: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<T> {
    fn item_ids(&self) -> Vec<String> {
        (**self).item_ids()
    }

    fn get_item(&self, id: &str) -> Option<Movie> {
        (**self).get_item(id)
    }

    fn get_reviews(&self, id: &str) -> Vec<Review> {
        (**self).get_reviews(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
