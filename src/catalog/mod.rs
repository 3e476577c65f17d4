

pub mod memory;
pub mod models;
pub mod source;

pub use memory::InMemoryCatalog;
pub use models::{Movie, Review, Sentiment};
pub use source::CatalogSource;
