

pub mod cache;
pub mod config;
pub mod error;

pub use self::cache::{CacheStats, ProfileCache};
pub use self::config::CinematchConfig;
pub use self::error::{CinematchError, Result, validate_limit};
