use serde::{Deserialize, Serialize};

use super::error::Result;


pub const ENV_PREFIX: &str = "CINEMATCH";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CinematchConfig {
    /// Result count used when the caller does not pass one.
    pub default_limit: usize,
    /// Capacity of the per-item profile memo. `0` disables it.
    pub profile_cache_size: usize,
    /// Catalog snapshot to load instead of the built-in sample.
    pub catalog_path: Option<String>,
    pub log_filter: String,
}

impl CinematchConfig {

    pub fn new(default_limit: usize) -> Self {
        Self {
            default_limit,
            profile_cache_size: 0,
            catalog_path: None,
            log_filter: "info".to_string(),
        }
    }

    /// Layers defaults, an optional config file, then `CINEMATCH_*`
    /// environment variables.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("default_limit", defaults.default_limit as u64)?
            .set_default("profile_cache_size", defaults.profile_cache_size as u64)?
            .set_default("log_filter", defaults.log_filter)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        Ok(config)
    }


    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    pub fn profile_cache_enabled(&self) -> bool {
        self.profile_cache_size > 0
    }
}

impl Default for CinematchConfig {
    fn default() -> Self {
        Self::new(crate::DEFAULT_RECOMMENDATION_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io::Write;

    // Serializes tests that read or write `CINEMATCH_*` variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 3] = [
        "CINEMATCH_DEFAULT_LIMIT",
        "CINEMATCH_PROFILE_CACHE_SIZE",
        "CINEMATCH_CATALOG_PATH",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            // SAFETY: callers hold ENV_LOCK.
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    fn test_defaults_match_original_limit() {
        let config = CinematchConfig::default();
        assert_eq!(config.default_limit, 2);
        assert!(!config.profile_cache_enabled());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = ENV_LOCK.lock();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "default_limit = 5").unwrap();
        writeln!(file, "profile_cache_size = 64").unwrap();
        writeln!(file, "catalog_path = \"movies.json\"").unwrap();

        let config = CinematchConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.profile_cache_size, 64);
        assert_eq!(config.catalog_path.as_deref(), Some("movies.json"));
        assert_eq!(config.log_filter, "info");
        assert!(config.profile_cache_enabled());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = CinematchConfig::load(Some("/nonexistent/cinematch-config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let _guard = ENV_LOCK.lock();
        clear_env();
        // SAFETY: ENV_LOCK is held for the rest of the test.
        unsafe {
            std::env::set_var("CINEMATCH_DEFAULT_LIMIT", "5");
            std::env::set_var("CINEMATCH_PROFILE_CACHE_SIZE", "8");
            std::env::set_var("CINEMATCH_CATALOG_PATH", "x.json");
        }

        let config = CinematchConfig::from_env();
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.profile_cache_size, 8);
        assert_eq!(config.catalog_path.as_deref(), Some("x.json"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_env_wins_over_file() {
        let _guard = ENV_LOCK.lock();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "default_limit = 5").unwrap();
        writeln!(file, "profile_cache_size = 64").unwrap();

        // SAFETY: ENV_LOCK is held for the rest of the test.
        unsafe { std::env::set_var("CINEMATCH_DEFAULT_LIMIT", "7") };

        let config = CinematchConfig::load(file.path().to_str());
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.default_limit, 7);
        assert_eq!(config.profile_cache_size, 64);
    }
}
