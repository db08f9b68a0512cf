use crate::{env_or_default, ConfigError, FromEnv};

/// SQLite configuration for the embedded store.
///
/// The database lives in a single file; `mode=rwc` creates it on first run.
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    pub path: String,
}

impl SqliteConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Connection URL for the file-backed database
    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }

    /// Connection URL for an in-memory database (tests, throwaway runs)
    pub fn memory_url() -> &'static str {
        "sqlite::memory:"
    }
}

impl FromEnv for SqliteConfig {
    /// Reads from environment variables with sensible defaults:
    /// - DATABASE_PATH: defaults to "data/blog.db"
    fn from_env() -> Result<Self, ConfigError> {
        let path = env_or_default("DATABASE_PATH", "data/blog.db");
        Ok(Self { path })
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: "data/blog.db".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_config_from_env_default() {
        temp_env::with_var_unset("DATABASE_PATH", || {
            let config = SqliteConfig::from_env().unwrap();
            assert_eq!(config.path, "data/blog.db");
            assert_eq!(config.url(), "sqlite://data/blog.db?mode=rwc");
        });
    }

    #[test]
    fn test_sqlite_config_from_env_custom_path() {
        temp_env::with_var("DATABASE_PATH", Some("/tmp/test.db"), || {
            let config = SqliteConfig::from_env().unwrap();
            assert_eq!(config.url(), "sqlite:///tmp/test.db?mode=rwc");
        });
    }
}
