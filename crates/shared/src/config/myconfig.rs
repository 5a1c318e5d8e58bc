use crate::config::PoolSettings;
use anyhow::{Context, Result, anyhow};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub pool: PoolSettings,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `init` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("SUPABASE_DB_CONN"))
            .context("Missing environment variable: DATABASE_URL")?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = env_or(&lookup, "APP_PORT", 8080u16)
            .context("APP_PORT must be a valid u16 integer")?;

        let defaults = PoolSettings::default();

        let max_connections = env_or(&lookup, "DB_MAX_CONN", defaults.max_connections)
            .context("DB_MAX_CONN must be a valid u32 integer")?;
        let min_connections = env_or(&lookup, "DB_MIN_CONN", defaults.min_connections)
            .context("DB_MIN_CONN must be a valid u32 integer")?;
        let max_lifetime = env_or(
            &lookup,
            "DB_MAX_LIFETIME_SECS",
            defaults.max_lifetime.as_secs(),
        )
        .context("DB_MAX_LIFETIME_SECS must be a valid u64 integer")?;
        let acquire_timeout = env_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )
        .context("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64 integer")?;

        Ok(Self {
            database_url,
            run_migrations,
            port,
            pool: PoolSettings {
                max_connections,
                min_connections,
                max_lifetime: Duration::from_secs(max_lifetime),
                acquire_timeout: Duration::from_secs(acquire_timeout),
            },
        })
    }
}

fn env_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/pos")]).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/pos");
        assert!(config.run_migrations);
        assert_eq!(config.port, 8080);
        assert_eq!(config.pool.max_connections, 25);
        assert_eq!(config.pool.min_connections, 5);
        assert_eq!(config.pool.max_lifetime, Duration::from_secs(3600));
        assert_eq!(config.pool.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn supabase_connection_is_a_fallback() {
        let config = load(&[("SUPABASE_DB_CONN", "postgres://supabase/pos")]).unwrap();
        assert_eq!(config.database_url, "postgres://supabase/pos");

        let config = load(&[
            ("DATABASE_URL", "postgres://primary/pos"),
            ("SUPABASE_DB_CONN", "postgres://supabase/pos"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://primary/pos");
    }

    #[test]
    fn missing_url_is_an_error() {
        let err = load(&[("APP_PORT", "9000")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn run_migrations_accepts_only_true_or_false() {
        let url = ("DATABASE_URL", "postgres://localhost/pos");

        assert!(!load(&[url, ("RUN_MIGRATIONS", "false")]).unwrap().run_migrations);
        assert!(load(&[url, ("RUN_MIGRATIONS", "true")]).unwrap().run_migrations);

        let err = load(&[url, ("RUN_MIGRATIONS", "yes")]).unwrap_err();
        assert!(err.to_string().contains("RUN_MIGRATIONS"));
    }

    #[test]
    fn numeric_values_are_trimmed_and_checked() {
        let url = ("DATABASE_URL", "postgres://localhost/pos");

        let config = load(&[url, ("DB_MAX_CONN", " 40 "), ("APP_PORT", "3000")]).unwrap();
        assert_eq!(config.pool.max_connections, 40);
        assert_eq!(config.port, 3000);

        let err = load(&[url, ("DB_MAX_CONN", "lots")]).unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONN"));
    }
}
