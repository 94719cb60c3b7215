use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup aborts if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON knowledge base to load instead of the embedded default.
    pub kb_path: Option<PathBuf>,
    /// Upper bound on rows accepted by a single report request.
    pub batch_max_rows: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let batch_max_rows = lookup("ALIGNMENT_BATCH_MAX_ROWS")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<usize>()
            .context("ALIGNMENT_BATCH_MAX_ROWS must be a positive integer")?;
        if batch_max_rows == 0 {
            bail!("ALIGNMENT_BATCH_MAX_ROWS must be greater than 0");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            kb_path: lookup("ALIGNMENT_KB_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            batch_max_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.kb_path.is_none());
        assert_eq!(config.batch_max_rows, 5000);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("RUST_LOG", "debug"),
            ("ALIGNMENT_KB_PATH", "/etc/alignment/kb.json"),
            ("ALIGNMENT_BATCH_MAX_ROWS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.kb_path, Some(PathBuf::from("/etc/alignment/kb.json")));
        assert_eq!(config.batch_max_rows, 250);
    }

    #[test]
    fn test_blank_kb_path_means_embedded() {
        let config = Config::from_lookup(lookup_from(&[("ALIGNMENT_KB_PATH", "  ")])).unwrap();
        assert!(config.kb_path.is_none());
    }

    #[test]
    fn test_rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_rejects_zero_batch_limit() {
        assert!(Config::from_lookup(lookup_from(&[("ALIGNMENT_BATCH_MAX_ROWS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("ALIGNMENT_BATCH_MAX_ROWS", "-3")])).is_err());
    }
}
