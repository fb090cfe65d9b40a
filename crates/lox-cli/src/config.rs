//! CLI configuration via environment variables
//!
//! Lox uses environment variables for optional configuration.
//! Command-line flags take precedence over them.

use std::env;
use std::path::PathBuf;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Default to JSON diagnostic output (LOX_DIAGNOSTICS=json)
    pub default_json: bool,
    /// Custom history file path (LOX_HISTORY_FILE=/path/to/file)
    pub history_file: Option<PathBuf>,
    /// Disable history by default (LOX_NO_HISTORY=1)
    pub no_history: bool,
    /// Tracing filter directives (LOX_LOG=lox_runtime=debug)
    pub log: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            default_json: env::var("LOX_DIAGNOSTICS")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            history_file: env::var("LOX_HISTORY_FILE").ok().map(PathBuf::from),
            no_history: env::var("LOX_NO_HISTORY").is_ok(),
            log: env::var("LOX_LOG").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Get the history file path
    ///
    /// Returns:
    /// 1. LOX_HISTORY_FILE if set
    /// 2. ~/.lox/history if home directory exists
    /// 3. None otherwise
    pub fn get_history_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.history_file {
            return Some(path.clone());
        }
        dirs::home_dir().map(|home| home.join(".lox").join("history"))
    }

    /// Tracing filter to install: LOX_LOG, falling back to RUST_LOG
    pub fn log_filter(&self) -> Option<String> {
        self.log
            .clone()
            .or_else(|| env::var("RUST_LOG").ok().filter(|v| !v.is_empty()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in [
            "LOX_DIAGNOSTICS",
            "LOX_HISTORY_FILE",
            "LOX_NO_HISTORY",
            "LOX_LOG",
            "RUST_LOG",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();

        let config = Config::from_env();
        assert!(!config.default_json);
        assert!(config.history_file.is_none());
        assert!(!config.no_history);
        assert!(config.log_filter().is_none());
    }

    #[test]
    #[serial]
    fn test_config_json_diagnostics() {
        clear_env();
        env::set_var("LOX_DIAGNOSTICS", "JSON");
        assert!(Config::from_env().default_json);

        env::set_var("LOX_DIAGNOSTICS", "human");
        assert!(!Config::from_env().default_json);
        env::remove_var("LOX_DIAGNOSTICS");
    }

    #[test]
    #[serial]
    fn test_config_custom_history() {
        clear_env();
        env::set_var("LOX_HISTORY_FILE", "/tmp/custom_history");
        let config = Config::from_env();
        assert_eq!(
            config.get_history_path(),
            Some(PathBuf::from("/tmp/custom_history"))
        );
        env::remove_var("LOX_HISTORY_FILE");
    }

    #[test]
    #[serial]
    fn test_config_no_history() {
        clear_env();
        env::set_var("LOX_NO_HISTORY", "1");
        assert!(Config::from_env().no_history);
        env::remove_var("LOX_NO_HISTORY");
    }

    #[test]
    #[serial]
    fn test_log_filter_precedence() {
        clear_env();
        env::set_var("RUST_LOG", "warn");
        assert_eq!(Config::from_env().log_filter(), Some("warn".to_string()));

        env::set_var("LOX_LOG", "lox_runtime=trace");
        assert_eq!(
            Config::from_env().log_filter(),
            Some("lox_runtime=trace".to_string())
        );
        clear_env();
    }
}
