use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use waypath_core::{Connectivity, SearchOptions};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub options: SearchOptions,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { options: SearchOptions::default(), log_json: false }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(n) = lookup("WAYPATH_MAX_EXPANSIONS").and_then(|s| s.trim().parse::<u64>().ok()) {
            cfg.options.max_expansions = n;
        }
        if let Some(c) = lookup("WAYPATH_CONNECTIVITY").and_then(|s| s.parse::<Connectivity>().ok()) {
            cfg.options.connectivity = c;
        }
        if let Some(v) = lookup("WAYPATH_LOG_JSON") {
            cfg.log_json = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        cfg
    }

    /// Replaces the search options with the contents of a JSON file; missing fields take defaults.
    pub fn load_options_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path).with_context(|| format!("reading options file {}", path.display()))?;
        self.options = serde_json::from_str(&text).with_context(|| format!("parsing options file {}", path.display()))?;
        Ok(())
    }
}
