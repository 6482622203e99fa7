use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

/// Which cells count as adjacent when expanding a location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// N, E, S, W.
    Four,
    /// Orthogonal plus diagonal moves.
    #[default]
    Eight,
}

impl std::str::FromStr for Connectivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "four" => Ok(Connectivity::Four),
            "8" | "eight" => Ok(Connectivity::Eight),
            other => Err(format!("unknown connectivity '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub max_expansions: u64,
    pub connectivity: Connectivity,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_expansions: DEFAULT_MAX_EXPANSIONS, connectivity: Connectivity::Eight }
    }
}
