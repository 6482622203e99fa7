use serde::{Deserialize, Serialize};

use crate::location::Location;

pub const REASON_NO_PATH: &str = "no-path";
pub const REASON_EXPANSION_LIMIT: &str = "expansion-limit";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Option<Vec<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub expanded: u64,
    pub cost: f32,
}

impl PathResult {
    pub fn found(path: Vec<Location>, expanded: u64, cost: f32) -> Self {
        Self { path: Some(path), reason: None, expanded, cost }
    }

    pub fn not_found(reason: &str, expanded: u64) -> Self {
        Self { path: None, reason: Some(reason.to_string()), expanded, cost: 0.0 }
    }

    pub fn is_found(&self) -> bool { self.path.is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn found_result_omits_reason() {
        let pr = PathResult::found(vec![Location::new(0, 0), Location::new(1, 0)], 2, 1.0);
        let v = serde_json::to_value(&pr).unwrap();
        assert!(v.get("reason").is_none());
        assert_eq!(v["path"], json!([{"x": 0, "y": 0}, {"x": 1, "y": 0}]));
        assert_eq!(v["expanded"], Value::from(2));
    }

    #[test]
    fn not_found_result_carries_reason() {
        let pr = PathResult::not_found(REASON_NO_PATH, 7);
        assert!(!pr.is_found());
        let s = serde_json::to_string(&pr).unwrap();
        let de: PathResult = serde_json::from_str(&s).unwrap();
        assert_eq!(de, pr);
        assert_eq!(de.reason.as_deref(), Some("no-path"));
    }
}
