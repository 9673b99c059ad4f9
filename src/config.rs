// src/config.rs
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::gesture::DEFAULT_Z_INDEX;

const EMBEDDED_CONFIG: &str = include_str!("../config/default.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stacking order given to resized images so they sit above the page.
    pub z_index: i32,
    /// Userscript-style URL patterns (`*` wildcard) where nothing is installed.
    pub exclude: Vec<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_Z_INDEX,
            exclude: vec![
                "http://www.chess.com/*".to_string(),
                "http://chess.com/*".to_string(),
                "https://neocities.org/*".to_string(),
            ],
            log_level: String::from("info"),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration bundled into the binary.
    pub fn embedded() -> Result<Self, Error> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn is_excluded(&self, url: &str) -> bool {
        self.exclude
            .iter()
            .any(|pattern| wildcard_match(pattern, url))
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Match `text` against `pattern`, where `*` stands for any run of characters.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return text.is_empty();
    };
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };

    let parts: Vec<&str> = parts.collect();
    let Some((last, middle)) = parts.split_last() else {
        // No wildcard at all
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}
