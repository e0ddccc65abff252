//! Search configuration

use serde::{Deserialize, Serialize};

/// Alpha-beta search configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Initial lower bound at the root
    pub alpha: i32,
    /// Initial upper bound at the root
    pub beta: i32,
    /// Keep evaluated subtrees in memory instead of dropping them
    pub retain_tree: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alpha: i32::MIN,
            beta: i32::MAX,
            retain_tree: false,
        }
    }
}

impl SearchConfig {
    /// Default bounds, keeping the whole explored tree for inspection
    pub fn retaining() -> Self {
        Self {
            retain_tree: true,
            ..Default::default()
        }
    }

    /// Search with a custom root window
    pub fn with_bounds(alpha: i32, beta: i32) -> Self {
        Self {
            alpha,
            beta,
            ..Default::default()
        }
    }
}
