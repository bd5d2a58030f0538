//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Caps applied to exhaustive path enumeration
    #[serde(default)]
    pub search: SearchConfig,
}

/// Caps for exhaustive path enumeration
///
/// Every field is optional; an absent field leaves that cap off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of paths recorded per enumeration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,

    /// Maximum path length in edges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hops: Option<usize>,

    /// Maximum number of stack expansions per enumeration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,

    /// Wall-clock budget per enumeration, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_budget_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}
