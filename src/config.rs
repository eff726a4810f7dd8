//! Solver configuration, loadable from JSON.
//!
//! Every field has a default, so `{}` is a valid config:
//!
//! ```json
//! { "max_depth": 10, "limits": { "max_tilts": 10000000, "max_sequences": 1000000 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Longest tilt sequence the search considers.
pub const MAX_DEPTH: usize = 10;

/// Upper bound accepted for `max_depth`; the path set grows as `4 * 2^(depth-1)`.
pub const MAX_SUPPORTED_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Work budgets. A search that exceeds one fails with [`Error::LimitExceeded`].
///
/// - `max_tilts`: board tilts applied, summed over all attempts
/// - `max_sequences`: sequence attempts (or BFS states expanded)
pub struct ResourceLimits {
    pub max_tilts: u64,
    pub max_sequences: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_tilts: 10_000_000,
            max_sequences: 1_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub max_depth: usize,
    pub limits: ResourceLimits,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            limits: ResourceLimits::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SUPPORTED_DEPTH).contains(&self.max_depth) {
            return Err(Error::InvalidConfig {
                reason: format!(
                    "max_depth must be in 1..={MAX_SUPPORTED_DEPTH}, got {}",
                    self.max_depth
                ),
            });
        }
        if self.limits.max_tilts == 0 || self.limits.max_sequences == 0 {
            return Err(Error::InvalidConfig {
                reason: "resource limits must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<SolverConfig> {
        let cfg: SolverConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<SolverConfig> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
