use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one transform run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Collapse the Company↔Industry junction to distinct pairs. The
    /// inherited behavior emits one row per raw token, so a token repeated
    /// within one company's list produces a repeated junction row; consumers
    /// that need a true many-to-many set can turn this on.
    pub dedupe_company_industries: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            dedupe_company_industries: false,
        }
    }
}

impl TransformConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
