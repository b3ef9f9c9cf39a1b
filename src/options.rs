// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use alloc::string::{String, ToString};
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use crate::symbol::DEFAULT_GENSYM_PREFIX;

/// Per-session compiler settings.
///
/// Every field has a default, so a partial JSON object is accepted:
///
/// ```json
/// { "gensym_prefix": "__t" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Prefix of generated binding names.
    pub gensym_prefix: String,
    /// Symbol that discards the value it is bound to.
    pub wildcard: String,
    /// Symbol that introduces the tail capture in a sequence pattern.
    pub rest_marker: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gensym_prefix: DEFAULT_GENSYM_PREFIX.to_string(),
            wildcard: "_".to_string(),
            rest_marker: "&".to_string(),
        }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Options =
            serde_json::from_str(json).map_err(|e| anyhow!("invalid compiler options: {e}"))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gensym_prefix.is_empty() {
            bail!("gensym_prefix must not be empty");
        }
        if self.wildcard.is_empty() || self.rest_marker.is_empty() {
            bail!("wildcard and rest_marker must not be empty");
        }
        if self.wildcard == self.rest_marker {
            bail!(
                "wildcard and rest_marker must differ, both are `{}`",
                self.wildcard
            );
        }
        Ok(())
    }
}
