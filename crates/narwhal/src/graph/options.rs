//! Graph configuration options.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Topology switches fixed at construction time.
///
/// Serializes with camelCase keys (`weighted`, `directed`, `selfCycling`); missing keys
/// default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphOptions {
    pub weighted: bool,
    pub directed: bool,
    pub self_cycling: bool,
}

impl GraphOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }
}
