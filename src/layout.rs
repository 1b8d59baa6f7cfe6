//! Named wiring layouts loadable from configuration files.
//!
//! An installation usually carves several named regions out of one physical
//! strand (a full grid plus independent sub-grids that alias parts of it).
//! `LayoutConfig` is the serde model for that wiring description, so segment
//! lists can live in a JSON file next to the deployment instead of in code.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{WeaveError, WeaveResult};
use crate::grid::segment::Segment;

/// Named grid regions, each an ordered segment list (top row first).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutConfig {
    /// Region name to the segments spanning it.
    pub grids: BTreeMap<String, Vec<Segment>>,
}

impl LayoutConfig {
    /// Parse a layout from JSON text.
    pub fn from_json_str(json: &str) -> WeaveResult<Self> {
        serde_json::from_str(json).map_err(|e| WeaveError::config(format!("parse layout: {e}")))
    }

    /// Read and parse a layout file.
    pub fn from_json_file(path: impl AsRef<Path>) -> WeaveResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read layout file '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Segments of the named region, if present.
    pub fn segments_for(&self, name: &str) -> Option<&[Segment]> {
        self.grids.get(name).map(Vec::as_slice)
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
