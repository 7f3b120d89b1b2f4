//! YAML loading for map graphs.
//!
//! Each record kind is a list under its own key; missing keys are empty.
//!
//! ```yaml
//! points:
//!   - { pid: 1, x: 1.0, y: 1.0, z: 0.0 }
//! lines:
//!   - { lid: 1, bpid: 1, fpid: 2, blid: 0, flid: 2 }
//! areas:
//!   - { aid: 1, slid: 1, elid: 4 }
//! way_areas:
//!   - { waid: 1, aid: 1 }
//! ```

use std::path::Path;

use crate::error::Result;

use super::graph::{Area, Line, MapGraph, Point, WayArea};

impl MapGraph {
    /// Load a map graph from a YAML file.
    ///
    /// # Errors
    /// Fails on I/O errors, malformed YAML, id `0` or duplicate ids.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a map graph from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let graph: MapGraph = serde_yaml::from_str(yaml)?;
        log::debug!(
            "Loaded map graph: {} points, {} lines, {} areas, {} way-areas",
            graph.count::<Point>(),
            graph.count::<Line>(),
            graph.count::<Area>(),
            graph.count::<WayArea>()
        );
        Ok(graph)
    }

    /// Serialize the graph to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
