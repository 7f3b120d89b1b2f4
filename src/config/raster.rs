//! Top-level configuration and conversion methods.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::GridMap;
use crate::tf::FrameTree;

use super::frames::FrameSection;
use super::grid::GridSection;
use super::layers::LayerSection;

fn default_layers() -> Vec<LayerSection> {
    vec![LayerSection::default()]
}

/// Full rasterizer configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Grid geometry
    #[serde(default)]
    pub grid: GridSection,

    /// Frames and static transforms
    #[serde(default)]
    pub frames: FrameSection,

    /// Output layers, filled in order
    #[serde(default = "default_layers")]
    pub layers: Vec<LayerSection>,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            grid: GridSection::default(),
            frames: FrameSection::default(),
            layers: default_layers(),
        }
    }
}

impl RasterConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and layer names.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        if self.frames.grid_frame.is_empty() || self.frames.map_frame.is_empty() {
            return Err(Error::Config("frame names must not be empty".to_string()));
        }

        let mut names = HashSet::new();
        for layer in &self.layers {
            layer.validate()?;
            if !names.insert(layer.name.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate layer \"{}\"",
                    layer.name
                )));
            }
        }
        Ok(())
    }

    /// Empty grid in the configured grid frame.
    pub fn to_grid_map(&self) -> Result<GridMap> {
        self.grid.to_grid_map(&self.frames.grid_frame)
    }

    /// Frame tree built from the configured static transforms.
    pub fn frame_tree(&self) -> FrameTree {
        FrameTree::from_transforms(&self.frames.transforms)
    }

    /// Look up a layer by name.
    pub fn layer(&self, name: &str) -> Option<&LayerSection> {
        self.layers.iter().find(|l| l.name == name)
    }
}
