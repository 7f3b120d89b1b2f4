//! Output layer section.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::convert::validate_range;

use super::defaults;

/// How a layer is filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Constant class value over every way-area
    #[default]
    Classified,
    /// Height of each way-area (z of its last boundary point)
    Height,
}

/// One output layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSection {
    /// Layer name in the grid
    #[serde(default = "defaults::layer_name")]
    pub name: String,

    /// Fill mode
    #[serde(default)]
    pub mode: FillMode,

    /// Value of cells outside every way-area
    #[serde(default = "defaults::background")]
    pub background: f32,

    /// Lower bound of the 8-bit quantization range
    #[serde(default = "defaults::min_value")]
    pub min_value: f32,

    /// Upper bound of the 8-bit quantization range
    #[serde(default = "defaults::max_value")]
    pub max_value: f32,

    /// Pixel value written inside way-areas (classified mode only)
    #[serde(default = "defaults::fill_value")]
    pub fill_value: u8,
}

impl Default for LayerSection {
    fn default() -> Self {
        Self {
            name: defaults::layer_name(),
            mode: FillMode::Classified,
            background: defaults::background(),
            min_value: defaults::min_value(),
            max_value: defaults::max_value(),
            fill_value: defaults::fill_value(),
        }
    }
}

impl LayerSection {
    pub(super) fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Config("layer name must not be empty".to_string()));
        }
        // The range drives quantization and PGM export in both modes
        validate_range(self.min_value, self.max_value).map_err(|_| {
            Error::Config(format!(
                "layer \"{}\": max_value {} must exceed min_value {}",
                self.name, self.max_value, self.min_value
            ))
        })
    }
}
