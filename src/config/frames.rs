//! Frame names and transform resolution policy.

use serde::{Deserialize, Serialize};

use crate::tf::StaticTransform;

use super::defaults;

/// Frames section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSection {
    /// Frame the grid is expressed in
    #[serde(default = "defaults::sensor_frame")]
    pub grid_frame: String,

    /// Frame the vector map records are expressed in
    #[serde(default = "defaults::map_frame")]
    pub map_frame: String,

    /// Fail instead of falling back to identity when the transform is missing
    #[serde(default)]
    pub strict: bool,

    /// Static transforms between frames
    #[serde(default)]
    pub transforms: Vec<StaticTransform>,
}

impl Default for FrameSection {
    fn default() -> Self {
        Self {
            grid_frame: defaults::sensor_frame(),
            map_frame: defaults::map_frame(),
            strict: false,
            transforms: Vec::new(),
        }
    }
}
