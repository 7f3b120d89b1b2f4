//! End-to-end rasterization: map graph in, filled grid map out.

use crate::config::{FillMode, LayerSection, RasterConfig};
use crate::core::Polygon;
use crate::error::Result;
use crate::grid::GridMap;
use crate::tf::TransformResolver;
use crate::vector_map::{MapGraph, collect_areas};

use super::{ClassifiedFill, FillReport, FrameSelection, HeightFill, fill_classified, fill_heights};

/// Report for one configured layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerReport {
    /// Layer name
    pub layer: String,
    /// Fill outcome
    pub report: FillReport,
}

/// Outcome of one rasterization pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RasterSummary {
    /// Way-area polygons collected, including empty ones
    pub polygons: usize,
    /// One entry per configured layer, in fill order. Empty when the map
    /// had no way-areas.
    pub layers: Vec<LayerReport>,
}

impl LayerSection {
    /// Classified encoding of this layer.
    pub fn classified_fill(&self) -> ClassifiedFill {
        ClassifiedFill {
            background: self.background,
            min_value: self.min_value,
            max_value: self.max_value,
            fill_value: self.fill_value,
        }
    }

    /// Height encoding of this layer.
    pub fn height_fill(&self) -> HeightFill {
        HeightFill {
            background: self.background,
        }
    }
}

/// Owns a grid map and fills every configured layer from a map graph.
///
/// # Example
///
/// ```
/// use vastu_raster::{AreaRasterizer, MapGraph, RasterConfig};
///
/// let config = RasterConfig::default();
/// let tree = config.frame_tree();
/// let mut rasterizer = AreaRasterizer::new(config).unwrap();
///
/// let summary = rasterizer.rasterize(&MapGraph::new(), &tree).unwrap();
/// assert!(summary.layers.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct AreaRasterizer {
    config: RasterConfig,
    grid: GridMap,
}

impl AreaRasterizer {
    /// Validate the configuration and create the (layerless) grid.
    pub fn new(config: RasterConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.to_grid_map()?;
        log::debug!(
            "Grid {}x{} cells at {} m in frame \"{}\"",
            grid.rows(),
            grid.cols(),
            grid.resolution(),
            grid.frame_id()
        );
        Ok(Self { config, grid })
    }

    /// Active configuration.
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Grid map with the filled layers.
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// Mutable grid map.
    pub fn grid_mut(&mut self) -> &mut GridMap {
        &mut self.grid
    }

    /// Consume the rasterizer, returning the grid map.
    pub fn into_grid(self) -> GridMap {
        self.grid
    }

    /// Collect every way-area of `graph` once and fill all layers.
    ///
    /// A graph without way-areas leaves the grid untouched.
    pub fn rasterize<R: TransformResolver + ?Sized>(
        &mut self,
        graph: &MapGraph,
        resolver: &R,
    ) -> Result<RasterSummary> {
        let polygons = collect_areas(graph);
        self.rasterize_polygons(&polygons, resolver)
    }

    /// Fill all layers from already collected polygons (map frame).
    pub fn rasterize_polygons<R: TransformResolver + ?Sized>(
        &mut self,
        polygons: &[Polygon],
        resolver: &R,
    ) -> Result<RasterSummary> {
        if polygons.is_empty() {
            return Ok(RasterSummary::default());
        }

        let frames = FrameSelection {
            target: &self.config.frames.grid_frame,
            source: &self.config.frames.map_frame,
            strict: self.config.frames.strict,
        };

        let mut layers = Vec::with_capacity(self.config.layers.len());
        for layer in &self.config.layers {
            let report = match layer.mode {
                FillMode::Classified => fill_classified(
                    &mut self.grid,
                    &layer.name,
                    polygons,
                    &layer.classified_fill(),
                    &frames,
                    resolver,
                )?,
                FillMode::Height => fill_heights(
                    &mut self.grid,
                    &layer.name,
                    polygons,
                    &layer.height_fill(),
                    &frames,
                    resolver,
                )?,
            };
            layers.push(LayerReport {
                layer: layer.name.clone(),
                report,
            });
        }

        Ok(RasterSummary {
            polygons: polygons.len(),
            layers,
        })
    }
}
