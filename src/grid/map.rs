//! Grid map storage: geometry plus named `f32` layers.

use std::collections::BTreeMap;

use glam::DVec2;

use crate::error::{Error, Result};

/// Cell index: `row` along −x, `col` along −y, from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridIndex {
    /// Row (x direction, decreasing x)
    pub row: usize,
    /// Column (y direction, decreasing y)
    pub col: usize,
}

impl GridIndex {
    /// Create a new index.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Multi-layer 2D grid with shared resolution, length and position.
#[derive(Clone, Debug)]
pub struct GridMap {
    layers: BTreeMap<String, Vec<f32>>,
    frame_id: String,
    resolution: f64,
    length: DVec2,
    position: DVec2,
    rows: usize,
    cols: usize,
}

impl GridMap {
    /// Create a grid covering `length` meters around `position`.
    ///
    /// The cell count per axis is `round(length / resolution)` and the
    /// stored length is snapped to a whole number of cells.
    ///
    /// # Errors
    /// Fails if the resolution is not positive or an axis has no cells.
    pub fn new(length: DVec2, resolution: f64, position: DVec2) -> Result<Self> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "resolution must be positive, got {}",
                resolution
            )));
        }
        if !(length.is_finite() && position.is_finite()) {
            return Err(Error::InvalidGeometry(
                "length and position must be finite".to_string(),
            ));
        }

        let rows = (length.x / resolution).round();
        let cols = (length.y / resolution).round();
        if rows < 1.0 || cols < 1.0 {
            return Err(Error::InvalidGeometry(format!(
                "length ({}, {}) holds no cells at resolution {}",
                length.x, length.y, resolution
            )));
        }
        let (rows, cols) = (rows as usize, cols as usize);

        Ok(Self {
            layers: BTreeMap::new(),
            frame_id: String::new(),
            resolution,
            length: DVec2::new(rows as f64 * resolution, cols as f64 * resolution),
            position,
            rows,
            cols,
        })
    }

    /// Set the reference frame the grid is expressed in.
    pub fn with_frame_id(mut self, frame_id: impl Into<String>) -> Self {
        self.frame_id = frame_id.into();
        self
    }

    // === Geometry ===

    /// Reference frame name.
    #[inline]
    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    /// Meters per cell.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Side lengths in meters (x, y).
    #[inline]
    pub fn length(&self) -> DVec2 {
        self.length
    }

    /// Centre of the grid in its frame.
    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Number of rows (cells along x).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (cells along y).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cells per layer.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major offset of an index into a layer buffer.
    #[inline]
    pub fn linear_index(&self, index: GridIndex) -> usize {
        index.row * self.cols + index.col
    }

    /// Check if an index lies inside the grid.
    #[inline]
    pub fn is_valid_index(&self, index: GridIndex) -> bool {
        index.row < self.rows && index.col < self.cols
    }

    /// Index of the cell containing `position`, if inside the grid.
    pub fn index_of(&self, position: DVec2) -> Option<GridIndex> {
        let top_left = self.position + self.length / 2.0;
        let row = ((top_left.x - position.x) / self.resolution).floor();
        let col = ((top_left.y - position.y) / self.resolution).floor();
        if row < 0.0 || col < 0.0 {
            return None;
        }
        let index = GridIndex::new(row as usize, col as usize);
        self.is_valid_index(index).then_some(index)
    }

    /// Centre of a cell.
    pub fn position_of(&self, index: GridIndex) -> DVec2 {
        let top_left = self.position + self.length / 2.0;
        DVec2::new(
            top_left.x - (index.row as f64 + 0.5) * self.resolution,
            top_left.y - (index.col as f64 + 0.5) * self.resolution,
        )
    }

    /// Check if a position lies inside the grid.
    pub fn contains(&self, position: DVec2) -> bool {
        self.index_of(position).is_some()
    }

    /// Iterate over every cell index exactly once, row by row.
    pub fn indices(&self) -> GridIndexIter {
        GridIndexIter {
            rows: self.rows,
            cols: self.cols,
            next: 0,
        }
    }

    // === Layers ===

    /// Check if a layer exists.
    #[inline]
    pub fn exists(&self, layer: &str) -> bool {
        self.layers.contains_key(layer)
    }

    /// Add a layer filled with `value`, re-initializing it if it exists.
    pub fn add(&mut self, layer: &str, value: f32) {
        self.layers
            .insert(layer.to_string(), vec![value; self.cell_count()]);
    }

    /// Set every cell of an existing layer to `value`.
    pub fn set_constant(&mut self, layer: &str, value: f32) -> Result<()> {
        self.layer_mut(layer)
            .ok_or_else(|| Error::LayerNotFound(layer.to_string()))?
            .fill(value);
        Ok(())
    }

    /// Layer names in sorted order.
    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    /// Raw row-major buffer of a layer.
    #[inline]
    pub fn layer(&self, layer: &str) -> Option<&[f32]> {
        self.layers.get(layer).map(Vec::as_slice)
    }

    /// Mutable raw row-major buffer of a layer.
    #[inline]
    pub fn layer_mut(&mut self, layer: &str) -> Option<&mut [f32]> {
        self.layers.get_mut(layer).map(Vec::as_mut_slice)
    }

    /// Value of one cell.
    pub fn at(&self, layer: &str, index: GridIndex) -> Option<f32> {
        if !self.is_valid_index(index) {
            return None;
        }
        let i = self.linear_index(index);
        self.layer(layer).map(|data| data[i])
    }

    /// Value of the cell containing a position.
    pub fn at_position(&self, layer: &str, position: DVec2) -> Option<f32> {
        self.at(layer, self.index_of(position)?)
    }

    /// Set one cell. Returns false if the layer or index is invalid.
    pub fn set(&mut self, layer: &str, index: GridIndex, value: f32) -> bool {
        if !self.is_valid_index(index) {
            return false;
        }
        let i = self.linear_index(index);
        match self.layer_mut(layer) {
            Some(data) => {
                data[i] = value;
                true
            }
            None => false,
        }
    }
}

/// Row-major iterator over all indices of a grid.
#[derive(Clone, Debug)]
pub struct GridIndexIter {
    rows: usize,
    cols: usize,
    next: usize,
}

impl Iterator for GridIndexIter {
    type Item = GridIndex;

    fn next(&mut self) -> Option<GridIndex> {
        if self.next >= self.rows * self.cols {
            return None;
        }
        let index = GridIndex::new(self.next / self.cols, self.next % self.cols);
        self.next += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows * self.cols - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIndexIter {}
