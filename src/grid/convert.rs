//! Conversions between grid layers and raster images.
//!
//! Image pixel `(row, col)` corresponds to grid index `(row, col)`.
//! Quantized (`u8`) export maps `[min, max]` linearly onto `0..=255`;
//! float export copies values unchanged.

use crate::error::{Error, Result};

use super::{GridMap, Raster};

/// Check that `[min, max]` is a usable quantization range.
pub fn validate_range(min: f32, max: f32) -> Result<()> {
    if min.is_finite() && max.is_finite() && max > min {
        Ok(())
    } else {
        Err(Error::InvalidRange { min, max })
    }
}

/// Map a layer value onto `0..=255`. NaN maps to 0.
#[inline]
pub fn quantize(value: f32, min: f32, max: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let v = value.clamp(min, max) as f64;
    let (min, max) = (min as f64, max as f64);
    ((v - min) * 255.0 / (max - min)) as u8
}

/// Inverse of [`quantize`], up to one quantization step.
#[inline]
pub fn dequantize(pixel: u8, min: f32, max: f32) -> f32 {
    let (min, max) = (min as f64, max as f64);
    (min + (max - min) * pixel as f64 / 255.0) as f32
}

fn layer_data<'a>(grid: &'a GridMap, layer: &str) -> Result<&'a [f32]> {
    grid.layer(layer)
        .ok_or_else(|| Error::LayerNotFound(layer.to_string()))
}

/// Export a layer as an 8-bit image over `[min, max]`.
pub fn layer_to_image(grid: &GridMap, layer: &str, min: f32, max: f32) -> Result<Raster<u8>> {
    validate_range(min, max)?;
    let data = layer_data(grid, layer)?;
    let mut image = Raster::new(grid.rows(), grid.cols(), 0u8);
    for index in grid.indices() {
        let value = data[grid.linear_index(index)];
        image.set(index.row, index.col, quantize(value, min, max));
    }
    Ok(image)
}

/// Export a layer as a float image without scaling.
pub fn layer_to_float_image(grid: &GridMap, layer: &str) -> Result<Raster<f32>> {
    let data = layer_data(grid, layer)?;
    let mut image = Raster::new(grid.rows(), grid.cols(), 0.0f32);
    for index in grid.indices() {
        image.set(index.row, index.col, data[grid.linear_index(index)]);
    }
    Ok(image)
}

/// Write `value` into every cell whose `coverage` pixel is set.
///
/// Cells outside the coverage keep their exact layer value.
///
/// Returns the number of cells written.
pub fn write_covered(
    grid: &mut GridMap,
    layer: &str,
    coverage: &Raster<bool>,
    value: f32,
) -> Result<usize> {
    check_shape(grid, coverage.rows(), coverage.cols())?;
    let data = grid
        .layer_mut(layer)
        .ok_or_else(|| Error::LayerNotFound(layer.to_string()))?;

    let mut written = 0;
    for (cell, &covered) in data.iter_mut().zip(coverage.data()) {
        if covered {
            *cell = value;
            written += 1;
        }
    }
    Ok(written)
}

/// Copy a float image into a layer, every cell.
pub fn write_float_image(grid: &mut GridMap, layer: &str, image: &Raster<f32>) -> Result<()> {
    check_shape(grid, image.rows(), image.cols())?;
    let data = grid
        .layer_mut(layer)
        .ok_or_else(|| Error::LayerNotFound(layer.to_string()))?;
    data.copy_from_slice(image.data());
    Ok(())
}

fn check_shape(grid: &GridMap, rows: usize, cols: usize) -> Result<()> {
    if rows == grid.rows() && cols == grid.cols() {
        Ok(())
    } else {
        Err(Error::InvalidGeometry(format!(
            "image is {}x{}, grid is {}x{}",
            rows,
            cols,
            grid.rows(),
            grid.cols()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridIndex;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn grid() -> GridMap {
        let mut grid = GridMap::new(DVec2::new(2.0, 3.0), 0.5, DVec2::ZERO).unwrap();
        grid.add("layer", 255.0);
        grid
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0, 0.0, 255.0), 0);
        assert_eq!(quantize(255.0, 0.0, 255.0), 255);
        assert_eq!(quantize(128.0, 0.0, 255.0), 128);
        assert_eq!(quantize(-10.0, 0.0, 255.0), 0);
        assert_eq!(quantize(1e6, 0.0, 255.0), 255);
        assert_eq!(quantize(f32::NAN, 0.0, 255.0), 0);
        assert_eq!(quantize(0.5, 0.0, 1.0), 127);
    }

    #[test]
    fn test_dequantize() {
        assert_eq!(dequantize(100, 0.0, 255.0), 100.0);
        assert_eq!(dequantize(255, -1.0, 1.0), 1.0);
        assert_relative_eq!(dequantize(0, -1.0, 1.0), -1.0);
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            validate_range(5.0, 5.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(validate_range(10.0, 0.0).is_err());
        assert!(validate_range(0.0, f32::NAN).is_err());
        assert!(layer_to_image(&grid(), "layer", 1.0, 0.0).is_err());
    }

    #[test]
    fn test_missing_layer() {
        assert!(matches!(
            layer_to_image(&grid(), "nope", 0.0, 255.0),
            Err(Error::LayerNotFound(_))
        ));
        assert!(layer_to_float_image(&grid(), "nope").is_err());
    }

    #[test]
    fn test_image_matches_grid_indices() {
        let mut grid = grid();
        grid.set("layer", GridIndex::new(1, 4), 10.0);
        let image = layer_to_image(&grid, "layer", 0.0, 255.0).unwrap();
        assert_eq!((image.rows(), image.cols()), (4, 6));
        assert_eq!(image.get(1, 4), Some(10));
        assert_eq!(image.get(0, 0), Some(255));
    }

    #[test]
    fn test_write_covered_cells_only() {
        let mut grid = grid();
        grid.set("layer", GridIndex::new(0, 0), 100.4);
        grid.set("layer", GridIndex::new(2, 3), 100.4);

        let mut coverage = Raster::new(grid.rows(), grid.cols(), false);
        coverage.set(2, 3, true);

        // Same byte as the background after quantization, still written
        let value = dequantize(quantize(100.4, 0.0, 255.0), 0.0, 255.0);
        let written = write_covered(&mut grid, "layer", &coverage, value).unwrap();
        assert_eq!(written, 1);
        assert_eq!(grid.at("layer", GridIndex::new(2, 3)), Some(100.0));
        assert_eq!(grid.at("layer", GridIndex::new(0, 0)), Some(100.4));

        let wrong = Raster::new(1, 1, true);
        assert!(write_covered(&mut grid, "layer", &wrong, 0.0).is_err());
        assert!(matches!(
            write_covered(&mut grid, "nope", &coverage, 0.0),
            Err(Error::LayerNotFound(_))
        ));
    }

    #[test]
    fn test_float_image_round_trip() {
        let mut grid = grid();
        let mut image = layer_to_float_image(&grid, "layer").unwrap();
        image.set(3, 5, -2.25);
        write_float_image(&mut grid, "layer", &image).unwrap();
        assert_eq!(grid.at("layer", GridIndex::new(3, 5)), Some(-2.25));

        let wrong = Raster::new(1, 1, 0.0f32);
        assert!(write_float_image(&mut grid, "layer", &wrong).is_err());
    }
}
