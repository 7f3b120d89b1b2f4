//! Polygon rasterization into grid map layers.
//!
//! Both fill modes share one pipeline:
//!
//! 1. Create or reset the layer to its background value
//! 2. Resolve the map → grid frame transform (degrading to identity)
//! 3. Transform each polygon and project it into pixel space
//! 4. Scan-fill it into an intermediate raster
//! 5. Write the raster back into the layer
//!
//! Classified layers scan-fill a coverage mask and write the fill value,
//! quantized over the layer's `[min, max]` range, into every covered cell.
//! Height layers use a float raster and keep full precision.
//!
//! Empty polygons (failed boundary reconstructions) are skipped and counted.

mod pipeline;

pub use pipeline::{AreaRasterizer, LayerReport, RasterSummary};

use crate::core::{Point3, Polygon, RigidTransform};
use crate::error::Result;
use crate::grid::convert::{
    dequantize, layer_to_float_image, validate_range, write_covered, write_float_image,
};
use crate::grid::{GridMap, PixelCoord, Raster};
use crate::tf::{TransformResolver, TransformStatus, resolve_transform};

/// Frame pair and lookup policy for one fill.
#[derive(Clone, Copy, Debug)]
pub struct FrameSelection<'a> {
    /// Grid frame
    pub target: &'a str,
    /// Frame the polygons are expressed in
    pub source: &'a str,
    /// Fail instead of degrading to identity
    pub strict: bool,
}

impl<'a> FrameSelection<'a> {
    /// Lenient selection for `source → target`.
    pub fn new(target: &'a str, source: &'a str) -> Self {
        Self {
            target,
            source,
            strict: false,
        }
    }
}

/// Encoding of a classified layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifiedFill {
    /// Value outside every polygon
    pub background: f32,
    /// Lower bound of the quantization range
    pub min_value: f32,
    /// Upper bound of the quantization range
    pub max_value: f32,
    /// Raster value inside polygons, imported as
    /// `min + (max - min) * fill_value / 255`
    pub fill_value: u8,
}

/// Encoding of a height layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightFill {
    /// Value outside every polygon
    pub background: f32,
}

/// Outcome of filling one layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillReport {
    /// Non-empty polygons drawn
    pub polygons_filled: usize,
    /// Empty polygons skipped
    pub polygons_skipped: usize,
    /// Raster pixels written by scan-fill, overlaps counted each time
    pub cells_filled: usize,
    /// Whether the transform lookup degraded
    pub transform: TransformStatus,
}

/// Pixel coordinates of a grid-frame point.
///
/// Column follows −y and row follows −x, both measured from the grid's
/// top-left corner. Fractional coordinates are floored, so a point inside
/// the grid lands in the same cell as [`GridMap::index_of`].
pub fn grid_to_pixel(grid: &GridMap, point: Point3) -> PixelCoord {
    let length = grid.length();
    let position = grid.position();
    let resolution = grid.resolution();

    let origin_offset_x = length.x / 2.0 - position.x;
    let origin_offset_y = length.y / 2.0 - position.y;
    PixelCoord::floor(
        (length.y - origin_offset_y - point.y) / resolution,
        (length.x - origin_offset_x - point.x) / resolution,
    )
}

fn project(grid: &GridMap, polygon: &Polygon, tf: &RigidTransform) -> Vec<PixelCoord> {
    polygon
        .iter()
        .map(|&p| grid_to_pixel(grid, tf.apply(p)))
        .collect()
}

fn reset_layer(grid: &mut GridMap, layer: &str, background: f32) -> Result<()> {
    if grid.exists(layer) {
        grid.set_constant(layer, background)
    } else {
        grid.add(layer, background);
        Ok(())
    }
}

/// Fill `polygons` into `layer` with a constant class value.
///
/// Covered cells get `fill_value` imported over `[min, max]`; cells the fill
/// does not touch keep the exact background value.
///
/// # Errors
/// Fails on an empty `[min, max]` range, or on a missing transform when
/// `frames.strict` is set. The layer is not modified in either case.
pub fn fill_classified<R: TransformResolver + ?Sized>(
    grid: &mut GridMap,
    layer: &str,
    polygons: &[Polygon],
    fill: &ClassifiedFill,
    frames: &FrameSelection<'_>,
    resolver: &R,
) -> Result<FillReport> {
    validate_range(fill.min_value, fill.max_value)?;
    let (tf, status) = resolve_transform(resolver, frames.target, frames.source, frames.strict)?;

    reset_layer(grid, layer, fill.background)?;
    let mut coverage = Raster::new(grid.rows(), grid.cols(), false);

    let mut report = FillReport {
        transform: status,
        ..FillReport::default()
    };
    for polygon in polygons {
        if polygon.is_empty() {
            report.polygons_skipped += 1;
            continue;
        }
        let pixels = project(grid, polygon, &tf);
        report.cells_filled += coverage.fill_convex_poly(&pixels, true);
        report.polygons_filled += 1;
    }

    let value = dequantize(fill.fill_value, fill.min_value, fill.max_value);
    let written = write_covered(grid, layer, &coverage, value)?;
    log::info!(
        "Layer \"{}\": {} polygons filled, {} skipped, {} cells covered",
        layer,
        report.polygons_filled,
        report.polygons_skipped,
        written
    );
    Ok(report)
}

/// Fill `polygons` into `layer` with each polygon's height.
///
/// The height of a polygon is the z of its last point after transforming
/// into the grid frame. Later polygons overwrite earlier ones where they
/// overlap.
///
/// # Errors
/// Fails on a missing transform when `frames.strict` is set.
pub fn fill_heights<R: TransformResolver + ?Sized>(
    grid: &mut GridMap,
    layer: &str,
    polygons: &[Polygon],
    fill: &HeightFill,
    frames: &FrameSelection<'_>,
    resolver: &R,
) -> Result<FillReport> {
    let (tf, status) = resolve_transform(resolver, frames.target, frames.source, frames.strict)?;

    reset_layer(grid, layer, fill.background)?;
    let mut image = layer_to_float_image(grid, layer)?;

    let mut report = FillReport {
        transform: status,
        ..FillReport::default()
    };
    for polygon in polygons {
        let Some(last) = polygon.last() else {
            report.polygons_skipped += 1;
            continue;
        };
        let height = tf.apply(*last).z as f32;
        let pixels = project(grid, polygon, &tf);
        report.cells_filled += image.fill_convex_poly(&pixels, height);
        report.polygons_filled += 1;
    }

    write_float_image(grid, layer, &image)?;
    log::info!(
        "Layer \"{}\": {} polygon heights filled, {} skipped",
        layer,
        report.polygons_filled,
        report.polygons_skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridIndex;
    use crate::tf::TransformError;
    use glam::DVec2;

    struct NoTransforms;

    impl TransformResolver for NoTransforms {
        fn lookup(
            &self,
            target: &str,
            _: &str,
        ) -> std::result::Result<RigidTransform, TransformError> {
            Err(TransformError::UnknownFrame(target.to_string()))
        }
    }

    const FRAMES: FrameSelection<'static> = FrameSelection {
        target: "velodyne",
        source: "map",
        strict: false,
    };

    fn grid_10m() -> GridMap {
        GridMap::new(DVec2::new(10.0, 10.0), 0.5, DVec2::ZERO).unwrap()
    }

    fn unit_square(z: f64) -> Polygon {
        vec![
            Point3::new(1.0, 1.0, z),
            Point3::new(1.0, -1.0, z),
            Point3::new(-1.0, -1.0, z),
            Point3::new(-1.0, 1.0, z),
        ]
    }

    fn classified(background: f32, fill_value: u8) -> ClassifiedFill {
        ClassifiedFill {
            background,
            min_value: 0.0,
            max_value: 255.0,
            fill_value,
        }
    }

    fn cells_equal(grid: &GridMap, layer: &str, value: f32) -> Vec<GridIndex> {
        grid.indices()
            .filter(|&i| grid.at(layer, i) == Some(value))
            .collect()
    }

    #[test]
    fn test_origin_projects_to_centre_pixel() {
        let grid = grid_10m();
        assert_eq!(grid_to_pixel(&grid, Point3::ZERO), PixelCoord::new(10, 10));
        // +x moves up (smaller row), +y moves left (smaller column)
        assert_eq!(
            grid_to_pixel(&grid, Point3::new(1.0, 0.0, 0.0)),
            PixelCoord::new(10, 8)
        );
        assert_eq!(
            grid_to_pixel(&grid, Point3::new(0.0, 1.0, 0.0)),
            PixelCoord::new(8, 10)
        );
    }

    #[test]
    fn test_offset_grid_projection() {
        let grid = GridMap::new(DVec2::new(80.0, 30.0), 0.2, DVec2::new(20.0, 0.0)).unwrap();
        // Grid centre is pixel (cols/2, rows/2)
        assert_eq!(
            grid_to_pixel(&grid, Point3::new(20.0, 0.0, 0.0)),
            PixelCoord::new(75, 200)
        );
        // Top-left corner
        assert_eq!(
            grid_to_pixel(&grid, Point3::new(60.0, 15.0, 0.0)),
            PixelCoord::new(0, 0)
        );
    }

    #[test]
    fn test_classified_square() {
        let mut grid = grid_10m();
        let report = fill_classified(
            &mut grid,
            "wayarea",
            &[unit_square(0.0)],
            &classified(0.0, 100),
            &FRAMES,
            &RigidTransform::identity(),
        )
        .unwrap();

        assert_eq!(report.polygons_filled, 1);
        assert_eq!(report.transform, TransformStatus::Resolved);

        // Vertices project to pixels 8 and 12; the fill includes the boundary
        let filled = cells_equal(&grid, "wayarea", 100.0);
        assert_eq!(filled.len(), 25);
        assert!(
            filled
                .iter()
                .all(|i| (8..=12).contains(&i.row) && (8..=12).contains(&i.col))
        );
        assert_eq!(cells_equal(&grid, "wayarea", 0.0).len(), 400 - 25);
        assert_eq!(grid.at_position("wayarea", DVec2::new(0.4, -0.6)), Some(100.0));
        assert_eq!(grid.at_position("wayarea", DVec2::new(2.0, 0.0)), Some(0.0));
    }

    #[test]
    fn test_fill_stays_in_containing_cell() {
        let mut grid = grid_10m();
        let sliver = vec![
            Point3::new(0.1, 0.1, 0.0),
            Point3::new(0.4, 0.1, 0.0),
            Point3::new(0.1, 0.4, 0.0),
        ];
        fill_classified(
            &mut grid,
            "wayarea",
            &[sliver],
            &classified(0.0, 100),
            &FRAMES,
            &RigidTransform::identity(),
        )
        .unwrap();

        let cell = grid.index_of(DVec2::new(0.2, 0.2)).unwrap();
        assert_eq!(cells_equal(&grid, "wayarea", 100.0), vec![cell]);
    }

    #[test]
    fn test_fractional_square_matches_index_of() {
        let mut grid = grid_10m();
        let square: Polygon = unit_square(0.0).into_iter().map(|p| p * 1.3).collect();
        fill_classified(
            &mut grid,
            "wayarea",
            &[square.clone()],
            &classified(0.0, 100),
            &FRAMES,
            &RigidTransform::identity(),
        )
        .unwrap();

        let corners: Vec<GridIndex> = square
            .iter()
            .map(|p| grid.index_of(p.truncate()).unwrap())
            .collect();
        let rows = corners.iter().map(|i| i.row);
        let cols = corners.iter().map(|i| i.col);
        let (row_lo, row_hi) = (rows.clone().min().unwrap(), rows.max().unwrap());
        let (col_lo, col_hi) = (cols.clone().min().unwrap(), cols.max().unwrap());
        assert_eq!((row_lo, row_hi), (7, 12));

        let filled = cells_equal(&grid, "wayarea", 100.0);
        assert_eq!(filled.len(), (row_hi - row_lo + 1) * (col_hi - col_lo + 1));
        assert!(filled.iter().all(|i| {
            (row_lo..=row_hi).contains(&i.row) && (col_lo..=col_hi).contains(&i.col)
        }));
    }

    #[test]
    fn test_fill_equal_to_background_byte_still_written() {
        let mut grid = grid_10m();
        // 100.4 and 100 share the same quantized byte
        fill_classified(
            &mut grid,
            "wayarea",
            &[unit_square(0.0)],
            &classified(100.4, 100),
            &FRAMES,
            &RigidTransform::identity(),
        )
        .unwrap();

        assert_eq!(grid.at_position("wayarea", DVec2::new(0.2, 0.2)), Some(100.0));
        assert_eq!(grid.at_position("wayarea", DVec2::new(4.0, 4.0)), Some(100.4));
        assert_eq!(cells_equal(&grid, "wayarea", 100.0).len(), 25);
    }

    #[test]
    fn test_classified_resets_existing_layer() {
        let mut grid = grid_10m();
        grid.add("wayarea", 42.0);
        fill_classified(
            &mut grid,
            "wayarea",
            &[],
            &classified(255.0, 128),
            &FRAMES,
            &RigidTransform::identity(),
        )
        .unwrap();
        assert_eq!(cells_equal(&grid, "wayarea", 255.0).len(), 400);
    }

    #[test]
    fn test_classified_is_idempotent() {
        let mut grid = grid_10m();
        let polygons = vec![
            unit_square(0.0),
            vec![
                Point3::new(4.0, 3.0, 0.0),
                Point3::new(2.0, 4.0, 0.0),
                Point3::new(3.0, 1.5, 0.0),
            ],
        ];
        let fill = classified(255.0, 128);
        let run = |grid: &mut GridMap| {
            fill_classified(
                grid,
                "wayarea",
                &polygons,
                &fill,
                &FRAMES,
                &RigidTransform::identity(),
            )
            .unwrap()
        };

        let first_report = run(&mut grid);
        let first = grid.layer("wayarea").unwrap().to_vec();
        let second_report = run(&mut grid);
        assert_eq!(grid.layer("wayarea").unwrap(), first.as_slice());
        assert_eq!(first_report, second_report);
    }

    #[test]
    fn test_empty_polygons_skipped() {
        let mut grid = grid_10m();
        let report = fill_classified(
            &mut grid,
            "wayarea",
            &[Vec::new(), unit_square(0.0), Vec::new()],
            &classified(0.0, 100),
            &FRAMES,
            &RigidTransform::identity(),
        )
        .unwrap();
        assert_eq!(report.polygons_filled, 1);
        assert_eq!(report.polygons_skipped, 2);
        assert_eq!(report.cells_filled, 25);
    }

    #[test]
    fn test_transform_is_applied() {
        let mut grid = grid_10m();
        // Map origin sits 3m ahead of the grid frame origin
        let map_to_grid = RigidTransform::from_translation(Point3::new(3.0, 0.0, 0.0));
        fill_classified(
            &mut grid,
            "wayarea",
            &[unit_square(0.0)],
            &classified(0.0, 100),
            &FRAMES,
            &map_to_grid,
        )
        .unwrap();
        assert_eq!(grid.at_position("wayarea", DVec2::new(3.0, 0.0)), Some(100.0));
        assert_eq!(grid.at_position("wayarea", DVec2::new(0.0, 0.0)), Some(0.0));
    }

    #[test]
    fn test_transform_failure_degrades() {
        let mut grid = grid_10m();
        let report = fill_classified(
            &mut grid,
            "wayarea",
            &[unit_square(0.0)],
            &classified(0.0, 100),
            &FRAMES,
            &NoTransforms,
        )
        .unwrap();
        assert!(report.transform.is_degraded());
        // Identity fallback
        assert_eq!(cells_equal(&grid, "wayarea", 100.0).len(), 25);
    }

    #[test]
    fn test_strict_failure_leaves_grid_untouched() {
        let mut grid = grid_10m();
        let strict = FrameSelection {
            strict: true,
            ..FRAMES
        };
        let result = fill_classified(
            &mut grid,
            "wayarea",
            &[unit_square(0.0)],
            &classified(0.0, 100),
            &strict,
            &NoTransforms,
        );
        assert!(result.is_err());
        assert!(!grid.exists("wayarea"));
    }

    #[test]
    fn test_invalid_range() {
        let mut grid = grid_10m();
        let fill = ClassifiedFill {
            min_value: 1.0,
            max_value: 1.0,
            ..classified(0.0, 100)
        };
        let result = fill_classified(
            &mut grid,
            "wayarea",
            &[],
            &fill,
            &FRAMES,
            &RigidTransform::identity(),
        );
        assert!(matches!(
            result,
            Err(crate::error::Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_heights_use_last_point() {
        let mut grid = grid_10m();
        let mut square = unit_square(1.0);
        square[3].z = 3.5;

        let report = fill_heights(
            &mut grid,
            "height",
            &[square],
            &HeightFill { background: -1.0 },
            &FRAMES,
            &RigidTransform::identity(),
        )
        .unwrap();

        assert_eq!(report.polygons_filled, 1);
        assert_eq!(cells_equal(&grid, "height", 3.5).len(), 25);
        assert_eq!(cells_equal(&grid, "height", -1.0).len(), 400 - 25);
    }

    #[test]
    fn test_heights_transformed_and_overlapping() {
        let mut grid = grid_10m();
        let lift = RigidTransform::from_translation(Point3::new(0.0, 0.0, 2.0));
        let shifted: Polygon = unit_square(1.0)
            .into_iter()
            .map(|p| p + Point3::new(1.0, 0.0, 0.0))
            .collect();

        fill_heights(
            &mut grid,
            "height",
            &[unit_square(0.0), shifted, Vec::new()],
            &HeightFill { background: 0.0 },
            &FRAMES,
            &lift,
        )
        .unwrap();

        // Later polygon wins in the overlap
        assert_eq!(grid.at_position("height", DVec2::new(0.2, 0.0)), Some(3.0));
        assert_eq!(grid.at_position("height", DVec2::new(-0.8, 0.0)), Some(2.0));
        assert_eq!(grid.at_position("height", DVec2::new(4.0, 4.0)), Some(0.0));
    }
}
