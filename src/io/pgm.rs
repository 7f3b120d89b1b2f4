//! Binary PGM (P5) writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::grid::convert::layer_to_image;
use crate::grid::{GridMap, Raster};

/// Write an 8-bit raster as P5 PGM.
///
/// Image width is the raster's column count, height its row count.
pub fn write_pgm<W: Write>(raster: &Raster<u8>, mut writer: W) -> Result<()> {
    writeln!(writer, "P5")?;
    writeln!(writer, "{} {}", raster.cols(), raster.rows())?;
    writeln!(writer, "255")?;
    writer.write_all(raster.data())?;
    writer.flush()?;
    Ok(())
}

/// Quantize a layer over `[min, max]` and save it as a PGM file.
pub fn export_layer_pgm(
    grid: &GridMap,
    layer: &str,
    min: f32,
    max: f32,
    path: &Path,
) -> Result<()> {
    let image = layer_to_image(grid, layer, min, max)?;
    let file = File::create(path)?;
    write_pgm(&image, BufWriter::new(file))?;
    log::info!(
        "Exported layer \"{}\" ({}x{}) to {}",
        layer,
        image.cols(),
        image.rows(),
        path.display()
    );
    Ok(())
}
