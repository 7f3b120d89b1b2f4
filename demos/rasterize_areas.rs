//! Rasterize the way-areas of a vector map and export each layer as PGM.
//!
//! Usage:
//!   cargo run --features demo --example rasterize_areas
//!   cargo run --features demo --example rasterize_areas -- \
//!       --map demos/data/sample_map.yaml --config configs/raster.yaml --output ./output

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use vastu_raster::config::FillMode;
use vastu_raster::io::export_layer_pgm;
use vastu_raster::{AreaRasterizer, MapGraph, RasterConfig, to_occupancy_grid};

/// Way-area rasterization demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vector map YAML
    #[arg(short, long, default_value = "demos/data/sample_map.yaml")]
    map: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "configs/raster.yaml")]
    config: PathBuf,

    /// Output directory for PGM images
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Fail if the map -> grid transform is unavailable
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> vastu_raster::Result<()> {
    let mut config = RasterConfig::load_or_default(&args.config)?;
    config.frames.strict |= args.strict;
    let frames = config.frame_tree();

    println!("Loading map: {}", args.map.display());
    let graph = MapGraph::from_yaml_file(&args.map)?;

    let mut rasterizer = AreaRasterizer::new(config)?;
    let summary = rasterizer.rasterize(&graph, &frames)?;
    if summary.layers.is_empty() {
        println!("No way-areas in map, nothing to export");
        return Ok(());
    }

    let grid = rasterizer.grid();
    println!(
        "Grid: {}x{} cells at {}m, frame \"{}\"",
        grid.rows(),
        grid.cols(),
        grid.resolution(),
        grid.frame_id()
    );

    std::fs::create_dir_all(&args.output)?;
    for layer in &summary.layers {
        let report = &layer.report;
        println!(
            "  {:<12} {} filled, {} skipped, {} pixels{}",
            layer.layer,
            report.polygons_filled,
            report.polygons_skipped,
            report.cells_filled,
            if report.transform.is_degraded() {
                " (identity transform)"
            } else {
                ""
            }
        );

        let Some(section) = rasterizer.config().layer(&layer.layer) else {
            continue;
        };
        let path = output_path(&args.output, &layer.layer);
        export_layer_pgm(grid, &layer.layer, section.min_value, section.max_value, &path)?;

        if section.mode == FillMode::Classified {
            let occupancy =
                to_occupancy_grid(grid, &layer.layer, section.min_value, section.max_value)?;
            let occupied = occupancy.data.iter().filter(|&&v| v == 100).count();
            println!(
                "  {:<12} {} of {} cells at full occupancy",
                "",
                occupied,
                occupancy.data.len()
            );
        }
    }

    println!("Saved PGM images to {}", args.output.display());
    Ok(())
}

fn output_path(dir: &Path, layer: &str) -> PathBuf {
    dir.join(format!("{}.pgm", layer))
}
