//! Test utilities: map graph builders and sample data.

#![allow(dead_code)]

use vastu_raster::vector_map::Id;
use vastu_raster::{Area, Line, MapGraph, Point, RasterConfig, WayArea};

pub const SAMPLE_MAP: &str = include_str!("../demos/data/sample_map.yaml");
pub const SAMPLE_CONFIG: &str = include_str!("../configs/raster.yaml");

pub fn sample_graph() -> MapGraph {
    MapGraph::from_yaml_str(SAMPLE_MAP).unwrap()
}

pub fn sample_config() -> RasterConfig {
    RasterConfig::from_yaml(SAMPLE_CONFIG).unwrap()
}

/// Area `aid` whose boundary is a chain of `n` lines starting at id
/// `first_lid`, one point per line start plus a closing point.
///
/// Points are laid out on a circle of radius 5 so the polygon is convex.
pub fn chain_area(graph: &mut MapGraph, aid: Id, first_lid: Id, n: u32) {
    let first_pid = first_lid;
    for k in 0..=n {
        let angle = std::f64::consts::TAU * k as f64 / (n + 1) as f64;
        graph
            .insert(Point::new(
                first_pid + k,
                5.0 * angle.cos(),
                5.0 * angle.sin(),
                0.0,
            ))
            .unwrap();
    }
    for k in 0..n {
        let lid = first_lid + k;
        let blid = if k == 0 { 0 } else { lid - 1 };
        let flid = if k + 1 == n { 0 } else { lid + 1 };
        graph
            .insert(Line::new(lid, first_pid + k, first_pid + k + 1, blid, flid))
            .unwrap();
    }
    graph
        .insert(Area::new(aid, first_lid, first_lid + n - 1))
        .unwrap();
}

/// Graph with a single way-area over a chain of `n` lines.
pub fn single_chain_graph(n: u32) -> MapGraph {
    let mut graph = MapGraph::new();
    chain_area(&mut graph, 1, 1, n);
    graph.insert(WayArea::new(1, 1)).unwrap();
    graph
}
