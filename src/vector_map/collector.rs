//! Area collection: one polygon per way-area in the map graph.

use crate::core::Polygon;

use super::boundary::search_area_points;
use super::graph::{Area, MapGraph, WayArea};

/// Reconstruct the boundary of every way-area in the graph.
///
/// Returns one polygon per way-area, in ascending way-area id order. Failed
/// reconstructions are kept as empty polygons so the output stays aligned
/// with the way-area list; rasterization skips them.
pub fn collect_areas(graph: &MapGraph) -> Vec<Polygon> {
    collect_areas_filtered(graph, |_| true)
}

/// Like [`collect_areas`], restricted to way-areas accepted by `predicate`.
pub fn collect_areas_filtered<F>(graph: &MapGraph, predicate: F) -> Vec<Polygon>
where
    F: FnMut(&WayArea) -> bool,
{
    let way_areas = graph.find_by_filter::<WayArea, _>(predicate);
    if way_areas.is_empty() {
        log::warn!("No WayArea records in map graph");
        return Vec::new();
    }

    let polygons: Vec<Polygon> = way_areas
        .iter()
        .map(|way_area| {
            // Unresolved aid reconstructs as the null area
            let area = graph
                .area(way_area.aid)
                .copied()
                .unwrap_or(Area::new(0, 0, 0));
            search_area_points(&area, graph)
        })
        .collect();

    let empty = polygons.iter().filter(|p| p.is_empty()).count();
    log::debug!(
        "Collected {} way-area polygons ({} failed reconstruction)",
        polygons.len(),
        empty
    );

    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector_map::{Line, Point};

    fn triangle_graph() -> MapGraph {
        let mut graph = MapGraph::new();
        graph.insert(Point::new(1, 0.0, 0.0, 0.0)).unwrap();
        graph.insert(Point::new(2, 2.0, 0.0, 0.0)).unwrap();
        graph.insert(Point::new(3, 0.0, 2.0, 0.0)).unwrap();
        graph.insert(Line::new(1, 1, 2, 0, 2)).unwrap();
        graph.insert(Line::new(2, 2, 3, 1, 3)).unwrap();
        graph.insert(Line::new(3, 3, 1, 2, 0)).unwrap();
        graph.insert(Area::new(1, 1, 3)).unwrap();
        graph
    }

    #[test]
    fn test_empty_graph() {
        assert!(collect_areas(&MapGraph::new()).is_empty());
    }

    #[test]
    fn test_one_polygon_per_way_area() {
        let mut graph = triangle_graph();
        graph.insert(WayArea::new(1, 1)).unwrap();
        // Unknown area id still yields an (empty) entry
        graph.insert(WayArea::new(2, 55)).unwrap();

        let polygons = collect_areas(&graph);
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 6);
        assert!(polygons[1].is_empty());
    }

    #[test]
    fn test_filtered() {
        let mut graph = triangle_graph();
        graph.insert(WayArea::new(1, 1)).unwrap();
        graph.insert(WayArea::new(2, 1)).unwrap();

        let polygons = collect_areas_filtered(&graph, |w| w.waid == 2);
        assert_eq!(polygons.len(), 1);

        let none = collect_areas_filtered(&graph, |_| false);
        assert!(none.is_empty());
    }
}
