//! Boundary reconstruction: walk an area's line chain into a polygon.
//!
//! ```text
//! Area.slid ─► L1 (blid=0) ─flid─► L2 ─flid─► ... ─flid─► Ln (flid=0)
//!               │                   │                      │
//!            bp, fp              bp, fp                 bp, fp
//!
//! polygon = [L1.bp, L1.fp, L2.bp, L2.fp, ..., Ln.bp, Ln.fp]
//! ```
//!
//! Any broken reference aborts the walk for that area. Partial polygons are
//! never returned.

use std::collections::HashSet;

use crate::core::Polygon;

use super::graph::{Area, Id, Line, MapGraph};

/// Why an area boundary could not be reconstructed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    /// Area record is the null sentinel (aid = 0)
    #[error("area id is 0")]
    NullArea,

    /// The area's start line does not exist
    #[error("area {aid}: start line {slid} not found")]
    MissingStartLine {
        /// Area id
        aid: Id,
        /// Referenced start line id
        slid: Id,
    },

    /// The start line has a backward link, so it is not the first segment
    #[error("area {aid}: line {lid} is not a chain start (blid {blid})")]
    NotChainStart {
        /// Area id
        aid: Id,
        /// Start line id
        lid: Id,
        /// Its backward line id
        blid: Id,
    },

    /// A line references a point that does not exist
    #[error("area {aid}: line {lid} references missing point {pid}")]
    MissingPoint {
        /// Area id
        aid: Id,
        /// Line id
        lid: Id,
        /// Referenced point id
        pid: Id,
    },

    /// A forward link points at a line that does not exist
    #[error("area {aid}: line {from} links to missing line {lid}")]
    MissingLine {
        /// Area id
        aid: Id,
        /// Line holding the forward link
        from: Id,
        /// Referenced line id
        lid: Id,
    },

    /// A forward link revisits a line already walked
    #[error("area {aid}: line chain loops back to line {lid}")]
    CyclicChain {
        /// Area id
        aid: Id,
        /// First repeated line id
        lid: Id,
    },
}

/// Reconstruct the ordered boundary of `area`.
///
/// Emits the begin and forward point of every line from the start line to the
/// line whose `flid` is `0`, so a chain of `n` lines yields `2n` points.
///
/// # Errors
/// Returns the first integrity violation encountered. An area with `aid == 0`
/// fails immediately without touching the graph.
pub fn reconstruct_boundary(area: &Area, graph: &MapGraph) -> Result<Polygon, BoundaryError> {
    if area.aid == 0 {
        return Err(BoundaryError::NullArea);
    }
    let aid = area.aid;

    let mut line = graph
        .line(area.slid)
        .ok_or(BoundaryError::MissingStartLine {
            aid,
            slid: area.slid,
        })?;
    if !line.is_chain_start() {
        return Err(BoundaryError::NotChainStart {
            aid,
            lid: line.lid,
            blid: line.blid,
        });
    }

    let mut polygon = Polygon::new();
    let mut visited: HashSet<Id> = HashSet::new();
    visited.insert(line.lid);

    while line.flid != 0 {
        push_line_points(aid, line, graph, &mut polygon)?;

        let next = graph.line(line.flid).ok_or(BoundaryError::MissingLine {
            aid,
            from: line.lid,
            lid: line.flid,
        })?;
        if !visited.insert(next.lid) {
            return Err(BoundaryError::CyclicChain { aid, lid: next.lid });
        }
        line = next;
    }

    // Closing line (flid == 0)
    push_line_points(aid, line, graph, &mut polygon)?;

    Ok(polygon)
}

/// Reconstruct the boundary of `area`, returning an empty polygon on failure.
///
/// Callers that cannot act on the failure kind use this form; an empty
/// result means the area is unusable.
pub fn search_area_points(area: &Area, graph: &MapGraph) -> Polygon {
    match reconstruct_boundary(area, graph) {
        Ok(polygon) => polygon,
        Err(e) => {
            log::debug!("Skipping area boundary: {}", e);
            Polygon::new()
        }
    }
}

fn push_line_points(
    aid: Id,
    line: &Line,
    graph: &MapGraph,
    polygon: &mut Polygon,
) -> Result<(), BoundaryError> {
    let resolve = |pid: Id| {
        graph
            .point(pid)
            .map(|p| p.position())
            .ok_or(BoundaryError::MissingPoint {
                aid,
                lid: line.lid,
                pid,
            })
    };

    let bp = resolve(line.bpid)?;
    let fp = resolve(line.fpid)?;
    polygon.push(bp);
    polygon.push(fp);
    Ok(())
}
