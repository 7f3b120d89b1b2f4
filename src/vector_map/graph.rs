//! Record types and the id-keyed map graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::error::{Error, Result};

/// Record identifier. Ids are 1-based; `0` means "absent".
pub type Id = u32;

/// A surveyed point in the map frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Point id
    pub pid: Id,
    /// X coordinate (meters)
    pub x: f64,
    /// Y coordinate (meters)
    pub y: f64,
    /// Z coordinate / height (meters)
    #[serde(default)]
    pub z: f64,
}

impl Point {
    /// Create a point record.
    pub fn new(pid: Id, x: f64, y: f64, z: f64) -> Self {
        Self { pid, x, y, z }
    }

    /// Position as a 3D vector.
    #[inline]
    pub fn position(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

/// A directed segment between two points, linked into a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line id
    pub lid: Id,
    /// Begin point id
    pub bpid: Id,
    /// Forward (end) point id
    pub fpid: Id,
    /// Backward line id (0 for the first line of a chain)
    #[serde(default)]
    pub blid: Id,
    /// Forward line id (0 for the last line of a chain)
    #[serde(default)]
    pub flid: Id,
}

impl Line {
    /// Create a line record.
    pub fn new(lid: Id, bpid: Id, fpid: Id, blid: Id, flid: Id) -> Self {
        Self {
            lid,
            bpid,
            fpid,
            blid,
            flid,
        }
    }

    /// True if this line opens a chain.
    #[inline]
    pub fn is_chain_start(&self) -> bool {
        self.blid == 0
    }
}

/// A closed region described by its first boundary line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Area id
    pub aid: Id,
    /// Start line id
    pub slid: Id,
    /// End line id (informational, not used for traversal)
    #[serde(default)]
    pub elid: Id,
}

impl Area {
    /// Create an area record.
    pub fn new(aid: Id, slid: Id, elid: Id) -> Self {
        Self { aid, slid, elid }
    }
}

/// A drivable region linked to an [`Area`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WayArea {
    /// Way-area id
    pub waid: Id,
    /// Area id
    pub aid: Id,
}

impl WayArea {
    /// Create a way-area record.
    pub fn new(waid: Id, aid: Id) -> Self {
        Self { waid, aid }
    }
}

/// A record kind stored in its own table of the [`MapGraph`].
pub trait Record: Sized {
    /// Human-readable kind name (for logs and errors).
    const KIND: &'static str;

    /// The record's own id.
    fn id(&self) -> Id;

    /// The table holding records of this kind.
    fn table(graph: &MapGraph) -> &BTreeMap<Id, Self>;

    /// Mutable access to the table holding records of this kind.
    fn table_mut(graph: &mut MapGraph) -> &mut BTreeMap<Id, Self>;
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal, $id:ident, $table:ident) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            #[inline]
            fn id(&self) -> Id {
                self.$id
            }

            #[inline]
            fn table(graph: &MapGraph) -> &BTreeMap<Id, Self> {
                &graph.$table
            }

            #[inline]
            fn table_mut(graph: &mut MapGraph) -> &mut BTreeMap<Id, Self> {
                &mut graph.$table
            }
        }
    };
}

impl_record!(Point, "point", pid, points);
impl_record!(Line, "line", lid, lines);
impl_record!(Area, "area", aid, areas);
impl_record!(WayArea, "way_area", waid, way_areas);

/// Id-keyed tables of vector map records.
///
/// The graph is read-only while boundaries are reconstructed; it is built
/// once per collection pass, either programmatically with [`MapGraph::insert`]
/// or from YAML.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapGraph {
    #[serde(default, with = "table_serde")]
    points: BTreeMap<Id, Point>,
    #[serde(default, with = "table_serde")]
    lines: BTreeMap<Id, Line>,
    #[serde(default, with = "table_serde")]
    areas: BTreeMap<Id, Area>,
    #[serde(default, with = "table_serde")]
    way_areas: BTreeMap<Id, WayArea>,
}

/// Tables are stored as plain record lists on disk.
mod table_serde {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Id, Record};

    pub fn serialize<R, S>(table: &BTreeMap<Id, R>, s: S) -> Result<S::Ok, S::Error>
    where
        R: Serialize,
        S: Serializer,
    {
        s.collect_seq(table.values())
    }

    pub fn deserialize<'de, R, D>(d: D) -> Result<BTreeMap<Id, R>, D::Error>
    where
        R: Record + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let records = Vec::<R>::deserialize(d)?;
        let mut table = BTreeMap::new();
        for record in records {
            let id = record.id();
            if id == 0 {
                return Err(serde::de::Error::custom(format!(
                    "{} record with reserved id 0",
                    R::KIND
                )));
            }
            if table.insert(id, record).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate {} id {}",
                    R::KIND,
                    id
                )));
            }
        }
        Ok(table)
    }
}

impl MapGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record of the same kind and id.
    ///
    /// Id `0` is the "no link" sentinel and is rejected.
    pub fn insert<R: Record>(&mut self, record: R) -> Result<Option<R>> {
        let id = record.id();
        if id == 0 {
            return Err(Error::InvalidRecord(format!(
                "{} record with reserved id 0",
                R::KIND
            )));
        }
        Ok(R::table_mut(self).insert(id, record))
    }

    /// Remove a record by id, returning it.
    pub fn remove<R: Record>(&mut self, id: Id) -> Option<R> {
        R::table_mut(self).remove(&id)
    }

    /// Look up a record by id. Id `0` never resolves.
    #[inline]
    pub fn find_by_key<R: Record>(&self, id: Id) -> Option<&R> {
        if id == 0 {
            return None;
        }
        R::table(self).get(&id)
    }

    /// All records of a kind accepted by `predicate`, in ascending id order.
    pub fn find_by_filter<R, F>(&self, mut predicate: F) -> Vec<&R>
    where
        R: Record,
        F: FnMut(&R) -> bool,
    {
        R::table(self).values().filter(|r| predicate(r)).collect()
    }

    /// Number of records of a kind.
    pub fn count<R: Record>(&self) -> usize {
        R::table(self).len()
    }

    /// Point lookup.
    #[inline]
    pub fn point(&self, pid: Id) -> Option<&Point> {
        self.find_by_key(pid)
    }

    /// Line lookup.
    #[inline]
    pub fn line(&self, lid: Id) -> Option<&Line> {
        self.find_by_key(lid)
    }

    /// Area lookup.
    #[inline]
    pub fn area(&self, aid: Id) -> Option<&Area> {
        self.find_by_key(aid)
    }

    /// True if the graph holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.lines.is_empty()
            && self.areas.is_empty()
            && self.way_areas.is_empty()
    }
}
