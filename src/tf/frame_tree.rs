//! Static frame tree: parent → child transforms resolved by graph search.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::core::RigidTransform;

use super::{TransformError, TransformResolver};

/// A fixed transform between a parent and a child frame.
///
/// `transform` maps points expressed in `child` into `parent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticTransform {
    /// Parent frame name
    pub parent: String,
    /// Child frame name
    pub child: String,
    /// Child → parent transform
    #[serde(default)]
    pub transform: RigidTransform,
}

/// In-memory set of static transforms between named frames.
///
/// Lookups walk the undirected frame graph breadth-first, composing edge
/// transforms (inverted when walking from a parent down to a child), so any
/// two connected frames can be resolved.
#[derive(Clone, Debug, Default)]
pub struct FrameTree {
    /// frame → [(neighbor, transform mapping frame coords into neighbor coords)]
    edges: HashMap<String, Vec<(String, RigidTransform)>>,
}

impl FrameTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a list of static transforms.
    pub fn from_transforms<'a, I>(transforms: I) -> Self
    where
        I: IntoIterator<Item = &'a StaticTransform>,
    {
        let mut tree = Self::new();
        for st in transforms {
            tree.insert(&st.parent, &st.child, st.transform);
        }
        tree
    }

    /// Add (or replace) the transform mapping `child` coordinates into `parent`.
    pub fn insert(&mut self, parent: &str, child: &str, child_to_parent: RigidTransform) {
        self.set_edge(child, parent, child_to_parent);
        self.set_edge(parent, child, child_to_parent.inverse());
    }

    /// True if `frame` appears in any stored transform.
    pub fn contains_frame(&self, frame: &str) -> bool {
        self.edges.contains_key(frame)
    }

    /// Number of known frames.
    pub fn frame_count(&self) -> usize {
        self.edges.len()
    }

    fn set_edge(&mut self, from: &str, to: &str, transform: RigidTransform) {
        let neighbors = self.edges.entry(from.to_string()).or_default();
        match neighbors.iter_mut().find(|(name, _)| name == to) {
            Some(edge) => edge.1 = transform,
            None => neighbors.push((to.to_string(), transform)),
        }
    }
}

impl TransformResolver for FrameTree {
    fn lookup(
        &self,
        target: &str,
        source: &str,
    ) -> std::result::Result<RigidTransform, TransformError> {
        if target == source {
            return Ok(RigidTransform::identity());
        }
        for frame in [source, target] {
            if !self.contains_frame(frame) {
                return Err(TransformError::UnknownFrame(frame.to_string()));
            }
        }

        // BFS carrying the source → frame transform
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, RigidTransform)> = VecDeque::new();
        visited.insert(source);
        queue.push_back((source, RigidTransform::identity()));

        while let Some((frame, source_to_frame)) = queue.pop_front() {
            let Some(neighbors) = self.edges.get(frame) else {
                continue;
            };
            for (next, frame_to_next) in neighbors {
                if !visited.insert(next.as_str()) {
                    continue;
                }
                let source_to_next = frame_to_next.compose(&source_to_frame);
                if next == target {
                    return Ok(source_to_next);
                }
                queue.push_back((next.as_str(), source_to_next));
            }
        }

        Err(TransformError::NotConnected {
            source_frame: source.to_string(),
            target_frame: target.to_string(),
        })
    }
}
