//! Transform resolution between named reference frames.
//!
//! The rasterizer needs the rigid transform from the map frame (where vector
//! map records live) to the grid frame. Lookup is delegated to a
//! [`TransformResolver`]; [`FrameTree`] is a static in-memory implementation.
//!
//! A failed lookup is not fatal: [`resolve_transform`] logs it and falls back
//! to the identity transform unless the caller asks for strict resolution.

mod frame_tree;

pub use frame_tree::{FrameTree, StaticTransform};

use crate::core::RigidTransform;
use crate::error::{Error, Result};

/// Why a transform lookup failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Frame is not known to the resolver
    #[error("unknown frame \"{0}\"")]
    UnknownFrame(String),

    /// Both frames are known but no chain of transforms links them
    #[error("no transform chain from \"{source_frame}\" to \"{target_frame}\"")]
    NotConnected {
        /// Frame the points are expressed in
        source_frame: String,
        /// Frame the points should be expressed in
        target_frame: String,
    },

    /// Resolver-specific failure
    #[error("{0}")]
    Lookup(String),
}

/// Looks up rigid transforms between frames.
pub trait TransformResolver {
    /// Transform mapping points expressed in `source` into `target`,
    /// at the latest available time.
    fn lookup(
        &self,
        target: &str,
        source: &str,
    ) -> std::result::Result<RigidTransform, TransformError>;
}

impl<T: TransformResolver + ?Sized> TransformResolver for &T {
    fn lookup(
        &self,
        target: &str,
        source: &str,
    ) -> std::result::Result<RigidTransform, TransformError> {
        (**self).lookup(target, source)
    }
}

/// A fixed transform returned for every frame pair.
impl TransformResolver for RigidTransform {
    fn lookup(
        &self,
        _target: &str,
        _source: &str,
    ) -> std::result::Result<RigidTransform, TransformError> {
        Ok(*self)
    }
}

/// Outcome of a transform resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TransformStatus {
    /// The resolver produced the transform
    #[default]
    Resolved,
    /// Lookup failed; the identity transform was used instead
    Degraded(TransformError),
}

impl TransformStatus {
    /// True if the fallback transform was used.
    pub fn is_degraded(&self) -> bool {
        matches!(self, TransformStatus::Degraded(_))
    }
}

/// Resolve `source → target`, degrading to identity on failure.
///
/// # Errors
/// With `strict` set, a failed lookup is returned as
/// [`Error::TransformUnavailable`] instead of degrading.
pub fn resolve_transform<R: TransformResolver + ?Sized>(
    resolver: &R,
    target: &str,
    source: &str,
    strict: bool,
) -> Result<(RigidTransform, TransformStatus)> {
    match resolver.lookup(target, source) {
        Ok(tf) => Ok((tf, TransformStatus::Resolved)),
        Err(e) if strict => Err(Error::TransformUnavailable(e)),
        Err(e) => {
            log::error!(
                "Transform {} -> {} unavailable, using identity: {}",
                source,
                target,
                e
            );
            Ok((RigidTransform::identity(), TransformStatus::Degraded(e)))
        }
    }
}
