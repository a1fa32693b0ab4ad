//! Core types: Aabb bounding volume and parameter directions
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounding box
///
/// Defines the undeformed lattice volume. Invariant: `min <= max`
/// componentwise. Equality is exact; the rebuild no-op check relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Aabb { min, max }
    }

    /// Create from center and half-extents
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        Aabb {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest AABB enclosing all given points
    ///
    /// Returns `None` for an empty slice. This is the usual way a host derives
    /// the lattice volume from the geometry it wants to deform.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut aabb = Aabb {
            min: first,
            max: first,
        };
        for &p in rest {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (componentwise extent)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if point is inside (boundary inclusive)
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Parametric direction of the lattice: S, T, or U
///
/// S spans the world X extent of the bounding volume, T the Y extent,
/// and U the Z extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// First parameter direction (world X extent)
    S,
    /// Second parameter direction (world Y extent)
    T,
    /// Third parameter direction (world Z extent)
    U,
}

impl Direction {
    /// All three directions in S, T, U order
    pub const ALL: [Direction; 3] = [Direction::S, Direction::T, Direction::U];

    /// Array index of this direction (S=0, T=1, U=2)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::S => 0,
            Direction::T => 1,
            Direction::U => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::S => "S",
            Direction::T => "T",
            Direction::U => "U",
        };
        f.write_str(name)
    }
}
