//! The FFD control-point lattice
//!
//! A [`Lattice`] owns the bounding volume, the per-axis span counts, the
//! S/T/U axis vectors, and a flat row-major array of control-point positions.
//! It is a plain value type: rebuild it, move its control points, hand it by
//! reference to the evaluation functions. No hidden state, no interior
//! mutability.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bernstein::MAX_SPAN_COUNT;
use crate::error::FfdError;
use crate::types::{Aabb, Direction};

/// FFD lattice: bounding volume, span counts, axes, and control points
///
/// Control points are stored flat in row-major order:
/// `index(i, j, k) = i * nT * nU + j * nU + k` with `nT`/`nU` the T/U
/// control-point counts. The array length is always the product of the three
/// per-axis counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// Bounding volume of the undeformed lattice
    aabb: Aabb,
    /// Span counts per parameter direction (S, T, U)
    span_counts: [u32; 3],
    /// Control-point counts per direction (span + 1)
    ctrl_pt_counts: [u32; 3],
    /// Axis vectors: bounding-volume edge extents along world X/Y/Z
    axes: [Vec3; 3],
    /// Flat row-major control-point positions
    ctrl_pts: Vec<Vec3>,
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new()
    }
}

impl Lattice {
    /// Create an empty lattice with no control points
    ///
    /// Call [`rebuild`](Self::rebuild) before mapping or evaluating anything.
    pub fn new() -> Self {
        Lattice {
            aabb: Aabb::new(Vec3::ZERO, Vec3::ZERO),
            span_counts: [0; 3],
            ctrl_pt_counts: [0; 3],
            axes: [Vec3::ZERO; 3],
            ctrl_pts: Vec::new(),
        }
    }

    /// Rebuild the lattice over a bounding volume with the given span counts
    ///
    /// Regenerates every control point at evenly spaced grid positions.
    /// If both the bounding volume and all three span counts are unchanged
    /// from the previous build, this is a no-op returning `Ok(false)` and any
    /// in-progress control-point edits are preserved. Returns `Ok(true)` after
    /// a real rebuild, at which point cached parameter triples derived from
    /// the old lattice should be re-bound.
    ///
    /// # Errors
    /// * [`FfdError::ZeroSpanCount`] if any span count is 0
    /// * [`FfdError::SpanCountTooLarge`] if any span count exceeds
    ///   [`MAX_SPAN_COUNT`]
    /// * [`FfdError::DegenerateVolume`] if the volume has no extent along
    ///   some axis
    pub fn rebuild(&mut self, aabb: Aabb, span_counts: [u32; 3]) -> Result<bool, FfdError> {
        let size = aabb.size();
        for direction in Direction::ALL {
            let d = direction.index();
            if span_counts[d] == 0 {
                return Err(FfdError::ZeroSpanCount { direction });
            }
            if span_counts[d] > MAX_SPAN_COUNT {
                return Err(FfdError::SpanCountTooLarge {
                    direction,
                    count: span_counts[d],
                });
            }
            if size[d] <= 0.0 {
                return Err(FfdError::DegenerateVolume { direction });
            }
        }

        // Unchanged inputs: keep the current control points (and any edits).
        if self.aabb == aabb && self.span_counts == span_counts {
            return Ok(false);
        }

        self.aabb = aabb;
        self.span_counts = span_counts;
        self.ctrl_pt_counts = [span_counts[0] + 1, span_counts[1] + 1, span_counts[2] + 1];

        // S/T/U axes are the volume's edge vectors along world X/Y/Z.
        self.axes = [
            Vec3::new(size.x, 0.0, 0.0),
            Vec3::new(0.0, size.y, 0.0),
            Vec3::new(0.0, 0.0, size.z),
        ];

        let [ns, nt, nu] = self.ctrl_pt_counts;
        let total = (ns * nt * nu) as usize;
        self.ctrl_pts = Vec::with_capacity(total);

        // Push order matches the row-major index mapping.
        for i in 0..ns {
            let fs = i as f32 / span_counts[0] as f32;
            for j in 0..nt {
                let ft = j as f32 / span_counts[1] as f32;
                for k in 0..nu {
                    let fu = k as f32 / span_counts[2] as f32;
                    self.ctrl_pts.push(
                        aabb.min + fs * self.axes[0] + ft * self.axes[1] + fu * self.axes[2],
                    );
                }
            }
        }

        Ok(true)
    }

    /// Bounding volume of the undeformed lattice
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Span count along the given parameter direction
    #[inline]
    pub fn span_count(&self, direction: Direction) -> u32 {
        self.span_counts[direction.index()]
    }

    /// Span counts in S, T, U order
    #[inline]
    pub fn span_counts(&self) -> [u32; 3] {
        self.span_counts
    }

    /// Control-point count along the given parameter direction
    #[inline]
    pub fn ctrl_pt_count(&self, direction: Direction) -> u32 {
        self.ctrl_pt_counts[direction.index()]
    }

    /// Control-point counts in S, T, U order
    #[inline]
    pub fn ctrl_pt_counts(&self) -> [u32; 3] {
        self.ctrl_pt_counts
    }

    /// Total number of control points
    #[inline]
    pub fn total_ctrl_pt_count(&self) -> usize {
        self.ctrl_pts.len()
    }

    /// Axis vector along the given parameter direction
    #[inline]
    pub fn axis(&self, direction: Direction) -> Vec3 {
        self.axes[direction.index()]
    }

    /// Axis vectors in S, T, U order
    #[inline]
    pub fn axes(&self) -> [Vec3; 3] {
        self.axes
    }

    /// All control-point positions, flat in row-major order
    ///
    /// This is the array hosts read to draw the lattice wireframe and
    /// control-point markers.
    #[inline]
    pub fn ctrl_pts(&self) -> &[Vec3] {
        &self.ctrl_pts
    }

    /// Convert a ternary index to the unary index into [`ctrl_pts`](Self::ctrl_pts)
    ///
    /// Pure index arithmetic, no bounds check; see
    /// [`checked_index`](Self::checked_index) for the validating variant.
    #[inline]
    pub fn index(&self, i: u32, j: u32, k: u32) -> usize {
        (i * self.ctrl_pt_counts[1] * self.ctrl_pt_counts[2] + j * self.ctrl_pt_counts[2] + k)
            as usize
    }

    /// Convert a ternary index to a unary index, rejecting out-of-range input
    ///
    /// # Errors
    /// [`FfdError::TernaryIndexOutOfRange`] if any component is outside its
    /// control-point count. No clamping is performed.
    pub fn checked_index(&self, i: u32, j: u32, k: u32) -> Result<usize, FfdError> {
        let [ns, nt, nu] = self.ctrl_pt_counts;
        if i >= ns || j >= nt || k >= nu {
            return Err(FfdError::TernaryIndexOutOfRange {
                i,
                j,
                k,
                counts: self.ctrl_pt_counts,
            });
        }
        Ok(self.index(i, j, k))
    }

    /// Position of the control point at the given unary index
    ///
    /// # Errors
    /// [`FfdError::IndexOutOfRange`] if `index` is past the end of the array.
    pub fn position(&self, index: usize) -> Result<Vec3, FfdError> {
        self.ctrl_pts
            .get(index)
            .copied()
            .ok_or(FfdError::IndexOutOfRange {
                index,
                len: self.ctrl_pts.len(),
            })
    }

    /// Move the control point at the given unary index
    ///
    /// In-place mutation only: never changes the count or indexing and never
    /// triggers a rebuild.
    ///
    /// # Errors
    /// [`FfdError::IndexOutOfRange`] if `index` is past the end of the array.
    pub fn set_position(&mut self, index: usize, position: Vec3) -> Result<(), FfdError> {
        let len = self.ctrl_pts.len();
        match self.ctrl_pts.get_mut(index) {
            Some(slot) => {
                *slot = position;
                Ok(())
            }
            None => Err(FfdError::IndexOutOfRange { index, len }),
        }
    }

    /// Position of the control point at the given ternary index
    ///
    /// # Errors
    /// [`FfdError::TernaryIndexOutOfRange`] on any out-of-range component.
    pub fn position_ternary(&self, i: u32, j: u32, k: u32) -> Result<Vec3, FfdError> {
        let index = self.checked_index(i, j, k)?;
        Ok(self.ctrl_pts[index])
    }

    /// Move the control point at the given ternary index
    ///
    /// # Errors
    /// [`FfdError::TernaryIndexOutOfRange`] on any out-of-range component.
    pub fn set_position_ternary(
        &mut self,
        i: u32,
        j: u32,
        k: u32,
        position: Vec3,
    ) -> Result<(), FfdError> {
        let index = self.checked_index(i, j, k)?;
        self.ctrl_pts[index] = position;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Aabb {
        Aabb::new(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn test_rebuild_counts() {
        let mut lattice = Lattice::new();
        assert!(lattice.rebuild(unit_cube(), [2, 3, 4]).unwrap());

        assert_eq!(lattice.ctrl_pt_counts(), [3, 4, 5]);
        assert_eq!(lattice.total_ctrl_pt_count(), 3 * 4 * 5);
        assert_eq!(lattice.ctrl_pt_count(Direction::T), 4);
        assert_eq!(lattice.span_count(Direction::U), 4);
    }

    #[test]
    fn test_rebuild_grid_positions() {
        let mut lattice = Lattice::new();
        let aabb = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 4.0, 3.0));
        lattice.rebuild(aabb, [2, 2, 2]).unwrap();

        // Corners land on the volume corners, midpoints on the center.
        assert_eq!(lattice.position_ternary(0, 0, 0).unwrap(), aabb.min);
        assert_eq!(lattice.position_ternary(2, 2, 2).unwrap(), aabb.max);
        let mid = lattice.position_ternary(1, 1, 1).unwrap();
        assert!((mid - aabb.center()).length() < 1e-6);
    }

    #[test]
    fn test_rebuild_no_op_preserves_edits() {
        let mut lattice = Lattice::new();
        lattice.rebuild(unit_cube(), [1, 1, 1]).unwrap();

        let moved = Vec3::splat(5.0);
        lattice.set_position_ternary(1, 1, 1, moved).unwrap();

        // Same inputs: short-circuit, edit survives.
        assert!(!lattice.rebuild(unit_cube(), [1, 1, 1]).unwrap());
        assert_eq!(lattice.position_ternary(1, 1, 1).unwrap(), moved);

        // Different span counts: full regeneration, edit discarded.
        assert!(lattice.rebuild(unit_cube(), [2, 1, 1]).unwrap());
        assert_eq!(lattice.position_ternary(2, 1, 1).unwrap(), Vec3::ONE);
    }

    #[test]
    fn test_rebuild_rejects_bad_spans() {
        let mut lattice = Lattice::new();
        assert_eq!(
            lattice.rebuild(unit_cube(), [1, 0, 1]),
            Err(FfdError::ZeroSpanCount {
                direction: Direction::T
            })
        );
        assert_eq!(
            lattice.rebuild(unit_cube(), [1, 1, MAX_SPAN_COUNT + 1]),
            Err(FfdError::SpanCountTooLarge {
                direction: Direction::U,
                count: MAX_SPAN_COUNT + 1,
            })
        );
        assert_eq!(lattice.total_ctrl_pt_count(), 0);
    }

    #[test]
    fn test_rebuild_rejects_degenerate_volume() {
        let mut lattice = Lattice::new();
        let flat = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(
            lattice.rebuild(flat, [1, 1, 1]),
            Err(FfdError::DegenerateVolume {
                direction: Direction::T
            })
        );
    }

    #[test]
    fn test_index_round_trip() {
        let mut lattice = Lattice::new();
        lattice.rebuild(unit_cube(), [2, 3, 4]).unwrap();

        let mut expected = 0;
        for i in 0..3 {
            for j in 0..4 {
                for k in 0..5 {
                    assert_eq!(lattice.index(i, j, k), expected);
                    assert_eq!(lattice.checked_index(i, j, k).unwrap(), expected);
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_access() {
        let mut lattice = Lattice::new();
        lattice.rebuild(unit_cube(), [1, 1, 1]).unwrap();

        assert!(matches!(
            lattice.position(8),
            Err(FfdError::IndexOutOfRange { index: 8, len: 8 })
        ));
        assert!(lattice.set_position(8, Vec3::ZERO).is_err());
        assert!(matches!(
            lattice.position_ternary(0, 2, 0),
            Err(FfdError::TernaryIndexOutOfRange { j: 2, .. })
        ));
        assert!(lattice.set_position_ternary(2, 0, 0, Vec3::ZERO).is_err());
    }

    #[test]
    fn test_axes_follow_volume() {
        let mut lattice = Lattice::new();
        let aabb = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 3.0, 4.0));
        lattice.rebuild(aabb, [1, 1, 1]).unwrap();

        assert_eq!(lattice.axis(Direction::S), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(lattice.axis(Direction::T), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(lattice.axis(Direction::U), Vec3::new(0.0, 0.0, 4.0));
    }
}
