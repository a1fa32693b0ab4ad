//! World space to lattice parameter space mapping
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

use crate::lattice::Lattice;

/// Convert a world-space point to normalized (s, t, u) lattice parameters
///
/// Solves `world_pt = min + s*axisS + t*axisT + u*axisU` for (s, t, u) by
/// scalar triple products: for each direction, the cross product of the other
/// two axes is orthogonal to their plane, so dotting it against both the
/// min-to-point vector and the direction's own axis isolates that coordinate.
/// No explicit matrix inversion needed. Points inside the bounding volume map
/// into [0, 1]³; points outside extrapolate beyond it.
///
/// The mapping is fixed by the lattice geometry, not the control points: call
/// it once per undeformed point when the lattice is (re)built, cache the
/// result, and re-evaluate with [`eval_trivariate`](crate::eval::eval_trivariate)
/// as control points move.
///
/// The lattice must have been successfully rebuilt; `rebuild` has already
/// rejected degenerate axes, so the denominators here are non-zero.
#[inline]
pub fn to_param(lattice: &Lattice, world_pt: Vec3) -> Vec3 {
    let axes = lattice.axes();
    let min2world = world_pt - lattice.aabb().min;

    let cross = [
        axes[1].cross(axes[2]),
        axes[0].cross(axes[2]),
        axes[0].cross(axes[1]),
    ];

    let mut param = Vec3::ZERO;
    for i in 0..3 {
        let numer = cross[i].dot(min2world);
        let denom = cross[i].dot(axes[i]);
        param[i] = numer / denom;
    }
    param
}
