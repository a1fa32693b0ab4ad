//! Trivariate lattice evaluation
//!
//! Blends every control point with tensor-product Bernstein weights to turn
//! an (s, t, u) parameter triple into a deformed world-space position.
//!
//! Author: Moroya Sakamoto

pub mod parallel;

pub use parallel::{
    deform, deform_parallel, eval_param_grid, eval_world_batch, eval_world_batch_parallel,
    DeformCache,
};

use glam::Vec3;

use crate::bernstein::bernstein;
use crate::lattice::Lattice;
use crate::param::to_param;

/// Evaluate the deformed volume at (s, t, u) parameters
///
/// Triple nested weighted sum over all control points: point (i, j, k)
/// contributes with weight `B(nS, i, s) * B(nT, j, t) * B(nU, k, u)` where
/// each degree is the span count along that axis. The inner sums are
/// accumulated once per (i, j) so no partial product is recomputed.
///
/// Cost is linear in the total control-point count, per call. For bulk
/// per-frame deformation cache parameters once and use
/// [`deform`]/[`deform_parallel`] instead of re-deriving them.
#[inline]
pub fn eval_trivariate(lattice: &Lattice, s: f32, t: f32, u: f32) -> Vec3 {
    let [span_s, span_t, span_u] = lattice.span_counts();
    let [ns, nt, nu] = lattice.ctrl_pt_counts();
    let ctrl_pts = lattice.ctrl_pts();

    // The flat array is row-major in (i, j, k), so a running index replaces
    // the index arithmetic in the hot loop.
    let mut flat = 0;
    let mut eval_pt = Vec3::ZERO;
    for i in 0..ns {
        let mut point1 = Vec3::ZERO;
        for j in 0..nt {
            let mut point2 = Vec3::ZERO;
            for k in 0..nu {
                let poly_u = bernstein(span_u, k, u);
                point2 += ctrl_pts[flat] * poly_u;
                flat += 1;
            }
            let poly_t = bernstein(span_t, j, t);
            point1 += point2 * poly_t;
        }
        let poly_s = bernstein(span_s, i, s);
        eval_pt += point1 * poly_s;
    }
    eval_pt
}

/// Evaluate the deformed volume at a point given in world space
///
/// One-shot composition of [`to_param`] and [`eval_trivariate`] for points
/// whose parameters have not been cached. The bulk per-frame path should bind
/// a [`DeformCache`] once instead.
#[inline]
pub fn eval_world(lattice: &Lattice, world_pt: Vec3) -> Vec3 {
    let param = to_param(lattice, world_pt);
    eval_trivariate(lattice, param.x, param.y, param.z)
}
