//! Batch and parallel lattice deformation
//!
//! The per-frame workload is thousands of points against one small lattice,
//! so the batch paths parameterize points once, keep the triples in a
//! [`DeformCache`], and re-evaluate only the blending as control points move.
//! Parallel variants use rayon.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::FfdError;
use crate::eval::eval_trivariate;
use crate::lattice::Lattice;
use crate::param::to_param;
use crate::types::Direction;

/// Cached (s, t, u) parameter triples for a set of undeformed points
///
/// Bound once per lattice rebuild (or source-geometry change); stable across
/// control-point edits. The i-th triple keeps the identity of the i-th input
/// point, so [`deform`] output lines up with the original point order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformCache {
    params: Vec<Vec3>,
}

impl DeformCache {
    /// Parameterize every point against the lattice
    pub fn bind(lattice: &Lattice, points: &[Vec3]) -> Self {
        DeformCache {
            params: points.iter().map(|&p| to_param(lattice, p)).collect(),
        }
    }

    /// Parallel variant of [`bind`](Self::bind)
    pub fn bind_parallel(lattice: &Lattice, points: &[Vec3]) -> Self {
        DeformCache {
            params: points.par_iter().map(|&p| to_param(lattice, p)).collect(),
        }
    }

    /// Number of cached triples
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if no triples are cached
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The cached parameter triples
    pub fn params(&self) -> &[Vec3] {
        &self.params
    }
}

/// Deform every cached point against the current control points
///
/// Pure read of the lattice; call each frame after control-point edits.
pub fn deform(lattice: &Lattice, cache: &DeformCache) -> Vec<Vec3> {
    cache
        .params
        .iter()
        .map(|p| eval_trivariate(lattice, p.x, p.y, p.z))
        .collect()
}

/// Parallel variant of [`deform`]
pub fn deform_parallel(lattice: &Lattice, cache: &DeformCache) -> Vec<Vec3> {
    cache
        .params
        .par_iter()
        .map(|p| eval_trivariate(lattice, p.x, p.y, p.z))
        .collect()
}

/// One-shot deformation of world-space points (no parameter caching)
pub fn eval_world_batch(lattice: &Lattice, points: &[Vec3]) -> Vec<Vec3> {
    points
        .iter()
        .map(|&p| crate::eval::eval_world(lattice, p))
        .collect()
}

/// Parallel variant of [`eval_world_batch`]
pub fn eval_world_batch_parallel(lattice: &Lattice, points: &[Vec3]) -> Vec<Vec3> {
    points
        .par_iter()
        .map(|&p| crate::eval::eval_world(lattice, p))
        .collect()
}

/// Sample the deformed volume on a uniform parameter grid
///
/// Evaluates `(resolution + 1)` samples per direction at the parameters
/// `i / resolution`, giving the deformed-volume point cloud hosts render as
/// a dense preview. Output is row-major in (s, t, u) sample indices, the
/// same ordering as control points. Parallelized by S-slices.
///
/// # Errors
/// [`FfdError::ZeroSpanCount`] if any resolution component is 0.
pub fn eval_param_grid(lattice: &Lattice, resolution: [u32; 3]) -> Result<Vec<Vec3>, FfdError> {
    for direction in Direction::ALL {
        if resolution[direction.index()] == 0 {
            return Err(FfdError::ZeroSpanCount { direction });
        }
    }

    let samples = [resolution[0] + 1, resolution[1] + 1, resolution[2] + 1];
    let step = Vec3::new(
        1.0 / resolution[0] as f32,
        1.0 / resolution[1] as f32,
        1.0 / resolution[2] as f32,
    );

    let slice_size = (samples[1] * samples[2]) as usize;
    let total = samples[0] as usize * slice_size;
    let mut buffer = vec![Vec3::ZERO; total];

    buffer
        .par_chunks_mut(slice_size)
        .enumerate()
        .for_each(|(i, slice)| {
            let s = i as f32 * step.x;
            let mut flat = 0;
            for j in 0..samples[1] {
                let t = j as f32 * step.y;
                for k in 0..samples[2] {
                    let u = k as f32 * step.z;
                    slice[flat] = eval_trivariate(lattice, s, t, u);
                    flat += 1;
                }
            }
        });

    Ok(buffer)
}
