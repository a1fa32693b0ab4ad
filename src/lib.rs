//! # ALICE-FFD
//!
//! **Free-Form Deformation lattice engine**
//!
//! Smoothly deforms arbitrary point clouds or meshes by manipulating a
//! sparse grid of control points surrounding them (Sederberg & Parry, 1986).
//!
//! ## Features
//!
//! - **Lattice builder**: control-point grid over an axis-aligned bounding
//!   volume, with a no-op short-circuit that preserves in-progress edits
//! - **Parametric mapper**: world space → normalized (s, t, u) in \[0,1\]³
//!   via scalar triple products, no matrix inversion
//! - **Trivariate evaluator**: tensor-product Bernstein blending of all
//!   control points, general degree up to [`MAX_SPAN_COUNT`]
//! - **Batch deformation**: parameterize once, re-evaluate per frame;
//!   parallel variants via rayon
//! - **Volume sampling**: dense deformed-volume previews on a parameter grid
//!
//! ## Example
//!
//! ```rust
//! use alice_ffd::prelude::*;
//!
//! // Lattice over a 10-unit cube, one span per axis: 8 corner control points.
//! let mut lattice = Lattice::new();
//! lattice
//!     .rebuild(Aabb::new(Vec3::ZERO, Vec3::splat(10.0)), [1, 1, 1])
//!     .unwrap();
//!
//! // Drag the far corner outward.
//! lattice
//!     .set_position_ternary(1, 1, 1, Vec3::splat(20.0))
//!     .unwrap();
//!
//! // Points near that corner follow it; the opposite corner stays put.
//! let moved = eval_world(&lattice, Vec3::splat(10.0));
//! assert!((moved - Vec3::splat(20.0)).length() < 1e-3);
//! let fixed = eval_world(&lattice, Vec3::ZERO);
//! assert!(fixed.length() < 1e-3);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod bernstein;
pub mod error;
pub mod eval;
pub mod lattice;
pub mod param;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::bernstein::{bernstein, binomial, MAX_SPAN_COUNT};
    pub use crate::error::FfdError;
    pub use crate::eval::{
        deform, deform_parallel, eval_param_grid, eval_trivariate, eval_world, eval_world_batch,
        eval_world_batch_parallel, DeformCache,
    };
    pub use crate::lattice::Lattice;
    pub use crate::param::to_param;
    pub use crate::types::{Aabb, Direction};
    pub use glam::Vec3;
}

// Re-exports for convenience
pub use bernstein::MAX_SPAN_COUNT;
pub use error::FfdError;
pub use eval::{eval_trivariate, eval_world, DeformCache};
pub use lattice::Lattice;
pub use param::to_param;
pub use types::{Aabb, Direction};
