//! Error types for lattice construction and control-point access
//!
//! The engine has no runtime faults, only precondition violations: every
//! operation is a deterministic, total function given valid inputs. Invalid
//! inputs are rejected at the API boundary instead of propagating NaNs.
//!
//! Author: Moroya Sakamoto

use thiserror::Error;

use crate::types::Direction;

/// Precondition violations reported by the FFD engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FfdError {
    /// A span count of zero would place control points by dividing by zero
    #[error("span count along {direction} must be at least 1")]
    ZeroSpanCount {
        /// Parameter direction with the zero span count
        direction: Direction,
    },

    /// Span count above the supported Bernstein degree
    #[error("span count {count} along {direction} exceeds MAX_SPAN_COUNT")]
    SpanCountTooLarge {
        /// Parameter direction with the oversized span count
        direction: Direction,
        /// Requested span count
        count: u32,
    },

    /// Bounding volume with zero (or negative) extent along an axis
    #[error("degenerate bounding volume: zero extent along {direction}")]
    DegenerateVolume {
        /// Parameter direction whose axis vector has no length
        direction: Direction,
    },

    /// Unary control-point index outside the flat array
    #[error("control point index {index} out of range (lattice has {len})")]
    IndexOutOfRange {
        /// Offending unary index
        index: usize,
        /// Total control-point count
        len: usize,
    },

    /// Ternary control-point index outside the grid
    #[error("control point ({i}, {j}, {k}) out of range (counts {counts:?})")]
    TernaryIndexOutOfRange {
        /// S-direction index
        i: u32,
        /// T-direction index
        j: u32,
        /// U-direction index
        k: u32,
        /// Per-direction control-point counts
        counts: [u32; 3],
    },
}
