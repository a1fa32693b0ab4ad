//! Bernstein polynomial basis for trivariate blending
//!
//! Binomial coefficients up to [`MAX_SPAN_COUNT`] come from a precomputed
//! Pascal's-triangle table; the naive factorial route is both slower and
//! overflow-prone for larger degrees.
//!
//! Author: Moroya Sakamoto

/// Maximum supported span count (Bernstein degree) per lattice axis
///
/// Span counts are small in practice; the binomial table is sized by this
/// constant and [`crate::Lattice::rebuild`] rejects anything larger.
pub const MAX_SPAN_COUNT: u32 = 8;

const TABLE_SIZE: usize = (MAX_SPAN_COUNT + 1) as usize;

/// Pascal's triangle: PASCAL[n][k] == C(n, k) for n, k <= MAX_SPAN_COUNT
const fn pascal_table() -> [[u32; TABLE_SIZE]; TABLE_SIZE] {
    let mut table = [[0u32; TABLE_SIZE]; TABLE_SIZE];
    let mut n = 0;
    while n < TABLE_SIZE {
        table[n][0] = 1;
        table[n][n] = 1;
        let mut k = 1;
        while k < n {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
}

static PASCAL: [[u32; TABLE_SIZE]; TABLE_SIZE] = pascal_table();

/// Binomial coefficient C(n, k)
///
/// Table lookup for n up to [`MAX_SPAN_COUNT`], multiplicative fallback above.
/// Returns 0 for k > n.
#[inline]
pub fn binomial(n: u32, k: u32) -> f32 {
    if k > n {
        return 0.0;
    }
    if n <= MAX_SPAN_COUNT {
        return PASCAL[n as usize][k as usize] as f32;
    }
    let mut coeff = 1.0f32;
    for i in 0..k {
        coeff *= (n - i) as f32 / (i + 1) as f32;
    }
    coeff
}

/// Bernstein polynomial B(n, k, x) = C(n,k) * (1-x)^(n-k) * x^k
///
/// `n` is the span count along an axis (the polynomial degree, not the
/// control-point count) and `k` ranges over `0..=n`.
#[inline]
pub fn bernstein(n: u32, k: u32, x: f32) -> f32 {
    binomial(n, k) * (1.0 - x).powi((n - k) as i32) * x.powi(k as i32)
}
