//! Shorthand names for containers over the usual element types.
//!
//! Every alias keeps the checked constructors of the generic type: a vector
//! length must lie in `1..MAX_VECTOR_SIZE` and a matrix is always square with
//! an order in `1..MAX_MATRIX_SIZE`.

use crate::{Matrix, Vector};

// ── Vectors ─────────────────────────────────────────────────────────

/// Single-precision vector.
pub type Vectorf32 = Vector<f32>;
/// Double-precision vector.
pub type Vectorf64 = Vector<f64>;
/// 32-bit signed integer vector.
pub type Vectori32 = Vector<i32>;
/// 64-bit signed integer vector.
pub type Vectori64 = Vector<i64>;
/// 32-bit unsigned vector. Scalar subtraction follows `u32` overflow rules.
pub type Vectoru32 = Vector<u32>;
/// 64-bit unsigned vector.
pub type Vectoru64 = Vector<u64>;

// ── Square matrices ─────────────────────────────────────────────────

/// `order × order` single-precision matrix.
pub type Matrixf32 = Matrix<f32>;
/// `order × order` double-precision matrix.
pub type Matrixf64 = Matrix<f64>;
/// `order × order` matrix of `i32`; products accumulate in `i32`.
pub type Matrixi32 = Matrix<i32>;
/// `order × order` matrix of `i64`.
pub type Matrixi64 = Matrix<i64>;
/// `order × order` matrix of `u32`.
pub type Matrixu32 = Matrix<u32>;
/// `order × order` matrix of `u64`.
pub type Matrixu64 = Matrix<u64>;

// ── Complex (feature `complex`) ─────────────────────────────────────

/// Vector of `Complex<f32>`; `dot` does not conjugate.
#[cfg(feature = "complex")]
pub type Vectorz32 = Vector<num_complex::Complex<f32>>;
/// Vector of `Complex<f64>`; `dot` does not conjugate.
#[cfg(feature = "complex")]
pub type Vectorz64 = Vector<num_complex::Complex<f64>>;

/// Square matrix of `Complex<f32>`.
#[cfg(feature = "complex")]
pub type Matrixz32 = Matrix<num_complex::Complex<f32>>;
/// Square matrix of `Complex<f64>`.
#[cfg(feature = "complex")]
pub type Matrixz64 = Matrix<num_complex::Complex<f64>>;
