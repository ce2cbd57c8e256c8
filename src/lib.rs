//! # dynmat
//!
//! Owned, heap-allocated numeric containers with runtime sizes: a [`Vector`]
//! of fixed length and a square [`Matrix`] built from row vectors. No-std
//! compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use dynmat::{Matrix, Vector};
//!
//! let a = Matrix::from_fn(3, |i, j| (i + j) as i32).unwrap();
//! let x = Vector::from_slice(&[1, 0, 2]).unwrap();
//!
//! let y = a.mul_vector(&x).unwrap(); // y = [4, 7, 10]
//! assert_eq!(y.as_slice(), &[4, 7, 10]);
//!
//! let text = a.to_string(); // "0 1 2\n1 2 3\n2 3 4\n"
//! let back: Matrix<i32> = text.parse().unwrap();
//! assert_eq!(back, a);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — `Vector<T>`: construction with a checked length, deep
//!   copy, ownership transfer (`take`, `assign_from`, `swap`), checked and
//!   signed indexing, scalar and element-wise arithmetic, dot product.
//!
//! - [`matrix`] — `Matrix<T>`: an owned sequence of `order` row vectors, each
//!   of length `order`. Row and element access, element-wise add/subtract,
//!   scalar, matrix-vector and matrix-matrix products.
//!
//! - [`tokens`] — `TokenReader`, a whitespace tokenizer over `BufRead` used to
//!   read several containers from one stream (requires `std`).
//!
//! - [`traits`] — [`Element`], the capability set every element type needs.
//!
//! ## Errors
//!
//! Fallible operations return [`Result`] with a typed [`Error`]:
//! [`Error::Size`] for bad lengths or orders, [`Error::Index`] for
//! out-of-range access, [`Error::SizeMismatch`] for incompatible operands,
//! and [`Error::Parse`] / [`Error::UnexpectedEnd`] for text input. The
//! operator forms (`&a + &b`, `&m * &x`, …) panic on a size mismatch instead.
//! A failing operation never modifies its operands.
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `std`     | yes     | `std::io` readers and writers, `TokenReader` |
//! | `complex` | no      | `Complex<f32>` / `Complex<f64>` aliases via `num-complex` |
//! | `all`     | no      | All features |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod aliases;
pub mod error;
pub mod matrix;
#[cfg(feature = "std")]
pub mod tokens;
pub mod traits;
pub mod vector;

pub use aliases::{
    Matrixf32, Matrixf64, Matrixi32, Matrixi64, Matrixu32, Matrixu64,
    Vectorf32, Vectorf64, Vectori32, Vectori64, Vectoru32, Vectoru64,
};
#[cfg(feature = "complex")]
pub use aliases::{Matrixz32, Matrixz64, Vectorz32, Vectorz64};
pub use error::{Error, Result};
pub use matrix::{Matrix, MAX_MATRIX_SIZE};
pub use traits::Element;
pub use vector::{Vector, MAX_VECTOR_SIZE};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
