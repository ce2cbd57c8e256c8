use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, Mul, MulAssign, Sub};

use crate::error::{ensure_same, Result};
use crate::traits::Element;
use crate::vector::Vector;

use super::Matrix;

// ── Fallible matrix arithmetic ──────────────────────────────────────

impl<T: Element> Matrix<T> {
    fn zip_rows(
        &self,
        rhs: &Self,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    ) -> Result<Self> {
        ensure_same(self.order(), rhs.order())?;
        let rows = self
            .rows
            .iter()
            .zip(rhs.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix { rows })
    }

    /// Element-wise sum.
    ///
    /// Fails with [`Error::SizeMismatch`](crate::Error::SizeMismatch) if the
    /// orders differ.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let a = Matrix::from_fn(3, |i, j| (i + j) as i32).unwrap();
    /// let b = Matrix::from_fn(3, |i, j| (i * j) as i32).unwrap();
    /// let c = a.try_add(&b).unwrap();
    /// assert_eq!(c[1][1], 3);
    /// assert_eq!(c[2][2], 8);
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_rows(rhs, Vector::try_add)
    }

    /// Element-wise difference. Fails like [`try_add`](Self::try_add).
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_rows(rhs, Vector::try_sub)
    }

    /// Every element multiplied by `k`.
    pub fn scale(&self, k: T) -> Self {
        Matrix {
            rows: self.rows.iter().map(|row| row * k.clone()).collect(),
        }
    }

    /// Matrix product `C[i][j] = Σ_k A[i][k] * B[k][j]`.
    ///
    /// ```
    /// use dynmat::{Error, Matrix};
    /// let a = Matrix::from_fn(2, |i, j| (i * 2 + j + 1) as i32).unwrap();
    /// let id = Matrix::from_fn(2, |i, j| (i == j) as i32).unwrap();
    /// assert_eq!(a.try_mul(&id).unwrap(), a);
    ///
    /// let b = Matrix::<i32>::new(3).unwrap();
    /// assert_eq!(a.try_mul(&b), Err(Error::SizeMismatch { left: 2, right: 3 }));
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        ensure_same(self.order(), rhs.order())?;
        let n = self.order();
        let mut rows = Vec::with_capacity(n);
        for a_row in &self.rows {
            let mut acc = vec![T::zero(); n];
            for (a_ik, b_row) in a_row.iter().zip(rhs.rows.iter()) {
                for (c, b_kj) in acc.iter_mut().zip(b_row.iter()) {
                    *c = core::mem::take(c) + a_ik.clone() * b_kj.clone();
                }
            }
            rows.push(Vector { data: acc });
        }
        Ok(Matrix { rows })
    }

    /// Matrix-vector product `y[i] = Σ_k A[i][k] * x[k]`.
    ///
    /// Fails with [`Error::SizeMismatch`](crate::Error::SizeMismatch) unless
    /// `x.len() == order()`.
    ///
    /// ```
    /// use dynmat::{Matrix, Vector};
    /// let a = Matrix::from_fn(2, |i, j| (i * 2 + j + 1) as i32).unwrap();
    /// let x = Vector::from_slice(&[1, 1]).unwrap();
    /// assert_eq!(a.mul_vector(&x).unwrap().as_slice(), &[3, 7]);
    /// ```
    pub fn mul_vector(&self, x: &Vector<T>) -> Result<Vector<T>> {
        ensure_same(self.order(), x.len())?;
        let data = self
            .rows
            .iter()
            .map(|row| row.dot(x))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector { data })
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: T) -> Matrix<T> {
        self *= rhs;
        self
    }
}

impl<T: Element> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for row in self.rows.iter_mut() {
            *row *= rhs.clone();
        }
    }
}

// ── Matrix arithmetic (panics on order mismatch) ────────────────────

macro_rules! impl_matrix_op {
    ($Op:ident, $op:ident, $method:ident, $Rhs:ident, $Out:ident) => {
        impl<T: Element> $Op<&$Rhs<T>> for &Matrix<T> {
            type Output = $Out<T>;

            fn $op(self, rhs: &$Rhs<T>) -> $Out<T> {
                self.$method(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<T: Element> $Op<$Rhs<T>> for &Matrix<T> {
            type Output = $Out<T>;

            fn $op(self, rhs: $Rhs<T>) -> $Out<T> {
                self.$op(&rhs)
            }
        }

        impl<T: Element> $Op<&$Rhs<T>> for Matrix<T> {
            type Output = $Out<T>;

            fn $op(self, rhs: &$Rhs<T>) -> $Out<T> {
                (&self).$op(rhs)
            }
        }

        impl<T: Element> $Op<$Rhs<T>> for Matrix<T> {
            type Output = $Out<T>;

            fn $op(self, rhs: $Rhs<T>) -> $Out<T> {
                (&self).$op(&rhs)
            }
        }
    };
}

impl_matrix_op!(Add, add, try_add, Matrix, Matrix);
impl_matrix_op!(Sub, sub, try_sub, Matrix, Matrix);
impl_matrix_op!(Mul, mul, try_mul, Matrix, Matrix);
impl_matrix_op!(Mul, mul, mul_vector, Vector, Vector);
