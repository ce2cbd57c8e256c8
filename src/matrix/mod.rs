mod ops;
mod text;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{ensure_same, ensure_size, Error, Result};
use crate::traits::Element;
use crate::vector::Vector;

/// Exclusive upper bound on a matrix's order.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Heap-allocated square matrix of order fixed at construction.
///
/// Stored as an owned sequence of row [`Vector`]s, each of length `order`.
/// Rows are only handed out mutably as slices, so the matrix can never become
/// jagged. Ownership cascades: dropping the matrix drops every row.
///
/// # Examples
///
/// ```
/// use dynmat::Matrix;
///
/// let a = Matrix::from_fn(2, |i, j| (i * 2 + j + 1) as i32).unwrap();
/// let b = Matrix::from_fn(2, |i, j| (i * 2 + j + 5) as i32).unwrap();
/// let c = a.try_mul(&b).unwrap();
/// assert_eq!(c[0][0], 19);
/// assert_eq!(c[(1, 1)], 50);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Element> Matrix<T> {
    /// Create an `order x order` matrix of default-valued elements.
    ///
    /// Fails with [`Error::Size`] unless `0 < order < MAX_MATRIX_SIZE`.
    ///
    /// ```
    /// use dynmat::{Error, Matrix, MAX_MATRIX_SIZE};
    /// let m = Matrix::<i32>::new(3).unwrap();
    /// assert_eq!(m.order(), 3);
    /// assert_eq!(m[2][2], 0);
    /// assert!(matches!(Matrix::<i32>::new(MAX_MATRIX_SIZE), Err(Error::Size { .. })));
    /// ```
    pub fn new(order: usize) -> Result<Self> {
        ensure_size(order, MAX_MATRIX_SIZE)?;
        let rows = (0..order)
            .map(|_| Vector::new(order))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_fn(3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(0, 2)], 0.0);
    /// ```
    pub fn from_fn(order: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        ensure_size(order, MAX_MATRIX_SIZE)?;
        let rows = (0..order)
            .map(|i| Vector::from_fn(order, |j| f(i, j)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }
}

impl<T> Matrix<T> {
    /// Assemble a matrix from its rows.
    ///
    /// The number of rows is the order; every row must have exactly that
    /// length, otherwise [`Error::SizeMismatch`] is returned.
    ///
    /// ```
    /// use dynmat::{Error, Matrix, Vector};
    /// let r0 = Vector::from_slice(&[1, 2]).unwrap();
    /// let r1 = Vector::from_slice(&[3, 4]).unwrap();
    /// let m = Matrix::from_rows(vec![r0.clone(), r1]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    ///
    /// let short = Vector::from_slice(&[5]).unwrap();
    /// assert_eq!(
    ///     Matrix::from_rows(vec![r0, short]),
    ///     Err(Error::SizeMismatch { left: 2, right: 1 })
    /// );
    /// ```
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self> {
        let order = rows.len();
        ensure_size(order, MAX_MATRIX_SIZE)?;
        for row in &rows {
            ensure_same(order, row.len())?;
        }
        Ok(Self { rows })
    }

    /// Number of rows, which equals the number of columns.
    #[inline]
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Same as [`order`](Self::order).
    #[inline]
    pub fn len(&self) -> usize {
        self.order()
    }

    /// Whether the matrix holds no rows (only after it was moved out of).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows.
    #[inline]
    pub fn rows(&self) -> core::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Release the rows.
    pub fn into_rows(self) -> Vec<Vector<T>> {
        self.rows
    }

    // ── Ownership transfer ─────────────────────────────────────────

    /// Move all rows out into a new matrix, leaving `self` of order zero.
    pub fn take(&mut self) -> Self {
        Self {
            rows: core::mem::take(&mut self.rows),
        }
    }

    /// Move-assign: drop our rows and take `src`'s, leaving `src` empty.
    pub fn assign_from(&mut self, src: &mut Self) {
        self.rows = core::mem::take(&mut src.rows);
    }

    /// Exchange contents with `other` without copying any row.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.rows, &mut other.rows);
    }

    // ── Checked access ─────────────────────────────────────────────

    /// Row `i`, or [`Error::Index`] if `i >= order()`.
    ///
    /// ```
    /// use dynmat::{Error, Matrix};
    /// let m = Matrix::from_fn(2, |i, j| i + j).unwrap();
    /// assert_eq!(m.row(1).unwrap().as_slice(), &[1, 2]);
    /// assert_eq!(m.row(2), Err(Error::Index { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn row(&self, i: usize) -> Result<&Vector<T>> {
        let order = self.order();
        self.rows.get(i).ok_or(Error::index(i, order))
    }

    /// Row `i` as a mutable slice, or [`Error::Index`] if `i >= order()`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [T]> {
        let order = self.order();
        self.rows
            .get_mut(i)
            .map(Vector::as_mut_slice)
            .ok_or(Error::index(i, order))
    }

    /// Element `(i, j)`; an out-of-range row or column fails with [`Error::Index`].
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        self.row(i)?.get(j)
    }

    /// Mutable element `(i, j)`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        let order = self.order();
        let row = self.rows.get_mut(i).ok_or(Error::index(i, order))?;
        row.get_mut(j)
    }

    /// Element at signed `(i, j)`; negative indices fail with [`Error::Index`].
    ///
    /// ```
    /// use dynmat::{Error, Matrix};
    /// let m = Matrix::<i32>::new(3).unwrap();
    /// assert_eq!(m.at(-1, 0), Err(Error::Index { index: -1, len: 3 }));
    /// assert_eq!(m.at(0, -1), Err(Error::Index { index: -1, len: 3 }));
    /// assert_eq!(m.at(0, 3), Err(Error::Index { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, i: isize, j: isize) -> Result<&T> {
        let i = self.signed_row(i)?;
        self.rows[i].at(j)
    }

    /// Mutable element at signed `(i, j)`.
    pub fn at_mut(&mut self, i: isize, j: isize) -> Result<&mut T> {
        let i = self.signed_row(i)?;
        self.rows[i].at_mut(j)
    }

    fn signed_row(&self, index: isize) -> Result<usize> {
        let len = self.order();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(i),
            _ => Err(Error::Index { index, len }),
        }
    }
}

impl<T: Element> Default for Matrix<T> {
    /// Order 1, holding one default-valued element.
    fn default() -> Self {
        Self {
            rows: vec![Vector::default()],
        }
    }
}

// ── Copy semantics ──────────────────────────────────────────────────

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    /// Copy-assign row by row when the orders agree; otherwise build the
    /// replacement rows first and release the old ones afterwards.
    ///
    /// Row-by-row copying is in place, with the same caveat as
    /// `Vector::clone_from` for a panicking `T::clone`.
    fn clone_from(&mut self, src: &Self) {
        if self.order() == src.order() {
            for (dst, row) in self.rows.iter_mut().zip(src.rows.iter()) {
                dst.clone_from(row);
            }
        } else {
            log::trace!("matrix: reallocating order {} -> {}", self.order(), src.order());
            let fresh = src.rows.clone();
            self.rows = fresh;
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Copy-assign from `src`; same as [`Clone::clone_from`].
    #[inline]
    pub fn assign(&mut self, src: &Self) {
        self.clone_from(src);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<T> {
        &self.rows[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.rows[i][j]
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a Vector<T>;
    type IntoIter = core::slice::Iter<'a, Vector<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
