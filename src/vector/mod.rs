mod ops;
pub(crate) mod text;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{ensure_size, Error, Result};
use crate::traits::Element;

/// Exclusive upper bound on a vector's length.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Heap-allocated vector with a length fixed at construction.
///
/// The storage is exclusively owned: cloning deep-copies it, [`take`](Self::take)
/// and [`assign_from`](Self::assign_from) transfer it, [`swap`](Self::swap)
/// exchanges it. The length only changes through whole-object assignment.
///
/// # Examples
///
/// ```
/// use dynmat::Vector;
///
/// let v = Vector::from_slice(&[1, 2, 3]).unwrap();
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2);
/// assert_eq!(v.dot(&v).unwrap(), 14);
///
/// let w = &v + 10;
/// assert_eq!(w.as_slice(), &[11, 12, 13]);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    pub(crate) data: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Element> Vector<T> {
    /// Create a vector of `len` default-valued elements.
    ///
    /// Fails with [`Error::Size`] unless `0 < len < MAX_VECTOR_SIZE`.
    ///
    /// ```
    /// use dynmat::{Error, Vector, MAX_VECTOR_SIZE};
    /// let v = Vector::<f64>::new(4).unwrap();
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v[3], 0.0);
    ///
    /// assert!(matches!(Vector::<f64>::new(MAX_VECTOR_SIZE), Err(Error::Size { .. })));
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        ensure_size(len, MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: vec![T::default(); len],
        })
    }

    /// Create a vector by copying every element of `src`.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_slice(src: &[T]) -> Result<Self> {
        ensure_size(src.len(), MAX_VECTOR_SIZE)?;
        Ok(Self { data: src.to_vec() })
    }

    /// Create a vector by calling `f(i)` for each index.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let v = Vector::from_fn(4, |i| (i * i) as i64).unwrap();
    /// assert_eq!(v.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Result<Self> {
        ensure_size(len, MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: (0..len).map(f).collect(),
        })
    }
}

impl<T> Vector<T> {
    /// Take ownership of `data` as the vector's storage.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let v = Vector::from_vec(vec![10, 20]).unwrap();
    /// assert_eq!(v[1], 20);
    /// assert!(Vector::<i32>::from_vec(Vec::new()).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        ensure_size(data.len(), MAX_VECTOR_SIZE)?;
        Ok(Self { data })
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector holds no storage (only after it was moved out of).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in index order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Release the storage as a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ── Ownership transfer ─────────────────────────────────────────

    /// Move the storage out into a new vector, leaving `self` empty.
    ///
    /// The emptied vector has length zero; it can be dropped or assigned to,
    /// but every element access on it fails.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let mut a = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = a.take();
    /// assert_eq!(b.len(), 3);
    /// assert!(a.is_empty());
    /// assert!(a.get(0).is_err());
    /// ```
    pub fn take(&mut self) -> Self {
        Self {
            data: core::mem::take(&mut self.data),
        }
    }

    /// Move-assign: release our storage and take `src`'s, leaving `src` empty.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let mut a = Vector::from_slice(&[1, 2]).unwrap();
    /// let mut b = Vector::from_slice(&[7, 8, 9]).unwrap();
    /// a.assign_from(&mut b);
    /// assert_eq!(a.as_slice(), &[7, 8, 9]);
    /// assert_eq!(b.len(), 0);
    /// ```
    pub fn assign_from(&mut self, src: &mut Self) {
        self.data = core::mem::take(&mut src.data);
    }

    /// Exchange storage (and therefore length) with `other` without copying.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let mut a = Vector::from_slice(&[1, 2]).unwrap();
    /// let mut b = Vector::from_slice(&[3, 4, 5]).unwrap();
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(b.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.data, &mut other.data);
    }

    // ── Checked access ─────────────────────────────────────────────

    /// Element at `index`, or [`Error::Index`] if `index >= len()`.
    ///
    /// ```
    /// use dynmat::{Error, Vector};
    /// let v = Vector::from_slice(&[5, 6]).unwrap();
    /// assert_eq!(v.get(1), Ok(&6));
    /// assert_eq!(v.get(2), Err(Error::Index { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data.get(index).ok_or(Error::index(index, len))
    }

    /// Mutable element at `index`, or [`Error::Index`] if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data.get_mut(index).ok_or(Error::index(index, len))
    }

    /// Element at a signed `index`; negative indices are rejected with
    /// [`Error::Index`] just like indices past the end.
    ///
    /// ```
    /// use dynmat::{Error, Vector};
    /// let v = Vector::from_slice(&[5, 6]).unwrap();
    /// assert_eq!(v.at(0), Ok(&5));
    /// assert_eq!(v.at(-1), Err(Error::Index { index: -1, len: 2 }));
    /// ```
    pub fn at(&self, index: isize) -> Result<&T> {
        let i = self.signed_index(index)?;
        Ok(&self.data[i])
    }

    /// Mutable element at a signed `index`.
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let i = self.signed_index(index)?;
        Ok(&mut self.data[i])
    }

    fn signed_index(&self, index: isize) -> Result<usize> {
        let len = self.len();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(i),
            _ => Err(Error::Index { index, len }),
        }
    }
}

impl<T: Element> Default for Vector<T> {
    /// A single default-valued element.
    fn default() -> Self {
        Self {
            data: vec![T::default()],
        }
    }
}

// ── Copy semantics ──────────────────────────────────────────────────

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    /// Copy-assign. Storage is reused when the lengths agree; otherwise the
    /// replacement is fully built before the old storage is released.
    ///
    /// On the reuse path elements are cloned in place, so the target is only
    /// left intact by a panicking `T::clone` when the lengths differ.
    fn clone_from(&mut self, src: &Self) {
        if self.len() == src.len() {
            self.data.clone_from_slice(&src.data);
        } else {
            log::trace!("vector: reallocating {} -> {} elements", self.len(), src.len());
            let fresh = src.data.clone();
            self.data = fresh;
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Copy-assign from `src`; same as [`Clone::clone_from`].
    ///
    /// ```
    /// use dynmat::Vector;
    /// let mut a = Vector::<i32>::new(5).unwrap();
    /// let b = Vector::from_fn(10, |i| 2 * (i as i32 + 1)).unwrap();
    /// a.assign(&b);
    /// assert_eq!(a.len(), 10);
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    pub fn assign(&mut self, src: &Self) {
        self.clone_from(src);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = Error;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl<T: Element> TryFrom<&[T]> for Vector<T> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self> {
        Self::from_slice(src)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Vector<i32> {
        Vector::from_fn(n, |i| i as i32 + 1).unwrap()
    }

    #[test]
    fn new_default_fill() {
        let v = Vector::<i32>::new(5).unwrap();
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn new_rejects_bad_sizes() {
        let max = MAX_VECTOR_SIZE;
        assert_eq!(Vector::<i32>::new(0), Err(Error::Size { requested: 0, max }));
        assert_eq!(Vector::<i32>::new(max), Err(Error::Size { requested: max, max }));
        assert_eq!(
            Vector::<i32>::new(max + 1),
            Err(Error::Size { requested: max + 1, max })
        );
    }

    #[test]
    fn from_slice_copies() {
        let src = [1, 2, 3, 4, 5];
        let v = Vector::from_slice(&src).unwrap();
        assert_eq!(v.as_slice(), &src);
        assert!(Vector::<i32>::from_slice(&[]).is_err());
    }

    #[test]
    fn clone_is_independent() {
        let original = seq(5);
        let mut copied = original.clone();
        assert_eq!(copied, original);
        copied[0] = 10;
        assert_ne!(original[0], copied[0]);
        assert_eq!(original[0], 1);
    }

    #[test]
    fn assign_same_length() {
        let mut a = Vector::<i32>::new(5).unwrap();
        let b = seq(5);
        a.assign(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn assign_changes_length() {
        let mut a = seq(5);
        let b = Vector::from_fn(10, |i| 2 * (i as i32 + 1)).unwrap();
        a.assign(&b);
        assert_eq!(a.len(), 10);
        for i in 0..10 {
            assert_eq!(a[i], 2 * (i as i32 + 1));
        }
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = seq(3);
        let b = a.take();
        assert_eq!(b, seq(3));
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
        assert_eq!(a.get(0), Err(Error::Index { index: 0, len: 0 }));

        // An emptied vector can be assigned to again.
        a.assign(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn assign_from_moves() {
        let mut a = seq(2);
        let mut b = seq(4);
        a.assign_from(&mut b);
        assert_eq!(a, seq(4));
        assert!(b.is_empty());
    }

    #[test]
    fn swap_exchanges() {
        let mut a = seq(2);
        let mut b = seq(4);
        let pa = a.as_slice().as_ptr();
        a.swap(&mut b);
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 2);
        // Storage moved, not copied.
        assert_eq!(b.as_slice().as_ptr(), pa);
    }

    #[test]
    fn checked_access() {
        let mut v = seq(5);
        assert_eq!(v.get(4), Ok(&5));
        assert_eq!(v.get(5), Err(Error::Index { index: 5, len: 5 }));
        *v.get_mut(0).unwrap() = 42;
        assert_eq!(v[0], 42);
        assert!(v.get_mut(5).is_err());
    }

    #[test]
    fn signed_access() {
        let mut v = seq(5);
        assert_eq!(v.at(2), Ok(&3));
        assert_eq!(v.at(-1), Err(Error::Index { index: -1, len: 5 }));
        assert_eq!(v.at(5), Err(Error::Index { index: 5, len: 5 }));
        *v.at_mut(4).unwrap() = 0;
        assert_eq!(v[4], 0);
        assert!(v.at_mut(isize::MIN).is_err());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_end_panics() {
        let v = seq(3);
        let _ = v[3];
    }

    #[test]
    fn equality() {
        let a = seq(5);
        assert_eq!(a, a);
        assert_eq!(a, seq(5));
        assert_ne!(a, seq(6));
        let mut b = seq(5);
        b[4] = 0;
        assert_ne!(a, b);
    }

    #[test]
    fn conversions() {
        let v: Vector<i32> = vec![1, 2, 3].try_into().unwrap();
        let back: Vec<i32> = v.clone().into();
        assert_eq!(back, vec![1, 2, 3]);
        let from_ref: Vector<i32> = Vector::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(from_ref, v);
        assert_eq!(v.into_iter().sum::<i32>(), 6);
    }
}
