use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{ensure_same, Result};
use crate::traits::Element;

use super::Vector;

// ── Fallible vector arithmetic ──────────────────────────────────────

impl<T: Element> Vector<T> {
    /// Apply `f` to every element, producing a new vector of the same length.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let v = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(v.map(|x| x * x).as_slice(), &[1, 4, 9]);
    /// ```
    pub fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        Self {
            data: self.data.iter().map(f).collect(),
        }
    }

    fn zip_with(&self, rhs: &Self, mut f: impl FnMut(&T, &T) -> T) -> Result<Self> {
        ensure_same(self.len(), rhs.len())?;
        let data: Vec<T> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Self { data })
    }

    /// Element-wise sum.
    ///
    /// Fails with [`Error::SizeMismatch`](crate::Error::SizeMismatch) if the
    /// lengths differ; neither operand is modified either way.
    ///
    /// ```
    /// use dynmat::{Error, Vector};
    /// let a = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = Vector::from_slice(&[4, 5, 6]).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap().as_slice(), &[5, 7, 9]);
    ///
    /// let c = Vector::from_slice(&[1, 2]).unwrap();
    /// assert_eq!(a.try_add(&c), Err(Error::SizeMismatch { left: 3, right: 2 }));
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a.clone() + b.clone())
    }

    /// Element-wise difference. Fails like [`try_add`](Self::try_add).
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a.clone() - b.clone())
    }

    /// Dot product: sum of element-wise products, starting from zero.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let a = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = Vector::from_slice(&[4, 5, 6]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T> {
        ensure_same(self.len(), rhs.len())?;
        let mut sum = T::zero();
        for (a, b) in self.data.iter().zip(rhs.data.iter()) {
            sum = sum + a.clone() * b.clone();
        }
        Ok(sum)
    }
}

// ── Scalar arithmetic ───────────────────────────────────────────────

macro_rules! impl_scalar_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Element> $Op<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $op(self, rhs: T) -> Vector<T> {
                self.map(|x| x.clone() $sym rhs.clone())
            }
        }

        impl<T: Element> $Op<T> for Vector<T> {
            type Output = Vector<T>;

            fn $op(mut self, rhs: T) -> Vector<T> {
                self.$op_assign(rhs);
                self
            }
        }

        impl<T: Element> $OpAssign<T> for Vector<T> {
            fn $op_assign(&mut self, rhs: T) {
                for x in self.data.iter_mut() {
                    *x = core::mem::take(x) $sym rhs.clone();
                }
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);

// ── scalar * vector (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Vector arithmetic (panics on length mismatch) ───────────────────

macro_rules! impl_vector_op {
    ($Op:ident, $op:ident, $method:ident, $Out:ty) => {
        impl<T: Element> $Op<&Vector<T>> for &Vector<T> {
            type Output = $Out;

            fn $op(self, rhs: &Vector<T>) -> $Out {
                self.$method(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<T: Element> $Op<Vector<T>> for &Vector<T> {
            type Output = $Out;

            fn $op(self, rhs: Vector<T>) -> $Out {
                self.$op(&rhs)
            }
        }

        impl<T: Element> $Op<&Vector<T>> for Vector<T> {
            type Output = $Out;

            fn $op(self, rhs: &Vector<T>) -> $Out {
                (&self).$op(rhs)
            }
        }

        impl<T: Element> $Op<Vector<T>> for Vector<T> {
            type Output = $Out;

            fn $op(self, rhs: Vector<T>) -> $Out {
                (&self).$op(&rhs)
            }
        }
    };
}

impl_vector_op!(Add, add, try_add, Vector<T>);
impl_vector_op!(Sub, sub, try_sub, Vector<T>);
impl_vector_op!(Mul, mul, dot, T);

impl<T: Element> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        ensure_same(self.len(), rhs.len()).unwrap_or_else(|e| panic!("{}", e));
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = core::mem::take(a) + b.clone();
        }
    }
}

impl<T: Element> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        ensure_same(self.len(), rhs.len()).unwrap_or_else(|e| panic!("{}", e));
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = core::mem::take(a) - b.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn v(xs: &[i32]) -> Vector<i32> {
        Vector::from_slice(xs).unwrap()
    }

    #[test]
    fn add_scalar() {
        let a = v(&[1, 2, 3, 4, 5]);
        assert_eq!(&a + 10, v(&[11, 12, 13, 14, 15]));
        // Operand untouched.
        assert_eq!(a, v(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn sub_scalar() {
        assert_eq!(v(&[5, 6, 7, 8, 9]) - 3, v(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn mul_scalar() {
        let a = v(&[1, 2, 3, 4]);
        assert_eq!(&a * 2, v(&[2, 4, 6, 8]));
        assert_eq!(2 * &a, v(&[2, 4, 6, 8]));
    }

    #[test]
    fn scalar_assign_ops() {
        let mut a = v(&[1, 2, 3]);
        a += 1;
        assert_eq!(a, v(&[2, 3, 4]));
        a *= 3;
        assert_eq!(a, v(&[6, 9, 12]));
        a -= 6;
        assert_eq!(a, v(&[0, 3, 6]));
    }

    #[test]
    fn add_sub_vectors() {
        let a = v(&[1, 2, 3]);
        let b = v(&[4, 5, 6]);
        assert_eq!(&a + &b, v(&[5, 7, 9]));
        assert_eq!(&b - &a, v(&[3, 3, 3]));
        assert_eq!(a.try_sub(&b).unwrap(), v(&[-3, -3, -3]));
    }

    #[test]
    fn mismatched_lengths() {
        let a = v(&[1, 2, 3]);
        let b = v(&[2, 4, 6, 8]);
        let err = Error::SizeMismatch { left: 3, right: 4 };
        assert_eq!(a.try_add(&b), Err(err));
        assert_eq!(a.try_sub(&b), Err(err));
        assert_eq!(a.dot(&b), Err(err));
        // Failure leaves both operands as they were.
        assert_eq!(a, v(&[1, 2, 3]));
        assert_eq!(b, v(&[2, 4, 6, 8]));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_operator_mismatch_panics() {
        let _ = v(&[1, 2, 3]) + v(&[1, 2]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_assign_mismatch_panics() {
        let mut a = v(&[1, 2, 3]);
        a += &v(&[1, 2]);
    }

    #[test]
    fn dot_product() {
        let a = v(&[1, 2, 3]);
        let b = v(&[4, 5, 6]);
        assert_eq!(a.dot(&b), Ok(32));
        assert_eq!(&a * &b, 32);
    }

    #[test]
    fn dot_float() {
        let a = Vector::from_slice(&[0.5_f64, 1.5]).unwrap();
        let b = Vector::from_slice(&[2.0_f64, 2.0]).unwrap();
        assert!((a.dot(&b).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn vector_assign_ops() {
        let mut a = v(&[1, 2, 3]);
        a += &v(&[1, 1, 1]);
        assert_eq!(a, v(&[2, 3, 4]));
        a -= &v(&[2, 2, 2]);
        assert_eq!(a, v(&[0, 1, 2]));
    }

    #[test]
    fn ref_variants() {
        let a = v(&[1, 2]);
        let b = v(&[3, 4]);
        let sum1 = &a + &b;
        let sum2 = a.clone() + &b;
        let sum3 = &a + b.clone();
        let sum4 = a.clone() + b.clone();
        assert_eq!(sum1, sum2);
        assert_eq!(sum1, sum3);
        assert_eq!(sum1, sum4);
    }
}
