//! Error taxonomy shared by [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix).

/// Errors from container construction, indexing, arithmetic and parsing.
///
/// ```
/// use dynmat::{Error, Vector, MAX_VECTOR_SIZE};
///
/// let err = Vector::<i32>::new(0).unwrap_err();
/// assert_eq!(err, Error::Size { requested: 0, max: MAX_VECTOR_SIZE });
///
/// let a = Vector::from_slice(&[1, 2, 3]).unwrap();
/// let b = Vector::from_slice(&[1, 2]).unwrap();
/// assert_eq!(a.dot(&b).unwrap_err(), Error::SizeMismatch { left: 3, right: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Requested length or order is zero or not below the ceiling.
    #[error("invalid size {requested}: must be in 1..{max}")]
    Size {
        /// Length (or order) that was asked for.
        requested: usize,
        /// Exclusive upper bound.
        max: usize,
    },

    /// Element or row index outside `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    Index {
        /// Offending index. Negative only when it came through a signed accessor.
        index: isize,
        /// Length of the indexed dimension.
        len: usize,
    },

    /// Operands of a binary operation have incompatible lengths or orders.
    #[error("dimension mismatch: {left} vs {right}")]
    SizeMismatch {
        /// Length (or order) of the left operand.
        left: usize,
        /// Length (or order) of the right operand.
        right: usize,
    },

    /// A text token could not be parsed as the element type.
    #[error("cannot parse element at position {position}")]
    Parse {
        /// Zero-based position of the element being read.
        position: usize,
    },

    /// Text input ended before every element was read.
    #[error("unexpected end of input: expected {expected} elements, found {found}")]
    UnexpectedEnd {
        /// Number of elements the container needed.
        expected: usize,
        /// Number of elements available.
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Index error for an unsigned index; indices beyond `isize::MAX` saturate.
    pub(crate) fn index(index: usize, len: usize) -> Self {
        Error::Index {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}

/// Check that `requested` lies in `1..max`.
pub(crate) fn ensure_size(requested: usize, max: usize) -> Result<()> {
    if requested == 0 || requested >= max {
        return Err(Error::Size { requested, max });
    }
    Ok(())
}

/// Check that two operand lengths agree.
pub(crate) fn ensure_same(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::SizeMismatch { left, right });
    }
    Ok(())
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
