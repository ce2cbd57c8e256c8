use alloc::vec::Vec;
use core::fmt::{self, Write as _};
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::vector::text::parse_elements;
use crate::vector::Vector;

use super::Matrix;

// ── Reading ─────────────────────────────────────────────────────────

impl<T: FromStr> Matrix<T> {
    /// Fill every row, in order, from whitespace-separated tokens.
    ///
    /// Line breaks carry no meaning; `order()²` tokens are consumed. On a
    /// parse error or short input the matrix is left unchanged.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let mut m = Matrix::<i32>::new(2).unwrap();
    /// m.read_tokens(&mut "1 2 3 4".split_whitespace()).unwrap();
    /// assert_eq!(m[1].as_slice(), &[3, 4]);
    /// ```
    pub fn read_tokens<S, I>(&mut self, tokens: &mut I) -> Result<()>
    where
        S: AsRef<str>,
        I: Iterator<Item = S>,
    {
        let n = self.order();
        let mut parsed = Vec::with_capacity(n);
        for i in 0..n {
            parsed.push(parse_elements(n, i * n, n * n, tokens)?);
        }
        for (row, data) in self.rows.iter_mut().zip(parsed) {
            row.data = data;
        }
        Ok(())
    }

    /// Fill every row from a whitespace-separated string.
    pub fn read_str(&mut self, s: &str) -> Result<()> {
        self.read_tokens(&mut s.split_whitespace())
    }

    /// Fill every row from a buffered reader.
    ///
    /// Container errors surface as [`std::io::ErrorKind::InvalidData`].
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::BufRead>(&mut self, reader: R) -> std::io::Result<()> {
        self.read_from_tokens(&mut crate::tokens::TokenReader::new(reader))
    }

    /// Fill every row from a shared [`TokenReader`](crate::tokens::TokenReader).
    #[cfg(feature = "std")]
    pub fn read_from_tokens<R: std::io::BufRead>(
        &mut self,
        tokens: &mut crate::tokens::TokenReader<R>,
    ) -> std::io::Result<()> {
        let n = self.order();
        let words = tokens.take(n * n)?;
        self.read_tokens(&mut words.iter())?;
        log::trace!("matrix: read {} rows", n);
        Ok(())
    }
}

impl<T: FromStr> FromStr for Matrix<T> {
    type Err = Error;

    /// Build a matrix from text with one row per non-blank line.
    ///
    /// The order is the number of rows; a row of any other length fails
    /// with [`Error::SizeMismatch`].
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m: Matrix<i32> = "1 2\n3 4\n".parse().unwrap();
    /// assert_eq!(m.order(), 2);
    /// assert_eq!(m[(1, 0)], 3);
    /// assert!("1 2\n3\n".parse::<Matrix<i32>>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        let n = lines.len();
        let mut rows = Vec::with_capacity(n);
        for (i, line) in lines.iter().enumerate() {
            let count = line.split_whitespace().count();
            if count != n {
                return Err(Error::SizeMismatch { left: n, right: count });
            }
            let data = parse_elements(n, i * n, n * n, &mut line.split_whitespace())?;
            rows.push(Vector { data });
        }
        Matrix::from_rows(rows)
    }
}

// ── Writing ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// One row per line, elements separated by single spaces, each row
    /// followed by a newline.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_fn(2, |i, j| i * 2 + j).unwrap();
    /// assert_eq!(m.to_string(), "0 1\n2 3\n");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            fmt::Display::fmt(row, f)?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display> Matrix<T> {
    /// Write the rows to `w` in the [`Display`](fmt::Display) format.
    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> std::io::Result<()> {
        std::io::Write::write_fmt(&mut w, format_args!("{}", self))
    }
}
