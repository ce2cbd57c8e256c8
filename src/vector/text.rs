use alloc::vec::Vec;
use core::fmt::{self, Write as _};
use core::str::FromStr;

use crate::error::{Error, Result};

use super::Vector;

/// Parse `count` elements from `tokens`.
///
/// Reported positions start at `start`; `total` is the element count of the
/// whole container being read and becomes `expected` when input runs short.
pub(crate) fn parse_elements<T, S, I>(
    count: usize,
    start: usize,
    total: usize,
    tokens: &mut I,
) -> Result<Vec<T>>
where
    T: FromStr,
    S: AsRef<str>,
    I: Iterator<Item = S>,
{
    let mut out = Vec::with_capacity(count);
    for k in 0..count {
        let token = tokens.next().ok_or(Error::UnexpectedEnd {
            expected: total,
            found: start + k,
        })?;
        let value = token
            .as_ref()
            .parse()
            .map_err(|_| Error::Parse { position: start + k })?;
        out.push(value);
    }
    Ok(out)
}

// ── Reading ─────────────────────────────────────────────────────────

impl<T: FromStr> Vector<T> {
    /// Fill every element, in index order, from whitespace-separated tokens.
    ///
    /// Reading is all-or-nothing: if a token fails to parse or the input runs
    /// short, the vector is left unchanged. Tokens past `len()` are not consumed.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let mut v = Vector::<i32>::new(3).unwrap();
    /// let mut tokens = "1 2 3 4".split_whitespace();
    /// v.read_tokens(&mut tokens).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// assert_eq!(tokens.next(), Some("4"));
    /// ```
    pub fn read_tokens<S, I>(&mut self, tokens: &mut I) -> Result<()>
    where
        S: AsRef<str>,
        I: Iterator<Item = S>,
    {
        self.data = parse_elements(self.len(), 0, self.len(), tokens)?;
        Ok(())
    }

    /// Fill every element from a whitespace-separated string.
    ///
    /// ```
    /// use dynmat::{Error, Vector};
    /// let mut v = Vector::<f64>::new(2).unwrap();
    /// v.read_str("0.5\n1.5").unwrap();
    /// assert_eq!(v.as_slice(), &[0.5, 1.5]);
    ///
    /// assert_eq!(v.read_str("7"), Err(Error::UnexpectedEnd { expected: 2, found: 1 }));
    /// assert_eq!(v.as_slice(), &[0.5, 1.5]);
    /// ```
    pub fn read_str(&mut self, s: &str) -> Result<()> {
        self.read_tokens(&mut s.split_whitespace())
    }

    /// Fill every element from a buffered reader; tokens may span lines.
    ///
    /// Container errors surface as [`std::io::ErrorKind::InvalidData`].
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::BufRead>(&mut self, reader: R) -> std::io::Result<()> {
        self.read_from_tokens(&mut crate::tokens::TokenReader::new(reader))
    }

    /// Fill every element from a shared [`TokenReader`](crate::tokens::TokenReader).
    #[cfg(feature = "std")]
    pub fn read_from_tokens<R: std::io::BufRead>(
        &mut self,
        tokens: &mut crate::tokens::TokenReader<R>,
    ) -> std::io::Result<()> {
        let words = tokens.take(self.len())?;
        self.read_tokens(&mut words.iter())?;
        log::trace!("vector: read {} elements", self.len());
        Ok(())
    }
}

impl<T: FromStr> FromStr for Vector<T> {
    type Err = Error;

    /// Build a vector from every whitespace-separated token in `s`.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let v: Vector<i32> = "4 5 6".parse().unwrap();
    /// assert_eq!(v.len(), 3);
    /// assert!("".parse::<Vector<i32>>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let count = s.split_whitespace().count();
        let data = parse_elements(count, 0, count, &mut s.split_whitespace())?;
        Self::from_vec(data)
    }
}

// ── Writing ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Vector<T> {
    /// Elements in index order separated by single spaces. Width and
    /// precision flags apply to each element.
    ///
    /// ```
    /// use dynmat::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.5]).unwrap();
    /// assert_eq!(format!("{}", v), "1 2.5");
    /// assert_eq!(format!("{:.2}", v), "1.00 2.50");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            fmt::Display::fmt(x, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display> Vector<T> {
    /// Write the elements to `w` in the [`Display`](fmt::Display) format.
    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> std::io::Result<()> {
        std::io::Write::write_fmt(&mut w, format_args!("{}", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let v = Vector::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.to_string(), "1 2 3");
        let one = Vector::from_slice(&[7]).unwrap();
        assert_eq!(one.to_string(), "7");
    }

    #[test]
    fn display_width() {
        let v = Vector::from_slice(&[1, 22]).unwrap();
        assert_eq!(format!("{:>3}", v), "  1  22");
    }

    #[test]
    fn read_round_trip() {
        let v = Vector::from_slice(&[-3, 0, 17, 4]).unwrap();
        let mut w = Vector::<i32>::new(4).unwrap();
        w.read_str(&v.to_string()).unwrap();
        assert_eq!(v, w);
    }

    #[test]
    fn read_float_round_trip() {
        let v = Vector::from_slice(&[0.1_f64, -2.75, 1e-9]).unwrap();
        let mut w = Vector::<f64>::new(3).unwrap();
        w.read_str(&v.to_string()).unwrap();
        assert_eq!(v, w);
    }

    #[test]
    fn read_parse_error_leaves_vector() {
        let mut v = Vector::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.read_str("4 x 6"), Err(Error::Parse { position: 1 }));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn read_short_input() {
        let mut v = Vector::<u8>::new(3).unwrap();
        assert_eq!(
            v.read_str("1 2"),
            Err(Error::UnexpectedEnd { expected: 3, found: 2 })
        );
    }

    #[test]
    fn read_across_lines() {
        let mut v = Vector::<i64>::new(4).unwrap();
        v.read_str("1 2\n\n  3\t4\n").unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn from_str() {
        let v: Vector<i32> = " 1 2  3 ".parse().unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!("1 a".parse::<Vector<i32>>(), Err(Error::Parse { position: 1 }));
        assert!(matches!("   ".parse::<Vector<i32>>(), Err(Error::Size { requested: 0, .. })));
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_from_reader() {
        let input = b"10 20\n30\n" as &[u8];
        let mut v = Vector::<i32>::new(3).unwrap();
        v.read_from(input).unwrap();
        assert_eq!(v.as_slice(), &[10, 20, 30]);

        let mut w = Vector::<i32>::new(4).unwrap();
        let err = w.read_from(&b"1 2"[..]).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[cfg(feature = "std")]
    #[test]
    fn write_to_buffer() {
        let v = Vector::from_slice(&[1, 2, 3]).unwrap();
        let mut buf = Vec::new();
        v.write_to(&mut buf).unwrap();
        assert_eq!(buf, b"1 2 3");
    }
}
