//! Whitespace token reader over any [`BufRead`].
//!
//! A vector or matrix reads exactly as many tokens as it has elements, so
//! several containers can be read one after another from the same stream:
//!
//! ```
//! use dynmat::tokens::TokenReader;
//! use dynmat::{Matrix, Vector};
//!
//! let input = "1 2\n3 4\n5 6\n";
//! let mut tokens = TokenReader::new(input.as_bytes());
//!
//! let mut m = Matrix::<i32>::new(2).unwrap();
//! let mut v = Vector::<i32>::new(2).unwrap();
//! m.read_from_tokens(&mut tokens).unwrap();
//! v.read_from_tokens(&mut tokens).unwrap();
//! assert_eq!(m[1][0], 3);
//! assert_eq!(v.as_slice(), &[5, 6]);
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits a line-oriented reader into whitespace-separated tokens.
///
/// Lines are pulled on demand; tokens left over from a partially consumed
/// line stay buffered for the next read.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }

    /// Up to `n` tokens; fewer only when the input ends first.
    pub fn take(&mut self, n: usize) -> io::Result<Vec<String>> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            match self.next_token()? {
                Some(token) => out.push(token),
                None => break,
            }
        }
        Ok(out)
    }

    /// Recover the underlying reader. Buffered tokens are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
