//! Text codec for coosum matrices.
//!
//! Wire format, whitespace-delimited, in this exact order: the cell
//! count `N`, then `N` row indices, `N` column indices and `N` values.
//! Writers emit the non-zero export of a matrix, so stored exact zeros
//! never reach the stream; readers accept the coordinates in any order
//! and absorb them directly, without pruning of their own.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use coosum_core::{CooMatrix, Compressed, Scalar};
use thiserror::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deserialization failure. No partial matrix is produced: a stream that
/// errors mid-read yields only the error.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed token {token:?} while reading {expected}")]
    Malformed {
        token: String,
        expected: &'static str,
    },
    #[error("stream ended while reading {expected}")]
    UnexpectedEnd { expected: &'static str },
}

/// Whitespace tokenizer over a buffered reader.
///
/// Consumes exactly the tokens a read asks for, so several matrices can
/// be decoded from one stream back to back.
pub struct TextReader<R> {
    src: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TextReader<R> {
    pub fn new(src: R) -> Self {
        Self {
            src,
            line: String::new(),
            pos: 0,
        }
    }

    fn token_bounds(&self) -> Option<(usize, usize)> {
        let rest = &self.line[self.pos..];
        let off = rest.find(|c: char| !c.is_whitespace())?;
        let start = self.pos + off;
        let end = self.line[start..]
            .find(char::is_whitespace)
            .map_or(self.line.len(), |e| start + e);
        Some((start, end))
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&str, ReadError> {
        loop {
            if let Some((start, end)) = self.token_bounds() {
                self.pos = end;
                return Ok(&self.line[start..end]);
            }
            self.line.clear();
            self.pos = 0;
            if self.src.read_line(&mut self.line)? == 0 {
                return Err(ReadError::UnexpectedEnd { expected });
            }
        }
    }

    fn parse_next<V: FromStr>(&mut self, expected: &'static str) -> Result<V, ReadError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| ReadError::Malformed {
            token: token.to_owned(),
            expected,
        })
    }
}

fn write_seq<V: Display, W: Write>(w: &mut W, items: &[V]) -> io::Result<()> {
    for (k, v) in items.iter().enumerate() {
        if k > 0 {
            write!(w, " ")?;
        }
        write!(w, "{v}")?;
    }
    writeln!(w)
}

/// Writes the compressed triple-array form in wire order.
pub fn write_compressed<T, W>(w: &mut W, comp: &Compressed<T>) -> io::Result<()>
where
    T: Scalar + Display,
    W: Write,
{
    writeln!(w, "{}", comp.nnz())?;
    write_seq(w, &comp.row)?;
    write_seq(w, &comp.col)?;
    write_seq(w, &comp.data)
}

/// Serializes a matrix: its non-zero export in wire order. Coordinate
/// order on the wire is unspecified.
pub fn write_matrix<T, W>(w: &mut W, matrix: &CooMatrix<T>) -> io::Result<()>
where
    T: Scalar + Display,
    W: Write,
{
    write_compressed(w, &matrix.to_compressed())
}

/// Reads one compressed form from the stream.
pub fn read_compressed<T, R>(reader: &mut TextReader<R>) -> Result<Compressed<T>, ReadError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    let nnz: usize = reader.parse_next("cell count")?;
    let mut row = Vec::with_capacity(nnz);
    for _ in 0..nnz {
        row.push(reader.parse_next("row index")?);
    }
    let mut col = Vec::with_capacity(nnz);
    for _ in 0..nnz {
        col.push(reader.parse_next("col index")?);
    }
    let mut data = Vec::with_capacity(nnz);
    for _ in 0..nnz {
        data.push(reader.parse_next("value")?);
    }
    Ok(Compressed { row, col, data })
}

/// Reads one matrix: the compressed form absorbed by direct assignment.
pub fn read_matrix<T, R>(reader: &mut TextReader<R>) -> Result<CooMatrix<T>, ReadError>
where
    T: Scalar + FromStr,
    R: BufRead,
{
    Ok(CooMatrix::from_compressed(&read_compressed(reader)?))
}

/// Serializes a matrix to an owned string.
#[must_use]
pub fn matrix_to_string<T: Scalar + Display>(matrix: &CooMatrix<T>) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec is infallible.
    write_matrix(&mut buf, matrix).expect("write to Vec");
    String::from_utf8(buf).expect("codec emits ASCII")
}

/// Deserializes a matrix from a string in wire format.
pub fn matrix_from_str<T: Scalar + FromStr>(text: &str) -> Result<CooMatrix<T>, ReadError> {
    read_matrix(&mut TextReader::new(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_crosses_line_boundaries() {
        let mut reader = TextReader::new("1 2\n\n  3\n4".as_bytes());
        for expected in ["1", "2", "3", "4"] {
            assert_eq!(reader.next_token("token").unwrap(), expected);
        }
        assert!(matches!(
            reader.next_token("token"),
            Err(ReadError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn parse_next_reports_the_offending_token() {
        let mut reader = TextReader::new("abc".as_bytes());
        let err = reader.parse_next::<usize>("cell count").unwrap_err();
        match err {
            ReadError::Malformed { token, expected } => {
                assert_eq!(token, "abc");
                assert_eq!(expected, "cell count");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
