// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Reading and writing flow networks in DIMACS format.

pub mod max;

use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;

/// Error when reading a file in DIMACS format.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
    #[error("Data error on line {line}: {msg}")]
    Data { line: usize, msg: String },
    #[error("Invalid network on line {line}: {source}")]
    Network {
        line: usize,
        #[source]
        source: crate::error::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A line based reader skipping empty and comment lines.
pub struct DimacsReader<R: Read> {
    io: BufReader<R>,
    line: String,
    line_number: usize,
}

impl<R: Read> DimacsReader<R> {
    pub fn new(reader: R) -> Self {
        DimacsReader {
            io: BufReader::new(reader),
            line: String::new(),
            line_number: 0,
        }
    }

    /// Return the tokens of the next non-comment line.
    ///
    /// Returns `Ok(None)` at the end of the input.
    pub fn read_line(&mut self) -> Result<Option<Tokens>> {
        loop {
            self.line.clear();
            if self.io.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let content = self.line.trim_start();
            if content.is_empty() || content.starts_with('c') {
                continue;
            }
            return Ok(Some(Tokens {
                it: self.line.split_whitespace(),
                line: self.line_number,
            }));
        }
    }

    /// Expect a line with the given descriptor.
    ///
    /// Returns the *remaining* tokens of that line.
    pub fn expect_line(&mut self, descriptor: &str) -> Result<Tokens> {
        let line_number = self.line_number;
        let mut toks = self.read_line()?.ok_or_else(|| Error::Format {
            line: line_number,
            msg: format!("unexpected end of file, expected '{}' line", descriptor),
        })?;
        match toks.next() {
            Some(d) if d == descriptor => Ok(toks),
            Some(d) => Err(Error::Format {
                line: toks.line,
                msg: format!("unexpected line, expected '{}', got '{}'", descriptor, d),
            }),
            None => Err(Error::Format {
                line: toks.line,
                msg: "unexpected empty line".to_string(),
            }),
        }
    }
}

/// Iterates over the tokens in a line.
pub struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    pub line: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.it.next()
    }
}

impl<'a> Tokens<'a> {
    /// Return an error if the next token is not the given token.
    pub fn expect(&mut self, tok: &str) -> Result<()> {
        let nxt = self.str()?;
        if nxt == tok {
            Ok(())
        } else {
            Err(Error::Format {
                line: self.line,
                msg: format!("expected '{}', got '{}'", tok, nxt),
            })
        }
    }

    /// Returns the next token as `&str`.
    pub fn str(&mut self) -> Result<&'a str> {
        let line = self.line;
        self.it.next().ok_or_else(|| Error::Format {
            line,
            msg: "expected token".to_string(),
        })
    }

    /// Returns the next token converted to a number.
    pub fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let line = self.line;
        let tok = self.it.next().ok_or_else(|| Error::Format {
            line,
            msg: "expected number".to_string(),
        })?;
        tok.parse().map_err(|e| Error::Format {
            line,
            msg: format!("invalid number '{}': {}", tok, e),
        })
    }

    /// Ensures that there is no next token.
    pub fn end(&mut self) -> Result<()> {
        match self.it.next() {
            Some(s) => Err(Error::Format {
                line: self.line,
                msg: format!("unexpected token at end of line: {}", s),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DimacsReader, Error};
    use std::io::Cursor;

    #[test]
    fn skip_comments() {
        let mut reader = DimacsReader::new(Cursor::new("c comment\n\n   \n  p max 3 2\nc\n"));
        let mut toks = reader.expect_line("p").unwrap();
        assert_eq!(toks.line, 4);
        toks.expect("max").unwrap();
        assert_eq!(toks.number::<usize>().unwrap(), 3);
        assert_eq!(toks.number::<usize>().unwrap(), 2);
        toks.end().unwrap();
        assert!(reader.read_line().unwrap().is_none());
    }

    #[test]
    fn unexpected_line() {
        let mut reader = DimacsReader::new(Cursor::new("n 1 s\n"));
        match reader.expect_line("p") {
            Err(Error::Format { line, .. }) => assert_eq!(line, 1),
            _ => panic!("expected format error"),
        }
    }

    #[test]
    fn invalid_number() {
        let mut reader = DimacsReader::new(Cursor::new("a 1 x\n"));
        let mut toks = reader.expect_line("a").unwrap();
        assert_eq!(toks.number::<usize>().unwrap(), 1);
        let err = toks.number::<usize>().unwrap_err();
        assert!(err.to_string().starts_with("Format error on line 1: invalid number 'x'"));
    }
}
