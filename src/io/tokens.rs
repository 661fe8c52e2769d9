//! # Tokens
//!
//! Graph files in the classic teaching format are plain streams of unsigned integers
//! separated by arbitrary whitespace (spaces, tabs and line breaks are interchangeable).
//! [`TokenReader`] pulls one token at a time from a [`BufRead`] without reading ahead,
//! so that the remainder of the stream stays available for whoever parses next.

use std::{fmt::Display, io::BufRead, str::FromStr};

use crate::error::*;

/// Reads whitespace-delimited tokens from an underlying reader
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    /// Reused buffer for the current token
    token: Vec<u8>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::new(),
        }
    }

    /// Returns the underlying reader, positioned directly after the last consumed token
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Returns the next token or `None` if the stream is exhausted.
    /// `what` names the token in error messages.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if the token is not valid UTF-8 and
    /// [`GraphError::Io`] if reading fails.
    pub fn next_token(&mut self, what: &str) -> Result<Option<&str>> {
        if !self.fill_token()? {
            return Ok(None);
        }

        std::str::from_utf8(&self.token)
            .map(Some)
            .map_err(|err| GraphError::malformed(what, err))
    }

    /// Moves the next token into `self.token`; returns *false* if there is none
    fn fill_token(&mut self) -> Result<bool> {
        self.token.clear();

        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }

            let len = buf.len();
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            self.reader.consume(skip);

            if skip < len {
                break;
            }
        }

        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let len = buf.len();
            let take = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
            self.token.extend_from_slice(&buf[..take]);
            self.reader.consume(take);

            if take < len {
                break;
            }
        }

        Ok(true)
    }

    /// Reads the next token and parses it as an unsigned integer type `T`.
    /// `what` names the value in error messages.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if the stream is exhausted or the token is
    /// not a number representable by `T`, and [`GraphError::Io`] if reading fails.
    pub fn read_unsigned<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self
            .next_token(what)?
            .ok_or_else(|| GraphError::malformed(what, "unexpected end of input"))?;

        token
            .parse()
            .map_err(|err| GraphError::malformed(what, format!("{token:?}: {err}")))
    }

    /// Shorthand for `read_unsigned::<u64>`
    pub fn read_u64(&mut self, what: &str) -> Result<u64> {
        self.read_unsigned(what)
    }
}
