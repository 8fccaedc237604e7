#[cfg(test)]
#[path = "../../tests/unit/format/tokens_test.rs"]
mod tokens_test;

use crate::utils::{InstanceError, InstanceResult};
use std::collections::VecDeque;
use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Reads whitespace delimited tokens line by line.
pub(crate) struct TokenReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    tokens: VecDeque<String>,
}

impl<R: Read> TokenReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self { reader, buffer: String::new(), tokens: VecDeque::new() }
    }

    /// Discards given amount of lines. Tokens which are already buffered are discarded too.
    pub fn skip_lines(&mut self, count: usize) -> InstanceResult<()> {
        self.tokens.clear();
        for _ in 0..count {
            if self.read_line()? == 0 {
                return Err(InstanceError::unexpected_eof("header line"));
            }
        }

        Ok(())
    }

    /// Returns next token or `None` when input is exhausted.
    pub fn next_token(&mut self) -> InstanceResult<Option<String>> {
        while self.tokens.is_empty() {
            if self.read_line()? == 0 {
                return Ok(None);
            }

            self.tokens.extend(self.buffer.split_whitespace().map(|token| token.to_string()));
        }

        Ok(self.tokens.pop_front())
    }

    /// Returns next token, fails if input is exhausted.
    pub fn read_token(&mut self, expected: &str) -> InstanceResult<String> {
        self.next_token()?.ok_or_else(|| InstanceError::unexpected_eof(expected))
    }

    /// Reads next token and checks that it is equal to the expected one.
    pub fn expect_token(&mut self, expected: &str) -> InstanceResult<()> {
        let token = self.read_token(expected)?;
        if token != expected { Err(InstanceError::unexpected_token(&token, Some(expected))) } else { Ok(()) }
    }

    /// Reads next token and parses it as a value of the field.
    pub fn read_value<T: FromStr>(&mut self, field: &str) -> InstanceResult<T> {
        let token = self.read_token(field)?;
        token.parse::<T>().map_err(|_| InstanceError::invalid_value(field, &token))
    }

    fn read_line(&mut self) -> InstanceResult<usize> {
        self.buffer.clear();
        Ok(self.reader.read_line(&mut self.buffer)?)
    }
}
