// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dash patterns and small collection helpers.

extern crate alloc;

use alloc::string::{String, ToString};

use smallvec::SmallVec;

/// A dash pattern: alternating on/off lengths in pixels.
pub type DashArray = SmallVec<[f64; 4]>;

/// Errors returned by [`parse_border_dash_array`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DashArrayError {
    /// A token could not be parsed as a number.
    #[error("dash token {index} ({token:?}) is not a number")]
    InvalidToken {
        /// Zero-based position of the token in the pattern.
        index: usize,
        /// The offending token.
        token: String,
    },
    /// A token parsed, but is not a finite non-negative length.
    #[error("dash token {index} ({token:?}) is not a non-negative finite length")]
    InvalidLength {
        /// Zero-based position of the token in the pattern.
        index: usize,
        /// The offending token.
        token: String,
    },
}

/// Parses a dash pattern such as `"4, 2"`, `"4;2"` or `"0.1f .2"`.
///
/// Commas and semicolons act as whitespace and repeated separators collapse.
/// Each token may carry a trailing `f`/`F` float suffix. `None` or a blank
/// string yields an empty pattern; anything unparsable is an error.
pub fn parse_border_dash_array(pattern: Option<&str>) -> Result<DashArray, DashArrayError> {
    let mut out = DashArray::new();
    let Some(pattern) = pattern else {
        return Ok(out);
    };
    let tokens = pattern
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    for (index, token) in tokens.enumerate() {
        let number = token.strip_suffix(['f', 'F']).unwrap_or(token);
        let value: f64 = number
            .parse()
            .map_err(|_| DashArrayError::InvalidToken {
                index,
                token: token.to_string(),
            })?;
        if !value.is_finite() || value < 0.0 {
            return Err(DashArrayError::InvalidLength {
                index,
                token: token.to_string(),
            });
        }
        out.push(value);
    }
    Ok(out)
}

/// Returns `items[index mod len]`, or `None` for a missing or empty slice.
///
/// Negative indices wrap from the end (Euclidean modulo), so `-1` is the last element.
pub fn get_element_circular<T>(items: Option<&[T]>, index: isize) -> Option<&T> {
    let items = items?;
    let len = isize::try_from(items.len()).ok()?;
    if len == 0 {
        return None;
    }
    let i = usize::try_from(index.rem_euclid(len)).ok()?;
    items.get(i)
}
