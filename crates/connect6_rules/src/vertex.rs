//! Vertex notation: conversion between `D4`-style text and grid coordinates.
//!
//! Columns use the 19 letters `A`..`T` without `I`. Boards wider than 19
//! continue with two-letter labels in bijective base 19 (`T`, `AA`, `AB`, ...),
//! so every column of a board up to the maximum size has a label.
//!
//! Rows are numbered from the bottom: `1` names the last grid row and `size`
//! names grid row 0.

use crate::error::RulesError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Column alphabet, `I` omitted.
pub const COLUMN_LETTERS: &[u8; 19] = b"ABCDEFGHJKLMNOPQRST";

/// Wire token for a pass.
pub const PASS_TOKEN: &str = "PASS";

/// Zero-based grid coordinate, row 0 at the top.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Coord {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A parsed vertex: a board point or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    /// No stone placed.
    Pass,
    /// Intersection on the board.
    Point(Coord),
}

impl Vertex {
    /// Parses vertex text against a board of the given size.
    #[instrument]
    pub fn parse(text: &str, size: usize) -> Result<Self, RulesError> {
        if text.eq_ignore_ascii_case(PASS_TOKEN) {
            Ok(Vertex::Pass)
        } else {
            vertex_to_coord(text, size).map(Vertex::Point)
        }
    }

    /// Formats the vertex for a board of the given size.
    pub fn to_text(self, size: usize) -> String {
        match self {
            Vertex::Pass => PASS_TOKEN.to_string(),
            Vertex::Point(coord) => coord_to_vertex(coord, size),
        }
    }

    /// Returns true for a pass.
    pub fn is_pass(self) -> bool {
        matches!(self, Vertex::Pass)
    }
}

/// Label of a zero-based column.
pub fn column_label(col: usize) -> String {
    let base = COLUMN_LETTERS.len();
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        letters.push(COLUMN_LETTERS[n % base] as char);
        n /= base;
    }
    letters.iter().rev().collect()
}

/// Zero-based column named by `letters`, or `None` if any letter is not in
/// the alphabet.
pub fn parse_column(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let base = COLUMN_LETTERS.len();
    let mut value: usize = 0;
    for ch in letters.bytes() {
        let digit = COLUMN_LETTERS
            .iter()
            .position(|&l| l == ch.to_ascii_uppercase())?;
        value = value.checked_mul(base)?.checked_add(digit + 1)?;
    }
    Some(value - 1)
}

/// Converts vertex text such as `D4` into a grid coordinate.
#[instrument]
pub fn vertex_to_coord(text: &str, size: usize) -> Result<Coord, RulesError> {
    let split = text
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let (letters, digits) = text.split_at(split);

    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RulesError::invalid_argument(format!("invalid vertex: {}", text)));
    }

    let col = parse_column(letters)
        .ok_or_else(|| RulesError::invalid_argument(format!("invalid column: {}", letters)))?;
    if col >= size {
        return Err(RulesError::invalid_argument(format!(
            "column out of range: {}",
            letters
        )));
    }

    let number: usize = digits
        .parse()
        .map_err(|_| RulesError::invalid_argument(format!("invalid row: {}", digits)))?;
    if number == 0 || number > size {
        return Err(RulesError::invalid_argument(format!("row out of range: {}", digits)));
    }

    Ok(Coord::new(size - number, col))
}

/// Converts a grid coordinate into vertex text. The coordinate must lie on a
/// board of the given size.
pub fn coord_to_vertex(coord: Coord, size: usize) -> String {
    debug_assert!(coord.row < size && coord.col < size);
    format!("{}{}", column_label(coord.col), size - coord.row)
}
