//! Source location types shared by every AST and Layout IR node.
//!
//! `Position`/`Location` are plain data with no behavior beyond construction
//! helpers: the emitter never computes distances between locations beyond the
//! single-line-gap check used for inter-statement blank lines (see
//! `generator::stmt`), and that check uses ordinary integer comparison, never
//! subtraction, so it stays total over malformed input.

use serde::{Deserialize, Serialize};

/// A single point in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: u32) -> Self {
        Self { line, column, offset }
    }
}

/// A span of source text, optionally attributed to a named source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub source: Option<String>,
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { source: None, start, end }
    }

    /// A zero-width location at the start of the file, used for synthetic
    /// wrapper nodes the driver introduces (see `generator::program`).
    pub fn synthetic() -> Self {
        Self {
            source: None,
            start: Position::new(1, 0, 0),
            end: Position::new(1, 0, 0),
        }
    }
}
