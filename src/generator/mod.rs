//! # Layout generator
//!
//! Converts an AST (`crate::ast`) into a Layout IR tree (`crate::layout`).
//! This is the core described by spec.md: a purely functional, single-pass
//! translation with no shared mutable state (spec.md §5) and no backing I/O.
//!
//! Submodules follow the component breakdown in spec.md §2/§4, one file per
//! syntactic category — mirroring how the teacher splits
//! `parser`/`analyzer`/`generator` into one `mod.rs` plus focused files per
//! concern rather than a single monolithic module.

mod expr;
mod jsx;
mod pattern;
mod program;
mod stmt;
mod types;

#[cfg(test)]
mod tests;

pub use program::program;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::Location;

/// Configuration for the public entry point (spec.md §6): whether to
/// preserve the leading docblock/directive prologue, and an optional
/// checksum footer. Formatting concerns (indentation width, tab vs. space,
/// line width) belong to the downstream printer and have no home here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub preserve_docblock: bool,
    pub checksum: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { preserve_docblock: false, checksum: None }
    }
}

/// Structured failures the generator can raise (spec.md §7). All are fatal:
/// there is no local recovery, only unwinding to the entry point.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum GeneratorError {
    #[error("{what} is not supported at {location:?}")]
    UnsupportedProduction { what: String, location: Location },

    #[error("invalid AST: {message} at {location:?}")]
    InvalidAst { message: String, location: Location },

    /// A genuinely unreachable state (e.g. a property/computed-flag
    /// mismatch a well-formed parser would never produce). Kept separate
    /// from `InvalidAst` so callers can tell "the input AST is malformed"
    /// apart from "this crate's own invariant broke".
    #[error("internal error: {0}")]
    Internal(String),
}

impl GeneratorError {
    pub fn unsupported(what: impl Into<String>, location: &Location) -> Self {
        Self::UnsupportedProduction { what: what.into(), location: location.clone() }
    }

    pub fn invalid(message: impl Into<String>, location: &Location) -> Self {
        Self::InvalidAst { message: message.into(), location: location.clone() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

use crate::layout::Layout;
use crate::precedence::{Context, GroupContext, LeftContext};

/// The (stateless, config-only) translator. Grounded in the teacher's
/// `Printer` struct shape, minus its mutable output buffer: spec.md §5
/// requires this translation to carry no state beyond the immutable
/// configuration, since it builds a tree rather than writing text.
pub(crate) struct Emitter<'a> {
    pub config: &'a GeneratorConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// The context seen by a non-leftmost child: `left` resets to `Normal`
    /// (it no longer sits at the leftmost token) but `group` persists until
    /// an actual bracket/paren/brace is emitted (spec.md §4.3).
    pub fn sibling_context(ctx: Context) -> Context {
        Context { left: LeftContext::Normal, group: ctx.group }
    }

    /// The context inside any bracket/paren/brace: both axes reset, per
    /// "Contexts propagate only until a bracket/paren/brace is emitted, at
    /// which point the child is emitted in Normal" (spec.md §4.3).
    pub fn bracketed_context() -> Context {
        Context::cleared()
    }

    /// Joins `items` with `,` and a break-conditional space: `", "` when
    /// the enclosing sequence stays on one line, just `,` (newline implied)
    /// when it breaks.
    pub fn comma_join(items: Vec<Layout>) -> Vec<Layout> {
        let mut out = Vec::with_capacity(items.len() * 2);
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                out.push(Layout::if_break(Layout::atom(","), Layout::fuse([Layout::atom(","), Layout::atom(" ")])));
            }
            out.push(item);
        }
        out
    }
}

/// `(inner)`, shorthand used across every emitter submodule.
pub(crate) fn paren(inner: Layout) -> Layout {
    Layout::parens(inner)
}
