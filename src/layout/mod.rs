//! # Layout IR
//!
//! The algebra of nodes the generator emits (spec.md §3, §4.1). The IR never
//! decides physical line width — it decides only what is fusible, what may
//! break, what is conditional on break-or-pretty-mode, and where indentation
//! units apply. A downstream printer (out of this crate's scope, spec.md
//! §1) interprets it to produce text.
//!
//! Kept as plain data with small constructor helpers, mirroring the teacher's
//! convention of `From`/constructor impls living next to the type they build
//! rather than a separate builder struct.

use crate::ast::Location;

/// How a `Sequence`'s children are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakMode {
    /// Always newline-separated, regardless of mode.
    Always,
    /// Newline-separated only in pretty mode.
    IfPretty,
    /// Newline-separated only if the renderer decides the line overflows.
    IfNeeded,
    /// Never broken; children run inline.
    Never,
}

/// Whether a `Sequence` emits a separator before its first child / after its
/// last child when it breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inline {
    pub leading: bool,
    pub trailing: bool,
}

impl Inline {
    pub const NONE: Inline = Inline { leading: false, trailing: false };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    pub break_mode: BreakMode,
    pub inline: Inline,
    pub indent: u32,
}

impl SequenceOptions {
    pub fn new(break_mode: BreakMode) -> Self {
        Self { break_mode, inline: Inline::NONE, indent: 0 }
    }

    pub fn indented(break_mode: BreakMode, indent: u32) -> Self {
        Self { break_mode, inline: Inline::NONE, indent }
    }
}

/// The Layout IR sum type (spec.md §3).
#[derive(Debug, Clone)]
pub enum Layout {
    /// A literal token.
    Atom(String),
    /// A literal token bearing a source location, for source maps.
    Identifier(Location, String),
    /// Attaches a location to an arbitrary subtree.
    SourceLocation(Location, Box<Layout>),
    /// No output.
    Empty,
    /// Children concatenated with no inter-child break.
    Fuse(Vec<Layout>),
    /// Children separated/broken per `SequenceOptions`.
    Sequence(SequenceOptions, Vec<Layout>),
    /// Selects between two subtrees based on the renderer's mode.
    IfPretty(Box<Layout>, Box<Layout>),
    /// Selects between two subtrees based on whether the nearest enclosing
    /// `Sequence` broke.
    IfBreak(Box<Layout>, Box<Layout>),
}

impl Layout {
    pub fn atom(s: impl Into<String>) -> Layout {
        Layout::Atom(s.into())
    }

    pub fn identifier(location: Location, name: impl Into<String>) -> Layout {
        Layout::Identifier(location, name.into())
    }

    pub fn with_location(location: Location, inner: Layout) -> Layout {
        Layout::SourceLocation(location, Box::new(inner))
    }

    pub fn fuse(children: impl IntoIterator<Item = Layout>) -> Layout {
        Layout::Fuse(children.into_iter().collect())
    }

    pub fn sequence(options: SequenceOptions, children: impl IntoIterator<Item = Layout>) -> Layout {
        Layout::Sequence(options, children.into_iter().collect())
    }

    pub fn if_pretty(pretty: Layout, ugly: Layout) -> Layout {
        Layout::IfPretty(Box::new(pretty), Box::new(ugly))
    }

    pub fn if_break(broken: Layout, not_broken: Layout) -> Layout {
        Layout::IfBreak(Box::new(broken), Box::new(not_broken))
    }

    /// `(inner)` — unconditional parenthesization.
    pub fn parens(inner: Layout) -> Layout {
        Layout::fuse([Layout::atom("("), inner, Layout::atom(")")])
    }

    /// A pretty-only semicolon: `;` in pretty mode, nothing in ugly mode.
    /// Used for the trailing statement of a block (spec.md §4.5).
    pub fn pretty_semicolon() -> Layout {
        Layout::if_pretty(Layout::atom(";"), Layout::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Layout::Empty)
    }
}
