//! Program driver (spec.md §4.9, §6): the public entry point tying the
//! statement emitter together with the synthetic top-level location,
//! directive-prologue/docblock merging, and an optional checksum footer.

use crate::ast::{partition_directives, Comment, Program, Statement};
use crate::generator::{Emitter, GeneratorConfig, GeneratorResult};
use crate::layout::Layout;

/// Converts a whole program into a Layout IR tree.
///
/// `leading_comments` are whatever comments preceded the first token in the
/// original source. When `config.preserve_docblock` is set and any such
/// comments exist, every comment that precedes the first non-directive
/// statement is merged with the directive prologue, sorted by source
/// location (spec.md §4.9), rather than only hoisting a single docblock
/// ahead of it. Comments elsewhere are not modeled (spec.md §1 Non-goals).
pub fn program(prog: &Program, config: &GeneratorConfig, leading_comments: &[Comment]) -> GeneratorResult<Layout> {
    let emitter = Emitter::new(config);
    let (directives, rest) = partition_directives(&prog.body);

    let parts = body_items(&emitter, directives, rest, leading_comments, config.preserve_docblock)?;

    let mut body_layout = Layout::fuse(parts);
    if let Some(checksum) = &config.checksum {
        body_layout = Layout::fuse([body_layout, gap(), checksum_layout(checksum)]);
    }

    Ok(Layout::with_location(prog.location.clone(), body_layout))
}

/// One piece of the directive prologue: either a directive statement or a
/// leading comment merged alongside it, ordered by source location.
enum ProloguePiece<'a> {
    Comment(&'a Comment),
    Directive(&'a Statement),
}

impl<'a> ProloguePiece<'a> {
    fn start_offset(&self) -> u32 {
        match self {
            ProloguePiece::Comment(c) => c.location.start.offset,
            ProloguePiece::Directive(s) => s.location().start.offset,
        }
    }

    fn start_line(&self) -> u32 {
        match self {
            ProloguePiece::Comment(c) => c.location.start.line,
            ProloguePiece::Directive(s) => s.location().start.line,
        }
    }

    fn end_line(&self) -> u32 {
        match self {
            ProloguePiece::Comment(c) => c.location.end.line,
            ProloguePiece::Directive(s) => s.location().end.line,
        }
    }
}

/// Renders the directive prologue (merged with leading comments when
/// `preserve_docblock` requests it) and the remaining body as one combined
/// sequence, so semicolon-omission on the final statement only ever applies
/// to the program's true last statement, not the last directive. Forces a
/// blank-line separator between the prologue and the rest of the body
/// regardless of the source.
fn body_items(
    emitter: &Emitter,
    directives: &[Statement],
    rest: &[Statement],
    leading_comments: &[Comment],
    preserve_docblock: bool,
) -> GeneratorResult<Vec<Layout>> {
    let total = directives.len() + rest.len();
    let mut items = Vec::with_capacity(total + leading_comments.len());
    let mut index = 0;

    let prologue_comments: Vec<&Comment> = if preserve_docblock {
        let cutoff = rest.first().map(|s| s.location().start.offset);
        leading_comments.iter().filter(|c| cutoff.map(|off| c.location.start.offset < off).unwrap_or(true)).collect()
    } else {
        Vec::new()
    };

    let mut pieces: Vec<ProloguePiece> = directives.iter().map(ProloguePiece::Directive).collect();
    pieces.extend(prologue_comments.into_iter().map(ProloguePiece::Comment));
    pieces.sort_by_key(ProloguePiece::start_offset);

    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            maybe_gap_between(&mut items, pieces[i - 1].end_line(), piece.start_line());
        }
        match piece {
            ProloguePiece::Comment(c) => items.push(comment_layout(c)),
            ProloguePiece::Directive(stmt) => {
                items.push(emitter.statement(stmt, index == total.saturating_sub(1))?);
                index += 1;
            }
        }
    }

    if !pieces.is_empty() && !rest.is_empty() {
        items.push(gap());
    }

    for (i, stmt) in rest.iter().enumerate() {
        if i > 0 {
            maybe_gap(&mut items, &rest[i - 1], stmt);
        }
        items.push(emitter.statement(stmt, index == total.saturating_sub(1))?);
        index += 1;
    }

    Ok(items)
}

fn maybe_gap(items: &mut Vec<Layout>, prev: &Statement, next: &Statement) {
    maybe_gap_between(items, prev.location().end.line, next.location().start.line);
}

fn maybe_gap_between(items: &mut Vec<Layout>, prev_end_line: u32, next_start_line: u32) {
    if prev_end_line + 1 < next_start_line {
        items.push(gap());
    }
}

fn gap() -> Layout {
    Layout::if_pretty(Layout::atom("\n"), Layout::Empty)
}

fn comment_layout(comment: &Comment) -> Layout {
    let text = if comment.block { format!("/*{}*/", comment.text) } else { format!("//{}", comment.text) };
    Layout::with_location(comment.location.clone(), Layout::atom(text))
}

fn checksum_layout(checksum: &str) -> Layout {
    Layout::atom(format!("/* {checksum} */"))
}
