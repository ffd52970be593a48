//! Demonstration CLI: reads a JSON-encoded `Program` (spec.md §3, §6) and
//! prints the resulting Layout IR tree. This is not a parser or printer —
//! both remain out of this crate's scope — it exists only so the crate has
//! a runnable entry point, the way the teacher's CLI gives `rjs-compiler`
//! one.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use layout_gen::ast::Comment;
use layout_gen::{program, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "layout-dump", version, about = "Dump the Layout IR for a JSON-encoded AST")]
struct Cli {
    /// Path to a JSON file containing a serialized `Program`. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Preserve a leading docblock comment ahead of the directive prologue.
    #[arg(long)]
    preserve_docblock: bool,

    /// Append a `/* checksum */` footer comment with the given text.
    #[arg(long)]
    checksum: Option<String>,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("layout-dump: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).map_err(|e| format!("reading stdin: {e}"))?,
    };

    let document: Document = serde_json::from_str(&raw).map_err(|e| format!("parsing AST JSON: {e}"))?;

    let config = GeneratorConfig { preserve_docblock: cli.preserve_docblock, checksum: cli.checksum };

    let layout = program(&document.program, &config, &document.leading_comments)
        .map_err(|e| format!("generating layout: {e}"))?;

    println!("{layout:#?}");
    Ok(())
}

/// The on-disk JSON shape `layout-dump` expects: a `Program` plus whatever
/// comments preceded its first token, matching `program()`'s two logical
/// inputs (spec.md §6).
#[derive(serde::Deserialize)]
struct Document {
    program: layout_gen::ast::Program,
    #[serde(default)]
    leading_comments: Vec<Comment>,
}
