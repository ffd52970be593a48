//! Converts a JavaScript/Flow AST into a formatter-independent Layout IR
//! tree (spec.md §1). Parsing the source into that AST and rendering the
//! resulting tree into bytes are both out of scope here — this crate is
//! the middle stage of that pipeline.
//!
//! Public surface: [`ast`] defines the input tree, [`layout`] defines the
//! output tree, and [`generator::program`] is the entry point that
//! converts one into the other. [`precedence`] and [`lexical`] are exposed
//! because a caller embedding this crate inside a larger printer may want
//! to reuse the same operator-precedence scale or string-escaping rules
//! rather than reimplementing them.

pub mod ast;
pub mod generator;
pub mod layout;
pub mod lexical;
pub mod precedence;

pub use generator::{program, GeneratorConfig, GeneratorError, GeneratorResult};
