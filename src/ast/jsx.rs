//! JSX AST (spec.md §4.8).

use serde::{Deserialize, Serialize};

use crate::ast::location::Location;
use crate::ast::Expression;

/// `<Foo>`, `<ns:Foo>`, or `<Foo.Bar>` — the three JSX tag-name shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXName {
    Identifier {
        location: Location,
        name: String,
    },
    Namespaced {
        location: Location,
        namespace: String,
        name: String,
    },
    Member {
        location: Location,
        /// Dot-separated segments, `["Foo", "Bar"]` for `Foo.Bar`.
        segments: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXAttributeValue {
    StringLiteral { location: Location, value: String, raw: String },
    ExpressionContainer { location: Location, expression: Box<Expression> },
    Element(Box<JSXElement>),
    Fragment(Box<JSXFragment>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXAttribute {
    Attribute {
        location: Location,
        name: JSXName,
        value: Option<JSXAttributeValue>,
    },
    Spread {
        location: Location,
        argument: Box<Expression>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JSXChild {
    Text { location: Location, value: String },
    ExpressionContainer { location: Location, expression: Box<Expression> },
    SpreadChild { location: Location, expression: Box<Expression> },
    Element(Box<JSXElement>),
    Fragment(Box<JSXFragment>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JSXElement {
    pub location: Location,
    pub name: JSXName,
    pub attributes: Vec<JSXAttribute>,
    pub self_closing: bool,
    pub children: Vec<JSXChild>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JSXFragment {
    pub location: Location,
    pub children: Vec<JSXChild>,
}

/// Trims a JSX text child per the whitespace rules in spec.md §4.8: leading
/// and trailing runs of whitespace-plus-newline are collapsed; a child that
/// is entirely whitespace with at least one newline contributes nothing.
///
/// Returns `None` when the trimmed text is empty, signaling the caller to
/// drop the child.
pub fn trim_jsx_text(location: &Location, text: &str) -> Option<(Location, String)> {
    let has_newline = text.contains('\n');
    let trimmed = if has_newline {
        text.lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        text.to_string()
    };

    if trimmed.is_empty() {
        None
    } else {
        Some((location.clone(), trimmed))
    }
}
