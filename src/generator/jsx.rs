//! JSX emitter (spec.md §4.8).

use crate::ast::jsx::{trim_jsx_text, JSXAttribute, JSXAttributeValue, JSXChild, JSXElement, JSXFragment, JSXName};
use crate::generator::{Emitter, GeneratorResult};
use crate::layout::{BreakMode, Layout, SequenceOptions};
use crate::precedence;

pub(crate) fn element(emitter: &Emitter, el: &JSXElement) -> GeneratorResult<Layout> {
    let name_layout = jsx_name(&el.name);
    let mut attrs = Vec::with_capacity(el.attributes.len());
    for a in &el.attributes {
        attrs.push(jsx_attribute(emitter, a)?);
    }
    let attrs_layout = if attrs.is_empty() {
        Layout::Empty
    } else {
        Layout::fuse([
            Layout::atom(" "),
            Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), interleave_space(attrs)),
        ])
    };
    if el.self_closing {
        return Ok(Layout::with_location(
            el.location.clone(),
            Layout::fuse([Layout::atom("<"), name_layout, attrs_layout, Layout::atom(" />")]),
        ));
    }
    let children = jsx_children(emitter, &el.children)?;
    Ok(Layout::with_location(
        el.location.clone(),
        Layout::fuse([
            Layout::atom("<"),
            name_layout.clone(),
            attrs_layout,
            Layout::atom(">"),
            Layout::sequence(SequenceOptions::indented(BreakMode::IfNeeded, 1), children),
            Layout::atom("</"),
            name_layout,
            Layout::atom(">"),
        ]),
    ))
}

pub(crate) fn fragment(emitter: &Emitter, frag: &JSXFragment) -> GeneratorResult<Layout> {
    let children = jsx_children(emitter, &frag.children)?;
    Ok(Layout::with_location(
        frag.location.clone(),
        Layout::fuse([
            Layout::atom("<>"),
            Layout::sequence(SequenceOptions::indented(BreakMode::IfNeeded, 1), children),
            Layout::atom("</>"),
        ]),
    ))
}

fn jsx_name(name: &JSXName) -> Layout {
    match name {
        JSXName::Identifier { location, name } => Layout::with_location(location.clone(), Layout::atom(name.clone())),
        JSXName::Namespaced { location, namespace, name } => {
            Layout::with_location(location.clone(), Layout::atom(format!("{namespace}:{name}")))
        }
        JSXName::Member { location, segments } => Layout::with_location(location.clone(), Layout::atom(segments.join("."))),
    }
}

fn jsx_attribute(emitter: &Emitter, attr: &JSXAttribute) -> GeneratorResult<Layout> {
    match attr {
        JSXAttribute::Attribute { location, name, value } => {
            let name_layout = jsx_name(name);
            let body = match value {
                Some(v) => Layout::fuse([name_layout, Layout::atom("="), jsx_attribute_value(emitter, v)?]),
                None => name_layout,
            };
            Ok(Layout::with_location(location.clone(), body))
        }
        JSXAttribute::Spread { location, argument } => {
            let inner = emitter.expression(argument, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
            Ok(Layout::with_location(location.clone(), Layout::fuse([Layout::atom("{..."), inner, Layout::atom("}")])))
        }
    }
}

fn jsx_attribute_value(emitter: &Emitter, value: &JSXAttributeValue) -> GeneratorResult<Layout> {
    match value {
        JSXAttributeValue::StringLiteral { location, raw, .. } => {
            Ok(Layout::with_location(location.clone(), Layout::atom(raw.clone())))
        }
        JSXAttributeValue::ExpressionContainer { location, expression } => {
            let inner = emitter.expression(expression, Emitter::bracketed_context(), precedence::SEQUENCE)?;
            Ok(Layout::with_location(location.clone(), Layout::fuse([Layout::atom("{"), inner, Layout::atom("}")])))
        }
        JSXAttributeValue::Element(e) => element(emitter, e),
        JSXAttributeValue::Fragment(f) => fragment(emitter, f),
    }
}

fn jsx_child(emitter: &Emitter, child: &JSXChild) -> GeneratorResult<Option<Layout>> {
    match child {
        JSXChild::Text { location, value } => {
            Ok(trim_jsx_text(location, value).map(|(loc, text)| Layout::with_location(loc, Layout::atom(text))))
        }
        JSXChild::ExpressionContainer { location, expression } => {
            let inner = emitter.expression(expression, Emitter::bracketed_context(), precedence::SEQUENCE)?;
            Ok(Some(Layout::with_location(location.clone(), Layout::fuse([Layout::atom("{"), inner, Layout::atom("}")]))))
        }
        JSXChild::SpreadChild { location, expression } => {
            let inner = emitter.expression(expression, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
            Ok(Some(Layout::with_location(
                location.clone(),
                Layout::fuse([Layout::atom("{..."), inner, Layout::atom("}")]),
            )))
        }
        JSXChild::Element(e) => Ok(Some(element(emitter, e)?)),
        JSXChild::Fragment(f) => Ok(Some(fragment(emitter, f)?)),
    }
}

fn jsx_children(emitter: &Emitter, children: &[JSXChild]) -> GeneratorResult<Vec<Layout>> {
    let mut items = Vec::new();
    for c in children {
        if let Some(layout) = jsx_child(emitter, c)? {
            items.push(layout);
        }
    }
    Ok(items)
}

/// Attributes are space-joined, not comma-joined; the space is only needed
/// when the sequence stays flat (a break already separates them).
fn interleave_space(items: Vec<Layout>) -> Vec<Layout> {
    let mut out = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(Layout::if_break(Layout::Empty, Layout::atom(" ")));
        }
        out.push(item);
    }
    out
}
