//! Flow type annotation emitter (spec.md §4.7).

use crate::ast::types::{
    FunctionType, FunctionTypeParam, ObjectType, ObjectTypeProperty, QualifiedTypeIdentifier, Type,
    TypeParameterDeclaration, TypeParameterInstantiation, Variance,
};
use crate::generator::{Emitter, GeneratorResult};
use crate::layout::{BreakMode, Layout, SequenceOptions};

pub(crate) fn type_layout(emitter: &Emitter, t: &Type) -> GeneratorResult<Layout> {
    let body = type_body(emitter, t)?;
    Ok(Layout::with_location(t.location().clone(), body))
}

fn type_body(emitter: &Emitter, t: &Type) -> GeneratorResult<Layout> {
    match t {
        Type::Any(_) => Ok(Layout::atom("any")),
        Type::Mixed(_) => Ok(Layout::atom("mixed")),
        Type::Empty(_) => Ok(Layout::atom("empty")),
        Type::Void(_) => Ok(Layout::atom("void")),
        Type::Null(_) => Ok(Layout::atom("null")),
        Type::Boolean(_) => Ok(Layout::atom("boolean")),
        Type::Number(_) => Ok(Layout::atom("number")),
        Type::String(_) => Ok(Layout::atom("string")),
        Type::Symbol(_) => Ok(Layout::atom("symbol")),
        Type::BigInt(_) => Ok(Layout::atom("bigint")),
        Type::Existential(_) => Ok(Layout::atom("*")),
        Type::Nullable { type_annotation, .. } => {
            Ok(Layout::fuse([Layout::atom("?"), type_layout(emitter, type_annotation)?]))
        }
        Type::Function(ft) => function_type(emitter, ft),
        Type::Object(ot) => object_type(emitter, ot),
        Type::Array { element_type, .. } => Ok(Layout::fuse([type_layout(emitter, element_type)?, Layout::atom("[]")])),
        Type::Generic { id, type_parameters, .. } => {
            let mut parts = vec![qualified_type_identifier(id)];
            if let Some(tp) = type_parameters {
                parts.push(type_instantiation(emitter, tp)?);
            }
            Ok(Layout::fuse(parts))
        }
        Type::Union { types, .. } => separated_types(emitter, types, "|"),
        Type::Intersection { types, .. } => separated_types(emitter, types, "&"),
        Type::Tuple { types, .. } => {
            let mut items = Vec::with_capacity(types.len());
            for ty in types {
                items.push(type_layout(emitter, ty)?);
            }
            Ok(Layout::fuse([
                Layout::atom("["),
                Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)),
                Layout::atom("]"),
            ]))
        }
        Type::Typeof { argument, .. } => Ok(Layout::fuse([Layout::atom("typeof "), type_layout(emitter, argument)?])),
        Type::StringLiteral { raw, .. } => Ok(Layout::atom(raw.clone())),
        Type::NumberLiteral { raw, .. } => Ok(Layout::atom(raw.clone())),
        Type::BooleanLiteral { value, .. } => Ok(Layout::atom(if *value { "true" } else { "false" })),
    }
}

/// Union/intersection members: the separator leads every member but the
/// first, which instead gets it only when the renderer decides to break
/// (so `A | B | C` stays flat but a broken form reads `  | A\n  | B\n  | C`).
fn separated_types(emitter: &Emitter, types: &[Type], sep: &str) -> GeneratorResult<Layout> {
    let mut items = Vec::with_capacity(types.len());
    for (i, t) in types.iter().enumerate() {
        let layout = type_layout(emitter, t)?;
        let item = if i == 0 {
            Layout::if_break(Layout::fuse([Layout::atom(sep), Layout::atom(" "), layout.clone()]), layout)
        } else {
            Layout::fuse([Layout::atom(sep), Layout::atom(" "), layout])
        };
        items.push(item);
    }
    Ok(Layout::sequence(SequenceOptions::indented(BreakMode::IfNeeded, 1), items))
}

fn function_type(emitter: &Emitter, ft: &FunctionType) -> GeneratorResult<Layout> {
    let mut parts = Vec::new();
    if let Some(tp) = &ft.type_parameters {
        parts.push(type_parameter_declaration(emitter, tp)?);
    }
    let mut items = Vec::with_capacity(ft.params.len() + 1);
    for p in &ft.params {
        items.push(function_type_param(emitter, p)?);
    }
    if let Some(rest) = &ft.rest {
        let inner = function_type_param(emitter, rest)?;
        items.push(Layout::fuse([Layout::atom("..."), inner]));
    }
    parts.push(Layout::atom("("));
    parts.push(Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)));
    parts.push(Layout::atom(") => "));
    parts.push(type_layout(emitter, &ft.return_type)?);
    Ok(Layout::fuse(parts))
}

fn function_type_param(emitter: &Emitter, p: &FunctionTypeParam) -> GeneratorResult<Layout> {
    let t = type_layout(emitter, &p.type_annotation)?;
    match &p.name {
        Some(name) => {
            let opt = if p.optional { "?" } else { "" };
            Ok(Layout::fuse([Layout::atom(format!("{name}{opt}: ")), t]))
        }
        None => Ok(t),
    }
}

/// `{ ... }` / exact `{| ... |}`, with an inexact `...` sentinel last.
pub(crate) fn object_type(emitter: &Emitter, ot: &ObjectType) -> GeneratorResult<Layout> {
    let (open, close) = if ot.exact { ("{|", "|}") } else { ("{", "}") };
    let mut items = Vec::with_capacity(ot.properties.len() + 1);
    for p in &ot.properties {
        items.push(object_type_property(emitter, p)?);
    }
    if ot.inexact {
        items.push(Layout::atom("..."));
    }
    Ok(Layout::fuse([
        Layout::atom(open),
        Layout::sequence(SequenceOptions::indented(BreakMode::IfNeeded, 1), Emitter::comma_join(items)),
        Layout::atom(close),
    ]))
}

fn object_type_property(emitter: &Emitter, prop: &ObjectTypeProperty) -> GeneratorResult<Layout> {
    match prop {
        ObjectTypeProperty::Property { location, key, value, optional, variance, is_method, computed } => {
            let mut parts = vec![variance_layout(*variance)];
            parts.push(if *computed {
                Layout::fuse([Layout::atom("["), Layout::atom(key.clone()), Layout::atom("]")])
            } else {
                Layout::atom(key.clone())
            });
            if *optional {
                parts.push(Layout::atom("?"));
            }
            match (*is_method, value.as_ref()) {
                (true, Type::Function(ft)) => parts.push(function_type(emitter, ft)?),
                _ => {
                    parts.push(Layout::atom(": "));
                    parts.push(type_layout(emitter, value)?);
                }
            }
            Ok(Layout::with_location(location.clone(), Layout::fuse(parts)))
        }
        ObjectTypeProperty::Indexer { location, id, key, value, variance } => {
            let mut parts = vec![Layout::atom("["), variance_layout(*variance)];
            if let Some(name) = id {
                parts.push(Layout::atom(format!("{name}: ")));
            }
            parts.push(type_layout(emitter, key)?);
            parts.push(Layout::atom("]: "));
            parts.push(type_layout(emitter, value)?);
            Ok(Layout::with_location(location.clone(), Layout::fuse(parts)))
        }
        ObjectTypeProperty::CallProperty { location, value } => {
            Ok(Layout::with_location(location.clone(), function_type(emitter, value)?))
        }
        ObjectTypeProperty::SpreadProperty { location, argument } => Ok(Layout::with_location(
            location.clone(),
            Layout::fuse([Layout::atom("..."), type_layout(emitter, argument)?]),
        )),
    }
}

fn variance_layout(v: Option<Variance>) -> Layout {
    match v {
        Some(Variance::Plus) => Layout::atom("+"),
        Some(Variance::Minus) => Layout::atom("-"),
        None => Layout::Empty,
    }
}

fn qualified_type_identifier(id: &QualifiedTypeIdentifier) -> Layout {
    Layout::with_location(id.location.clone(), Layout::atom(id.segments.join(".")))
}

pub(crate) fn type_instantiation(emitter: &Emitter, ti: &TypeParameterInstantiation) -> GeneratorResult<Layout> {
    let mut items = Vec::with_capacity(ti.params.len());
    for t in &ti.params {
        items.push(type_layout(emitter, t)?);
    }
    Ok(Layout::fuse([
        Layout::atom("<"),
        Layout::sequence(SequenceOptions::new(BreakMode::Never), Emitter::comma_join(items)),
        Layout::atom(">"),
    ]))
}

pub(crate) fn type_parameter_declaration(emitter: &Emitter, tpd: &TypeParameterDeclaration) -> GeneratorResult<Layout> {
    let mut items = Vec::with_capacity(tpd.params.len());
    for p in &tpd.params {
        let mut parts = vec![variance_layout(p.variance), Layout::atom(p.name.clone())];
        if let Some(b) = &p.bound {
            parts.push(Layout::atom(": "));
            parts.push(type_layout(emitter, b)?);
        }
        if let Some(d) = &p.default {
            parts.push(Layout::atom(" = "));
            parts.push(type_layout(emitter, d)?);
        }
        items.push(Layout::fuse(parts));
    }
    Ok(Layout::fuse([
        Layout::atom("<"),
        Layout::sequence(SequenceOptions::new(BreakMode::Never), Emitter::comma_join(items)),
        Layout::atom(">"),
    ]))
}
