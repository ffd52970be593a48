//! Pattern, function-header, and class emitter (spec.md §4.6).

use crate::ast::{Class, ClassBody, ClassElement, Function, Identifier, MethodKind, ObjectPatternProperty, Pattern, PropertyKey};
use crate::generator::{Emitter, GeneratorResult};
use crate::layout::{BreakMode, Layout, SequenceOptions};
use crate::precedence::{self, Context};

impl<'a> Emitter<'a> {
    /// Destructuring / binding pattern emission, shared by declarators,
    /// function parameters, and assignment left-hand sides.
    pub(crate) fn pattern(&self, pat: &Pattern, ctx: Context) -> GeneratorResult<Layout> {
        let body = match pat {
            Pattern::Identifier(id) => self.typed_identifier(id)?,
            Pattern::ArrayPattern { elements, type_annotation, .. } => {
                let mut items = Vec::with_capacity(elements.len());
                for el in elements {
                    items.push(match el {
                        Some(p) => self.pattern(p, Emitter::bracketed_context())?,
                        None => Layout::Empty,
                    });
                }
                let mut body = Layout::fuse([
                    Layout::atom("["),
                    Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)),
                    Layout::atom("]"),
                ]);
                if let Some(t) = type_annotation {
                    body = Layout::fuse([body, Layout::atom(": "), crate::generator::types::type_layout(self, t)?]);
                }
                body
            }
            Pattern::ObjectPattern { properties, type_annotation, .. } => {
                let mut items = Vec::with_capacity(properties.len());
                for prop in properties {
                    items.push(self.object_pattern_property(prop)?);
                }
                let mut body = Layout::fuse([
                    Layout::atom("{"),
                    Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)),
                    Layout::atom("}"),
                ]);
                if let Some(t) = type_annotation {
                    body = Layout::fuse([body, Layout::atom(": "), crate::generator::types::type_layout(self, t)?]);
                }
                body
            }
            Pattern::AssignmentPattern { left, right, .. } => {
                let left_layout = self.pattern(left, Emitter::bracketed_context())?;
                let right_layout = self.expression(right, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
                Layout::fuse([left_layout, Layout::atom(" = "), right_layout])
            }
            Pattern::RestElement { argument, .. } => {
                Layout::fuse([Layout::atom("..."), self.pattern(argument, Emitter::bracketed_context())?])
            }
            Pattern::Expression(e) => return self.expression(e, ctx, precedence::MEMBER),
        };
        Ok(Layout::with_location(pat.location().clone(), body))
    }

    fn typed_identifier(&self, id: &Identifier) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::identifier(id.location.clone(), id.name.clone())];
        if id.optional {
            parts.push(Layout::atom("?"));
        }
        if let Some(t) = &id.type_annotation {
            parts.push(Layout::atom(": "));
            parts.push(crate::generator::types::type_layout(self, t)?);
        }
        Ok(Layout::fuse(parts))
    }

    fn object_pattern_property(&self, prop: &ObjectPatternProperty) -> GeneratorResult<Layout> {
        match prop {
            ObjectPatternProperty::RestElement { argument, location } => Ok(Layout::with_location(
                location.clone(),
                Layout::fuse([Layout::atom("..."), self.pattern(argument, Emitter::bracketed_context())?]),
            )),
            ObjectPatternProperty::Property { location, key, value, computed, shorthand } => {
                if *shorthand {
                    return Ok(Layout::with_location(location.clone(), self.property_key(key, *computed)?));
                }
                let key_layout = self.property_key(key, *computed)?;
                let value_layout = self.pattern(value, Emitter::bracketed_context())?;
                Ok(Layout::with_location(
                    location.clone(),
                    Layout::fuse([key_layout, Layout::atom(": "), value_layout]),
                ))
            }
        }
    }
}

/// A parenthesized, comma-joined parameter list — shared by function
/// declarations/expressions, methods, and (when not elided) arrows.
pub(crate) fn parameter_list(emitter: &Emitter, params: &[Pattern]) -> GeneratorResult<Layout> {
    let mut items = Vec::with_capacity(params.len());
    for p in params {
        items.push(emitter.pattern(p, Emitter::bracketed_context())?);
    }
    Ok(Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)))
}

/// The assignment-expression left-hand side is itself a `Pattern`
/// (identifier, destructuring target, or member expression).
pub(crate) fn assignment_target(emitter: &Emitter, pat: &Pattern, ctx: Context) -> GeneratorResult<Layout> {
    emitter.pattern(pat, ctx)
}

/// A standalone `function` declaration/expression: keyword, optional name,
/// generator star, header, body.
pub(crate) fn function_layout(emitter: &Emitter, func: &Function) -> GeneratorResult<Layout> {
    let mut parts = Vec::new();
    if func.is_async {
        parts.push(Layout::atom("async "));
    }
    parts.push(Layout::atom("function"));
    if func.is_generator {
        parts.push(Layout::atom("*"));
    }
    if let Some(id) = &func.id {
        parts.push(Layout::atom(" "));
        parts.push(Layout::identifier(id.location.clone(), id.name.clone()));
    } else {
        parts.push(Layout::atom(" "));
    }
    parts.push(function_tail(emitter, func)?);
    Ok(Layout::fuse(parts))
}

/// A method/getter/setter body: `key_layout` stands in for the name (an
/// object/class member key rather than `func.id`, which methods don't use).
pub(crate) fn method_layout(emitter: &Emitter, func: &Function, key_layout: Layout) -> GeneratorResult<Layout> {
    let mut parts = Vec::new();
    if func.is_async {
        parts.push(Layout::atom("async "));
    }
    if func.is_generator {
        parts.push(Layout::atom("*"));
    }
    parts.push(key_layout);
    parts.push(function_tail(emitter, func)?);
    Ok(Layout::fuse(parts))
}

fn function_tail(emitter: &Emitter, func: &Function) -> GeneratorResult<Layout> {
    let mut parts = Vec::new();
    if let Some(tp) = &func.type_parameters {
        parts.push(crate::generator::types::type_parameter_declaration(emitter, tp)?);
    }
    parts.push(Layout::atom("("));
    parts.push(parameter_list(emitter, &func.params)?);
    parts.push(Layout::atom(")"));
    if let Some(rt) = &func.return_type {
        parts.push(Layout::atom(": "));
        parts.push(crate::generator::types::type_layout(emitter, rt)?);
    }
    if func.predicate {
        parts.push(Layout::atom(" %checks"));
    }
    parts.push(Layout::atom(" "));
    parts.push(crate::generator::stmt::block(emitter, &func.body)?);
    Ok(Layout::fuse(parts))
}

/// A class expression/declaration: decorators, header, `extends`,
/// `implements`, body.
pub(crate) fn class_layout(emitter: &Emitter, class: &Class) -> GeneratorResult<Layout> {
    let mut parts = Vec::new();
    for dec in &class.decorators {
        parts.push(decorator(emitter, dec)?);
    }
    parts.push(Layout::atom("class"));
    if let Some(id) = &class.id {
        parts.push(Layout::atom(" "));
        parts.push(Layout::identifier(id.location.clone(), id.name.clone()));
    }
    if let Some(tp) = &class.type_parameters {
        parts.push(crate::generator::types::type_parameter_declaration(emitter, tp)?);
    }
    if let Some(sup) = &class.super_class {
        parts.push(Layout::atom(" extends "));
        parts.push(emitter.expression(sup, Emitter::bracketed_context(), precedence::MEMBER)?);
        if let Some(st) = &class.super_type_parameters {
            parts.push(crate::generator::types::type_instantiation(emitter, st)?);
        }
    }
    if !class.implements.is_empty() {
        let mut items = Vec::with_capacity(class.implements.len());
        for ty in &class.implements {
            items.push(crate::generator::types::type_layout(emitter, ty)?);
        }
        parts.push(Layout::atom(" implements "));
        parts.push(Layout::sequence(SequenceOptions::new(BreakMode::Never), Emitter::comma_join(items)));
    }
    parts.push(Layout::atom(" "));
    parts.push(class_body(emitter, &class.body)?);
    Ok(Layout::fuse(parts))
}

fn class_body(emitter: &Emitter, body: &ClassBody) -> GeneratorResult<Layout> {
    let mut items = Vec::with_capacity(body.body.len());
    for el in &body.body {
        items.push(class_element(emitter, el)?);
    }
    Ok(Layout::fuse([
        Layout::atom("{"),
        Layout::sequence(SequenceOptions::indented(BreakMode::Always, 1), items),
        Layout::atom("}"),
    ]))
}

fn class_element(emitter: &Emitter, el: &ClassElement) -> GeneratorResult<Layout> {
    match el {
        ClassElement::Method { location, key, value, kind, is_static, is_private, computed, decorators } => {
            let mut parts = Vec::new();
            for dec in decorators {
                parts.push(decorator(emitter, dec)?);
            }
            if *is_static {
                parts.push(Layout::atom("static "));
            }
            let key_layout = class_member_key(emitter, key, *computed, *is_private)?;
            let method = method_layout(emitter, value, key_layout)?;
            match kind {
                MethodKind::Get => parts.push(Layout::fuse([Layout::atom("get "), method])),
                MethodKind::Set => parts.push(Layout::fuse([Layout::atom("set "), method])),
                MethodKind::Constructor | MethodKind::Method => parts.push(method),
            }
            Ok(Layout::with_location(location.clone(), Layout::fuse(parts)))
        }
        ClassElement::Property { location, key, value, is_static, is_private, computed, type_annotation, decorators } => {
            let mut parts = Vec::new();
            for dec in decorators {
                parts.push(decorator(emitter, dec)?);
            }
            if *is_static {
                parts.push(Layout::atom("static "));
            }
            parts.push(class_member_key(emitter, key, *computed, *is_private)?);
            if let Some(t) = type_annotation {
                parts.push(Layout::atom(": "));
                parts.push(crate::generator::types::type_layout(emitter, t)?);
            }
            if let Some(v) = value {
                parts.push(Layout::atom(" = "));
                parts.push(emitter.expression(v, Emitter::bracketed_context(), precedence::ASSIGNMENT)?);
            }
            parts.push(Layout::pretty_semicolon());
            Ok(Layout::with_location(location.clone(), Layout::fuse(parts)))
        }
    }
}

fn class_member_key(emitter: &Emitter, key: &PropertyKey, computed: bool, is_private: bool) -> GeneratorResult<Layout> {
    if is_private {
        if let PropertyKey::PrivateName(p) = key {
            return Ok(Layout::atom(format!("#{}", p.name)));
        }
    }
    emitter.property_key(key, computed)
}

fn decorator(emitter: &Emitter, expr: &crate::ast::Expression) -> GeneratorResult<Layout> {
    Ok(Layout::fuse([
        Layout::atom("@"),
        emitter.expression(expr, Emitter::bracketed_context(), precedence::MEMBER)?,
        Layout::atom(" "),
    ]))
}
