//! Statement emitter (spec.md §4.5).

use crate::ast::types::{ObjectType, Type, TypeParameterDeclaration};
use crate::ast::{
    BlockStatement, CatchClause, DeclareModuleId, Expression, ExportDefaultDeclarationKind, ExportSpecifier, ForInit,
    ForXLeft, Identifier, ImportKind, ImportSpecifier, Location, Statement, StringLiteral, SwitchCase,
    VariableDeclarationKind, VariableDeclarator,
};
use crate::generator::{Emitter, GeneratorError, GeneratorResult};
use crate::layout::{BreakMode, Layout, SequenceOptions};
use crate::precedence::{self, Context, GroupContext, LeftContext};

impl<'a> Emitter<'a> {
    /// `is_last` controls semicolon policy: the final statement of a block
    /// may drop its semicolon in ugly mode (spec.md §4.5), any other
    /// statement keeps an unconditional one so ugly output stays parseable.
    pub(crate) fn statement(&self, stmt: &Statement, is_last: bool) -> GeneratorResult<Layout> {
        let body = self.statement_body(stmt)?;
        let body = if needs_semicolon(stmt) {
            if is_last {
                Layout::fuse([body, Layout::pretty_semicolon()])
            } else {
                Layout::fuse([body, Layout::atom(";")])
            }
        } else {
            body
        };
        Ok(Layout::with_location(stmt.location().clone(), body))
    }

    /// Renders a statement list with blank-line preservation (spec.md §4.5:
    /// a gap survives if the previous statement's last line and the next
    /// statement's first line are not adjacent).
    pub(crate) fn statement_sequence(&self, stmts: &[Statement]) -> GeneratorResult<Vec<Layout>> {
        let mut items = Vec::with_capacity(stmts.len());
        for (i, stmt) in stmts.iter().enumerate() {
            if i > 0 {
                let prev = &stmts[i - 1];
                if prev.location().end.line + 1 < stmt.location().start.line {
                    items.push(Layout::if_pretty(Layout::atom("\n"), Layout::Empty));
                }
            }
            let is_last = i == stmts.len() - 1;
            items.push(self.statement(stmt, is_last)?);
        }
        Ok(items)
    }

    fn statement_body(&self, stmt: &Statement) -> GeneratorResult<Layout> {
        match stmt {
            Statement::VariableDeclaration { kind, declarations, .. } => self.variable_declaration(*kind, declarations),
            Statement::FunctionDeclaration(f) => crate::generator::pattern::function_layout(self, f),
            Statement::ClassDeclaration(c) => crate::generator::pattern::class_layout(self, c),
            Statement::ExpressionStatement { expression, .. } => {
                let ctx = Context::normal().with_left(LeftContext::InExpressionStatement);
                self.expression(expression, ctx, precedence::SEQUENCE)
            }
            Statement::BlockStatement(b) => block(self, b),
            Statement::ReturnStatement { argument, .. } => {
                let mut parts = vec![Layout::atom("return")];
                if let Some(arg) = argument {
                    parts.push(Layout::atom(" "));
                    parts.push(if needs_asi_guard(arg) {
                        self.return_like_argument(arg)?
                    } else {
                        self.expression(arg, Emitter::bracketed_context(), precedence::SEQUENCE)?
                    });
                }
                Ok(Layout::fuse(parts))
            }
            Statement::IfStatement { test, consequent, alternate, .. } => {
                self.if_statement(test, consequent, alternate.as_deref())
            }
            Statement::WhileStatement { test, body, .. } => {
                let test_layout = self.expression(test, Emitter::bracketed_context(), precedence::SEQUENCE)?;
                let body_layout = self.statement(body, true)?;
                Ok(Layout::fuse([Layout::atom("while ("), test_layout, Layout::atom(") "), body_layout]))
            }
            Statement::DoWhileStatement { body, test, .. } => {
                let body_layout = self.statement(body, true)?;
                let test_layout = self.expression(test, Emitter::bracketed_context(), precedence::SEQUENCE)?;
                Ok(Layout::fuse([
                    Layout::atom("do "),
                    body_layout,
                    Layout::atom(" while ("),
                    test_layout,
                    Layout::atom(")"),
                ]))
            }
            Statement::ForStatement { init, test, update, body, .. } => {
                self.for_statement(init.as_ref(), test.as_ref(), update.as_ref(), body)
            }
            Statement::ForInStatement { left, right, body, .. } => self.for_in_of(left, right, body, false, false),
            Statement::ForOfStatement { left, right, body, is_await, .. } => {
                self.for_in_of(left, right, body, true, *is_await)
            }
            Statement::BreakStatement { label, .. } => Ok(labeled_jump("break", label)),
            Statement::ContinueStatement { label, .. } => Ok(labeled_jump("continue", label)),
            Statement::DebuggerStatement(_) => Ok(Layout::atom("debugger")),
            Statement::EmptyStatement(_) => Ok(Layout::atom(";")),
            Statement::ThrowStatement { argument, .. } => {
                let arg_layout = self.return_like_argument(argument)?;
                Ok(Layout::fuse([Layout::atom("throw "), arg_layout]))
            }
            Statement::TryStatement { block: try_block, handler, finalizer, .. } => {
                self.try_statement(try_block, handler.as_ref(), finalizer.as_ref())
            }
            Statement::SwitchStatement { discriminant, cases, .. } => self.switch_statement(discriminant, cases),
            Statement::LabeledStatement { label, body, .. } => {
                let body_layout = self.statement(body, true)?;
                Ok(Layout::fuse([
                    Layout::identifier(label.location.clone(), label.name.clone()),
                    Layout::atom(": "),
                    body_layout,
                ]))
            }
            Statement::ImportDeclaration { specifiers, source, import_kind, .. } => {
                self.import_declaration(specifiers, source, *import_kind)
            }
            Statement::ExportNamedDeclaration { declaration, specifiers, source, .. } => {
                self.export_named(declaration.as_deref(), specifiers, source.as_ref())
            }
            Statement::ExportDefaultDeclaration { declaration, .. } => self.export_default(declaration),
            Statement::ExportAllDeclaration { source, exported, .. } => self.export_all(source, exported.as_ref()),
            Statement::TypeAlias { id, type_parameters, right, .. } => {
                self.type_alias(id, type_parameters.as_ref(), right)
            }
            Statement::OpaqueType { id, type_parameters, impltype, supertype, .. } => {
                self.opaque_type(id, type_parameters.as_ref(), impltype.as_deref(), supertype.as_deref())
            }
            Statement::InterfaceDeclaration { id, type_parameters, extends, body, .. } => {
                self.interface_like("interface", id, type_parameters.as_ref(), extends, body)
            }
            Statement::DeclareVariable { id, type_annotation, .. } => {
                let decl = self.typed_decl_id(id, type_annotation)?;
                Ok(Layout::fuse([Layout::atom("declare var "), decl]))
            }
            Statement::DeclareFunction { location, id, type_annotation, predicate, .. } => {
                self.declare_function(location, id, type_annotation, *predicate)
            }
            Statement::DeclareClass { id, type_parameters, extends, body, .. } => {
                self.declare_class(id, type_parameters.as_ref(), extends, body)
            }
            Statement::DeclareModule { id, body, .. } => self.declare_module(id, body),
            Statement::DeclareModuleExports { type_annotation, .. } => {
                let t = crate::generator::types::type_layout(self, type_annotation)?;
                Ok(Layout::fuse([Layout::atom("declare module.exports: "), t]))
            }
            Statement::DeclareExportDeclaration { location, declaration, specifiers, source, default, .. } => {
                self.declare_export(location, declaration.as_deref(), specifiers, source.as_ref(), *default)
            }
            Statement::DeclareInterface { id, type_parameters, extends, body, .. } => {
                let inner = self.interface_like("interface", id, type_parameters.as_ref(), extends, body)?;
                Ok(Layout::fuse([Layout::atom("declare "), inner]))
            }
            Statement::DeclareOpaqueType { id, type_parameters, supertype, .. } => {
                self.declare_opaque_type(id, type_parameters.as_ref(), supertype.as_deref())
            }
        }
    }

    fn variable_declaration(&self, kind: VariableDeclarationKind, declarations: &[VariableDeclarator]) -> GeneratorResult<Layout> {
        let kw = variable_kind_str(kind);
        let mut items = Vec::with_capacity(declarations.len());
        for d in declarations {
            let id_layout = self.pattern(&d.id, Emitter::bracketed_context())?;
            items.push(match &d.init {
                Some(init) => {
                    let init_layout = self.expression(init, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
                    Layout::fuse([id_layout, Layout::atom(" = "), init_layout])
                }
                None => id_layout,
            });
        }
        Ok(Layout::fuse([
            Layout::atom(kw),
            Layout::atom(" "),
            Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)),
        ]))
    }

    fn if_statement(&self, test: &Expression, consequent: &Statement, alternate: Option<&Statement>) -> GeneratorResult<Layout> {
        let test_layout = self.expression(test, Emitter::bracketed_context(), precedence::SEQUENCE)?;
        let consequent_layout = self.statement(consequent, true)?;
        let mut parts = vec![Layout::atom("if ("), test_layout, Layout::atom(") "), consequent_layout];
        if let Some(alt) = alternate {
            parts.push(Layout::atom(" else "));
            parts.push(self.statement(alt, true)?);
        }
        Ok(Layout::fuse(parts))
    }

    fn for_statement(
        &self,
        init: Option<&ForInit>,
        test: Option<&Expression>,
        update: Option<&Expression>,
        body: &Statement,
    ) -> GeneratorResult<Layout> {
        let init_layout = match init {
            Some(ForInit::VariableDeclaration { kind, declarations, .. }) => self.variable_declaration(*kind, declarations)?,
            Some(ForInit::Expression(e)) => {
                let ctx = Context::normal().with_group(GroupContext::InForInit);
                self.expression(e, ctx, precedence::SEQUENCE)?
            }
            None => Layout::Empty,
        };
        let test_layout = match test {
            Some(e) => self.expression(e, Emitter::bracketed_context(), precedence::SEQUENCE)?,
            None => Layout::Empty,
        };
        let update_layout = match update {
            Some(e) => self.expression(e, Emitter::bracketed_context(), precedence::SEQUENCE)?,
            None => Layout::Empty,
        };
        let body_layout = self.statement(body, true)?;
        Ok(Layout::fuse([
            Layout::atom("for ("),
            init_layout,
            Layout::atom("; "),
            test_layout,
            Layout::atom("; "),
            update_layout,
            Layout::atom(") "),
            body_layout,
        ]))
    }

    fn for_in_of(&self, left: &ForXLeft, right: &Expression, body: &Statement, is_of: bool, is_await: bool) -> GeneratorResult<Layout> {
        let left_layout = match left {
            ForXLeft::VariableDeclaration { kind, declarator, .. } => {
                let kw = variable_kind_str(*kind);
                let id_layout = self.pattern(&declarator.id, Emitter::bracketed_context())?;
                Layout::fuse([Layout::atom(kw), Layout::atom(" "), id_layout])
            }
            ForXLeft::Pattern(p) => self.pattern(p, Emitter::bracketed_context())?,
        };
        let right_layout = self.expression(right, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
        let body_layout = self.statement(body, true)?;
        let keyword = if is_of { "of" } else { "in" };
        let mut parts = vec![Layout::atom("for ")];
        if is_await {
            parts.push(Layout::atom("await "));
        }
        parts.push(Layout::atom("("));
        parts.push(left_layout);
        parts.push(Layout::atom(format!(" {keyword} ")));
        parts.push(right_layout);
        parts.push(Layout::atom(") "));
        parts.push(body_layout);
        Ok(Layout::fuse(parts))
    }

    /// Wraps `return`/`throw` arguments so that, if the renderer decides the
    /// expression must break across lines, it gets parens to defeat ASI
    /// (spec.md §4.5, §8: `return (\n...\n)`).
    fn return_like_argument(&self, expr: &Expression) -> GeneratorResult<Layout> {
        let inner = self.expression(expr, Emitter::bracketed_context(), precedence::SEQUENCE)?;
        let wrapped = Layout::if_break(Layout::fuse([Layout::atom("("), inner.clone(), Layout::atom(")")]), inner);
        Ok(Layout::sequence(SequenceOptions::indented(BreakMode::IfNeeded, 1), [wrapped]))
    }

    fn try_statement(&self, try_block: &BlockStatement, handler: Option<&CatchClause>, finalizer: Option<&BlockStatement>) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom("try "), block(self, try_block)?];
        if let Some(h) = handler {
            parts.push(Layout::atom(" catch "));
            if let Some(param) = &h.param {
                let p = self.pattern(param, Emitter::bracketed_context())?;
                parts.push(Layout::fuse([Layout::atom("("), p, Layout::atom(") ")]));
            }
            parts.push(block(self, &h.body)?);
        }
        if let Some(f) = finalizer {
            parts.push(Layout::atom(" finally "));
            parts.push(block(self, f)?);
        }
        Ok(Layout::fuse(parts))
    }

    fn switch_statement(&self, discriminant: &Expression, cases: &[SwitchCase]) -> GeneratorResult<Layout> {
        let disc_layout = self.expression(discriminant, Emitter::bracketed_context(), precedence::SEQUENCE)?;
        let mut case_items = Vec::with_capacity(cases.len());
        for case in cases {
            case_items.push(self.switch_case(case)?);
        }
        Ok(Layout::fuse([
            Layout::atom("switch ("),
            disc_layout,
            Layout::atom(") {"),
            Layout::sequence(SequenceOptions::indented(BreakMode::Always, 1), case_items),
            Layout::atom("}"),
        ]))
    }

    fn switch_case(&self, case: &SwitchCase) -> GeneratorResult<Layout> {
        let header = match &case.test {
            Some(e) => {
                let t = self.expression(e, Emitter::bracketed_context(), precedence::SEQUENCE)?;
                Layout::fuse([Layout::atom("case "), t, Layout::atom(":")])
            }
            None => Layout::atom("default:"),
        };
        let body_items = self.statement_sequence(&case.consequent)?;
        Ok(Layout::with_location(
            case.location.clone(),
            Layout::fuse([header, Layout::sequence(SequenceOptions::indented(BreakMode::Always, 1), body_items)]),
        ))
    }

    fn import_declaration(&self, specifiers: &[ImportSpecifier], source: &StringLiteral, import_kind: ImportKind) -> GeneratorResult<Layout> {
        if specifiers.is_empty() {
            return Ok(Layout::fuse([Layout::atom("import "), string_literal_layout(source)]));
        }
        let mut parts = vec![Layout::atom("import ")];
        match import_kind {
            ImportKind::Type => parts.push(Layout::atom("type ")),
            ImportKind::Typeof => parts.push(Layout::atom("typeof ")),
            ImportKind::Value => {}
        }
        let mut default_and_namespace = Vec::new();
        let mut named = Vec::new();
        for spec in specifiers {
            match spec {
                ImportSpecifier::Default { local } => {
                    default_and_namespace.push(Layout::identifier(local.location.clone(), local.name.clone()))
                }
                ImportSpecifier::Namespace { local } => default_and_namespace.push(Layout::fuse([
                    Layout::atom("* as "),
                    Layout::identifier(local.location.clone(), local.name.clone()),
                ])),
                ImportSpecifier::Named { imported, local, import_kind } => {
                    let mut item = Vec::new();
                    match import_kind {
                        ImportKind::Type => item.push(Layout::atom("type ")),
                        ImportKind::Typeof => item.push(Layout::atom("typeof ")),
                        ImportKind::Value => {}
                    }
                    item.push(Layout::identifier(imported.location.clone(), imported.name.clone()));
                    if local.name != imported.name {
                        item.push(Layout::atom(" as "));
                        item.push(Layout::identifier(local.location.clone(), local.name.clone()));
                    }
                    named.push(Layout::fuse(item));
                }
            }
        }
        let mut clause_parts = default_and_namespace;
        if !named.is_empty() {
            clause_parts.push(Layout::fuse([
                Layout::atom("{"),
                Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(named)),
                Layout::atom("}"),
            ]));
        }
        parts.push(Layout::sequence(SequenceOptions::new(BreakMode::Never), Emitter::comma_join(clause_parts)));
        parts.push(Layout::atom(" from "));
        parts.push(string_literal_layout(source));
        Ok(Layout::fuse(parts))
    }

    fn export_named(&self, declaration: Option<&Statement>, specifiers: &[ExportSpecifier], source: Option<&StringLiteral>) -> GeneratorResult<Layout> {
        if let Some(decl) = declaration {
            let decl_layout = self.statement(decl, true)?;
            return Ok(Layout::fuse([Layout::atom("export "), decl_layout]));
        }
        let items = export_specifier_items(specifiers);
        let mut parts = vec![
            Layout::atom("export {"),
            Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)),
            Layout::atom("}"),
        ];
        if let Some(src) = source {
            parts.push(Layout::atom(" from "));
            parts.push(string_literal_layout(src));
        }
        Ok(Layout::fuse(parts))
    }

    fn export_default(&self, declaration: &ExportDefaultDeclarationKind) -> GeneratorResult<Layout> {
        let inner = match declaration {
            ExportDefaultDeclarationKind::Expression(e) => {
                let ctx = Context::normal().with_left(LeftContext::InExpressionStatement);
                self.expression(e, ctx, precedence::ASSIGNMENT)?
            }
            ExportDefaultDeclarationKind::Function(f) => crate::generator::pattern::function_layout(self, f)?,
            ExportDefaultDeclarationKind::Class(c) => crate::generator::pattern::class_layout(self, c)?,
        };
        Ok(Layout::fuse([Layout::atom("export default "), inner]))
    }

    fn export_all(&self, source: &StringLiteral, exported: Option<&Identifier>) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom("export *")];
        if let Some(id) = exported {
            parts.push(Layout::atom(" as "));
            parts.push(Layout::identifier(id.location.clone(), id.name.clone()));
        }
        parts.push(Layout::atom(" from "));
        parts.push(string_literal_layout(source));
        Ok(Layout::fuse(parts))
    }

    fn typed_decl_id(&self, id: &Identifier, type_annotation: &Type) -> GeneratorResult<Layout> {
        let t = crate::generator::types::type_layout(self, type_annotation)?;
        Ok(Layout::fuse([Layout::identifier(id.location.clone(), id.name.clone()), Layout::atom(": "), t]))
    }

    fn type_alias(&self, id: &Identifier, type_parameters: Option<&TypeParameterDeclaration>, right: &Type) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom("type "), Layout::identifier(id.location.clone(), id.name.clone())];
        if let Some(tp) = type_parameters {
            parts.push(crate::generator::types::type_parameter_declaration(self, tp)?);
        }
        parts.push(Layout::atom(" = "));
        parts.push(crate::generator::types::type_layout(self, right)?);
        Ok(Layout::fuse(parts))
    }

    fn opaque_type(
        &self,
        id: &Identifier,
        type_parameters: Option<&TypeParameterDeclaration>,
        impltype: Option<&Type>,
        supertype: Option<&Type>,
    ) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom("opaque type "), Layout::identifier(id.location.clone(), id.name.clone())];
        if let Some(tp) = type_parameters {
            parts.push(crate::generator::types::type_parameter_declaration(self, tp)?);
        }
        if let Some(st) = supertype {
            parts.push(Layout::atom(": "));
            parts.push(crate::generator::types::type_layout(self, st)?);
        }
        if let Some(it) = impltype {
            parts.push(Layout::atom(" = "));
            parts.push(crate::generator::types::type_layout(self, it)?);
        }
        Ok(Layout::fuse(parts))
    }

    fn interface_like(
        &self,
        keyword: &str,
        id: &Identifier,
        type_parameters: Option<&TypeParameterDeclaration>,
        extends: &[Type],
        body: &ObjectType,
    ) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom(keyword), Layout::atom(" "), Layout::identifier(id.location.clone(), id.name.clone())];
        if let Some(tp) = type_parameters {
            parts.push(crate::generator::types::type_parameter_declaration(self, tp)?);
        }
        if !extends.is_empty() {
            let mut items = Vec::with_capacity(extends.len());
            for t in extends {
                items.push(crate::generator::types::type_layout(self, t)?);
            }
            parts.push(Layout::atom(" extends "));
            parts.push(Layout::sequence(SequenceOptions::new(BreakMode::Never), Emitter::comma_join(items)));
        }
        parts.push(Layout::atom(" "));
        parts.push(crate::generator::types::object_type(self, body)?);
        Ok(Layout::fuse(parts))
    }

    fn declare_function(&self, location: &Location, id: &Identifier, type_annotation: &Type, predicate: bool) -> GeneratorResult<Layout> {
        if !matches!(type_annotation, Type::Function(_)) {
            return Err(GeneratorError::invalid("DeclareFunction whose annotation is not a function type", location));
        }
        let t = crate::generator::types::type_layout(self, type_annotation)?;
        let mut parts = vec![Layout::atom("declare function "), Layout::identifier(id.location.clone(), id.name.clone()), t];
        if predicate {
            parts.push(Layout::atom(" %checks"));
        }
        Ok(Layout::fuse(parts))
    }

    fn declare_class(&self, id: &Identifier, type_parameters: Option<&TypeParameterDeclaration>, extends: &[Type], body: &ObjectType) -> GeneratorResult<Layout> {
        let inner = self.interface_like("class", id, type_parameters, extends, body)?;
        Ok(Layout::fuse([Layout::atom("declare "), inner]))
    }

    fn declare_module(&self, id: &DeclareModuleId, body: &BlockStatement) -> GeneratorResult<Layout> {
        let id_layout = match id {
            DeclareModuleId::Identifier(i) => Layout::identifier(i.location.clone(), i.name.clone()),
            DeclareModuleId::StringLiteral(s) => string_literal_layout(s),
        };
        let body_layout = block(self, body)?;
        Ok(Layout::fuse([Layout::atom("declare module "), id_layout, Layout::atom(" "), body_layout]))
    }

    fn declare_export(
        &self,
        location: &Location,
        declaration: Option<&Statement>,
        specifiers: &[ExportSpecifier],
        source: Option<&StringLiteral>,
        default: bool,
    ) -> GeneratorResult<Layout> {
        if let Some(decl) = declaration {
            let decl_layout = self.statement(decl, true)?;
            let kw = if default { "declare export default " } else { "declare export " };
            return Ok(Layout::fuse([Layout::atom(kw), decl_layout]));
        }
        if specifiers.is_empty() {
            return Err(GeneratorError::invalid("DeclareExport with neither declaration nor specifiers", location));
        }
        let items = export_specifier_items(specifiers);
        let mut parts = vec![
            Layout::atom("declare export {"),
            Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)),
            Layout::atom("}"),
        ];
        if let Some(src) = source {
            parts.push(Layout::atom(" from "));
            parts.push(string_literal_layout(src));
        }
        Ok(Layout::fuse(parts))
    }

    fn declare_opaque_type(&self, id: &Identifier, type_parameters: Option<&TypeParameterDeclaration>, supertype: Option<&Type>) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom("declare opaque type "), Layout::identifier(id.location.clone(), id.name.clone())];
        if let Some(tp) = type_parameters {
            parts.push(crate::generator::types::type_parameter_declaration(self, tp)?);
        }
        if let Some(st) = supertype {
            parts.push(Layout::atom(": "));
            parts.push(crate::generator::types::type_layout(self, st)?);
        }
        Ok(Layout::fuse(parts))
    }
}

/// A `{ ... }` block: statements indented one level, always newline-broken.
pub(crate) fn block(emitter: &Emitter, block: &BlockStatement) -> GeneratorResult<Layout> {
    let items = emitter.statement_sequence(&block.body)?;
    Ok(Layout::fuse([
        Layout::atom("{"),
        Layout::sequence(SequenceOptions::indented(BreakMode::Always, 1), items),
        Layout::atom("}"),
    ]))
}

fn export_specifier_items(specifiers: &[ExportSpecifier]) -> Vec<Layout> {
    specifiers
        .iter()
        .map(|spec| {
            let mut item = vec![Layout::identifier(spec.local.location.clone(), spec.local.name.clone())];
            if spec.local.name != spec.exported.name {
                item.push(Layout::atom(" as "));
                item.push(Layout::identifier(spec.exported.location.clone(), spec.exported.name.clone()));
            }
            Layout::fuse(item)
        })
        .collect()
}

fn string_literal_layout(s: &StringLiteral) -> Layout {
    let quote = crate::lexical::choose_quote(&s.value);
    let escaped = crate::lexical::escape_string(&s.value, quote);
    Layout::with_location(s.location.clone(), Layout::atom(format!("{quote}{escaped}{quote}")))
}

fn labeled_jump(keyword: &str, label: &Option<Identifier>) -> Layout {
    match label {
        Some(id) => Layout::fuse([Layout::atom(keyword), Layout::atom(" "), Layout::identifier(id.location.clone(), id.name.clone())]),
        None => Layout::atom(keyword),
    }
}

fn variable_kind_str(kind: VariableDeclarationKind) -> &'static str {
    match kind {
        VariableDeclarationKind::Var => "var",
        VariableDeclarationKind::Let => "let",
        VariableDeclarationKind::Const => "const",
    }
}

/// Whether a statement gets a trailing `;` at all (brace-delimited
/// constructs never do; spec.md §4.5).
fn needs_semicolon(stmt: &Statement) -> bool {
    match stmt {
        Statement::VariableDeclaration { .. }
        | Statement::ExpressionStatement { .. }
        | Statement::ReturnStatement { .. }
        | Statement::BreakStatement { .. }
        | Statement::ContinueStatement { .. }
        | Statement::DebuggerStatement(_)
        | Statement::ThrowStatement { .. }
        | Statement::DoWhileStatement { .. }
        | Statement::TypeAlias { .. }
        | Statement::OpaqueType { .. }
        | Statement::DeclareVariable { .. }
        | Statement::DeclareFunction { .. }
        | Statement::DeclareModuleExports { .. }
        | Statement::DeclareOpaqueType { .. }
        | Statement::ImportDeclaration { .. }
        | Statement::ExportAllDeclaration { .. } => true,
        Statement::ExportDefaultDeclaration { declaration, .. } => {
            matches!(declaration, ExportDefaultDeclarationKind::Expression(_))
        }
        Statement::ExportNamedDeclaration { declaration, .. } => declaration.is_none(),
        Statement::DeclareExportDeclaration { declaration, .. } => declaration.is_none(),
        _ => false,
    }
}

/// Whether a `return` argument needs the break-conditional ASI-guard parens
/// (spec.md §4.5): only `Logical`/`Binary`/`Sequence`/`JSXElement`, the
/// productions that can start a line in a way the parser would otherwise
/// fold into the previous statement if broken across lines.
fn needs_asi_guard(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Logical { .. } | Expression::Binary { .. } | Expression::Sequence { .. } | Expression::JSXElement(_)
    )
}
