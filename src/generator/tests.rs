//! End-to-end generator tests, grounded in the teacher's `AstTestBuilder`
//! convention (small hand-rolled constructors instead of deeply nested
//! struct literals per test). Because rendering to text is out of this
//! crate's scope, assertions walk the returned `Layout` tree's shape
//! rather than comparing strings.

use crate::ast::types::Type;
use crate::ast::*;
use crate::generator::{program, Emitter, GeneratorConfig};
use crate::layout::Layout;
use crate::precedence::{Context, GroupContext, LeftContext};
use pretty_assertions::{assert_eq, assert_ne};

fn loc() -> Location {
    Location::synthetic()
}

fn loc_at(line: u32, offset: u32) -> Location {
    Location::new(Position::new(line, 0, offset), Position::new(line, 0, offset))
}

fn ident(name: &str) -> Identifier {
    Identifier::new(loc(), name)
}

fn id_expr(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

fn num(value: f64, raw: &str) -> Expression {
    Expression::Literal(Literal::Number(NumberLiteral { location: loc(), value, raw: raw.to_string() }))
}

fn string_expr(value: &str) -> Expression {
    Expression::Literal(Literal::String(StringLiteral { location: loc(), value: value.to_string(), raw: String::new() }))
}

fn expr_stmt(expression: Expression) -> Statement {
    Statement::ExpressionStatement { location: loc(), expression }
}

fn empty_function() -> Function {
    Function {
        location: loc(),
        id: None,
        params: vec![],
        body: BlockStatement { location: loc(), body: vec![] },
        is_async: false,
        is_generator: false,
        type_parameters: None,
        return_type: None,
        predicate: false,
    }
}

fn call(callee: Expression, arguments: Vec<Argument>) -> Expression {
    Expression::Call { location: loc(), callee: Box::new(callee), arguments, optional: false }
}

fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::Binary { location: loc(), operator: op, left: Box::new(left), right: Box::new(right) }
}

fn logical(op: LogicalOperator, left: Expression, right: Expression) -> Expression {
    Expression::Logical { location: loc(), operator: op, left: Box::new(left), right: Box::new(right) }
}

fn unary(op: UnaryOperator, argument: Expression) -> Expression {
    Expression::Unary { location: loc(), operator: op, argument: Box::new(argument) }
}

fn member(object: Expression, name: &str) -> Expression {
    Expression::Member {
        location: loc(),
        object: Box::new(object),
        property: MemberProperty::Identifier(ident(name)),
        computed: false,
        optional: false,
    }
}

fn program_of(body: Vec<Statement>) -> Program {
    Program { location: loc(), body, source_type: ProgramSourceType::Script }
}

fn emitter(config: &GeneratorConfig) -> Emitter<'_> {
    Emitter::new(config)
}

/// Walks a `Fuse`/`SourceLocation` shell and collects every `Atom` string in
/// emission order, picking the "flat"/not-broken branch of every `IfBreak`
/// and the pretty or ugly branch of every `IfPretty` per `pretty`. This
/// crate owns no renderer, so reading the tree this way is how a test
/// checks what an eventual renderer would see.
fn flatten_atoms(layout: &Layout) -> Vec<String> {
    let mut out = Vec::new();
    collect_atoms(layout, &mut out, true);
    out
}

fn flatten_ugly(layout: &Layout) -> Vec<String> {
    let mut out = Vec::new();
    collect_atoms(layout, &mut out, false);
    out
}

fn collect_atoms(layout: &Layout, out: &mut Vec<String>, pretty: bool) {
    match layout {
        Layout::Atom(s) => out.push(s.clone()),
        Layout::Identifier(_, s) => out.push(s.clone()),
        Layout::SourceLocation(_, inner) => collect_atoms(inner, out, pretty),
        Layout::Empty => {}
        Layout::Fuse(children) => {
            for c in children {
                collect_atoms(c, out, pretty);
            }
        }
        Layout::Sequence(_, children) => {
            for c in children {
                collect_atoms(c, out, pretty);
            }
        }
        Layout::IfPretty(p, u) => collect_atoms(if pretty { p } else { u }, out, pretty),
        Layout::IfBreak(_broken, not_broken) => collect_atoms(not_broken, out, pretty),
    }
}

/// Whether any `IfBreak` node in the tree guards a leading `(` on its broken
/// branch, i.e. whether breaking would introduce parens that a flat render
/// does not show.
fn contains_break_guarded_paren(layout: &Layout) -> bool {
    match layout {
        Layout::IfBreak(broken, _) => {
            flatten_atoms(broken).first().map(|s| s == "(").unwrap_or(false) || contains_break_guarded_paren(broken)
        }
        Layout::SourceLocation(_, inner) => contains_break_guarded_paren(inner),
        Layout::Fuse(children) | Layout::Sequence(_, children) => children.iter().any(contains_break_guarded_paren),
        Layout::IfPretty(p, u) => contains_break_guarded_paren(p) || contains_break_guarded_paren(u),
        _ => false,
    }
}

// --- spec.md §8 end-to-end scenarios ---

#[test]
fn scenario_1_iife_expression_statement_keeps_parens() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let iife = call(Expression::Function(empty_function()), vec![]);
    let ctx = Context::normal().with_left(LeftContext::InExpressionStatement);
    let layout = e.expression(&iife, ctx, crate::precedence::SEQUENCE).unwrap();
    assert_eq!(flatten_atoms(&layout).first().map(String::as_str), Some("("));
}

#[test]
fn scenario_2_arrow_body_object_literal_gets_parens() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let arrow = ArrowFunctionExpr {
        location: loc(),
        params: vec![],
        body: ArrowBody::Expression(Box::new(Expression::Object {
            location: loc(),
            properties: vec![ObjectProperty::Property {
                location: loc(),
                key: PropertyKey::Identifier(ident("b")),
                value: num(1.0, "1"),
                kind: PropertyKind::Init,
                method: false,
                shorthand: false,
                computed: false,
            }],
        })),
        is_async: false,
        type_parameters: None,
        return_type: None,
        predicate: false,
    };
    let layout = e
        .expression(&Expression::ArrowFunction(arrow), Context::normal(), crate::precedence::MIN_PREC)
        .unwrap();
    let atoms = flatten_atoms(&layout);
    assert!(atoms.contains(&" => ".to_string()));
    let brace_pos = atoms.iter().position(|a| a == "{").expect("object body should emit a brace");
    assert_eq!(atoms[brace_pos - 1], "(", "object literal arrow body must be wrapped in parens");
}

#[test]
fn scenario_3_for_init_in_expression_gets_parens() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let in_expr = binary(BinaryOperator::In, id_expr("x"), id_expr("y"));
    let stmt = Statement::ForStatement {
        location: loc(),
        init: Some(ForInit::Expression(in_expr)),
        test: None,
        update: None,
        body: Box::new(Statement::BlockStatement(BlockStatement { location: loc(), body: vec![] })),
    };
    let layout = e.statement(&stmt, true).unwrap();
    let atoms = flatten_atoms(&layout);
    let for_open = atoms.iter().position(|a| a == "for (").unwrap();
    assert_eq!(atoms[for_open + 1], "(", "`in` inside a for-init must be parenthesized");
}

#[test]
fn scenario_4_numeric_member_object_disambiguates() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let expr = member(num(1.0, "1"), "foo");
    let layout = e.expression(&expr, Context::normal(), crate::precedence::MIN_PREC).unwrap();
    assert_eq!(flatten_atoms(&layout).join(""), "(1).foo");
    assert_eq!(flatten_ugly(&layout).join(""), "1..foo");
}

#[test]
fn scenario_5_new_with_call_in_callee_forces_parens() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let callee = member(call(id_expr("a"), vec![]), "b");
    let new_expr = Expression::New { location: loc(), callee: Box::new(callee), arguments: vec![], type_arguments: None };
    let layout = e.expression(&new_expr, Context::normal(), crate::precedence::MIN_PREC).unwrap();
    let atoms = flatten_atoms(&layout);
    let new_pos = atoms.iter().position(|a| a == "new ").unwrap();
    assert_eq!(atoms[new_pos + 1], "(", "a callee containing a call must be parenthesized under `new`");
}

#[test]
fn scenario_6_binary_plus_unary_plus_keeps_separating_space() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let expr = binary(BinaryOperator::Add, id_expr("x"), unary(UnaryOperator::Plus, id_expr("y")));
    let layout = e.expression(&expr, Context::normal(), crate::precedence::MIN_PREC).unwrap();
    assert_eq!(flatten_ugly(&layout).join(""), "x + +y", "the space must survive even in ugly mode to avoid `x++y`");
}

#[test]
fn scenario_7_quote_choice_minimizes_escapes() {
    assert_eq!(crate::lexical::choose_quote("it's a \"test\""), '"');
}

#[test]
fn scenario_8_array_trailing_hole_forces_comma() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let arr = Expression::Array {
        location: loc(),
        elements: vec![ArrayElement::Expression(num(1.0, "1")), ArrayElement::Hole, ArrayElement::Hole],
    };
    let layout = e.expression(&arr, Context::normal(), crate::precedence::MIN_PREC).unwrap();
    let atoms = flatten_atoms(&layout);
    assert_eq!(atoms.last().map(String::as_str), Some("]"));
    assert_eq!(atoms[atoms.len() - 2], ",", "a trailing hole must force an extra comma so arity survives");
}

#[test]
fn scenario_9_non_bmp_literal_escapes_as_surrogate_pair() {
    assert_eq!(crate::lexical::escape_string("\u{1F4A9}", '"'), "\\uD83D\\uDCA9");
}

#[test]
fn scenario_10_return_break_wraps_in_parens_only_when_broken() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let arg = logical(LogicalOperator::Or, logical(LogicalOperator::And, id_expr("a"), id_expr("b")), id_expr("c"));
    let stmt = Statement::ReturnStatement { location: loc(), argument: Some(arg) };
    let layout = e.statement(&stmt, true).unwrap();
    assert!(!flatten_atoms(&layout).contains(&"(".to_string()), "an unbroken return must not show the ASI-guard parens");
    assert!(contains_break_guarded_paren(&layout), "the return argument must carry a break-conditional paren wrapper");
}

// --- statement semicolon policy ---

#[test]
fn non_last_statement_always_keeps_semicolon() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let layout = e.statement(&expr_stmt(id_expr("x")), false).unwrap();
    assert_eq!(flatten_ugly(&layout).last().map(String::as_str), Some(";"));
}

#[test]
fn last_statement_drops_semicolon_only_in_ugly_mode() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let layout = e.statement(&expr_stmt(id_expr("x")), true).unwrap();
    assert_eq!(flatten_atoms(&layout).last().map(String::as_str), Some(";"));
    assert_eq!(flatten_ugly(&layout).last().map(String::as_str), Some("x"));
}

#[test]
fn block_never_gets_trailing_semicolon() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let block_stmt = Statement::BlockStatement(BlockStatement { location: loc(), body: vec![] });
    let layout = e.statement(&block_stmt, true).unwrap();
    assert_eq!(flatten_atoms(&layout).last().map(String::as_str), Some("}"));
}

// --- program driver: directive prologue / docblock ordering ---

#[test]
fn directive_prologue_gets_unconditional_gap_before_rest_of_body() {
    let directive = expr_stmt(string_expr("use strict"));
    let rest = expr_stmt(id_expr("x"));
    let prog = program_of(vec![directive, rest]);
    let layout = program(&prog, &GeneratorConfig::default(), &[]).unwrap();
    let pretty = flatten_atoms(&layout);
    let gap_pos = pretty.iter().position(|a| a == "\n").unwrap();
    assert!(pretty[..gap_pos].iter().any(|a| a.contains("use strict")));
    assert!(pretty[gap_pos..].contains(&"x".to_string()));
}

#[test]
fn only_the_programs_final_statement_is_eligible_for_semicolon_omission() {
    let directive = expr_stmt(string_expr("use strict"));
    let rest = expr_stmt(id_expr("x"));
    let prog = program_of(vec![directive, rest]);
    let layout = program(&prog, &GeneratorConfig::default(), &[]).unwrap();
    let ugly = flatten_ugly(&layout);
    let semicolon_count = ugly.iter().filter(|a| a.as_str() == ";").count();
    assert_eq!(semicolon_count, 1, "only the non-final directive should keep a semicolon in ugly mode");
}

#[test]
fn docblock_is_placed_before_directive_prologue() {
    let directive = Statement::ExpressionStatement { location: loc_at(2, 10), expression: string_expr("use strict") };
    let prog = program_of(vec![directive]);
    let comment = Comment { location: loc_at(1, 0), text: "* a docblock ".to_string(), block: true };
    let config = GeneratorConfig { preserve_docblock: true, checksum: None };
    let layout = program(&prog, &config, std::slice::from_ref(&comment)).unwrap();
    let pretty = flatten_atoms(&layout);
    let docblock_pos = pretty.iter().position(|a| a.contains("a docblock")).unwrap();
    let directive_pos = pretty.iter().position(|a| a.contains("use strict")).unwrap();
    assert!(docblock_pos < directive_pos);
}

#[test]
fn every_leading_comment_before_the_first_non_directive_statement_is_merged_by_location() {
    // Two directives with a line comment sandwiched between them in source
    // order; all three must come out sorted by location, not with the
    // comment dropped or hoisted unconditionally to the very top.
    let first_directive =
        Statement::ExpressionStatement { location: loc_at(1, 0), expression: string_expr("use strict") };
    let second_directive =
        Statement::ExpressionStatement { location: loc_at(3, 20), expression: string_expr("use asm") };
    let rest = Statement::ExpressionStatement { location: loc_at(4, 30), expression: id_expr("x") };
    let prog = program_of(vec![first_directive, second_directive, rest]);
    let comment = Comment { location: loc_at(2, 10), text: " between them".to_string(), block: false };
    let config = GeneratorConfig { preserve_docblock: true, checksum: None };
    let layout = program(&prog, &config, std::slice::from_ref(&comment)).unwrap();
    let pretty = flatten_atoms(&layout);
    let first_pos = pretty.iter().position(|a| a.contains("use strict")).unwrap();
    let comment_pos = pretty.iter().position(|a| a.contains("between them")).unwrap();
    let second_pos = pretty.iter().position(|a| a.contains("use asm")).unwrap();
    assert!(first_pos < comment_pos, "comment must sort after the first directive");
    assert!(comment_pos < second_pos, "comment must sort before the second directive");
}

#[test]
fn leading_comments_are_dropped_when_docblock_preservation_is_off() {
    let directive = expr_stmt(string_expr("use strict"));
    let prog = program_of(vec![directive]);
    let comment = Comment { location: loc_at(1, 0), text: " not preserved".to_string(), block: false };
    let layout = program(&prog, &GeneratorConfig::default(), std::slice::from_ref(&comment)).unwrap();
    let pretty = flatten_atoms(&layout);
    assert!(!pretty.iter().any(|a| a.contains("not preserved")));
}

#[test]
fn checksum_footer_is_appended_after_the_body() {
    let prog = program_of(vec![expr_stmt(id_expr("x"))]);
    let config = GeneratorConfig { preserve_docblock: false, checksum: Some("abc123".to_string()) };
    let layout = program(&prog, &config, &[]).unwrap();
    let pretty = flatten_atoms(&layout);
    assert!(pretty.last().unwrap().contains("abc123"));
}

// --- Flow types ---

#[test]
fn union_type_leading_separator_hidden_until_break() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let union = Type::Union { location: loc(), types: vec![Type::String(loc()), Type::Number(loc()), Type::Boolean(loc())] };
    let layout = crate::generator::types::type_layout(&e, &union).unwrap();
    assert_eq!(flatten_atoms(&layout).join(""), "string| number| boolean");
}

#[test]
fn object_type_method_shorthand_reuses_function_type() {
    use crate::ast::types::{FunctionType, ObjectType, ObjectTypeProperty};
    let method = ObjectTypeProperty::Property {
        location: loc(),
        key: "foo".to_string(),
        value: Box::new(Type::Function(FunctionType {
            location: loc(),
            type_parameters: None,
            params: vec![],
            rest: None,
            return_type: Box::new(Type::Void(loc())),
        })),
        optional: false,
        variance: None,
        is_method: true,
        computed: false,
    };
    let ot = ObjectType { location: loc(), properties: vec![method], exact: false, inexact: false };
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let layout = crate::generator::types::object_type(&e, &ot).unwrap();
    assert_eq!(flatten_atoms(&layout).join(""), "{foo() => void}");
}

// --- class ---

#[test]
fn class_property_gets_pretty_only_semicolon() {
    let prop = ClassElement::Property {
        location: loc(),
        key: PropertyKey::Identifier(ident("x")),
        value: Some(num(1.0, "1")),
        is_static: false,
        is_private: false,
        computed: false,
        type_annotation: None,
        decorators: vec![],
    };
    let class = Class {
        location: loc(),
        id: Some(ident("Foo")),
        super_class: None,
        super_type_parameters: None,
        type_parameters: None,
        implements: vec![],
        body: ClassBody { location: loc(), body: vec![prop] },
        decorators: vec![],
    };
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let layout = crate::generator::pattern::class_layout(&e, &class).unwrap();
    assert!(flatten_atoms(&layout).contains(&";".to_string()));
    assert!(!flatten_ugly(&layout).contains(&";".to_string()));
}

// --- JSX ---

#[test]
fn jsx_attributes_are_space_joined_not_comma_joined() {
    use crate::ast::jsx::{JSXAttribute, JSXAttributeValue, JSXElement, JSXName};
    let el = JSXElement {
        location: loc(),
        name: JSXName::Identifier { location: loc(), name: "Foo".to_string() },
        attributes: vec![
            JSXAttribute::Attribute {
                location: loc(),
                name: JSXName::Identifier { location: loc(), name: "a".to_string() },
                value: Some(JSXAttributeValue::StringLiteral { location: loc(), value: "1".to_string(), raw: "\"1\"".to_string() }),
            },
            JSXAttribute::Attribute {
                location: loc(),
                name: JSXName::Identifier { location: loc(), name: "b".to_string() },
                value: Some(JSXAttributeValue::StringLiteral { location: loc(), value: "2".to_string(), raw: "\"2\"".to_string() }),
            },
        ],
        self_closing: true,
        children: vec![],
    };
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let layout = crate::generator::jsx::element(&e, &el).unwrap();
    assert_eq!(flatten_atoms(&layout).join(""), "<Foo a=\"1\" b=\"2\" />");
}

// --- error taxonomy ---

#[test]
fn comprehension_is_an_unsupported_production_error() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let err = e
        .expression(&Expression::Comprehension(loc()), Context::normal(), crate::precedence::MIN_PREC)
        .unwrap_err();
    assert!(matches!(err, crate::generator::GeneratorError::UnsupportedProduction { .. }));
}

#[test]
fn private_name_as_plain_object_key_is_invalid_ast() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let key = PropertyKey::PrivateName(PrivateName { location: loc(), name: "x".to_string() });
    let err = e.property_key(&key, false).unwrap_err();
    assert!(matches!(err, crate::generator::GeneratorError::InvalidAst { .. }));
}

#[test]
fn declare_function_with_non_function_annotation_is_invalid_ast() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let stmt = Statement::DeclareFunction {
        location: loc(),
        id: ident("foo"),
        type_annotation: Box::new(Type::Number(loc())),
        predicate: false,
    };
    let err = e.statement(&stmt, true).unwrap_err();
    assert!(matches!(err, crate::generator::GeneratorError::InvalidAst { .. }));
}

#[test]
fn declare_export_with_neither_declaration_nor_specifiers_is_invalid_ast() {
    let config = GeneratorConfig::default();
    let e = emitter(&config);
    let stmt = Statement::DeclareExportDeclaration {
        location: loc(),
        declaration: None,
        specifiers: vec![],
        source: None,
        default: false,
    };
    let err = e.statement(&stmt, true).unwrap_err();
    assert!(matches!(err, crate::generator::GeneratorError::InvalidAst { .. }));
}

#[test]
fn arrow_func_body_group_context_is_cleared_inside_brackets() {
    // Sanity check on the context plumbing the arrow-body scenario depends
    // on: once a bracket/paren/brace is emitted, a child's context resets,
    // so an object nested *inside* the already-parenthesized body does not
    // also get wrapped.
    let ctx = Context::normal().with_group(GroupContext::InArrowFuncBody);
    assert_eq!(Emitter::bracketed_context().group, GroupContext::Normal);
    assert_ne!(ctx.group, Emitter::bracketed_context().group);
}
