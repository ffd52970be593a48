//! # Precedence & ambiguity context (spec.md §4.3)
//!
//! A single numeric scale plus a threaded `Context` value that tracks the
//! lexical neighborhood an expression sits in. Grounded in the teacher's
//! `Precedence` enum (`generator::printer::Precedence`), extended with the
//! member/new/call/tagged-template tier and the context/ambiguity machinery
//! the teacher's printer does not need because it never forces parens beyond
//! plain precedence comparison.

use crate::ast::{BinaryOperator, Expression, LogicalOperator, UnaryOperator, UpdateOperator};

pub type Prec = u8;

pub const MAX_PREC: Prec = 20;
pub const MIN_PREC: Prec = 1;
pub const ASSIGNMENT_PREC: Prec = 3;

pub const SEQUENCE: Prec = 0;
pub const ASSIGNMENT: Prec = 3;
pub const CONDITIONAL: Prec = 4;
pub const LOGICAL_OR: Prec = 5;
pub const LOGICAL_AND: Prec = 6;
pub const BITWISE_OR: Prec = 7;
pub const BITWISE_XOR: Prec = 8;
pub const BITWISE_AND: Prec = 9;
pub const EQUALITY: Prec = 10;
pub const RELATIONAL: Prec = 11;
pub const SHIFT: Prec = 12;
pub const ADDITIVE: Prec = 13;
pub const MULTIPLICATIVE: Prec = 14;
pub const EXPONENTIATION: Prec = 15;
pub const UNARY: Prec = 16;
pub const POSTFIX: Prec = 17;
pub const NEW_NO_ARGS: Prec = 18;
pub const MEMBER: Prec = 19;
pub const YIELD: Prec = 2;
pub const ARROW: Prec = 1;

/// Precedence of a binary operator (spec.md §4.3's numeric scale).
pub fn binary_precedence(op: BinaryOperator) -> Prec {
    use BinaryOperator::*;
    match op {
        Exponentiation => EXPONENTIATION,
        Multiply | Divide | Remainder => MULTIPLICATIVE,
        Add | Subtract => ADDITIVE,
        LeftShift | RightShift | UnsignedRightShift => SHIFT,
        LessThan | LessThanEqual | GreaterThan | GreaterThanEqual | In | Instanceof => RELATIONAL,
        Equal | NotEqual | StrictEqual | StrictNotEqual => EQUALITY,
        BitwiseAnd => BITWISE_AND,
        BitwiseXor => BITWISE_XOR,
        BitwiseOr => BITWISE_OR,
    }
}

pub fn logical_precedence(op: LogicalOperator) -> Prec {
    match op {
        LogicalOperator::Or | LogicalOperator::NullishCoalescing => LOGICAL_OR,
        LogicalOperator::And => LOGICAL_AND,
    }
}

/// Precedence of an expression node as a whole (used both to decide whether
/// a parent needs to parenthesize it, and as the `min_prec` threaded into
/// children). Unsupported productions get precedence 0, matching spec.md
/// §4.3 ("Unsupported productions have precedence 0").
pub fn expression_precedence(expr: &Expression) -> Prec {
    match expr {
        Expression::Sequence { .. } => SEQUENCE,
        Expression::Yield { .. } => YIELD,
        Expression::ArrowFunction(_) => ARROW,
        Expression::Assignment { .. } => ASSIGNMENT,
        Expression::Conditional { .. } => CONDITIONAL,
        Expression::Logical { operator, .. } => logical_precedence(*operator),
        Expression::Binary { operator, .. } => binary_precedence(*operator),
        Expression::Unary { .. } | Expression::Await { .. } => UNARY,
        Expression::Update { prefix, .. } => if *prefix { UNARY } else { POSTFIX },
        Expression::New { arguments, .. } if arguments.is_empty() => NEW_NO_ARGS,
        Expression::New { .. }
        | Expression::Call { .. }
        | Expression::Member { .. }
        | Expression::TaggedTemplate { .. } => MEMBER,
        Expression::This(_)
        | Expression::Super(_)
        | Expression::Array { .. }
        | Expression::Object { .. }
        | Expression::Identifier(_)
        | Expression::Literal(_)
        | Expression::Function(_)
        | Expression::TemplateLiteral(_)
        | Expression::JSXElement(_)
        | Expression::JSXFragment(_)
        | Expression::TypeCast { .. }
        | Expression::Import { .. }
        | Expression::MetaProperty { .. }
        | Expression::Class(_) => MAX_PREC,
        Expression::Comprehension(_) | Expression::GeneratorExpression(_) => 0,
    }
}

/// Constrains the *leftmost* token of an expression. Cleared by any
/// enclosing wrapper (bracket/paren/brace) or by any token that is not
/// itself leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeftContext {
    #[default]
    Normal,
    InExpressionStatement,
    InTaggedTemplate,
    InPlusOp,
    InMinusOp,
}

/// Constrains the *shape* of an entire subexpression. Cleared only by a
/// wrapper, never by a leftmost-token boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupContext {
    #[default]
    Normal,
    InArrowFuncBody,
    InForInit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub left: LeftContext,
    pub group: GroupContext,
}

impl Context {
    pub fn normal() -> Self {
        Self::default()
    }

    pub fn with_left(self, left: LeftContext) -> Self {
        Self { left, group: self.group }
    }

    pub fn with_group(self, group: GroupContext) -> Self {
        Self { left: self.left, group }
    }

    /// The context seen by a child immediately after a bracket/paren/brace
    /// has been emitted: both axes reset to `Normal`.
    pub fn cleared() -> Self {
        Self::default()
    }
}

fn is_object_like(expr: &Expression) -> bool {
    matches!(expr, Expression::Object { .. })
}

fn is_unary_minus_or_prefix_decrement(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Unary { operator: UnaryOperator::Minus, .. }
            | Expression::Update { operator: UpdateOperator::Decrement, prefix: true, .. }
    )
}

fn is_unary_plus_or_prefix_increment(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Unary { operator: UnaryOperator::Plus, .. }
            | Expression::Update { operator: UpdateOperator::Increment, prefix: true, .. }
    )
}

fn is_assignment_with_object_pattern(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Assignment { left, .. } if matches!(**left, crate::ast::Pattern::ObjectPattern { .. })
    )
}

/// `needs_parens(ctxt, expr, min_prec)` (spec.md §4.3): true iff the
/// expression's own precedence is below what the context demands, or the
/// context matches one of the named ambiguity classes.
pub fn needs_parens(ctx: Context, expr: &Expression, min_prec: Prec) -> bool {
    if expression_precedence(expr) < min_prec {
        return true;
    }

    match ctx.group {
        GroupContext::InArrowFuncBody if is_object_like(expr) => return true,
        GroupContext::InForInit if is_in_binary(expr) => return true,
        _ => {}
    }

    match ctx.left {
        LeftContext::InExpressionStatement if starts_statement_ambiguously(expr) => return true,
        LeftContext::InTaggedTemplate if starts_tagged_template_ambiguously(expr) => return true,
        LeftContext::InMinusOp if is_unary_minus_or_prefix_decrement(expr) => return true,
        LeftContext::InPlusOp if is_unary_plus_or_prefix_increment(expr) => return true,
        _ => {}
    }

    false
}

fn is_in_binary(expr: &Expression) -> bool {
    matches!(expr, Expression::Binary { operator: BinaryOperator::In, .. })
}

fn starts_statement_ambiguously(expr: &Expression) -> bool {
    matches!(expr, Expression::Function(_) | Expression::Class(_))
        || is_object_like(expr)
        || is_assignment_with_object_pattern(expr)
}

fn starts_tagged_template_ambiguously(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Function(_) | Expression::Class(_) | Expression::New { .. } | Expression::Import { .. }
    ) || is_object_like(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Location, Pattern};

    fn loc() -> Location {
        Location::synthetic()
    }

    fn obj() -> Expression {
        Expression::Object { location: loc(), properties: vec![] }
    }

    #[test]
    fn arrow_body_object_needs_parens() {
        let ctx = Context::normal().with_group(GroupContext::InArrowFuncBody);
        assert!(needs_parens(ctx, &obj(), MIN_PREC));
    }

    #[test]
    fn for_init_in_binary_needs_parens() {
        let in_expr = Expression::Binary {
            location: loc(),
            operator: BinaryOperator::In,
            left: Box::new(Expression::Identifier(crate::ast::Identifier::new(loc(), "x"))),
            right: Box::new(Expression::Identifier(crate::ast::Identifier::new(loc(), "y"))),
        };
        let ctx = Context::normal().with_group(GroupContext::InForInit);
        assert!(needs_parens(ctx, &in_expr, MIN_PREC));
    }

    #[test]
    fn expression_statement_object_needs_parens() {
        let ctx = Context::normal().with_left(LeftContext::InExpressionStatement);
        assert!(needs_parens(ctx, &obj(), MIN_PREC));
    }

    #[test]
    fn plus_op_context_forces_parens_on_unary_plus() {
        let plus = Expression::Unary {
            location: loc(),
            operator: UnaryOperator::Plus,
            argument: Box::new(Expression::Identifier(crate::ast::Identifier::new(loc(), "y"))),
        };
        let ctx = Context::normal().with_left(LeftContext::InPlusOp);
        assert!(needs_parens(ctx, &plus, MIN_PREC));
    }

    #[test]
    fn precedence_gate_alone_forces_parens() {
        let ident = Expression::Identifier(crate::ast::Identifier::new(loc(), "x"));
        assert!(!needs_parens(Context::normal(), &ident, MIN_PREC));
        assert!(needs_parens(Context::normal(), &ident, MAX_PREC + 1 - 1) == false);
        // A binary `+` node (ADDITIVE) cannot satisfy a MEMBER-level minimum.
        let plus = Expression::Binary {
            location: loc(),
            operator: BinaryOperator::Add,
            left: Box::new(ident.clone()),
            right: Box::new(ident.clone()),
        };
        assert!(needs_parens(Context::normal(), &plus, MEMBER));
    }

    #[test]
    fn assignment_pattern_left_is_object_needs_parens_in_statement() {
        let assign = Expression::Assignment {
            location: loc(),
            operator: crate::ast::AssignmentOperator::Assign,
            left: Box::new(Pattern::ObjectPattern { location: loc(), properties: vec![], type_annotation: None }),
            right: Box::new(Expression::Identifier(crate::ast::Identifier::new(loc(), "y"))),
        };
        let ctx = Context::normal().with_left(LeftContext::InExpressionStatement);
        assert!(needs_parens(ctx, &assign, MIN_PREC));
    }
}
