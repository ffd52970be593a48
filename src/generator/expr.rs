//! Expression emitter (spec.md §4.4).

use crate::ast::{
    Argument, ArrayElement, AssignmentOperator, BinaryOperator, Expression, Literal,
    LogicalOperator, MemberProperty, ObjectProperty, Pattern, PropertyKey, PropertyKind,
    SpreadElement, TemplateLiteralExpr, UnaryOperator, UpdateOperator,
};
use crate::ast::types::TypeParameterInstantiation;
use crate::generator::{Emitter, GeneratorError, GeneratorResult};
use crate::layout::{BreakMode, Layout, SequenceOptions};
use crate::lexical;
use crate::precedence::{self, Context, GroupContext, LeftContext, Prec};

use super::paren;

impl<'a> Emitter<'a> {
    /// The general expression entry point: decides whether `expr` needs
    /// wrapping parens given `ctx`/`min_prec`, then dispatches.
    pub(crate) fn expression(&self, expr: &Expression, ctx: Context, min_prec: Prec) -> GeneratorResult<Layout> {
        let wrap = precedence::needs_parens(ctx, expr, min_prec);
        let child_ctx = if wrap { Emitter::bracketed_context() } else { ctx };
        let body = self.expression_body(expr, child_ctx)?;
        let body = if wrap { paren(body) } else { body };
        Ok(Layout::with_location(expr.location().clone(), body))
    }

    fn expression_body(&self, expr: &Expression, ctx: Context) -> GeneratorResult<Layout> {
        match expr {
            Expression::This(_) => Ok(Layout::atom("this")),
            Expression::Super(_) => Ok(Layout::atom("super")),
            Expression::Identifier(id) => Ok(Layout::identifier(id.location.clone(), id.name.clone())),
            Expression::Literal(lit) => self.literal(lit),
            Expression::Sequence { expressions, .. } => self.sequence(expressions, ctx),
            Expression::Array { elements, .. } => self.array(elements),
            Expression::Object { properties, .. } => self.object(properties),
            Expression::Binary { operator, left, right, .. } => self.binary(*operator, left, right, ctx),
            Expression::Logical { operator, left, right, .. } => self.logical(*operator, left, right, ctx),
            Expression::Assignment { operator, left, right, .. } => self.assignment(*operator, left, right, ctx),
            Expression::Conditional { test, consequent, alternate, .. } => {
                self.conditional(test, consequent, alternate, ctx)
            }
            Expression::Unary { operator, argument, .. } => self.unary(*operator, argument, ctx),
            Expression::Update { operator, argument, prefix, .. } => self.update(*operator, argument, *prefix, ctx),
            Expression::Await { argument, .. } => self.await_expr(argument, ctx),
            Expression::Yield { argument, delegate, .. } => {
                self.yield_expr(argument.as_deref(), *delegate, ctx)
            }
            Expression::Call { callee, arguments, optional, .. } => self.call(callee, arguments, *optional, ctx),
            Expression::New { callee, arguments, type_arguments, .. } => {
                self.new_expr(callee, arguments, type_arguments.as_ref(), ctx)
            }
            Expression::Member { object, property, computed, optional, .. } => {
                self.member(object, property, *computed, *optional, ctx)
            }
            Expression::Function(f) => crate::generator::pattern::function_layout(self, f),
            Expression::ArrowFunction(a) => self.arrow_function(a),
            Expression::TemplateLiteral(t) => self.template_literal(t),
            Expression::TaggedTemplate { tag, quasi, type_arguments, .. } => {
                self.tagged_template(tag, quasi, type_arguments.as_ref())
            }
            Expression::JSXElement(e) => crate::generator::jsx::element(self, e),
            Expression::JSXFragment(f) => crate::generator::jsx::fragment(self, f),
            Expression::TypeCast { expression, type_annotation, .. } => {
                self.type_cast(expression, type_annotation)
            }
            Expression::Import { argument, .. } => Ok(Layout::fuse([
                Layout::atom("import("),
                self.expression(argument, Emitter::bracketed_context(), precedence::ASSIGNMENT)?,
                Layout::atom(")"),
            ])),
            Expression::MetaProperty { meta, property, .. } => Ok(Layout::fuse([
                Layout::atom(meta.name.clone()),
                Layout::atom("."),
                Layout::atom(property.name.clone()),
            ])),
            Expression::Class(c) => crate::generator::pattern::class_layout(self, c),
            Expression::Comprehension(loc) => Err(GeneratorError::unsupported("comprehension", loc)),
            Expression::GeneratorExpression(loc) => {
                Err(GeneratorError::unsupported("generator expression", loc))
            }
        }
    }

    fn literal(&self, lit: &Literal) -> GeneratorResult<Layout> {
        match lit {
            Literal::String(s) => {
                let quote = lexical::choose_quote(&s.value);
                let escaped = lexical::escape_string(&s.value, quote);
                Ok(Layout::with_location(
                    s.location.clone(),
                    Layout::atom(format!("{quote}{escaped}{quote}")),
                ))
            }
            Literal::Number(n) => {
                let shortest = lexical::shortest_number(n.value);
                Ok(Layout::with_location(
                    n.location.clone(),
                    Layout::if_pretty(Layout::atom(n.raw.clone()), Layout::atom(shortest)),
                ))
            }
            Literal::Boolean(b) => Ok(Layout::atom(if b.value { "true" } else { "false" })),
            Literal::Null(loc) => Ok(Layout::with_location(loc.clone(), Layout::atom("null"))),
            Literal::RegExp(r) => Ok(Layout::with_location(
                r.location.clone(),
                Layout::atom(format!("/{}/{}", r.pattern, r.flags)),
            )),
        }
    }

    fn sequence(&self, expressions: &[Expression], ctx: Context) -> GeneratorResult<Layout> {
        let mut items = Vec::with_capacity(expressions.len());
        for (i, e) in expressions.iter().enumerate() {
            let child_ctx = if i == 0 { ctx } else { Emitter::sibling_context(ctx) };
            items.push(self.expression(e, child_ctx, precedence::SEQUENCE + 1)?);
        }
        Ok(Layout::sequence(SequenceOptions::new(BreakMode::Never), Emitter::comma_join(items)))
    }

    fn array(&self, elements: &[ArrayElement]) -> GeneratorResult<Layout> {
        let mut items = Vec::with_capacity(elements.len());
        let mut trailing_hole = false;
        for el in elements {
            trailing_hole = matches!(el, ArrayElement::Hole);
            items.push(match el {
                ArrayElement::Hole => Layout::Empty,
                ArrayElement::Expression(e) => {
                    self.expression(e, Emitter::bracketed_context(), precedence::ASSIGNMENT)?
                }
                ArrayElement::Spread(s) => self.spread(s)?,
            });
        }
        let mut joined = Emitter::comma_join(items);
        if trailing_hole {
            // Forces arity preservation: `[1, , ,]` must not collapse to `[1, ,]`.
            joined.push(Layout::atom(","));
        }
        Ok(Layout::fuse([
            Layout::atom("["),
            Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), joined),
            Layout::atom("]"),
        ]))
    }

    fn spread(&self, spread: &SpreadElement) -> GeneratorResult<Layout> {
        let inner = self.expression(&spread.argument, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
        Ok(Layout::with_location(spread.location.clone(), Layout::fuse([Layout::atom("..."), inner])))
    }

    fn object(&self, properties: &[ObjectProperty]) -> GeneratorResult<Layout> {
        let mut items = Vec::with_capacity(properties.len());
        for (i, prop) in properties.iter().enumerate() {
            let mut entry = Vec::new();
            if i > 0 && (property_contains_function(&properties[i - 1]) || property_contains_function(prop)) {
                entry.push(Layout::if_pretty(Layout::atom("\n"), Layout::Empty));
            }
            entry.push(self.object_property(prop)?);
            items.push(Layout::fuse(entry));
        }
        Ok(Layout::fuse([
            Layout::atom("{"),
            Layout::sequence(SequenceOptions::indented(BreakMode::IfNeeded, 1), Emitter::comma_join(items)),
            Layout::atom("}"),
        ]))
    }

    fn object_property(&self, prop: &ObjectProperty) -> GeneratorResult<Layout> {
        match prop {
            ObjectProperty::Spread(s) => self.spread(s),
            ObjectProperty::Property { key, value, kind, method, shorthand, computed, location } => {
                if *shorthand {
                    return Ok(Layout::with_location(location.clone(), self.property_key(key, *computed)?));
                }
                let key_layout = self.property_key(key, *computed)?;
                match kind {
                    PropertyKind::Get | PropertyKind::Set => {
                        let keyword = if matches!(kind, PropertyKind::Get) { "get" } else { "set" };
                        let func = expect_function(value)?;
                        let method_layout = crate::generator::pattern::method_layout(self, func, key_layout)?;
                        Ok(Layout::fuse([Layout::atom(keyword), Layout::atom(" "), method_layout]))
                    }
                    PropertyKind::Init if *method => {
                        let func = expect_function(value)?;
                        crate::generator::pattern::method_layout(self, func, key_layout)
                    }
                    PropertyKind::Init => {
                        let value_layout = self.expression(value, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
                        Ok(Layout::fuse([key_layout, Layout::atom(":"), Layout::atom(" "), value_layout]))
                    }
                }
            }
        }
    }

    pub(crate) fn property_key(&self, key: &PropertyKey, computed: bool) -> GeneratorResult<Layout> {
        if computed {
            if let PropertyKey::Computed(e) = key {
                let inner = self.expression(e, Emitter::bracketed_context(), precedence::ASSIGNMENT)?;
                return Ok(Layout::fuse([Layout::atom("["), inner, Layout::atom("]")]));
            }
        }
        match key {
            PropertyKey::Identifier(id) => Ok(Layout::identifier(id.location.clone(), id.name.clone())),
            PropertyKey::StringLiteral(s) => self.literal(&Literal::String(s.clone())),
            PropertyKey::NumberLiteral(n) => self.literal(&Literal::Number(n.clone())),
            PropertyKey::PrivateName(p) => {
                Err(GeneratorError::invalid("private name cannot be used as a plain object key", &p.location))
            }
            PropertyKey::Computed(e) => self.expression(e, Emitter::bracketed_context(), precedence::ASSIGNMENT),
        }
    }

    fn binary(&self, op: BinaryOperator, left: &Expression, right: &Expression, ctx: Context) -> GeneratorResult<Layout> {
        let prec = precedence::binary_precedence(op);
        let left_layout = self.expression(left, ctx, prec)?;
        let right_layout = self.expression(right, Emitter::sibling_context(ctx), prec + 1)?;
        let op_str = binary_operator_str(op);
        let force_ugly_space = matches!(op, BinaryOperator::Add | BinaryOperator::Subtract) && rhs_needs_fusion_guard(op, right);
        Ok(Layout::fuse([left_layout, spaced_operator(op_str, force_ugly_space), right_layout]))
    }

    fn logical(&self, op: LogicalOperator, left: &Expression, right: &Expression, ctx: Context) -> GeneratorResult<Layout> {
        let prec = precedence::logical_precedence(op);
        let left_layout = self.expression(left, ctx, prec)?;
        let right_layout = self.expression(right, Emitter::sibling_context(ctx), prec + 1)?;
        let op_str = match op {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
            LogicalOperator::NullishCoalescing => "??",
        };
        Ok(Layout::fuse([left_layout, spaced_operator(op_str, false), right_layout]))
    }

    fn assignment(&self, op: AssignmentOperator, left: &Pattern, right: &Expression, ctx: Context) -> GeneratorResult<Layout> {
        let left_layout = crate::generator::pattern::assignment_target(self, left, ctx)?;
        let right_ctx = Emitter::sibling_context(ctx).with_left(LeftContext::Normal);
        let right_layout = self.expression(right, right_ctx, precedence::ASSIGNMENT)?;
        Ok(Layout::fuse([left_layout, spaced_operator(assignment_operator_str(op), false), right_layout]))
    }

    fn conditional(&self, test: &Expression, consequent: &Expression, alternate: &Expression, ctx: Context) -> GeneratorResult<Layout> {
        let test_layout = self.expression(test, ctx, precedence::CONDITIONAL + 1)?;
        let consequent_layout = self.expression(consequent, Emitter::bracketed_context(), precedence::MIN_PREC)?;
        let alternate_layout = self.expression(alternate, Emitter::sibling_context(ctx), precedence::MIN_PREC)?;
        Ok(Layout::fuse([
            test_layout,
            Layout::atom(" ? "),
            consequent_layout,
            Layout::atom(" : "),
            alternate_layout,
        ]))
    }

    fn unary(&self, op: UnaryOperator, argument: &Expression, ctx: Context) -> GeneratorResult<Layout> {
        let (op_str, alphabetic) = unary_operator_str(op);
        let child_left = match op {
            UnaryOperator::Plus => LeftContext::InPlusOp,
            UnaryOperator::Minus => LeftContext::InMinusOp,
            _ => LeftContext::Normal,
        };
        let child_ctx = Context { left: child_left, group: ctx.group };
        let arg_is_parenthesized = precedence::needs_parens(child_ctx, argument, precedence::UNARY);
        let arg_layout = self.expression(argument, child_ctx, precedence::UNARY)?;
        let needs_space = alphabetic && !arg_is_parenthesized;
        let mut parts = vec![Layout::atom(op_str)];
        if needs_space {
            parts.push(Layout::atom(" "));
        }
        parts.push(arg_layout);
        Ok(Layout::fuse(parts))
    }

    fn update(&self, op: UpdateOperator, argument: &Expression, prefix: bool, ctx: Context) -> GeneratorResult<Layout> {
        let op_str = match op {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        };
        let child_ctx = if prefix {
            let left = match op {
                UpdateOperator::Increment => LeftContext::InPlusOp,
                UpdateOperator::Decrement => LeftContext::InMinusOp,
            };
            Context { left, group: ctx.group }
        } else {
            ctx
        };
        let arg_layout = self.expression(argument, child_ctx, precedence::MEMBER)?;
        Ok(if prefix {
            Layout::fuse([Layout::atom(op_str), arg_layout])
        } else {
            Layout::fuse([arg_layout, Layout::atom(op_str)])
        })
    }

    fn await_expr(&self, argument: &Expression, ctx: Context) -> GeneratorResult<Layout> {
        let child_ctx = Emitter::sibling_context(ctx);
        let parenthesized = precedence::needs_parens(child_ctx, argument, precedence::UNARY);
        let arg_layout = self.expression(argument, child_ctx, precedence::UNARY)?;
        let mut parts = vec![Layout::atom("await")];
        if !parenthesized {
            parts.push(Layout::atom(" "));
        }
        parts.push(arg_layout);
        Ok(Layout::fuse(parts))
    }

    fn yield_expr(&self, argument: Option<&Expression>, delegate: bool, ctx: Context) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom("yield")];
        if delegate {
            parts.push(Layout::atom("*"));
        }
        if let Some(arg) = argument {
            parts.push(Layout::atom(" "));
            parts.push(self.expression(arg, Emitter::sibling_context(ctx), precedence::YIELD + 1)?);
        }
        Ok(Layout::fuse(parts))
    }

    fn call(&self, callee: &Expression, arguments: &[Argument], optional: bool, ctx: Context) -> GeneratorResult<Layout> {
        let callee_layout = self.expression(callee, ctx, precedence::MEMBER)?;
        let args_layout = self.arguments(arguments)?;
        Ok(Layout::fuse([
            callee_layout,
            Layout::atom(if optional { "?." } else { "" }),
            Layout::atom("("),
            args_layout,
            Layout::atom(")"),
        ]))
    }

    fn arguments(&self, arguments: &[Argument]) -> GeneratorResult<Layout> {
        let mut items = Vec::with_capacity(arguments.len());
        for arg in arguments {
            items.push(match arg {
                Argument::Expression(e) => self.expression(e, Emitter::bracketed_context(), precedence::ASSIGNMENT)?,
                Argument::Spread(s) => self.spread(s)?,
            });
        }
        Ok(Layout::sequence(SequenceOptions::new(BreakMode::IfNeeded), Emitter::comma_join(items)))
    }

    fn new_expr(
        &self,
        callee: &Expression,
        arguments: &[Argument],
        type_arguments: Option<&TypeParameterInstantiation>,
        ctx: Context,
    ) -> GeneratorResult<Layout> {
        let low_precedence = precedence::expression_precedence(callee) < precedence::MEMBER;
        let force_parens = low_precedence || contains_call(callee);
        let callee_ctx = if force_parens { Emitter::bracketed_context() } else { ctx };
        let callee_body = self.expression_body(callee, callee_ctx)?;
        let callee_body = Layout::with_location(callee.location().clone(), callee_body);
        let callee_layout = if force_parens { paren(callee_body) } else { callee_body };

        let type_args_layout = match type_arguments {
            Some(t) => crate::generator::types::type_instantiation(self, t)?,
            None => Layout::Empty,
        };
        let args_layout = self.arguments(arguments)?;
        Ok(Layout::fuse([
            Layout::atom("new "),
            callee_layout,
            type_args_layout,
            Layout::atom("("),
            args_layout,
            Layout::atom(")"),
        ]))
    }

    fn member_object(&self, object: &Expression, computed: bool, ctx: Context) -> GeneratorResult<Layout> {
        if !computed {
            if let Expression::Literal(Literal::Number(n)) = object {
                let shortest = lexical::shortest_number(n.value);
                let pretty_form = match lexical::disambiguate_numeric_member_object(&n.raw, &shortest, true) {
                    lexical::NumericObjectForm::Parenthesized(s) => paren(Layout::atom(s)),
                    lexical::NumericObjectForm::Plain(s) | lexical::NumericObjectForm::TrailingDot(s) => Layout::atom(s),
                };
                let ugly_form = match lexical::disambiguate_numeric_member_object(&n.raw, &shortest, false) {
                    lexical::NumericObjectForm::TrailingDot(s) => Layout::atom(format!("{s}.")),
                    lexical::NumericObjectForm::Plain(s) | lexical::NumericObjectForm::Parenthesized(s) => Layout::atom(s),
                };
                return Ok(Layout::with_location(n.location.clone(), Layout::if_pretty(pretty_form, ugly_form)));
            }
        }
        self.expression(object, ctx, precedence::MEMBER)
    }

    fn member(
        &self,
        object: &Expression,
        property: &MemberProperty,
        computed: bool,
        optional: bool,
        ctx: Context,
    ) -> GeneratorResult<Layout> {
        let object_layout = self.member_object(object, computed, ctx)?;
        match (property, computed) {
            (MemberProperty::Identifier(id), false) => Ok(Layout::fuse([
                object_layout,
                Layout::atom(if optional { "?." } else { "." }),
                Layout::identifier(id.location.clone(), id.name.clone()),
            ])),
            (MemberProperty::PrivateName(p), false) => Ok(Layout::fuse([
                object_layout,
                Layout::atom(if optional { "?." } else { "." }),
                Layout::atom(format!("#{}", p.name)),
            ])),
            (MemberProperty::Expression(e), true) => {
                let prop_layout = self.expression(e, Emitter::bracketed_context(), precedence::SEQUENCE)?;
                Ok(Layout::fuse([
                    object_layout,
                    Layout::atom(if optional { "?.[" } else { "[" }),
                    prop_layout,
                    Layout::atom("]"),
                ]))
            }
            _ => Err(GeneratorError::invalid("member property/computed flag mismatch", object.location())),
        }
    }

    fn arrow_function(&self, arrow: &crate::ast::ArrowFunctionExpr) -> GeneratorResult<Layout> {
        let mut parts = Vec::new();
        if arrow.is_async {
            parts.push(Layout::atom("async "));
        }
        if let Some(tp) = &arrow.type_parameters {
            parts.push(crate::generator::types::type_parameter_declaration(self, tp)?);
        }

        let elide_parens = arrow.params.len() == 1
            && arrow.type_parameters.is_none()
            && arrow.return_type.is_none()
            && matches!(
                &arrow.params[0],
                Pattern::Identifier(id) if id.type_annotation.is_none() && !id.optional
            );

        if elide_parens {
            if let Pattern::Identifier(id) = &arrow.params[0] {
                parts.push(Layout::identifier(id.location.clone(), id.name.clone()));
            }
        } else {
            parts.push(Layout::atom("("));
            parts.push(crate::generator::pattern::parameter_list(self, &arrow.params)?);
            parts.push(Layout::atom(")"));
        }

        if let Some(rt) = &arrow.return_type {
            parts.push(Layout::atom(": "));
            parts.push(crate::generator::types::type_layout(self, rt)?);
        }
        if arrow.predicate {
            parts.push(Layout::atom(" %checks"));
        }
        parts.push(Layout::atom(" => "));
        match &arrow.body {
            crate::ast::ArrowBody::Block(block) => parts.push(crate::generator::stmt::block(self, block)?),
            crate::ast::ArrowBody::Expression(e) => {
                let ctx = Context::normal().with_group(GroupContext::InArrowFuncBody);
                parts.push(self.expression(e, ctx, precedence::ASSIGNMENT)?);
            }
        }
        Ok(Layout::fuse(parts))
    }

    fn template_literal(&self, t: &TemplateLiteralExpr) -> GeneratorResult<Layout> {
        let mut parts = vec![Layout::atom("`")];
        for (i, quasi) in t.quasis.iter().enumerate() {
            parts.push(Layout::atom(quasi.raw.clone()));
            if !quasi.tail {
                if let Some(expr) = t.expressions.get(i) {
                    parts.push(Layout::atom("${"));
                    parts.push(self.expression(expr, Emitter::bracketed_context(), precedence::SEQUENCE)?);
                    parts.push(Layout::atom("}"));
                }
            }
        }
        parts.push(Layout::atom("`"));
        Ok(Layout::fuse(parts))
    }

    fn tagged_template(
        &self,
        tag: &Expression,
        quasi: &TemplateLiteralExpr,
        type_arguments: Option<&TypeParameterInstantiation>,
    ) -> GeneratorResult<Layout> {
        let tag_ctx = Context::normal().with_left(LeftContext::InTaggedTemplate);
        let tag_layout = self.expression(tag, tag_ctx, precedence::MEMBER)?;
        let type_args_layout = match type_arguments {
            Some(t) => crate::generator::types::type_instantiation(self, t)?,
            None => Layout::Empty,
        };
        let quasi_layout = self.template_literal(quasi)?;
        Ok(Layout::fuse([tag_layout, type_args_layout, quasi_layout]))
    }

    fn type_cast(&self, expression: &Expression, type_annotation: &crate::ast::types::Type) -> GeneratorResult<Layout> {
        let expr_layout = self.expression(expression, Emitter::bracketed_context(), precedence::SEQUENCE)?;
        let type_layout = crate::generator::types::type_layout(self, type_annotation)?;
        Ok(paren(Layout::fuse([expr_layout, Layout::atom(": "), type_layout])))
    }
}

fn expect_function(value: &Expression) -> GeneratorResult<&crate::ast::Function> {
    match value {
        Expression::Function(f) => Ok(f),
        other => Err(GeneratorError::invalid("method/getter/setter value must be a function", other.location())),
    }
}

/// Recursive one-shot scanner used only by `new` (spec.md §4.4, §5, §9):
/// does the callee subtree contain a call expression that would otherwise
/// bind its argument list to the call instead of to `new`?
fn contains_call(expr: &Expression) -> bool {
    match expr {
        Expression::Call { .. } => true,
        Expression::Member { object, .. } => contains_call(object),
        Expression::TaggedTemplate { tag, .. } => contains_call(tag),
        Expression::New { callee, .. } => contains_call(callee),
        _ => false,
    }
}

fn property_contains_function(prop: &ObjectProperty) -> bool {
    match prop {
        ObjectProperty::Spread(_) => false,
        ObjectProperty::Property { value, kind, .. } => {
            matches!(kind, PropertyKind::Get | PropertyKind::Set)
                || matches!(value, Expression::Function(_) | Expression::ArrowFunction(_))
                || matches!(value, Expression::Object { properties, .. } if properties.iter().any(property_contains_function))
        }
    }
}

fn rhs_needs_fusion_guard(op: BinaryOperator, right: &Expression) -> bool {
    match op {
        BinaryOperator::Add => {
            matches!(right, Expression::Unary { operator: UnaryOperator::Plus, .. })
                || matches!(right, Expression::Update { operator: UpdateOperator::Increment, prefix: true, .. })
        }
        BinaryOperator::Subtract => {
            matches!(right, Expression::Unary { operator: UnaryOperator::Minus, .. })
                || matches!(right, Expression::Update { operator: UpdateOperator::Decrement, prefix: true, .. })
        }
        _ => false,
    }
}

/// `op` with pretty-mode spaces always, ugly-mode spaces only when
/// `force_ugly_space` guards against token fusion (e.g. `x + +y`).
fn spaced_operator(op: &str, force_ugly_space: bool) -> Layout {
    let pretty = Layout::fuse([Layout::atom(" "), Layout::atom(op), Layout::atom(" ")]);
    let ugly = if force_ugly_space {
        Layout::fuse([Layout::atom(" "), Layout::atom(op), Layout::atom(" ")])
    } else {
        Layout::atom(op)
    };
    Layout::if_pretty(pretty, ugly)
}

fn binary_operator_str(op: BinaryOperator) -> &'static str {
    use BinaryOperator::*;
    match op {
        Add => "+",
        Subtract => "-",
        Multiply => "*",
        Divide => "/",
        Remainder => "%",
        Exponentiation => "**",
        Equal => "==",
        NotEqual => "!=",
        StrictEqual => "===",
        StrictNotEqual => "!==",
        LessThan => "<",
        LessThanEqual => "<=",
        GreaterThan => ">",
        GreaterThanEqual => ">=",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        BitwiseAnd => "&",
        BitwiseOr => "|",
        BitwiseXor => "^",
        In => "in",
        Instanceof => "instanceof",
    }
}

/// Returns the operator token and whether it is alphabetic (and so always
/// needs a separating space unless the argument is already parenthesized).
fn unary_operator_str(op: UnaryOperator) -> (&'static str, bool) {
    use UnaryOperator::*;
    match op {
        Plus => ("+", false),
        Minus => ("-", false),
        LogicalNot => ("!", false),
        BitwiseNot => ("~", false),
        Typeof => ("typeof", true),
        Void => ("void", true),
        Delete => ("delete", true),
    }
}

fn assignment_operator_str(op: AssignmentOperator) -> &'static str {
    use AssignmentOperator::*;
    match op {
        Assign => "=",
        AddAssign => "+=",
        SubtractAssign => "-=",
        MultiplyAssign => "*=",
        DivideAssign => "/=",
        RemainderAssign => "%=",
        ExponentiationAssign => "**=",
        LeftShiftAssign => "<<=",
        RightShiftAssign => ">>=",
        UnsignedRightShiftAssign => ">>>=",
        BitwiseAndAssign => "&=",
        BitwiseOrAssign => "|=",
        BitwiseXorAssign => "^=",
        LogicalAndAssign => "&&=",
        LogicalOrAssign => "||=",
        NullishCoalescingAssign => "??=",
    }
}
