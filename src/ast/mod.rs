//! # AST data model
//!
//! The input data model the layout generator consumes (spec.md §3): an
//! ESTree-shaped tree extended with Flow type annotations and JSX. Every node
//! is serde-tagged the way the teacher's `parser::ast_types` module tags its
//! `Statement`/`Expression`/`Pattern` enums, so an AST can be constructed
//! either by hand (as the tests in this crate do) or deserialized from JSON
//! produced by an external parser — the parser itself is not this crate's
//! concern (spec.md §1).
//!
//! Node variants carry their own `Location` rather than the tree being a
//! uniform `(location, payload)` pair, which keeps pattern matching flat and
//! matches how the teacher's AST enums are shaped (`#[serde(tag = "type")]`
//! variants with inline fields).

pub mod jsx;
pub mod location;
pub mod types;

pub use jsx::trim_jsx_text;
pub use location::{Location, Position};

use serde::{Deserialize, Serialize};

/// An identifier. Carries an optional Flow type annotation because the same
/// node shape is reused for plain references (`x`) and annotated bindings
/// (`x: number` in a parameter list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    pub location: Location,
    pub name: String,
    pub type_annotation: Option<Box<types::Type>>,
    pub optional: bool,
}

impl Identifier {
    pub fn new(location: Location, name: impl Into<String>) -> Self {
        Self { location, name: name.into(), type_annotation: None, optional: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateName {
    pub location: Location,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringLiteral {
    pub location: Location,
    pub value: String,
    pub raw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub location: Location,
    pub value: f64,
    pub raw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub location: Location,
    pub value: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegExpLiteral {
    pub location: Location,
    pub pattern: String,
    pub flags: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Literal {
    String(StringLiteral),
    Number(NumberLiteral),
    Boolean(BooleanLiteral),
    Null(Location),
    RegExp(RegExpLiteral),
}

impl Literal {
    pub fn location(&self) -> &Location {
        match self {
            Literal::String(l) => &l.location,
            Literal::Number(l) => &l.location,
            Literal::Boolean(l) => &l.location,
            Literal::Null(l) => l,
            Literal::RegExp(l) => &l.location,
        }
    }
}

/// Object/class member key. `Computed` holds an arbitrary expression; the
/// other variants are the non-computed shorthand forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyKey {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    PrivateName(PrivateName),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadElement {
    pub location: Location,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArrayElement {
    Expression(Expression),
    Spread(SpreadElement),
    /// An elided element, e.g. the middle slot of `[1, , 3]`.
    Hole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Argument {
    Expression(Expression),
    Spread(SpreadElement),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectProperty {
    Property {
        location: Location,
        key: PropertyKey,
        value: Expression,
        kind: PropertyKind,
        method: bool,
        shorthand: bool,
        computed: bool,
    },
    Spread(SpreadElement),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateElement {
    pub location: Location,
    pub raw: String,
    pub cooked: Option<String>,
    pub tail: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLiteralExpr {
    pub location: Location,
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MemberProperty {
    Identifier(Identifier),
    PrivateName(PrivateName),
    Expression(Box<Expression>),
}

/// Function header and body shared by declarations, expressions, and class
/// methods — the three contexts that all use the identical production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub location: Location,
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    pub is_async: bool,
    pub is_generator: bool,
    pub type_parameters: Option<types::TypeParameterDeclaration>,
    pub return_type: Option<Box<types::Type>>,
    /// Flow `%checks` predicate function.
    pub predicate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowFunctionExpr {
    pub location: Location,
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    pub is_async: bool,
    pub type_parameters: Option<types::TypeParameterDeclaration>,
    pub return_type: Option<Box<types::Type>>,
    pub predicate: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponentiation,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    In,
    Instanceof,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    NullishCoalescing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    LogicalNot,
    BitwiseNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    RemainderAssign,
    ExponentiationAssign,
    LeftShiftAssign,
    RightShiftAssign,
    UnsignedRightShiftAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    LogicalAndAssign,
    LogicalOrAssign,
    NullishCoalescingAssign,
}

/// Expressions (spec.md §3: "20+ variants"). `Comprehension` and
/// `GeneratorExpression` are markers only — the emitter fails on them per
/// §4.4 and §7.1, they carry no payload worth modeling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    This(Location),
    Super(Location),
    Array {
        location: Location,
        elements: Vec<ArrayElement>,
    },
    Object {
        location: Location,
        properties: Vec<ObjectProperty>,
    },
    Sequence {
        location: Location,
        expressions: Vec<Expression>,
    },
    Identifier(Identifier),
    Literal(Literal),
    Function(Function),
    ArrowFunction(ArrowFunctionExpr),
    Assignment {
        location: Location,
        operator: AssignmentOperator,
        left: Box<Pattern>,
        right: Box<Expression>,
    },
    Binary {
        location: Location,
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Logical {
        location: Location,
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Conditional {
        location: Location,
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
    Call {
        location: Location,
        callee: Box<Expression>,
        arguments: Vec<Argument>,
        optional: bool,
    },
    New {
        location: Location,
        callee: Box<Expression>,
        arguments: Vec<Argument>,
        type_arguments: Option<types::TypeParameterInstantiation>,
    },
    Member {
        location: Location,
        object: Box<Expression>,
        property: MemberProperty,
        computed: bool,
        optional: bool,
    },
    Unary {
        location: Location,
        operator: UnaryOperator,
        argument: Box<Expression>,
    },
    Update {
        location: Location,
        operator: UpdateOperator,
        argument: Box<Expression>,
        prefix: bool,
    },
    Await {
        location: Location,
        argument: Box<Expression>,
    },
    Yield {
        location: Location,
        argument: Option<Box<Expression>>,
        delegate: bool,
    },
    TaggedTemplate {
        location: Location,
        tag: Box<Expression>,
        quasi: TemplateLiteralExpr,
        type_arguments: Option<types::TypeParameterInstantiation>,
    },
    TemplateLiteral(TemplateLiteralExpr),
    JSXElement(Box<jsx::JSXElement>),
    JSXFragment(Box<jsx::JSXFragment>),
    TypeCast {
        location: Location,
        expression: Box<Expression>,
        type_annotation: Box<types::Type>,
    },
    Import {
        location: Location,
        argument: Box<Expression>,
    },
    MetaProperty {
        location: Location,
        meta: Identifier,
        property: Identifier,
    },
    Class(Box<Class>),
    Comprehension(Location),
    GeneratorExpression(Location),
}

impl Expression {
    pub fn location(&self) -> &Location {
        match self {
            Expression::This(l) | Expression::Super(l) | Expression::Comprehension(l) | Expression::GeneratorExpression(l) => l,
            Expression::Array { location, .. }
            | Expression::Object { location, .. }
            | Expression::Sequence { location, .. }
            | Expression::Assignment { location, .. }
            | Expression::Binary { location, .. }
            | Expression::Logical { location, .. }
            | Expression::Conditional { location, .. }
            | Expression::Call { location, .. }
            | Expression::New { location, .. }
            | Expression::Member { location, .. }
            | Expression::Unary { location, .. }
            | Expression::Update { location, .. }
            | Expression::Await { location, .. }
            | Expression::Yield { location, .. }
            | Expression::TaggedTemplate { location, .. }
            | Expression::TypeCast { location, .. }
            | Expression::Import { location, .. }
            | Expression::MetaProperty { location, .. } => location,
            Expression::Identifier(id) => &id.location,
            Expression::Literal(lit) => lit.location(),
            Expression::Function(f) => &f.location,
            Expression::ArrowFunction(a) => &a.location,
            Expression::TemplateLiteral(t) => &t.location,
            Expression::JSXElement(e) => &e.location,
            Expression::JSXFragment(f) => &f.location,
            Expression::Class(c) => &c.location,
        }
    }
}

/// Destructuring / binding patterns (spec.md §4.6). `Expression` covers
/// assignment targets that are member expressions (`obj.x = 1`), which are
/// syntactically patterns but not destructuring forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    ArrayPattern {
        location: Location,
        elements: Vec<Option<Pattern>>,
        type_annotation: Option<Box<types::Type>>,
    },
    ObjectPattern {
        location: Location,
        properties: Vec<ObjectPatternProperty>,
        type_annotation: Option<Box<types::Type>>,
    },
    AssignmentPattern {
        location: Location,
        left: Box<Pattern>,
        right: Box<Expression>,
    },
    RestElement {
        location: Location,
        argument: Box<Pattern>,
    },
    Expression(Box<Expression>),
}

impl Pattern {
    pub fn location(&self) -> &Location {
        match self {
            Pattern::Identifier(id) => &id.location,
            Pattern::ArrayPattern { location, .. }
            | Pattern::ObjectPattern { location, .. }
            | Pattern::AssignmentPattern { location, .. }
            | Pattern::RestElement { location, .. } => location,
            Pattern::Expression(e) => e.location(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectPatternProperty {
    Property {
        location: Location,
        key: PropertyKey,
        value: Box<Pattern>,
        computed: bool,
        shorthand: bool,
    },
    RestElement {
        location: Location,
        argument: Box<Pattern>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClassElement {
    Method {
        location: Location,
        key: PropertyKey,
        value: Function,
        kind: MethodKind,
        is_static: bool,
        is_private: bool,
        computed: bool,
        decorators: Vec<Expression>,
    },
    Property {
        location: Location,
        key: PropertyKey,
        value: Option<Expression>,
        is_static: bool,
        is_private: bool,
        computed: bool,
        type_annotation: Option<Box<types::Type>>,
        decorators: Vec<Expression>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBody {
    pub location: Location,
    pub body: Vec<ClassElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub location: Location,
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub super_type_parameters: Option<types::TypeParameterInstantiation>,
    pub type_parameters: Option<types::TypeParameterDeclaration>,
    pub implements: Vec<types::Type>,
    pub body: ClassBody,
    pub decorators: Vec<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockStatement {
    pub location: Location,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum VariableDeclarationKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub location: Location,
    pub id: Pattern,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ForInit {
    VariableDeclaration {
        location: Location,
        kind: VariableDeclarationKind,
        declarations: Vec<VariableDeclarator>,
    },
    Expression(Expression),
}

/// The left-hand side of a `for-in`/`for-of`: either a fresh declaration
/// (`for (const x in y)`) or an existing binding target (`for (x in y)`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ForXLeft {
    VariableDeclaration {
        location: Location,
        kind: VariableDeclarationKind,
        declarator: VariableDeclarator,
    },
    Pattern(Pattern),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchClause {
    pub location: Location,
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchCase {
    pub location: Location,
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ImportKind {
    Value,
    Type,
    Typeof,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifier {
    Default { local: Identifier },
    Namespace { local: Identifier },
    Named { imported: Identifier, local: Identifier, import_kind: ImportKind },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSpecifier {
    pub local: Identifier,
    pub exported: Identifier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportDefaultDeclarationKind {
    Expression(Expression),
    Function(Function),
    Class(Class),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeclareModuleId {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
}

/// Statements (spec.md §3: "30+ variants including Flow `DeclareX`,
/// `TypeAlias`, `OpaqueType`, `Interface`").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    VariableDeclaration {
        location: Location,
        kind: VariableDeclarationKind,
        declarations: Vec<VariableDeclarator>,
    },
    FunctionDeclaration(Function),
    ClassDeclaration(Class),
    ExpressionStatement {
        location: Location,
        expression: Expression,
    },
    BlockStatement(BlockStatement),
    ReturnStatement {
        location: Location,
        argument: Option<Expression>,
    },
    IfStatement {
        location: Location,
        test: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },
    WhileStatement {
        location: Location,
        test: Expression,
        body: Box<Statement>,
    },
    DoWhileStatement {
        location: Location,
        body: Box<Statement>,
        test: Expression,
    },
    ForStatement {
        location: Location,
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
    },
    ForInStatement {
        location: Location,
        left: ForXLeft,
        right: Expression,
        body: Box<Statement>,
    },
    ForOfStatement {
        location: Location,
        left: ForXLeft,
        right: Expression,
        body: Box<Statement>,
        is_await: bool,
    },
    BreakStatement {
        location: Location,
        label: Option<Identifier>,
    },
    ContinueStatement {
        location: Location,
        label: Option<Identifier>,
    },
    DebuggerStatement(Location),
    EmptyStatement(Location),
    ThrowStatement {
        location: Location,
        argument: Expression,
    },
    TryStatement {
        location: Location,
        block: BlockStatement,
        handler: Option<CatchClause>,
        finalizer: Option<BlockStatement>,
    },
    SwitchStatement {
        location: Location,
        discriminant: Expression,
        cases: Vec<SwitchCase>,
    },
    LabeledStatement {
        location: Location,
        label: Identifier,
        body: Box<Statement>,
    },
    ImportDeclaration {
        location: Location,
        specifiers: Vec<ImportSpecifier>,
        source: StringLiteral,
        import_kind: ImportKind,
    },
    ExportNamedDeclaration {
        location: Location,
        declaration: Option<Box<Statement>>,
        specifiers: Vec<ExportSpecifier>,
        source: Option<StringLiteral>,
    },
    ExportDefaultDeclaration {
        location: Location,
        declaration: ExportDefaultDeclarationKind,
    },
    ExportAllDeclaration {
        location: Location,
        source: StringLiteral,
        exported: Option<Identifier>,
    },
    TypeAlias {
        location: Location,
        id: Identifier,
        type_parameters: Option<types::TypeParameterDeclaration>,
        right: Box<types::Type>,
    },
    OpaqueType {
        location: Location,
        id: Identifier,
        type_parameters: Option<types::TypeParameterDeclaration>,
        impltype: Option<Box<types::Type>>,
        supertype: Option<Box<types::Type>>,
    },
    InterfaceDeclaration {
        location: Location,
        id: Identifier,
        type_parameters: Option<types::TypeParameterDeclaration>,
        extends: Vec<types::Type>,
        body: types::ObjectType,
    },
    DeclareVariable {
        location: Location,
        id: Identifier,
        type_annotation: Box<types::Type>,
    },
    DeclareFunction {
        location: Location,
        id: Identifier,
        type_annotation: Box<types::Type>,
        predicate: bool,
    },
    DeclareClass {
        location: Location,
        id: Identifier,
        type_parameters: Option<types::TypeParameterDeclaration>,
        extends: Vec<types::Type>,
        body: types::ObjectType,
    },
    DeclareModule {
        location: Location,
        id: DeclareModuleId,
        body: BlockStatement,
    },
    DeclareModuleExports {
        location: Location,
        type_annotation: Box<types::Type>,
    },
    DeclareExportDeclaration {
        location: Location,
        declaration: Option<Box<Statement>>,
        specifiers: Vec<ExportSpecifier>,
        source: Option<StringLiteral>,
        default: bool,
    },
    DeclareInterface {
        location: Location,
        id: Identifier,
        type_parameters: Option<types::TypeParameterDeclaration>,
        extends: Vec<types::Type>,
        body: types::ObjectType,
    },
    DeclareOpaqueType {
        location: Location,
        id: Identifier,
        type_parameters: Option<types::TypeParameterDeclaration>,
        supertype: Option<Box<types::Type>>,
    },
}

impl Statement {
    pub fn location(&self) -> &Location {
        match self {
            Statement::DebuggerStatement(l) | Statement::EmptyStatement(l) => l,
            Statement::VariableDeclaration { location, .. }
            | Statement::ExpressionStatement { location, .. }
            | Statement::ReturnStatement { location, .. }
            | Statement::IfStatement { location, .. }
            | Statement::WhileStatement { location, .. }
            | Statement::DoWhileStatement { location, .. }
            | Statement::ForStatement { location, .. }
            | Statement::ForInStatement { location, .. }
            | Statement::ForOfStatement { location, .. }
            | Statement::BreakStatement { location, .. }
            | Statement::ContinueStatement { location, .. }
            | Statement::ThrowStatement { location, .. }
            | Statement::TryStatement { location, .. }
            | Statement::SwitchStatement { location, .. }
            | Statement::LabeledStatement { location, .. }
            | Statement::ImportDeclaration { location, .. }
            | Statement::ExportNamedDeclaration { location, .. }
            | Statement::ExportDefaultDeclaration { location, .. }
            | Statement::ExportAllDeclaration { location, .. }
            | Statement::TypeAlias { location, .. }
            | Statement::OpaqueType { location, .. }
            | Statement::InterfaceDeclaration { location, .. }
            | Statement::DeclareVariable { location, .. }
            | Statement::DeclareFunction { location, .. }
            | Statement::DeclareClass { location, .. }
            | Statement::DeclareModule { location, .. }
            | Statement::DeclareModuleExports { location, .. }
            | Statement::DeclareExportDeclaration { location, .. }
            | Statement::DeclareInterface { location, .. }
            | Statement::DeclareOpaqueType { location, .. } => location,
            Statement::FunctionDeclaration(f) => &f.location,
            Statement::ClassDeclaration(c) => &c.location,
            Statement::BlockStatement(b) => &b.location,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ProgramSourceType {
    Script,
    Module,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub location: Location,
    pub body: Vec<Statement>,
    pub source_type: ProgramSourceType,
}

/// A single leading comment, preserved only for the docblock-merging logic
/// in `generator::program` (spec.md §4.9) — comments elsewhere are dropped
/// per the Non-goals in spec.md §1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub location: Location,
    pub text: String,
    pub block: bool,
}

/// Splits a statement list at the first statement that is not a directive
/// prologue entry (a bare string-literal expression statement, e.g.
/// `"use strict";`). Used by the program driver to decide which leading
/// statements must stay ahead of any merged docblock comments.
pub fn partition_directives(body: &[Statement]) -> (&[Statement], &[Statement]) {
    let mut split = 0;
    for stmt in body {
        match stmt {
            Statement::ExpressionStatement { expression: Expression::Literal(Literal::String(_)), .. } => {
                split += 1;
            }
            _ => break,
        }
    }
    body.split_at(split)
}
