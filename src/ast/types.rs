//! Flow type annotation AST (spec.md §4.7).
//!
//! Mirrors the shape of the expression/statement AST in `ast::mod` — flat,
//! serde-tagged enum variants carrying their own `Location` — but kept in its
//! own module the way the teacher splits `ast_types.rs` concerns are grouped
//! by syntactic category.

use serde::{Deserialize, Serialize};

use crate::ast::location::Location;

/// A Flow type. Primitive/keyword types carry only a location; compound
/// types carry their own payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Type {
    Any(Location),
    Mixed(Location),
    Empty(Location),
    Void(Location),
    Null(Location),
    Boolean(Location),
    Number(Location),
    String(Location),
    Symbol(Location),
    BigInt(Location),
    /// `*`, the existential type.
    Existential(Location),
    /// `?T`
    Nullable {
        location: Location,
        type_annotation: Box<Type>,
    },
    Function(FunctionType),
    Object(ObjectType),
    /// `T[]`
    Array {
        location: Location,
        element_type: Box<Type>,
    },
    /// Generic reference, possibly qualified (`Foo.Bar<T>`).
    Generic {
        location: Location,
        id: QualifiedTypeIdentifier,
        type_parameters: Option<TypeParameterInstantiation>,
    },
    Union {
        location: Location,
        types: Vec<Type>,
    },
    Intersection {
        location: Location,
        types: Vec<Type>,
    },
    Tuple {
        location: Location,
        types: Vec<Type>,
    },
    Typeof {
        location: Location,
        argument: Box<Type>,
    },
    StringLiteral {
        location: Location,
        value: String,
        raw: String,
    },
    NumberLiteral {
        location: Location,
        value: f64,
        raw: String,
    },
    BooleanLiteral {
        location: Location,
        value: bool,
    },
}

impl Type {
    pub fn location(&self) -> &Location {
        match self {
            Type::Any(l)
            | Type::Mixed(l)
            | Type::Empty(l)
            | Type::Void(l)
            | Type::Null(l)
            | Type::Boolean(l)
            | Type::Number(l)
            | Type::String(l)
            | Type::Symbol(l)
            | Type::BigInt(l)
            | Type::Existential(l) => l,
            Type::Nullable { location, .. }
            | Type::Array { location, .. }
            | Type::Generic { location, .. }
            | Type::Union { location, .. }
            | Type::Intersection { location, .. }
            | Type::Tuple { location, .. }
            | Type::Typeof { location, .. }
            | Type::StringLiteral { location, .. }
            | Type::NumberLiteral { location, .. }
            | Type::BooleanLiteral { location, .. } => location,
            Type::Function(f) => &f.location,
            Type::Object(o) => &o.location,
        }
    }
}

/// A (possibly dotted) identifier used as a generic type reference, e.g.
/// `Foo` or `NS.Foo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifiedTypeIdentifier {
    pub location: Location,
    /// Dot-separated segments, `["NS", "Foo"]` for `NS.Foo`.
    pub segments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionTypeParam {
    pub location: Location,
    pub name: Option<String>,
    pub type_annotation: Box<Type>,
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionType {
    pub location: Location,
    pub type_parameters: Option<TypeParameterDeclaration>,
    pub params: Vec<FunctionTypeParam>,
    pub rest: Option<Box<FunctionTypeParam>>,
    pub return_type: Box<Type>,
}

/// An object type member: either a named property or a spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectTypeProperty {
    Property {
        location: Location,
        key: String,
        value: Box<Type>,
        optional: bool,
        variance: Option<Variance>,
        is_method: bool,
        computed: bool,
    },
    Indexer {
        location: Location,
        id: Option<String>,
        key: Box<Type>,
        value: Box<Type>,
        variance: Option<Variance>,
    },
    CallProperty {
        location: Location,
        value: FunctionType,
    },
    SpreadProperty {
        location: Location,
        argument: Box<Type>,
    },
}

/// `{ ... }` or the exact-object form `{| ... |}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectType {
    pub location: Location,
    pub properties: Vec<ObjectTypeProperty>,
    pub exact: bool,
    pub inexact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variance {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeParameter {
    pub location: Location,
    pub name: String,
    pub bound: Option<Box<Type>>,
    pub default: Option<Box<Type>>,
    pub variance: Option<Variance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeParameterDeclaration {
    pub location: Location,
    pub params: Vec<TypeParameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeParameterInstantiation {
    pub location: Location,
    pub params: Vec<Type>,
}
