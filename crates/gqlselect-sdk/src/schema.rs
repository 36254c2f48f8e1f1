//! Schema description consumed by the compiler.
//!
//! The compiler never inspects host types directly. Everything it needs to
//! know about a schema (root types, member result types, wire-name overrides,
//! which members make up a default selection) comes through
//! [`SchemaProvider`]. [`SchemaDescription`] is the stock implementation,
//! built programmatically, from SDL (see [`crate::sdl`]), or from types that
//! implement [`GraphQLType`].

use crate::selection::OperationKind;
use indexmap::IndexMap;

/// What kind of GraphQL type a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Enum,
    Object,
    InputObject,
    Interface,
    Union,
}

impl TypeKind {
    /// Whether a field of this type needs a sub-selection.
    pub fn is_composite(self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface | TypeKind::Union)
    }
}

/// A GraphQL type reference (NamedType, List, NonNull wrapping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// Get the base (innermost) named type.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) => inner.base_name(),
            TypeRef::NonNull(inner) => inner.base_name(),
        }
    }

    /// Whether this is a sequence type once non-null wrapping is ignored.
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::Named(_) => false,
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
        }
    }
}

/// A field or resolver declared on a schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescription {
    /// Declared (host-side) name. Selections refer to members by this name.
    pub name: String,
    /// Name emitted in documents when it differs from the declared name.
    pub wire_name: Option<String>,
    pub ty: TypeRef,
    /// Parameter names, in declaration order.
    pub arguments: Vec<String>,
    /// The result type needs a sub-selection.
    pub composite: bool,
    pub description: Option<String>,
}

impl MemberDescription {
    /// A leaf member: no arguments, no sub-selection.
    pub fn scalar(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            wire_name: None,
            ty,
            arguments: Vec::new(),
            composite: false,
            description: None,
        }
    }

    /// A member whose result type is an object, interface or union.
    pub fn object(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            composite: true,
            ..Self::scalar(name, ty)
        }
    }

    pub fn wire_name(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    pub fn argument(mut self, name: impl Into<String>) -> Self {
        self.arguments.push(name.into());
        self
    }

    /// The name to emit: the override if present, else the declared name.
    pub fn emitted_name(&self) -> &str {
        self.wire_name.as_deref().unwrap_or(&self.name)
    }

    /// Simple members make up a type's default selection.
    pub fn is_simple(&self) -> bool {
        self.arguments.is_empty() && !self.composite
    }
}

/// A named schema type and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescription {
    pub name: String,
    pub kind: TypeKind,
    pub description: Option<String>,
    pub members: Vec<MemberDescription>,
}

impl TypeDescription {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            members: Vec::new(),
        }
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Object)
    }

    pub fn member(mut self, member: MemberDescription) -> Self {
        self.members.push(member);
        self
    }

    pub fn find_member(&self, name: &str) -> Option<&MemberDescription> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Types that can describe themselves as a schema type.
///
/// Usually implemented with `#[derive(GraphQLType)]`:
///
/// ```ignore
/// #[derive(GraphQLType)]
/// #[graphql(rename_all = "camelCase")]
/// struct User {
///     id: String,
///     display_name: String,
///     #[graphql(nested)]
///     team: Option<Team>,
/// }
///
/// let schema = SchemaDescription::new("Query").register::<User>().register::<Team>();
/// ```
pub trait GraphQLType {
    /// Schema type name.
    fn type_name() -> &'static str;

    fn describe() -> TypeDescription;
}

/// The schema queries the compiler needs.
pub trait SchemaProvider {
    /// Root type name for an operation kind.
    fn root_type(&self, kind: OperationKind) -> Option<&str>;

    fn member(&self, type_name: &str, member: &str) -> Option<&MemberDescription>;

    /// Members of a type's default selection, in declaration order.
    /// `None` when the type is unknown.
    fn simple_members(&self, type_name: &str) -> Option<Vec<&MemberDescription>>;

    /// Wire-name override of a member, if it has one.
    fn wire_name(&self, type_name: &str, member: &str) -> Option<&str> {
        self.member(type_name, member)
            .and_then(|m| m.wire_name.as_deref())
    }
}

/// A pre-built schema description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescription {
    pub query_type: String,
    pub mutation_type: Option<String>,
    pub types: IndexMap<String, TypeDescription>,
}

impl Default for SchemaDescription {
    fn default() -> Self {
        Self::new("Query")
    }
}

impl SchemaDescription {
    pub fn new(query_type: impl Into<String>) -> Self {
        Self {
            query_type: query_type.into(),
            mutation_type: None,
            types: IndexMap::new(),
        }
    }

    pub fn with_mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = Some(name.into());
        self
    }

    /// Add a type, replacing any previous type of the same name.
    pub fn with_type(mut self, ty: TypeDescription) -> Self {
        self.insert(ty);
        self
    }

    /// Add the description of a [`GraphQLType`].
    pub fn register<T: GraphQLType>(self) -> Self {
        self.with_type(T::describe())
    }

    pub fn insert(&mut self, ty: TypeDescription) {
        self.types.insert(ty.name.clone(), ty);
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeDescription> {
        self.types.get(type_name)
    }
}

impl SchemaProvider for SchemaDescription {
    fn root_type(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
        }
    }

    fn member(&self, type_name: &str, member: &str) -> Option<&MemberDescription> {
        self.get(type_name)?.find_member(member)
    }

    fn simple_members(&self, type_name: &str) -> Option<Vec<&MemberDescription>> {
        self.get(type_name)
            .map(|ty| ty.members.iter().filter(|m| m.is_simple()).collect())
    }
}
