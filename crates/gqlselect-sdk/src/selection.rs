//! The selection tree handed to the compiler.
//!
//! Build it with the fluent API or deserialize it from JSON:
//!
//! ```
//! use gqlselect_sdk::selection::{ObjectSelection, ResolverCall};
//!
//! let selection = ObjectSelection::new().call(
//!     "users",
//!     ResolverCall::new("GetUsers")
//!         .arg("activeOnly", true)
//!         .select(ObjectSelection::new().field("id", "Id").field("name", "Name")),
//! );
//! assert_eq!(selection.len(), 1);
//! ```

use crate::value::ValueExpression;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which operation a document declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// An expression in selection position.
///
/// Only `Object` is valid as a root or nested selection, and only `Field`
/// and `Call` are valid as the entries of an object. The compiler rejects
/// the rest with a shape error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    Object(ObjectSelection),
    Field(DirectField),
    Call(ResolverCall),
    Value(ValueExpression),
}

impl Selection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Field(_) => "field",
            Self::Call(_) => "call",
            Self::Value(_) => "value",
        }
    }
}

impl From<ObjectSelection> for Selection {
    fn from(s: ObjectSelection) -> Self {
        Self::Object(s)
    }
}

impl From<DirectField> for Selection {
    fn from(f: DirectField) -> Self {
        Self::Field(f)
    }
}

impl From<ResolverCall> for Selection {
    fn from(c: ResolverCall) -> Self {
        Self::Call(c)
    }
}

impl From<ValueExpression> for Selection {
    fn from(v: ValueExpression) -> Self {
        Self::Value(v)
    }
}

/// Output names mapped to field expressions, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectSelection {
    fields: IndexMap<String, Selection>,
}

impl ObjectSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Re-using an output name replaces the earlier entry in place.
    pub fn entry(mut self, output_name: impl Into<String>, selection: impl Into<Selection>) -> Self {
        self.fields.insert(output_name.into(), selection.into());
        self
    }

    /// Select a plain member under `output_name`.
    pub fn field(self, output_name: impl Into<String>, member: impl Into<String>) -> Self {
        self.entry(output_name, DirectField::new(member))
    }

    /// Select a resolver call under `output_name`.
    pub fn call(self, output_name: impl Into<String>, call: ResolverCall) -> Self {
        self.entry(output_name, call)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A reference to a leaf member by its declared name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectField {
    pub name: String,
}

impl DirectField {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named argument of a resolver call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentBinding {
    pub name: String,
    pub value: ValueExpression,
}

impl ArgumentBinding {
    pub fn new(name: impl Into<String>, value: impl Into<ValueExpression>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An invocation of a resolver member.
///
/// Without an explicit `select`, the compiler synthesizes the default
/// selection of the resolver's result type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverCall {
    pub name: String,
    #[serde(default)]
    pub args: Vec<ArgumentBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Box<Selection>>,
}

impl ResolverCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            select: None,
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ValueExpression>) -> Self {
        self.args.push(ArgumentBinding::new(name, value));
        self
    }

    pub fn select(mut self, selection: impl Into<Selection>) -> Self {
        self.select = Some(Box::new(selection.into()));
        self
    }
}
