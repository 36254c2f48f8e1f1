//! Error types for selection compilation and schema loading.
//!
//! [`CompileError`] covers malformed selection shapes, unrenderable arguments
//! and schema lookups that cannot be satisfied. [`SchemaError`] covers SDL
//! parsing and type resolution failures.

use std::fmt;

/// Errors that abort a compile call. No partial document is ever returned.
#[derive(Debug)]
pub enum CompileError {
    /// The root (or an explicit nested) selection is not an object construction.
    Shape { kind: &'static str },
    /// A field entry is neither a member reference nor a resolver call.
    FieldShape { field: String, kind: &'static str },
    /// An argument value expression has no client-side value.
    UnsupportedArgument {
        parameter: String,
        kind: &'static str,
    },
    /// A captured member path does not lead to a value.
    UnresolvedPath { path: String },
    /// A resolver needs a synthesized body but the schema does not know it.
    UnknownMember { type_name: String, member: String },
    /// A composite result type needs a synthesized body but is not described.
    UnknownType { type_name: String, member: String },
    /// A host value could not be captured into a [`Value`](crate::Value).
    Capture(serde_json::Error),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { kind } => write!(
                f,
                "Selection must be an object construction, got a {} expression",
                kind
            ),
            Self::FieldShape { field, kind } => write!(
                f,
                "Field '{}' must be a member reference or a resolver call, got a {} expression",
                field, kind
            ),
            Self::UnsupportedArgument { parameter, kind } => {
                write!(f, "Unsupported argument type {} for '{}'", kind, parameter)
            }
            Self::UnresolvedPath { path } => {
                write!(f, "Captured path '{}' does not resolve to a value", path)
            }
            Self::UnknownMember { type_name, member } => {
                write!(f, "Unknown member '{}' on type '{}'", member, type_name)
            }
            Self::UnknownType { type_name, member } => write!(
                f,
                "Unknown result type '{}' of member '{}'. Describe the type or give the call an explicit selection",
                type_name, member
            ),
            Self::Capture(e) => write!(f, "Failed to capture value: {}", e),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Capture(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(e: serde_json::Error) -> Self {
        Self::Capture(e)
    }
}

/// Errors that can occur when building a schema description from SDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The SDL text has syntax errors.
    Parse(Vec<String>),
    /// A field references a type the schema never declares.
    UnknownType {
        type_name: String,
        referenced_by: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(messages) => write!(f, "Schema parse errors: {}", messages.join("; ")),
            Self::UnknownType {
                type_name,
                referenced_by,
            } => write!(
                f,
                "Unknown type '{}' referenced by '{}'. Declare it as a scalar or load the schema with unknown types as scalars",
                type_name, referenced_by
            ),
        }
    }
}

impl std::error::Error for SchemaError {}
