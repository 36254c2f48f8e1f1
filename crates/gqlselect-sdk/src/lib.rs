//! Compile typed field selections into GraphQL documents.
//!
//! Describe which members of which resolver results you want as a
//! [`Selection`] tree, hand it to a [`Compiler`] together with a
//! [`SchemaProvider`], and get back the query or mutation text.

// Lets the derive macro's `::gqlselect_sdk` paths resolve inside this crate too.
extern crate self as gqlselect_sdk;

pub mod arguments;
pub mod capture;
pub mod compiler;
pub mod error;
pub mod schema;
pub mod sdl;
pub mod selection;
pub mod value;

// Re-export key types at crate root for convenience.
pub use compiler::{compile, Compiler, OPERATION_NAME};
pub use error::{CompileError, SchemaError};
pub use gqlselect_derive::GraphQLType;
pub use schema::{
    GraphQLType, MemberDescription, SchemaDescription, SchemaProvider, TypeDescription, TypeKind,
    TypeRef,
};
pub use sdl::SdlOptions;
pub use selection::{
    ArgumentBinding, DirectField, ObjectSelection, OperationKind, ResolverCall, Selection,
};
pub use value::{CapturedPath, Value, ValueExpression};
