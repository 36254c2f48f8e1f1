//! Selection-to-document compiler.
//!
//! [`Compiler`] walks a [`Selection`] tree and emits the GraphQL document it
//! describes:
//!
//! ```text
//! query BaseGraphQLClient {
//!   users: GetUsers(activeOnly:true) {
//!     id: Id
//!     name: Name
//!   }
//! }
//! ```
//!
//! The walker tracks which schema type each object selection applies to, so
//! wire-name overrides and default selections come from the
//! [`SchemaProvider`]. Compilation is pure: the same tree and schema always
//! produce the same bytes.

use crate::arguments::render_arguments;
use crate::error::CompileError;
use crate::schema::{MemberDescription, SchemaDescription, SchemaProvider};
use crate::selection::{ObjectSelection, OperationKind, ResolverCall, Selection};

/// Every compiled document declares this operation name.
pub const OPERATION_NAME: &str = "BaseGraphQLClient";

const INDENT: &str = "  ";

/// Compile `selection` against `schema` in one call.
pub fn compile<S: SchemaProvider + ?Sized>(
    schema: &S,
    selection: &Selection,
    kind: OperationKind,
) -> Result<String, CompileError> {
    Compiler::new(schema).compile(selection, kind)
}

/// Compiles selections against a borrowed schema description.
#[derive(Debug)]
pub struct Compiler<'a, S: SchemaProvider + ?Sized = SchemaDescription> {
    schema: &'a S,
}

impl<S: SchemaProvider + ?Sized> Clone for Compiler<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: SchemaProvider + ?Sized> Copy for Compiler<'_, S> {}

impl<'a, S: SchemaProvider + ?Sized> Compiler<'a, S> {
    pub fn new(schema: &'a S) -> Self {
        Self { schema }
    }

    pub fn query(&self, selection: &Selection) -> Result<String, CompileError> {
        self.compile(selection, OperationKind::Query)
    }

    pub fn mutation(&self, selection: &Selection) -> Result<String, CompileError> {
        self.compile(selection, OperationKind::Mutation)
    }

    /// Emit the full document for `selection`.
    ///
    /// The root must be an object selection; anything else is a
    /// [`CompileError::Shape`] naming the expression kind.
    pub fn compile(&self, selection: &Selection, kind: OperationKind) -> Result<String, CompileError> {
        let Selection::Object(root) = selection else {
            return Err(CompileError::Shape {
                kind: selection.kind(),
            });
        };

        let mut doc = format!("{} {} {{\n", kind, OPERATION_NAME);
        self.write_object(&mut doc, root, self.schema.root_type(kind), 1)?;
        doc.push_str("}\n");

        tracing::debug!(operation = %kind, fields = root.len(), bytes = doc.len(), "compiled document");
        Ok(doc)
    }

    /// One line per entry, at `depth`.
    fn write_object(
        &self,
        out: &mut String,
        selection: &ObjectSelection,
        parent: Option<&str>,
        depth: usize,
    ) -> Result<(), CompileError> {
        for (output_name, field) in selection.iter() {
            let rendered = self.field_selection(output_name, field, parent, depth)?;
            tracing::trace!(field = output_name, depth, "emitting field");
            out.push_str(&indent(depth));
            out.push_str(output_name);
            out.push_str(": ");
            out.push_str(&rendered);
            out.push('\n');
        }
        Ok(())
    }

    /// Everything after `outputName: ` on a field line.
    fn field_selection(
        &self,
        output_name: &str,
        field: &Selection,
        parent: Option<&str>,
        depth: usize,
    ) -> Result<String, CompileError> {
        match field {
            Selection::Field(direct) => Ok(self.wire_name(parent, &direct.name).to_string()),
            Selection::Call(call) => self.resolver_call(call, parent, depth),
            other => Err(CompileError::FieldShape {
                field: output_name.to_string(),
                kind: other.kind(),
            }),
        }
    }

    fn wire_name<'n>(&self, parent: Option<&str>, member: &'n str) -> &'n str
    where
        'a: 'n,
    {
        let schema: &'a S = self.schema;
        parent
            .and_then(|ty| schema.wire_name(ty, member))
            .unwrap_or(member)
    }

    fn resolver_call(
        &self,
        call: &ResolverCall,
        parent: Option<&str>,
        depth: usize,
    ) -> Result<String, CompileError> {
        let member = parent.and_then(|ty| self.schema.member(ty, &call.name));

        let mut select = self.wire_name(parent, &call.name).to_string();
        if let Some(args) = render_arguments(&call.args)? {
            select.push_str(&args);
        }

        match call.select.as_deref() {
            Some(Selection::Object(nested)) => {
                select.push_str(" {\n");
                let nested_type = member.map(|m| m.ty.base_name());
                self.write_object(&mut select, nested, nested_type, depth + 1)?;
            }
            Some(other) => {
                return Err(CompileError::Shape { kind: other.kind() });
            }
            None => {
                let Some(member) = member else {
                    return Err(CompileError::UnknownMember {
                        type_name: parent.unwrap_or_default().to_string(),
                        member: call.name.clone(),
                    });
                };
                // Scalar and enum results take no sub-selection.
                if !member.composite {
                    return Ok(select);
                }
                select.push_str(" {\n");
                self.write_default_selection(&mut select, member, depth + 1)?;
            }
        }

        select.push_str(&indent(depth));
        select.push('}');
        Ok(select)
    }

    /// One `declared: wire` line per simple member of the member's result type.
    fn write_default_selection(
        &self,
        out: &mut String,
        member: &MemberDescription,
        depth: usize,
    ) -> Result<(), CompileError> {
        // base_name() is the element type for list results.
        let type_name = member.ty.base_name();
        let members = self
            .schema
            .simple_members(type_name)
            .ok_or_else(|| CompileError::UnknownType {
                type_name: type_name.to_string(),
                member: member.name.clone(),
            })?;
        if members.is_empty() {
            tracing::warn!(type_name, "default selection is empty");
        }
        for field in members {
            out.push_str(&indent(depth));
            out.push_str(&field.name);
            out.push_str(": ");
            out.push_str(field.emitted_name());
            out.push('\n');
        }
        Ok(())
    }
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}
