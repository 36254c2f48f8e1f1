//! Build a [`SchemaDescription`] from GraphQL SDL.
//!
//! Parsing is done by `apollo-parser`. Object and interface types become
//! types with members; scalars, enums, input objects and unions are recorded
//! with their kind so member result types can be classified.

use crate::error::SchemaError;
use crate::schema::{MemberDescription, SchemaDescription, TypeDescription, TypeKind, TypeRef};
use apollo_parser::cst;
use apollo_parser::Parser;
use heck::ToUpperCamelCase;
use std::collections::HashMap;

/// Built-in GraphQL scalar names.
const BUILTIN_SCALARS: &[&str] = &["String", "Int", "Float", "Boolean", "ID"];

/// Schema loading behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdlOptions {
    /// Declare members in UpperCamelCase and keep the schema name as the
    /// wire-name override, the way generated host bindings name them.
    pub pascal_case_members: bool,
    /// Treat references to undeclared types as scalars instead of failing.
    pub unknown_types_as_scalar: bool,
    /// Log syntax errors and keep whatever the parser recovered.
    pub lenient_parse: bool,
}

/// A field as read from the CST, before its result type is classified.
struct RawField {
    name: String,
    description: Option<String>,
    ty: TypeRef,
    arguments: Vec<String>,
}

impl SchemaDescription {
    /// Parse SDL text into a schema description.
    pub fn from_sdl(schema_text: &str, options: &SdlOptions) -> Result<Self, SchemaError> {
        parse(schema_text, options)
    }
}

pub fn parse(schema_text: &str, options: &SdlOptions) -> Result<SchemaDescription, SchemaError> {
    let parser = Parser::new(schema_text);
    let tree = parser.parse();

    let errors: Vec<String> = tree.errors().map(|e| e.message().to_string()).collect();
    if !errors.is_empty() {
        if !options.lenient_parse {
            return Err(SchemaError::Parse(errors));
        }
        // apollo-parser is error-resilient; keep what it recovered.
        for message in &errors {
            tracing::warn!("Schema parse warning: {}", message);
        }
    }

    let doc = tree.document();

    let mut types: Vec<TypeDescription> = Vec::new();
    let mut raw_fields: HashMap<String, Vec<RawField>> = HashMap::new();
    let mut type_kind_map: HashMap<String, TypeKind> = HashMap::new();
    let mut query_type: Option<String> = None;
    let mut mutation_type: Option<String> = None;

    for s in BUILTIN_SCALARS {
        type_kind_map.insert(s.to_string(), TypeKind::Scalar);
    }

    for def in doc.definitions() {
        match def {
            cst::Definition::SchemaDefinition(s) => {
                for root in s.root_operation_type_definitions() {
                    let Some(op) = root.operation_type() else {
                        continue;
                    };
                    let name = root
                        .named_type()
                        .map(|nt| extract_name(&nt.name()))
                        .unwrap_or_default();
                    if op.query_token().is_some() {
                        query_type = Some(name);
                    } else if op.mutation_token().is_some() {
                        mutation_type = Some(name);
                    }
                }
            }
            cst::Definition::ScalarTypeDefinition(s) => {
                let name = extract_name(&s.name());
                type_kind_map.insert(name.clone(), TypeKind::Scalar);
                types.push(described(name, TypeKind::Scalar, &s.description()));
            }
            cst::Definition::EnumTypeDefinition(e) => {
                let name = extract_name(&e.name());
                type_kind_map.insert(name.clone(), TypeKind::Enum);
                types.push(described(name, TypeKind::Enum, &e.description()));
            }
            cst::Definition::ObjectTypeDefinition(o) => {
                let name = extract_name(&o.name());
                type_kind_map.insert(name.clone(), TypeKind::Object);
                raw_fields.insert(name.clone(), extract_fields(&o.fields_definition()));
                types.push(described(name, TypeKind::Object, &o.description()));
            }
            cst::Definition::InterfaceTypeDefinition(i) => {
                let name = extract_name(&i.name());
                type_kind_map.insert(name.clone(), TypeKind::Interface);
                raw_fields.insert(name.clone(), extract_fields(&i.fields_definition()));
                types.push(described(name, TypeKind::Interface, &i.description()));
            }
            cst::Definition::InputObjectTypeDefinition(i) => {
                let name = extract_name(&i.name());
                type_kind_map.insert(name.clone(), TypeKind::InputObject);
                types.push(described(name, TypeKind::InputObject, &i.description()));
            }
            cst::Definition::UnionTypeDefinition(u) => {
                let name = extract_name(&u.name());
                type_kind_map.insert(name.clone(), TypeKind::Union);
                types.push(described(name, TypeKind::Union, &u.description()));
            }
            _ => {}
        }
    }

    let mut schema = SchemaDescription::new(query_type.unwrap_or_else(|| "Query".to_string()));
    schema.mutation_type = mutation_type.or_else(|| {
        type_kind_map
            .contains_key("Mutation")
            .then(|| "Mutation".to_string())
    });

    for mut ty in types {
        for field in raw_fields.remove(&ty.name).unwrap_or_default() {
            let base = field.ty.base_name();
            let kind = match type_kind_map.get(base) {
                Some(kind) => *kind,
                None if options.unknown_types_as_scalar => {
                    tracing::warn!("Unknown type '{}' on {}.{}, treating it as a scalar", base, ty.name, field.name);
                    TypeKind::Scalar
                }
                None => {
                    return Err(SchemaError::UnknownType {
                        type_name: base.to_string(),
                        referenced_by: format!("{}.{}", ty.name, field.name),
                    })
                }
            };
            ty.members.push(member(field, kind, options));
        }
        schema.insert(ty);
    }

    tracing::debug!(types = schema.types.len(), query = %schema.query_type, "loaded schema");
    Ok(schema)
}

fn described(name: String, kind: TypeKind, description: &Option<cst::Description>) -> TypeDescription {
    TypeDescription {
        description: extract_description(description),
        ..TypeDescription::new(name, kind)
    }
}

fn member(field: RawField, kind: TypeKind, options: &SdlOptions) -> MemberDescription {
    let (name, wire_name) = if options.pascal_case_members {
        let declared = field.name.to_upper_camel_case();
        let wire = (declared != field.name).then_some(field.name);
        (declared, wire)
    } else {
        (field.name, None)
    };
    MemberDescription {
        name,
        wire_name,
        ty: field.ty,
        arguments: field.arguments,
        composite: kind.is_composite(),
        description: field.description,
    }
}

fn extract_name(name: &Option<cst::Name>) -> String {
    name.as_ref()
        .map(|n| n.text().to_string())
        .unwrap_or_default()
}

fn extract_description(desc: &Option<cst::Description>) -> Option<String> {
    desc.as_ref()
        .and_then(|d| d.string_value())
        .map(String::from)
        .filter(|s| !s.is_empty())
}

fn extract_type(ty: &Option<cst::Type>) -> TypeRef {
    match ty {
        None => TypeRef::named("String"),
        Some(t) => match t {
            cst::Type::NamedType(nt) => TypeRef::Named(extract_name(&nt.name())),
            cst::Type::ListType(lt) => TypeRef::list(extract_type(&lt.ty())),
            cst::Type::NonNullType(nnt) => {
                if let Some(named) = nnt.named_type() {
                    TypeRef::non_null(TypeRef::Named(extract_name(&named.name())))
                } else if let Some(list) = nnt.list_type() {
                    TypeRef::non_null(TypeRef::list(extract_type(&list.ty())))
                } else {
                    TypeRef::non_null(TypeRef::named("String"))
                }
            }
        },
    }
}

fn extract_fields(fields_def: &Option<cst::FieldsDefinition>) -> Vec<RawField> {
    let Some(fd) = fields_def else {
        return Vec::new();
    };
    fd.field_definitions()
        .map(|f| RawField {
            name: extract_name(&f.name()),
            description: extract_description(&f.description()),
            ty: extract_type(&f.ty()),
            arguments: extract_arguments(&f.arguments_definition()),
        })
        .collect()
}

fn extract_arguments(args_def: &Option<cst::ArgumentsDefinition>) -> Vec<String> {
    let Some(ad) = args_def else {
        return Vec::new();
    };
    ad.input_value_definitions()
        .map(|iv| extract_name(&iv.name()))
        .collect()
}
