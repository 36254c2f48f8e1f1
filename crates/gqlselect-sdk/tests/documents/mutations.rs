use super::*;
use gqlselect_sdk::{CompileError, ResolverCall, Value, ValueExpression};
use indexmap::IndexMap;

#[test]
fn mutation_keyword_and_constructed_input() {
    let mut input = IndexMap::new();
    input.insert("Name".to_string(), Value::from("Ada"));
    input.insert("Role".to_string(), Value::Enum("ADMIN".to_string()));
    let doc = mutation(ObjectSelection::new().call(
        "created",
        ResolverCall::new("CreateUser")
            .arg("input", ValueExpression::constructed(Value::Object(input)))
            .arg("notify", true)
            .select(ObjectSelection::new().field("id", "Id")),
    ));
    assert_eq!(
        doc,
        concat!(
            "mutation BaseGraphQLClient {\n",
            "  created: CreateUser(input: {Name: \"Ada\", Role: ADMIN}, notify:true) {\n",
            "    id: Id\n",
            "  }\n",
            "}\n",
        )
    );
    assert_balanced(&doc);
}

#[test]
fn constructed_from_host_struct() {
    #[derive(serde::Serialize)]
    #[allow(non_snake_case)]
    struct UserInput {
        Name: String,
        Role: Option<String>,
    }
    let input = Value::capture(&UserInput {
        Name: "Grace".to_string(),
        Role: None,
    })
    .unwrap();
    let doc = mutation(ObjectSelection::new().call(
        "created",
        ResolverCall::new("CreateUser").arg("input", ValueExpression::constructed(input)),
    ));
    assert!(doc.contains("  created: CreateUser(input: {Name: \"Grace\"}) {\n    Id: Id\n"));
}

#[test]
fn scalar_result_has_no_body() {
    let doc = mutation(
        ObjectSelection::new().call("deleted", ResolverCall::new("DeleteUser").arg("id", "u1")),
    );
    assert_eq!(
        doc,
        "mutation BaseGraphQLClient {\n  deleted: DeleteUser(id: \"u1\")\n}\n"
    );
}

#[test]
fn several_mutations_in_one_document() {
    let doc = mutation(
        ObjectSelection::new()
            .call("a", ResolverCall::new("DeleteUser").arg("id", "1"))
            .call("b", ResolverCall::new("DeleteUser").arg("id", "2")),
    );
    assert_eq!(
        doc,
        "mutation BaseGraphQLClient {\n  a: DeleteUser(id: \"1\")\n  b: DeleteUser(id: \"2\")\n}\n"
    );
}

#[test]
fn query_fields_are_unknown_to_mutation_root() {
    let schema = schema();
    let selection = Selection::from(
        ObjectSelection::new().call("count", ResolverCall::new("GetUserCount")),
    );
    let err = Compiler::new(&schema).mutation(&selection).unwrap_err();
    match err {
        CompileError::UnknownMember { type_name, member } => {
            assert_eq!(type_name, "Mutation");
            assert_eq!(member, "GetUserCount");
        }
        other => panic!("Expected UnknownMember, got {:?}", other),
    }
}

#[test]
fn field_reference_argument_is_rejected() {
    let schema = schema();
    let selection = Selection::from(ObjectSelection::new().call(
        "deleted",
        ResolverCall::new("DeleteUser").arg("id", ValueExpression::field_ref("Id")),
    ));
    let err = Compiler::new(&schema).mutation(&selection).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported argument type field reference for 'id'"
    );
}
