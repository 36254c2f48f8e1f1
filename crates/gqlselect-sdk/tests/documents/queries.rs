use super::*;
use chrono::{FixedOffset, TimeZone};
use gqlselect_sdk::{CapturedPath, CompileError, ResolverCall, Value};
use uuid::Uuid;

// ── Operation shape ─────────────────────────────────────────────────────────

#[test]
fn explicit_selection_example() {
    let doc = query(ObjectSelection::new().call(
        "users",
        ResolverCall::new("GetUsers")
            .arg("activeOnly", true)
            .select(ObjectSelection::new().field("id", "Id").field("name", "Name")),
    ));
    assert_eq!(
        doc,
        "query BaseGraphQLClient {\n  users: GetUsers(activeOnly:true) {\n    id: Id\n    name: Name\n  }\n}\n"
    );
}

#[test]
fn default_selection_example() {
    let schema = SchemaDescription::from_sdl(
        r#"
        type User { Id: ID! Name: String! }
        type Query { GetUserCount: User }
        "#,
        &SdlOptions::default(),
    )
    .unwrap();
    let selection = ObjectSelection::new().call("count", ResolverCall::new("GetUserCount"));
    let doc = Compiler::new(&schema).query(&selection.into()).unwrap();
    assert_eq!(
        doc,
        "query BaseGraphQLClient {\n  count: GetUserCount {\n    Id: Id\n    Name: Name\n  }\n}\n"
    );
}

#[test]
fn direct_fields_at_root() {
    let doc = query(ObjectSelection::new().field("version", "Version"));
    assert_eq!(doc, "query BaseGraphQLClient {\n  version: Version\n}\n");
}

// ── Default selection synthesis ─────────────────────────────────────────────

#[test]
fn default_selection_skips_composite_and_parameterized_members() {
    let doc = query(ObjectSelection::new().call("user", ResolverCall::new("GetUserCount")));
    assert_eq!(
        doc,
        "query BaseGraphQLClient {\n  user: GetUserCount {\n    Id: Id\n    Name: Name\n    Role: Role\n  }\n}\n"
    );
}

#[test]
fn default_selection_over_list_uses_element_type() {
    let doc = query(ObjectSelection::new().call("teams", ResolverCall::new("Teams")));
    assert_eq!(
        doc,
        "query BaseGraphQLClient {\n  teams: Teams {\n    Id: Id\n    Name: Name\n  }\n}\n"
    );
}

#[test]
fn nested_default_selection_is_indented() {
    let doc = query(ObjectSelection::new().call(
        "user",
        ResolverCall::new("GetUser")
            .arg("id", "u1")
            .select(
                ObjectSelection::new()
                    .field("name", "Name")
                    .call("team", ResolverCall::new("Team")),
            ),
    ));
    assert_eq!(
        doc,
        concat!(
            "query BaseGraphQLClient {\n",
            "  user: GetUser(id: \"u1\") {\n",
            "    name: Name\n",
            "    team: Team {\n",
            "      Id: Id\n",
            "      Name: Name\n",
            "    }\n",
            "  }\n",
            "}\n",
        )
    );
}

#[test]
fn resolver_with_arguments_inside_nested_selection() {
    let doc = query(ObjectSelection::new().call(
        "teams",
        ResolverCall::new("Teams").select(ObjectSelection::new().call(
            "firstMembers",
            ResolverCall::new("Members").arg("first", 2).arg("after", Value::Null),
        )),
    ));
    assert!(doc.contains("    firstMembers: Members(first: 2) {\n      Id: Id\n"));
}

#[test]
fn pascal_case_schema_emits_wire_names() {
    let options = SdlOptions {
        pascal_case_members: true,
        ..SdlOptions::default()
    };
    let schema = SchemaDescription::from_sdl(
        r#"
        type User { id: ID! displayName: String }
        type Query { users: [User!]! }
        "#,
        &options,
    )
    .unwrap();
    let selection = ObjectSelection::new().call("all", ResolverCall::new("Users"));
    let doc = Compiler::new(&schema).query(&selection.into()).unwrap();
    assert_eq!(
        doc,
        "query BaseGraphQLClient {\n  all: users {\n    Id: id\n    DisplayName: displayName\n  }\n}\n"
    );
}

// ── Arguments ───────────────────────────────────────────────────────────────

#[test]
fn string_argument_is_quoted() {
    let doc = query(ObjectSelection::new().call(
        "user",
        ResolverCall::new("GetUser")
            .arg("id", "u1")
            .select(ObjectSelection::new().field("id", "Id")),
    ));
    assert!(doc.contains("  user: GetUser(id: \"u1\") {\n"));
}

#[test]
fn null_argument_among_several_is_skipped() {
    let none: Option<String> = None;
    let doc = query(ObjectSelection::new().call(
        "user",
        ResolverCall::new("GetUser")
            .arg("name", none)
            .arg("id", "u1"),
    ));
    assert!(doc.contains("  user: GetUser(id: \"u1\") {\n"));
}

#[test]
fn all_argument_kinds() {
    let since = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap();
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let doc = query(ObjectSelection::new().call(
        "users",
        ResolverCall::new("GetUsers")
            .arg("activeOnly", false)
            .arg("ids", vec![id])
            .arg("since", since)
            .arg("role", Value::Enum("ADMIN".to_string()))
            .select(ObjectSelection::new().field("id", "Id")),
    ));
    assert!(doc.contains(concat!(
        "users: GetUsers(activeOnly:false, ",
        "ids: [\"67e55044-10b1-426f-9247-bb680e5fe0c8\"], ",
        "since: \"2024-01-01T00:00:00.0000000+00:00\", ",
        "role: ADMIN) {\n"
    )));
}

#[test]
fn captured_struct_member_is_inlined() {
    #[derive(serde::Serialize)]
    struct Filter {
        active: bool,
        owner: Owner,
    }
    #[derive(serde::Serialize)]
    struct Owner {
        id: String,
    }

    let filter = Filter {
        active: true,
        owner: Owner {
            id: "u42".to_string(),
        },
    };
    let captured = CapturedPath::capture(&filter).unwrap();
    let doc = query(
        ObjectSelection::new()
            .call(
                "users",
                ResolverCall::new("GetUsers")
                    .arg("activeOnly", captured.clone().member("active"))
                    .select(ObjectSelection::new().field("id", "Id")),
            )
            .call(
                "owner",
                ResolverCall::new("GetUser").arg("id", captured.member("owner").member("id")),
            ),
    );
    assert!(doc.contains("  users: GetUsers(activeOnly:true) {\n"));
    assert!(doc.contains("  owner: GetUser(id: \"u42\") {\n"));
}

#[test]
fn captured_enum_and_date_keep_their_kind() {
    #[derive(serde::Serialize)]
    #[allow(clippy::upper_case_acronyms)]
    enum Role {
        ADMIN,
    }
    #[derive(serde::Serialize)]
    struct Filter {
        role: Role,
        since: chrono::DateTime<chrono::Utc>,
    }

    let captured = CapturedPath::capture(&Filter {
        role: Role::ADMIN,
        since: chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    })
    .unwrap();
    let doc = query(ObjectSelection::new().call(
        "users",
        ResolverCall::new("GetUsers")
            .arg("role", captured.clone().member("role"))
            .arg("since", captured.member("since"))
            .select(ObjectSelection::new().field("id", "Id")),
    ));
    assert!(doc.contains(
        "  users: GetUsers(role: ADMIN, since: \"2024-01-01T00:00:00.0000000+00:00\") {\n"
    ));
}

#[test]
fn unresolved_captured_path_aborts() {
    let schema = schema();
    let selection: Selection = ObjectSelection::new()
        .call(
            "user",
            ResolverCall::new("GetUser").arg("id", CapturedPath::new(Value::Null).member("id")),
        )
        .into();
    let err = Compiler::new(&schema).query(&selection).unwrap_err();
    assert!(matches!(err, CompileError::UnresolvedPath { .. }));
}

// ── Properties ──────────────────────────────────────────────────────────────

fn sample_selections() -> Vec<ObjectSelection> {
    vec![
        ObjectSelection::new(),
        ObjectSelection::new().field("version", "Version"),
        ObjectSelection::new().call("teams", ResolverCall::new("Teams")),
        ObjectSelection::new()
            .call(
                "teams",
                ResolverCall::new("Teams").select(
                    ObjectSelection::new().field("id", "Id").call(
                        "members",
                        ResolverCall::new("Members").arg("first", 5).select(
                            ObjectSelection::new()
                                .field("name", "Name")
                                .call("team", ResolverCall::new("Team")),
                        ),
                    ),
                ),
            )
            .call("count", ResolverCall::new("GetUserCount")),
    ]
}

#[test]
fn braces_are_balanced() {
    for selection in sample_selections() {
        assert_balanced(&query(selection));
    }
}

#[test]
fn compiling_twice_is_identical() {
    let schema = schema();
    let compiler = Compiler::new(&schema);
    for selection in sample_selections() {
        let selection = Selection::from(selection);
        assert_eq!(
            compiler.query(&selection).unwrap(),
            compiler.query(&selection).unwrap()
        );
    }
}

#[test]
fn compiles_in_parallel_threads() {
    let schema = schema();
    let selection = Selection::from(sample_selections().pop().unwrap());
    let expected = Compiler::new(&schema).query(&selection).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Compiler::new(&schema).query(&selection).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn selection_from_json_compiles() {
    let json = r#"{
        "object": {
            "users": {
                "call": {
                    "name": "GetUsers",
                    "args": [{ "name": "activeOnly", "value": { "literal": { "boolean": true } } }],
                    "select": { "object": { "id": { "field": "Id" }, "name": { "field": "Name" } } }
                }
            }
        }
    }"#;
    let selection: Selection = serde_json::from_str(json).unwrap();
    let schema = schema();
    let doc = Compiler::new(&schema).query(&selection).unwrap();
    assert_eq!(
        doc,
        "query BaseGraphQLClient {\n  users: GetUsers(activeOnly:true) {\n    id: Id\n    name: Name\n  }\n}\n"
    );
}
