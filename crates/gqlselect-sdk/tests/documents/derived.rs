use super::*;
use gqlselect_sdk::{
    CompileError, GraphQLType, MemberDescription, ResolverCall, SchemaProvider, TypeDescription, TypeRef,
};

#[derive(GraphQLType)]
#[allow(dead_code)]
#[graphql(rename_all = "camelCase")]
struct Account {
    id: String,
    display_name: String,
    #[graphql(name = "mail")]
    email: Option<String>,
    #[graphql(nested)]
    team: Option<Box<Squad>>,
    #[graphql(nested)]
    friends: Vec<Account>,
    tags: Vec<String>,
}

#[derive(GraphQLType)]
#[allow(dead_code)]
#[graphql(name = "Team")]
struct Squad {
    id: String,
    r#type: String,
}

fn derived_schema() -> SchemaDescription {
    SchemaDescription::new("Query")
        .with_type(
            TypeDescription::object("Query")
                .member(MemberDescription::object(
                    "accounts",
                    TypeRef::list(TypeRef::named(Account::type_name())),
                ))
                .member(
                    MemberDescription::object("team", TypeRef::named(Squad::type_name()))
                        .argument("id"),
                ),
        )
        .register::<Account>()
        .register::<Squad>()
}

#[test]
fn type_names() {
    assert_eq!(Account::type_name(), "Account");
    assert_eq!(Squad::type_name(), "Team");
}

#[test]
fn derived_members_and_overrides() {
    let ty = Account::describe();
    assert_eq!(ty.name, "Account");
    let names: Vec<&str> = ty.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "display_name", "email", "team", "friends", "tags"]
    );

    let display = ty.find_member("display_name").unwrap();
    assert_eq!(display.wire_name.as_deref(), Some("displayName"));
    assert!(display.is_simple());

    // Explicit name wins over rename_all.
    assert_eq!(ty.find_member("email").unwrap().wire_name.as_deref(), Some("mail"));
    // Unchanged by camelCase, so no override.
    assert_eq!(ty.find_member("id").unwrap().wire_name, None);
}

#[test]
fn nested_members_are_composite() {
    let ty = Account::describe();

    let team = ty.find_member("team").unwrap();
    assert!(team.composite);
    assert_eq!(team.ty, TypeRef::named("Team"));

    let friends = ty.find_member("friends").unwrap();
    assert!(friends.composite);
    assert!(friends.ty.is_list());
    assert_eq!(friends.ty.base_name(), "Account");

    let tags = ty.find_member("tags").unwrap();
    assert!(!tags.composite);
    assert!(tags.ty.is_list());
}

#[test]
fn raw_identifier_field_is_declared_without_prefix() {
    let ty = Squad::describe();
    assert!(ty.find_member("type").is_some());
    assert_eq!(ty.find_member("type").unwrap().wire_name, None);
}

#[test]
fn default_selection_from_derived_type() {
    let schema = derived_schema();
    let selection = ObjectSelection::new().call("all", ResolverCall::new("accounts"));
    let doc = Compiler::new(&schema).query(&selection.into()).unwrap();
    assert_eq!(
        doc,
        concat!(
            "query BaseGraphQLClient {\n",
            "  all: accounts {\n",
            "    id: id\n",
            "    display_name: displayName\n",
            "    email: mail\n",
            "    tags: tags\n",
            "  }\n",
            "}\n",
        )
    );
}

#[test]
fn explicit_selection_over_derived_type_uses_overrides() {
    let schema = derived_schema();
    assert_eq!(schema.wire_name("Account", "display_name"), Some("displayName"));
    let selection = ObjectSelection::new().call(
        "all",
        ResolverCall::new("accounts").select(
            ObjectSelection::new()
                .field("name", "display_name")
                .call("squad", ResolverCall::new("team")),
        ),
    );
    let doc = Compiler::new(&schema).query(&selection.into()).unwrap();
    assert_eq!(
        doc,
        concat!(
            "query BaseGraphQLClient {\n",
            "  all: accounts {\n",
            "    name: displayName\n",
            "    squad: team {\n",
            "      id: id\n",
            "      type: type\n",
            "    }\n",
            "  }\n",
            "}\n",
        )
    );
    assert_balanced(&doc);
}

#[test]
fn unregistered_nested_type_fails() {
    let schema = SchemaDescription::new("Query")
        .with_type(TypeDescription::object("Query").member(MemberDescription::object(
            "accounts",
            TypeRef::list(TypeRef::named(Account::type_name())),
        )))
        .register::<Account>();
    let selection = ObjectSelection::new().call(
        "all",
        ResolverCall::new("accounts")
            .select(ObjectSelection::new().call("squad", ResolverCall::new("team"))),
    );
    let err = Compiler::new(&schema).query(&selection.into()).unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnknownType { ref type_name, ref member } if type_name == "Team" && member == "team"
    ));
}
