use clap::Args;
use gqlselect_sdk::SchemaProvider;

use super::SchemaArgs;
use crate::output::{self, Format, MemberRow};

/// List the members a type contributes to a synthesized default selection.
///
/// Examples:
///   gqlselect defaults --schema schema.graphql User
///   gqlselect defaults -s schema.graphql --pascal-case Team --format json
///   gqlselect defaults -s schema.graphql User --format selection
#[derive(Debug, Args)]
pub struct DefaultsCmd {
    #[command(flatten)]
    pub schema: SchemaArgs,
    /// Schema type name.
    pub type_name: String,
    /// Output format. Defaults to human on a terminal, json otherwise.
    #[arg(long)]
    pub format: Option<Format>,
}

pub fn run(cmd: DefaultsCmd) -> anyhow::Result<()> {
    let schema = cmd.schema.load()?;
    let members = schema
        .simple_members(&cmd.type_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown type '{}'", cmd.type_name))?;

    let rows: Vec<MemberRow> = members
        .iter()
        .map(|m| MemberRow {
            name: m.name.clone(),
            wire_name: m.emitted_name().to_string(),
            ty: render_type(&m.ty),
        })
        .collect();

    output::print_members(&rows, output::resolve_format(cmd.format))
}

fn render_type(ty: &gqlselect_sdk::TypeRef) -> String {
    use gqlselect_sdk::TypeRef;
    match ty {
        TypeRef::Named(name) => name.clone(),
        TypeRef::List(inner) => format!("[{}]", render_type(inner)),
        TypeRef::NonNull(inner) => format!("{}!", render_type(inner)),
    }
}
