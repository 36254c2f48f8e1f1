use anyhow::Context;
use clap::Args;
use gqlselect_sdk::{Compiler, OperationKind, Selection};
use std::path::PathBuf;

use super::{read_input, SchemaArgs};

/// Compile a JSON selection file.
///
/// Examples:
///   gqlselect compile --schema schema.graphql --selection users.json
///   cat delete.json | gqlselect compile -s schema.graphql --selection - --mutation
#[derive(Debug, Args)]
pub struct CompileCmd {
    #[command(flatten)]
    pub schema: SchemaArgs,
    /// JSON selection file (`-` reads stdin).
    #[arg(long)]
    pub selection: PathBuf,
    /// Emit a mutation instead of a query.
    #[arg(long)]
    pub mutation: bool,
}

pub fn run(cmd: CompileCmd) -> anyhow::Result<()> {
    let schema = cmd.schema.load()?;
    let text = read_input(&cmd.selection)?;
    let selection: Selection = serde_json::from_str(&text)
        .with_context(|| format!("Invalid selection in {}", cmd.selection.display()))?;

    let kind = if cmd.mutation {
        OperationKind::Mutation
    } else {
        OperationKind::Query
    };
    let document = Compiler::new(&schema).compile(&selection, kind)?;
    print!("{}", document);
    Ok(())
}
