use serde::Serialize;
use std::io::IsTerminal;
use tabled::{Table, Tabled};

/// How `defaults` prints a type's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Table of declared name, wire name and type.
    Human,
    Json,
    /// The `declared: wire` lines the compiler emits for the type.
    Selection,
}

/// Explicit choice wins; otherwise a table on a terminal and JSON in a pipe.
pub fn resolve_format(format: Option<Format>) -> Format {
    match format {
        Some(f) => f,
        None if std::io::stdout().is_terminal() => Format::Human,
        None => Format::Json,
    }
}

/// One member of a default selection.
#[derive(Debug, Serialize, Tabled)]
pub struct MemberRow {
    pub name: String,
    pub wire_name: String,
    #[serde(rename = "type")]
    #[tabled(rename = "type")]
    pub ty: String,
}

impl MemberRow {
    fn selection_line(&self) -> String {
        format!("{}: {}", self.name, self.wire_name)
    }
}

pub fn print_members(rows: &[MemberRow], format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        Format::Human if rows.is_empty() => println!("No simple members; the default selection is empty."),
        Format::Human => println!("{}", Table::new(rows)),
        Format::Selection => {
            for row in rows {
                println!("{}", row.selection_line());
            }
        }
    }
    Ok(())
}
