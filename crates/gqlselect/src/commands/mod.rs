pub mod compile;
pub mod defaults;

use anyhow::Context;
use clap::Args;
use gqlselect_sdk::{SchemaDescription, SdlOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the schema comes from and how to read it.
#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// GraphQL SDL file describing the schema.
    #[arg(long, short = 's')]
    pub schema: PathBuf,
    /// Declare members in PascalCase, keeping schema names as wire names.
    #[arg(long)]
    pub pascal_case: bool,
    /// Treat undeclared types as scalars instead of failing.
    #[arg(long)]
    pub unknown_as_scalar: bool,
    /// Keep going past SDL syntax errors.
    #[arg(long)]
    pub lenient: bool,
}

impl SchemaArgs {
    pub fn options(&self) -> SdlOptions {
        SdlOptions {
            pascal_case_members: self.pascal_case,
            unknown_types_as_scalar: self.unknown_as_scalar,
            lenient_parse: self.lenient,
        }
    }

    pub fn load(&self) -> anyhow::Result<SchemaDescription> {
        let text = read_input(&self.schema)?;
        SchemaDescription::from_sdl(&text, &self.options())
            .with_context(|| format!("Could not load schema {}", self.schema.display()))
    }
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Could not read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}
