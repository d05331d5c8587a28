//! CLI command definitions.
//!
//! This module defines the command structure for the Cumulus CLI.

use clap::{Parser, Subcommand};

pub mod compile;
pub mod validate;

/// Cumulus - declarative infrastructure template builder
#[derive(Parser)]
#[command(name = "cumulus")]
#[command(version, about = "Cumulus - declarative infrastructure template builder")]
#[command(long_about = r#"
Cumulus builds infrastructure template documents (JSON or YAML) from
declarative resource manifests.

COMMANDS:
  compile   → Compile manifests into template documents
  validate  → Validate manifest resources against registered property specs

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile manifests into template documents
    Compile(compile::CompileArgs),

    /// Validate manifest resources against registered property specs
    Validate(validate::ValidateArgs),
}
