//! Validate command - Validate manifest resources against property specs.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use cumulus_builder::{build_template, BuildSession, TemplateManifest};
use cumulus_schema::SchemaRegistry;

#[derive(Args)]
pub struct ValidateArgs {
    /// Manifest file to validate
    #[arg(short, long)]
    manifest: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating manifest {:?}", args.manifest);

    let manifest = TemplateManifest::from_file(&args.manifest)?;

    // Building the template also surfaces unknown references and bad names.
    let mut session = BuildSession::new();
    let template = build_template(&manifest, &mut session)?;

    let registry = SchemaRegistry::builtin();

    let mut all_passed = true;
    let mut checked = 0;
    for (decl, resource) in manifest.resources.iter().zip(template.resources()) {
        if !registry.contains(&decl.kind) {
            println!(
                "⚠️  {} ({}): no property specification registered, skipping",
                resource.name(),
                decl.kind
            );
            continue;
        }

        checked += 1;
        match registry.validate(&decl.kind, resource.properties()) {
            Ok(()) => println!("✅ {} ({})", resource.name(), decl.kind),
            Err(err) => {
                all_passed = false;
                println!("❌ {} ({}): {}", resource.name(), decl.kind, err);
            }
        }
    }

    println!();
    if all_passed {
        println!(
            "✅ Validation passed ({} of {} resources checked)",
            checked,
            manifest.resources.len()
        );
        Ok(())
    } else {
        anyhow::bail!("validation failed")
    }
}
