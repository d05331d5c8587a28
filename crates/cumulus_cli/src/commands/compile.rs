//! Compile command - Compile manifests into template documents.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use walkdir::WalkDir;

use cumulus_builder::{build_template, BuildSession, Environments, TemplateManifest};
use cumulus_template::OutputFormat;

#[derive(Args)]
pub struct CompileArgs {
    /// Manifest file to compile
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory to scan recursively for manifest files
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Output format (json or yaml)
    #[arg(short, long, default_value = "yaml")]
    format: String,

    /// Directory to write compiled templates to (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Environment configuration file
    #[arg(long, env = "CUMULUS_CONFIG")]
    config: Option<PathBuf>,

    /// Active environment name
    #[arg(short, long, env = "CUMULUS_ENVIRONMENT")]
    environment: Option<String>,
}

pub fn execute(args: CompileArgs) -> Result<()> {
    let format = OutputFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("unknown output format argument: {}", args.format))?;

    let manifests = discover_manifests(&args)?;
    if manifests.is_empty() {
        anyhow::bail!("no manifest files found");
    }

    let environments = match (&args.config, &args.environment) {
        (Some(config), Some(environment)) => Some(
            Environments::from_file(config, environment)
                .context("Failed to load environment configuration")?,
        ),
        (None, Some(_)) => anyhow::bail!("--environment requires --config"),
        _ => None,
    };

    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
    }

    info!("Compiling {} manifest(s) to {}", manifests.len(), format);

    for path in &manifests {
        let manifest = TemplateManifest::from_file(path)?;

        let mut session = BuildSession::new();
        if let Some(environments) = environments.clone() {
            session = session.with_environments(environments);
        }

        let template = build_template(&manifest, &mut session)?;
        let rendered = template.compile(format)?;

        match &args.out {
            Some(out) => {
                let stem = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("template");
                let target = out.join(format!("{}.{}", stem, format.extension()));
                fs::write(&target, &rendered)?;
                println!("✅ Compiled {} -> {}", path.display(), target.display());
            }
            None => println!("{}", rendered),
        }
    }

    Ok(())
}

fn discover_manifests(args: &CompileArgs) -> Result<Vec<PathBuf>> {
    if let Some(manifest) = &args.manifest {
        return Ok(vec![manifest.clone()]);
    }

    let dir = args
        .dir
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("either --manifest or --dir is required"))?;
    if !dir.exists() {
        anyhow::bail!("manifest directory not found: {:?}", dir);
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if matches!(
            entry.path().extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        ) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}
