// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ruleaudit::{
    AuditConfig, ConstraintPolicy, DEFAULT_CONFIG_PATH, Ineffectuals, PackageTree,
    find_ineffectual_rules, parse_manifest_file,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ruleaudit")]
#[command(author, version, about = "Find ineffectual constraints and ignores in dependency manifests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a manifest against the imports of a package tree
    Check {
        /// Path to the TOML manifest
        #[arg(short, long)]
        manifest: PathBuf,

        /// Path to the JSON package tree
        #[arg(short, long)]
        tree: PathBuf,

        /// Audit configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Constraint classification (overrides the config file)
        #[arg(long)]
        policy: Option<ConstraintPolicy>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            manifest,
            tree,
            config,
            policy,
            format,
        } => {
            let config = AuditConfig::load(&config)
                .with_context(|| format!("Failed to load config {}", config.display()))?;
            let policy = policy.unwrap_or(config.constraint_policy);

            let manifest = parse_manifest_file(&manifest)
                .with_context(|| format!("Failed to load manifest {}", manifest.display()))?;
            let tree = PackageTree::from_json_file(&tree)
                .with_context(|| format!("Failed to load package tree {}", tree.display()))?;

            info!("Checking rules for {} (policy: {})", tree.import_root, policy);
            let found =
                find_ineffectual_rules(&manifest, &tree, |path| config.is_std_lib(path), policy)?;

            let mut stdout = io::stdout().lock();
            match format {
                OutputFormat::Text => write_text(&mut stdout, found.as_ref())?,
                OutputFormat::Json => write_json(&mut stdout, found.as_ref())?,
            }
            stdout.flush()?;

            let code = exit_code(found.as_ref());
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}

/// Exit status: 1 when anything was reported
fn exit_code(found: Option<&Ineffectuals>) -> i32 {
    if found.is_some() { 1 } else { 0 }
}

fn write_text(out: &mut impl Write, found: Option<&Ineffectuals>) -> io::Result<()> {
    let Some(found) = found else {
        return writeln!(out, "no ineffectual rules");
    };

    for root in found.constraints() {
        writeln!(out, "ineffectual constraint: {}", root)?;
    }
    for ignore in found.ignores() {
        writeln!(out, "ineffectual ignore: {}", ignore)?;
    }
    Ok(())
}

/// Pretty JSON report; `null` when nothing was found
fn write_json(out: &mut impl Write, found: Option<&Ineffectuals>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &found)?;
    writeln!(out)?;
    Ok(())
}
