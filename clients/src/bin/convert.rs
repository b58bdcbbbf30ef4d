//! `vowl-convert`: converts a Turtle ontology into a VOWL JSON document.
//!
//! **Usage:**
//! ```
//! vowl-convert --input <file.ttl> [--out <file.json>] [--config <file.toml>]
//!              [--reject-duplicates] [--compact]
//! ```
//!
//! The optional config file holds a `[registry]` table:
//!
//! ```toml
//! [registry]
//! duplicates = "reject"
//! synthetic_prefix = "http://owl2vowl.de#"
//! ```
//!
//! Logging is controlled with `RUST_LOG` and written to stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{debug, info};
use vowl_ontology::loader::turtle;
use vowl_ontology::serializer::vowl;
use vowl_ontology::{DuplicatePolicy, Registry, RegistryOptions};

/// Convert a Turtle ontology to VOWL JSON.
#[derive(Parser)]
#[command(name = "vowl-convert", about = "Convert a Turtle ontology to VOWL JSON")]
struct Args {
    /// Turtle file to convert.
    #[arg(long)]
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// TOML file with a `[registry]` table.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on an IRI defined twice instead of keeping the later definition.
    #[arg(long)]
    reject_duplicates: bool,

    /// Write compact instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

/// Contents of the `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    registry: RegistryOptions,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vowl_ontology=info,vowl_convert=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut options = match &args.config {
        Some(path) => read_config(path)?.registry,
        None => RegistryOptions::default(),
    };
    if args.reject_duplicates {
        options.duplicates = DuplicatePolicy::Reject;
    }
    debug!(?options, "registry options");

    let mut registry =
        Registry::with_options(options).context("Invalid registry options")?;
    let summary = turtle::load_path(&args.input, &mut registry)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let document = vowl::to_vowl_json(&registry).context("Failed to build VOWL document")?;
    let json_str = if args.compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
    .context("Failed to serialize VOWL document")?;

    match &args.out {
        Some(path) => {
            fs::write(path, &json_str)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = json_str.len(), "written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json_str.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("Failed to write to stdout")?;
        }
    }

    eprintln!(
        "Converted {}: {} classes, {} datatypes, {} object properties, {} datatype properties, {} individuals",
        args.input.display(),
        summary.classes,
        summary.datatypes,
        summary.object_properties,
        summary.datatype_properties,
        summary.individuals
    );
    Ok(())
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::ConfigFile;
    use vowl_ontology::DuplicatePolicy;

    #[test]
    fn config_file_reads_registry_table() {
        let config: ConfigFile = toml::from_str(
            r#"
            [registry]
            duplicates = "reject"
            synthetic_prefix = "http://example.org/gen#"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.registry.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.registry.synthetic_prefix, "http://example.org/gen#");
    }

    #[test]
    fn missing_registry_table_uses_defaults() {
        let config: ConfigFile = toml::from_str("").expect("empty config");
        assert_eq!(config.registry.duplicates, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConfigFile>("[registry]\nduplicate = \"reject\"").is_err());
    }
}
