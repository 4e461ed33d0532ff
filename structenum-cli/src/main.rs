//! structenum CLI - inventory of enum records in a Rust source tree.
//!
//! Scans `.rs` files for structs deriving `EnumRecord`, previews the value
//! every unset member derives under a casing, and flags record shapes the
//! derive macro rejects.

mod config;
mod extract;
mod logging;
mod report;
mod scan;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::Path;
use structenum::Casing;
use tracing::info;

use crate::config::load_config;
use crate::logging::init_structured_logging;
use crate::report::{render_json, render_plain};
use crate::scan::{extract_all, gather_rs_files};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inventory of structenum enum records")]
pub struct Cli {
    /// Path to the root of the Rust project
    #[arg(default_value = ".")]
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Casing used to preview derived values (identity, lowercase, uppercase)
    #[arg(long)]
    casing: Option<String>,

    /// Directory names to skip in addition to target/, .git/, etc.
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,

    /// Exit with status 1 if any record has a rejected shape
    #[arg(long)]
    strict: bool,
}

/// Settings after merging structenum.toml with command-line flags.
#[derive(Debug, PartialEq)]
struct Settings {
    casing: Casing,
    json: bool,
    exclude: Vec<String>,
}

fn resolve_settings(cli: &Cli, root: &Path) -> Result<Settings> {
    let cfg = load_config(root)?.unwrap_or_default();

    let casing_name = cli
        .casing
        .as_deref()
        .or(cfg.casing.as_deref())
        .unwrap_or("identity");
    let casing = Casing::parse(casing_name).ok_or_else(|| {
        anyhow!("Unknown casing '{casing_name}': expected identity, lowercase or uppercase")
    })?;

    let json = cli.json
        || cfg
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"));

    let mut exclude = cfg.exclude.unwrap_or_default();
    exclude.extend(cli.exclude.iter().cloned());

    Ok(Settings {
        casing,
        json,
        exclude,
    })
}

fn main() -> Result<()> {
    init_structured_logging();

    let cli = Cli::parse();
    let root = Path::new(&cli.path);
    if !root.exists() {
        return Err(anyhow!("Path does not exist: {}", cli.path));
    }

    let settings = resolve_settings(&cli, root)?;
    let excludes: Vec<&str> = settings.exclude.iter().map(String::as_str).collect();

    let files = gather_rs_files(root, &excludes)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    let records = extract_all(&files, settings.casing);
    info!(
        files = files.len(),
        records = records.len(),
        casing = %settings.casing,
        "scan complete"
    );

    if settings.json {
        println!("{}", render_json(&records, settings.casing.as_str())?);
    } else {
        print!("{}", render_plain(&records));
    }

    if cli.strict && records.iter().any(|r| !r.is_valid()) {
        std::process::exit(1);
    }
    Ok(())
}
