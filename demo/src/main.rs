//! toolgate demo CLI
//!
//! Gates the sample tool inventory with a config file and/or command-line
//! overrides, then shows either what gets registered or the full manifest.
//!
//! Usage:
//!   cargo run -p demo -- active
//!   cargo run -p demo -- active --toolsets repos,issues --disable-tool delete_file
//!   cargo run -p demo -- manifest --read-only
//!   cargo run -p demo -- active --config toolsets.toml

mod inventory;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use toolgate_config::{assemble, ToolsetsConfig};
use toolgate_contracts::error::{ToolgateError, ToolgateResult};
use toolgate_registrar::InMemoryRegistrar;

// ── CLI definition ────────────────────────────────────────────────────────────

/// toolgate: choose which tools a server exposes.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "toolgate toolset gating demo",
    long_about = "Applies toolset enablement, read-only mode, and tool disablement\n\
                  to a sample inventory and reports the result."
)]
struct Cli {
    /// TOML file providing read_only, toolsets, and disabled_tools.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Comma-separated toolsets to enable ("all" for every toolset).
    /// Replaces the list from the config file.
    #[arg(long, value_delimiter = ',', global = true)]
    toolsets: Option<Vec<String>>,

    /// Suppress every write tool.
    #[arg(long, global = true)]
    read_only: bool,

    /// Tool name to disable. Repeatable; added to the config file's list.
    #[arg(long = "disable-tool", global = true)]
    disable_tools: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register the active tools and list them in registration order.
    Active,
    /// Print every toolset with its available and active tools as JSON.
    Manifest,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every gating decision.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| match cli.command {
        Command::Active => run_active(&config),
        Command::Manifest => run_manifest(&config),
    });

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> ToolgateResult<ToolsetsConfig> {
    let base = match &cli.config {
        Some(path) => ToolsetsConfig::from_file(path)?,
        None => ToolsetsConfig::default(),
    };
    Ok(apply_overrides(base, cli))
}

/// Layer command-line flags over a loaded config.
fn apply_overrides(mut config: ToolsetsConfig, cli: &Cli) -> ToolsetsConfig {
    if cli.read_only {
        config.read_only = true;
    }
    if let Some(toolsets) = &cli.toolsets {
        config.toolsets = toolsets.clone();
    }
    config.disabled_tools.extend(cli.disable_tools.iter().cloned());
    config
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_active(config: &ToolsetsConfig) -> ToolgateResult<()> {
    let group = assemble(config, inventory::toolsets())?;

    let registrar = InMemoryRegistrar::new();
    group.register_tools(&registrar);

    println!(
        "read-only: {}  toolsets: {}  disabled: {}",
        config.read_only,
        config.toolsets.join(","),
        config.disabled_tools.join(",")
    );
    println!();
    for record in registrar.records() {
        println!("  [{:>2}] {}", record.sequence, record.tool.name);
    }
    println!();
    println!("{} tool(s) registered.", registrar.len());
    Ok(())
}

fn run_manifest(config: &ToolsetsConfig) -> ToolgateResult<()> {
    let group = assemble(config, inventory::toolsets())?;

    let json = serde_json::to_string_pretty(&group.manifest()).map_err(|e| {
        ToolgateError::ConfigError {
            reason: format!("failed to render manifest: {}", e),
        }
    })?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn overrides_replace_toolsets_and_extend_disabled() {
        let cli = parse(&[
            "demo",
            "active",
            "--toolsets",
            "repos,issues",
            "--disable-tool",
            "delete_file",
            "--disable-tool",
            "merge_pull_request",
        ]);
        let base = ToolsetsConfig {
            read_only: false,
            toolsets: vec!["all".to_string()],
            disabled_tools: vec!["push_files".to_string()],
        };

        let config = apply_overrides(base, &cli);
        assert!(!config.read_only);
        assert_eq!(config.toolsets, vec!["repos", "issues"]);
        assert_eq!(
            config.disabled_tools,
            vec!["push_files", "delete_file", "merge_pull_request"]
        );
    }

    #[test]
    fn read_only_flag_cannot_clear_config_read_only() {
        let cli = parse(&["demo", "manifest"]);
        let base = ToolsetsConfig {
            read_only: true,
            ..ToolsetsConfig::default()
        };

        let config = apply_overrides(base, &cli);
        assert!(config.read_only);
        assert_eq!(config.toolsets, vec!["all"]);
    }

    #[test]
    fn sample_inventory_read_only_exposes_only_read_tools() {
        let config = ToolsetsConfig {
            read_only: true,
            ..ToolsetsConfig::default()
        };
        let group = assemble(&config, inventory::toolsets()).unwrap();

        let registrar = InMemoryRegistrar::new();
        group.register_tools(&registrar);

        assert_eq!(registrar.len(), 11);
        assert!(registrar
            .records()
            .iter()
            .all(|record| record.tool.annotations.read_only_hint == Some(true)));
    }
}
