//! `lineage`: run, list, describe, and validate the inheritance demos.
//!
//! `lineage run <demo>` writes exactly what the demo's standalone binary
//! writes. Diagnostics go to stderr (`RUST_LOG`, `log_filter`, `--verbose`).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lineage::config::{CONFIG_FILE, GraphFormat, LineageConfig, load_config};
use lineage::graph::validate_invariants;
use lineage::{Demo, exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "lineage",
    version,
    about = "Inheritance-shape demonstration programs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (missing file means defaults).
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Debug-level diagnostics on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print each demo's name, binary, and summary.
    List,
    /// Run a demo, printing its fixed output.
    Run {
        #[arg(value_enum)]
        demo: Demo,
    },
    /// Print a demo's inheritance graph.
    Describe {
        #[arg(value_enum)]
        demo: Demo,
        /// Output format (defaults to `describe.format` from the config).
        #[arg(long, value_enum)]
        format: Option<GraphFormat>,
    },
    /// Check every demo graph against its structural invariants.
    Validate,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config)
        .with_context(|| format!("load config {}", cli.config.display()))?;
    let filter = if cli.verbose {
        "lineage=debug"
    } else {
        cfg.log_filter.as_str()
    };
    logging::init(filter);
    debug!(config = %cli.config.display(), "config loaded");

    match cli.command {
        Command::List => cmd_list(),
        Command::Run { demo } => demo.run_stdout(),
        Command::Describe { demo, format } => cmd_describe(demo, format, &cfg),
        Command::Validate => cmd_validate(),
    }
}

fn cmd_list() -> Result<()> {
    for demo in Demo::ALL {
        println!("{}\t{}\t{}", demo.name(), demo.binary(), demo.summary());
    }
    Ok(())
}

fn cmd_describe(demo: Demo, format: Option<GraphFormat>, cfg: &LineageConfig) -> Result<()> {
    let format = format.unwrap_or(cfg.describe.format);
    debug!(demo = demo.name(), ?format, "describing graph");
    let graph = demo.graph();
    match format {
        GraphFormat::Text => print!("{}", graph.render_text()),
        GraphFormat::Json => {
            let payload = serde_json::to_string_pretty(&graph).context("serialize graph json")?;
            println!("{payload}");
        }
    }
    Ok(())
}

fn cmd_validate() -> Result<()> {
    let mut violations = Vec::new();
    for demo in Demo::ALL {
        let errors = validate_invariants(&demo.graph());
        if errors.is_empty() {
            println!("ok: {}", demo.name());
        } else {
            violations.extend(errors.into_iter().map(|err| format!("{}: {}", demo.name(), err)));
        }
    }
    if !violations.is_empty() {
        bail!("invariant violations:\n- {}", violations.join("\n- "));
    }
    Ok(())
}
