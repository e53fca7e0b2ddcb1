//! Trendgate CLI: filter a digest read from a file or stdin.
//!
//! ```text
//! trendgate [--mode <mode>] [INPUT]
//! ```
//!
//! Input is `{"report": {...}, "rss_items": [...], "rss_new_items": [...]}`. Output on stdout is
//! `{"collections": ..., "stats": ...}`. Logs go to stderr (`RUST_LOG` controls verbosity).

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;

use trendgate::{Collections, GateConfig, QualityGate};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "trendgate")]
#[command(version, about = "Filter and annotate a trend digest with an LLM judge")]
struct Args {
    /// Report mode passed to the judge (`daily`, `current`, `incremental`, ...).
    #[arg(long, short, default_value = "daily")]
    mode: String,

    /// Collections JSON file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,
}

impl Args {
    fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Collections> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("input is not a valid collections document")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = GateConfig::from_env()?;
    config.validate()?;

    tracing::info!(
        enabled = config.enabled,
        model = %config.model,
        mode = %args.mode,
        "Trendgate starting"
    );

    let collections = read_input(args.input_path())?;
    tracing::debug!(titles = collections.title_count(), "Input loaded");
    let gate = QualityGate::from_config(config);
    let outcome = gate.filter_before_send(&collections, &args.mode).await;

    if let Some(err) = &outcome.stats.error {
        tracing::warn!(error = %err, "Delivered unfiltered");
    }

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
