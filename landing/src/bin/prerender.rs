//! # bella-prerender
//!
//! Renders the landing page to a static `index.html`.
//!
//! ```bash
//! bella-prerender --config landing/bella.toml --out dist/index.html
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bella_core::LandingConfig;
use bella_landing::render_page;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bella-prerender")]
#[command(about = "Render the Bella landing page to static HTML")]
#[command(version)]
struct Args {
    /// TOML config with page metadata and timings (defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the rendered document
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = match &args.config {
        Some(path) => LandingConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LandingConfig::default(),
    };

    let html = render_page(&config);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&args.out, &html)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    info!(path = %args.out.display(), bytes = html.len(), "landing page rendered");
    Ok(())
}
