//! Vitae - a resume website and ATS PDF generator driven by one data file.

mod assets;
mod build;
mod cli;
mod config;
mod coordinator;
mod data;
mod logger;
mod minify;
mod pdf;
mod render;
mod serve;
mod watch;

use anyhow::Result;
use build::{build_site, render_pdf_only};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use serve::serve_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => build_site(config),
        Commands::Pdf { template, output } => {
            render_pdf_only(config, template.as_deref(), output.as_deref())
        }
        Commands::Serve { .. } => {
            build_site(config)?;
            serve_site(config)
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: defaults match the conventional
/// project layout.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
