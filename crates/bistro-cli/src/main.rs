//! Bistro CLI - Restaurant order and sales tracker
//!
//! Interactive console: register patrons, take orders, print bills and
//! show running sales totals.

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use bistro::{application, Catalog, LoopExit, Session, StdConsole};
use config::Config;

#[derive(Parser)]
#[command(name = "bistro")]
#[command(about = "Bistro - Restaurant order and sales tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/bistro/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Currency label printed before amounts (overrides config)
    #[arg(long)]
    currency: Option<String>,

    /// Show the resolved configuration and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(label) = cli.currency {
        config.set_currency(label);
    }
    let catalog = config.catalog()?;

    if cli.show_config {
        return cmd_config(&config, &catalog, cli.config.as_deref());
    }

    let mut session = Session::new(catalog, config.currency.clone());
    let mut console = StdConsole::stdio();

    let exit = application::run(&mut session, &mut console).context("Console session failed")?;
    if exit == LoopExit::InputClosed {
        tracing::info!("Input ended before Exit was chosen");
    }

    tracing::info!(
        orders = session.ledger().orders().len(),
        daily_total = %session.ledger().sales().daily_total(),
        "Session finished"
    );

    Ok(())
}

// ============================================
// Command Implementations
// ============================================

fn cmd_config(config: &Config, catalog: &Catalog, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", path);
    println!(
        "  File: {}",
        if path.exists() { "Found".green() } else { "Not found (defaults)".yellow() }
    );
    println!("  Currency: {}", config.currency.label().cyan());
    println!(
        "  Menu: {} ({} items, {} categories)",
        if config.menu.is_some() { "Custom".cyan() } else { "Built-in sample".dimmed() },
        catalog.len(),
        catalog.categories().len()
    );

    for item in catalog.items() {
        println!(
            "    {} {} {} {}",
            format!("[{}]", item.category).dimmed(),
            item.name,
            config.currency,
            item.price
        );
    }

    Ok(())
}
