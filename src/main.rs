//! feed-preview - Render Atom feeds as readable HTML preview pages.

#![allow(dead_code)]

mod cli;
mod config;
mod feed;
mod logger;
mod pipeline;
mod render;
mod utils;
mod viewer;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PreviewConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = PreviewConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::render_feed(args, &config),
        Commands::Decorate { args } => cli::decorate::decorate_feed(args, &config),
    }
}
