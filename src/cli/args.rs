//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Atom feed preview tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: feed-preview.toml)
    #[arg(short = 'C', long, global = true, default_value = "feed-preview.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Show debug output for every stage
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a feed as its HTML preview page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Add the stylesheet and viewer script references to a feed
    #[command(visible_alias = "d")]
    Decorate {
        #[command(flatten)]
        args: DecorateArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Feed document to render
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Path the document is served from (default: `/` + file name).
    ///
    /// Assets are resolved against its directory part.
    #[arg(short, long)]
    pub location: Option<String>,

    /// Declared content type (default: guessed from the file extension)
    #[arg(short = 't', long)]
    pub content_type: Option<String>,

    /// Write the page here instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override `[feed] namespace`
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Override `[page] lang`
    #[arg(long)]
    pub lang: Option<String>,
}

/// Decorate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DecorateArgs {
    /// Feed document to decorate
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Prefix for the injected asset references, e.g. `/feeds/`
    #[arg(short, long, default_value = "")]
    pub web_path: String,

    /// Write the feed here instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
