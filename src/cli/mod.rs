//! Command-line interface module.

mod args;
mod common;
pub mod decorate;
pub mod render;

pub use args::{Cli, Commands, DecorateArgs, RenderArgs};
