//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::log;

/// Read an input document.
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(module: &str, output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create `{}`", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!(module; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
