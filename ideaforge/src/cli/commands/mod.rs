// Command implementations

pub mod create;
pub mod detect;
pub mod extract;
pub mod validate;

use anyhow::{Context, Result};
use std::io::Read;

/// Read reply text from a file path or stdin when the path is '-'
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("Failed to read from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}
