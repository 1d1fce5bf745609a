use std::fs;

use anyhow::{Context, Result};

/// Read an input file with a uniform error message.
pub fn read_input(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path))
}

/// Print `content` to stdout, or write it to `output` when given.
pub fn emit_output(content: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write output file {}", path))
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
