use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

///
/// Write a report as pretty JSON to `path`, or to stdout when no path is given.
///
pub fn write_json<T: Serialize>(report: &T, path: Option<&String>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;

    match path {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("Failed to create {}", p))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{}", json)?;
            writer.flush()?;
            info!("Report written to {}", p);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
        }
    }

    Ok(())
}
