use anyhow::{Context, Result};
use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use treemark_core::{TreeStats, document};

use crate::cli_args::FormatOpts;

pub fn write_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    Ok(())
}

pub fn write_to_stdout(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    // Terminal-friendly: make sure the output ends with a line break.
    if !content.ends_with('\n') {
        handle
            .write_all(b"\n")
            .context("Failed to write newline to stdout")?;
    }
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}

// Helper for commands that can emit either plain text or structured data.
pub fn print_data_or_text<T: Serialize>(
    data: &T,
    plain_text: Option<String>,
    format_opts: &FormatOpts,
) -> Result<()> {
    if format_opts.is_text() {
        if let Some(text) = plain_text {
            return write_to_stdout(&text);
        }
    }
    let content = document::serialize_to_json(data, true)?;
    write_to_stdout(&content)
}

pub fn print_stats_table(stats: &TreeStats) -> Result<()> {
    println!();
    println!("{}", " Tree Summary ".green().bold().underline());
    println!(
        "{:<16} {}",
        "Directories:".green(),
        stats.directories.to_string().cyan()
    );
    println!(
        "{:<16} {}",
        "Files:".green(),
        stats.files.to_string().cyan()
    );
    println!(
        "{:<16} {}",
        "Total Entries:".green(),
        stats.total_entries.to_string().cyan()
    );

    if stats.marker_counts.is_empty() {
        println!("\n{}", "(No entries in tree)".yellow());
    } else {
        println!("\n{}", " Marker Breakdown ".green().bold().underline());
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Marker").fg(Color::Green),
            Cell::new("Entries").fg(Color::Green),
        ]);
        for (marker, count) in &stats.marker_counts {
            table.add_row(vec![
                Cell::new(marker).fg(Color::Cyan),
                Cell::new(*count).set_alignment(comfy_table::CellAlignment::Right),
            ]);
        }
        println!("{table}");
    }
    println!();
    Ok(())
}
