use crate::defaults::get_document_text;
use crate::error::{AppError, Result};
use crate::walk::TreeLine;
use serde::Serialize;

/// Joins rendered tree rows into the text placed inside the code fence.
pub fn render_lines(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assembles the final markdown document: banner image, blank line,
/// heading, then the tree inside a plain code fence. The closing fence
/// carries no trailing newline.
pub fn render_document(lines: &[TreeLine]) -> String {
    let text = get_document_text();
    format!(
        "{}\n\n{}\n```\n{}\n```",
        text.banner,
        text.heading,
        render_lines(lines)
    )
}

pub fn serialize_to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).map_err(AppError::JsonSerialize)
    } else {
        serde_json::to_string(value).map_err(AppError::JsonSerialize)
    }
}
