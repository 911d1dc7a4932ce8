//! Line-based conversion of reply text into display blocks
//!
//! Only three shapes are recognised, matching what the prompt asks the model
//! to produce: `**headline**` lines, `- ` bullets, and plain paragraphs.

#[cfg(test)]
mod proptests;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern is valid"));

/// A renderable unit derived from one line of turn content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum FormattedBlock {
    Headline(String),
    Bullet(String),
    Paragraph(String),
}

/// Convert turn content into blocks, one per non-blank line, in line order.
///
/// Pure and uncached: callers recompute on every render.
pub fn format_content(text: &str) -> Vec<FormattedBlock> {
    text.lines().filter_map(format_line).collect()
}

fn format_line(line: &str) -> Option<FormattedBlock> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if BOLD_SPAN.is_match(line) {
        let stripped = BOLD_SPAN.replace_all(line, "$1");
        return Some(FormattedBlock::Headline(stripped.into_owned()));
    }

    if let Some(rest) = line.strip_prefix("- ") {
        return Some(FormattedBlock::Bullet(rest.to_string()));
    }

    Some(FormattedBlock::Paragraph(line.to_string()))
}
