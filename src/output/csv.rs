// CSV export of a ranking.
//
// Two columns, matching what a spreadsheet user expects from the screening
// table: the candidate's identifier and the score to two decimal places.
// Identifiers are quoted per RFC 4180 when they contain a comma, quote, or
// line break.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::Screening;

pub const CSV_HEADER: &str = "Candidate Name,Score";

/// Render the ranking as CSV text, one row per candidate in ranked order.
pub fn render_csv(screening: &Screening) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for candidate in &screening.candidates {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{},{:.2}",
            escape_field(&candidate.identifier),
            candidate.score
        );
    }

    out
}

/// Write the ranking as CSV to `path`.
pub fn write_csv(screening: &Screening, path: &Path) -> Result<()> {
    std::fs::write(path, render_csv(screening))
        .with_context(|| format!("Failed to write CSV report to {}", path.display()))?;
    info!(path = %path.display(), rows = screening.len(), "CSV report written");
    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_field("alice.pdf"), "alice.pdf");
    }

    #[test]
    fn test_escape_comma_and_quote() {
        assert_eq!(escape_field("smith, j.pdf"), "\"smith, j.pdf\"");
        assert_eq!(escape_field("the \"best\".pdf"), "\"the \"\"best\"\".pdf\"");
    }

    #[test]
    fn test_empty_screening_is_header_only() {
        assert_eq!(render_csv(&Screening::default()), "Candidate Name,Score\n");
    }
}
