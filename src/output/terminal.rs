// Colored terminal output for rankings.
//
// This module handles all terminal-specific formatting: colors, tables and
// score bars. main.rs delegates here.

use colored::Colorize;

use crate::pipeline::{RankedCandidate, Screening};
use crate::source::SourceDocument;

const BAR_WIDTH: usize = 20;

/// Matching resumes shown in the keyword section
pub const KEYWORD_MATCH_LIMIT: usize = 3;
/// Excerpt length for each matching resume, in characters
pub const EXCERPT_CHARS: usize = 500;

/// Display the ranked candidates as a table with a score bar per row.
pub fn display_ranking(screening: &Screening) {
    if screening.is_empty() {
        println!("No resumes to rank.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Ranked Resumes ({} candidates) ===", screening.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<36} {:>5}  {}",
        "Rank".dimmed(),
        "Candidate Name".dimmed(),
        "Score".dimmed(),
        "Distribution".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for candidate in &screening.candidates {
        let name = super::truncate_chars(&candidate.identifier, 33);
        println!(
            "  {:>4}. {:<36} {:>5.2}  {}",
            candidate.rank,
            name,
            candidate.score,
            score_bar(candidate.score),
        );
    }

    println!();
    if let Some(summary) = best_match_summary(screening) {
        println!("  {}", summary.bold());
    }
    println!(
        "  {}",
        format!(
            "Vocabulary: {} terms ({} from the job description)",
            screening.vocabulary_size, screening.reference_terms
        )
        .dimmed()
    );

    let unreadable = screening.unreadable();
    if !unreadable.is_empty() {
        println!();
        for candidate in unreadable {
            println!(
                "  {} No readable text found in {} (scored 0.00)",
                "!".yellow(),
                candidate.identifier
            );
        }
    }
}

/// Display the top resumes that share terms with the job description, each
/// with its matched terms and an excerpt of its text.
pub fn display_keyword_matches(
    screening: &Screening,
    documents: &[SourceDocument],
    max_keywords: usize,
) {
    println!("\n{}", "=== Job Description Keyword Matching ===".bold());
    println!();

    let excerpts = keyword_excerpts(screening, documents, KEYWORD_MATCH_LIMIT, EXCERPT_CHARS);
    if excerpts.is_empty() {
        println!("  No resumes strongly matched job description keywords.");
        return;
    }

    println!("  These resumes contain key job description terms:");
    for (candidate, excerpt) in &excerpts {
        println!(
            "\n  {:>4}. {:<36} {}",
            candidate.rank,
            candidate.identifier,
            keyword_summary(candidate, max_keywords).dimmed()
        );
        println!("        {}", excerpt.dimmed());
    }

    let hidden = screening.keyword_matches().len().saturating_sub(excerpts.len());
    if hidden > 0 {
        println!("\n  {}", format!("(+{hidden} more matching resumes)").dimmed());
    }
}

/// The first `limit` keyword-matching candidates in ranked order, each paired
/// with the first `max_chars` characters of its text on a single line.
pub fn keyword_excerpts<'a>(
    screening: &'a Screening,
    documents: &[SourceDocument],
    limit: usize,
    max_chars: usize,
) -> Vec<(&'a RankedCandidate, String)> {
    screening
        .keyword_matches()
        .into_iter()
        .filter_map(|candidate| {
            let doc = documents.get(candidate.index)?;
            let excerpt = super::truncate_chars(&doc.text.replace('\n', " "), max_chars);
            Some((candidate, excerpt))
        })
        .take(limit)
        .collect()
}

/// Show the start of each ranked candidate's text.
pub fn display_previews(screening: &Screening, documents: &[SourceDocument], max_chars: usize) {
    println!("\n{}", "=== Candidate Resume Preview ===".bold());

    for candidate in &screening.candidates {
        let Some(doc) = documents.get(candidate.index) else {
            continue;
        };
        println!(
            "\n  {} {}",
            format!("{}.", candidate.rank).bold(),
            candidate.identifier.bold()
        );
        if doc.text.is_empty() {
            println!("      {}", "(no text)".dimmed());
        } else {
            let preview = super::truncate_chars(&doc.text.replace('\n', " "), max_chars);
            println!("      {}", preview.dimmed());
        }
    }
    println!();
}

fn best_match_summary(screening: &Screening) -> Option<String> {
    screening
        .top()
        .map(|best| format!("Best match: {} ({:.2})", best.identifier, best.score))
}

fn keyword_summary(candidate: &RankedCandidate, max_keywords: usize) -> String {
    let shown: Vec<&str> = candidate
        .matched_keywords
        .iter()
        .take(max_keywords)
        .map(String::as_str)
        .collect();
    let hidden = candidate.matched_keywords.len().saturating_sub(shown.len());

    if hidden > 0 {
        format!("{} (+{hidden} more)", shown.join(", "))
    } else {
        shown.join(", ")
    }
}

/// Build and color the score bar.
fn score_bar(score: f64) -> colored::ColoredString {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    );

    if score >= 0.50 {
        bar.bright_green()
    } else if score >= 0.20 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
