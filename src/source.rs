// Text sources: turning files on disk into plain-text documents.
//
// The ranking core only ever sees strings. This module is the collaborator
// that produces them: text files are read as UTF-8 (lossy), and PDFs go
// through `pdf-extract` when the `pdf` feature is enabled.
//
// An extraction that yields nothing but whitespace becomes an empty document
// flagged `unreadable`. It still takes part in ranking (and scores 0.0), but
// no placeholder text is injected into the corpus where it could match.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

/// A document ready for ranking, with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceDocument {
    /// Caller-facing name, usually the file name
    pub identifier: String,
    /// Plain text handed to the vectorizer
    pub text: String,
    /// True when extraction produced no text at all
    pub unreadable: bool,
}

impl SourceDocument {
    /// A document whose text was supplied directly.
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
            unreadable: false,
        }
    }

    /// A document produced by text extraction. Surrounding whitespace is
    /// trimmed; if nothing is left the document is marked unreadable.
    pub fn from_extracted(identifier: impl Into<String>, raw: &str) -> Self {
        let text = raw.trim();
        Self {
            identifier: identifier.into(),
            text: text.to_string(),
            unreadable: text.is_empty(),
        }
    }
}

/// Load a single document from disk.
pub fn load_document(path: &Path) -> Result<SourceDocument> {
    let identifier = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let raw = if is_pdf {
        extract_pdf(path)?
    } else {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        String::from_utf8_lossy(&bytes).into_owned()
    };

    let doc = SourceDocument::from_extracted(identifier, &raw);
    if doc.unreadable {
        warn!(file = %path.display(), "No readable text found");
    } else {
        debug!(file = %path.display(), chars = doc.text.chars().count(), "Loaded document");
    }
    Ok(doc)
}

/// Load documents in the given order, showing a progress bar.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("  Loading [{bar:30}] {pos}/{len} {msg}")?);

    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        pb.set_message(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        docs.push(load_document(path)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(docs)
}

#[cfg(feature = "pdf")]
fn extract_pdf(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .map_err(|e| anyhow::anyhow!("Failed to extract text from {}: {e}", path.display()))
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(path: &Path) -> Result<String> {
    anyhow::bail!(
        "{} is a PDF, but this build has no PDF support.\n\
         Rebuild with `--features pdf`, or convert the file to plain text first.",
        path.display()
    )
}
