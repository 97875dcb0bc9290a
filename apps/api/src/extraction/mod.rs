//! Text Extractor — turns uploaded PDF bytes into plain text, one page after another.
//!
//! Parsing is CPU-bound and `pdf-extract` can panic on hostile input, so the
//! async entry point runs it on the blocking pool and reports panics as
//! ordinary extraction failures.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// File extension accepted by the upload endpoint.
pub const DOCUMENT_EXTENSION: &str = ".pdf";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("{0}")]
    Parse(#[from] pdf_extract::OutputError),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// True when the client-supplied filename names a PDF document.
/// The check is case-sensitive, matching what browsers send for `.pdf` files.
pub fn is_supported_filename(filename: &str) -> bool {
    filename.ends_with(DOCUMENT_EXTENSION)
}

/// Extracts the text of every page and concatenates them in page order.
/// The layout newlines `pdf-extract` emits at the top of each page are dropped.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    debug!(pages = pages.len(), "Extracted PDF text");

    Ok(pages
        .iter()
        .map(|page| page.trim_start_matches('\n'))
        .collect())
}

/// Runs [`extract_text`] on the blocking thread pool.
pub async fn extract_text_blocking(bytes: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
}

/// Builds a minimal, valid PDF with one Helvetica text line per page.
#[cfg(test)]
pub(crate) fn build_test_pdf(pages: &[&str]) -> Vec<u8> {
    // Object layout: 1 catalog, 2 page tree, 3 font, then (page, content) pairs.
    let mut objects: Vec<String> = Vec::new();
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    for (i, text) in pages.iter().enumerate() {
        let escaped = text
            .replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)");
        let stream = format!("BT /F1 12 Tf 72 720 Td ({escaped}) Tj ET");
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_at = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));

    out.into_bytes()
}
