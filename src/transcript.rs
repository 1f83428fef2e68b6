use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a .lab transcript and normalize it for embedding in stimuli.js.
///
/// The file must be valid UTF-8; anything else is a defect in the input data
/// and propagates as an error. The handle is released as soon as the content
/// is read.
pub fn read_transcript(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

    Ok(normalize_sentence(&raw))
}

/// Normalize raw transcript text: CRLF/CR newlines become LF, leading and
/// trailing whitespace is trimmed, and every single quote is escaped so the
/// sentence is safe inside a single-quoted string literal.
pub fn normalize_sentence(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    unified.trim().replace('\'', "\\'")
}
