use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Audio extension; the suffix match is exact and case-sensitive.
pub const AUDIO_EXT: &str = ".wav";
/// Transcript extension expected alongside each audio file.
pub const TRANSCRIPT_EXT: &str = ".lab";

/// An audio file with a confirmed same-named transcript sibling.
#[derive(Debug, Clone)]
pub struct StimulusPair {
    /// Audio filename without directory, e.g. "a.wav"
    pub audio_name: String,
    /// Base name shared by the pair, e.g. "a"
    pub base_name: String,
    /// Full path to the matching .lab file
    pub transcript_path: PathBuf,
}

/// List the .wav filenames in `source_dir`, sorted lexicographically.
///
/// A missing or unlistable source directory is an error; there is no
/// fallback location to scan instead.
pub fn find_audio_candidates(source_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(source_dir)
        .with_context(|| format!("Failed to read source directory: {}", source_dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read entry in source directory: {}", source_dir.display())
        })?;

        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(AUDIO_EXT) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

/// Match each audio candidate against its transcript sibling.
///
/// Candidates without a transcript are logged with a warning and returned in
/// the skipped list; they never abort the scan. Returned pairs preserve the
/// candidate order.
pub fn match_pairs(source_dir: &Path, candidates: &[String]) -> (Vec<StimulusPair>, Vec<String>) {
    let mut pairs = Vec::new();
    let mut skipped = Vec::new();

    for audio_name in candidates {
        let base_name = audio_name
            .strip_suffix(AUDIO_EXT)
            .unwrap_or(audio_name)
            .to_string();
        let lab_name = format!("{base_name}{TRANSCRIPT_EXT}");
        let transcript_path = source_dir.join(&lab_name);

        if transcript_path.exists() {
            pairs.push(StimulusPair {
                audio_name: audio_name.clone(),
                base_name,
                transcript_path,
            });
        } else {
            warn!(
                "Skipping {} because its partner '{}' was not found",
                audio_name, lab_name
            );
            skipped.push(audio_name.clone());
        }
    }

    (pairs, skipped)
}
