use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One audio/transcript pair as it appears in the generated stimuli.js.
///
/// Field order matters: the serializer emits keys in declaration order, and
/// the experiment front end expects `audio`, `sentence`, `filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StimulusRecord {
    /// Source-directory-relative path to the audio file, forward slashes only
    pub audio: String,
    /// Normalized transcript text, single quotes escaped for a quoted literal
    pub sentence: String,
    /// Audio base name without extension; the identifier shared by the pair
    pub filename: String,
}

/// Render the complete contents of stimuli.js: a `const` declaration binding
/// the record array as a 2-space-indented JSON literal. No trailing newline.
pub fn render_stimuli_js(records: &[StimulusRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(records)
        .context("Failed to serialize stimulus records")?;

    Ok(format!("const stimuli = {json};"))
}
