use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

use crate::scan::{find_audio_candidates, match_pairs};
use crate::stimulus::{render_stimuli_js, StimulusRecord};
use crate::transcript::read_transcript;

/// Paths for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory scanned for .wav/.lab pairs
    pub source_dir: PathBuf,
    /// Path of the generated stimuli.js (overwritten if present)
    pub output_file: PathBuf,
}

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Number of records written to the output file
    pub written: usize,
    /// Audio filenames skipped for lack of a matching transcript
    pub skipped: Vec<String>,
    /// False when zero pairs were found and the output file was left untouched
    pub output_written: bool,
}

/// Scans a source directory for audio/transcript pairs and writes them out
/// as a stimuli.js array literal.
pub struct StimuliGenerator {
    config: GeneratorConfig,
}

impl StimuliGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build a record for every matched pair, in lexicographic order of the
    /// audio filenames. Returns the records plus the skipped audio filenames.
    pub fn collect(&self) -> Result<(Vec<StimulusRecord>, Vec<String>)> {
        let candidates = find_audio_candidates(&self.config.source_dir)?;
        let (pairs, skipped) = match_pairs(&self.config.source_dir, &candidates);

        let mut records = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let sentence = read_transcript(&pair.transcript_path)?;

            // Forward slashes regardless of platform separator
            let audio = self
                .config
                .source_dir
                .join(&pair.audio_name)
                .display()
                .to_string()
                .replace('\\', "/");

            records.push(StimulusRecord {
                audio,
                sentence,
                filename: pair.base_name,
            });
        }

        Ok((records, skipped))
    }

    /// Run the full pipeline: collect pairs, render stimuli.js, write it.
    ///
    /// Zero pairs is not an error for the process: the output file is left
    /// untouched and the report says so.
    pub fn run(&self) -> Result<GenerationReport> {
        let (records, skipped) = self.collect()?;

        if records.is_empty() {
            error!(
                "No matching .wav/.lab pairs were found in '{}'",
                self.config.source_dir.display()
            );
            return Ok(GenerationReport {
                written: 0,
                skipped,
                output_written: false,
            });
        }

        let contents = render_stimuli_js(&records)?;
        fs::write(&self.config.output_file, contents).with_context(|| {
            format!(
                "Failed to write output file: {}",
                self.config.output_file.display()
            )
        })?;

        info!(
            "Created '{}' with {} items",
            self.config.output_file.display(),
            records.len()
        );

        Ok(GenerationReport {
            written: records.len(),
            skipped,
            output_written: true,
        })
    }
}
