use anyhow::Result;
use std::path::PathBuf;
use stimuli_gen::{GeneratorConfig, StimuliGenerator};
use tracing::info;

/// Directory scanned for .wav/.lab pairs.
const SOURCE_FOLDER: &str = "alpha_data";
/// Generated JavaScript file consumed by the experiment front end.
const OUTPUT_FILE: &str = "stimuli.js";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting stimuli generation. Looking for files in '{}'", SOURCE_FOLDER);

    let generator = StimuliGenerator::new(GeneratorConfig {
        source_dir: PathBuf::from(SOURCE_FOLDER),
        output_file: PathBuf::from(OUTPUT_FILE),
    });

    let report = generator.run()?;
    if !report.skipped.is_empty() {
        info!(
            "{} audio file(s) had no transcript and were skipped",
            report.skipped.len()
        );
    }

    Ok(())
}
