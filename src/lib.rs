pub mod generator;
pub mod scan;
pub mod stimulus;
pub mod transcript;

pub use generator::{GenerationReport, GeneratorConfig, StimuliGenerator};
pub use scan::{find_audio_candidates, match_pairs, StimulusPair};
pub use stimulus::{render_stimuli_js, StimulusRecord};
pub use transcript::{normalize_sentence, read_transcript};
