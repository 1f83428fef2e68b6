// Integration tests for stimuli.js rendering.
//
// These tests pin down the exact output format: a single const declaration
// wrapping a 2-space-indented JSON array with keys in audio/sentence/filename
// order and no trailing newline.

use anyhow::Result;
use stimuli_gen::{render_stimuli_js, StimulusRecord};

fn record(audio: &str, sentence: &str, filename: &str) -> StimulusRecord {
    StimulusRecord {
        audio: audio.to_string(),
        sentence: sentence.to_string(),
        filename: filename.to_string(),
    }
}

#[test]
fn test_single_record_exact_output() -> Result<()> {
    let records = vec![record("alpha_data/a.wav", "Hello world", "a")];

    let rendered = render_stimuli_js(&records)?;

    let expected = "const stimuli = [\n  {\n    \"audio\": \"alpha_data/a.wav\",\n    \"sentence\": \"Hello world\",\n    \"filename\": \"a\"\n  }\n];";
    assert_eq!(rendered, expected);
    Ok(())
}

#[test]
fn test_escaped_quote_survives_json_encoding() -> Result<()> {
    // The sentence field holds a literal backslash-quote; JSON encoding then
    // doubles the backslash, so the file carries It\\'s.
    let records = vec![record("alpha_data/b.wav", "It\\'s a test", "b")];

    let rendered = render_stimuli_js(&records)?;

    assert!(rendered.contains("\"sentence\": \"It\\\\'s a test\""));
    Ok(())
}

#[test]
fn test_no_trailing_newline() -> Result<()> {
    let records = vec![record("alpha_data/a.wav", "Hello", "a")];

    let rendered = render_stimuli_js(&records)?;

    assert!(rendered.ends_with("];"));
    Ok(())
}

#[test]
fn test_key_order_is_stable() -> Result<()> {
    let records = vec![record("alpha_data/a.wav", "Hello", "a")];

    let rendered = render_stimuli_js(&records)?;

    let audio_pos = rendered.find("\"audio\"").unwrap();
    let sentence_pos = rendered.find("\"sentence\"").unwrap();
    let filename_pos = rendered.find("\"filename\"").unwrap();
    assert!(audio_pos < sentence_pos && sentence_pos < filename_pos);
    Ok(())
}
