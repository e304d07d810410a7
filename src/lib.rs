//! # monophone-tts
//!
//! A Rust library providing concatenative text-to-speech synthesis from a
//! folder of monophone recordings.
//!
//! ## Features
//!
//! - **Text normalization**: numbers, decimals and dates are expanded to words
//! - **Dictionary pronunciation**: words are mapped to phonemes through a CMU-style lexicon
//! - **Prosody cues**: `{emphasis}`, short pauses after `,` and long pauses after `.`, `!`, `?`
//! - **Spelling mode**: pronounce a phrase letter by letter
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! monophone-tts = { version = "2026.2", features = ["monophone"] }
//! ```
//!
//! ```ignore
//! use std::path::PathBuf;
//! use monophone_tts::{engines::monophone::MonophoneEngine, SynthesisEngine};
//!
//! let mut engine = MonophoneEngine::new();
//! engine.load_model(&PathBuf::from("monophones"))?;
//!
//! let result = engine.synthesize("i was born {22/01} with 344 cats.", None)?;
//! result.write_wav(&PathBuf::from("output.wav"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engines;

use std::path::Path;

/// The result of a synthesis (text-to-speech) operation.
///
/// Contains 16-bit signed audio samples and the sample rate of the
/// monophone recordings they were assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    /// Raw audio samples as signed 16-bit PCM values
    pub samples: Vec<i16>,
    /// Sample rate of the audio, shared by every unit in the catalog
    pub sample_rate: u32,
}

impl SynthesisResult {
    /// Write the audio to a mono 16-bit PCM WAV file.
    pub fn write_wav(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }

    /// Duration of the audio in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Common interface for text-to-speech synthesis engines.
///
/// This trait defines the standard operations that all synthesis engines must support.
/// Each engine may have different parameter types for model loading and inference configuration.
pub trait SynthesisEngine {
    /// Parameters for configuring a synthesis request (gain, spelling mode, etc.)
    type SynthesisParams;
    /// Parameters for configuring model loading (dictionary location, etc.)
    type ModelParams: Default;

    /// Load a model from the specified path using default parameters.
    fn load_model(&mut self, model_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        self.load_model_with_params(model_path, Self::ModelParams::default())
    }

    /// Load a model from the specified path with custom parameters.
    fn load_model_with_params(
        &mut self,
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Unload the currently loaded model and free associated resources.
    fn unload_model(&mut self);

    /// Synthesize speech from the given text.
    fn synthesize(
        &mut self,
        text: &str,
        params: Option<Self::SynthesisParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>>;

    /// Synthesize speech from the given text and write to a WAV file.
    ///
    /// Default implementation calls `synthesize()` then `SynthesisResult::write_wav()`.
    fn synthesize_to_file(
        &mut self,
        text: &str,
        wav_path: &Path,
        params: Option<Self::SynthesisParams>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.synthesize(text, params)?.write_wav(wav_path)
    }
}

#[cfg(test)]
mod tests {
    use super::SynthesisResult;

    #[test]
    fn duration_counts_samples_at_rate() {
        let result = SynthesisResult {
            samples: vec![0; 8000],
            sample_rate: 16000,
        };
        assert_eq!(result.duration_secs(), 0.5);
    }

    #[test]
    fn duration_of_zero_rate_is_zero() {
        let result = SynthesisResult {
            samples: vec![1, 2, 3],
            sample_rate: 0,
        };
        assert_eq!(result.duration_secs(), 0.0);
    }
}
