use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{SynthesisEngine, SynthesisResult};

use super::catalog::MonophoneCatalog;
use super::dates::YearZeroStyle;
use super::lexicon::Lexicon;
use super::model::{MonophoneError, MonophoneModel, Token};

/// Parameters for configuring monophone model loading.
#[derive(Debug, Clone, Default)]
pub struct MonophoneModelParams {
    /// Pronunciation dictionary to use.
    ///
    /// `None` looks for `cmudict.dict`, then `cmudict.json`, inside the
    /// monophone folder. A `.json` extension selects the JSON format.
    pub dictionary_path: Option<PathBuf>,
}

/// Parameters for configuring a monophone synthesis request.
///
/// ```rust
/// use monophone_tts::engines::monophone::MonophoneInferenceParamsBuilder;
///
/// let params = MonophoneInferenceParamsBuilder::default()
///     .spell(true)
///     .volume(0.5)
///     .build()?;
/// assert_eq!(params.volume, Some(0.5));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default)]
pub struct MonophoneInferenceParams {
    /// Pronounce the phrase letter by letter.
    pub spell: bool,
    /// Gain applied to the whole waveform, nominally 0.0–1.0. `None` = 1.0.
    #[builder(setter(strip_option))]
    pub volume: Option<f32>,
    /// Gain applied to `{emphasized}` tokens. 1.0 leaves them unchanged.
    pub emphasis_gain: f32,
    /// How zero-led year halves such as the "05" of 1905 are read.
    pub year_zero: YearZeroStyle,
}

impl Default for MonophoneInferenceParams {
    fn default() -> Self {
        Self {
            spell: false,
            volume: None,
            emphasis_gain: 1.0,
            year_zero: YearZeroStyle::Plain,
        }
    }
}

/// Concatenative text-to-speech engine built on monophone recordings.
///
/// # Quick Start
///
/// ```rust,no_run
/// use monophone_tts::{SynthesisEngine, engines::monophone::MonophoneEngine};
/// use std::path::PathBuf;
///
/// // Reads monophones/*.wav and monophones/cmudict.dict
/// let mut engine = MonophoneEngine::new();
/// engine.load_model(&PathBuf::from("monophones"))?;
/// let result = engine.synthesize("A rose by any other name would smell as sweet", None)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Preloaded Collaborators
///
/// ```rust
/// use monophone_tts::engines::monophone::{Lexicon, MonophoneCatalog, MonophoneEngine};
///
/// let catalog = MonophoneCatalog::from_clips(16000, [("hh", vec![100; 80]), ("ay", vec![200; 120])]);
/// let lexicon = Lexicon::from_entries([("hi", vec![vec!["HH", "AY1"]])]);
/// let engine = MonophoneEngine::from_parts(catalog, lexicon);
/// assert_eq!(engine.list_units(), vec!["ay", "hh"]);
/// ```
pub struct MonophoneEngine {
    model: Option<MonophoneModel>,
    model_path: Option<PathBuf>,
}

impl Default for MonophoneEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MonophoneEngine {
    /// Create a new engine with nothing loaded.
    pub fn new() -> Self {
        Self {
            model: None,
            model_path: None,
        }
    }

    /// Create an engine from an already built catalog and lexicon.
    pub fn from_parts(catalog: MonophoneCatalog, lexicon: Lexicon) -> Self {
        Self {
            model: Some(MonophoneModel::new(catalog, lexicon)),
            model_path: None,
        }
    }

    /// List all available phoneme units (requires model to be loaded).
    pub fn list_units(&self) -> Vec<&str> {
        self.model
            .as_ref()
            .map(|m| m.list_units())
            .unwrap_or_default()
    }

    /// Folder the model was loaded from, if it came from disk.
    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }

    /// Normalize and phonemize `text` without producing audio.
    pub fn analyze(
        &self,
        text: &str,
        params: Option<MonophoneInferenceParams>,
    ) -> Result<Vec<Token>, MonophoneError> {
        let model = self.model.as_ref().ok_or(MonophoneError::ModelNotLoaded)?;
        model.analyze(text, &params.unwrap_or_default())
    }
}

impl Drop for MonophoneEngine {
    fn drop(&mut self) {
        self.unload_model();
    }
}

impl SynthesisEngine for MonophoneEngine {
    type SynthesisParams = MonophoneInferenceParams;
    type ModelParams = MonophoneModelParams;

    fn load_model_with_params(
        &mut self,
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let model = MonophoneModel::load(model_path, params.dictionary_path.as_deref())?;
        self.model = Some(model);
        self.model_path = Some(model_path.to_path_buf());
        Ok(())
    }

    fn unload_model(&mut self) {
        self.model = None;
        self.model_path = None;
    }

    fn synthesize(
        &mut self,
        text: &str,
        params: Option<Self::SynthesisParams>,
    ) -> Result<SynthesisResult, Box<dyn std::error::Error>> {
        let model = self.model.as_ref().ok_or(MonophoneError::ModelNotLoaded)?;

        let p = params.unwrap_or_default();
        let samples = model.synthesize_text(text, &p)?;

        Ok(SynthesisResult {
            samples,
            sample_rate: model.sample_rate(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MonophoneInferenceParams, MonophoneInferenceParamsBuilder};
    use crate::engines::monophone::YearZeroStyle;

    #[test]
    fn builder_defaults_match_default() {
        let built = MonophoneInferenceParamsBuilder::default().build().unwrap();
        assert_eq!(built, MonophoneInferenceParams::default());
        assert_eq!(built.emphasis_gain, 1.0);
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: MonophoneInferenceParams =
            serde_json::from_str(r#"{"volume": 0.25, "year_zero": "oh"}"#).unwrap();
        assert_eq!(params.volume, Some(0.25));
        assert_eq!(params.year_zero, YearZeroStyle::Oh);
        assert!(!params.spell);
        assert_eq!(params.emphasis_gain, 1.0);
    }
}
