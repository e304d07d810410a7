use std::path::{Path, PathBuf};

use super::assembler::{assemble, UnitCatalog};
use super::catalog::MonophoneCatalog;
use super::engine::MonophoneInferenceParams;
use super::lexicon::Lexicon;
use super::normalizer::tokenize;
use super::resolver::resolve_tokens;

/// Dictionary file names looked up inside the model directory, in order.
pub const DEFAULT_DICTIONARY_FILES: &[&str] = &["cmudict.dict", "cmudict.json"];

#[derive(thiserror::Error, Debug)]
pub enum MonophoneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
    #[error("Cannot read token: {0}")]
    Format(String),
    #[error("'{0}' is not in the pronunciation dictionary. Please try another word.")]
    Pronunciation(String),
    #[error("There is no recording of the sound '{0}'. Please try another input.")]
    MissingUnit(String),
    #[error("Invalid monophone folder: {0}")]
    Catalog(String),
    #[error("Invalid pronunciation dictionary: {0}")]
    Lexicon(String),
    #[error("Token {0} already has audio")]
    AlreadyAssembled(usize),
    #[error("Model not loaded. Call load_model() first.")]
    ModelNotLoaded,
}

/// Pause appended after a token's audio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pause {
    #[default]
    None,
    /// After `,`: a quarter second.
    Short,
    /// After `.`, `!` or `?`: half a second.
    Long,
}

impl Pause {
    /// Pause implied by a token's final character.
    pub fn from_mark(ch: char) -> Self {
        match ch {
            ',' => Pause::Short,
            '.' | '!' | '?' => Pause::Long,
            _ => Pause::None,
        }
    }

    /// Number of silent samples this pause adds at `sample_rate`.
    pub fn silence_samples(self, sample_rate: u32) -> usize {
        match self {
            Pause::None => 0,
            Pause::Short => (sample_rate / 4) as usize,
            Pause::Long => (sample_rate / 2) as usize,
        }
    }
}

/// One whitespace-delimited unit of a phrase and everything derived from it.
///
/// Tokens are identified by `index`; a repeated word at two positions is
/// two tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    /// Text as typed, including braces and punctuation.
    pub raw: String,
    pub index: usize,
    /// `raw` was wrapped in `{...}`.
    pub emphasized: bool,
    pub pause: Pause,
    /// `raw` was a number or a date.
    pub is_numeric_shape: bool,
    /// Lowercase alphabetic words to pronounce, never empty.
    pub words: Vec<String>,
    /// One phoneme sequence per entry of `words`.
    pub phoneme_groups: Vec<Vec<String>>,
    /// Assembled audio including emphasis gain and trailing silence.
    pub audio: Option<Vec<i16>>,
}

/// Loaded monophone recordings plus the pronunciation dictionary.
///
/// Both are read-only once loaded; every request builds its own tokens.
#[derive(Debug)]
pub struct MonophoneModel {
    catalog: MonophoneCatalog,
    lexicon: Lexicon,
}

impl MonophoneModel {
    /// Load the model from a directory of monophone WAV files.
    ///
    /// The dictionary is read from `dictionary_path` when given, otherwise
    /// from the first of [`DEFAULT_DICTIONARY_FILES`] present in `model_dir`.
    pub fn load(model_dir: &Path, dictionary_path: Option<&Path>) -> Result<Self, MonophoneError> {
        log::info!("Loading monophones from {}", model_dir.display());
        let catalog = MonophoneCatalog::load(model_dir)?;

        let dictionary_path = match dictionary_path {
            Some(path) => path.to_path_buf(),
            None => find_dictionary(model_dir)?,
        };
        let lexicon = Lexicon::load(&dictionary_path)?;

        Ok(Self::new(catalog, lexicon))
    }

    pub fn new(catalog: MonophoneCatalog, lexicon: Lexicon) -> Self {
        Self { catalog, lexicon }
    }

    /// Normalize `text` and resolve every word to phonemes.
    ///
    /// The returned tokens have no audio yet.
    pub fn analyze(
        &self,
        text: &str,
        params: &MonophoneInferenceParams,
    ) -> Result<Vec<Token>, MonophoneError> {
        let mut tokens = tokenize(text, params.spell, params.year_zero)?;
        resolve_tokens(&mut tokens, &self.lexicon)?;
        Ok(tokens)
    }

    /// Synthesize samples for `text`. Any failure aborts the whole request.
    pub fn synthesize_text(
        &self,
        text: &str,
        params: &MonophoneInferenceParams,
    ) -> Result<Vec<i16>, MonophoneError> {
        let mut tokens = self.analyze(text, params)?;
        if tokens.is_empty() {
            log::warn!("No tokens produced for text: {text:?}");
            return Ok(vec![]);
        }

        let waveform = assemble(
            &mut tokens,
            &self.catalog,
            params.emphasis_gain,
            params.volume.unwrap_or(1.0),
        )?;
        log::debug!(
            "Synthesized {} tokens into {} samples at {} Hz",
            tokens.len(),
            waveform.len(),
            self.catalog.sample_rate()
        );
        Ok(waveform)
    }

    pub fn sample_rate(&self) -> u32 {
        self.catalog.sample_rate()
    }

    /// List all available phoneme units.
    pub fn list_units(&self) -> Vec<&str> {
        self.catalog.list_units()
    }
}

fn find_dictionary(model_dir: &Path) -> Result<PathBuf, MonophoneError> {
    DEFAULT_DICTIONARY_FILES
        .iter()
        .map(|name| model_dir.join(name))
        .find(|path| path.exists())
        .ok_or_else(|| {
            MonophoneError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "No pronunciation dictionary ({}) found in {}",
                    DEFAULT_DICTIONARY_FILES.join(" or "),
                    model_dir.display()
                ),
            ))
        })
}
