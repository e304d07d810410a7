//! Concatenative text-to-speech from monophone recordings.
//!
//! Each word of the phrase is looked up in a CMU-style pronunciation
//! dictionary and spoken by joining one recording per phoneme. Before lookup,
//! numbers and dates are expanded to words and prosody cues are read from
//! the text.
//!
//! # Model Directory Layout
//!
//! ```text
//! monophones/
//! ├── aa.wav          # one mono 16-bit clip per phoneme, named by symbol
//! ├── ae.wav
//! ├── ...
//! └── cmudict.dict    # pronunciation dictionary (or cmudict.json)
//! ```
//!
//! All clips must share one sample rate.
//!
//! # Text Markup
//!
//! | Input | Effect |
//! |---|---|
//! | `{word}` | emphasized (scaled by `emphasis_gain`) |
//! | `word,` | quarter-second pause after the word |
//! | `word.` `word!` `word?` | half-second pause after the word |
//! | `344`, `3.14` | read as "three hundred and forty four", "three point one four" |
//! | `22/01`, `22/01/80`, `22/01/1980` | read as "the twenty second of January ..." |
//!
//! Numbers from 0 to 999 are supported; larger or negative numbers are
//! rejected.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use monophone_tts::{SynthesisEngine, engines::monophone::MonophoneEngine};
//! use std::path::PathBuf;
//!
//! let mut engine = MonophoneEngine::new();
//! engine.load_model(&PathBuf::from("monophones"))?;
//!
//! let result = engine.synthesize("HELLO. i was born {22/01} with {3.14} or, 344 cats", None)?;
//! println!("Generated {} samples at {}Hz", result.samples.len(), result.sample_rate);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Spelling and Volume
//!
//! ```rust,no_run
//! use monophone_tts::{SynthesisEngine, engines::monophone::{MonophoneEngine, MonophoneInferenceParams}};
//! use std::path::PathBuf;
//!
//! let mut engine = MonophoneEngine::new();
//! engine.load_model(&PathBuf::from("monophones"))?;
//!
//! let params = MonophoneInferenceParams {
//!     spell: true,
//!     volume: Some(0.5),
//!     ..Default::default()
//! };
//!
//! engine.synthesize_to_file("rose", &PathBuf::from("out.wav"), Some(params))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod catalog;
pub mod dates;
pub mod engine;
pub mod lexicon;
pub mod model;
pub mod normalizer;
pub mod numbers;
pub mod resolver;

pub use assembler::UnitCatalog;
pub use catalog::MonophoneCatalog;
pub use dates::YearZeroStyle;
pub use engine::{
    MonophoneEngine, MonophoneInferenceParams, MonophoneInferenceParamsBuilder,
    MonophoneModelParams,
};
pub use lexicon::Lexicon;
pub use model::{MonophoneError, Pause, Token};
pub use resolver::PronunciationLookup;
