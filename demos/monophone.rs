use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use monophone_tts::{
    engines::monophone::{MonophoneEngine, MonophoneInferenceParams, MonophoneModelParams},
    SynthesisEngine,
};

/// A basic text-to-speech app that synthesises an input phrase using monophone unit selection.
#[derive(Debug, Parser)]
#[command(name = "monophone")]
struct Cli {
    /// Folder containing monophone wavs
    #[arg(long, default_value = "./monophones")]
    monophones: PathBuf,
    /// Pronunciation dictionary (defaults to cmudict.dict inside the monophone folder)
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Save the output audio to a file
    #[arg(long, short = 'o')]
    outfile: Option<PathBuf>,
    /// Spell the phrase instead of pronouncing it
    #[arg(long, short = 's')]
    spell: bool,
    /// A float between 0.0 and 1.0 representing the desired volume
    #[arg(long, short = 'v')]
    volume: Option<f32>,
    /// The phrase to be synthesised
    phrase: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut engine = MonophoneEngine::new();
    let load_start = Instant::now();
    engine.load_model_with_params(
        &cli.monophones,
        MonophoneModelParams {
            dictionary_path: cli.dictionary,
        },
    )?;
    println!(
        "Loaded {} monophones in {:.2?}",
        engine.list_units().len(),
        load_start.elapsed()
    );

    let params = MonophoneInferenceParams {
        spell: cli.spell,
        volume: cli.volume,
        ..Default::default()
    };

    let result = engine.synthesize(&cli.phrase, Some(params))?;
    println!(
        "Synthesized {:.2}s of audio at {}Hz",
        result.duration_secs(),
        result.sample_rate
    );

    if let Some(outfile) = cli.outfile {
        result.write_wav(&outfile)?;
        println!("Saved to {}", outfile.display());
    }

    engine.unload_model();
    Ok(())
}
