use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::assembler::UnitCatalog;
use super::model::MonophoneError;

/// Storage for all loaded monophone recordings.
///
/// Each unit is keyed by its phoneme symbol (the WAV file stem) and holds
/// mono 16-bit samples. All units share one sample rate.
#[derive(Debug, Clone)]
pub struct MonophoneCatalog {
    units: HashMap<String, Vec<i16>>,
    sample_rate: u32,
}

impl MonophoneCatalog {
    /// Load every `.wav` file under `dir`, searching subdirectories too.
    ///
    /// Hidden files are skipped. Clips must be mono 16-bit PCM and share
    /// one sample rate.
    pub fn load(dir: &Path) -> Result<Self, MonophoneError> {
        let mut paths = Vec::new();
        collect_wavs(dir, &mut paths)?;
        paths.sort();

        let mut units = HashMap::new();
        let mut sample_rate = None;

        for path in paths {
            let Some(symbol) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping monophone with non UTF-8 name: {}", path.display());
                continue;
            };
            let symbol = symbol.to_string();

            let (rate, samples) = read_clip(&path)?;
            match sample_rate {
                None => sample_rate = Some(rate),
                Some(expected) if expected != rate => {
                    return Err(MonophoneError::Catalog(format!(
                        "{} is {rate} Hz but other monophones are {expected} Hz",
                        path.display()
                    )));
                }
                Some(_) => {}
            }

            if units.insert(symbol, samples).is_some() {
                log::warn!("Duplicate monophone {} replaces an earlier file", path.display());
            }
        }

        let sample_rate = sample_rate.ok_or_else(|| {
            MonophoneError::Catalog(format!("no .wav files found in {}", dir.display()))
        })?;

        log::info!("Loaded {} monophones at {} Hz", units.len(), sample_rate);
        Ok(Self { units, sample_rate })
    }

    /// Build a catalog from in-memory clips.
    pub fn from_clips<I, S>(sample_rate: u32, clips: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<i16>)>,
        S: Into<String>,
    {
        Self {
            units: clips.into_iter().map(|(s, c)| (s.into(), c)).collect(),
            sample_rate,
        }
    }

    /// List all available phoneme symbols in sorted order.
    pub fn list_units(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl UnitCatalog for MonophoneCatalog {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn unit(&self, symbol: &str) -> Option<&[i16]> {
        self.units.get(symbol).map(Vec::as_slice)
    }
}

fn collect_wavs(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), MonophoneError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_wavs(&path, out)?;
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.ends_with(".wav") && !name.starts_with('.') {
            out.push(path);
        } else {
            log::debug!("Skipping {}", path.display());
        }
    }
    Ok(())
}

/// Read a mono 16-bit PCM clip. Returns its sample rate and samples.
fn read_clip(path: &Path) -> Result<(u32, Vec<i16>), MonophoneError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    if spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(MonophoneError::Catalog(format!(
            "{}: expected mono 16-bit PCM, got {} channel(s) of {}-bit {:?}",
            path.display(),
            spec.channels,
            spec.bits_per_sample,
            spec.sample_format
        )));
    }

    let samples = reader.samples::<i16>().collect::<Result<Vec<_>, _>>()?;
    Ok((spec.sample_rate, samples))
}
