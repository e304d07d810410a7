use super::model::{MonophoneError, Token};

/// Source of monophone recordings.
///
/// Every unit shares one sample rate.
pub trait UnitCatalog {
    fn sample_rate(&self) -> u32;
    /// Samples for a phoneme symbol, or `None` if there is no recording.
    fn unit(&self, symbol: &str) -> Option<&[i16]>;
}

/// Build a token's audio from its phoneme groups.
///
/// Emphasis gain is applied before the pause, so the silence stays silent.
/// A token that already has audio is left untouched and reported as
/// [`MonophoneError::AlreadyAssembled`].
pub fn assemble_token<C>(
    token: &mut Token,
    catalog: &C,
    emphasis_gain: f32,
) -> Result<(), MonophoneError>
where
    C: UnitCatalog + ?Sized,
{
    if token.audio.is_some() {
        return Err(MonophoneError::AlreadyAssembled(token.index));
    }

    let mut audio = Vec::new();
    for symbol in token.phoneme_groups.iter().flatten() {
        let clip = catalog
            .unit(symbol)
            .ok_or_else(|| MonophoneError::MissingUnit(symbol.clone()))?;
        audio.extend_from_slice(clip);
    }

    if token.emphasized {
        apply_gain(&mut audio, emphasis_gain);
    }

    let silence = token.pause.silence_samples(catalog.sample_rate());
    audio.resize(audio.len() + silence, 0);

    token.audio = Some(audio);
    Ok(())
}

/// Assemble every token and join them into the final waveform.
///
/// Tokens are joined in `index` order. `volume` is applied last, to the
/// whole waveform.
pub fn assemble<C>(
    tokens: &mut [Token],
    catalog: &C,
    emphasis_gain: f32,
    volume: f32,
) -> Result<Vec<i16>, MonophoneError>
where
    C: UnitCatalog + ?Sized,
{
    for token in tokens.iter_mut() {
        assemble_token(token, catalog, emphasis_gain)?;
    }

    let mut ordered: Vec<&Token> = tokens.iter().collect();
    ordered.sort_by_key(|token| token.index);

    let total: usize = ordered
        .iter()
        .filter_map(|token| token.audio.as_ref())
        .map(Vec::len)
        .sum();
    let mut waveform = Vec::with_capacity(total);
    for audio in ordered.iter().filter_map(|token| token.audio.as_ref()) {
        waveform.extend_from_slice(audio);
    }

    apply_gain(&mut waveform, volume);
    Ok(waveform)
}

/// Multiply every sample by `gain`, saturating at the i16 range.
pub fn apply_gain(samples: &mut [i16], gain: f32) {
    if gain == 1.0 {
        return;
    }
    for sample in samples.iter_mut() {
        let scaled = (*sample as f32 * gain).round();
        *sample = scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{apply_gain, assemble, assemble_token, UnitCatalog};
    use crate::engines::monophone::{MonophoneError, Pause, Token};

    struct FakeCatalog {
        rate: u32,
        units: HashMap<&'static str, Vec<i16>>,
    }

    impl UnitCatalog for FakeCatalog {
        fn sample_rate(&self) -> u32 {
            self.rate
        }

        fn unit(&self, symbol: &str) -> Option<&[i16]> {
            self.units.get(symbol).map(Vec::as_slice)
        }
    }

    fn catalog() -> FakeCatalog {
        FakeCatalog {
            rate: 16,
            units: HashMap::from([("a", vec![100, -100]), ("b", vec![7]), ("c", vec![30000])]),
        }
    }

    fn token(index: usize, groups: &[&[&str]], pause: Pause, emphasized: bool) -> Token {
        Token {
            raw: format!("t{index}"),
            index,
            emphasized,
            pause,
            phoneme_groups: groups
                .iter()
                .map(|g| g.iter().map(|s| s.to_string()).collect())
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn concatenates_groups_in_order() {
        let mut t = token(0, &[&["a", "b"], &["b"]], Pause::None, false);
        assemble_token(&mut t, &catalog(), 1.0).unwrap();
        assert_eq!(t.audio, Some(vec![100, -100, 7, 7]));
    }

    #[test]
    fn pauses_append_exact_silence() {
        let cat = catalog();
        for (pause, silence) in [(Pause::None, 0), (Pause::Short, 4), (Pause::Long, 8)] {
            let mut t = token(0, &[&["b"]], pause, false);
            assemble_token(&mut t, &cat, 1.0).unwrap();
            let audio = t.audio.unwrap();
            assert_eq!(audio.len(), 1 + silence);
            assert!(audio[1..].iter().all(|&s| s == 0));
        }
    }

    #[test]
    fn emphasis_gain_scales_speech_not_silence() {
        let mut t = token(0, &[&["a"]], Pause::Short, true);
        assemble_token(&mut t, &catalog(), 2.0).unwrap();
        assert_eq!(t.audio, Some(vec![200, -200, 0, 0, 0, 0]));

        let mut plain = token(0, &[&["a"]], Pause::None, false);
        assemble_token(&mut plain, &catalog(), 2.0).unwrap();
        assert_eq!(plain.audio, Some(vec![100, -100]));
    }

    #[test]
    fn missing_unit_is_named() {
        let mut t = token(0, &[&["a", "zh"]], Pause::None, false);
        let err = assemble_token(&mut t, &catalog(), 1.0).unwrap_err();
        assert!(matches!(err, MonophoneError::MissingUnit(ref u) if u == "zh"));
        assert!(t.audio.is_none());
    }

    #[test]
    fn assembling_twice_is_an_error() {
        let mut t = token(4, &[&["b"]], Pause::None, false);
        assemble_token(&mut t, &catalog(), 1.0).unwrap();
        let err = assemble_token(&mut t, &catalog(), 2.0).unwrap_err();
        assert!(matches!(err, MonophoneError::AlreadyAssembled(4)));
        assert_eq!(t.audio, Some(vec![7]));

        let mut tokens = vec![token(0, &[&["a"]], Pause::None, false)];
        assemble(&mut tokens, &catalog(), 1.0, 1.0).unwrap();
        assert!(matches!(
            assemble(&mut tokens, &catalog(), 1.0, 1.0),
            Err(MonophoneError::AlreadyAssembled(0))
        ));
    }

    #[test]
    fn waveform_joins_tokens_by_index() {
        let mut tokens = vec![
            token(1, &[&["b"]], Pause::Short, true),
            token(0, &[&["a"]], Pause::None, false),
            token(2, &[&["c"]], Pause::None, false),
        ];
        let waveform = assemble(&mut tokens, &catalog(), 1.0, 1.0).unwrap();

        let mut expected = Vec::new();
        for index in 0..3 {
            let t = tokens.iter().find(|t| t.index == index).unwrap();
            expected.extend_from_slice(t.audio.as_ref().unwrap());
        }
        assert_eq!(waveform, expected);
        assert_eq!(waveform, vec![100, -100, 7, 0, 0, 0, 0, 30000]);
    }

    #[test]
    fn volume_applies_to_whole_waveform() {
        let mut tokens = vec![token(0, &[&["a", "b"]], Pause::None, false)];
        let waveform = assemble(&mut tokens, &catalog(), 1.0, 0.5).unwrap();
        assert_eq!(waveform, vec![50, -50, 4]);
        assert_eq!(tokens[0].audio, Some(vec![100, -100, 7]));
    }

    #[test]
    fn gain_saturates() {
        let mut samples = vec![30000, -30000, 0];
        apply_gain(&mut samples, 2.0);
        assert_eq!(samples, vec![i16::MAX, i16::MIN, 0]);
    }
}
