use super::model::{MonophoneError, Token};

/// Source of word pronunciations.
///
/// Candidates are returned in dictionary order; the resolver always takes
/// the first one.
pub trait PronunciationLookup {
    /// All pronunciations of a lowercase `word`, or `None` if it is unknown.
    fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]>;
}

/// Resolve one word to its first pronunciation with stress digits removed.
pub fn resolve_word<L>(word: &str, lookup: &L) -> Result<Vec<String>, MonophoneError>
where
    L: PronunciationLookup + ?Sized,
{
    let first = lookup
        .pronunciations(word)
        .and_then(|candidates| candidates.first())
        .ok_or_else(|| MonophoneError::Pronunciation(word.to_string()))?;

    Ok(first.iter().map(|symbol| normalize_symbol(symbol)).collect())
}

/// Lowercase a dictionary phoneme and drop its stress digits (`AH0` → `ah`).
pub fn normalize_symbol(symbol: &str) -> String {
    symbol
        .chars()
        .filter(|ch| !ch.is_ascii_digit())
        .collect::<String>()
        .to_lowercase()
}

/// Fill in `phoneme_groups` for every token, in word order.
///
/// Stops at the first unknown word.
pub fn resolve_tokens<L>(tokens: &mut [Token], lookup: &L) -> Result<(), MonophoneError>
where
    L: PronunciationLookup + ?Sized,
{
    for token in tokens.iter_mut() {
        token.phoneme_groups = token
            .words
            .iter()
            .map(|word| resolve_word(word, lookup))
            .collect::<Result<_, _>>()?;
    }
    Ok(())
}
