use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::model::MonophoneError;
use super::resolver::PronunciationLookup;

/// Pronunciation dictionary: lowercase word → candidate phoneme sequences.
///
/// Candidates keep the order they were read in, so the first entry of a
/// word is always the same one.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl Lexicon {
    /// Load a dictionary file.
    ///
    /// Files ending in `.json` are read with [`Lexicon::load_json`]; anything
    /// else is parsed as a CMU Pronouncing Dictionary.
    pub fn load(path: &Path) -> Result<Self, MonophoneError> {
        let lexicon = if path.extension().and_then(|e| e.to_str()) == Some("json") {
            Self::load_json(path)?
        } else {
            let bytes = std::fs::read(path)?;
            Self::parse_cmudict(&String::from_utf8_lossy(&bytes))?
        };
        log::info!(
            "Loaded {} dictionary words from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Parse CMU dictionary text.
    ///
    /// Each line is `WORD PH1 PH2 ...`; alternates are written `WORD(2)`.
    /// Lines starting with `;;;` and trailing `# ...` comments are ignored.
    pub fn parse_cmudict(content: &str) -> Result<Self, MonophoneError> {
        let mut lexicon = Self::default();

        for (line_no, line) in content.lines().enumerate() {
            if line.starts_with(";;;") {
                continue;
            }
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(headword) = fields.next() else {
                continue;
            };
            let phones: Vec<String> = fields.map(str::to_string).collect();
            if phones.is_empty() {
                return Err(MonophoneError::Lexicon(format!(
                    "line {}: '{headword}' has no phonemes",
                    line_no + 1
                )));
            }

            lexicon.insert(strip_variant(headword), phones);
        }

        Ok(lexicon)
    }

    /// Load a JSON dictionary of the form `{"word": [["HH", "AH0", ...], ...]}`.
    ///
    /// Keys that only differ by case are merged in byte order of the key,
    /// so `"CAT"` candidates come before `"Cat"` and `"cat"`.
    pub fn load_json(path: &Path) -> Result<Self, MonophoneError> {
        let content = std::fs::read_to_string(path)?;
        let map: BTreeMap<String, Vec<Vec<String>>> = serde_json::from_str(&content)
            .map_err(|e| MonophoneError::Lexicon(format!("Failed to parse JSON: {e}")))?;

        let mut lexicon = Self::default();
        for (word, candidates) in map {
            for phones in candidates {
                lexicon.insert(&word, phones);
            }
        }
        Ok(lexicon)
    }

    /// Build a lexicon from in-memory entries.
    pub fn from_entries<I, W, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, Vec<Vec<P>>)>,
        W: AsRef<str>,
        P: Into<String>,
    {
        let mut lexicon = Self::default();
        for (word, candidates) in entries {
            for phones in candidates {
                lexicon.insert(word.as_ref(), phones.into_iter().map(Into::into).collect());
            }
        }
        lexicon
    }

    fn insert(&mut self, word: &str, phones: Vec<String>) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(phones);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationLookup for Lexicon {
    fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]> {
        self.entries.get(word).map(Vec::as_slice)
    }
}

/// `tomato(2)` → `tomato`.
fn strip_variant(headword: &str) -> &str {
    match headword.find('(') {
        Some(open) if open > 0 && headword.ends_with(')') => &headword[..open],
        _ => headword,
    }
}

#[cfg(test)]
mod tests {
    use super::{strip_variant, Lexicon};
    use crate::engines::monophone::{resolver::PronunciationLookup, MonophoneError};

    const SAMPLE: &str = ";;; CMU sample
HELLO  HH AH0 L OW1
TOMATO  T AH0 M EY1 T OW2
TOMATO(2)  T AH0 M AA1 T OW2

d'artagnan D AH0 T AE1 N Y AH0 N # place, name
";

    #[test]
    fn parses_cmudict_lines_in_order() {
        let lexicon = Lexicon::parse_cmudict(SAMPLE).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(
            lexicon.pronunciations("hello").unwrap(),
            &[vec!["HH", "AH0", "L", "OW1"]]
        );
        let tomato = lexicon.pronunciations("tomato").unwrap();
        assert_eq!(tomato.len(), 2);
        assert_eq!(tomato[0][3], "EY1");
        assert_eq!(tomato[1][3], "AA1");
        assert_eq!(lexicon.pronunciations("d'artagnan").unwrap()[0].len(), 8);
    }

    #[test]
    fn lookups_are_lowercase() {
        let lexicon = Lexicon::parse_cmudict(SAMPLE).unwrap();
        assert!(lexicon.contains("hello"));
        assert!(!lexicon.contains("HELLO"));
    }

    #[test]
    fn headword_without_phonemes_is_rejected() {
        let err = Lexicon::parse_cmudict("HELLO HH AH0\nBROKEN\n").unwrap_err();
        assert!(matches!(err, MonophoneError::Lexicon(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn loads_json_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, r#"{"Cat": [["K", "AE1", "T"]], "a": [["AH0"], ["EY1"]]}"#)
            .unwrap();

        let lexicon = Lexicon::load(&path).unwrap();
        assert_eq!(lexicon.pronunciations("cat").unwrap()[0], vec!["K", "AE1", "T"]);
        assert_eq!(lexicon.pronunciations("a").unwrap()[1], vec!["EY1"]);
    }

    #[test]
    fn json_keys_differing_by_case_merge_in_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cased.json");
        std::fs::write(
            &path,
            r#"{"Cat": [["K", "AE1", "T"]], "cat": [["X"]], "CAT": [["Y"]]}"#,
        )
        .unwrap();

        for _ in 0..20 {
            let lexicon = Lexicon::load(&path).unwrap();
            let cat = lexicon.pronunciations("cat").unwrap();
            assert_eq!(cat.len(), 3);
            assert_eq!(cat[0], vec!["Y"]);
            assert_eq!(cat[1], vec!["K", "AE1", "T"]);
            assert_eq!(cat[2], vec!["X"]);
        }
    }

    #[test]
    fn malformed_json_is_lexicon_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(Lexicon::load(&path), Err(MonophoneError::Lexicon(_))));
    }

    #[test]
    fn strips_variant_suffix() {
        assert_eq!(strip_variant("tomato(2)"), "tomato");
        assert_eq!(strip_variant("tomato"), "tomato");
        assert_eq!(strip_variant("(paren"), "(paren");
    }
}
