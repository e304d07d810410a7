use super::dates::{expand_date, is_date_shape, YearZeroStyle};
use super::model::{MonophoneError, Pause, Token};
use super::numbers::{expand_number, is_numeral};

/// Split a phrase into normalized tokens.
///
/// In spelling mode every letter or digit becomes its own token first.
pub fn tokenize(
    phrase: &str,
    spell: bool,
    year_zero: YearZeroStyle,
) -> Result<Vec<Token>, MonophoneError> {
    let spelled;
    let phrase = if spell {
        spelled = spell_out(phrase);
        spelled.as_str()
    } else {
        phrase
    };

    phrase
        .split_whitespace()
        .enumerate()
        .map(|(index, raw)| normalize_token(raw, index, year_zero))
        .collect()
}

/// Rewrite a phrase so each character is separated by a space.
///
/// Pause marks stay attached to the character before them so spelled
/// phrases keep their pauses. Anything other than an ASCII letter or digit
/// is dropped.
pub fn spell_out(phrase: &str) -> String {
    let mut spelled = String::with_capacity(phrase.len() * 2);
    for ch in phrase.chars().filter(|ch| !ch.is_whitespace()) {
        if Pause::from_mark(ch) != Pause::None {
            if spelled.ends_with(' ') {
                spelled.pop();
                spelled.push(ch);
                spelled.push(' ');
            }
        } else if ch.is_ascii_alphanumeric() {
            spelled.push(ch);
            spelled.push(' ');
        }
    }
    spelled
}

/// Build the token at `index` from its raw text.
///
/// Emphasis braces and one pause mark are peeled off, numbers and dates
/// are expanded, then everything but ASCII letters is removed.
pub fn normalize_token(
    raw: &str,
    index: usize,
    year_zero: YearZeroStyle,
) -> Result<Token, MonophoneError> {
    let (mut pause, mut body) = peel_pause(raw);

    let emphasized = body.len() >= 2 && body.starts_with('{') && body.ends_with('}');
    if emphasized {
        body = &body[1..body.len() - 1];
    }
    // `{word,}` pauses too.
    if pause == Pause::None {
        (pause, body) = peel_pause(body);
    }

    let (text, is_numeric_shape) = if is_numeral(body) {
        (expand_number(body)?, true)
    } else if is_date_shape(body) {
        (expand_date(body, year_zero)?, true)
    } else {
        (body.to_string(), false)
    };

    let words = plain_words(&text);
    if words.is_empty() {
        return Err(MonophoneError::Format(format!(
            "'{raw}' has nothing to pronounce"
        )));
    }
    log::debug!("Token {index} {raw:?} -> {words:?} (pause {pause:?}, emphasized {emphasized})");

    Ok(Token {
        raw: raw.to_string(),
        index,
        emphasized,
        pause,
        is_numeric_shape,
        words,
        ..Default::default()
    })
}

fn peel_pause(text: &str) -> (Pause, &str) {
    match text.chars().next_back() {
        Some(last) if Pause::from_mark(last) != Pause::None => {
            (Pause::from_mark(last), &text[..text.len() - last.len_utf8()])
        }
        _ => (Pause::None, text),
    }
}

/// Lowercase ASCII words left after stripping every other character.
fn plain_words(text: &str) -> Vec<String> {
    text.chars()
        .filter(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
