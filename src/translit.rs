//! Cyrillic-to-Latin transliteration.
//!
//! Transliteration is one of the two injected transformation capabilities
//! consumed by the converters. The [`Transliterator`] trait is the seam; the
//! built-in [`GostTransliterator`] covers the common case without any
//! external service.
//!
//! # Example
//!
//! ```
//! use gostbib::{GostTransliterator, Transliterator};
//!
//! let latin = GostTransliterator.transliterate("Вестник науки").unwrap();
//! assert_eq!(latin, "Vestnik nauki");
//! ```

use crate::{ConversionError, Result};

/// Converts Cyrillic text to a Latin-script phonetic rendering.
///
/// Implementations must be deterministic for a fixed input; converters call
/// them once per textual field on every formatting pass and never memoize
/// the result.
pub trait Transliterator {
    /// Transliterates `text` to Latin script.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Transliteration` when the input cannot be
    /// transliterated; the converters treat that as a field-level failure.
    fn transliterate(&self, text: &str) -> Result<String>;
}

/// The built-in transliteration scheme.
///
/// A practical ASCII-only variant of GOST 7.79-2000 System B: digraphs for
/// the hushing consonants (ж→zh, ч→ch, ш→sh, щ→shch), х→kh, ц→ts, ю→yu,
/// я→ya, ё→yo, and the hard/soft signs dropped. Characters outside the
/// Cyrillic alphabet (digits, punctuation, Latin letters) pass through
/// unchanged, so mixed strings like initials keep their periods.
#[derive(Debug, Clone, Copy, Default)]
pub struct GostTransliterator;

impl Transliterator for GostTransliterator {
    fn transliterate(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(ConversionError::Transliteration(
                "empty input".to_string(),
            ));
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if let Some(mapped) = map_lower(c) {
                out.push_str(mapped);
            } else if let Some(mapped) = c.to_lowercase().next().and_then(map_lower) {
                out.push_str(&capitalize(mapped));
            } else {
                out.push(c);
            }
        }
        Ok(out)
    }
}

/// Latin rendering of a lowercase Cyrillic letter, or `None` for any other
/// character.
fn map_lower(c: char) -> Option<&'static str> {
    let mapped = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(mapped)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Иванов И.И.", "Ivanov I.I.")]
    #[case("Петров П.П", "Petrov P.P")]
    #[case("Вестник науки", "Vestnik nauki")]
    #[case("Новые методы анализа данных", "Novye metody analiza dannykh")]
    #[case("Основы программирования", "Osnovy programmirovaniya")]
    #[case("Журнал", "Zhurnal")]
    #[case("Чехов", "Chekhov")]
    #[case("Щедрин", "Shchedrin")]
    #[case("Цифра", "Tsifra")]
    #[case("Эксперимент", "Eksperiment")]
    #[case("объект", "obekt")]
    #[case("Юность", "Yunost")]
    #[case("январь", "yanvar")]
    #[case("ёлка", "yolka")]
    fn test_transliterate(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(GostTransliterator.transliterate(input).unwrap(), expected);
    }

    #[test]
    fn test_non_cyrillic_passes_through() {
        assert_eq!(
            GostTransliterator.transliterate("2021. No 3, pp. 15–28").unwrap(),
            "2021. No 3, pp. 15–28"
        );
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(GostTransliterator.transliterate("   ").is_err());
    }

    #[test]
    fn test_deterministic() {
        let first = GostTransliterator.transliterate("Вестник науки").unwrap();
        let second = GostTransliterator.transliterate("Вестник науки").unwrap();
        assert_eq!(first, second);
    }
}
