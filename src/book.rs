//! GOST book citation converter.
//!
//! Handles citations of the form
//! `Фамилия И.О. Название книги. М.: Издательство, 2020. 150 с.`
//!
//! # Example
//!
//! ```
//! use gostbib::{BookConverter, GostTransliterator, Translator};
//!
//! struct Glossary;
//!
//! impl Translator for Glossary {
//!     fn translate(&self, _text: &str) -> gostbib::Result<String> {
//!         Ok("Fundamentals of programming".to_string())
//!     }
//! }
//!
//! let citation = "Петров П.П. Основы программирования. М.: Наука, 2020. 150 с.";
//! let reference = BookConverter::new(citation).get_bibliography(&GostTransliterator, &Glossary);
//! assert_eq!(
//!     reference,
//!     "Petrov P.P. Osnovy programmirovaniya [Fundamentals of programming]. Moscow: Nauka 2020. 150 pp. (In Russian)",
//! );
//! ```

mod extract;

use either::Either::{Left, Right};
use tracing::{debug, trace};

use crate::translate::{self, Translator};
use crate::translit::Transliterator;
use crate::{require_field, ConversionError, FieldSet, Result, Translated, Transliterated};

/// Message returned when a book citation cannot be converted, describing the
/// expected layout.
pub const BOOK_FORMAT_HINT: &str = "Не удалось разобрать ссылку. Ожидаемый формат: \
Фамилия И.О. Название книги. М.: Издательство, 2020. 150 с.";

/// Converter for book citations.
///
/// Extraction runs once, at construction time; the transformation stages run
/// on every [`get_bibliography`](Self::get_bibliography) call.
#[derive(Debug, Clone)]
pub struct BookConverter {
    fields: FieldSet,
}

impl BookConverter {
    /// Creates a converter over `citation`, probing it with every book
    /// pattern rule.
    ///
    /// Construction never fails; fields whose pattern did not match are left
    /// absent and surface later as the format hint.
    #[must_use]
    pub fn new(citation: &str) -> Self {
        let fields = extract::book_fields(citation);
        trace!(?fields, "extracted book fields");
        Self { fields }
    }

    /// The fields captured at construction time.
    #[must_use]
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Latin-script renderings of the author, title and publishing house.
    ///
    /// # Errors
    ///
    /// Fails when one of the three fields is absent or the scheme rejects
    /// its text.
    pub fn transliterate(&self, scheme: &dyn Transliterator) -> Result<Transliterated> {
        Ok(Transliterated {
            author: scheme.transliterate(require_field(&self.fields.author, "author")?)?,
            title: scheme.transliterate(require_field(&self.fields.title, "title")?)?,
            venue: scheme.transliterate(require_field(&self.fields.publisher, "publisher")?)?,
        })
    }

    /// English renderings of the title and the city of publication.
    ///
    /// The city goes through the well-known-city table first; the translator
    /// is only consulted on a miss.
    ///
    /// # Errors
    ///
    /// Fails when the title or city is absent or the translator fails.
    pub fn translate(&self, translator: &dyn Translator) -> Result<Translated> {
        let title = require_field(&self.fields.title, "title")?;
        let city = require_field(&self.fields.city, "city")?;
        let city_en = match translate::city_name(city) {
            Left(known) => known.to_string(),
            Right(other) => translator.translate(other)?,
        };
        Ok(Translated {
            title: translator.translate(title)?,
            city: Some(city_en),
        })
    }

    /// Renders the citation as an English reference-list entry.
    ///
    /// Idempotent: each call re-runs both transformation stages from the
    /// same field set. When a required field is missing or a transformation
    /// fails, the fixed [`BOOK_FORMAT_HINT`] is returned instead of a
    /// partial citation.
    pub fn get_bibliography(
        &self,
        scheme: &dyn Transliterator,
        translator: &dyn Translator,
    ) -> String {
        self.render(scheme, translator).unwrap_or_else(|error| {
            debug!(%error, "book conversion fell back to the format hint");
            BOOK_FORMAT_HINT.to_string()
        })
    }

    fn render(&self, scheme: &dyn Transliterator, translator: &dyn Translator) -> Result<String> {
        let latin = self.transliterate(scheme)?;
        let english = self.translate(translator)?;
        let city = english
            .city
            .ok_or_else(|| ConversionError::MissingField("city".to_string()))?;
        let year = require_field(&self.fields.year, "year")?;
        let pages = require_field(&self.fields.pages, "pages")?;
        Ok(format!(
            "{}. {} [{}]. {}: {} {}. {} pp. (In Russian)",
            latin.author, latin.title, english.title, city, latin.venue, year, pages
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::GostTransliterator;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    const CITATION: &str = "Петров П.П. Основы программирования. М.: Наука, 2020. 150 с.";

    fn stub_translator(text: &str) -> crate::Result<String> {
        match text {
            "Основы программирования" => Ok("Fundamentals of programming".to_string()),
            other => Err(ConversionError::Translation(format!(
                "no stub translation for {other}"
            ))),
        }
    }

    #[test]
    fn test_get_bibliography() {
        let converter = BookConverter::new(CITATION);
        let reference = converter.get_bibliography(&GostTransliterator, &stub_translator);
        assert_eq!(
            reference,
            "Petrov P.P. Osnovy programmirovaniya [Fundamentals of programming]. \
             Moscow: Nauka 2020. 150 pp. (In Russian)"
        );
    }

    #[test]
    fn test_get_bibliography_is_idempotent() {
        let converter = BookConverter::new(CITATION);
        let first = converter.get_bibliography(&GostTransliterator, &stub_translator);
        let second = converter.get_bibliography(&GostTransliterator, &stub_translator);
        assert_eq!(first, second);
    }

    #[test]
    fn test_known_city_skips_the_translator() {
        let calls = RefCell::new(Vec::new());
        let recording = |text: &str| -> crate::Result<String> {
            calls.borrow_mut().push(text.to_string());
            Ok("Fundamentals of programming".to_string())
        };
        let converter = BookConverter::new(CITATION);
        converter.get_bibliography(&GostTransliterator, &recording);
        assert_eq!(*calls.borrow(), ["Основы программирования"]);
    }

    #[test]
    fn test_unknown_city_goes_through_the_translator() {
        let citation = "Сидоров С.С. Теория графов. Новосибирск: Наука, 2019. 200 с.";
        let translator = |text: &str| -> crate::Result<String> {
            Ok(match text {
                "Теория графов" => "Graph theory".to_string(),
                "Новосибирск" => "Novosibirsk".to_string(),
                other => other.to_string(),
            })
        };
        let reference = BookConverter::new(citation).get_bibliography(&GostTransliterator, &translator);
        assert_eq!(
            reference,
            "Sidorov S.S. Teoriya grafov [Graph theory]. Novosibirsk: Nauka 2019. 200 pp. (In Russian)"
        );
    }

    #[test]
    fn test_translate_stage_resolves_city() {
        let converter = BookConverter::new(CITATION);
        let english = converter.translate(&stub_translator).unwrap();
        assert_eq!(english.title, "Fundamentals of programming");
        assert_eq!(english.city.as_deref(), Some("Moscow"));
    }

    #[test]
    fn test_missing_pages_returns_format_hint() {
        let converter = BookConverter::new("Петров П.П. Основы программирования. М.: Наука, 2020.");
        let reference = converter.get_bibliography(&GostTransliterator, &stub_translator);
        assert_eq!(reference, BOOK_FORMAT_HINT);
    }

    #[test]
    fn test_missing_year_returns_format_hint() {
        let converter = BookConverter::new("Петров П.П. Основы программирования. М.: Наука. 150 с.");
        let reference = converter.get_bibliography(&GostTransliterator, &stub_translator);
        assert_eq!(reference, BOOK_FORMAT_HINT);
    }

    #[test]
    fn test_translation_failure_returns_format_hint() {
        let failing = |_: &str| -> crate::Result<String> {
            Err(ConversionError::Translation("service unavailable".to_string()))
        };
        let converter = BookConverter::new(CITATION);
        assert_eq!(
            converter.get_bibliography(&GostTransliterator, &failing),
            BOOK_FORMAT_HINT
        );
    }
}
