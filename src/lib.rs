//! A library for converting GOST-style Russian citations into English
//! reference-list entries.
//!
//! `gostbib` takes a single free-text citation written in the Cyrillic GOST
//! convention (a journal article or a book), extracts its bibliographic
//! fields with independent pattern probes, transliterates and translates the
//! textual fields, and renders a reference string suitable for the reference
//! list of an international publication.
//!
//! # Key Features
//!
//! - **Two citation kinds**: journal articles (`Author. Title // Journal.
//!   Year. No N. С. P1–P2.`) and books (`Author. Title. City: Publisher,
//!   Year. N с.`), each with its own pattern rules and output template.
//! - **Fault-tolerant extraction**: every field is an independent probe over
//!   the original string; a field that does not match is simply absent, and
//!   a conversion with a missing required field returns a fixed format-hint
//!   message instead of a partial citation.
//! - **Pluggable transformations**: transliteration and translation are
//!   traits, so the network-bound translation service can be swapped for a
//!   deterministic stand-in in tests. A Cyrillic-to-Latin transliteration
//!   scheme is built in.
//!
//! # Basic Usage
//!
//! ```rust
//! use gostbib::{ArticleConverter, GostTransliterator, Translator};
//!
//! struct Glossary;
//!
//! impl Translator for Glossary {
//!     fn translate(&self, _text: &str) -> gostbib::Result<String> {
//!         Ok("New methods of data analysis".to_string())
//!     }
//! }
//!
//! let citation = "Иванов И.И. Новые методы анализа данных // Вестник науки. 2021. No 3. С. 15–28.";
//! let converter = ArticleConverter::new(citation);
//! let reference = converter.get_bibliography(&GostTransliterator, &Glossary);
//! assert_eq!(
//!     reference,
//!     "Ivanov I.I. \"Novye metody analiza dannykh\" [New methods of data analysis], Vestnik nauki, 2021, № 3, pp. 15–28. (In Russian)",
//! );
//! ```
//!
//! Closures are translators too, which keeps one-off callers short:
//!
//! ```rust
//! use gostbib::{convert, CitationKind, GostTransliterator, Result};
//!
//! let translator = |_text: &str| -> Result<String> {
//!     Ok("Fundamentals of programming".to_string())
//! };
//! let citation = "Петров П.П. Основы программирования. М.: Наука, 2020. 150 с.";
//! let reference = convert(CitationKind::Book, citation, &GostTransliterator, &translator);
//! assert!(reference.starts_with("Petrov P.P."));
//! ```
//!
//! # Error Handling
//!
//! The fallible stages ([`ArticleConverter::transliterate`],
//! [`ArticleConverter::translate`] and their book counterparts) use a custom
//! [`Result`] wrapping [`ConversionError`]. `get_bibliography` itself never
//! fails: any missing field or transformation error collapses into the
//! kind-specific format hint ([`ARTICLE_FORMAT_HINT`] / [`BOOK_FORMAT_HINT`]),
//! so a conversion has exactly two possible outcomes.
//!
//! # Thread Safety
//!
//! Converters own their extracted fields and share no mutable state; the
//! compiled patterns and the city lookup table are immutable process-wide
//! data. Independent conversions can run concurrently without locking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod article;
pub mod book;
pub mod translate;
pub mod translit;
mod utils;

// Reexports
pub use article::{ArticleConverter, ARTICLE_FORMAT_HINT};
pub use book::{BookConverter, BOOK_FORMAT_HINT};
pub use translate::Translator;
pub use translit::{GostTransliterator, Transliterator};

/// A specialized Result type for citation conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Represents errors that can occur while converting a citation.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Transliteration failed: {0}")]
    Transliteration(String),

    #[error("Translation failed: {0}")]
    Translation(String),
}

/// Classification of a bibliographic entry, selecting the pattern rules and
/// the output template that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CitationKind {
    /// A journal article: `Author. Title // Journal. Year. No N. С. P1–P2.`
    Article,
    /// A book: `Author. Title. City: Publisher, Year. N с.`
    Book,
}

/// The fields captured from one raw citation.
///
/// Every field is optional: a pattern that did not match leaves its field
/// `None`, and no field is ever back-filled from another one. A `FieldSet`
/// is built exactly once, when a converter is constructed, by probing the
/// same original string with every pattern of the selected kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    /// Author in "Surname Initials." form.
    pub author: Option<String>,
    /// Title of the work.
    pub title: Option<String>,
    /// Journal name (articles only).
    pub journal: Option<String>,
    /// Publishing house (books only).
    pub publisher: Option<String>,
    /// City of publication (books only).
    pub city: Option<String>,
    /// Four-digit publication year.
    pub year: Option<String>,
    /// Issue number (articles only).
    pub issue: Option<String>,
    /// Page range (articles) or page count (books).
    pub pages: Option<String>,
}

/// Latin-script renderings of the textual fields of one citation.
///
/// Produced fresh on every formatting call and discarded after the template
/// is filled in; results are never cached on the [`FieldSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transliterated {
    pub author: String,
    pub title: String,
    /// Journal name for articles, publishing house for books.
    pub venue: String,
}

/// English renderings of the semantic fields of one citation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    pub title: String,
    /// Books only; resolved through the well-known-city table before the
    /// translator is consulted.
    pub city: Option<String>,
}

/// Converts a single citation of the given kind, returning either the
/// formatted reference or the kind-specific format hint.
///
/// This is the one-shot entry point over [`ArticleConverter`] and
/// [`BookConverter`] for callers that do not need the intermediate stages.
pub fn convert(
    kind: CitationKind,
    citation: &str,
    scheme: &dyn Transliterator,
    translator: &dyn Translator,
) -> String {
    match kind {
        CitationKind::Article => {
            ArticleConverter::new(citation).get_bibliography(scheme, translator)
        }
        CitationKind::Book => BookConverter::new(citation).get_bibliography(scheme, translator),
    }
}

pub(crate) fn require_field<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str> {
    field
        .as_deref()
        .ok_or_else(|| ConversionError::MissingField(name.to_string()))
}
