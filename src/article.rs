//! GOST journal-article citation converter.
//!
//! Handles citations of the form
//! `Фамилия И.О. Название статьи // Название журнала. 2021. No 3. С. 15–28.`
//!
//! # Example
//!
//! ```
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
//! assert!(reference.ends_with("(In Russian)"));
//! ```

mod extract;

use tracing::{debug, trace};

use crate::translate::Translator;
use crate::translit::Transliterator;
use crate::{require_field, FieldSet, Result, Translated, Transliterated};

/// Message returned when an article citation cannot be converted, describing
/// the expected layout.
pub const ARTICLE_FORMAT_HINT: &str = "Не удалось разобрать ссылку. Ожидаемый формат: \
Фамилия И.О. Название статьи // Название журнала. 2021. No 3. С. 15–28.";

/// Converter for journal-article citations.
///
/// Extraction runs once, at construction time; the transformation stages run
/// on every [`get_bibliography`](Self::get_bibliography) call.
#[derive(Debug, Clone)]
pub struct ArticleConverter {
    fields: FieldSet,
}

impl ArticleConverter {
    /// Creates a converter over `citation`, probing it with every article
    /// pattern rule.
    ///
    /// Construction never fails; fields whose pattern did not match are left
    /// absent and surface later as the format hint.
    #[must_use]
    pub fn new(citation: &str) -> Self {
        let fields = extract::article_fields(citation);
        trace!(?fields, "extracted article fields");
        Self { fields }
    }

    /// The fields captured at construction time.
    #[must_use]
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Latin-script renderings of the author, title and journal name.
    ///
    /// # Errors
    ///
    /// Fails when one of the three fields is absent or the scheme rejects
    /// its text.
    pub fn transliterate(&self, scheme: &dyn Transliterator) -> Result<Transliterated> {
        Ok(Transliterated {
            author: scheme.transliterate(require_field(&self.fields.author, "author")?)?,
            title: scheme.transliterate(require_field(&self.fields.title, "title")?)?,
            venue: scheme.transliterate(require_field(&self.fields.journal, "journal")?)?,
        })
    }

    /// English translation of the article title.
    ///
    /// # Errors
    ///
    /// Fails when the title is absent or the translator fails.
    pub fn translate(&self, translator: &dyn Translator) -> Result<Translated> {
        let title = require_field(&self.fields.title, "title")?;
        Ok(Translated {
            title: translator.translate(title)?,
            city: None,
        })
    }

    /// Renders the citation as an English reference-list entry.
    ///
    /// Idempotent: each call re-runs both transformation stages from the
    /// same field set. When a required field is missing or a transformation
    /// fails, the fixed [`ARTICLE_FORMAT_HINT`] is returned instead of a
    /// partial citation.
    pub fn get_bibliography(
        &self,
        scheme: &dyn Transliterator,
        translator: &dyn Translator,
    ) -> String {
        self.render(scheme, translator).unwrap_or_else(|error| {
            debug!(%error, "article conversion fell back to the format hint");
            ARTICLE_FORMAT_HINT.to_string()
        })
    }

    fn render(&self, scheme: &dyn Transliterator, translator: &dyn Translator) -> Result<String> {
        let latin = self.transliterate(scheme)?;
        let english = self.translate(translator)?;
        let year = require_field(&self.fields.year, "year")?;
        let issue = require_field(&self.fields.issue, "issue")?;
        let pages = require_field(&self.fields.pages, "pages")?;
        Ok(format!(
            "{} \"{}\" [{}], {}, {}, № {}, pp. {}. (In Russian)",
            latin.author, latin.title, english.title, latin.venue, year, issue, pages
        ))
    }
}
