//! Russian-to-English translation.
//!
//! Translation is the second injected transformation capability. It is
//! typically backed by a network service, so the crate only defines the
//! [`Translator`] seam and leaves the transport to the caller; any
//! `Fn(&str) -> Result<String>` closure is accepted. Converters perform no
//! retries; a failed call is terminal for that conversion.
//!
//! Book citations abbreviate a handful of cities so often that translating
//! them is wasted work; [`city_name`] resolves those from a fixed table
//! before the translator is ever consulted.

use either::Either::{self, Left, Right};

use crate::Result;

/// Translates Russian text into English.
pub trait Translator {
    /// Translates `text` into English.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Translation` when the backing service
    /// fails; the converters treat that as a field-level failure.
    fn translate(&self, text: &str) -> Result<String>;
}

impl<F> Translator for F
where
    F: Fn(&str) -> Result<String>,
{
    fn translate(&self, text: &str) -> Result<String> {
        self(text)
    }
}

/// Well-known publication cities, in the abbreviated and the full spelling
/// used by GOST citations.
const KNOWN_CITIES: &[(&str, &str)] = &[
    ("М.", "Moscow"),
    ("Москва", "Moscow"),
    ("СПб.", "Saint Petersburg"),
    ("Санкт-Петербург", "Saint Petersburg"),
    ("Л.", "Leningrad"),
    ("Ленинград", "Leningrad"),
];

/// Resolves a captured city through the well-known-city table.
///
/// Returns `Left` with the English name on a table hit, or `Right` with the
/// original text when the city still needs a live translation.
///
/// # Example
///
/// ```
/// use either::Either;
/// use gostbib::translate::city_name;
///
/// assert_eq!(city_name("М."), Either::Left("Moscow"));
/// assert_eq!(city_name("Тверь"), Either::Right("Тверь"));
/// ```
pub fn city_name(city: &str) -> Either<&'static str, &str> {
    KNOWN_CITIES
        .iter()
        .find(|&&(russian, _)| russian == city)
        .map_or(Right(city), |&(_, english)| Left(english))
}
