//! Pattern rules for book citations.
//!
//! Each rule is a single probe over the full citation string; none of them
//! consumes input or depends on another rule having matched. The city rule
//! stops at the first colon, so a subtitle colon inside the title misleads
//! it; this overlap is left unresolved.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::first_capture;
use crate::FieldSet;

/// Surname and initials, up to the first period that follows the two-part
/// name. Backtracking keeps that period out of the capture.
static AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([\w.\-]+\s[\w.]+)\.").unwrap());

/// Title: from the first sentence terminator up to the period preceding the
/// city/publisher separator (the colon whose tail holds no further colon).
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s(.+)\.\s.+:").unwrap());

/// City: text between the first period after the author and a colon; keeps
/// a trailing period so abbreviations like `М.` survive intact.
static CITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s([\w\s]+\.?)\s*:").unwrap());

/// Publishing house: text after the colon, up to the first digit run.
static PUBLISHER: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s*([^\d]+?),?\s*\d").unwrap());

/// Year: any word-bounded four-digit run.
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

/// Page count: a digit run followed by the Cyrillic pages abbreviation
/// (`с.`, or a Latin `c.` typed in its place).
static PAGES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*[сc]\.").unwrap());

pub(super) fn book_fields(citation: &str) -> FieldSet {
    FieldSet {
        author: first_capture(&AUTHOR, citation),
        title: first_capture(&TITLE, citation),
        city: first_capture(&CITY, citation),
        publisher: first_capture(&PUBLISHER, citation),
        year: first_capture(&YEAR, citation),
        pages: first_capture(&PAGES, citation),
        ..FieldSet::default()
    }
}
