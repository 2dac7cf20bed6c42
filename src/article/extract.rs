//! Pattern rules for journal-article citations.
//!
//! Each rule is a single probe over the full citation string; none of them
//! consumes input or depends on another rule having matched. Overlaps are
//! possible (a page number shaped like `20xx.` also satisfies the year
//! rule) and are left unresolved.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::first_capture;
use crate::FieldSet;

/// Surname and initials: the leading pair of word/period runs.
static AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([\w.\-]+\s[\w.\-]+)").unwrap());

/// Title: text between the first sentence terminator and the `//` venue
/// separator.
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s([\w\s.,–-]+)\s//").unwrap());

/// Journal name: text between `//` and a period/colon run followed by the
/// publication year.
static JOURNAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"//\s*([^/]+?)\s*[.:]+\s*\d{4}").unwrap());

/// Year: the first bare four-digit run followed by a period.
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})\.").unwrap());

/// Issue number, after a literal `No` or `№` marker.
static ISSUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:No|№)\s*(\d+)\.").unwrap());

/// Page range, after the Cyrillic `С.` marker; the captured run may contain
/// internal periods and dashes.
static PAGES: Lazy<Regex> = Lazy::new(|| Regex::new(r"С\.\s*([\w\s.,–-]+)\.").unwrap());

pub(super) fn article_fields(citation: &str) -> FieldSet {
    FieldSet {
        author: first_capture(&AUTHOR, citation),
        title: first_capture(&TITLE, citation),
        journal: first_capture(&JOURNAL, citation),
        year: first_capture(&YEAR, citation),
        issue: first_capture(&ISSUE, citation),
        pages: first_capture(&PAGES, citation),
        ..FieldSet::default()
    }
}
