//! Vocabulary highlighting for display text.
//!
//! Annotates the spans of a string that contain domain vocabulary (site
//! and ritual names) so the view layer can emphasize them, without ever
//! altering the string itself: concatenating the produced spans always
//! reconstructs the input exactly.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Key pilgrimage terms emphasized in editorial text.
pub const KEY_TERMS: &[&str] = &[
    "Masjid al-Haram",
    "Hajar al-Aswad",
    "Black Stone",
    "Maqam Ibrahim",
    "Prophet Muhammad",
    "Prophet Ibrahim",
    "Zamzam",
    "Kaaba",
    "Ka'bah",
    "Tawaf",
    "Sa'i",
    "Ihram",
    "Talbiyah",
    "Arafah",
    "Arafat",
    "Mecca",
    "Makkah",
    "Medina",
    "Madinah",
    "Safa",
    "Marwa",
    "Hajj",
    "Umrah",
    "Ibrahim",
    "Ismail",
    "Ishmael",
    "Hajar",
    "Hagar",
    "Mina",
    "Jamarat",
    "Muzdalifah",
    "Qibla",
    "Kiswah",
    "Wuquf",
];

/// One segment of a highlighted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The exact slice of the original text.
    pub text: String,
    /// Whether this slice matched a vocabulary term.
    pub highlighted: bool,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    fn key(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// A compiled vocabulary matcher.
///
/// Terms are sorted by descending length before being joined into a single
/// case-insensitive alternation; with the regex engine's first-alternative
/// preference this makes longer terms win over the shorter terms they
/// contain ("Masjid al-Haram" over "Haram"). The sort is a correctness
/// requirement, not an optimization.
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Builds a highlighter over the given vocabulary.
    ///
    /// # Panics
    ///
    /// Panics if `terms` is empty; every term is escaped, so any
    /// non-empty vocabulary compiles.
    pub fn new(terms: &[&str]) -> Self {
        assert!(!terms.is_empty(), "vocabulary must not be empty");

        let mut sorted: Vec<&str> = terms.to_vec();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = sorted
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .expect("escaped alternation always compiles");

        Self { pattern }
    }

    /// Segments `text` into highlighted and plain spans.
    ///
    /// Matches are non-overlapping, leftmost; the concatenation of the
    /// returned span texts equals `text` exactly. With no match the
    /// result is a single plain span covering the whole input.
    pub fn segment(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut last = 0;

        for found in self.pattern.find_iter(text) {
            if found.start() > last {
                spans.push(Span::plain(&text[last..found.start()]));
            }
            spans.push(Span::key(found.as_str()));
            last = found.end();
        }

        if last < text.len() {
            spans.push(Span::plain(&text[last..]));
        }

        if spans.is_empty() {
            spans.push(Span::plain(text));
        }

        spans
    }
}

static DEFAULT_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(|| Highlighter::new(KEY_TERMS));

/// The process-wide highlighter over [`KEY_TERMS`].
pub fn default_highlighter() -> &'static Highlighter {
    &DEFAULT_HIGHLIGHTER
}
