//! Keyword Extractor — turns free text into a weighted, insertion-ordered
//! keyword map.
//!
//! Dictionary terms are matched against the ORIGINAL text with case-insensitive
//! word-boundary patterns, so casing and punctuation inside fixed phrases still
//! match. N-gram discovery runs over a normalized token stream afterwards and
//! never displaces a dictionary hit.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::dictionaries::{EDUCATION_TERMS, ROLE_TERMS, SOFT_SKILLS, TECHNICAL_SKILLS};

const SECTION_IMPORTANCE_BOOST: f64 = 0.5;
const REQUIRED_IMPORTANCE_BOOST: f64 = 0.8;
const OCCURRENCE_IMPORTANCE_STEP: f64 = 0.1;
const OCCURRENCE_IMPORTANCE_CAP: f64 = 0.5;
const MAX_IMPORTANCE: f64 = 2.0;

const BIGRAM_MIN_CHARS: usize = 5;
const BIGRAM_IMPORTANCE: f64 = 0.5;
const TRIGRAM_MIN_CHARS: usize = 8;
const TRIGRAM_IMPORTANCE: f64 = 0.3;
const MIN_TOKEN_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Technical,
    Soft,
    Role,
    Education,
    Phrase,
}

/// One detected keyword or phrase. Keywords are stored lower-cased; both the
/// JD map and the resume map use the same casing so exact lookups line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub count: u32,
    pub category: KeywordCategory,
    pub importance: f64,
}

/// Insertion-ordered keyword map: a `Vec` of entries plus a key index.
/// Iteration order is insertion order, which keeps scoring and
/// first-match-wins partial matching deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMap {
    entries: Vec<KeywordEntry>,
    index: HashMap<String, usize>,
}

impl KeywordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry keyed by its lower-cased keyword. Re-inserting an
    /// existing key replaces the entry in place, keeping its original position.
    pub fn insert(&mut self, entry: KeywordEntry) {
        let key = entry.keyword.to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.index.get(keyword).map(|&pos| &self.entries[pos])
    }

    pub fn contains_key(&self, keyword: &str) -> bool {
        self.index.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter()
    }
}

struct DictionaryTerm {
    term: &'static str,
    category: KeywordCategory,
    pattern: Regex,
}

/// All dictionary terms with their word-boundary patterns, compiled once.
/// Scan order (technical → soft → role → education) fixes map insertion order.
static DICTIONARY: Lazy<Vec<DictionaryTerm>> = Lazy::new(|| {
    let lists = [
        (TECHNICAL_SKILLS, KeywordCategory::Technical),
        (SOFT_SKILLS, KeywordCategory::Soft),
        (ROLE_TERMS, KeywordCategory::Role),
        (EDUCATION_TERMS, KeywordCategory::Education),
    ];
    lists
        .into_iter()
        .flat_map(|(terms, category)| {
            terms.iter().map(move |&term| DictionaryTerm {
                term,
                category,
                pattern: word_pattern(term),
            })
        })
        .collect()
});

static SECTION_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(requirements|qualifications|skills|experience)\b").unwrap());
static SECTION_STOP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][^a-z]*:").unwrap());
static NON_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.\-]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Case-insensitive word-boundary pattern for a literal term.
fn word_pattern(term: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).expect("escaped literal pattern")
}

/// Pattern for `required|must have|essential` within a 50-char same-line
/// window of the term, in either order.
fn near_required_pattern(term: &str) -> Regex {
    let escaped = regex::escape(term);
    Regex::new(&format!(
        r"(?i)(?:required|must have|essential).{{0,50}}\b{escaped}\b|\b{escaped}\b.{{0,50}}(?:required|must have|essential)"
    ))
    .expect("escaped literal pattern")
}

/// Lower-cases, strips everything outside word chars / whitespace / `.` / `-`,
/// and collapses whitespace runs to single spaces.
fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_TOKEN_RE.replace_all(&lower, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Extracts weighted keywords from free text. Never fails: blank input yields
/// an empty map.
pub fn extract_keywords(text: &str) -> KeywordMap {
    let mut map = KeywordMap::new();
    if text.trim().is_empty() {
        return map;
    }

    for dict in DICTIONARY.iter() {
        let count = dict.pattern.find_iter(text).count() as u32;
        if count == 0 {
            continue;
        }
        map.insert(KeywordEntry {
            keyword: dict.term.to_string(),
            count,
            category: dict.category,
            importance: keyword_importance(dict.term, text),
        });
    }

    let normalized = normalize(text);
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .collect();

    for window in tokens.windows(2) {
        let phrase = window.join(" ");
        if phrase.chars().count() > BIGRAM_MIN_CHARS && !map.contains_key(&phrase) {
            map.insert(KeywordEntry {
                keyword: phrase,
                count: 1,
                category: KeywordCategory::Phrase,
                importance: BIGRAM_IMPORTANCE,
            });
        }
    }
    for window in tokens.windows(3) {
        let phrase = window.join(" ");
        if phrase.chars().count() > TRIGRAM_MIN_CHARS && !map.contains_key(&phrase) {
            map.insert(KeywordEntry {
                keyword: phrase,
                count: 1,
                category: KeywordCategory::Phrase,
                importance: TRIGRAM_IMPORTANCE,
            });
        }
    }

    map
}

/// Context-weighted importance of a term within the full text.
///
/// Base 1.0; +0.5 when a requirements-style section exists and mentions the
/// term; +0.8 when a required/must-have/essential marker sits near the term;
/// +0.1 per occurrence capped at +0.5. Clamped to 2.0.
pub fn keyword_importance(term: &str, full_text: &str) -> f64 {
    let mut importance = 1.0;
    let term_lower = term.to_lowercase();

    if SECTION_HEADER_RE.is_match(full_text) {
        let section = extract_section(full_text);
        if section.to_lowercase().contains(&term_lower) {
            importance += SECTION_IMPORTANCE_BOOST;
        }
    }

    if near_required_pattern(term).is_match(full_text) {
        importance += REQUIRED_IMPORTANCE_BOOST;
    }

    let occurrences = word_pattern(term).find_iter(full_text).count() as f64;
    importance += (occurrences * OCCURRENCE_IMPORTANCE_STEP).min(OCCURRENCE_IMPORTANCE_CAP);

    importance.min(MAX_IMPORTANCE)
}

/// Captures the requirements-style section of a posting: from the first line
/// mentioning a header word through the line before the next "NEW HEADER:"
/// style line (trimmed, `^[A-Z][^a-z]*:`). Returns the captured lines joined
/// with newlines, header line included; empty when no header word appears.
pub fn extract_section(text: &str) -> String {
    let mut captured: Vec<&str> = Vec::new();
    let mut capturing = false;

    for line in text.lines() {
        if !capturing {
            if SECTION_HEADER_RE.is_match(line) {
                capturing = true;
                captured.push(line);
            }
        } else {
            if SECTION_STOP_RE.is_match(line.trim()) {
                break;
            }
            captured.push(line);
        }
    }

    captured.join("\n")
}
