//! Clitic prefixes and the no-break exception table.
//!
//! A clitic is a short particle glued to the next word with an apostrophe
//! (`l'affaithe`, `qu'importe`). Some apostrophe forms are lexicalised words
//! of their own (`d'mander`, `s'maine`); those stay whole. The table keeps the
//! *stems* of these words per marker, so inflections (`d'mandons`) are
//! recognised too.

pub mod data;

use crate::{stemmer::stem, unicode::APOSTROPHE};
pub use data::{MARKERS, NO_BREAK_WORDS};
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Prefixes that are split off every time.
pub const ALWAYS_SPLIT: &[&str] = &["qu", "tu", "tch", "li"];

/// Prefixes that are split off unless the word is a no-break exception.
/// `ch` comes first so that `ch'…` is never read as a bare `c`.
pub const CHECKED: &[&str] = &["ch", "d", "j", "l", "m", "n", "s", "t", "y"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliticError {
    #[error("unknown clitic marker `{0}`")]
    UnknownMarker(String),

    #[error("`{word}` does not start with `{marker}'`")]
    MissingPrefix { marker: String, word: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Always,
    Checked,
}

/// The clitic prefix at the start of `word`, without its apostrophe.
///
/// Matching ignores ASCII case; the returned slice keeps the case of `word`.
pub fn leading_clitic(word: &str) -> Option<(&str, Split)> {
    let found = |prefixes: &[&str]| {
        prefixes
            .iter()
            .find(|p| starts_with_clitic(word, p))
            .map(|p| &word[..p.len()])
    };
    found(ALWAYS_SPLIT)
        .map(|p| (p, Split::Always))
        .or_else(|| found(CHECKED).map(|p| (p, Split::Checked)))
}

/// `true` for a token that is nothing but a clitic particle (`qu`, `L`, `ch`).
pub fn is_bare_clitic(token: &str) -> bool {
    ALWAYS_SPLIT
        .iter()
        .chain(CHECKED)
        .any(|p| token.eq_ignore_ascii_case(p))
}

#[inline]
fn starts_with_clitic(word: &str, prefix: &str) -> bool {
    word.len() > prefix.len()
        && word.is_char_boundary(prefix.len())
        && word[..prefix.len()].eq_ignore_ascii_case(prefix)
        && word[prefix.len()..].starts_with(APOSTROPHE)
}

/// Stems of the apostrophe words that must not be split, per marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoBreakTable {
    stems: HashMap<&'static str, HashSet<String>>,
}

lazy_static! {
    static ref GLOBAL: NoBreakTable = NoBreakTable::build();
}

impl Default for NoBreakTable {
    fn default() -> Self {
        Self::global().clone()
    }
}

impl NoBreakTable {
    /// The process-wide table, built on first use from [`data::NO_BREAK_WORDS`].
    #[inline]
    pub fn global() -> &'static NoBreakTable {
        &GLOBAL
    }

    /// A table with every marker and no entries.
    pub fn empty() -> Self {
        Self {
            stems: MARKERS.iter().map(|&m| (m, HashSet::new())).collect(),
        }
    }

    fn build() -> Self {
        let mut table = Self::empty();
        for (&marker, words) in NO_BREAK_WORDS.entries() {
            let set = table.stems.entry(marker).or_default();
            set.extend(words.iter().map(|w| stem(w)));
            log::debug!(
                "no-break table: marker `{marker}` has {} words, {} stems",
                words.len(),
                set.len()
            );
        }
        table
    }

    pub fn markers(&self) -> impl Iterator<Item = &'static str> + '_ {
        MARKERS.iter().copied().filter(|m| self.stems.contains_key(m))
    }

    /// Whether `stem` is an exception under `marker`. The marker is compared
    /// exactly, case included.
    #[inline]
    pub fn contains(&self, marker: &str, stem: &str) -> bool {
        self.stems.get(marker).is_some_and(|set| set.contains(stem))
    }

    /// Whether the whole word `word` stays unsplit behind `marker`.
    #[inline]
    pub fn keeps_whole(&self, marker: &str, word: &str) -> bool {
        self.stems.get(marker).is_some_and(|set| set.contains(&stem(word)))
    }

    /// Add `word` (a full apostrophe form such as `d'mander`) as an exception.
    /// Returns `false` when its stem was already present.
    pub fn insert(&mut self, marker: &str, word: &str) -> Result<bool, CliticError> {
        let marker = known_marker(marker)?;
        check_prefix(marker, word)?;
        let set = self.stems.entry(marker).or_default();
        Ok(set.insert(stem(word)))
    }

    /// Remove the exception for `word`. Returns `false` when it was absent.
    pub fn remove(&mut self, marker: &str, word: &str) -> Result<bool, CliticError> {
        let marker = known_marker(marker)?;
        check_prefix(marker, word)?;
        Ok(self
            .stems
            .get_mut(marker)
            .is_some_and(|set| set.remove(&stem(word))))
    }

    /// Number of stems over all markers.
    pub fn len(&self) -> usize {
        self.stems.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn known_marker(marker: &str) -> Result<&'static str, CliticError> {
    MARKERS
        .iter()
        .copied()
        .find(|&m| m == marker)
        .ok_or_else(|| CliticError::UnknownMarker(marker.to_owned()))
}

fn check_prefix(marker: &str, word: &str) -> Result<(), CliticError> {
    let rest = word.strip_prefix(marker);
    if rest.is_some_and(|r| r.starts_with(APOSTROPHE) || r.starts_with('’')) {
        Ok(())
    } else {
        Err(CliticError::MissingPrefix {
            marker: marker.to_owned(),
            word: word.to_owned(),
        })
    }
}

/// Whether `word` stays whole behind `marker` in the process-wide table.
#[inline]
pub fn is_no_break(marker: &str, word: &str) -> bool {
    NoBreakTable::global().keeps_whole(marker, word)
}

/// The literal no-break words listed for `marker`.
#[inline]
pub fn no_break_words(marker: &str) -> Option<&'static [&'static str]> {
    NO_BREAK_WORDS.get(marker).copied()
}
