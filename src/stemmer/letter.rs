//! Tagged letters and the prelude.
//!
//! The prelude decides, once per word, which `u`, `i` and `y` behave as
//! semivowels. That decision travels with each letter as a [`Kind`] so the
//! region calculator and the suffix rules never confuse a semivowel with a
//! vowel. Suffix patterns spell semivowels in uppercase (`"iqUe"`,
//! `"abl'Ye"`), which is the only place where case carries meaning.

use crate::unicode::{is_semivowel_candidate, is_vowel};
use smallvec::SmallVec;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Consonant,
    Vowel,
    Semivowel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub ch: char,
    pub kind: Kind,
}

impl Letter {
    #[inline(always)]
    pub const fn plain(ch: char) -> Self {
        let kind = if is_vowel(ch) {
            Kind::Vowel
        } else {
            Kind::Consonant
        };
        Self { ch, kind }
    }

    #[inline(always)]
    pub const fn semivowel(ch: char) -> Self {
        Self {
            ch,
            kind: Kind::Semivowel,
        }
    }

    /// Decode one character of a suffix pattern: uppercase ASCII marks a
    /// semivowel.
    #[inline(always)]
    pub const fn from_pattern(ch: char) -> Self {
        if ch.is_ascii_uppercase() {
            Self::semivowel(ch.to_ascii_lowercase())
        } else {
            Self::plain(ch)
        }
    }

    #[inline(always)]
    pub const fn is_vowel(&self) -> bool {
        matches!(self.kind, Kind::Vowel)
    }

    /// Same character, not a semivowel.
    #[inline(always)]
    pub const fn is_plain(&self, ch: char) -> bool {
        self.ch == ch && !matches!(self.kind, Kind::Semivowel)
    }
}

/// A word being stemmed. Most Jèrriais words fit inline.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Word {
    letters: SmallVec<[Letter; 24]>,
}

impl Word {
    /// Lowercase `text` and tag its semivowels.
    ///
    /// Every decision reads the lowercase input, never a letter already
    /// tagged by this pass.
    pub fn prelude(text: &str) -> Self {
        let chars: SmallVec<[char; 24]> = text.chars().flat_map(char::to_lowercase).collect();
        let vowel_at = |i: usize| chars.get(i).is_some_and(|&c| is_vowel(c));

        let letters = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if !is_semivowel_candidate(c) {
                    return Letter::plain(c);
                }
                let semivowel = if i == 0 {
                    c == 'y' && vowel_at(1)
                } else {
                    let (before, after) = (vowel_at(i - 1), vowel_at(i + 1));
                    match c {
                        'y' => before || after,
                        'u' => (before && after) || chars[i - 1] == 'q',
                        _ => before && after,
                    }
                };
                if semivowel {
                    Letter::semivowel(c)
                } else {
                    Letter::plain(c)
                }
            })
            .collect();

        Self { letters }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline(always)]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> Option<Letter> {
        self.letters.get(i).copied()
    }

    #[inline(always)]
    pub fn last(&self) -> Option<Letter> {
        self.letters.last().copied()
    }

    /// Does the word end with `pattern`, starting at or after `from`?
    pub fn ends_with_from(&self, pattern: &str, from: usize) -> bool {
        let n = pattern.chars().count();
        if n > self.len() || self.len() - n < from {
            return false;
        }
        self.letters[self.len() - n..]
            .iter()
            .zip(pattern.chars())
            .all(|(l, p)| *l == Letter::from_pattern(p))
    }

    #[inline]
    pub fn ends_with(&self, pattern: &str) -> bool {
        self.ends_with_from(pattern, 0)
    }

    pub fn truncate(&mut self, len: usize) {
        self.letters.truncate(len);
    }

    /// Append a pattern, keeping its semivowel marks.
    pub fn push_pattern(&mut self, pattern: &str) {
        self.letters.extend(pattern.chars().map(Letter::from_pattern));
    }

    pub fn set(&mut self, i: usize, letter: Letter) {
        if let Some(slot) = self.letters.get_mut(i) {
            *slot = letter;
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|l| write!(f, "{}", l.ch))
    }
}

impl fmt::Debug for Word {
    /// Semivowels show in uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Word(")?;
        for l in &self.letters {
            match l.kind {
                Kind::Semivowel => write!(f, "{}", l.ch.to_ascii_uppercase())?,
                _ => write!(f, "{}", l.ch)?,
            }
        }
        f.write_str(")")
    }
}
