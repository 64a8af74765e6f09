//! R1, R2 and RV.
//!
//! Offsets are computed once, on the prelude output. Rules only ever edit the
//! end of a word, so an offset stays meaningful while the word shrinks or
//! grows; [`Regions::start`] clamps it to the current length.

use super::letter::Word;

/// Three-letter openings that force RV to 3.
const RV_PREFIXES: [&str; 3] = ["par", "col", "tap"];

/// Where a suffix must lie for a rule to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Word,
    R1,
    R2,
    Rv,
    /// Inside both RV and R2.
    RvR2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
    pub rv: usize,
}

impl Regions {
    pub fn compute(word: &Word) -> Self {
        let len = word.len();
        let r1 = after_vowel_consonant(word, 0);
        let r2 = after_vowel_consonant(word, r1);

        let mut rv = len;
        if word.get(0).is_some_and(|l| l.is_vowel()) && word.get(1).is_some_and(|l| l.is_vowel()) {
            rv = 3;
        }
        if RV_PREFIXES.iter().any(|p| starts_with(word, p)) {
            rv = 3;
        } else {
            // only searched while RV is still null
            let mut i = 1;
            while i + 1 < len && rv == len {
                if word.letters()[i].is_vowel() {
                    rv = i + 1;
                }
                i += 1;
            }
        }

        Self {
            r1,
            r2,
            rv: rv.min(len),
        }
    }

    /// First index of `region` in a word that is currently `len` letters long.
    #[inline]
    pub fn start(&self, region: Region, len: usize) -> usize {
        let offset = match region {
            Region::Word => 0,
            Region::R1 => self.r1,
            Region::R2 => self.r2,
            Region::Rv => self.rv,
            Region::RvR2 => self.rv.max(self.r2),
        };
        offset.min(len)
    }
}

/// Index right after the first vowel + non-vowel pair found at or after
/// `from`, or the word length.
fn after_vowel_consonant(word: &Word, from: usize) -> usize {
    let letters = word.letters();
    letters
        .windows(2)
        .enumerate()
        .skip(from)
        .find(|(_, pair)| pair[0].is_vowel() && !pair[1].is_vowel())
        .map_or(letters.len(), |(i, _)| i + 2)
}

fn starts_with(word: &Word, prefix: &str) -> bool {
    let n = prefix.chars().count();
    word.len() >= n
        && word.letters()[..n]
            .iter()
            .zip(prefix.chars())
            .all(|(l, c)| l.is_plain(c))
}
