//! Snowball-style stemmer for Jèrriais.
//!
//! The algorithm follows the French Porter/Snowball stemmer adapted to
//! Jèrriais orthography:
//!
//! 1. **prelude** – lowercase and tag semivowel `u`, `i`, `y`;
//! 2. **regions** – compute R1, R2 and RV once;
//! 3. **steps** – run the rule tables of [`steps`]:
//!
//! | Step | Runs when | Purpose |
//! |------|-----------|---------|
//! | 1  | always | derivational suffixes (`-âtion`, `-ement`, `-eaux`, …) |
//! | 2a | step 1 changed nothing, or asked for it | verb endings after a non-vowel |
//! | 2b | step 2a ran and changed nothing | remaining verb endings |
//! | 3  | the word changed in 1–2b | trailing semivowel `y` → `i`, `ç` → `c` |
//! | 4  | the word did not change in 1–2b | plural `s`, `-ion`, `-ier`, final `e` |
//! | 5  | always | undouble `enn onn ett ell eill` |
//! | 6a | always | `-èl` → `'l` |
//! | 6  | always | unaccent the last vowel if it is `é`/`è` |
//!
//! No step can fail: a step whose rules find nothing leaves the word alone.

mod letter;
mod region;
mod rule;
mod steps;

use letter::Letter;
pub(crate) use letter::Word;
pub(crate) use region::Regions;

/// Reduce `word` to its stem.
///
/// The result is lowercase. Empty and one-letter inputs come back lowercased
/// and otherwise unchanged.
///
/// ```
/// assert_eq!(jerriais::stem("chevaux"), "cheval");
/// assert_eq!(jerriais::stem("a"), "a");
/// ```
pub fn stem(word: &str) -> String {
    let mut word = Word::prelude(word);
    if word.len() <= 1 {
        return word.to_string();
    }
    let regions = Regions::compute(&word);

    let before_step1 = word.clone();
    let step1 = rule::first(steps::STEP1, &mut word, &regions);

    let before_step2a = word.clone();
    let mut step2a_ran = false;
    if word == before_step1 || step1.verb_step() {
        step2a_ran = true;
        rule::first(steps::STEP2A, &mut word, &regions);
    }

    if step2a_ran && word == before_step2a {
        rule::first(steps::STEP2B, &mut word, &regions);
    }

    if word != before_step1 {
        rule::each(steps::STEP3, &mut word, &regions);
    } else {
        rule::each(steps::STEP4, &mut word, &regions);
    }

    rule::first(steps::STEP5, &mut word, &regions);
    rule::first(steps::STEP6A, &mut word, &regions);
    unaccent_last_vowel(&mut word);

    word.to_string()
}

/// Step 6: walk back over non-vowels; if the first vowel met is `é` or `è`
/// and is not the final letter, it becomes `e`.
fn unaccent_last_vowel(word: &mut Word) {
    let last = word.len().saturating_sub(1);
    let Some(i) = (1..word.len())
        .rev()
        .find(|&i| word.letters()[i].is_vowel())
    else {
        return;
    };
    if i != last && matches!(word.letters()[i].ch, 'é' | 'è') {
        word.set(i, Letter::plain('e'));
    }
}
