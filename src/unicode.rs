// Character classes used by the stemmer and the tokenizer.
// Everything here is a pure `const fn` over a single `char`.

/// Vowels of the Jèrriais alphabet, accented forms included.
///
/// Uppercase letters, apostrophes and any character outside the alphabet are
/// *not* vowels.
#[inline(always)]
pub const fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e'
            | 'i'
            | 'o'
            | 'u'
            | 'y'
            | 'â'
            | 'à'
            | 'ë'
            | 'é'
            | 'ê'
            | 'è'
            | 'ï'
            | 'î'
            | 'ô'
            | 'û'
            | 'ù'
    )
}

/// Letters that the prelude may turn into semivowels.
#[inline(always)]
pub const fn is_semivowel_candidate(c: char) -> bool {
    matches!(c, 'u' | 'i' | 'y')
}

/// Straight apostrophe, the only clitic joiner the tokenizer recognises.
pub const APOSTROPHE: char = '\'';

/// Characters that belong to a word for the tokenizer.
///
/// Matching is case-insensitive: ASCII letters and digits, the straight
/// apostrophe, and the accented letters `ä â à é è ë ê ï î ö ô ù ü û ç` in
/// both cases. The typographic apostrophe `’` is a separator.
#[inline(always)]
pub const fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == APOSTROPHE;
    }
    matches!(
        c,
        'ä' | 'â'
            | 'à'
            | 'é'
            | 'è'
            | 'ë'
            | 'ê'
            | 'ï'
            | 'î'
            | 'ö'
            | 'ô'
            | 'ù'
            | 'ü'
            | 'û'
            | 'ç'
            | 'Ä'
            | 'Â'
            | 'À'
            | 'É'
            | 'È'
            | 'Ë'
            | 'Ê'
            | 'Ï'
            | 'Î'
            | 'Ö'
            | 'Ô'
            | 'Ù'
            | 'Ü'
            | 'Û'
            | 'Ç'
    )
}

/// Whether lowercasing would change `text`. Titlecase letters such as `ǅ`
/// count, though they are not uppercase.
#[inline]
pub fn contains_uppercase(text: &str) -> bool {
    text.chars().any(|c| {
        if c.is_ascii() {
            c.is_ascii_uppercase()
        } else {
            c.to_lowercase().ne(std::iter::once(c))
        }
    })
}
