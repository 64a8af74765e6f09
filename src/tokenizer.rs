//! Clitic-aware tokenizer.
//!
//! Text is cut on every character outside the word alphabet (see
//! [`is_word_char`]); each word then loses its leading clitics one at a time.
//! Tokens are slices of the input and never empty.

use crate::{
    clitic::{Split, leading_clitic},
    context::Context,
    unicode::is_word_char,
};

/// Split `text` into tokens using the process-wide no-break table.
///
/// ```
/// assert_eq!(jerriais::tokenize("l'affaithe"), ["l", "affaithe"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    tokenize_with(text, &Context::default())
}

/// Split a single word on its leading clitics.
///
/// ```
/// assert_eq!(jerriais::tokenize_word("qu'importe"), ["qu", "importe"]);
/// ```
pub fn tokenize_word(word: &str) -> Vec<&str> {
    tokenize_word_with(word, &Context::default())
}

pub fn tokenize_with<'a>(text: &'a str, ctx: &Context) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    for word in words(text) {
        split_word(word, ctx, &mut tokens);
    }
    tokens
}

pub fn tokenize_word_with<'a>(word: &'a str, ctx: &Context) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    split_word(word, ctx, &mut tokens);
    tokens
}

/// Raw words: maximal runs of word characters.
#[inline]
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

fn split_word<'a>(mut rest: &'a str, ctx: &Context, out: &mut Vec<&'a str>) {
    while let Some((prefix, split)) = leading_clitic(rest) {
        if split == Split::Checked && ctx.no_break().keeps_whole(prefix, rest) {
            log::trace!("no-break: `{rest}` kept whole behind `{prefix}'`");
            break;
        }
        out.push(prefix);
        // the apostrophe is one byte
        rest = &rest[prefix.len() + 1..];
    }
    if !rest.is_empty() {
        out.push(rest);
    }
}
