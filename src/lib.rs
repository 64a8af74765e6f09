//! Stemmer and clitic-aware tokenizer for Jèrriais.
//!
//! ```
//! assert_eq!(jerriais::stem("bateaux"), "bateau");
//! assert_eq!(jerriais::tokenize("l'affaithe"), ["l", "affaithe"]);
//! ```

pub mod analyzer;
pub mod clitic;
pub mod context;
pub mod process;
pub mod profile;
pub mod stage;
pub mod stemmer;
pub mod tokenizer;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use clitic::{CliticError, MARKERS, NoBreakTable, is_no_break, no_break_words};
pub use context::Context;
pub use profile::{Profile, ProfileError, preset};
pub use stage::lower_case::LowerCase;
pub use stage::stem::Stem;
pub use stage::strip_clitics::StripClitics;
pub use stage::{Stage, StageError};
pub use stemmer::stem;
pub use tokenizer::{tokenize, tokenize_with, tokenize_word, tokenize_word_with};
