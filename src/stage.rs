//! Core token stage abstraction.
//!
//! A stage rewrites one token at a time. Stages are zero-copy aware: when
//! `needs_apply` answers `false` the pipeline hands the token on untouched,
//! so a `Cow::Borrowed` slice of the input survives the whole chain.
//!
//! A stage may empty a token; a profile drops empty tokens after the last
//! stage.

pub mod lower_case;
pub mod stem;
pub mod strip_clitics;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Token processing failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single token transformation.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the stage for this token.
    fn needs_apply(&self, token: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation.  Must always be correct, even when
    /// called on a token `needs_apply` would have skipped.
    fn apply<'a>(&self, token: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;

    /// Whether applying the stage twice gives the same token as once.
    #[inline]
    fn is_idempotent(&self) -> bool {
        true
    }

    /// Whether `needs_apply` answers `true` only for tokens `apply` changes.
    /// A stage whose pre-check is loose must still never answer `false` for
    /// a token it would change.
    #[inline]
    fn needs_apply_is_exact(&self) -> bool {
        true
    }
}
