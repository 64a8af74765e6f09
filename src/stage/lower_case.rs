use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::contains_uppercase,
};
use std::borrow::Cow;

/// Lowercase a token. Already-lowercase tokens pass through borrowed.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, token: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(contains_uppercase(token))
    }

    fn apply<'a>(&self, token: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_uppercase(&token) {
            return Ok(token);
        }
        if token.is_ascii() {
            let mut owned = token.into_owned();
            owned.make_ascii_lowercase();
            return Ok(Cow::Owned(owned));
        }
        Ok(Cow::Owned(token.to_lowercase()))
    }
}
