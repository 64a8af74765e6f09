use crate::{
    clitic::is_bare_clitic,
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Empty out tokens that are only a clitic particle (`qu`, `l`, `ch`, …).
///
/// Run it after the tokenizer has split `l'affaithe` into `l` + `affaithe`
/// to keep just the content words. Matching ignores ASCII case.
pub struct StripClitics;

impl Stage for StripClitics {
    fn name(&self) -> &'static str {
        "strip_clitics"
    }

    #[inline(always)]
    fn needs_apply(&self, token: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(is_bare_clitic(token))
    }

    fn apply<'a>(&self, token: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if is_bare_clitic(&token) {
            Ok(Cow::Borrowed(""))
        } else {
            Ok(token)
        }
    }
}
