use crate::{
    context::Context,
    stage::{Stage, StageError},
    stemmer::stem,
};
use std::borrow::Cow;

/// Replace a token with its stem.
///
/// The token is handed back borrowed when it already is its own stem.
/// Stemming a stem can shorten it again (`mes` → `me`), so the stage is not
/// idempotent.
///
/// Whether a token changes is only known after stemming it, so `needs_apply`
/// only skips the empty token.
pub struct Stem;

impl Stage for Stem {
    fn name(&self) -> &'static str {
        "stem"
    }

    fn needs_apply(&self, token: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!token.is_empty())
    }

    fn apply<'a>(&self, token: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let stemmed = stem(&token);
        if stemmed == *token {
            Ok(token)
        } else {
            Ok(Cow::Owned(stemmed))
        }
    }

    #[inline]
    fn is_idempotent(&self) -> bool {
        false
    }

    #[inline]
    fn needs_apply_is_exact(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for Stem {
        fn samples() -> &'static [&'static str] {
            &["chevaux", "Bateaux", "maison", "mes", "pain", "a", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("chevaux", "cheval"),
                ("Bateaux", "bateau"),
                ("chanter", "chant"),
                ("mes", "me"),
            ]
        }
    }

    #[test]
    fn universal_contract() {
        assert_stage_contract!(Stem);
    }

    #[test]
    fn not_idempotent() {
        assert!(!Stem.is_idempotent());
    }

    #[test]
    fn loose_precheck_and_borrowed_stems() {
        let ctx = Context::default();
        assert!(!Stem.needs_apply_is_exact());
        assert!(!Stem.needs_apply("", &ctx).unwrap());
        // an own stem passes the pre-check, and apply hands it back as is
        let input = "maison";
        assert!(Stem.needs_apply(input, &ctx).unwrap());
        let out = Stem.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        // one-letter tokens still lowercase
        assert_eq!(Stem.apply(Cow::Borrowed("A"), &ctx).unwrap(), "a");
    }
}
