use thiserror::Error;

use crate::{
    clitic::CliticError,
    context::Context,
    process::{DynamicProcess, Process},
    profile::{Profile, ProfileError},
    stage::{Stage, StageError},
    tokenizer::tokenize_with,
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("clitic error: {0}")]
    Clitic(#[from] CliticError),
}

/// Tokenizer plus an ordered list of token stages.
///
/// ```
/// use jerriais::{Analyzer, LowerCase, Stem, StripClitics};
///
/// let analyzer = Analyzer::builder()
///     .add_stage(LowerCase)
///     .add_stage(StripClitics)
///     .add_stage(Stem)
///     .build();
/// assert_eq!(analyzer.analyze("L'Chevaux").unwrap(), ["cheval"]);
/// ```
pub struct Analyzer {
    ctx: Context,
    profile: Profile<DynamicProcess>,
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Tokens of `text`, before any stage runs.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        tokenize_with(text, &self.ctx)
    }

    /// Names of the analyzer's stages, in run order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profile.stage_names()
    }

    pub fn analyze<'a>(&self, text: &'a str) -> Result<Vec<Cow<'a, str>>, AnalyzerError> {
        self.profile
            .analyze_text(text, &self.ctx)
            .map_err(|e| AnalyzerError::Stage(e.into_stage_error()))
    }

    /// Like [`analyze`](Self::analyze), but with `profile` in place of the
    /// analyzer's own stages. The analyzer's context still applies.
    pub fn analyze_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: &'a str,
    ) -> Result<Vec<Cow<'a, str>>, AnalyzerError> {
        Ok(profile.analyze_text(text, &self.ctx)?)
    }
}

#[derive(Default)]
pub struct AnalyzerBuilder {
    ctx: Context,
    stages: DynamicProcess,
}

impl AnalyzerBuilder {
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Keep `word` (for example `l'avouai`) whole behind `marker`.
    pub fn no_break(mut self, marker: &str, word: &str) -> Result<Self, AnalyzerError> {
        self.ctx.no_break_mut().insert(marker, word)?;
        Ok(self)
    }

    /// Split `word` behind `marker` even though it is a listed exception.
    pub fn allow_break(mut self, marker: &str, word: &str) -> Result<Self, AnalyzerError> {
        self.ctx.no_break_mut().remove(marker, word)?;
        Ok(self)
    }

    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages = self.stages.push(stage);
        self
    }

    pub fn build(self) -> Analyzer {
        Analyzer {
            ctx: self.ctx,
            profile: Profile::dynamic("analyzer", self.stages),
        }
    }
}
