//! Named token pipelines.
//!
//! A [`Profile`] applies its [`Process`] to a whole token stream. Every token
//! goes through every stage; a token that a stage empties (a bare clitic under
//! [`StripClitics`](crate::StripClitics)) is left out of the result.

pub mod preset;

use crate::{
    context::Context,
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::{Stage, StageError},
    tokenizer::tokenize_with,
};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile `{profile}` failed on token `{token}`: {source}")]
    Failed {
        profile: &'static str,
        token: String,
        #[source]
        source: StageError,
    },
}

impl ProfileError {
    pub fn profile(&self) -> &'static str {
        match self {
            Self::Failed { profile, .. } => *profile,
        }
    }

    /// The stage failure, without the profile and token it happened on.
    pub fn into_stage_error(self) -> StageError {
        match self {
            Self::Failed { source, .. } => source,
        }
    }
}

pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One token through every stage. An empty result means the token is
    /// dropped.
    pub fn run<'a>(&self, token: &'a str, ctx: &Context) -> Result<Cow<'a, str>, ProfileError> {
        self.pipeline
            .process(Cow::Borrowed(token), ctx)
            .map_err(|source| ProfileError::Failed {
                profile: self.name,
                token: token.to_owned(),
                source,
            })
    }

    /// Run `tokens` in order, dropping the ones a stage emptied.
    pub fn analyze<'a, I>(&self, tokens: I, ctx: &Context) -> Result<Vec<Cow<'a, str>>, ProfileError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = Vec::new();
        let mut dropped = 0usize;
        for token in tokens {
            let token = self.run(token, ctx)?;
            if token.is_empty() {
                dropped += 1;
            } else {
                out.push(token);
            }
        }
        if dropped > 0 {
            log::trace!("profile `{}` dropped {dropped} emptied tokens", self.name);
        }
        Ok(out)
    }

    /// Tokenize `text` with the exception table of `ctx`, then [`analyze`](Self::analyze).
    pub fn analyze_text<'a>(
        &self,
        text: &'a str,
        ctx: &Context,
    ) -> Result<Vec<Cow<'a, str>>, ProfileError> {
        self.analyze(tokenize_with(text, ctx), ctx)
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder {
            name,
            pipeline: EmptyProcess,
        }
    }
}

impl Profile<DynamicProcess> {
    /// A profile over stages chosen at runtime.
    pub fn dynamic(name: &'static str, pipeline: DynamicProcess) -> Self {
        Self { name, pipeline }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.stage_names()
    }
}

/// Chains stages at compile time; the first stage added runs first.
pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            pipeline: ChainedProcess {
                stage,
                previous: self.pipeline,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.pipeline,
        }
    }
}
