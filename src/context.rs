// src/context.rs
// The one value threaded through tokenizing and every token stage.
// The default context borrows the process-wide no-break table; only a
// modified context owns a copy.

use crate::clitic::{CliticError, NoBreakTable};
use std::borrow::Cow;

/// Runtime context passed to the tokenizer and to every token stage.
#[derive(Debug, Clone)]
pub struct Context {
    no_break: Cow<'static, NoBreakTable>,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// A context over the process-wide no-break table.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            no_break: Cow::Borrowed(NoBreakTable::global()),
        }
    }

    /// A context over `table`.
    pub fn with_table(table: NoBreakTable) -> Self {
        Self {
            no_break: Cow::Owned(table),
        }
    }

    /// Copy the process-wide table and let the caller edit it before use.
    ///
    /// ```
    /// use jerriais::Context;
    ///
    /// let ctx = Context::with_modified(|t| t.insert("l", "l'avouai").map(drop)).unwrap();
    /// assert!(ctx.no_break().keeps_whole("l", "l'avouai"));
    /// ```
    pub fn with_modified<F>(f: F) -> Result<Self, CliticError>
    where
        F: FnOnce(&mut NoBreakTable) -> Result<(), CliticError>,
    {
        let mut table = NoBreakTable::global().clone();
        f(&mut table)?;
        Ok(Self::with_table(table))
    }

    #[inline(always)]
    pub fn no_break(&self) -> &NoBreakTable {
        &self.no_break
    }

    /// Mutable access; the first call copies a borrowed table.
    pub fn no_break_mut(&mut self) -> &mut NoBreakTable {
        self.no_break.to_mut()
    }

    /// `true` while the context still borrows the process-wide table.
    #[inline]
    pub fn is_shared(&self) -> bool {
        matches!(self.no_break, Cow::Borrowed(_))
    }
}
