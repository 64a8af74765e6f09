use crate::{LowerCase, Stem, StripClitics, process::Process, profile::Profile};

/// Index terms: lowercase, drop bare clitics, stem.
pub fn search() -> Profile<impl Process> {
    Profile::builder("search")
        .add_stage(LowerCase)
        .add_stage(StripClitics)
        .add_stage(Stem)
        .build()
}

/// Surface forms, lowercased. Clitics are kept.
pub fn lexical() -> Profile<impl Process> {
    Profile::builder("lexical").add_stage(LowerCase).build()
}

/// Stems of every token, clitics included.
pub fn stems() -> Profile<impl Process> {
    Profile::builder("stems").add_stage(Stem).build()
}
