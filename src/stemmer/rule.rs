//! Declarative suffix rules and the engine that runs them.
//!
//! A [`Rule`] is a set of candidate suffixes, the region they must lie in, a
//! side condition and an edit. A [`Group`] is what a step tries in order: its
//! trigger decides whether the group *fires*; a fired group ends the search in
//! a [`first`] step even when its side condition then refuses to edit.
//!
//! Inside a rule the longest matching candidate wins.

use super::{
    letter::Word,
    region::{Region, Regions},
};

/// Side condition on the letters in front of the matched suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// The letter before is not a vowel. A word-initial suffix passes.
    NonVowelBefore,
    /// The letter before is a vowel and lies in the rule's region.
    VowelBeforeInRegion,
    /// The letter before is not a vowel and lies in the rule's region.
    NonVowelBeforeInRegion,
    /// The letter before is one of these.
    After(&'static [char]),
    /// The letter before, if any, is none of these.
    NotAfter(&'static [char]),
    /// The letters right before spell this.
    AfterSeq(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Delete,
    Replace(&'static str),
    /// Replace the suffix together with the `n` letters before it.
    ReplaceWider(usize, &'static str),
    /// Delete, then delete a plain `e` left in front of the suffix when that
    /// `e` lies in the rule's region.
    DeleteWithE,
    /// Keep the suffix but drop the final letter of the word.
    DropLast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub region: Region,
    pub suffixes: &'static [&'static str],
    pub guard: Guard,
    pub edit: Edit,
    /// Ask for step 2a even though this rule changed the word.
    pub verb_step: bool,
}

/// How a group runs its nested rules once its trigger fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// The first nested rule whose suffix is found decides.
    First,
    /// Every nested rule is tried in turn on the current word.
    Each,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub trigger: Rule,
    pub nested: &'static [Rule],
    pub pick: Pick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoMatch,
    /// A suffix was found but nothing was edited.
    Matched,
    Edited { verb_step: bool },
}

impl Outcome {
    #[inline]
    pub fn verb_step(self) -> bool {
        matches!(self, Outcome::Edited { verb_step: true })
    }

    fn merge(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Edited { verb_step: a }, Outcome::Edited { verb_step: b }) => {
                Outcome::Edited { verb_step: a || b }
            }
            (e @ Outcome::Edited { .. }, _) | (_, e @ Outcome::Edited { .. }) => e,
            (Outcome::NoMatch, Outcome::NoMatch) => Outcome::NoMatch,
            _ => Outcome::Matched,
        }
    }
}

impl Rule {
    pub const fn new(region: Region, suffixes: &'static [&'static str], edit: Edit) -> Self {
        Self {
            region,
            suffixes,
            guard: Guard::Always,
            edit,
            verb_step: false,
        }
    }

    pub const fn delete(region: Region, suffixes: &'static [&'static str]) -> Self {
        Self::new(region, suffixes, Edit::Delete)
    }

    pub const fn replace(
        region: Region,
        suffixes: &'static [&'static str],
        with: &'static str,
    ) -> Self {
        Self::new(region, suffixes, Edit::Replace(with))
    }

    pub const fn guarded(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    pub const fn then_verb_step(mut self) -> Self {
        self.verb_step = true;
        self
    }

    /// Letter count of the longest candidate found in the region.
    pub fn find(&self, word: &Word, regions: &Regions) -> Option<usize> {
        let from = regions.start(self.region, word.len());
        self.suffixes
            .iter()
            .filter(|s| word.ends_with_from(s, from))
            .map(|s| s.chars().count())
            .max()
    }

    pub fn run(&self, word: &mut Word, regions: &Regions) -> Outcome {
        let Some(n) = self.find(word, regions) else {
            return Outcome::NoMatch;
        };
        let cut = word.len() - n;
        let from = regions.start(self.region, word.len());
        if !self.guard_holds(word, cut, from) {
            return Outcome::Matched;
        }

        match self.edit {
            Edit::Delete => word.truncate(cut),
            Edit::Replace(with) => {
                word.truncate(cut);
                word.push_pattern(with);
            }
            Edit::ReplaceWider(extra, with) => {
                word.truncate(cut.saturating_sub(extra));
                word.push_pattern(with);
            }
            Edit::DeleteWithE => {
                let e_before = cut
                    .checked_sub(1)
                    .filter(|&i| i >= from)
                    .and_then(|i| word.get(i))
                    .is_some_and(|l| l.is_plain('e'));
                word.truncate(if e_before { cut - 1 } else { cut });
            }
            Edit::DropLast => word.truncate(word.len().saturating_sub(1)),
        }
        Outcome::Edited {
            verb_step: self.verb_step,
        }
    }

    fn guard_holds(&self, word: &Word, cut: usize, from: usize) -> bool {
        let before = cut.checked_sub(1).and_then(|i| word.get(i).map(|l| (i, l)));
        match self.guard {
            Guard::Always => true,
            Guard::NonVowelBefore => before.is_none_or(|(_, l)| !l.is_vowel()),
            Guard::VowelBeforeInRegion => before.is_some_and(|(i, l)| i >= from && l.is_vowel()),
            Guard::NonVowelBeforeInRegion => {
                before.is_some_and(|(i, l)| i >= from && !l.is_vowel())
            }
            Guard::After(set) => before.is_some_and(|(_, l)| set.iter().any(|&c| l.is_plain(c))),
            Guard::NotAfter(set) => {
                before.is_none_or(|(_, l)| !set.iter().any(|&c| l.is_plain(c)))
            }
            Guard::AfterSeq(seq) => {
                let n = seq.chars().count();
                cut >= n
                    && word.letters()[cut - n..cut]
                        .iter()
                        .zip(seq.chars())
                        .all(|(l, c)| l.is_plain(c))
            }
        }
    }
}

impl Group {
    /// A group that is its own single rule.
    pub const fn of(rule: Rule) -> Self {
        Self {
            trigger: rule,
            nested: &[],
            pick: Pick::First,
        }
    }

    /// A group triggered by `region`/`suffixes` that then defers to `nested`.
    pub const fn nested(
        region: Region,
        suffixes: &'static [&'static str],
        pick: Pick,
        nested: &'static [Rule],
    ) -> Self {
        Self {
            trigger: Rule::delete(region, suffixes),
            nested,
            pick,
        }
    }

    pub fn run(&self, word: &mut Word, regions: &Regions) -> Outcome {
        if self.nested.is_empty() {
            return self.trigger.run(word, regions);
        }
        if self.trigger.find(word, regions).is_none() {
            return Outcome::NoMatch;
        }
        match self.pick {
            Pick::First => self
                .nested
                .iter()
                .map(|rule| rule.run(word, regions))
                .find(|o| *o != Outcome::NoMatch)
                .unwrap_or(Outcome::Matched),
            Pick::Each => self
                .nested
                .iter()
                .fold(Outcome::Matched, |acc, rule| acc.merge(rule.run(word, regions))),
        }
    }
}

/// Run groups until one fires.
pub fn first(groups: &[Group], word: &mut Word, regions: &Regions) -> Outcome {
    groups
        .iter()
        .map(|g| g.run(word, regions))
        .find(|o| *o != Outcome::NoMatch)
        .unwrap_or(Outcome::NoMatch)
}

/// Run every group in turn, each on the word left by the previous one.
pub fn each(groups: &[Group], word: &mut Word, regions: &Regions) -> Outcome {
    groups
        .iter()
        .fold(Outcome::NoMatch, |acc, g| acc.merge(g.run(word, regions)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(group: Group, text: &str) -> (String, Outcome) {
        let mut word = Word::prelude(text);
        let regions = Regions::compute(&word);
        let outcome = group.run(&mut word, &regions);
        (word.to_string(), outcome)
    }

    #[test]
    fn longest_candidate_wins() {
        let g = Group::of(Rule::delete(Region::Word, &["s", "es", "ies"]));
        assert_eq!(run(g, "batteries").0, "batter");
    }

    #[test]
    fn region_limits_matches() {
        // R2 of "ordre" is empty
        let g = Group::of(Rule::delete(Region::R2, &["re"]));
        assert_eq!(run(g, "ordre"), ("ordre".to_string(), Outcome::NoMatch));
    }

    #[test]
    fn failed_guard_still_fires() {
        let g = Group::of(Rule::delete(Region::Word, &["ment"]).guarded(Guard::VowelBeforeInRegion));
        assert_eq!(run(g, "fragment"), ("fragment".to_string(), Outcome::Matched));
    }

    #[test]
    fn replace_writes_semivowel_marks() {
        let g = Group::of(Rule::replace(Region::Word, &["ication"], "iqU"));
        let mut word = Word::prelude("rectification");
        let regions = Regions::compute(&word);
        g.run(&mut word, &regions);
        assert_eq!(format!("{word:?}"), "Word(rectifiqU)");
    }

    #[test]
    fn delete_with_e() {
        let g = Group::of(Rule::new(Region::Rv, &["ant"], Edit::DeleteWithE));
        assert_eq!(run(g, "mangeant").0, "mang");
    }

    #[test]
    fn after_guards() {
        let g = Group::of(Rule::delete(Region::Word, &["s"]).guarded(Guard::NotAfter(&['s', 'u'])));
        assert_eq!(run(g, "chats").0, "chat");
        assert_eq!(run(g, "bus").0, "bus");
        let g = Group::of(Rule::delete(Region::Word, &["ë"]).guarded(Guard::AfterSeq("gu")));
        assert_eq!(run(g, "aiguë").0, "aigu");
        assert_eq!(run(g, "noë").0, "noë");
    }

    #[test]
    fn nested_first_stops_at_first_found() {
        const NESTED: &[Rule] = &[
            Rule::delete(Region::R2, &["ement"]),
            Rule::replace(Region::Word, &["ement"], "ow"),
        ];
        let g = Group::nested(Region::Word, &["ement"], Pick::First, NESTED);
        let (word, outcome) = run(g, "lent");
        assert_eq!(word, "lent");
        assert_eq!(outcome, Outcome::NoMatch);
        assert_eq!(run(g, "vraiement").0, "vraiow");
    }

    #[test]
    fn each_merges_outcomes() {
        const STEP: &[Group] = &[
            Group::of(Rule::delete(Region::Word, &["s"])),
            Group::of(Rule::replace(Region::Word, &["x"], "y").then_verb_step()),
        ];
        let mut word = Word::prelude("boxs");
        let regions = Regions::compute(&word);
        let outcome = each(STEP, &mut word, &regions);
        assert_eq!(word.to_string(), "boy");
        assert!(outcome.verb_step());
    }
}
