//! Rule tables, one per step.
//!
//! Uppercase letters in a suffix stand for semivowels (see
//! [`letter`](super::letter)).

use super::{
    region::Region::{R1, R2, Rv, RvR2, Word},
    rule::{Edit, Group, Guard, Pick, Rule},
};

// ─────────────────────────────────────────────────────────────────────────────
// Step 1: derivational suffixes
// ─────────────────────────────────────────────────────────────────────────────

const ICATRICE: &[&str] = &[
    "icatrice", "icateur", "icâtion", "icatrices", "icateurs", "icâtions",
];
const EUSEMENT: &[&str] = &["eusement", "eusements"];
const EMENT: &[&str] = &["ement", "ements"];
const ICITE: &[&str] = &["icité", "icités"];
const ABILITE: &[&str] = &["abilité", "abilités"];
const ICATIF: &[&str] = &["icatif", "icative", "icatifs", "icatives"];
const ATIF: &[&str] = &["atif", "ative", "atifs", "atives"];

const ICATRICE_RULES: &[Rule] = &[
    Rule::delete(R2, ICATRICE),
    Rule::replace(Word, ICATRICE, "iqU"),
];

const EUSEMENT_RULES: &[Rule] = &[
    Rule::delete(R2, EUSEMENT),
    Rule::replace(R1, EUSEMENT, "eux"),
    Rule::delete(Rv, EMENT),
];

const ICITE_RULES: &[Rule] = &[Rule::delete(R2, ICITE), Rule::replace(Word, ICITE, "iqU")];

const ABILITE_RULES: &[Rule] = &[
    Rule::delete(R2, ABILITE),
    Rule::replace(Word, ABILITE, "abl"),
];

// `ic` + `atif` is rewritten as a whole when only the `atif` part is in R2.
const ICATIF_RULES: &[Rule] = &[
    Rule::delete(R2, ICATIF),
    Rule::new(R2, ATIF, Edit::ReplaceWider(2, "iqU")),
];

pub(crate) static STEP1: &[Group] = &[
    Group::of(Rule::delete(
        R2,
        &[
            "ance", "iqUe", "isme", "abl'Ye", "ibl'Ye", "iste", "eux", "ances", "iqUes", "ismes",
            "abl'Yes", "ibl'Yes", "istes",
        ],
    )),
    Group::nested(Word, ICATRICE, Pick::First, ICATRICE_RULES),
    Group::of(Rule::delete(
        R2,
        &["atrice", "ateur", "âtion", "atrices", "ateurs", "âtions"],
    )),
    Group::of(Rule::replace(R2, &["logie", "logies"], "log")),
    Group::of(Rule::replace(
        R2,
        &["usion", "ution", "usions", "utions"],
        "u",
    )),
    Group::of(Rule::replace(R2, &["ence", "ences"], "ent")),
    Group::of(Rule::delete(R1, &["issement", "issements"]).guarded(Guard::NonVowelBefore)),
    Group::of(Rule::delete(R2, &["ativement", "ativements"])),
    Group::of(Rule::delete(R2, &["ivement", "ivements"])),
    Group::nested(Word, EUSEMENT, Pick::First, EUSEMENT_RULES),
    Group::of(Rule::delete(
        R2,
        &["abl'Yement", "abl'Yements", "iqUement", "iqUements"],
    )),
    Group::of(Rule::replace(
        Rv,
        &["ièthement", "ièthements", "Ièthement", "Ièthements"],
        "i",
    )),
    Group::of(Rule::delete(Rv, EMENT)),
    Group::nested(Word, ICITE, Pick::First, ICITE_RULES),
    Group::nested(Word, ABILITE, Pick::First, ABILITE_RULES),
    Group::of(Rule::delete(R2, &["ité", "ités"])),
    Group::nested(Word, ICATIF, Pick::Each, ICATIF_RULES),
    Group::of(Rule::delete(R2, ATIF)),
    Group::of(Rule::delete(R2, &["if", "ive", "ifs", "ives"])),
    Group::of(Rule::replace(Word, &["tchieaux"], "té")),
    Group::of(Rule::replace(Word, &["ieaux"], "é")),
    Group::of(Rule::replace(Word, &["eaux"], "eau")),
    Group::of(Rule::replace(R1, &["aux"], "al")),
    Group::of(Rule::delete(R2, &["euse", "euses"])),
    Group::of(Rule::replace(
        R1,
        &["euse", "euses", "euthe", "euthes"],
        "eux",
    )),
    Group::of(Rule::replace(Rv, &["amment"], "ant").then_verb_step()),
    Group::of(Rule::replace(Rv, &["emment"], "ent").then_verb_step()),
    Group::of(
        Rule::delete(Rv, &["ment", "ments"])
            .guarded(Guard::VowelBeforeInRegion)
            .then_verb_step(),
    ),
];

// ─────────────────────────────────────────────────────────────────────────────
// Step 2a: verb endings after a non-vowel
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) static STEP2A: &[Group] = &[Group::of(
    Rule::delete(
        Rv,
        &[
            "iéthie", "éthie", "'thie", "'die", "'lie", "'nie", "'rie", "'sie", "'tie", "Yi",
            "Yis", "Yit", "Yînmes", "Yîtes", "Yîdres", "Yîtent", "Yîdrent", "'Ye", "Yons", "Yiz",
            "'Yent", "Yais", "Yait", "Yêmes", "Yions", "Yêtes", "Yiez", "YaIent", "înmes", "ît",
            "îtes", "îdres", "i", "ie", "Ie", "ies", "ith", "itha", "ithai", "ithaIent", "ithais",
            "ithait", "ithas", "ithent", "ithez", "ithêmes", "ithiez", "ithêtes", "ithions",
            "ithons", "ithont", "is", "issaIent", "issais", "issait", "issant", "issante",
            "issantes", "issants", "isse", "issent", "isses", "issez", "issêtes", "issiez",
            "issêmes", "issions", "issons", "it", "îsse", "îssions", "îssYiz", "îssiez",
            "îssent",
        ],
    )
    .guarded(Guard::NonVowelBeforeInRegion),
)];

// ─────────────────────────────────────────────────────────────────────────────
// Step 2b: remaining verb endings
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) static STEP2B: &[Group] = &[
    Group::of(Rule::delete(
        Rv,
        &[
            "é", "ée", "ées", "és", "èrent", "er", "etha", "ethai", "ethaIent", "ethais",
            "ethait", "ethas", "ethez", "ethêtes", "ethiez", "ethêmes", "ethions", "ethons",
            "ethont", "étha", "éthai", "éthaIent", "éthais", "éthait", "éthas", "éthez",
            "éthêtes", "éthiez", "éthêmes", "éthions", "éthons", "éthont", "ez", "iez", "Iez",
            "'thai", "'thas", "'tha", "'thons", "'thez", "'thont", "'thais", "'thait", "'thêmes",
            "'thêtes", "'thaIent", "'dai", "'das", "'da", "'dons", "'dez", "'dont", "'dais",
            "'dait", "'dêmes", "'dêtes", "'daIent", "'lai", "'las", "'la", "'lons", "'lez",
            "'lont", "'lais", "'lait", "'lêmes", "'lêtes", "'laIent", "'nai", "'nas", "'na",
            "'nons", "'nez", "'nont", "'nais", "'nait", "'nêmes", "'nêtes", "'naIent", "'rai",
            "'ras", "'ra", "'rons", "'rez", "'ront", "'rais", "'rait", "'rêmes", "'rêtes",
            "'raIent", "'sai", "'sas", "'sa", "'sons", "'sez", "'sont", "'sais", "'sait",
            "'sêmes", "'sêtes", "'saIent", "'tai", "'tas", "'ta", "'tons", "'tez", "'tont",
            "'tais", "'tait", "'têmes", "'têtes", "'taIent", "'chai", "'chas", "'cha",
            "'chons", "'chez", "'chont", "'chais", "'chait", "'chêmes", "'chêtes", "'chaIent",
            "êmes", "êtes",
        ],
    )),
    Group::of(Rule::delete(RvR2, &["ions"])),
    Group::of(Rule::new(
        Rv,
        &[
            "âmes", "ât", "âtes", "a", "ai", "aIent", "ais", "ait", "Yant", "ant", "ante",
            "antes", "ants", "as", "asse", "assent", "asses", "assiez", "assions",
        ],
        Edit::DeleteWithE,
    )),
];

// ─────────────────────────────────────────────────────────────────────────────
// Step 3: tidy a word that lost a suffix
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) static STEP3: &[Group] = &[
    Group::of(Rule::replace(Word, &["Y"], "i")),
    Group::of(Rule::replace(Word, &["ç"], "c")),
];

// ─────────────────────────────────────────────────────────────────────────────
// Step 4: residual suffixes of a word no earlier step touched
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) static STEP4: &[Group] = &[
    Group::of(Rule::delete(Word, &["s"]).guarded(Guard::NotAfter(&['a', 'i', 'o', 'u', 'è', 's']))),
    Group::of(Rule::delete(R2, &["ion"]).guarded(Guard::After(&['s', 't']))),
    Group::of(Rule::replace(
        Rv,
        &[
            "ier", "ièr", "ière", "Ier", "Ière", "iethe", "iéthe", "Iethe", "Iéthe",
        ],
        "i",
    )),
    Group::of(Rule::delete(Rv, &["'Ye", "e"])),
    Group::of(Rule::delete(Rv, &["ë"]).guarded(Guard::AfterSeq("gu"))),
];

// ─────────────────────────────────────────────────────────────────────────────
// Steps 5 and 6a: undoubling and the `èl` ending
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) static STEP5: &[Group] = &[Group::of(Rule::new(
    Word,
    &["enn", "onn", "ett", "ell", "eill"],
    Edit::DropLast,
))];

pub(crate) static STEP6A: &[Group] = &[Group::of(Rule::replace(Word, &["èl"], "'l"))];
