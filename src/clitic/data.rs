use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates every per-marker word list and the lookup map
/// ---------------------------------------------------------------------------
macro_rules! define_clitics {
    ($(
        $ident:ident, $marker:literal,
        words: [ $($w:literal),* $(,)? ]
    ),* $(,)?) => {
        // Per-marker static word lists
        $(
            paste! {
                mod [<$ident:lower _words>] {
                    pub static WORDS: &[&str] = &[$($w),*];
                }
            }
        )*

        /// Markers that own a no-break list, in declaration order.
        pub const MARKERS: &[&str] = &[$($marker),*];

        // Global lookup table (public)
        paste! {
            pub static NO_BREAK_WORDS: Map<&'static str, &'static [&'static str]> = phf_map! {
                $(
                    $marker => [<$ident:lower _words>]::WORDS,
                )*
            };
        }
    };
}

// ---------------------------------------------------------------------------
//    No-break words (single source of truth)
//    Each entry is a lexicalised apostrophe form that must stay one token.
//    The table stores their stems, so inflected forms stay whole as well.
// ---------------------------------------------------------------------------
define_clitics! {
    CH, "ch",
        words: [
            "ch'ler", "ch'lîn", "ch'lyi", "ch'minner", "ch'minneux", "ch'na", "ch'napan",
            "ch'nile", "ch'nole", "ch't", "ch'tî", "ch’la", "ch’lo",
        ],

    D, "d",
        words: [
            "d's", "d'bat", "d'battre", "d'bit", "d'bitant", "d'biter", "d'biteux", "d'bris",
            "d'but", "d'chet", "d'cours", "d'enpis", "d'faut", "d'faute", "d'fend", "d'fendre",
            "d'fendu", "d'fens'rêsse", "d'fense", "d'fenseûse", "d'fenseûthe", "d'fenseux",
            "d'fi", "d'fier", "d'finni", "d'funter", "d'gâchi", "d'gann'nie", "d'ganner",
            "d'gât", "d'gout", "d'goutter", "d'gré", "d'hait", "d'houors", "d'lai", "d'lédgi",
            "d'licat", "d'licatement", "d'licatesse", "d'licatesses", "d'lice",
            "d'licieusement", "d'licieux", "d'lit", "d'livrance", "d'livrer", "d'luge",
            "d'lugi", "d'main", "d'maine", "d'mande", "d'mander", "d'mangi", "d'meuthe",
            "d'meuther", "d'mi", "d'mie", "d'mouaîselle", "d'mouaîselles", "d'natuthe",
            "d'ores", "d'pâsser", "d'péthi", "d'péthissant", "d'péthissement", "d'pich'chie",
            "d'pichi", "d'pis", "d'puther", "d'rive", "d'sabil'lie", "d'sabil'rêsse",
            "d'sabilleux", "d'sabilyi", "d'sabuser", "d'saccord", "d'saccorder",
            "d'saccouôteunmer", "d'saccouplier", "d'sagrêment", "d'sagriabl'ye",
            "d'sagriabliément", "d'sahonter", "d'saîner", "d'sajuster", "d'salîngni",
            "d'salleunmer", "d'saltéthant", "d'saltéther", "d'samathage", "d'samathé",
            "d'samather", "d'sappathié", "d'sappathier", "d'sappointé", "d'sappointêment",
            "d'sappointer", "d'sappouainté", "d'sappouaintêment", "d'sappouainter",
            "d'sapprendre", "d'sapprouver", "d'sareuné", "d'sareunêment", "d'sareuner",
            "d'sarmer", "d'sarrangi", "d'sarun", "d'sarunn'nie", "d'sarunné", "d'sarunner",
            "d'sasaisonner", "d'sastre", "d'savantag'gie", "d'savantage",
            "d'savantageusement", "d'savantageux", "d'savantagi", "d'saveuglier",
            "d'saveugliéthie", "d'savouer", "d'savouêthie", "d'scendant", "d'scendre",
            "d'sembarrasser", "d'sembèrqu'thie", "d'sembèrquément", "d'sembèrtchément",
            "d'sembèrtchi", "d'sembourbéler", "d'sêmitter", "d'semmanchi", "d'semp'ser",
            "d'sempliai", "d'sempliyé", "d'semplyi", "d'sempoter", "d'senchaîner",
            "d'senchantement", "d'senchanter", "d'senchorchéler", "d'senchorchéleux",
            "d'senchorchell'lie", "d'senchorchellement", "d'senflier", "d'senfoui",
            "d'sengagi", "d'sengouement", "d'sengouer", "d'sengouêthie", "d'sengoueux",
            "d'senhalaûder", "d'senhèrméler", "d'senn'yant", "d'senn'yer", "d'senniêthie",
            "d'senrouer", "d'senrouêthie", "d'sensev'li", "d'sentèrrer", "d'sêpîler",
            "d'sèrgoter", "d'sèrt", "d'sèrtage", "d'sèrter", "d'sèrtéthie", "d'sèrteux",
            "d'sêtablyi", "d'sêtchilbouêtchi", "d'sêtchilibré", "d'shabituer",
            "d'shabitueûthie", "d'sharmonie", "d'sharmonnique", "d'shéthiter", "d'shonneu",
            "d'shonorabl'ye", "d'shonorabliément", "d'shonorer", "d'si", "d'sînfecter",
            "d'sînfecteux", "d'sithabl'ye", "d'sithabliément", "d'sither", "d'so", "d'sobéi",
            "d'sobéissance", "d'sobéissant", "d'soblyigeant", "d'soblyigi", "d'sodorant",
            "d'sodothant", "d'sodother", "d'soeuvré", "d'soeuvrer", "d'sorbiter",
            "d'sordonné", "d'sordre", "d'sorganniser", "d'sotchupé", "d'souothil'lie",
            "d'souothilyi", "d'ssous", "d'ssus", "d'va", "d'valer", "d'valeux", "d'vanchi",
            "d'vant", "d'vant'lée", "d'vanté", "d'vantuthe", "d'vaster", "d'ver", "d'vièrs",
            "d'vinn'nie", "d'vinnâle", "d'vinner", "d'vinneux", "d'vis", "d'viser",
            "d'vouother",
        ],

    J, "j",
        words: ["j'ter", "j'ton", "j'va", "j'val", "j'valot"],

    L, "l",
        words: ["l's", "l'vant", "l'vée", "l'ver"],

    M, "m",
        words: [
            "m'lasse", "m'lon", "m'luque", "m'n", "m'neux", "m'nichant", "m'niche", "m'nichi",
            "m'nottes", "m'nu", "m's", "m'sage", "m'sagi", "m'sagiéthe", "m'sespé",
            "m'sespéther", "m'soûque", "m'suthabl'ye", "m'suthabliément", "m'suthe",
            "m'suther", "m'sutheux",
        ],

    N, "n",
        words: ["n'veu", "n'yer"],

    S, "s",
        words: [
            "s'n", "s'crèche", "s'gond", "s'gondaithe", "s'gondaithement", "s'gonde",
            "s'gondement", "s'gret", "s'grétaithe", "s'grètement", "s'lon", "s'mailles",
            "s'maine", "s'meuse", "s'na", "s'nichon", "s'nîle", "s'path'thie",
            "s'pathabl'ye", "s'pathanner", "s'pathâtion", "s'pathêment", "s'pather",
            "s'tchâge", "s'tcheux", "s'tchi",
        ],

    T, "t",
        words: [
            "t'n", "t'nailles", "t'naisie", "t'nant", "t'neux", "t'nîn", "t'non", "t'nu",
            "t'nue",
        ],
}
