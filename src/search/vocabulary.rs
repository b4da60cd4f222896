//! Category label → ingatlan.com path token tables.
//!
//! Keys are the Hungarian labels a user (or the model) would use. One label
//! may expand to several tokens; token order is the order they are emitted
//! into the search path.

/// Static category table
pub struct Vocabulary {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl Vocabulary {
    /// Tokens for `label`, matched case-insensitively after trimming
    pub fn lookup(&self, label: &str) -> Option<&'static [&'static str]> {
        let key = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, tokens)| *tokens)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

pub static PROPERTY_TYPES: Vocabulary = Vocabulary {
    entries: &[
        (
            "ház",
            &[
                "haz",
                "csaladi-haz",
                "ikerhaz",
                "sorhaz",
                "kuria",
                "villa-kastely",
                "hazresz",
                "egyeb-haz",
            ],
        ),
        ("családi ház", &["csaladi-haz"]),
        ("ikerház", &["ikerhaz"]),
        ("sorház", &["sorhaz"]),
        ("házrész", &["hazresz"]),
        ("kúria", &["kuria"]),
        ("villa", &["villa-kastely"]),
        ("kastély", &["villa-kastely"]),
        ("lakás", &["lakas"]),
        ("téglalakás", &["tegla-epitesu-lakas"]),
        ("panellakás", &["panel-lakas"]),
        ("telek", &["telek"]),
        ("nyaraló", &["nyaralo"]),
        ("garázs", &["garazs"]),
        ("iroda", &["iroda"]),
    ],
};

pub static CONDITIONS: Vocabulary = Vocabulary {
    entries: &[
        ("új építésű", &["uj-epitesu"]),
        ("újszerű", &["ujszeru"]),
        ("felújított", &["felujitott"]),
        ("jó állapotú", &["jo-allapotu"]),
        ("közepes állapotú", &["kozepes-allapotu"]),
        ("felújítandó", &["felujitando"]),
        (
            "beköltözhető",
            &["uj-epitesu", "ujszeru", "felujitott", "jo-allapotu"],
        ),
    ],
};

pub static HEATING: Vocabulary = Vocabulary {
    entries: &[
        ("gáz", &["gaz-cirko", "gaz-konvektor", "gazkazan"]),
        ("gázcirkó", &["gaz-cirko"]),
        ("gázkonvektor", &["gaz-konvektor"]),
        ("távfűtés", &["tavfutes"]),
        ("elektromos", &["elektromos"]),
        ("padlófűtés", &["padlofutes"]),
        ("hőszivattyú", &["hoszivattyu"]),
        ("cserépkályha", &["cserepkalyha"]),
        ("kandalló", &["kandallo"]),
    ],
};
