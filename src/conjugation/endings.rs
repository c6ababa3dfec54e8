use crate::verbs::{
    ConjugationClass,
    Person,
    Tense,
};

/// Suffixes for one (tense, class) pair, in person order.
pub struct EndingTable {
    pub name: &'static str,
    endings: &'static [(Person, &'static str)],
}

impl EndingTable {
    /// Unmapped persons give an empty suffix.
    pub fn suffix(&self, person: Person) -> &'static str {
        self.endings
            .iter()
            .find(|(candidate, _)| *candidate == person)
            .map(|(_, suffix)| *suffix)
            .unwrap_or("")
    }
}

use Person::*;

pub static PRESENT_AR: EndingTable = EndingTable {
    name: "present -ar",
    endings: &[
        (FirstSingular, "o"),
        (SecondSingular, "as"),
        (ThirdSingular, "a"),
        (FirstPlural, "amos"),
        (SecondPlural, "áis"),
        (ThirdPlural, "an"),
    ],
};

pub static PRESENT_ER: EndingTable = EndingTable {
    name: "present -er",
    endings: &[
        (FirstSingular, "o"),
        (SecondSingular, "es"),
        (ThirdSingular, "e"),
        (FirstPlural, "emos"),
        (SecondPlural, "éis"),
        (ThirdPlural, "en"),
    ],
};

pub static PRESENT_IR: EndingTable = EndingTable {
    name: "present -ir",
    endings: &[
        (FirstSingular, "o"),
        (SecondSingular, "es"),
        (ThirdSingular, "e"),
        (FirstPlural, "imos"),
        (SecondPlural, "ís"),
        (ThirdPlural, "en"),
    ],
};

pub static PRETERITE_AR: EndingTable = EndingTable {
    name: "preterite -ar",
    endings: &[
        (FirstSingular, "é"),
        (SecondSingular, "aste"),
        (ThirdSingular, "ó"),
        (FirstPlural, "amos"),
        (SecondPlural, "asteis"),
        (ThirdPlural, "aron"),
    ],
};

pub static PRETERITE_ER_IR: EndingTable = EndingTable {
    name: "preterite -er/-ir",
    endings: &[
        (FirstSingular, "í"),
        (SecondSingular, "iste"),
        (ThirdSingular, "ió"),
        (FirstPlural, "imos"),
        (SecondPlural, "isteis"),
        (ThirdPlural, "ieron"),
    ],
};

pub static IMPERFECT_AR: EndingTable = EndingTable {
    name: "imperfect -ar",
    endings: &[
        (FirstSingular, "aba"),
        (SecondSingular, "abas"),
        (ThirdSingular, "aba"),
        (FirstPlural, "ábamos"),
        (SecondPlural, "abais"),
        (ThirdPlural, "aban"),
    ],
};

pub static IMPERFECT_ER_IR: EndingTable = EndingTable {
    name: "imperfect -er/-ir",
    endings: &[
        (FirstSingular, "ía"),
        (SecondSingular, "ías"),
        (ThirdSingular, "ía"),
        (FirstPlural, "íamos"),
        (SecondPlural, "íais"),
        (ThirdPlural, "ían"),
    ],
};

/// Appended to the whole infinitive, whatever the class.
pub static FUTURE: EndingTable = EndingTable {
    name: "future",
    endings: &[
        (FirstSingular, "é"),
        (SecondSingular, "ás"),
        (ThirdSingular, "á"),
        (FirstPlural, "emos"),
        (SecondPlural, "éis"),
        (ThirdPlural, "án"),
    ],
};

/**
 * `other` borrows a table instead of having its own: the -ar set in the present and
 * preterite, the -er/-ir set in the imperfect.
 */
pub fn ending_table(tense: Tense, class: ConjugationClass) -> &'static EndingTable {
    match (tense, class) {
        (Tense::Present, ConjugationClass::Ar | ConjugationClass::Other) => &PRESENT_AR,
        (Tense::Present, ConjugationClass::Er) => &PRESENT_ER,
        (Tense::Present, ConjugationClass::Ir) => &PRESENT_IR,
        (Tense::Preterite, ConjugationClass::Ar | ConjugationClass::Other) => &PRETERITE_AR,
        (Tense::Preterite, ConjugationClass::Er | ConjugationClass::Ir) => &PRETERITE_ER_IR,
        (Tense::Imperfect, ConjugationClass::Ar) => &IMPERFECT_AR,
        (Tense::Imperfect, _) => &IMPERFECT_ER_IR,
        (Tense::Future, _) => &FUTURE,
    }
}
