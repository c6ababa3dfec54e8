use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

/// Infinitive ending category. Decides which ending table a verb uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConjugationClass {
    #[serde(rename = "-ar")]
    Ar,
    #[serde(rename = "-er")]
    Er,
    #[serde(rename = "-ir")]
    Ir,
    #[serde(rename = "other")]
    Other,
}

impl ConjugationClass {
    pub const ALL: [ConjugationClass; 4] =
        [ConjugationClass::Ar, ConjugationClass::Er, ConjugationClass::Ir, ConjugationClass::Other];

    pub fn id(&self) -> &'static str {
        match self {
            ConjugationClass::Ar => "-ar",
            ConjugationClass::Er => "-er",
            ConjugationClass::Ir => "-ir",
            ConjugationClass::Other => "other",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.id() == id)
    }

    /// The two-character infinitive suffix, `None` for `Other`.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            ConjugationClass::Ar => Some("ar"),
            ConjugationClass::Er => Some("er"),
            ConjugationClass::Ir => Some("ir"),
            ConjugationClass::Other => None,
        }
    }
}

impl Default for ConjugationClass {
    fn default() -> Self {
        Self::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Regularity {
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "irregular")]
    Irregular,
    #[serde(rename = "stem-change")]
    StemChange,
    #[serde(rename = "spelling-change")]
    SpellingChange,
    #[serde(rename = "highly-irregular")]
    HighlyIrregular,
}

impl Regularity {
    pub const ALL: [Regularity; 5] = [
        Regularity::Regular,
        Regularity::Irregular,
        Regularity::StemChange,
        Regularity::SpellingChange,
        Regularity::HighlyIrregular,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Regularity::Regular => "regular",
            Regularity::Irregular => "irregular",
            Regularity::StemChange => "stem-change",
            Regularity::SpellingChange => "spelling-change",
            Regularity::HighlyIrregular => "highly-irregular",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|regularity| regularity.id() == id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Regularity::Regular => "Regular",
            Regularity::Irregular => "Irregular",
            Regularity::StemChange => "Stem change",
            Regularity::SpellingChange => "Spelling change",
            Regularity::HighlyIrregular => "Highly irregular",
        }
    }
}

impl Default for Regularity {
    fn default() -> Self {
        Self::Regular
    }
}

/// Grammatical person. Ids match the keys used by provided conjugation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "yo")]
    FirstSingular,
    #[serde(rename = "tú")]
    SecondSingular,
    #[serde(rename = "usted")]
    ThirdSingular,
    #[serde(rename = "nosotros")]
    FirstPlural,
    /// Regional (Spain). Can be switched off in the filter.
    #[serde(rename = "vosotros")]
    SecondPlural,
    #[serde(rename = "ustedes")]
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Person::FirstSingular => "yo",
            Person::SecondSingular => "tú",
            Person::ThirdSingular => "usted",
            Person::FirstPlural => "nosotros",
            Person::SecondPlural => "vosotros",
            Person::ThirdPlural => "ustedes",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|person| person.id() == id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Person::FirstSingular => "yo",
            Person::SecondSingular => "tú",
            Person::ThirdSingular => "usted/él/ella",
            Person::FirstPlural => "nosotros",
            Person::SecondPlural => "vosotros",
            Person::ThirdPlural => "ustedes/ellos",
        }
    }

    /// Nosotros and vosotros keep the unmutated stem in the present tense.
    pub fn keeps_present_stem(&self) -> bool {
        matches!(self, Person::FirstPlural | Person::SecondPlural)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Preterite,
    Imperfect,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 4] = [Tense::Present, Tense::Preterite, Tense::Imperfect, Tense::Future];

    pub fn id(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Preterite => "preterite",
            Tense::Imperfect => "imperfect",
            Tense::Future => "future",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tense| tense.id() == id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tense::Present => "Present",
            Tense::Preterite => "Preterite",
            Tense::Imperfect => "Imperfect",
            Tense::Future => "Future",
        }
    }
}

/// Hard-coded forms keyed by tense then person. An entry here wins over the rules.
pub type ConjugationTable = BTreeMap<Tense, BTreeMap<Person, String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verb {
    pub id: Uuid,
    pub infinitive: String,
    pub english: String,
    #[serde(rename = "ending")]
    pub class: ConjugationClass,
    pub regularity: Regularity,
    pub highly_irregular: bool,
    /// `"e>ie"` style vowel mutation for the present tense.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem_change: Option<String>,
    /// Descriptive only, the engine does not apply it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provided_conjugations: Option<ConjugationTable>,
}

impl Verb {
    /// Builds a verb with no stem change, notes or provided forms. The id is derived
    /// from the infinitive so the same verb keeps its identity across loads.
    pub fn new(
        infinitive: impl Into<String>,
        english: impl Into<String>,
        class: ConjugationClass,
        regularity: Regularity,
    ) -> Self {
        let infinitive = infinitive.into();
        Self {
            id: Self::derive_id(&infinitive),
            infinitive,
            english: english.into(),
            class,
            regularity,
            highly_irregular: regularity == Regularity::HighlyIrregular,
            stem_change: None,
            spelling_change: None,
            notes: None,
            provided_conjugations: None,
        }
    }

    pub fn derive_id(infinitive: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, infinitive.as_bytes())
    }

    pub fn with_stem_change(mut self, rule: impl Into<String>) -> Self {
        self.stem_change = Some(rule.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_provided(mut self, tense: Tense, person: Person, form: impl Into<String>) -> Self {
        self.provided_conjugations
            .get_or_insert_with(ConjugationTable::new)
            .entry(tense)
            .or_default()
            .insert(person, form.into());
        self
    }

    pub fn provided_form(&self, tense: Tense, person: Person) -> Option<&str> {
        self.provided_conjugations
            .as_ref()
            .and_then(|table| table.get(&tense))
            .and_then(|forms| forms.get(&person))
            .map(String::as_str)
    }
}
