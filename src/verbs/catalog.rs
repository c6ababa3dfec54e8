use std::{
    collections::HashMap,
    fs,
    path::Path,
    time::Instant,
};

use serde::Deserialize;
use uuid::Uuid;

use super::types::{
    ConjugationClass,
    ConjugationTable,
    Person,
    Regularity,
    Tense,
    Verb,
};
use crate::core::ConjugaError;

/// Record shape of the verb data file. Enum fields stay as strings so a bad value
/// only affects its own record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVerb {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    infinitive: String,
    #[serde(default)]
    english: String,
    #[serde(default)]
    ending: String,
    #[serde(default)]
    regularity: String,
    #[serde(default)]
    highly_irregular: bool,
    #[serde(default)]
    stem_change: Option<String>,
    #[serde(default)]
    spelling_change: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    provided_conjugations: Option<HashMap<String, HashMap<String, String>>>,
}

impl RawVerb {
    fn into_verb(self) -> Option<Verb> {
        let infinitive = self.infinitive;
        if infinitive.trim().is_empty() {
            log::warn!("Skipping verb record with an empty infinitive");
            return None;
        }

        let class = ConjugationClass::from_id(&self.ending).unwrap_or_else(|| {
            log::debug!("Unknown ending '{}' for '{}', using 'other'", self.ending, infinitive);
            ConjugationClass::Other
        });
        if let Some(suffix) = class.suffix() {
            if !infinitive.ends_with(suffix) {
                log::debug!("'{}' is tagged {} without the plain suffix", infinitive, class.id());
            }
        }

        let regularity = Regularity::from_id(&self.regularity).unwrap_or_else(|| {
            log::debug!("Unknown regularity '{}' for '{}', using 'regular'", self.regularity, infinitive);
            Regularity::Regular
        });

        let provided_conjugations = self
            .provided_conjugations
            .map(|raw| decode_table(&infinitive, raw))
            .filter(|table| !table.is_empty());

        Some(Verb {
            id: self.id.unwrap_or_else(|| Verb::derive_id(&infinitive)),
            english: self.english,
            class,
            regularity,
            highly_irregular: self.highly_irregular,
            stem_change: self.stem_change.filter(|rule| !rule.is_empty()),
            spelling_change: self.spelling_change.filter(|note| !note.is_empty()),
            notes: self.notes.filter(|note| !note.is_empty()),
            provided_conjugations,
            infinitive,
        })
    }
}

fn decode_table(infinitive: &str, raw: HashMap<String, HashMap<String, String>>) -> ConjugationTable {
    let mut table = ConjugationTable::new();
    for (tense_id, forms) in raw {
        let Some(tense) = Tense::from_id(&tense_id) else {
            log::debug!("Dropping provided forms for unknown tense '{}' on '{}'", tense_id, infinitive);
            continue;
        };
        for (person_id, form) in forms {
            match Person::from_id(&person_id) {
                Some(person) => {
                    table.entry(tense).or_default().insert(person, form);
                }
                None => {
                    log::debug!("Dropping provided form for unknown person '{}' on '{}'", person_id, infinitive)
                }
            }
        }
    }
    table
}

/// Immutable, ordered verb list as supplied by the data file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    verbs: Vec<Verb>,
}

impl Catalog {
    pub fn new(verbs: Vec<Verb>) -> Self {
        Self { verbs }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConjugaError> {
        let raw: Vec<RawVerb> = serde_json::from_str(json)?;
        let total = raw.len();
        let verbs: Vec<Verb> = raw.into_iter().filter_map(RawVerb::into_verb).collect();
        if verbs.len() != total {
            log::warn!("Skipped {} of {} verb records", total - verbs.len(), total);
        }
        Ok(Self { verbs })
    }

    pub fn load(path: &Path) -> Result<Self, ConjugaError> {
        if !path.exists() {
            return Err(ConjugaError::CatalogNotFound(path.display().to_string()));
        }

        let start = Instant::now();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} verbs from {} ({:.2}s)",
            catalog.len(),
            path.display(),
            start.elapsed().as_secs_f32()
        );
        Ok(catalog)
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.iter()
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Verb> {
        self.verbs.iter().find(|verb| verb.id == *id)
    }

    pub fn find_infinitive(&self, infinitive: &str) -> Option<&Verb> {
        let needle = infinitive.trim().to_lowercase();
        self.verbs.iter().find(|verb| verb.infinitive.trim().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::conjugation::conjugate;

    const SAMPLE: &str = r#"[
        {
            "infinitive": "ser",
            "english": "to be",
            "ending": "-er",
            "regularity": "highly-irregular",
            "highlyIrregular": true,
            "stemChange": null,
            "spellingChange": null,
            "notes": "Most irregular verb; include sample present forms.",
            "providedConjugations": {
                "present": { "yo": "soy", "tú": "eres", "usted": "es", "vos": "sos" },
                "pluperfect": { "yo": "había sido" }
            }
        },
        {
            "infinitive": "hablar",
            "english": "to speak",
            "ending": "-ar",
            "regularity": "regular",
            "highlyIrregular": false,
            "notes": "",
            "providedConjugations": {}
        },
        {
            "infinitive": "pensar",
            "english": "to think",
            "ending": "-ur",
            "regularity": "vowel-shift",
            "highlyIrregular": false,
            "stemChange": "e>ie"
        },
        { "infinitive": "  ", "english": "nothing", "ending": "-ar", "regularity": "regular" },
        { "infinitive": "reír", "english": "to laugh", "ending": "-ir", "regularity": "irregular" }
    ]"#;

    #[test]
    fn test_decoding_falls_back_per_record() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 4);

        let ser = catalog.find_infinitive("ser").unwrap();
        assert_eq!(ser.class, ConjugationClass::Er);
        assert_eq!(ser.regularity, Regularity::HighlyIrregular);
        assert_eq!(ser.provided_form(Tense::Present, Person::SecondSingular), Some("eres"));
        let table = ser.provided_conjugations.as_ref().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[&Tense::Present].len(), 3);

        let hablar = catalog.find_infinitive("HABLAR").unwrap();
        assert!(hablar.notes.is_none());
        assert!(hablar.provided_conjugations.is_none());

        let pensar = catalog.find_infinitive("pensar").unwrap();
        assert_eq!(pensar.class, ConjugationClass::Other);
        assert_eq!(pensar.regularity, Regularity::Regular);
        assert_eq!(pensar.stem_change.as_deref(), Some("e>ie"));

        let reir = catalog.find_infinitive("reír").unwrap();
        assert_eq!(reir.class, ConjugationClass::Ir);
    }

    #[test]
    fn test_accented_infinitive_keeps_its_class() {
        let json = r#"[{ "infinitive": "oír", "english": "to hear", "ending": "-ir", "regularity": "irregular" }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let oir = &catalog.verbs()[0];
        assert_eq!(oir.class, ConjugationClass::Ir);
        assert_eq!(conjugate(oir, Tense::Preterite, Person::FirstSingular), "oí");
        assert_eq!(conjugate(oir, Tense::Imperfect, Person::FirstSingular), "oía");
    }

    #[test]
    fn test_infinitive_is_kept_verbatim() {
        let json = r#"[{ "infinitive": "hablar ", "english": "to speak", "ending": "-ar", "regularity": "regular" }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let hablar = &catalog.verbs()[0];
        assert_eq!(hablar.infinitive, "hablar ");
        assert_eq!(hablar.id, Verb::derive_id("hablar "));
        assert!(catalog.find_infinitive("hablar").is_some());
    }

    #[test]
    fn test_ids_are_stable_or_supplied() {
        let json = r#"[
            { "id": "6f1c7a52-7f7c-4c1e-9a43-0cf0f3a0a001", "infinitive": "comer", "english": "to eat", "ending": "-er", "regularity": "regular" },
            { "infinitive": "vivir", "english": "to live", "ending": "-ir", "regularity": "regular" }
        ]"#;
        let first = Catalog::from_json_str(json).unwrap();
        let second = Catalog::from_json_str(json).unwrap();

        let comer = first.find_infinitive("comer").unwrap();
        assert_eq!(comer.id.to_string(), "6f1c7a52-7f7c-4c1e-9a43-0cf0f3a0a001");
        assert_eq!(first.verbs()[1].id, second.verbs()[1].id);
        assert_eq!(first.verbs()[1].id, Verb::derive_id("vivir"));
        assert!(first.get(&comer.id).is_some());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verbs.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 4);

        let missing = Catalog::load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ConjugaError::CatalogNotFound(_))));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(Catalog::from_json_str("{\"verbs\": []}"), Err(ConjugaError::Json(_))));
    }
}
