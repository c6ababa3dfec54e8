use std::collections::{
    BTreeSet,
    HashSet,
};

use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use crate::verbs::{
    ConjugationClass,
    Person,
    Regularity,
    Tense,
    Verb,
};

/// Practice selection. Sets are ordered so the deck comes out in canonical
/// tense/person order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredFilter")]
pub struct VerbFilter {
    /// Empty means every verb.
    pub selected_verbs: HashSet<Uuid>,
    pub tenses: BTreeSet<Tense>,
    pub persons: BTreeSet<Person>,
    pub classes: BTreeSet<ConjugationClass>,
    pub regularities: BTreeSet<Regularity>,
    disable_regional_plural: bool,
}

impl Default for VerbFilter {
    fn default() -> Self {
        Self {
            selected_verbs: HashSet::new(),
            tenses: Tense::ALL.into_iter().collect(),
            persons: Person::ALL.into_iter().collect(),
            classes: ConjugationClass::ALL.into_iter().collect(),
            regularities: Regularity::ALL.into_iter().collect(),
            disable_regional_plural: false,
        }
    }
}

/// Saved shape of a filter. Missing fields take the defaults, and the regional
/// plural flag is applied to the person set again on load.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredFilter {
    selected_verbs: HashSet<Uuid>,
    tenses: BTreeSet<Tense>,
    persons: BTreeSet<Person>,
    classes: BTreeSet<ConjugationClass>,
    regularities: BTreeSet<Regularity>,
    disable_regional_plural: bool,
}

impl Default for StoredFilter {
    fn default() -> Self {
        let filter = VerbFilter::default();
        Self {
            selected_verbs: filter.selected_verbs,
            tenses: filter.tenses,
            persons: filter.persons,
            classes: filter.classes,
            regularities: filter.regularities,
            disable_regional_plural: filter.disable_regional_plural,
        }
    }
}

impl From<StoredFilter> for VerbFilter {
    fn from(stored: StoredFilter) -> Self {
        let mut persons = stored.persons;
        if stored.disable_regional_plural {
            persons.remove(&Person::SecondPlural);
        }
        Self {
            selected_verbs: stored.selected_verbs,
            tenses: stored.tenses,
            persons,
            classes: stored.classes,
            regularities: stored.regularities,
            disable_regional_plural: stored.disable_regional_plural,
        }
    }
}

impl VerbFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, verb: &Verb) -> bool {
        (self.selected_verbs.is_empty() || self.selected_verbs.contains(&verb.id))
            && self.classes.contains(&verb.class)
            && self.regularities.contains(&verb.regularity)
    }

    pub fn disable_regional_plural(&self) -> bool {
        self.disable_regional_plural
    }

    /// Drops vosotros from the person set when enabled, puts it back when disabled.
    pub fn set_disable_regional_plural(&mut self, disabled: bool) {
        self.disable_regional_plural = disabled;
        if disabled {
            self.persons.remove(&Person::SecondPlural);
        } else {
            self.persons.insert(Person::SecondPlural);
        }
    }

    pub fn toggle_tense(&mut self, tense: Tense) {
        toggle(&mut self.tenses, tense);
    }

    /// Vosotros cannot be switched back on while the regional plural is disabled.
    pub fn toggle_person(&mut self, person: Person) {
        if person == Person::SecondPlural && self.disable_regional_plural {
            return;
        }
        toggle(&mut self.persons, person);
    }

    pub fn toggle_class(&mut self, class: ConjugationClass) {
        toggle(&mut self.classes, class);
    }

    pub fn toggle_regularity(&mut self, regularity: Regularity) {
        toggle(&mut self.regularities, regularity);
    }

    pub fn select_verb(&mut self, id: Uuid) {
        self.selected_verbs.insert(id);
    }

    pub fn deselect_verb(&mut self, id: &Uuid) {
        self.selected_verbs.remove(id);
    }

    pub fn clear_verb_selection(&mut self) {
        self.selected_verbs.clear();
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
