use super::{
    endings::ending_table,
    stem::{
        base_stem,
        mutated_stem,
    },
};
use crate::verbs::{
    Person,
    Tense,
    Verb,
};

/// Where a conjugated form came from. Provided forms are tried first, the rules only
/// when the verb has no entry for the exact (tense, person).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conjugation<'a> {
    Provided(&'a str),
    Derived(String),
}

impl Conjugation<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Conjugation::Provided(form) => form,
            Conjugation::Derived(form) => form.as_str(),
        }
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, Conjugation::Provided(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Conjugation::Provided(form) => form.to_string(),
            Conjugation::Derived(form) => form,
        }
    }
}

pub fn resolve<'a>(verb: &'a Verb, tense: Tense, person: Person) -> Conjugation<'a> {
    match verb.provided_form(tense, person) {
        Some(form) => Conjugation::Provided(form),
        None => Conjugation::Derived(derive(verb, tense, person)),
    }
}

/// Conjugated form of `verb`. Total over every input: bad rules or missing endings
/// degrade to a partial form rather than failing.
pub fn conjugate(verb: &Verb, tense: Tense, person: Person) -> String {
    resolve(verb, tense, person).into_string()
}

/// Rule-based form, ignoring any provided table.
pub fn derive(verb: &Verb, tense: Tense, person: Person) -> String {
    let suffix = ending_table(tense, verb.class).suffix(person);

    let mut form = match tense {
        Tense::Future => verb.infinitive.clone(),
        Tense::Present if !person.keeps_present_stem() => mutated_stem(verb),
        _ => base_stem(verb),
    };
    form.push_str(suffix);
    form
}

/// Every (tense, person) form of a verb, tense-major.
pub fn conjugation_grid(verb: &Verb) -> Vec<(Tense, Vec<(Person, String)>)> {
    Tense::ALL
        .into_iter()
        .map(|tense| {
            let forms = Person::ALL
                .into_iter()
                .map(|person| (person, conjugate(verb, tense, person)))
                .collect();
            (tense, forms)
        })
        .collect()
}
