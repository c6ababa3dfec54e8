use rayon::iter::{
    IntoParallelRefIterator,
    ParallelIterator,
};

use super::{
    card::{
        CardMode,
        Flashcard,
    },
    filter::VerbFilter,
};
use crate::{
    conjugation::conjugate,
    verbs::Catalog,
};

/// Expands filtered verbs × tenses × persons into cards, in that nesting order.
/// Neither the catalog nor the filter is touched.
pub fn build_deck(catalog: &Catalog, filter: &VerbFilter, mode: CardMode) -> Vec<Flashcard> {
    // Parallel collect keeps the sequential order.
    catalog
        .verbs()
        .par_iter()
        .filter(|verb| filter.matches(verb))
        .flat_map_iter(move |verb| {
            filter.tenses.iter().flat_map(move |&tense| {
                filter.persons.iter().map(move |&person| Flashcard {
                    verb: verb.clone(),
                    tense,
                    person,
                    mode,
                    conjugated_form: conjugate(verb, tense, person),
                })
            })
        })
        .collect()
}
