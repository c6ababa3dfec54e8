use crate::verbs::{
    ConjugationClass,
    Verb,
};

/// Parsed `"X>Y"` stem-change rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemChange<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl<'a> StemChange<'a> {
    /// Needs exactly two non-empty parts around `>`. Empty parts are skipped, so
    /// `"e>>ie"` and `"e>ie>"` read as `"e>ie"`.
    pub fn parse(rule: &'a str) -> Option<Self> {
        let mut parts = rule.split('>').filter(|part| !part.is_empty());
        let from = parts.next()?;
        let to = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { from, to })
    }

    /// Replaces the last occurrence of `from`. `None` when it is absent.
    pub fn apply(&self, stem: &str) -> Option<String> {
        let index = stem.rfind(self.from)?;
        let mut mutated = stem.to_string();
        mutated.replace_range(index..index + self.from.len(), self.to);
        Some(mutated)
    }
}

/// Infinitive minus its two-character class suffix; `other` keeps the infinitive.
pub fn base_stem(verb: &Verb) -> String {
    match verb.class {
        ConjugationClass::Ar | ConjugationClass::Er | ConjugationClass::Ir => {
            let keep = verb.infinitive.chars().count().saturating_sub(2);
            verb.infinitive.chars().take(keep).collect()
        }
        ConjugationClass::Other => verb.infinitive.clone(),
    }
}

/// Stem with the verb's stem change applied. Malformed or inapplicable rules leave
/// the stem untouched.
pub fn mutated_stem(verb: &Verb) -> String {
    let stem = base_stem(verb);
    let Some(rule) = verb.stem_change.as_deref() else {
        return stem;
    };

    match StemChange::parse(rule) {
        Some(change) => change.apply(&stem).unwrap_or_else(|| {
            log::debug!("Stem change '{}' does not apply to '{}'", rule, verb.infinitive);
            stem
        }),
        None => {
            log::debug!("Ignoring malformed stem change '{}' on '{}'", rule, verb.infinitive);
            stem
        }
    }
}
