use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use crate::verbs::{
    Person,
    Tense,
    Verb,
};

/// How a card asks for the answer. Only changes the prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardMode {
    AudioPrompt,
    WrittenPrompt,
}

impl CardMode {
    pub const ALL: [CardMode; 2] = [CardMode::AudioPrompt, CardMode::WrittenPrompt];

    pub fn id(&self) -> &'static str {
        match self {
            CardMode::AudioPrompt => "audioPrompt",
            CardMode::WrittenPrompt => "writtenPrompt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CardMode::AudioPrompt => "Audio response",
            CardMode::WrittenPrompt => "Written response",
        }
    }
}

impl Default for CardMode {
    fn default() -> Self {
        Self::AudioPrompt
    }
}

/// Identity of a card, and of its review state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardKey {
    pub verb_id: Uuid,
    pub tense: Tense,
    pub person: Person,
    pub mode: CardMode,
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.verb_id, self.tense.id(), self.person.id(), self.mode.id())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub verb: Verb,
    pub tense: Tense,
    pub person: Person,
    pub mode: CardMode,
    pub conjugated_form: String,
}

impl Flashcard {
    pub fn key(&self) -> CardKey {
        CardKey { verb_id: self.verb.id, tense: self.tense, person: self.person, mode: self.mode }
    }

    pub fn headline(&self) -> &'static str {
        match self.mode {
            CardMode::AudioPrompt => "Say the form aloud",
            CardMode::WrittenPrompt => "Type or think the form",
        }
    }

    pub fn prompt(&self) -> String {
        let base = format!(
            "Conjugate {} for {} in the {}",
            self.verb.infinitive,
            self.person.display_name(),
            self.tense.display_name().to_lowercase()
        );
        match self.mode {
            CardMode::AudioPrompt => base + ", then speak it.",
            CardMode::WrittenPrompt => base + ".",
        }
    }
}
