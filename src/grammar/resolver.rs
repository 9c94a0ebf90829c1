use std::collections::HashMap;
use std::fmt;

use crate::dialogue::context::Slot;

use super::entries;

/// Whether a matched yes/no token affirms or rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the general table. Keys are disjoint across categories,
/// so a token identifies both its family and its canonical value.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Person(&'static str),
    Day(&'static str),
    Location(&'static str),
    Time(String),
    Answer(Polarity),
}

/// The closed vocabularies the dialogue interprets against.
///
/// Three tables: a general one shared by the person, day, location, time
/// and answer families, plus separate week and duration tables. Lookups
/// case-fold the utterance and test exact membership. No fuzzy matching.
#[derive(Debug, Clone)]
pub struct Grammar {
    general: HashMap<String, Entry>,
    weeks: HashMap<String, String>,
    durations: HashMap<&'static str, &'static str>,
}

impl Grammar {
    pub fn new() -> Self {
        let mut general = HashMap::new();
        for &(token, name) in entries::PERSONS {
            general.insert(token.to_string(), Entry::Person(name));
        }
        for &(token, day) in entries::DAYS {
            general.insert(token.to_string(), Entry::Day(day));
        }
        for &(token, place) in entries::LOCATIONS {
            general.insert(token.to_string(), Entry::Location(place));
        }
        for hour in entries::TIME_HOURS {
            general.insert(hour.to_string(), Entry::Time(format!("{hour}:00")));
        }
        for &token in entries::POSITIVE_ANSWERS {
            general.insert(token.to_string(), Entry::Answer(Polarity::Positive));
        }
        for &token in entries::NEGATIVE_ANSWERS {
            general.insert(token.to_string(), Entry::Answer(Polarity::Negative));
        }

        let weeks = entries::WEEKS
            .map(|week| (week.to_string(), format!("Week {week}")))
            .collect();

        let durations = entries::DURATIONS.iter().copied().collect();

        Self {
            general,
            weeks,
            durations,
        }
    }

    fn entry(&self, utterance: &str) -> Option<&Entry> {
        self.general.get(&utterance.to_lowercase())
    }

    pub fn person(&self, utterance: &str) -> Option<&str> {
        match self.entry(utterance) {
            Some(Entry::Person(name)) => Some(*name),
            _ => None,
        }
    }

    pub fn day(&self, utterance: &str) -> Option<&str> {
        match self.entry(utterance) {
            Some(Entry::Day(day)) => Some(*day),
            _ => None,
        }
    }

    pub fn location(&self, utterance: &str) -> Option<&str> {
        match self.entry(utterance) {
            Some(Entry::Location(place)) => Some(*place),
            _ => None,
        }
    }

    pub fn time(&self, utterance: &str) -> Option<&str> {
        match self.entry(utterance) {
            Some(Entry::Time(time)) => Some(time.as_str()),
            _ => None,
        }
    }

    /// Classifies a yes/no token. None means the token answers nothing.
    pub fn answer(&self, utterance: &str) -> Option<Polarity> {
        match self.entry(utterance) {
            Some(Entry::Answer(polarity)) => Some(*polarity),
            _ => None,
        }
    }

    pub fn week(&self, utterance: &str) -> Option<&str> {
        self.weeks.get(&utterance.to_lowercase()).map(String::as_str)
    }

    pub fn duration(&self, utterance: &str) -> Option<&str> {
        self.durations
            .get(utterance.to_lowercase().as_str())
            .copied()
    }

    /// Canonical display value for an utterance heard in `slot`'s family.
    pub fn canonical(&self, slot: Slot, utterance: &str) -> Option<&str> {
        match slot {
            Slot::Person => self.person(utterance),
            Slot::Location => self.location(utterance),
            Slot::Week => self.week(utterance),
            Slot::Day => self.day(utterance),
            Slot::Time => self.time(utterance),
            Slot::Duration => self.duration(utterance),
            Slot::Answer => self.answer(utterance).map(Polarity::as_str),
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
