use serde::Serialize;

use crate::speech::port::Recognition;

/// One named piece of information the dialogue collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Person,
    Location,
    Week,
    Day,
    Time,
    Duration,
    /// Shared by every yes/no question and scoped to the most recent one.
    Answer,
}

/// Raw recognition results for the running session, one per slot.
///
/// Only the machine's transition actions touch this. A slot goes from
/// empty to populated on a recognition and back to empty on a no-input;
/// it is never partially set.
#[derive(Debug, Clone, Default)]
pub struct DialogueContext {
    pub person: Option<Recognition>,
    pub location: Option<Recognition>,
    pub week: Option<Recognition>,
    pub day: Option<Recognition>,
    pub time: Option<Recognition>,
    pub duration: Option<Recognition>,
    pub answer: Option<Recognition>,
}

impl DialogueContext {
    pub fn slot(&self, slot: Slot) -> Option<&Recognition> {
        match slot {
            Slot::Person => self.person.as_ref(),
            Slot::Location => self.location.as_ref(),
            Slot::Week => self.week.as_ref(),
            Slot::Day => self.day.as_ref(),
            Slot::Time => self.time.as_ref(),
            Slot::Duration => self.duration.as_ref(),
            Slot::Answer => self.answer.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Recognition> {
        match slot {
            Slot::Person => &mut self.person,
            Slot::Location => &mut self.location,
            Slot::Week => &mut self.week,
            Slot::Day => &mut self.day,
            Slot::Time => &mut self.time,
            Slot::Duration => &mut self.duration,
            Slot::Answer => &mut self.answer,
        }
    }

    pub fn store(&mut self, slot: Slot, heard: Recognition) {
        *self.slot_mut(slot) = Some(heard);
    }

    pub fn clear(&mut self, slot: Slot) {
        *self.slot_mut(slot) = None;
    }

    /// Top-hypothesis text for a slot, if anything was heard.
    pub fn heard(&self, slot: Slot) -> Option<&str> {
        self.slot(slot)?.first().map(|h| h.utterance.as_str())
    }

    /// Empties every slot for a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The record acknowledged at the end of a successful session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub person: String,
    pub location: String,
    pub week: String,
    pub day: String,
    #[serde(flatten)]
    pub format: AppointmentFormat,
}

/// Whether the meeting blocks the whole day or a start time plus duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", content = "data")]
pub enum AppointmentFormat {
    WholeDay,
    Timeslot { time: String, duration: String },
}
