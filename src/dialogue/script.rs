//! Everything the dialogue says, in one place.
//!
//! Question prompts and apologies are fixed strings; confirmations and
//! summaries embed the canonical values collected so far. Wording is part
//! of the observable behavior and several tests pin exact lines, so edits
//! here are behavior changes, punctuation included.

use crate::grammar::Grammar;

use super::context::{DialogueContext, Slot};
use super::stage::StageId;

pub const GREETING: &str = "Hi, let's create an appointment.";
pub const NO_INPUT: &str = "I can't hear you.";
pub const ANSWER_THE_QUESTION: &str = "Please, answer the question.";
pub const APPOINTMENT_CREATED: &str = "Your appointment has been created.";

/// Canonical display value for a collected slot, falling back to the raw
/// utterance if it somehow no longer resolves.
pub(crate) fn render(slot: Slot, context: &DialogueContext, grammar: &Grammar) -> String {
    let heard = context.heard(slot).unwrap_or_default();
    grammar.canonical(slot, heard).unwrap_or(heard).to_string()
}

/// The line spoken on entry to a stage.
pub fn prompt(stage: StageId, context: &DialogueContext, grammar: &Grammar) -> String {
    let value = |slot| render(slot, context, grammar);
    match stage {
        StageId::QuestionPerson => "Who are you meeting with?".to_string(),
        StageId::ConfirmPerson => format!(
            "Please confirm. Do you want to meet with {}?",
            value(Slot::Person)
        ),
        StageId::QuestionLocation => "Where is your meeting?".to_string(),
        StageId::ConfirmLocation => format!(
            "Please confirm. Do you want to meet at {}?",
            value(Slot::Location)
        ),
        StageId::QuestionWeek => "In which week is your meeting?".to_string(),
        StageId::ConfirmWeek => format!(
            "Please confirm. Do you want to meet in {}?",
            value(Slot::Week)
        ),
        StageId::QuestionDay => "On which day is your meeting?".to_string(),
        StageId::ConfirmDay => format!(
            "Please confirm. Do you want to meet on {}?",
            value(Slot::Day)
        ),
        StageId::QuestionWholeDay => "Will it take the whole Day?".to_string(),
        StageId::SummaryWholeDay => format!(
            "Do you want me to create an appointment with {}, in {}, on {}, at {} for the whole day?.",
            value(Slot::Person),
            value(Slot::Week),
            value(Slot::Day),
            value(Slot::Location)
        ),
        StageId::QuestionTime => "What time does your meeting start?".to_string(),
        StageId::ConfirmTime => format!(
            "Please confirm. Do you want me to create an appointment that starts at {}?",
            value(Slot::Time)
        ),
        StageId::QuestionDuration => {
            "Do you want to book a meeting for 15, 30, 45 minutes?".to_string()
        }
        StageId::ConfirmDuration => format!(
            "Please confirm. Do you want me to create an appointment for {}?",
            value(Slot::Duration)
        ),
        StageId::SummaryTimeslot => format!(
            "Do you want me to create an appointment with {}, in {}, on {}, at {}, at {}, for {}?.",
            value(Slot::Person),
            value(Slot::Week),
            value(Slot::Day),
            value(Slot::Location),
            value(Slot::Time),
            value(Slot::Duration)
        ),
    }
}

/// The apology spoken when the heard utterance failed vocabulary lookup.
pub fn rejection(stage: StageId) -> &'static str {
    match stage {
        StageId::QuestionPerson => "I can't make an appointment with that person.",
        StageId::QuestionLocation => "I can't make an appointment at that location.",
        StageId::QuestionWeek => {
            "I can't make an appointment in that week, only from week 1 to 20."
        }
        StageId::QuestionDay => {
            "I can't make an appointment on that day. Available days are Monday through Friday."
        }
        StageId::QuestionTime => {
            "I can't book a meeting at that time. I can book meetings with starting times at 8:00 in the morning to 6:00 in the evening."
        }
        StageId::QuestionDuration => "I can't book a meeting for that duration.",
        // every yes/no stage shares one nudge
        _ => ANSWER_THE_QUESTION,
    }
}
