use super::context::Slot;

/// Inner position within a stage. Every stage runs the same four-phase
/// turn: speak the prompt, listen, and speak one of the two recovery
/// announcements when the listen came back unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The stage's prompt is being spoken.
    Prompt,
    /// A listen is outstanding.
    Ask,
    /// The out-of-vocabulary apology is being spoken.
    UnknownInput,
    /// The no-input announcement is being spoken.
    NoInput,
}

/// Where a resolved stage sends the dialogue next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Goto(StageId),
    /// Only the two summaries finish the pipeline.
    Finish,
}

/// What a stage listens for and where control flows afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Collect an utterance into `slot` and advance to `next` once it
    /// resolves in the slot's vocabulary.
    Collect { slot: Slot, next: StageId },
    /// Ask a yes/no question over the shared answer slot and route on
    /// the answer's polarity.
    YesNo {
        on_positive: NextStep,
        on_negative: NextStep,
    },
}

/// Pipeline positions, in speaking order. Each question pairs with the
/// confirmation that follows it. The whole-day question forks the
/// pipeline and the two summaries merge it back into the finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageId {
    QuestionPerson,
    ConfirmPerson,
    QuestionLocation,
    ConfirmLocation,
    QuestionWeek,
    ConfirmWeek,
    QuestionDay,
    ConfirmDay,
    QuestionWholeDay,
    SummaryWholeDay,
    QuestionTime,
    ConfirmTime,
    QuestionDuration,
    ConfirmDuration,
    SummaryTimeslot,
}

impl StageId {
    /// Where every session, and every restart after a rejected summary,
    /// begins.
    pub const FIRST: StageId = StageId::QuestionPerson;

    /// The static transition table.
    pub fn kind(self) -> StageKind {
        use NextStep::{Finish, Goto};
        use StageId::*;
        match self {
            QuestionPerson => StageKind::Collect {
                slot: Slot::Person,
                next: ConfirmPerson,
            },
            ConfirmPerson => StageKind::YesNo {
                on_positive: Goto(QuestionLocation),
                on_negative: Goto(QuestionPerson),
            },
            QuestionLocation => StageKind::Collect {
                slot: Slot::Location,
                next: ConfirmLocation,
            },
            ConfirmLocation => StageKind::YesNo {
                on_positive: Goto(QuestionWeek),
                on_negative: Goto(QuestionLocation),
            },
            QuestionWeek => StageKind::Collect {
                slot: Slot::Week,
                next: ConfirmWeek,
            },
            ConfirmWeek => StageKind::YesNo {
                on_positive: Goto(QuestionDay),
                on_negative: Goto(QuestionWeek),
            },
            QuestionDay => StageKind::Collect {
                slot: Slot::Day,
                next: ConfirmDay,
            },
            ConfirmDay => StageKind::YesNo {
                on_positive: Goto(QuestionWholeDay),
                on_negative: Goto(QuestionDay),
            },
            QuestionWholeDay => StageKind::YesNo {
                on_positive: Goto(SummaryWholeDay),
                on_negative: Goto(QuestionTime),
            },
            SummaryWholeDay => StageKind::YesNo {
                on_positive: Finish,
                on_negative: Goto(QuestionPerson),
            },
            QuestionTime => StageKind::Collect {
                slot: Slot::Time,
                next: ConfirmTime,
            },
            ConfirmTime => StageKind::YesNo {
                on_positive: Goto(QuestionDuration),
                on_negative: Goto(QuestionTime),
            },
            QuestionDuration => StageKind::Collect {
                slot: Slot::Duration,
                next: ConfirmDuration,
            },
            ConfirmDuration => StageKind::YesNo {
                on_positive: Goto(SummaryTimeslot),
                on_negative: Goto(QuestionDuration),
            },
            SummaryTimeslot => StageKind::YesNo {
                on_positive: Finish,
                on_negative: Goto(QuestionPerson),
            },
        }
    }

    /// The slot this stage's listen writes into.
    pub fn slot(self) -> Slot {
        match self.kind() {
            StageKind::Collect { slot, .. } => slot,
            StageKind::YesNo { .. } => Slot::Answer,
        }
    }

    /// Rejecting a single-slot confirmation discards that slot so it is
    /// collected again. Rejecting a summary retains everything.
    pub fn discards_on_negative(self) -> Option<Slot> {
        match self {
            StageId::ConfirmPerson => Some(Slot::Person),
            StageId::ConfirmLocation => Some(Slot::Location),
            StageId::ConfirmWeek => Some(Slot::Week),
            StageId::ConfirmDay => Some(Slot::Day),
            StageId::ConfirmTime => Some(Slot::Time),
            StageId::ConfirmDuration => Some(Slot::Duration),
            _ => None,
        }
    }
}
