use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::grammar::{Grammar, Polarity};
use crate::speech::port::{DialogueEvent, SpeechRequest};

use super::context::{Appointment, AppointmentFormat, DialogueContext, Slot};
use super::script;
use super::stage::{NextStep, Phase, StageId, StageKind};

/// Control state of the dialogue machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    /// Port warm-up requested; waiting for it to report ready.
    Prepare,
    /// Ready and waiting for a start trigger.
    Idle,
    /// Speaking the session greeting.
    Greeting,
    /// Working through the slot pipeline.
    Stage { stage: StageId, phase: Phase },
    /// Speaking the final acknowledgement.
    Closing,
}

/// Why the latest listen could not advance its stage. Both kinds recover
/// locally by re-prompting; neither escapes the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("nothing was heard")]
    NoInput,
    #[error("{heard:?} is not in the {slot:?} vocabulary")]
    OutOfVocabulary { slot: Slot, heard: String },
}

/// The slot-filling dialogue machine.
///
/// Sole consumer of the event channel. [`DialogueMachine::step`] is the
/// whole transition function: state plus one event in, at most one speech
/// request out; the hosting shell executes requests against a speech
/// port. At most one request is ever outstanding, so the machine suspends
/// deterministically between events.
pub struct DialogueMachine {
    pub receiver: mpsc::Receiver<DialogueEvent>,
    pub state: DialogueState,
    pub context: DialogueContext,
    pub grammar: Grammar,
    /// Filled when a summary is confirmed; readable until the next
    /// session starts.
    pub appointment: Option<Appointment>,
    session: Option<Uuid>,
}

impl DialogueMachine {
    pub fn new(receiver: mpsc::Receiver<DialogueEvent>) -> Self {
        Self {
            receiver,
            state: DialogueState::Prepare,
            context: DialogueContext::default(),
            grammar: Grammar::new(),
            appointment: None,
            session: None,
        }
    }

    /// The warm-up request to execute once before pumping events.
    pub fn boot(&self) -> Vec<SpeechRequest> {
        vec![SpeechRequest::Prepare]
    }

    /// Current control-state label, for display only.
    pub fn label(&self) -> String {
        match self.state {
            DialogueState::Stage { stage, phase } => format!("{stage:?}.{phase:?}"),
            state => format!("{state:?}"),
        }
    }

    /// Advances the machine by one event and returns the speech requests
    /// the shell must execute. Unexpected events are logged and dropped;
    /// the machine never moves on them.
    pub fn step(&mut self, event: DialogueEvent) -> Vec<SpeechRequest> {
        let before = self.label();
        let requests = self.transition(event);
        let after = self.label();
        if before != after {
            debug!("{} -> {}", before, after);
        }
        requests
    }

    fn transition(&mut self, event: DialogueEvent) -> Vec<SpeechRequest> {
        match (self.state, event) {
            (DialogueState::Prepare, DialogueEvent::Ready) => {
                info!("Speech port ready");
                self.state = DialogueState::Idle;
                Vec::new()
            }
            (DialogueState::Idle, DialogueEvent::Start) => self.begin_session(),
            (DialogueState::Greeting, DialogueEvent::SpeakDone) => self.enter_stage(StageId::FIRST),
            (DialogueState::Stage { stage, phase }, event) => {
                self.stage_transition(stage, phase, event)
            }
            (DialogueState::Closing, DialogueEvent::SpeakDone) => {
                if let Some(session) = self.session {
                    info!("Session {} complete", session);
                }
                self.state = DialogueState::Idle;
                Vec::new()
            }
            (state, event) => {
                warn!("Ignoring {:?} in state {:?}", event, state);
                Vec::new()
            }
        }
    }

    fn stage_transition(
        &mut self,
        stage: StageId,
        phase: Phase,
        event: DialogueEvent,
    ) -> Vec<SpeechRequest> {
        match (phase, event) {
            // prompt finished: open the microphone
            (Phase::Prompt, DialogueEvent::SpeakDone) => {
                self.state = DialogueState::Stage {
                    stage,
                    phase: Phase::Ask,
                };
                vec![SpeechRequest::Listen]
            }
            // recovery announcement finished: ask again
            (Phase::UnknownInput | Phase::NoInput, DialogueEvent::SpeakDone) => {
                self.state = DialogueState::Stage {
                    stage,
                    phase: Phase::Prompt,
                };
                vec![SpeechRequest::Speak(self.prompt_for(stage))]
            }
            (Phase::Ask, DialogueEvent::Recognized(heard)) if heard.is_empty() => {
                // a result with no hypotheses carries no utterance
                self.context.clear(stage.slot());
                self.recover(stage, TurnError::NoInput)
            }
            (Phase::Ask, DialogueEvent::Recognized(heard)) => {
                self.context.store(stage.slot(), heard);
                self.resolve(stage)
            }
            (Phase::Ask, DialogueEvent::NoInput) => {
                self.context.clear(stage.slot());
                self.recover(stage, TurnError::NoInput)
            }
            (phase, event) => {
                warn!("Ignoring {:?} at {:?}.{:?}", event, stage, phase);
                Vec::new()
            }
        }
    }

    /// Guard evaluation after a listen stored its result. A resolved
    /// value advances, an unresolved one apologizes; silence was already
    /// routed before we get here.
    fn resolve(&mut self, stage: StageId) -> Vec<SpeechRequest> {
        match stage.kind() {
            StageKind::Collect { slot, next } => match self.interpret_slot(slot) {
                Ok(()) => self.enter_stage(next),
                Err(error) => self.recover(stage, error),
            },
            StageKind::YesNo {
                on_positive,
                on_negative,
            } => match self.interpret_answer() {
                Ok(Polarity::Positive) => self.proceed(stage, on_positive),
                Ok(Polarity::Negative) => {
                    if let Some(slot) = stage.discards_on_negative() {
                        self.context.clear(slot);
                    }
                    self.proceed(stage, on_negative)
                }
                Err(error) => self.recover(stage, error),
            },
        }
    }

    fn interpret_slot(&self, slot: Slot) -> Result<(), TurnError> {
        let heard = self.context.heard(slot).ok_or(TurnError::NoInput)?;
        if self.grammar.canonical(slot, heard).is_some() {
            Ok(())
        } else {
            Err(TurnError::OutOfVocabulary {
                slot,
                heard: heard.to_string(),
            })
        }
    }

    fn interpret_answer(&self) -> Result<Polarity, TurnError> {
        let heard = self.context.heard(Slot::Answer).ok_or(TurnError::NoInput)?;
        self.grammar
            .answer(heard)
            .ok_or_else(|| TurnError::OutOfVocabulary {
                slot: Slot::Answer,
                heard: heard.to_string(),
            })
    }

    fn proceed(&mut self, stage: StageId, next: NextStep) -> Vec<SpeechRequest> {
        match next {
            NextStep::Goto(target) => self.enter_stage(target),
            NextStep::Finish => self.finish(stage),
        }
    }

    fn recover(&mut self, stage: StageId, error: TurnError) -> Vec<SpeechRequest> {
        debug!("Recovering at {:?}: {}", stage, error);
        let (phase, line) = match error {
            TurnError::NoInput => (Phase::NoInput, script::NO_INPUT.to_string()),
            TurnError::OutOfVocabulary { .. } => {
                (Phase::UnknownInput, script::rejection(stage).to_string())
            }
        };
        self.state = DialogueState::Stage { stage, phase };
        vec![SpeechRequest::Speak(line)]
    }

    fn enter_stage(&mut self, stage: StageId) -> Vec<SpeechRequest> {
        // the answer slot answers one question at a time; a value left by
        // an earlier confirmation must never satisfy this one
        if matches!(stage.kind(), StageKind::YesNo { .. }) {
            self.context.clear(Slot::Answer);
        }
        self.state = DialogueState::Stage {
            stage,
            phase: Phase::Prompt,
        };
        vec![SpeechRequest::Speak(self.prompt_for(stage))]
    }

    fn prompt_for(&self, stage: StageId) -> String {
        script::prompt(stage, &self.context, &self.grammar)
    }

    fn begin_session(&mut self) -> Vec<SpeechRequest> {
        self.context.reset();
        self.appointment = None;
        let session = Uuid::new_v4();
        self.session = Some(session);
        info!("Session {} started", session);
        self.state = DialogueState::Greeting;
        vec![SpeechRequest::Speak(script::GREETING.to_string())]
    }

    fn finish(&mut self, summary: StageId) -> Vec<SpeechRequest> {
        // which summary confirmed decides the format: a restart can leave
        // a stale time in the context after switching to whole-day
        let format = if summary == StageId::SummaryWholeDay {
            AppointmentFormat::WholeDay
        } else {
            AppointmentFormat::Timeslot {
                time: self.rendered(Slot::Time),
                duration: self.rendered(Slot::Duration),
            }
        };
        let appointment = Appointment {
            person: self.rendered(Slot::Person),
            location: self.rendered(Slot::Location),
            week: self.rendered(Slot::Week),
            day: self.rendered(Slot::Day),
            format,
        };
        info!(
            "Appointment created: {}",
            serde_json::to_string(&appointment).unwrap_or_default()
        );
        self.appointment = Some(appointment);
        self.state = DialogueState::Closing;
        vec![SpeechRequest::Speak(script::APPOINTMENT_CREATED.to_string())]
    }

    fn rendered(&self, slot: Slot) -> String {
        script::render(slot, &self.context, &self.grammar)
    }
}
