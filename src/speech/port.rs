use serde::{Deserialize, Serialize};

/// One candidate transcription from the recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub utterance: String,
    pub confidence: f32,
}

impl Hypothesis {
    pub fn new(utterance: impl Into<String>, confidence: f32) -> Self {
        Self {
            utterance: utterance.into(),
            confidence,
        }
    }
}

/// Ordered recognition hypotheses, best first. The dialogue only ever
/// reads the first one's text; confidence is carried, not branched on.
pub type Recognition = Vec<Hypothesis>;

/// Everything the dialogue machine can receive on its event channel.
///
/// Each outstanding [`SpeechRequest`] yields exactly one of these back.
/// `Start` is not a port notification: it comes from whatever shell hosts
/// the dialogue and begins a new session while the machine is idle.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogueEvent {
    /// The port finished warming up its synthesis/recognition backends.
    Ready,
    /// The last `Speak` request finished playing out.
    SpeakDone,
    /// The last `Listen` request heard something.
    Recognized(Recognition),
    /// The last `Listen` request heard nothing before the port's timeout.
    NoInput,
    /// Shell trigger: begin a new dialogue session.
    Start,
}

/// Requests the machine emits toward the speech port.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechRequest {
    Prepare,
    Speak(String),
    Listen,
}

/// The external speech collaborator: synthesis and recognition.
///
/// All three calls are fire-and-forget. A conforming port must eventually
/// deliver exactly one event on the dialogue channel per request: `Ready`
/// for `prepare`, `SpeakDone` for `speak`, and either `Recognized` or
/// `NoInput` for `listen`. That holds even when a backend fails, since
/// the machine never times requests out itself.
pub trait SpeechPort: Send {
    fn prepare(&self);
    fn speak(&self, text: &str);
    fn listen(&self);

    fn execute(&self, request: &SpeechRequest) {
        match request {
            SpeechRequest::Prepare => self.prepare(),
            SpeechRequest::Speak(text) => self.speak(text),
            SpeechRequest::Listen => self.listen(),
        }
    }
}
