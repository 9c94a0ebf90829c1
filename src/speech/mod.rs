pub mod console;
pub mod port;

pub use console::ConsolePort;
pub use port::{DialogueEvent, Hypothesis, Recognition, SpeechPort, SpeechRequest};
