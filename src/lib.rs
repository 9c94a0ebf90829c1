pub mod dialogue;
pub mod grammar;
pub mod settings;
pub mod speech;

// Re-export the pieces a shell needs to wire up a dialogue
pub use dialogue::machine::DialogueMachine;
pub use speech::port::{DialogueEvent, SpeechPort, SpeechRequest};
