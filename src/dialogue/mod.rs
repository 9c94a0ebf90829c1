//! The slot-filling dialogue: context, stage table, script, and the
//! machine that ties them together.
//!
//! The machine is purely reactive. It never speaks or listens itself; it
//! answers each incoming event with the speech requests the hosting
//! shell must execute, and suspends until the next event.

pub mod context;
pub mod machine;
pub mod script;
pub mod stage;

pub use context::{Appointment, AppointmentFormat, DialogueContext, Slot};
pub use machine::{DialogueMachine, DialogueState, TurnError};
pub use stage::{Phase, StageId};
