use tokio::sync::mpsc;

use rendezvous::dialogue::machine::{DialogueMachine, DialogueState};
use rendezvous::speech::port::{DialogueEvent, Hypothesis, SpeechRequest};

// Helper to build a machine with a dangling event channel
fn machine() -> DialogueMachine {
    let (_events, receiver) = mpsc::channel(8);
    DialogueMachine::new(receiver)
}

fn hear(text: &str) -> DialogueEvent {
    DialogueEvent::Recognized(vec![Hypothesis::new(text, 0.92)])
}

fn spoken(requests: &[SpeechRequest]) -> &str {
    match requests {
        [SpeechRequest::Speak(text)] => text,
        other => panic!("Expected exactly one speak request, got {other:?}"),
    }
}

fn started() -> DialogueMachine {
    let mut machine = machine();
    machine.step(DialogueEvent::Ready);
    machine.step(DialogueEvent::Start);
    let question = machine.step(DialogueEvent::SpeakDone);
    assert_eq!(spoken(&question), "Who are you meeting with?");
    machine
}

fn reply(machine: &mut DialogueMachine, text: &str) -> Vec<SpeechRequest> {
    let listen = machine.step(DialogueEvent::SpeakDone);
    assert_eq!(listen, vec![SpeechRequest::Listen]);
    machine.step(hear(text))
}

fn walk(machine: &mut DialogueMachine, turns: &[&str]) -> Vec<SpeechRequest> {
    let mut last = Vec::new();
    for text in turns {
        last = reply(machine, text);
    }
    last
}

#[tokio::test]
async fn test_no_input_then_success_matches_direct_success() {
    let mut direct = started();
    let direct_fx = reply(&mut direct, "vlad");

    let mut retried = started();
    // 1. The first listen hears nothing
    let listen = retried.step(DialogueEvent::SpeakDone);
    assert_eq!(listen, vec![SpeechRequest::Listen]);
    let fx = retried.step(DialogueEvent::NoInput);
    assert_eq!(spoken(&fx), "I can't hear you.");
    assert!(retried.context.person.is_none(), "Silence leaves the slot empty");

    // 2. The announcement finishes and the question is asked again
    let fx = retried.step(DialogueEvent::SpeakDone);
    assert_eq!(spoken(&fx), "Who are you meeting with?");

    // 3. The second attempt lands
    let retried_fx = reply(&mut retried, "vlad");
    assert_eq!(retried_fx, direct_fx, "Recovery must not change the outcome");
    assert_eq!(retried.state, direct.state);
}

#[tokio::test]
async fn test_out_of_range_week_apology() {
    let mut m = started();
    walk(&mut m, &["vlad", "yes", "lab", "yes"]);

    let fx = reply(&mut m, "21");
    assert_eq!(
        spoken(&fx),
        "I can't make an appointment in that week, only from week 1 to 20."
    );

    // the stage re-asks and accepts an in-range week
    let fx = m.step(DialogueEvent::SpeakDone);
    assert_eq!(spoken(&fx), "In which week is your meeting?");
    let fx = reply(&mut m, "7");
    assert_eq!(spoken(&fx), "Please confirm. Do you want to meet in Week 7?");
}

#[tokio::test]
async fn test_unknown_person_apology() {
    let mut m = started();
    let fx = reply(&mut m, "rasputin");
    assert_eq!(spoken(&fx), "I can't make an appointment with that person.");
    assert!(
        m.context.person.is_some(),
        "The unusable utterance stays stored until the next listen"
    );
    let fx = m.step(DialogueEvent::SpeakDone);
    assert_eq!(spoken(&fx), "Who are you meeting with?");
}

#[tokio::test]
async fn test_non_answer_at_confirmation_nudged() {
    let mut m = started();
    let fx = reply(&mut m, "vlad");
    assert_eq!(
        spoken(&fx),
        "Please confirm. Do you want to meet with Vladislav Maraev?"
    );

    // 1. An utterance with no polarity gets the shared nudge
    let fx = reply(&mut m, "blue");
    assert_eq!(spoken(&fx), "Please, answer the question.");

    // 2. The confirmation is re-rendered with the same canonical value
    let fx = m.step(DialogueEvent::SpeakDone);
    assert_eq!(
        spoken(&fx),
        "Please confirm. Do you want to meet with Vladislav Maraev?"
    );
    let fx = reply(&mut m, "uhu");
    assert_eq!(spoken(&fx), "Where is your meeting?");
}

#[tokio::test]
async fn test_duration_stage_survives_silence() {
    let mut m = started();
    walk(
        &mut m,
        &["vlad", "yes", "lab", "yes", "3", "yes", "monday", "yes", "no", "9", "yes"],
    );

    // 1. At the duration question, the listen times out
    let listen = m.step(DialogueEvent::SpeakDone);
    assert_eq!(listen, vec![SpeechRequest::Listen]);
    let fx = m.step(DialogueEvent::NoInput);
    assert_eq!(spoken(&fx), "I can't hear you.");

    // 2. The stage re-asks instead of wedging
    let fx = m.step(DialogueEvent::SpeakDone);
    assert_eq!(spoken(&fx), "Do you want to book a meeting for 15, 30, 45 minutes?");

    // 3. A valid duration then flows into its confirmation
    let fx = reply(&mut m, "45");
    assert_eq!(
        spoken(&fx),
        "Please confirm. Do you want me to create an appointment for 45 minutes?"
    );
}

#[tokio::test]
async fn test_empty_recognition_counts_as_silence() {
    let mut m = started();
    let listen = m.step(DialogueEvent::SpeakDone);
    assert_eq!(listen, vec![SpeechRequest::Listen]);

    let fx = m.step(DialogueEvent::Recognized(Vec::new()));
    assert_eq!(spoken(&fx), "I can't hear you.");
    assert!(m.context.person.is_none());
}

#[tokio::test]
async fn test_stray_events_dropped() {
    // 1. Recognition before anything was asked
    let mut m = machine();
    assert!(m.step(hear("vlad")).is_empty());
    assert_eq!(m.state, DialogueState::Prepare);

    // 2. Start before the port is ready
    assert!(m.step(DialogueEvent::Start).is_empty());
    assert_eq!(m.state, DialogueState::Prepare);

    // 3. Start in the middle of a stage
    let mut m = started();
    assert!(m.step(DialogueEvent::Start).is_empty());
    let fx = m.step(DialogueEvent::SpeakDone);
    assert_eq!(
        fx,
        vec![SpeechRequest::Listen],
        "The interrupted stage should resume unharmed"
    );

    // 4. Recognition while idle
    let mut m = machine();
    m.step(DialogueEvent::Ready);
    assert!(m.step(hear("vlad")).is_empty());
    assert_eq!(m.state, DialogueState::Idle);
}
