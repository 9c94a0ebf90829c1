use tokio::sync::mpsc;
use tracing::info;

use rendezvous::dialogue::machine::{DialogueMachine, DialogueState};
use rendezvous::settings::Settings;
use rendezvous::speech::console::ConsolePort;
use rendezvous::speech::port::{DialogueEvent, SpeechPort};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let settings = Settings::load_or_default("settings.json");
    let (events, receiver) = mpsc::channel(32);
    let port = ConsolePort::new(settings, events.clone());
    let mut machine = DialogueMachine::new(receiver);

    info!("Rendezvous console shell up. Ctrl+C to quit.");
    for request in machine.boot() {
        port.execute(&request);
    }

    loop {
        let Some(event) = machine.receiver.recv().await else {
            break;
        };
        let was_idle = machine.state == DialogueState::Idle;
        for request in machine.step(event) {
            port.execute(&request);
        }
        // kiosk behavior: whenever the machine lands in idle, because the
        // port came up or a session just closed, the next session begins
        if !was_idle && machine.state == DialogueState::Idle {
            println!();
            let _ = events.send(DialogueEvent::Start).await;
        }
    }
    Ok(())
}
