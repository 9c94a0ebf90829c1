use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, warn};

use crate::settings::Settings;

use super::port::{DialogueEvent, Hypothesis, SpeechPort};

/// Console stand-in for a real synthesis/recognition stack.
///
/// Prompts print to stdout and can optionally be piped through the system
/// `say` command. Utterances are stdin lines, delivered as a single
/// hypothesis with full confidence; an empty line or `no_input_timeout_ms`
/// of silence reports no input. Every request completes, even when `say`
/// cannot be spawned, since the machine never times requests out itself.
pub struct ConsolePort {
    events: mpsc::Sender<DialogueEvent>,
    lines: Arc<Mutex<mpsc::Receiver<String>>>,
    settings: Settings,
}

impl ConsolePort {
    /// Spawns the stdin reader. Lines typed while no listen is armed stay
    /// buffered for the next one.
    pub fn new(settings: Settings, events: mpsc::Sender<DialogueEvent>) -> Self {
        debug!(
            "Console speech port up (locale {}, voice {})",
            settings.locale, settings.voice
        );
        let (line_tx, line_rx) = mpsc::channel(8);
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if line_tx.send(line).await.is_err() {
                    break;
                }
            }
        });
        Self {
            events,
            lines: Arc::new(Mutex::new(line_rx)),
            settings,
        }
    }
}

impl SpeechPort for ConsolePort {
    fn prepare(&self) {
        let _ = self.events.try_send(DialogueEvent::Ready);
    }

    fn speak(&self, text: &str) {
        println!("[voice] {text}");
        if self.settings.system_tts {
            let events = self.events.clone();
            let text = text.to_string();
            tokio::spawn(async move {
                match tokio::process::Command::new("say")
                    .arg(&text)
                    .kill_on_drop(true)
                    .spawn()
                {
                    Ok(mut child) => {
                        let _ = child.wait().await;
                    }
                    Err(error) => warn!("Failed to spawn 'say': {}", error),
                }
                let _ = events.send(DialogueEvent::SpeakDone).await;
            });
        } else {
            let _ = self.events.try_send(DialogueEvent::SpeakDone);
        }
    }

    fn listen(&self) {
        print!("you> ");
        let _ = std::io::stdout().flush();
        let events = self.events.clone();
        let lines = self.lines.clone();
        let patience = Duration::from_millis(self.settings.no_input_timeout_ms);
        let settle = Duration::from_millis(self.settings.complete_timeout_ms);
        tokio::spawn(async move {
            let mut receiver = lines.lock().await;
            let event = match timeout(patience, receiver.recv()).await {
                Ok(Some(line)) => {
                    let utterance = line.trim().to_string();
                    if utterance.is_empty() {
                        DialogueEvent::NoInput
                    } else {
                        if !settle.is_zero() {
                            sleep(settle).await;
                        }
                        DialogueEvent::Recognized(vec![Hypothesis::new(utterance, 1.0)])
                    }
                }
                // reader ended or nothing arrived in time: silence either way
                _ => DialogueEvent::NoInput,
            };
            drop(receiver);
            let _ = events.send(event).await;
        });
    }
}
