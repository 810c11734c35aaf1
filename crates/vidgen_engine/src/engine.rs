use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ClientSettings, GenerationClient, HttpGenerationClient};
use crate::{EngineEvent, GenerationRequest};

enum EngineCommand {
    Submit { request: GenerationRequest },
}

/// Runs generation requests on a background tokio runtime and reports
/// completions over an event channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(HttpGenerationClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request: GenerationRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn GenerationClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { request } => {
            let result = client.generate(request).await;
            let _ = event_tx.send(EngineEvent::GenerationFinished { result });
        }
    }
}
