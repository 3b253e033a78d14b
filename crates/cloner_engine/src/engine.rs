use std::sync::{mpsc, Arc};
use std::thread;

use cloner_core::{CloneResult, RequestId};
use cloner_logging::{cloner_debug, cloner_error};

use crate::client::{resolve_clone, ClientSettings, CloneClient, ReqwestCloneClient};
use crate::{ClientError, EngineEvent};

enum EngineCommand {
    Clone { request_id: RequestId, url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ClientError),
    #[error("engine thread has stopped")]
    Stopped,
}

/// Runs clone requests on a background tokio runtime and reports each
/// outcome exactly once as an [`EngineEvent`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestCloneClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn CloneClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(handle_command(client, command, event_tx));
            }
            cloner_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn request_clone(
        &self,
        request_id: RequestId,
        url: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Clone {
                request_id,
                url: url.into(),
            })
            .map_err(|_| EngineError::Stopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: Arc<dyn CloneClient>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Clone { request_id, url } => {
            // A panicking request still has to end the loading state.
            let task = tokio::spawn(async move { resolve_clone(client.as_ref(), &url).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    cloner_error!("clone request {} aborted: {}", request_id, err);
                    CloneResult::service_unreachable()
                }
            };
            let _ = event_tx.send(EngineEvent::CloneCompleted { request_id, result });
        }
    }
}
