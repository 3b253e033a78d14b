use cloner_core::{CloneResult, Effect, Msg};
use cloner_engine::{DownloadSynthesizer, EngineEvent, EngineHandle, FileExporter};
use cloner_logging::{cloner_error, cloner_info};

/// What executing an effect hands back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Msg(Msg),
    Notice(String),
}

pub struct EffectRunner<E: FileExporter> {
    engine: EngineHandle,
    downloads: DownloadSynthesizer<E>,
}

impl<E: FileExporter> EffectRunner<E> {
    pub fn new(engine: EngineHandle, exporter: E) -> Self {
        Self {
            engine,
            downloads: DownloadSynthesizer::new(exporter),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Feedback> {
        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify { message } => feedback.push(Feedback::Notice(message)),
                Effect::RequestClone { request_id, url } => {
                    cloner_info!(
                        "RequestClone request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    if let Err(err) = self.engine.request_clone(request_id, url) {
                        // Without an engine nobody else will end the loading state.
                        cloner_error!("request {} not sent: {}", request_id, err);
                        feedback.push(Feedback::Msg(Msg::CloneResolved {
                            request_id,
                            result: CloneResult::service_unreachable(),
                        }));
                    }
                }
                Effect::ExportHtml { html } => match self.downloads.download_html(&html) {
                    Ok(receipt) => feedback.push(Feedback::Notice(format!(
                        "Saved {} to {}",
                        receipt.filename, receipt.location
                    ))),
                    Err(err) => {
                        cloner_error!("download failed: {}", err);
                        feedback.push(Feedback::Notice(format!("Download failed: {err}")));
                    }
                },
            }
        }
        feedback
    }

    /// Next engine outcome, if one is ready.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(into_msg)
    }

    #[cfg(test)]
    pub fn wait(&self, timeout: std::time::Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(into_msg)
    }
}

fn into_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CloneCompleted { request_id, result } => {
            Msg::CloneResolved { request_id, result }
        }
    }
}
