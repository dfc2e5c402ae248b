use std::sync::{mpsc, Arc};
use std::thread;

use app_logging::{app_info, app_warn};

use crate::client::{AnalyticsClient, ClientConfig};
use crate::types::{ClientError, EngineEvent, ReportPayload};

/// Report rendition requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRequest {
    Markdown,
    Html,
}

enum EngineCommand {
    IngestSample,
    IngestFile { filename: String, bytes: Vec<u8> },
    Analyze,
    FetchInsights,
    FetchReport { format: ReportRequest },
}

/// Command side of the engine thread. The shell keeps the handle and polls
/// the returned receiver for completion events; the controller guarantees at
/// most one command is outstanding.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the engine thread with its own tokio runtime and returns the
    /// command handle plus the event stream.
    pub fn new(config: ClientConfig) -> Result<(Self, mpsc::Receiver<EngineEvent>), ClientError> {
        let client = AnalyticsClient::new(config)?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let client = Arc::new(client);

            // Startup readiness probe, logged only.
            {
                let client = client.clone();
                runtime.spawn(async move {
                    match client.health().await {
                        Ok(()) => app_info!("analytics service reachable"),
                        Err(err) => app_warn!("analytics service health probe failed: {}", err),
                    }
                });
            }

            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn ingest_sample(&self) {
        let _ = self.cmd_tx.send(EngineCommand::IngestSample);
    }

    pub fn ingest_file(&self, filename: impl Into<String>, bytes: Vec<u8>) {
        let _ = self.cmd_tx.send(EngineCommand::IngestFile {
            filename: filename.into(),
            bytes,
        });
    }

    pub fn analyze(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze);
    }

    pub fn fetch_insights(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchInsights);
    }

    pub fn fetch_report(&self, format: ReportRequest) {
        let _ = self.cmd_tx.send(EngineCommand::FetchReport { format });
    }
}

async fn handle_command(
    client: &AnalyticsClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::IngestSample => EngineEvent::IngestCompleted {
            result: client.ingest_sample().await,
        },
        EngineCommand::IngestFile { filename, bytes } => EngineEvent::IngestCompleted {
            result: client.ingest_file(&filename, bytes).await,
        },
        EngineCommand::Analyze => EngineEvent::AnalyzeCompleted {
            result: client.analyze().await,
        },
        EngineCommand::FetchInsights => EngineEvent::InsightsCompleted {
            result: client.insights().await,
        },
        EngineCommand::FetchReport {
            format: ReportRequest::Markdown,
        } => EngineEvent::ReportCompleted {
            result: client.report_markdown().await.map(ReportPayload::Markdown),
        },
        // The html variant fetches nothing; the embedding surface loads the
        // document itself. It still round-trips through the engine so the
        // busy gate applies uniformly to all five actions.
        EngineCommand::FetchReport {
            format: ReportRequest::Html,
        } => EngineEvent::ReportCompleted {
            result: Ok(ReportPayload::EmbedUrl(
                client.report_embed_url().to_string(),
            )),
        },
    };
    let _ = event_tx.send(event);
}
