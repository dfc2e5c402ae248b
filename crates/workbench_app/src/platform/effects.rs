use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use app_logging::{app_info, app_warn};
use workbench_core::{
    AnyOfGroup, Effect, Insight, Msg, OperationError, ReportArtifact, ReportFormat,
    ValidationContract,
};
use workbench_engine::{
    ClientConfig, ClientError, ContractPayload, EngineEvent, EngineHandle, IngestAck,
    InsightPayload, ReportPayload, ReportRequest,
};

/// Executes state-machine effects against the engine and feeds completion
/// events back into the message channel as `Msg` values.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: ClientConfig, msg_tx: Sender<Msg>) -> Result<Self, ClientError> {
        let (engine, event_rx) = EngineHandle::new(config)?;
        spawn_event_loop(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::IngestSample => {
                    app_info!("sample ingest requested");
                    self.engine.ingest_sample();
                }
                Effect::IngestFile { filename, bytes } => {
                    app_info!(
                        "dataset upload requested file={} bytes={}",
                        filename,
                        bytes.len()
                    );
                    self.engine.ingest_file(filename, bytes);
                }
                Effect::Analyze => self.engine.analyze(),
                Effect::FetchInsights => self.engine.fetch_insights(),
                Effect::FetchReport { format } => self.engine.fetch_report(map_format(format)),
            }
        }
    }
}

fn spawn_event_loop(event_rx: Receiver<EngineEvent>, msg_tx: Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::IngestCompleted { result } => Msg::IngestFinished {
            result: result.map(log_ingest_ack).map_err(into_operation_error),
        },
        EngineEvent::AnalyzeCompleted { result } => Msg::AnalyzeFinished {
            result: result.map(map_contract).map_err(into_operation_error),
        },
        EngineEvent::InsightsCompleted { result } => Msg::InsightsFinished {
            result: result
                .map(|list| list.into_iter().map(map_insight).collect())
                .map_err(into_operation_error),
        },
        EngineEvent::ReportCompleted { result } => Msg::ReportFinished {
            result: result.map(map_report).map_err(into_operation_error),
        },
    }
}

fn log_ingest_ack(ack: IngestAck) {
    if let Some(info) = ack.ingested {
        app_info!(
            "dataset ingested rows={:?} cols={} source={:?}",
            info.rows,
            info.cols.len(),
            info.source
        );
    }
}

fn into_operation_error(err: ClientError) -> OperationError {
    // Malformed bodies get their own log line so service-contract breakage
    // is distinguishable from plain transport failures.
    if let ClientError::Malformed { detail } = &err {
        app_warn!("malformed service response: {}", detail);
    }
    OperationError {
        message: err.to_string(),
    }
}

fn map_format(format: ReportFormat) -> ReportRequest {
    match format {
        ReportFormat::Markdown => ReportRequest::Markdown,
        ReportFormat::Html => ReportRequest::Html,
    }
}

fn map_contract(payload: ContractPayload) -> ValidationContract {
    ValidationContract {
        ok: payload.ok,
        missing: payload.missing,
        any_of_missing: payload
            .any_of_missing
            .into_iter()
            .map(|group| AnyOfGroup {
                alternatives: group.into_values().collect(),
            })
            .collect(),
    }
}

fn map_insight(payload: InsightPayload) -> Insight {
    Insight {
        id: payload.id,
        title: payload.title,
        summary: payload.summary,
    }
}

fn map_report(payload: ReportPayload) -> ReportArtifact {
    match payload {
        ReportPayload::Markdown(body) => ReportArtifact::Markdown(body),
        ReportPayload::EmbedUrl(url) => ReportArtifact::Html { embed_url: url },
    }
}
