use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Failure of a remote call, as surfaced to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("service returned http status {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("invalid base address: {0}")]
    InvalidBaseAddress(String),
    /// The response arrived but its body does not match the expected shape.
    /// Displayed like a transport failure, logged distinctly.
    #[error("malformed response: {detail}")]
    Malformed { detail: String },
}

/// `POST /analyze` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AnalyzeResponse {
    pub contract: ContractPayload,
}

/// Wire shape of the validation contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractPayload {
    pub ok: bool,
    #[serde(default)]
    pub missing: Vec<String>,
    /// Each map's values are the alternative field names for one requirement.
    #[serde(default)]
    pub any_of_missing: Vec<BTreeMap<String, String>>,
}

/// `GET /insights` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InsightsResponse {
    pub insights: Vec<InsightPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsightPayload {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

/// Optional acknowledgment body of the ingest endpoints. The service owes no
/// body at all; when one is present it is parsed leniently for logging.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct IngestAck {
    #[serde(default)]
    pub ingested: Option<IngestInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngestInfo {
    #[serde(default)]
    pub rows: Option<u64>,
    #[serde(default)]
    pub cols: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Report result produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportPayload {
    /// Raw markdown text body fetched from the service.
    Markdown(String),
    /// Embed reference for the html variant; no body is fetched client-side.
    EmbedUrl(String),
}

/// Completion events emitted by the engine thread, one per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    IngestCompleted {
        result: Result<IngestAck, ClientError>,
    },
    AnalyzeCompleted {
        result: Result<ContractPayload, ClientError>,
    },
    InsightsCompleted {
        result: Result<Vec<InsightPayload>, ClientError>,
    },
    ReportCompleted {
        result: Result<ReportPayload, ClientError>,
    },
}
