//! Workbench engine: remote analytics service client and effect execution.
mod client;
mod engine;
mod render;
mod types;

pub use client::{AnalyticsClient, ClientConfig};
pub use engine::{EngineHandle, ReportRequest};
pub use render::render_markdown;
pub use types::{
    ClientError, ContractPayload, EngineEvent, IngestAck, IngestInfo, InsightPayload,
    ReportPayload,
};
