//! Workbench core: pure workflow state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AnyOfGroup, AppState, Insight, OperationError, PrimaryView, ReportArtifact, ReportFormat,
    ValidationContract, WorkflowStatus,
};
pub use update::update;
pub use view_model::{AppViewModel, ContractView, InsightRowView};
