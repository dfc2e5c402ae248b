use crate::view_model::{contract_view, insight_row, AppViewModel};

/// Shared workflow status. Exactly one value at any time, global to the
/// session; `Busy` means a remote operation is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Busy,
    Error,
}

/// Requested rendition of the analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Html,
}

/// Validation result for the currently ingested dataset.
///
/// `ok` is authoritative: when it is false at least one of `missing` or
/// `any_of_missing` is expected to be non-empty, and the view renders every
/// entry of both; when it is true nothing from either sequence is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationContract {
    pub ok: bool,
    pub missing: Vec<String>,
    pub any_of_missing: Vec<AnyOfGroup>,
}

/// Alternative field names satisfying one "any of" requirement, in display
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyOfGroup {
    pub alternatives: Vec<String>,
}

/// One finding produced by the analytics service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub summary: String,
}

/// Most recently loaded report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportArtifact {
    /// Raw markdown text body, rendered to markup by the shell.
    Markdown(String),
    /// Reference for direct embedding; the embedding surface fetches the
    /// document itself, no text is materialized here.
    Html { embed_url: String },
}

/// Which result slot the most recent successful action produced, and
/// therefore which pane is the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryView {
    #[default]
    None,
    Contract,
    Insights,
    Report,
}

/// Remote-operation failure already reduced to a display message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    pub message: String,
}

/// The workflow snapshot: single writer (the update function), many readers
/// through [`AppState::view`]. Result slots persist across unrelated actions;
/// only the action that produces a slot overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    status: WorkflowStatus,
    contract: Option<ValidationContract>,
    insights: Option<Vec<Insight>>,
    report: Option<ReportArtifact>,
    last_error: Option<String>,
    primary: PrimaryView,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    /// Clears and returns the render-coalescing flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Projects the snapshot for the view layer. The error message is only
    /// exposed while the machine is in the `Error` state.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: self.status,
            last_error: match self.status {
                WorkflowStatus::Error => self.last_error.clone(),
                _ => None,
            },
            primary: self.primary,
            contract: self.contract.as_ref().map(contract_view),
            insights: self
                .insights
                .as_ref()
                .map(|list| list.iter().map(insight_row).collect()),
            report: self.report.clone(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn begin_operation(&mut self) {
        self.status = WorkflowStatus::Busy;
        self.dirty = true;
    }

    // Ingestion state lives server-side; completion only releases the status.
    pub(crate) fn finish_ingest(&mut self) {
        self.status = WorkflowStatus::Idle;
        self.dirty = true;
    }

    pub(crate) fn finish_analyze(&mut self, contract: ValidationContract) {
        self.status = WorkflowStatus::Idle;
        self.contract = Some(contract);
        self.primary = PrimaryView::Contract;
        self.dirty = true;
    }

    pub(crate) fn finish_insights(&mut self, insights: Vec<Insight>) {
        self.status = WorkflowStatus::Idle;
        self.insights = Some(insights);
        self.primary = PrimaryView::Insights;
        self.dirty = true;
    }

    pub(crate) fn finish_report(&mut self, report: ReportArtifact) {
        self.status = WorkflowStatus::Idle;
        self.report = Some(report);
        self.primary = PrimaryView::Report;
        self.dirty = true;
    }

    /// Failed operations leave every result slot and the primary-view
    /// selection untouched.
    pub(crate) fn fail_operation(&mut self, message: String) {
        self.status = WorkflowStatus::Error;
        self.last_error = Some(message);
        self.dirty = true;
    }
}
