use crate::state::{
    Insight, PrimaryView, ReportArtifact, ValidationContract, WorkflowStatus,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: WorkflowStatus,
    /// Present only while status is `Error`.
    pub last_error: Option<String>,
    pub primary: PrimaryView,
    pub contract: Option<ContractView>,
    /// `None` until the first successful insight load; `Some(vec![])` when the
    /// service returned an empty list.
    pub insights: Option<Vec<InsightRowView>>,
    pub report: Option<ReportArtifact>,
    pub dirty: bool,
}

/// Contract pane rows, precomputed so the shell renders the strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractView {
    pub ok: bool,
    /// Empty whenever `ok` is true, regardless of what the service sent.
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRowView {
    pub id: String,
    pub title: String,
    pub summary: String,
}

pub(crate) fn contract_view(contract: &ValidationContract) -> ContractView {
    let mut issues = Vec::new();
    if !contract.ok {
        for field in &contract.missing {
            issues.push(format!("Missing: {field}"));
        }
        for group in &contract.any_of_missing {
            issues.push(format!(
                "One of required: {}",
                group.alternatives.join(", ")
            ));
        }
    }
    ContractView {
        ok: contract.ok,
        issues,
    }
}

pub(crate) fn insight_row(insight: &Insight) -> InsightRowView {
    InsightRowView {
        id: insight.id.clone(),
        title: insight.title.clone(),
        summary: insight.summary.clone(),
    }
}
