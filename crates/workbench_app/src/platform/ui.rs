use app_logging::app_warn;
use egui::{Button, Label, RichText, ScrollArea, Ui};
use rfd::FileDialog;
use workbench_core::{AppViewModel, Msg, PrimaryView, ReportArtifact, ReportFormat, WorkflowStatus};

/// Action buttons; returns the message for whichever control fired.
///
/// Buttons are disabled while an operation is outstanding as a visual cue;
/// the state machine remains the actual gate.
pub fn action_row(ui: &mut Ui, view: &AppViewModel) -> Option<Msg> {
    let enabled = view.status != WorkflowStatus::Busy;
    let mut fired = None;
    ui.horizontal_wrapped(|ui| {
        if ui
            .add_enabled(enabled, Button::new("Load sample"))
            .clicked()
        {
            fired = Some(Msg::IngestSampleClicked);
        }
        if ui
            .add_enabled(enabled, Button::new("Upload CSV/JSON"))
            .clicked()
        {
            fired = pick_dataset_file();
        }
        if ui
            .add_enabled(enabled, Button::new("Analyze"))
            .clicked()
        {
            fired = Some(Msg::AnalyzeClicked);
        }
        if ui
            .add_enabled(enabled, Button::new("Insights"))
            .clicked()
        {
            fired = Some(Msg::InsightsClicked);
        }
        if ui
            .add_enabled(enabled, Button::new("Report (MD)"))
            .clicked()
        {
            fired = Some(Msg::ReportClicked {
                format: ReportFormat::Markdown,
            });
        }
        if ui
            .add_enabled(enabled, Button::new("Report (HTML)"))
            .clicked()
        {
            fired = Some(Msg::ReportClicked {
                format: ReportFormat::Html,
            });
        }
    });
    fired
}

// Format checking is the service's job; the picked bytes are shipped as-is.
fn pick_dataset_file() -> Option<Msg> {
    let path = FileDialog::new()
        .add_filter("Datasets", &["csv", "json"])
        .add_filter("All files", &["*"])
        .pick_file()?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    match std::fs::read(&path) {
        Ok(bytes) => Some(Msg::IngestFileChosen { filename, bytes }),
        Err(err) => {
            app_warn!("could not read {}: {}", path.display(), err);
            None
        }
    }
}

pub fn status_banner(ui: &mut Ui, view: &AppViewModel) {
    match view.status {
        WorkflowStatus::Idle => {
            ui.label("Ready");
        }
        WorkflowStatus::Busy => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Working...");
            });
        }
        WorkflowStatus::Error => {
            let message = view.last_error.as_deref().unwrap_or("unknown error");
            ui.colored_label(ui.visuals().error_fg_color, format!("Error: {message}"));
        }
    }
}

/// Main content area: whichever pane the last successful action produced.
pub fn primary_pane(ui: &mut Ui, view: &AppViewModel, rendered_report: Option<&str>) {
    match view.primary {
        PrimaryView::None => {
            ui.weak("Load a dataset to get started.");
        }
        PrimaryView::Contract => contract_pane(ui, view),
        PrimaryView::Insights => insights_pane(ui, view),
        PrimaryView::Report => report_pane(ui, view, rendered_report),
    }
}

fn contract_pane(ui: &mut Ui, view: &AppViewModel) {
    let Some(contract) = &view.contract else {
        return;
    };
    ui.heading("Contract");
    if contract.ok {
        ui.label("OK");
        return;
    }
    ui.label("Issues");
    for issue in &contract.issues {
        ui.label(format!("- {issue}"));
    }
}

fn insights_pane(ui: &mut Ui, view: &AppViewModel) {
    let Some(rows) = &view.insights else {
        return;
    };
    ui.heading("Insights");
    if rows.is_empty() {
        ui.weak("No insights for the current dataset.");
        return;
    }
    ScrollArea::vertical().show(ui, |ui| {
        for row in rows {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&row.title).strong());
                if !row.summary.is_empty() {
                    ui.label(format!("- {}", row.summary));
                }
            });
        }
    });
}

fn report_pane(ui: &mut Ui, view: &AppViewModel, rendered_report: Option<&str>) {
    match &view.report {
        Some(ReportArtifact::Markdown(_)) => {
            ui.heading("Report (Markdown)");
            let markup = rendered_report.unwrap_or_default();
            ScrollArea::vertical().show(ui, |ui| {
                ui.add(Label::new(RichText::new(markup).monospace()).wrap());
            });
        }
        Some(ReportArtifact::Html { embed_url }) => {
            ui.heading("Report (HTML)");
            // The document is fetched by the surface that embeds it, never
            // materialized here.
            ui.hyperlink_to("Open the full report", embed_url);
        }
        None => {}
    }
}
