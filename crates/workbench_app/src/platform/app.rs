use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use app_logging::{app_info, LogDestination};
use eframe::egui;
use workbench_core::{update, AppState, AppViewModel, Msg, ReportArtifact};
use workbench_engine::{render_markdown, ClientConfig};

use super::effects::EffectRunner;
use super::ui;

/// Single recognized environment override for the service base address.
const BASE_ADDRESS_ENV: &str = "WORKBENCH_API_BASE";
/// Poll cadence for engine completions arriving between input events.
const REPAINT_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    app_logging::initialize(LogDestination::Both);

    let config = resolve_config();
    app_info!("analytics service base address: {}", config.base_address);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(config, msg_tx.clone())
        .map_err(|err| anyhow::anyhow!("failed to start engine: {err}"))?;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 720.0])
        .with_min_inner_size([640.0, 480.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Analytics Workbench",
        native_options,
        Box::new(move |_cc| Ok(Box::new(WorkbenchApp::new(msg_tx, msg_rx, effects)))),
    )
    .map_err(|err| anyhow::anyhow!("ui shell failed: {err}"))?;
    Ok(())
}

fn resolve_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Ok(base) = std::env::var(BASE_ADDRESS_ENV) {
        let base = base.trim();
        if !base.is_empty() {
            config.base_address = base.to_string();
        }
    }
    config
}

struct WorkbenchApp {
    state: AppState,
    view: AppViewModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    effects: EffectRunner,
    /// Sanitized markup for the markdown pane, re-rendered only when the
    /// report slot changes.
    rendered_report: Option<String>,
}

impl WorkbenchApp {
    fn new(msg_tx: Sender<Msg>, msg_rx: Receiver<Msg>, effects: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            msg_tx,
            msg_rx,
            effects,
            rendered_report: None,
        }
    }

    fn drain_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            let report_before = self.view.report.clone();
            self.view = state.view();
            if self.view.report != report_before {
                self.refresh_report_cache();
            }
        }
        self.state = state;
        self.effects.run(effects);
    }

    fn refresh_report_cache(&mut self) {
        self.rendered_report = match &self.view.report {
            Some(ReportArtifact::Markdown(body)) => Some(render_markdown(body)),
            _ => None,
        };
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_messages();

        egui::TopBottomPanel::top("actions").show(ctx, |panel| {
            if let Some(msg) = ui::action_row(panel, &self.view) {
                let _ = self.msg_tx.send(msg);
            }
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |panel| {
            ui::status_banner(panel, &self.view);
        });
        egui::CentralPanel::default().show(ctx, |panel| {
            ui::primary_pane(panel, &self.view, self.rendered_report.as_deref());
        });

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
