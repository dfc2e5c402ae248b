use crate::{AppState, Effect, Msg, WorkflowStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::IngestSampleClicked => trigger(&mut state, Effect::IngestSample),
        Msg::IngestFileChosen { filename, bytes } => {
            trigger(&mut state, Effect::IngestFile { filename, bytes })
        }
        Msg::AnalyzeClicked => trigger(&mut state, Effect::Analyze),
        Msg::InsightsClicked => trigger(&mut state, Effect::FetchInsights),
        Msg::ReportClicked { format } => trigger(&mut state, Effect::FetchReport { format }),
        Msg::IngestFinished { result } => {
            match result {
                Ok(()) => state.finish_ingest(),
                Err(err) => state.fail_operation(err.message),
            }
            Vec::new()
        }
        Msg::AnalyzeFinished { result } => {
            match result {
                Ok(contract) => state.finish_analyze(contract),
                Err(err) => state.fail_operation(err.message),
            }
            Vec::new()
        }
        Msg::InsightsFinished { result } => {
            match result {
                Ok(insights) => state.finish_insights(insights),
                Err(err) => state.fail_operation(err.message),
            }
            Vec::new()
        }
        Msg::ReportFinished { result } => {
            match result {
                Ok(report) => state.finish_report(report),
                Err(err) => state.fail_operation(err.message),
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Shared transition template for the five user actions: triggers while an
/// operation is outstanding are rejected (not queued), otherwise the machine
/// goes `Busy` and the action's effect is emitted.
fn trigger(state: &mut AppState, effect: Effect) -> Vec<Effect> {
    if state.status() == WorkflowStatus::Busy {
        return Vec::new();
    }
    state.begin_operation();
    vec![effect]
}
