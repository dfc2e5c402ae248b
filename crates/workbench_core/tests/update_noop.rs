use std::sync::Once;

use workbench_core::{
    update, AppState, Insight, Msg, OperationError, PrimaryView, ReportArtifact, ReportFormat,
    ValidationContract, WorkflowStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

#[test]
fn busy_trigger_leaves_the_snapshot_unchanged() {
    init_logging();
    let (mut busy, _) = update(AppState::new(), Msg::AnalyzeClicked);
    assert!(busy.consume_dirty());
    let before = busy.clone();

    let (mut next, effects) = update(busy, Msg::InsightsClicked);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn no_sequence_without_busy_triggers_ends_stuck_busy() {
    init_logging();
    let steps: Vec<(Msg, Msg)> = vec![
        (
            Msg::IngestSampleClicked,
            Msg::IngestFinished { result: Ok(()) },
        ),
        (
            Msg::IngestFileChosen {
                filename: "data.json".to_string(),
                bytes: b"[]".to_vec(),
            },
            Msg::IngestFinished {
                result: Err(OperationError {
                    message: "service returned http status 400".to_string(),
                }),
            },
        ),
        (
            Msg::AnalyzeClicked,
            Msg::AnalyzeFinished {
                result: Ok(ValidationContract {
                    ok: true,
                    ..ValidationContract::default()
                }),
            },
        ),
        (
            Msg::InsightsClicked,
            Msg::InsightsFinished {
                result: Ok(vec![Insight {
                    id: "i1".to_string(),
                    title: "t".to_string(),
                    summary: "s".to_string(),
                }]),
            },
        ),
        (
            Msg::ReportClicked {
                format: ReportFormat::Markdown,
            },
            Msg::ReportFinished {
                result: Err(OperationError {
                    message: "request timed out".to_string(),
                }),
            },
        ),
        (
            Msg::ReportClicked {
                format: ReportFormat::Html,
            },
            Msg::ReportFinished {
                result: Ok(ReportArtifact::Html {
                    embed_url: "http://localhost:8000/report?format=html".to_string(),
                }),
            },
        ),
    ];

    let mut state = AppState::new();
    for (trigger, completion) in steps {
        let (busy, _) = update(state, trigger);
        assert_eq!(busy.view().status, WorkflowStatus::Busy);
        let (settled, effects) = update(busy, completion);
        assert!(effects.is_empty());
        assert_ne!(settled.view().status, WorkflowStatus::Busy);
        state = settled;
    }
}

#[test]
fn late_completion_is_applied_to_whatever_pane_is_current() {
    init_logging();
    // No cancellation: a response is applied whenever it arrives, even after
    // the user has moved on to another pane.
    let (state, _) = update(AppState::new(), Msg::InsightsClicked);
    let (state, _) = update(
        state,
        Msg::InsightsFinished {
            result: Ok(Vec::new()),
        },
    );
    assert_eq!(state.view().primary, PrimaryView::Insights);

    let (state, _) = update(state, Msg::AnalyzeClicked);
    let (state, _) = update(
        state,
        Msg::AnalyzeFinished {
            result: Ok(ValidationContract {
                ok: false,
                missing: vec!["user_id".to_string()],
                any_of_missing: Vec::new(),
            }),
        },
    );
    let view = state.view();

    assert_eq!(view.primary, PrimaryView::Contract);
    assert_eq!(view.insights, Some(Vec::new()));
}
