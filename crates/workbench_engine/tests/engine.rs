use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workbench_engine::{
    ClientConfig, EngineEvent, EngineHandle, ReportPayload, ReportRequest,
};

const EVENT_WAIT: Duration = Duration::from_secs(5);

#[tokio::test(flavor = "multi_thread")]
async fn analyze_command_round_trips_through_the_engine_thread() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "contract": {"ok": true}
        })))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(ClientConfig {
        base_address: server.uri(),
        ..ClientConfig::default()
    })
    .expect("engine starts");

    engine.analyze();
    let event = events.recv_timeout(EVENT_WAIT).expect("completion event");

    match event {
        EngineEvent::AnalyzeCompleted { result } => {
            assert!(result.expect("analyze succeeded").ok);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn html_report_resolves_without_touching_the_network() {
    // Nothing listens on the base address; only the startup probe would fail,
    // and its outcome is log-only.
    let (engine, events) = EngineHandle::new(ClientConfig {
        base_address: "http://127.0.0.1:1".to_string(),
        connect_timeout: Duration::from_millis(200),
        ..ClientConfig::default()
    })
    .expect("engine starts");

    engine.fetch_report(ReportRequest::Html);
    let event = events.recv_timeout(EVENT_WAIT).expect("completion event");

    match event {
        EngineEvent::ReportCompleted { result } => {
            assert_eq!(
                result.expect("embed reference resolved"),
                ReportPayload::EmbedUrl("http://127.0.0.1:1/report?format=html".to_string())
            );
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
