//! End-to-end tests: the viewer library against a live Observer server
//! bound to an ephemeral port.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use jeevansetu_observer::server::ServerConfig;
use jeevansetu_observer::startup::{RunningObserver, spawn_observer};
use jeevansetu_observer::state::AppState;
use jeevansetu_types::{PushEvent, Snapshot};
use jeevansetu_viewer::app::{self, Outcome};
use jeevansetu_viewer::command::Command;
use jeevansetu_viewer::role::Role;
use jeevansetu_viewer::{ApiClient, PushSubscription, ViewerConfig, ViewerError, ViewerState};

async fn start_server() -> (Arc<AppState>, RunningObserver, ViewerConfig) {
    let state = Arc::new(AppState::default());
    let observer = spawn_observer(
        &ServerConfig {
            host: String::from("127.0.0.1"),
            port: 0,
        },
        Arc::clone(&state),
        std::future::pending(),
    )
    .await
    .unwrap();
    let config = ViewerConfig {
        base_url: format!("http://{}", observer.addr),
        ..ViewerConfig::default()
    };
    (state, observer, config)
}

async fn subscribe(state: &AppState, config: &ViewerConfig) -> PushSubscription {
    let sub = PushSubscription::connect(&config.ws_url().unwrap())
        .await
        .unwrap();
    for _ in 0..200 {
        if state.viewer_count() == 1 {
            return sub;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("server never registered the subscription");
}

async fn next(sub: &mut PushSubscription) -> PushEvent {
    tokio::time::timeout(Duration::from_secs(5), sub.next_event())
        .await
        .unwrap()
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn initial_sync_fetches_current_snapshot() {
    let (_state, observer, config) = start_server().await;
    let client = ApiClient::new(config.clone());

    let mut viewer = ViewerState::new(&config);
    viewer.initial_sync(client.fetch_snapshot().await.unwrap());

    assert_eq!(viewer.snapshot(), Some(&Snapshot::initial()));
    assert_eq!(
        viewer.log().latest().map(|e| e.message.as_str()),
        Some("Initial data sync completed.")
    );
    observer.handle.abort();
}

#[tokio::test]
async fn public_role_cannot_trigger_server_actions() {
    let (state, observer, config) = start_server().await;
    let client = ApiClient::new(config.clone());
    let mut viewer = ViewerState::new(&config);

    let result = app::execute(Command::Surge, &client, &mut viewer, Instant::now()).await;
    assert!(matches!(
        result,
        Err(ViewerError::AdminRequired { action: "surge" })
    ));
    assert_eq!(state.dashboard.snapshot().await, Snapshot::initial());
    assert!(viewer.log().is_empty());
    observer.handle.abort();
}

#[tokio::test]
async fn admin_surge_and_reset_flow_through_push_channel() {
    let (state, observer, config) = start_server().await;
    let client = ApiClient::new(config.clone());
    let mut viewer = ViewerState::new(&config);
    viewer.initial_sync(client.fetch_snapshot().await.unwrap());
    let mut sub = subscribe(&state, &config).await;

    app::execute(Command::Role(Role::Admin), &client, &mut viewer, Instant::now())
        .await
        .unwrap();
    let outcome = app::execute(Command::Surge, &client, &mut viewer, Instant::now())
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Redraw);

    let update = next(&mut sub).await;
    let alert = next(&mut sub).await;
    assert!(matches!(&update, PushEvent::UpdateData(s) if s.icu == 5));
    assert_eq!(
        alert,
        PushEvent::Alert(String::from("🚨 Emergency Surge Detected!"))
    );

    let now = Instant::now();
    viewer.apply_event(update, now);
    viewer.apply_event(alert, now);
    assert_eq!(viewer.snapshot().map(|s| s.icu), Some(5));
    assert_eq!(viewer.active_alert(now), Some("🚨 Emergency Surge Detected!"));

    app::execute(Command::Reset, &client, &mut viewer, Instant::now())
        .await
        .unwrap();
    assert_eq!(next(&mut sub).await, PushEvent::UpdateData(Snapshot::initial()));
    assert_eq!(
        next(&mut sub).await,
        PushEvent::Alert(String::from("✅ System Reset Successfully"))
    );
    assert!(state.dashboard.is_paused().await);

    let logged: Vec<_> = viewer.log().entries().map(|e| e.message.clone()).collect();
    assert!(logged.contains(&String::from("Emergency surge executed by Admin.")));
    assert!(logged.contains(&String::from("System reset performed.")));

    sub.close().await;
    observer.handle.abort();
}

#[tokio::test]
async fn detail_reports_intelligence_for_tracked_resources() {
    let (_state, observer, config) = start_server().await;
    let client = ApiClient::new(config.clone());
    let mut viewer = ViewerState::new(&config);
    viewer.initial_sync(client.fetch_snapshot().await.unwrap());

    let outcome = app::execute(
        "detail O-".parse().unwrap(),
        &client,
        &mut viewer,
        Instant::now(),
    )
    .await
    .unwrap();
    let Outcome::Print(text) = outcome else {
        panic!("expected printed output");
    };
    assert!(text.contains("Availability: 6"));
    assert!(text.contains("Depletion Forecast: 48 mins"));

    let outcome = app::execute(
        "detail AB+".parse().unwrap(),
        &client,
        &mut viewer,
        Instant::now(),
    )
    .await
    .unwrap();
    assert_eq!(outcome, Outcome::Print(String::from("No data for AB+")));
    observer.handle.abort();
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let (_state, observer, config) = start_server().await;
    observer.handle.abort();
    let _ = observer.handle.await;

    let client = ApiClient::new(config);
    let result = client.fetch_snapshot().await;
    assert!(matches!(result, Err(ViewerError::Http { .. })));
}
