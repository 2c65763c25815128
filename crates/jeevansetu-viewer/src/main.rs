//! Terminal viewer binary.
//!
//! Reads commands from stdin, follows the push channel, and redraws the
//! dashboard on every change. Logs go to stderr.

use std::time::{Duration, Instant};

use anyhow::Context;
use jeevansetu_types::PushEvent;
use jeevansetu_viewer::app::{self, Outcome};
use jeevansetu_viewer::command::Command;
use jeevansetu_viewer::render;
use jeevansetu_viewer::{ApiClient, PushSubscription, ViewerConfig, ViewerError, ViewerState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How often expired alert banners are checked.
const EXPIRY_CHECK: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize structured logging on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load configuration.
    let config = ViewerConfig::from_env().context("invalid viewer configuration")?;
    let ws_url = config.ws_url()?;
    info!(url = config.base_url, district = %config.district, "jeevansetu-viewer starting");

    let client = ApiClient::new(config.clone());
    let mut state = ViewerState::new(&config);

    // 3. Fetch the current snapshot once.
    match client.fetch_snapshot().await {
        Ok(snapshot) => state.initial_sync(snapshot),
        Err(e) => warn!(error = %e, "Initial data sync failed"),
    }

    // 4. Follow the push channel.
    let mut subscription = match PushSubscription::connect(&ws_url).await {
        Ok(sub) => Some(sub),
        Err(e) => {
            warn!(error = %e, "Push channel unavailable, showing static data");
            None
        }
    };

    // 5. Interactive loop.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut expiry = tokio::time::interval(EXPIRY_CHECK);
    redraw(&state);
    println!("Type 'help' for commands.");

    loop {
        let input = tokio::select! {
            event = next_push(subscription.as_mut()) => Input::Push(event),
            line = lines.next_line() => Input::Line(line.context("reading stdin")?),
            _ = expiry.tick() => Input::ExpiryCheck,
        };

        match input {
            Input::Push(Some(Ok(event))) => {
                on_push(&mut state, event);
                redraw(&state);
            }
            Input::Push(Some(Err(ViewerError::Decode(e)))) => {
                warn!(error = %e, "Ignoring undecodable frame");
            }
            Input::Push(Some(Err(e))) => {
                warn!(error = %e, "Push channel failed");
                subscription = None;
            }
            Input::Push(None) => {
                warn!("Push channel closed");
                subscription = None;
            }
            Input::Line(None) => break,
            Input::Line(Some(line)) => {
                let outcome = match line.parse::<Command>() {
                    Ok(command) => app::execute(command, &client, &mut state, Instant::now()).await,
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(Outcome::Redraw) => redraw(&state),
                    Ok(Outcome::Print(text)) => println!("{text}"),
                    Ok(Outcome::Quit) => break,
                    Err(e) => println!("! {e}"),
                }
            }
            Input::ExpiryCheck => {
                if state.expire_alert(Instant::now()) {
                    redraw(&state);
                }
            }
        }
    }

    if let Some(sub) = subscription {
        sub.close().await;
    }
    info!("jeevansetu-viewer stopped");
    Ok(())
}

/// One wake-up of the interactive loop.
enum Input {
    Push(Option<Result<PushEvent, ViewerError>>),
    Line(Option<String>),
    ExpiryCheck,
}

fn on_push(state: &mut ViewerState, event: PushEvent) {
    tracing::debug!(event = event.name(), "Push event received");
    state.apply_event(event, Instant::now());
}

async fn next_push(
    subscription: Option<&mut PushSubscription>,
) -> Option<Result<PushEvent, ViewerError>> {
    match subscription {
        Some(sub) => sub.next_event().await,
        None => std::future::pending().await,
    }
}

fn redraw(state: &ViewerState) {
    // Clear screen and home the cursor.
    print!("\x1b[2J\x1b[H");
    println!("{}", render::dashboard(state, Instant::now()));
}
