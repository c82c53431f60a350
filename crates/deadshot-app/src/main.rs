//! DEADSHOT headless range session.
//!
//! Runs the simulation engine behind a stdio JSON bridge: one
//! `PlayerCommand` per stdin line in, one `GameStateSnapshot` per tick
//! on stdout. Logs go to stderr.

use deadshot_app::state::AppState;
use deadshot_app::{ipc, persistence};
use deadshot_sim::engine::SimConfig;

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let seed = std::env::var("DEADSHOT_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let config = SimConfig {
        seed,
        high_score: persistence::load_high_score(),
        ..Default::default()
    };
    tracing::info!(seed, high_score = config.high_score, "starting range session");

    let state = AppState::new();
    let snapshot_rx = match ipc::start_session(&state, config) {
        Ok(rx) => rx,
        Err(e) => {
            tracing::error!("failed to start session: {e}");
            std::process::exit(1);
        }
    };

    let writer = std::thread::Builder::new()
        .name("deadshot-snapshot-writer".into())
        .spawn(move || ipc::forward_snapshots(snapshot_rx, std::io::stdout()))
        .expect("Failed to spawn snapshot writer thread");

    // Blocks until stdin closes.
    ipc::read_commands(std::io::stdin().lock(), &state);

    if let Err(e) = ipc::shutdown(&state) {
        tracing::warn!("shutdown: {e}");
    }
    let _ = writer.join();
}
