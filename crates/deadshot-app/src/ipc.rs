//! IPC layer — bridges the outside world to the game loop thread.
//!
//! Commands arrive as one JSON `PlayerCommand` per input line; every tick's
//! `GameStateSnapshot` goes out as one JSON line. Malformed input is logged
//! and skipped.

use std::io::{BufRead, BufWriter, Write};
use std::sync::mpsc;

use tracing::warn;

use deadshot_core::commands::PlayerCommand;
use deadshot_core::state::GameStateSnapshot;
use deadshot_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the session. Spawns the game loop thread if not already running
/// and returns the snapshot stream.
pub fn start_session(
    state: &AppState,
    config: SimConfig,
) -> Result<mpsc::Receiver<GameStateSnapshot>, String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Session already running".into());
    }

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let cmd_tx = game_loop::spawn_game_loop(config, snapshot_tx, state.latest_snapshot.clone());

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(snapshot_rx)
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Session not started".into()),
    }
}

/// Ask the game loop thread to stop.
pub fn shutdown(state: &AppState) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Shutdown)
            .map_err(|e| format!("Failed to send shutdown: {}", e)),
        None => Err("Session not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn latest_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Read commands line-by-line until EOF, forwarding each to the game loop.
pub fn read_commands(input: impl BufRead, state: &AppState) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("input read error: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => {
                if let Err(e) = send_command(state, command) {
                    warn!("dropping command: {e}");
                }
            }
            Err(e) => warn!("ignoring malformed command line: {e}"),
        }
    }
}

/// Write each received snapshot as one JSON line. Returns when the
/// snapshot channel closes or the output goes away.
pub fn forward_snapshots(snapshot_rx: mpsc::Receiver<GameStateSnapshot>, output: impl Write) {
    let mut output = BufWriter::new(output);

    while let Ok(snapshot) = snapshot_rx.recv() {
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if writeln!(output, "{json}").and_then(|_| output.flush()).is_err() {
                    break;
                }
            }
            Err(e) => warn!("snapshot serialization failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_send_command_before_start_fails() {
        let state = AppState::new();
        let result = send_command(&state, PlayerCommand::StartGame);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_lifecycle() {
        let state = AppState::new();
        let snapshot_rx = start_session(&state, SimConfig::default()).unwrap();

        // Double start is rejected.
        assert!(start_session(&state, SimConfig::default()).is_err());

        // The loop ticks on its own; snapshots flow.
        let snap = snapshot_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("first snapshot");
        assert_eq!(snap.phase, deadshot_core::enums::GamePhase::MainMenu);

        send_command(&state, PlayerCommand::StartGame).unwrap();
        let mut active_seen = false;
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while std::time::Instant::now() < deadline {
            match snapshot_rx.recv_timeout(Duration::from_millis(200)) {
                Ok(snap) if snap.phase == deadshot_core::enums::GamePhase::Active => {
                    active_seen = true;
                    break;
                }
                Ok(_) => continue,
                Err(_) => break,
            }
        }
        assert!(active_seen, "StartGame should take the session Active");

        shutdown(&state).unwrap();
    }

    #[test]
    fn test_read_commands_skips_garbage() {
        let state = AppState::new();
        // No session: valid lines fail to send (logged), garbage is skipped.
        // Either way this must not panic or hang.
        let input = b"not json\n{\"type\":\"Pause\"}\n\n".as_slice();
        read_commands(input, &state);
    }
}
