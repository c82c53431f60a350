#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::{Alert, AudioEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_target_archetype_serde() {
        let variants = vec![
            TargetArchetype::Silhouette,
            TargetArchetype::Basic,
            TargetArchetype::Armored,
            TargetArchetype::Fast,
            TargetArchetype::Giant,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TargetArchetype = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_hit_zone_serde() {
        for v in [HitZone::Head, HitZone::Body] {
            let json = serde_json::to_string(&v).unwrap();
            let back: HitZone = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Restart,
            PlayerCommand::ReturnToMenu,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::SetTimeScale { scale: 2.0 },
            PlayerCommand::SetMoveInput {
                forward: 1.0,
                strafe: -0.5,
                running: true,
            },
            PlayerCommand::SetLook {
                yaw: 1.2,
                pitch: -0.3,
            },
            PlayerCommand::Jump,
            PlayerCommand::TriggerPressed,
            PlayerCommand::TriggerReleased,
            PlayerCommand::Reload,
            PlayerCommand::SelectWeapon { slot: 2 },
            PlayerCommand::CycleWeapon { step: -1 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify the tagged encoding commands arrive in over stdin.
    #[test]
    fn test_player_command_tagged_form() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"TriggerPressed"}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::TriggerPressed));

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectWeapon","slot":1}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::SelectWeapon { slot: 1 }));
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::Gunshot { slot: 0 },
            AudioEvent::DryFire,
            AudioEvent::ReloadStarted { duration_secs: 1.0 },
            AudioEvent::ReloadComplete,
            AudioEvent::Impact {
                position: Position::new(1.0, 2.0, 0.5),
            },
            AudioEvent::TargetDown {
                archetype: TargetArchetype::Silhouette,
                points: 50,
            },
            AudioEvent::TargetRespawned {
                archetype: TargetArchetype::Basic,
            },
            AudioEvent::WeaponSwitched { slot: 1 },
            AudioEvent::TimeUp {
                final_score: 425,
                new_high_score: true,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: AudioEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify Alert round-trips through serde.
    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Warning,
            message: "spawn fallback".to_string(),
            tick: 1000,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.tick, back.tick);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.horizontal_range_to(&b) - 5.0).abs() < 1e-10);

        // Horizontal range ignores height.
        let c = Position::new(3.0, 4.0, 10.0);
        assert!((a.horizontal_range_to(&c) - 5.0).abs() < 1e-10);
        assert!(a.range_to(&c) > 5.0);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
