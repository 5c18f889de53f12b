#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    use crate::commands::{PlayerCommand, ShipInput};
    use crate::config::SimConfig;
    use crate::enums::*;
    use crate::error::SimError;
    use crate::events::{HitRecord, SimEvent};
    use crate::history::HistoryLog;
    use crate::state::GameStateSnapshot;
    use crate::types::{Kinematics, SimTime};

    fn state_at(i: u64) -> Kinematics {
        let f = i as f64;
        Kinematics::new(
            DVec2::new(f, -f),
            DVec2::new(10.0 * f, 1.0),
            DVec2::new(0.0, f * 0.5),
        )
    }

    // ---- History log ----

    #[test]
    fn test_history_lookback_zero_is_newest() {
        let mut log = HistoryLog::new();
        for i in 0..5 {
            log.record(&state_at(i));
        }
        assert_eq!(log.len(), 5);
        assert_eq!(log.lookback(0).unwrap(), state_at(4));
        assert_eq!(log.lookback(4).unwrap(), state_at(0));
    }

    #[test]
    fn test_history_lookback_matches_recorded_tick() {
        let mut log = HistoryLog::with_capacity(100);
        for t in 0..100u64 {
            log.record(&state_at(t));
            for n in 0..=t {
                assert_eq!(log.lookback(n).unwrap(), state_at(t - n));
            }
        }
    }

    #[test]
    fn test_history_underrun_fails_loudly() {
        let mut log = HistoryLog::new();
        assert_eq!(
            log.lookback(0),
            Err(SimError::HistoryUnderrun {
                requested: 0,
                available: 0
            })
        );

        log.record(&state_at(0));
        log.record(&state_at(1));
        assert!(log.lookback(1).is_ok());
        assert_eq!(
            log.lookback(2),
            Err(SimError::HistoryUnderrun {
                requested: 2,
                available: 2
            })
        );
        assert!(log.lookback(u64::MAX).is_err());
    }

    #[test]
    fn test_history_sequences_stay_aligned() {
        let mut log = HistoryLog::new();
        for i in 0..7 {
            log.record(&state_at(i));
        }
        assert_eq!(log.positions().len(), 7);
        assert_eq!(log.velocities().len(), 7);
        assert_eq!(log.accelerations().len(), 7);
        assert_eq!(log.at_tick(3), Some(state_at(3)));
        assert_eq!(log.at_tick(7), None);
    }

    // ---- Configuration ----

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delay_ticks(), 60);
        assert_eq!(config.shot_delay_ticks(), 30);
        assert_eq!(config.travel_ticks(), 60);
        assert_eq!(config.autopilot_interval_ticks(), 60);
        assert_abs_diff_eq!(config.total_delay_secs(), 2.0);
        assert_abs_diff_eq!(config.dt(), 1.0 / 60.0);
    }

    #[test]
    fn test_travel_ticks_scale_with_projectile_speed() {
        let config = SimConfig {
            projectile_speed_fraction: 0.5,
            ..Default::default()
        };
        assert_eq!(config.travel_ticks(), 120);
        assert_abs_diff_eq!(config.total_delay_secs(), 3.0);

        let config = SimConfig {
            projectile_speed_fraction: 0.7,
            ..Default::default()
        };
        // 60 / 0.7 = 85.71 rounds to the nearest whole tick.
        assert_eq!(config.travel_ticks(), 86);
    }

    #[test]
    fn test_zero_delay_keeps_autopilot_interval_positive() {
        let config = SimConfig {
            propagation_delay_secs: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.delay_ticks(), 0);
        assert_eq!(config.autopilot_interval_ticks(), 1);
    }

    fn rejected_field(config: SimConfig) -> &'static str {
        match config.validate() {
            Err(SimError::InvalidConfig { field, .. }) => field,
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert_eq!(
            rejected_field(SimConfig {
                ticks_per_second: 0.0,
                ..Default::default()
            }),
            "ticks_per_second"
        );
        assert_eq!(
            rejected_field(SimConfig {
                ticks_per_second: -30.0,
                ..Default::default()
            }),
            "ticks_per_second"
        );
        assert_eq!(
            rejected_field(SimConfig {
                projectile_speed_fraction: 0.0,
                ..Default::default()
            }),
            "projectile_speed_fraction"
        );
        assert_eq!(
            rejected_field(SimConfig {
                projectile_speed_fraction: 1.5,
                ..Default::default()
            }),
            "projectile_speed_fraction"
        );
        assert_eq!(
            rejected_field(SimConfig {
                propagation_delay_secs: -1.0,
                ..Default::default()
            }),
            "propagation_delay_secs"
        );
        assert_eq!(
            rejected_field(SimConfig {
                volley_size: 0,
                ..Default::default()
            }),
            "volley_size"
        );
        assert_eq!(
            rejected_field(SimConfig {
                boost_multiplier: 0.5,
                ..Default::default()
            }),
            "boost_multiplier"
        );
        assert_eq!(
            rejected_field(SimConfig {
                starting_health: Some(0.0),
                ..Default::default()
            }),
            "starting_health"
        );
        assert_eq!(
            rejected_field(SimConfig {
                ship_start_velocity: DVec2::new(f64::NAN, 0.0),
                ..Default::default()
            }),
            "ship_start"
        );
        assert_eq!(
            rejected_field(SimConfig {
                projectile_speed_fraction: 1e-300,
                ..Default::default()
            }),
            "projectile_speed_fraction"
        );
        assert_eq!(
            rejected_field(SimConfig {
                shot_delay_secs: 1e30,
                ..Default::default()
            }),
            "shot_delay_secs"
        );
        assert_eq!(
            rejected_field(SimConfig {
                propagation_delay_secs: 1e20,
                ..Default::default()
            }),
            "propagation_delay_secs"
        );
    }

    #[test]
    fn test_config_accepts_long_but_bounded_schedule() {
        let config = SimConfig {
            projectile_speed_fraction: 1e-6,
            shot_delay_secs: 1e6,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.travel_ticks(), 60_000_000);
        assert_eq!(config.shot_delay_ticks(), 60_000_000);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = SimConfig::from_json(
            r#"{ "propagation_delay_secs": 2.0, "volley_size": 6, "starting_health": 50.0 }"#,
        )
        .unwrap();
        assert_eq!(config.delay_ticks(), 120);
        assert_eq!(config.volley_size, 6);
        assert_eq!(config.starting_health, Some(50.0));
        assert_eq!(config.ticks_per_second, 60.0);
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        let err = SimConfig::from_json(r#"{ "projectile_speed_fraction": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidConfig {
                field: "projectile_speed_fraction",
                ..
            }
        ));
        let err = SimConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "json", .. }));
    }

    // ---- Serde ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartEngagement,
            PlayerCommand::Retry,
            PlayerCommand::Quit,
            PlayerCommand::SetSteeringMode {
                mode: SteeringMode::Manual,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::CourseChange {
                turn: TurnDirection::Clockwise,
            },
            SimEvent::VolleyFired {
                shots: 4,
                arrival_tick: 120,
            },
            SimEvent::ProjectileHit {
                shot_id: 3,
                offset: 12.5,
            },
            SimEvent::ProjectileMiss {
                shot_id: 4,
                distance: 80.0,
            },
            SimEvent::ShipDestroyed { tick: 900 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.hits.push(HitRecord {
            tick: 120,
            impact_position: DVec2::new(1.0, 2.0),
            offset: 3.0,
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.hits, snapshot.hits);
    }

    // ---- Types ----

    #[test]
    fn test_turn_direction_sign() {
        assert_eq!(TurnDirection::Clockwise.sign(), -1.0);
        assert_eq!(TurnDirection::Straight.sign(), 0.0);
        assert_eq!(TurnDirection::CounterClockwise.sign(), 1.0);
        assert_eq!(ShipInput::default().turn, TurnDirection::Straight);
        assert!(ShipInput::boosting(TurnDirection::Straight).boost);
    }

    #[test]
    fn test_kinematics_speed() {
        let k = Kinematics::new(DVec2::ZERO, DVec2::new(3.0, 4.0), DVec2::new(0.0, 100.0));
        assert_abs_diff_eq!(k.speed(), 5.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert_abs_diff_eq!(time.elapsed_secs, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_error_display() {
        let err = SimError::HistoryUnderrun {
            requested: 60,
            available: 10,
        };
        assert_eq!(
            err.to_string(),
            "History underrun: requested 60 ticks back with only 10 entries recorded"
        );
        let err = SimError::invalid_config("volley_size", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for volley_size: must be at least 1"
        );
    }
}
