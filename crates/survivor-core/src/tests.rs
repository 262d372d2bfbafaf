#[cfg(test)]
mod tests {
    use crate::commands::{InputState, PlayerCommand};
    use crate::constants::{MS_PER_TICK, TICK_RATE};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::WorldSnapshot;
    use crate::types::{Position, SimTime, Velocity};
    use crate::weapons::Weapon;

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Combat,
            GamePhase::Shop,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![EnemyKind::Normal, EnemyKind::Fast, EnemyKind::Tank];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_key_serde() {
        for key in WeaponKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            let back: WeaponKey = serde_json::from_str(&json).unwrap();
            assert_eq!(key, back);
        }
        // Keys serialize lowercase for frontend compatibility.
        assert_eq!(
            serde_json::to_string(&WeaponKey::Pistol).unwrap(),
            "\"pistol\""
        );
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartSession,
            PlayerCommand::SetInput {
                input: InputState {
                    up: true,
                    right: true,
                    aim_x: 120.0,
                    aim_y: 450.0,
                    firing: true,
                    ..Default::default()
                },
            },
            PlayerCommand::BuyWeapon {
                key: WeaponKey::Rifle,
            },
            PlayerCommand::BuyHealthUpgrade,
            PlayerCommand::AdvanceWave,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::SessionStarted,
            GameEvent::WaveStarted { wave: 3 },
            GameEvent::WaveCleared { wave: 3 },
            GameEvent::EnemyKilled {
                enemy_id: 4,
                reward: 16,
            },
            GameEvent::WeaponPurchased {
                key: WeaponKey::Laser,
            },
            GameEvent::HealthUpgraded,
            GameEvent::InsufficientFunds,
            GameEvent::GameOver { wave: 5, kills: 42 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = WorldSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }

    // ---- Weapon catalog ----

    #[test]
    fn test_catalog_order_and_prices() {
        let catalog = Weapon::catalog();
        assert_eq!(catalog.len(), 4);
        let keys: Vec<WeaponKey> = catalog.iter().map(|w| w.key).collect();
        assert_eq!(keys, WeaponKey::ALL);
        let prices: Vec<u32> = catalog.iter().map(|w| w.price).collect();
        assert_eq!(prices, vec![0, 150, 300, 500]);
    }

    #[test]
    fn test_catalog_ballistics() {
        let pistol = Weapon::get(WeaponKey::Pistol);
        assert_eq!(pistol.damage, 15);
        assert_eq!(pistol.fire_interval_ms, 300.0);
        assert_eq!(pistol.projectile_speed, 8.0);
        assert_eq!(pistol.range, 300.0);

        let laser = Weapon::get(WeaponKey::Laser);
        assert_eq!(laser.damage, 20);
        assert_eq!(laser.fire_interval_ms, 100.0);
        assert_eq!(laser.projectile_speed, 15.0);
        assert_eq!(laser.range, 400.0);
    }

    #[test]
    fn test_default_weapon_is_free() {
        let default = Weapon::default();
        assert_eq!(default.key, WeaponKey::Pistol);
        assert_eq!(default.price, 0);
    }

    // ---- Time & geometry ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_ms - 1000.0).abs() < 1e-6);
        assert!((MS_PER_TICK * TICK_RATE as f64 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_distance_and_angle() {
        let a = Position::new(400.0, 300.0);
        let b = Position::new(400.0, 200.0);
        assert!((a.distance_to(&b) - 100.0).abs() < 1e-9);
        // Straight up on screen is -pi/2 in atan2 convention.
        assert!((a.angle_to(&b) + std::f64::consts::FRAC_PI_2).abs() < 1e-9);

        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-9);
    }
}
