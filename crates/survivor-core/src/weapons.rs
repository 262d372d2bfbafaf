//! The weapon catalog — static table of purchasable weapons.
//!
//! Catalog entries are immutable; the actor equips a copy of one entry
//! at a time and switching is a pure substitution (no ammo, no
//! inventory).

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKey;

/// A weapon catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub key: WeaponKey,
    /// Display name (localization is the frontend's concern).
    pub name: String,
    /// Damage per projectile.
    pub damage: i32,
    /// Minimum milliseconds between shots.
    pub fire_interval_ms: f64,
    /// Projectile speed in units per tick.
    pub projectile_speed: f64,
    /// Maximum projectile travel distance.
    pub range: f64,
    /// Purchase price in coins.
    pub price: u32,
    /// Hex color tag, opaque to the simulation (rendering hint).
    pub color: String,
}

impl Weapon {
    /// Look up a catalog entry by key. Keys are a closed enum, so this
    /// is infallible.
    pub fn get(key: WeaponKey) -> Weapon {
        match key {
            WeaponKey::Pistol => Weapon {
                key,
                name: "Pistol".to_string(),
                damage: 15,
                fire_interval_ms: 300.0,
                projectile_speed: 8.0,
                range: 300.0,
                price: 0,
                color: "#FFD700".to_string(),
            },
            WeaponKey::Shotgun => Weapon {
                key,
                name: "Shotgun".to_string(),
                damage: 35,
                fire_interval_ms: 800.0,
                projectile_speed: 6.0,
                range: 150.0,
                price: 150,
                color: "#FF6B35".to_string(),
            },
            WeaponKey::Rifle => Weapon {
                key,
                name: "Rifle".to_string(),
                damage: 25,
                fire_interval_ms: 150.0,
                projectile_speed: 12.0,
                range: 450.0,
                price: 300,
                color: "#4ECDC4".to_string(),
            },
            WeaponKey::Laser => Weapon {
                key,
                name: "Laser".to_string(),
                damage: 20,
                fire_interval_ms: 100.0,
                projectile_speed: 15.0,
                range: 400.0,
                price: 500,
                color: "#E74C3C".to_string(),
            },
        }
    }

    /// Enumerate the full catalog in stable order (for shop display).
    pub fn catalog() -> Vec<Weapon> {
        WeaponKey::ALL.iter().map(|&key| Weapon::get(key)).collect()
    }
}

impl Default for Weapon {
    /// The free starting weapon.
    fn default() -> Self {
        Weapon::get(WeaponKey::Pistol)
    }
}
