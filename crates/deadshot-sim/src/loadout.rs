//! Weapon loadout table — static per-weapon parameters.
//!
//! The player's `WeaponState` component references a row of this table by
//! slot index; all derived behavior (cooldown, reload, fire mode) reads
//! from the spec.

/// Static parameters of one weapon.
#[derive(Debug, Clone)]
pub struct WeaponSpec {
    pub name: &'static str,
    /// Damage per round.
    pub damage: f64,
    /// Maximum ray range in meters.
    pub range: f64,
    /// Rounds per second.
    pub fire_rate: f64,
    /// Magazine capacity.
    pub magazine: u32,
    /// Fixed reload duration in seconds.
    pub reload_secs: f64,
    /// Automatic weapons fire while the trigger is held.
    pub automatic: bool,
}

impl WeaponSpec {
    /// Seconds between consecutive shots.
    pub fn shot_cooldown_secs(&self) -> f64 {
        1.0 / self.fire_rate
    }
}

/// The default three-weapon loadout.
pub fn default_loadout() -> Vec<WeaponSpec> {
    vec![
        WeaponSpec {
            name: "Service Rifle",
            damage: 25.0,
            range: 100.0,
            fire_rate: 15.0,
            magazine: 30,
            reload_secs: 1.0,
            automatic: true,
        },
        WeaponSpec {
            name: "Sidearm",
            damage: 25.0,
            range: 50.0,
            fire_rate: 5.0,
            magazine: 12,
            reload_secs: 1.0,
            automatic: false,
        },
        WeaponSpec {
            name: "Marksman Rifle",
            damage: 100.0,
            range: 200.0,
            fire_rate: 1.5,
            magazine: 5,
            reload_secs: 2.5,
            automatic: false,
        },
    ]
}
