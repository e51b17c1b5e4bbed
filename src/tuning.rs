//! Data-driven game balance
//!
//! Every value defaults to the constants in [`crate::consts`]. A tuning file
//! only needs to name the fields it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance values for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub grid_top: f32,

    // === Economy ===
    pub starting_sun: u32,
    pub sun_value: u32,
    pub plant_cost: u32,

    // === Cadence (ticks) ===
    pub sun_spawn_period: u32,
    pub zombie_spawn_period: u32,
    pub plant_fire_period: u32,

    // === Sun ===
    pub sun_fall_speed: f32,
    pub sun_spawn_margin: f32,
    pub sun_stop_min_y: f32,
    pub sun_stop_max_y: f32,

    // === Plant ===
    pub plant_health: f32,

    // === Projectile ===
    pub pea_speed: f32,
    pub pea_damage: f32,

    // === Zombie ===
    pub zombie_speed: f32,
    pub zombie_health: f32,
    pub zombie_contact_damage: f32,
    pub loss_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            rows: GRID_ROWS,
            cols: GRID_COLS,
            cell_size: CELL_SIZE,
            grid_top: GRID_TOP,

            starting_sun: STARTING_SUN,
            sun_value: SUN_VALUE,
            plant_cost: PEASHOOTER_COST,

            sun_spawn_period: SUN_SPAWN_PERIOD,
            zombie_spawn_period: ZOMBIE_SPAWN_PERIOD,
            plant_fire_period: PLANT_FIRE_PERIOD,

            sun_fall_speed: SUN_FALL_SPEED,
            sun_spawn_margin: SUN_SPAWN_MARGIN,
            sun_stop_min_y: SUN_STOP_MIN_Y,
            sun_stop_max_y: SUN_STOP_MAX_Y,

            plant_health: PLANT_HEALTH,

            pea_speed: PEA_SPEED,
            pea_damage: PEA_DAMAGE,

            zombie_speed: ZOMBIE_SPEED,
            zombie_health: ZOMBIE_HEALTH,
            zombie_contact_damage: ZOMBIE_CONTACT_DAMAGE,
            loss_x: LOSS_X,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        let floats = [
            ("width", self.width),
            ("height", self.height),
            ("cell_size", self.cell_size),
            ("grid_top", self.grid_top),
            ("sun_fall_speed", self.sun_fall_speed),
            ("sun_spawn_margin", self.sun_spawn_margin),
            ("sun_stop_min_y", self.sun_stop_min_y),
            ("sun_stop_max_y", self.sun_stop_max_y),
            ("plant_health", self.plant_health),
            ("pea_speed", self.pea_speed),
            ("pea_damage", self.pea_damage),
            ("zombie_speed", self.zombie_speed),
            ("zombie_health", self.zombie_health),
            ("zombie_contact_damage", self.zombie_contact_damage),
            ("loss_x", self.loss_x),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(*field, "must be finite");
        }

        if self.rows == 0 {
            return invalid("rows", "must be at least 1");
        }
        if self.cols == 0 {
            return invalid("cols", "must be at least 1");
        }
        if self.cell_size <= 0.0 {
            return invalid("cell_size", "must be positive");
        }
        if self.sun_spawn_period == 0 {
            return invalid("sun_spawn_period", "must be at least 1");
        }
        if self.zombie_spawn_period == 0 {
            return invalid("zombie_spawn_period", "must be at least 1");
        }
        if self.width - 2.0 * self.sun_spawn_margin < 0.0 {
            return invalid("sun_spawn_margin", "leaves no room to spawn suns");
        }
        if self.sun_stop_min_y > self.sun_stop_max_y {
            return invalid("sun_stop_min_y", "must not exceed sun_stop_max_y");
        }
        // A plant or zombie must spawn alive, or the grid loses track of it
        if self.plant_health <= 0.0 {
            return invalid("plant_health", "must be positive");
        }
        if self.zombie_health <= 0.0 {
            return invalid("zombie_health", "must be positive");
        }
        if self.pea_damage <= 0.0 {
            return invalid("pea_damage", "must be positive");
        }
        if self.zombie_contact_damage < 0.0 {
            return invalid("zombie_contact_damage", "must not be negative");
        }
        Ok(())
    }

    /// Bottom edge of the grid
    pub fn grid_bottom(&self) -> f32 {
        self.grid_top + self.rows as f32 * self.cell_size
    }
}
