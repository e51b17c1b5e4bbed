//! Lawn Defense - a lane-based tower defense simulation
//!
//! Core modules:
//! - `sim`: Simulation (entities, grid occupancy, collisions, game loop)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use sim::{PlantSelection, TickInput, View, World, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed tick rate the front end paces the simulation at
    pub const TICK_RATE: u32 = 30;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Lawn grid
    pub const GRID_ROWS: usize = 5;
    pub const GRID_COLS: usize = 9;
    pub const CELL_SIZE: f32 = 80.0;
    /// Y of the first grid row (HUD strip above it)
    pub const GRID_TOP: f32 = 100.0;

    /// Economy
    pub const STARTING_SUN: u32 = 100;
    pub const SUN_VALUE: u32 = 25;
    pub const PEASHOOTER_COST: u32 = 100;

    /// Spawn cadences (ticks)
    pub const SUN_SPAWN_PERIOD: u32 = 300;
    pub const ZOMBIE_SPAWN_PERIOD: u32 = 600;

    /// Sun
    pub const SUN_SIZE: f32 = 40.0;
    pub const SUN_FALL_SPEED: f32 = 2.0;
    /// Horizontal inset of the sun spawn range from both playfield edges
    pub const SUN_SPAWN_MARGIN: f32 = 50.0;
    pub const SUN_STOP_MIN_Y: f32 = 100.0;
    pub const SUN_STOP_MAX_Y: f32 = 300.0;

    /// Plant
    pub const PLANT_SIZE: f32 = 60.0;
    pub const PLANT_HEALTH: f32 = 100.0;
    pub const PLANT_FIRE_PERIOD: u32 = 60;
    /// Pea spawn offset from the plant origin
    pub const PEA_OFFSET_X: f32 = 50.0;
    pub const PEA_OFFSET_Y: f32 = 20.0;

    /// Projectile
    pub const PEA_SIZE: f32 = 20.0;
    pub const PEA_SPEED: f32 = 5.0;
    pub const PEA_DAMAGE: f32 = 20.0;

    /// Zombie
    pub const ZOMBIE_WIDTH: f32 = 50.0;
    pub const ZOMBIE_HEIGHT: f32 = 80.0;
    pub const ZOMBIE_SPEED: f32 = 1.0;
    pub const ZOMBIE_HEALTH: f32 = 100.0;
    pub const ZOMBIE_CONTACT_DAMAGE: f32 = 0.5;
    /// Offset from the zombie origin used to find the cell it is chewing on
    pub const ZOMBIE_REACH: f32 = 50.0;
    /// Zombie x below this ends the run
    pub const LOSS_X: f32 = -50.0;

    /// Plant selection box (top-left HUD)
    pub const SELECT_BOX_X: f32 = 10.0;
    pub const SELECT_BOX_Y: f32 = 10.0;
    pub const SELECT_BOX_SIZE: f32 = 60.0;
}
