//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed tick only, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod cadence;
pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;
pub mod view;

pub use cadence::{Cadence, Cooldown};
pub use collision::Rect;
pub use grid::{Cell, Grid, Occupancy};
pub use state::{
    GamePhase, PlacementError, Plant, PlantKind, PlantSelection, Projectile, Sun, SunState,
    World, Zombie,
};
pub use tick::{TickInput, handle_click, selection_box, tick};
pub use view::{GridView, Layer, Sprite, View};
