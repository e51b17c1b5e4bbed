//! Game state and core simulation types
//!
//! The [`World`] owns every entity collection and the lawn grid. Entities
//! never reference each other; rows and cells are plain lookups.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cadence::{Cadence, Cooldown};
use super::collision::Rect;
use super::grid::{Cell, Grid, Occupancy};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// A zombie got through; the simulation is frozen until reset
    GameOver,
}

/// Placeable plant kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantKind {
    Peashooter,
}

/// What the pointer will plant on the next lawn click
pub type PlantSelection = Option<PlantKind>;

/// Why a placement request was a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cell ({row}, {col}) is outside the lawn")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) already has a plant")]
    Occupied { row: usize, col: usize },
    #[error("not enough sun: have {have}, need {need}")]
    InsufficientSun { have: u32, need: u32 },
}

/// Sun lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunState {
    Falling,
    Landed,
    Collected,
}

/// A falling sun token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sun {
    pub id: u32,
    pub pos: Vec2,
    /// Y where the sun stops falling
    pub stop_y: f32,
    pub speed: f32,
    pub value: u32,
    pub state: SunState,
}

impl Sun {
    pub fn new(id: u32, x: f32, stop_y: f32, speed: f32, value: u32) -> Self {
        let state = if 0.0 < stop_y {
            SunState::Falling
        } else {
            SunState::Landed
        };
        Self {
            id,
            pos: Vec2::new(x, 0.0),
            stop_y,
            speed,
            value,
            state,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.pos, Vec2::splat(SUN_SIZE))
    }

    /// Fall one step; lands once the stop height is reached
    pub fn update(&mut self) {
        if self.state != SunState::Falling {
            return;
        }
        self.pos.y += self.speed;
        if self.pos.y >= self.stop_y {
            self.state = SunState::Landed;
        }
    }

    /// Collect if `point` is inside the sun. Returns the value credited.
    ///
    /// The sun only flags itself; removing it from the live set is the
    /// caller's job.
    pub fn collect(&mut self, point: Vec2) -> Option<u32> {
        if self.is_collected() || !self.bounds().contains(point) {
            return None;
        }
        self.state = SunState::Collected;
        Some(self.value)
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.state == SunState::Collected
    }
}

/// A placed plant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: u32,
    pub kind: PlantKind,
    /// Top-left corner (the origin of its cell)
    pub pos: Vec2,
    pub cell: Cell,
    pub health: f32,
    pub cooldown: Cooldown,
}

impl Plant {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.pos, Vec2::splat(PLANT_SIZE))
    }

    pub fn update(&mut self) {
        self.cooldown.advance();
    }

    /// Where a fired pea appears
    pub fn muzzle(&self) -> Vec2 {
        self.pos + Vec2::new(PEA_OFFSET_X, PEA_OFFSET_Y)
    }

    /// Apply damage, returns true if this killed the plant
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health -= amount;
        self.is_dead()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

/// A pea in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
    pub damage: f32,
    /// Hit something or left the field; dropped at the end of the tick
    pub spent: bool,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, speed: f32, damage: f32) -> Self {
        Self {
            id,
            pos,
            speed,
            damage,
            spent: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.pos, Vec2::splat(PEA_SIZE))
    }

    /// Move right; returns true once past `right_edge`
    pub fn update(&mut self, right_edge: f32) -> bool {
        self.pos.x += self.speed;
        self.pos.x > right_edge
    }
}

/// An advancing zombie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub pos: Vec2,
    pub row: usize,
    pub health: f32,
    pub speed: f32,
    /// Damage dealt to a plant every tick of contact
    pub contact_damage: f32,
}

impl Zombie {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.pos, Vec2::new(ZOMBIE_WIDTH, ZOMBIE_HEIGHT))
    }

    /// Walk left; returns true once past `loss_x`
    pub fn update(&mut self, loss_x: f32) -> bool {
        self.pos.x -= self.speed;
        self.pos.x < loss_x
    }

    /// X used to find the cell the zombie is eating
    #[inline]
    pub fn reach_x(&self) -> f32 {
        self.pos.x + ZOMBIE_REACH
    }

    /// Apply damage, returns true if this killed the zombie
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health -= amount;
        self.is_dead()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Balance values this world was built from
    pub tuning: Tuning,
    /// Seed the RNG was created with
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Sun available to spend
    pub sun_count: u32,
    pub selection: PlantSelection,
    pub sun_cadence: Cadence,
    pub zombie_cadence: Cadence,
    pub grid: Grid,
    /// Live entities, in spawn order
    pub suns: Vec<Sun>,
    pub plants: Vec<Plant>,
    pub projectiles: Vec<Projectile>,
    pub zombies: Vec<Zombie>,
    /// Not serialized; a loaded world restarts the stream from `seed`
    #[serde(skip, default = "unseeded_rng")]
    pub(crate) rng: Pcg32,
    next_id: u32,
}

fn unseeded_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl World {
    /// Create a new world with the given tuning and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            sun_count: tuning.starting_sun,
            selection: None,
            sun_cadence: Cadence::new(tuning.sun_spawn_period),
            zombie_cadence: Cadence::new(tuning.zombie_spawn_period),
            grid: Grid::new(tuning.rows, tuning.cols, tuning.cell_size, tuning.grid_top),
            suns: Vec::new(),
            plants: Vec::new(),
            projectiles: Vec::new(),
            zombies: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        }
    }

    /// Load a world saved with `serde_json`, reseeding its RNG from `seed`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut world: World = serde_json::from_str(json)?;
        world.rng = Pcg32::seed_from_u64(world.seed);
        Ok(world)
    }

    /// Create a world with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), seed)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Choose what the next lawn click plants
    pub fn select(&mut self, kind: PlantKind) {
        self.selection = Some(kind);
    }

    /// Cost of a plant kind under this world's tuning
    pub fn cost_of(&self, kind: PlantKind) -> u32 {
        match kind {
            PlantKind::Peashooter => self.tuning.plant_cost,
        }
    }

    /// Spawn a sun at a random x with a random stop height
    pub fn spawn_sun(&mut self) -> u32 {
        let margin = self.tuning.sun_spawn_margin;
        let x = self
            .rng
            .random_range(margin..=self.tuning.width - margin)
            .floor();
        let stop_y = self
            .rng
            .random_range(self.tuning.sun_stop_min_y..=self.tuning.sun_stop_max_y)
            .floor();
        self.spawn_sun_at(x, stop_y)
    }

    /// Spawn a sun at `x` that stops falling at `stop_y`
    pub fn spawn_sun_at(&mut self, x: f32, stop_y: f32) -> u32 {
        let id = self.next_entity_id();
        let sun = Sun::new(
            id,
            x,
            stop_y,
            self.tuning.sun_fall_speed,
            self.tuning.sun_value,
        );
        log::debug!("Sun {} spawned at x={} (stops at y={})", id, x, stop_y);
        self.suns.push(sun);
        id
    }

    /// Spawn a zombie in a random row
    pub fn spawn_zombie(&mut self) -> u32 {
        let row = self.rng.random_range(0..self.grid.rows());
        let id = self.next_entity_id();
        self.push_zombie(id, row);
        id
    }

    /// Spawn a zombie at the right edge of `row`, `None` if the row does not exist
    pub fn spawn_zombie_in_row(&mut self, row: usize) -> Option<u32> {
        if row >= self.grid.rows() {
            return None;
        }
        let id = self.next_entity_id();
        self.push_zombie(id, row);
        Some(id)
    }

    fn push_zombie(&mut self, id: u32, row: usize) {
        let zombie = Zombie {
            id,
            pos: Vec2::new(self.tuning.width, self.grid.row_y(row)),
            row,
            health: self.tuning.zombie_health,
            speed: self.tuning.zombie_speed,
            contact_damage: self.tuning.zombie_contact_damage,
        };
        log::info!("Zombie {} entering row {}", id, row);
        self.zombies.push(zombie);
    }

    /// Place a plant at `cell`, paying its cost
    ///
    /// Rejected requests leave the world untouched.
    pub fn place_plant(&mut self, cell: Cell, kind: PlantKind) -> Result<u32, PlacementError> {
        let Cell { row, col } = cell;
        match self.grid.get(cell) {
            None => return Err(PlacementError::OutOfBounds { row, col }),
            Some(Occupancy::Occupied) => return Err(PlacementError::Occupied { row, col }),
            Some(Occupancy::Empty) => {}
        }

        let cost = self.cost_of(kind);
        if self.sun_count < cost {
            return Err(PlacementError::InsufficientSun {
                have: self.sun_count,
                need: cost,
            });
        }

        let id = self.next_entity_id();
        self.plants.push(Plant {
            id,
            kind,
            pos: self.grid.cell_origin(cell),
            cell,
            health: self.tuning.plant_health,
            cooldown: Cooldown::new(self.tuning.plant_fire_period),
        });
        self.grid.set(cell, Occupancy::Occupied);
        self.sun_count -= cost;
        log::info!(
            "Planted {:?} {} at ({}, {}), sun left: {}",
            kind,
            id,
            row,
            col,
            self.sun_count
        );
        Ok(id)
    }

    /// Collect the first live sun under `point`. Returns the value credited.
    pub fn collect_sun(&mut self, point: Vec2) -> Option<u32> {
        let value = self.suns.iter_mut().find_map(|sun| sun.collect(point))?;
        self.sun_count += value;
        self.suns.retain(|sun| !sun.is_collected());
        log::debug!("Collected {} sun, total {}", value, self.sun_count);
        Some(value)
    }

    /// Live plant standing in `cell`
    pub fn plant_at(&self, cell: Cell) -> Option<&Plant> {
        self.plants.iter().find(|p| p.cell == cell && !p.is_dead())
    }

    /// Start a fresh run. Only allowed once the game is over.
    ///
    /// The RNG stream carries on so the next run differs from the last.
    pub fn reset(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        let rng = self.rng.clone();
        *self = Self::new(self.tuning.clone(), self.seed);
        self.rng = rng;
        log::info!("World reset");
        true
    }

    /// Drop every entity flagged as gone during this tick
    pub fn compact(&mut self) {
        self.suns.retain(|s| !s.is_collected());
        self.plants.retain(|p| !p.is_dead());
        self.projectiles.retain(|p| !p.spent);
        self.zombies.retain(|z| !z.is_dead());
    }

    /// True when every occupied cell holds exactly one live plant and every
    /// live plant's cell is occupied
    pub fn occupancy_consistent(&self) -> bool {
        let live: Vec<&Plant> = self.plants.iter().filter(|p| !p.is_dead()).collect();
        if live.len() != self.grid.occupied_count() {
            return false;
        }
        live.iter().all(|p| {
            self.grid.is_occupied(p.cell) && live.iter().filter(|q| q.cell == p.cell).count() == 1
        })
    }
}
