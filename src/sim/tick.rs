//! Fixed-step simulation tick
//!
//! Core game loop that advances the world one frame at a time.

use glam::Vec2;

use super::collision::Rect;
use super::grid::{Cell, Occupancy};
use super::state::{GamePhase, PlantKind, Projectile, World};
use crate::consts::*;

/// Input gathered by the front end for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer click position, in playfield pixels
    pub click: Option<Vec2>,
    /// Restart request (only honored after game over)
    pub restart: bool,
}

/// Box in the HUD that selects the peashooter
pub fn selection_box() -> Rect {
    Rect::new(SELECT_BOX_X, SELECT_BOX_Y, SELECT_BOX_SIZE, SELECT_BOX_SIZE)
}

/// Apply input, then advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput) {
    if let Some(pos) = input.click {
        handle_click(world, pos);
    }

    if !world.is_game_over() {
        step(world);
    }

    if input.restart {
        world.reset();
    }
}

/// Resolve a pointer click: collect sun, pick a plant, then plant it
pub fn handle_click(world: &mut World, pos: Vec2) {
    world.collect_sun(pos);

    // Edges count as inside the selection box
    let select = selection_box();
    let (min, max) = (select.min(), select.max());
    if pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y {
        world.select(PlantKind::Peashooter);
    }

    let Some(kind) = world.selection else {
        return;
    };
    let Some(cell) = world.grid.cell_at(pos) else {
        return;
    };
    if let Err(err) = world.place_plant(cell, kind) {
        log::debug!("Placement ignored: {}", err);
    }
}

/// One simulation step: spawn, move, collide, damage, clean up
fn step(world: &mut World) {
    world.time_ticks += 1;

    run_cadences(world);

    for sun in &mut world.suns {
        sun.update();
    }

    let fired = update_plants(world);
    update_projectiles(world);
    world.projectiles.extend(fired);
    update_zombies(world);

    world.compact();
}

fn run_cadences(world: &mut World) {
    if world.sun_cadence.advance() {
        world.spawn_sun();
    }
    if world.zombie_cadence.advance() {
        world.spawn_zombie();
    }
}

/// Tick plant cooldowns and fire at zombies ahead in the same row.
///
/// Returns the new peas; they join the live set after this tick's
/// projectile pass.
fn update_plants(world: &mut World) -> Vec<Projectile> {
    let mut muzzles = Vec::new();

    for plant in &mut world.plants {
        plant.update();
        if !plant.cooldown.is_ready() {
            continue;
        }
        let target_ahead = world
            .zombies
            .iter()
            .any(|z| !z.is_dead() && z.row == plant.cell.row && z.pos.x > plant.pos.x);
        if target_ahead {
            muzzles.push(plant.muzzle());
            plant.cooldown.reset();
        }
    }

    let (speed, damage) = (world.tuning.pea_speed, world.tuning.pea_damage);
    muzzles
        .into_iter()
        .map(|pos| Projectile::new(world.next_entity_id(), pos, speed, damage))
        .collect()
}

/// Move peas, drop the ones that left the field, apply hits
fn update_projectiles(world: &mut World) {
    let right_edge = world.tuning.width;

    for pea in &mut world.projectiles {
        if pea.update(right_edge) {
            pea.spent = true;
            continue;
        }

        let bounds = pea.bounds();
        let Some(zombie) = world
            .zombies
            .iter_mut()
            .find(|z| !z.is_dead() && z.bounds().overlaps(&bounds))
        else {
            continue;
        };

        if zombie.take_damage(pea.damage) {
            log::debug!("Zombie {} destroyed by pea {}", zombie.id, pea.id);
        }
        pea.spent = true;
    }
}

/// Walk zombies forward, end the run on a breach, chew on plants
fn update_zombies(world: &mut World) {
    let loss_x = world.tuning.loss_x;

    for zombie in &mut world.zombies {
        if zombie.is_dead() {
            continue;
        }

        if zombie.update(loss_x) {
            world.phase = GamePhase::GameOver;
            log::info!(
                "Zombie {} broke through row {} at tick {}: game over",
                zombie.id,
                zombie.row,
                world.time_ticks
            );
            break;
        }

        let Some(col) = world.grid.col_at(zombie.reach_x()) else {
            continue;
        };
        let cell = Cell::new(zombie.row, col);
        if !world.grid.is_occupied(cell) {
            continue;
        }

        if let Some(plant) = world
            .plants
            .iter_mut()
            .find(|p| p.cell == cell && !p.is_dead())
        {
            if plant.take_damage(zombie.contact_damage) {
                world.grid.set(cell, Occupancy::Empty);
                log::info!("Plant {} at ({}, {}) eaten", plant.id, cell.row, cell.col);
            }
        }
    }
}
