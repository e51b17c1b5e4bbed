//! Lawn Defense entry point
//!
//! Native headless driver: runs the simulation with a scripted player and
//! prints the final frame as JSON. A windowed front end drives the same
//! `tick`/`View` API.
//!
//! Usage: `lawn-defense [ticks] [tuning.json]`

use glam::Vec2;

use lawn_defense::consts::TICK_RATE;
use lawn_defense::sim::{Cell, SunState, TickInput, View, World, selection_box, tick};
use lawn_defense::tuning::Tuning;

/// Five minutes of play at the nominal tick rate
const DEFAULT_TICKS: u64 = 5 * 60 * TICK_RATE as u64;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let ticks = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid tick count {:?}, using {}", arg, DEFAULT_TICKS);
            DEFAULT_TICKS
        }),
        None => DEFAULT_TICKS,
    };
    let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Lawn Defense (headless) starting, seed {}", seed);

    let mut world = World::new(tuning, seed);
    run(&mut world, ticks);

    log::info!(
        "Stopped at tick {}: {} sun, {} plants, {} zombies{}",
        world.time_ticks,
        world.sun_count,
        world.plants.len(),
        world.zombies.len(),
        if world.is_game_over() { " (game over)" } else { "" }
    );

    match serde_json::to_string_pretty(&View::capture(&world)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize view: {}", e),
    }
}

fn load_tuning(path: &str) -> Tuning {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Using default tuning ({}: {})", path, e);
            Tuning::default()
        }
    }
}

/// Play until the tick budget runs out or the lawn falls
fn run(world: &mut World, ticks: u64) {
    let minute = 60 * TICK_RATE as u64;

    for _ in 0..ticks {
        let input = TickInput {
            click: autoplay_click(world),
            restart: false,
        };
        tick(world, &input);

        if world.is_game_over() {
            break;
        }
        if world.time_ticks.is_multiple_of(minute) {
            log::info!(
                "Minute {}: {} sun, {} plants, {} zombies",
                world.time_ticks / minute,
                world.sun_count,
                world.plants.len(),
                world.zombies.len()
            );
        }
    }
}

/// Scripted player: pick the peashooter, grab landed suns, then plant in the
/// busiest row whenever sun allows
fn autoplay_click(world: &World) -> Option<Vec2> {
    if world.selection.is_none() {
        return Some(center(selection_box().min(), selection_box().size));
    }

    if let Some(sun) = world.suns.iter().find(|s| s.state == SunState::Landed) {
        let bounds = sun.bounds();
        return Some(center(bounds.min(), bounds.size));
    }

    if world.sun_count < world.tuning.plant_cost {
        return None;
    }

    let rows = world.grid.rows();
    let busiest = (0..rows).max_by_key(|&row| {
        // Ties go to the lowest row
        let count = world.zombies.iter().filter(|z| z.row == row).count();
        (count, std::cmp::Reverse(row))
    })?;

    let col = (0..world.grid.cols()).find(|&col| world.grid.is_empty(Cell::new(busiest, col)))?;
    let origin = world.grid.cell_origin(Cell::new(busiest, col));
    Some(center(origin, Vec2::splat(world.grid.cell_size())))
}

fn center(origin: Vec2, size: Vec2) -> Vec2 {
    origin + size / 2.0
}
