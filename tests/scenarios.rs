//! End-to-end play scenarios driven through the public tick API

use glam::Vec2;

use lawn_defense::consts::*;
use lawn_defense::sim::{Cell, GamePhase, PlantKind, Projectile, TickInput, World, tick};

fn idle(world: &mut World, ticks: u32) {
    for _ in 0..ticks {
        tick(world, &TickInput::default());
    }
}

fn click(world: &mut World, x: f32, y: f32) {
    let input = TickInput {
        click: Some(Vec2::new(x, y)),
        ..Default::default()
    };
    tick(world, &input);
}

#[test]
fn test_first_plant_spends_all_starting_sun() {
    let mut world = World::with_seed(11);
    assert_eq!(world.sun_count, 100);

    world.place_plant(Cell::new(0, 0), PlantKind::Peashooter).unwrap();
    assert_eq!(world.sun_count, 0);

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            assert!(world.place_plant(Cell::new(row, col), PlantKind::Peashooter).is_err());
        }
    }
    assert_eq!(world.sun_count, 0);
    assert_eq!(world.plants.len(), 1);
}

#[test]
fn test_single_pea_after_sixty_ticks() {
    let mut world = World::with_seed(11);
    world.place_plant(Cell::new(2, 0), PlantKind::Peashooter).unwrap();
    world.spawn_zombie_in_row(2).unwrap();
    let plant_x = world.plants[0].pos.x;

    idle(&mut world, 60);

    assert!(world.zombies[0].pos.x > plant_x);
    assert_eq!(world.projectiles.len(), 1);
    assert_eq!(world.projectiles[0].pos.x, plant_x + 50.0);
}

#[test]
fn test_zombie_survives_four_hits_dies_on_fifth() {
    let mut world = World::with_seed(11);
    world.spawn_zombie_in_row(0).unwrap();
    world.zombies[0].pos.x = 400.0;
    world.zombies[0].speed = 0.0;

    for hit in 1..=5 {
        let id = world.next_entity_id();
        world
            .projectiles
            .push(Projectile::new(id, Vec2::new(385.0, 120.0), PEA_SPEED, 20.0));
        idle(&mut world, 1);
        assert!(world.projectiles.is_empty(), "pea spent on hit {hit}");

        if hit < 5 {
            assert_eq!(world.zombies.len(), 1);
            assert_eq!(world.zombies[0].health, 100.0 - 20.0 * hit as f32);
        } else {
            assert!(world.zombies.is_empty());
        }
    }
}

#[test]
fn test_breach_ends_game_and_freezes_positions() {
    let mut world = World::with_seed(11);
    world.sun_count = 300;
    world.place_plant(Cell::new(4, 8), PlantKind::Peashooter).unwrap();
    world.spawn_zombie_in_row(0).unwrap();
    world.spawn_zombie_in_row(4).unwrap();
    world.spawn_sun_at(300.0, 200.0);
    world.zombies[0].pos.x = -49.0;

    idle(&mut world, 2);
    assert_eq!(world.phase, GamePhase::GameOver);

    let zombies: Vec<Vec2> = world.zombies.iter().map(|z| z.pos).collect();
    let suns: Vec<Vec2> = world.suns.iter().map(|s| s.pos).collect();
    let peas: Vec<Vec2> = world.projectiles.iter().map(|p| p.pos).collect();

    idle(&mut world, 500);

    assert_eq!(world.zombies.iter().map(|z| z.pos).collect::<Vec<_>>(), zombies);
    assert_eq!(world.suns.iter().map(|s| s.pos).collect::<Vec<_>>(), suns);
    assert_eq!(world.projectiles.iter().map(|p| p.pos).collect::<Vec<_>>(), peas);

    // Restart brings back a fresh lawn
    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut world, &restart);
    assert_eq!(world.phase, GamePhase::Playing);
    assert_eq!(world.sun_count, STARTING_SUN);
    assert!(world.zombies.is_empty());
    assert!(world.plants.is_empty());
    assert_eq!(world.grid.occupied_count(), 0);
}

#[test]
fn test_lone_peashooter_holds_its_lane() {
    let mut world = World::with_seed(11);
    click(&mut world, 40.0, 40.0);
    // Cell (1, 0)
    click(&mut world, 40.0, 220.0);
    assert_eq!(world.plants.len(), 1);

    world.spawn_zombie_in_row(1).unwrap();
    // A zombie needs 5 hits at one pea per 60 ticks, it is long dead
    // before walking the 700px to the plant
    idle(&mut world, 500);

    assert!(world.zombies.iter().all(|z| z.row != 1));
    assert_eq!(world.plants[0].health, PLANT_HEALTH);
}

#[test]
fn test_zombie_chews_plant_then_breaks_through() {
    let mut world = World::with_seed(11);
    world.place_plant(Cell::new(3, 0), PlantKind::Peashooter).unwrap();
    // Zombie starts level with the plant, so the plant never has a target ahead
    world.spawn_zombie_in_row(3).unwrap();
    world.zombies[0].pos.x = 0.0;

    let mut saw_damage = false;
    for _ in 0..200 {
        idle(&mut world, 1);
        if world.plants.first().is_some_and(|p| p.health < PLANT_HEALTH) {
            saw_damage = true;
        }
        if world.is_game_over() {
            break;
        }
    }

    assert!(saw_damage);
    assert!(world.is_game_over());
    assert!(world.projectiles.is_empty());
    // 50 ticks of contact before the zombie walks off the lawn
    assert_eq!(world.plants[0].health, PLANT_HEALTH - 50.0 * ZOMBIE_CONTACT_DAMAGE);
    assert!(world.occupancy_consistent());
}

#[test]
fn test_collected_sun_pays_for_second_plant() {
    let mut world = World::with_seed(11);
    world.place_plant(Cell::new(0, 0), PlantKind::Peashooter).unwrap();
    for i in 0..4 {
        world.spawn_sun_at(100.0 + 100.0 * i as f32, 150.0);
    }
    idle(&mut world, 100);

    for i in 0..4 {
        let x = 110.0 + 100.0 * i as f32;
        click(&mut world, x, 160.0);
    }
    assert_eq!(world.sun_count, 100);
    assert!(world.suns.is_empty());

    world.place_plant(Cell::new(4, 4), PlantKind::Peashooter).unwrap();
    assert_eq!(world.sun_count, 0);
}
