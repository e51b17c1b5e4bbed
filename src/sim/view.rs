//! Render-ready snapshot of the world
//!
//! Everything a front end needs to draw one frame, in draw order. Nothing
//! here feeds back into the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{PlantKind, World};
use super::tick::selection_box;

/// Draw layer, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    Sun,
    Plant,
    Projectile,
    Zombie,
}

/// One thing to draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub layer: Layer,
    pub id: u32,
    pub bounds: Rect,
}

/// Lawn geometry for grid-line drawing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridView {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub top: f32,
    /// Y of the bottom edge of the last row
    pub bottom: f32,
    /// Playfield size
    pub width: f32,
    pub height: f32,
}

impl GridView {
    /// Grid line segments: horizontal row boundaries across the full width,
    /// then vertical column boundaries from the grid top to the bottom edge
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        let horizontal = (0..=self.rows).map(|row| {
            let y = self.top + row as f32 * self.cell_size;
            (Vec2::new(0.0, y), Vec2::new(self.width, y))
        });
        let vertical = (0..=self.cols).map(|col| {
            let x = col as f32 * self.cell_size;
            (Vec2::new(x, self.top), Vec2::new(x, self.height))
        });
        horizontal.chain(vertical).collect()
    }
}

/// Per-frame snapshot handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    pub tick: u64,
    /// HUD sun counter
    pub sun_count: u32,
    /// Show the game-over overlay
    pub game_over: bool,
    pub grid: GridView,
    /// Plant picker in the HUD
    pub select_box: Rect,
    /// Price label drawn in the picker
    pub plant_cost: u32,
    pub plant_selected: bool,
    /// Sprites sorted by layer, spawn order within a layer
    pub sprites: Vec<Sprite>,
}

impl View {
    pub fn capture(world: &World) -> Self {
        let suns = world
            .suns
            .iter()
            .filter(|s| !s.is_collected())
            .map(|s| Sprite {
                layer: Layer::Sun,
                id: s.id,
                bounds: s.bounds(),
            });
        let plants = world.plants.iter().map(|p| Sprite {
            layer: Layer::Plant,
            id: p.id,
            bounds: p.bounds(),
        });
        let peas = world.projectiles.iter().map(|p| Sprite {
            layer: Layer::Projectile,
            id: p.id,
            bounds: p.bounds(),
        });
        let zombies = world.zombies.iter().map(|z| Sprite {
            layer: Layer::Zombie,
            id: z.id,
            bounds: z.bounds(),
        });

        Self {
            tick: world.time_ticks,
            sun_count: world.sun_count,
            game_over: world.is_game_over(),
            grid: GridView {
                rows: world.grid.rows(),
                cols: world.grid.cols(),
                cell_size: world.grid.cell_size(),
                top: world.grid.top(),
                bottom: world.tuning.grid_bottom(),
                width: world.tuning.width,
                height: world.tuning.height,
            },
            select_box: selection_box(),
            plant_cost: world.cost_of(PlantKind::Peashooter),
            plant_selected: world.selection.is_some(),
            sprites: suns.chain(plants).chain(peas).chain(zombies).collect(),
        }
    }

    /// Sprites on one layer
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().filter(move |s| s.layer == layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Cell;

    #[test]
    fn test_sprites_in_layer_order() {
        let mut world = World::with_seed(5);
        world.spawn_zombie_in_row(0);
        world.place_plant(Cell::new(0, 0), PlantKind::Peashooter).unwrap();
        world.spawn_sun_at(300.0, 200.0);

        let view = View::capture(&world);
        let layers: Vec<Layer> = view.sprites.iter().map(|s| s.layer).collect();
        assert_eq!(layers, vec![Layer::Sun, Layer::Plant, Layer::Zombie]);
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(view.layer(Layer::Plant).count(), 1);
    }

    #[test]
    fn test_hud_values() {
        let mut world = World::with_seed(5);
        world.select(PlantKind::Peashooter);
        let view = View::capture(&world);
        assert_eq!(view.sun_count, 100);
        assert_eq!(view.plant_cost, 100);
        assert!(view.plant_selected);
        assert!(!view.game_over);
        assert_eq!(view.select_box, Rect::new(10.0, 10.0, 60.0, 60.0));
    }

    #[test]
    fn test_grid_lines() {
        let world = World::with_seed(5);
        let view = View::capture(&world);
        let lines = view.grid.lines();
        // 6 row boundaries + 10 column boundaries
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], (Vec2::new(0.0, 100.0), Vec2::new(800.0, 100.0)));
        assert_eq!(lines[5], (Vec2::new(0.0, 500.0), Vec2::new(800.0, 500.0)));
        assert_eq!(lines[5].0.y, view.grid.bottom);
        assert_eq!(lines[6], (Vec2::new(0.0, 100.0), Vec2::new(0.0, 600.0)));
        assert_eq!(lines[15], (Vec2::new(720.0, 100.0), Vec2::new(720.0, 600.0)));
    }

    #[test]
    fn test_view_serializes() {
        let mut world = World::with_seed(5);
        world.spawn_zombie_in_row(1);
        let json = serde_json::to_string(&View::capture(&world)).unwrap();
        assert!(json.contains("\"Zombie\""));
        assert!(json.contains("\"sun_count\":100"));
    }
}
