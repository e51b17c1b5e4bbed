//! Lawn grid occupancy
//!
//! Maps each (row, col) cell to whether a plant stands there, and converts
//! between pixel space and cells.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Occupancy of a single lawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Empty,
    Occupied,
}

/// A grid cell address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Fixed rows x cols occupancy map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_size: f32,
    /// Y of the top edge of row 0
    top: f32,
    cells: Vec<Occupancy>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, cell_size: f32, top: f32) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            top,
            cells: vec![Occupancy::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// Occupancy of a cell, `None` when out of bounds
    pub fn get(&self, cell: Cell) -> Option<Occupancy> {
        self.index(cell).map(|i| self.cells[i])
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Some(Occupancy::Empty)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell) == Some(Occupancy::Occupied)
    }

    pub fn set(&mut self, cell: Cell, occupancy: Occupancy) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = occupancy;
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&o| o == Occupancy::Occupied)
            .count()
    }

    /// Column under a pixel x coordinate (floor division)
    pub fn col_at(&self, x: f32) -> Option<usize> {
        let col = (x / self.cell_size).floor();
        (col >= 0.0 && col < self.cols as f32).then_some(col as usize)
    }

    /// Row under a pixel y coordinate (floor division, offset by the grid top)
    pub fn row_at(&self, y: f32) -> Option<usize> {
        let row = ((y - self.top) / self.cell_size).floor();
        (row >= 0.0 && row < self.rows as f32).then_some(row as usize)
    }

    /// Cell under a pixel position, `None` outside the lawn
    pub fn cell_at(&self, pos: Vec2) -> Option<Cell> {
        Some(Cell::new(self.row_at(pos.y)?, self.col_at(pos.x)?))
    }

    /// Pixel y of a row's top edge
    pub fn row_y(&self, row: usize) -> f32 {
        self.top + row as f32 * self.cell_size
    }

    /// Pixel position of a cell's top-left corner
    pub fn cell_origin(&self, cell: Cell) -> Vec2 {
        Vec2::new(cell.col as f32 * self.cell_size, self.row_y(cell.row))
    }
}
