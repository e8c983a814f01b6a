pub mod canvas;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod session;
pub mod snake;
pub mod term;

/// Number of grid cells across the width of the canvas.
pub const CELLS_ACROSS: i32 = 40;

/// A pixel position on the canvas. Snake segments and food sit on cell centres.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

/// Pixel dimensions of the drawing surface and the size of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl Arena {
    pub fn new(width: i32, height: i32) -> Self {
        Arena { width, height, cell: width / CELLS_ACROSS }
    }

    pub fn half_cell(&self) -> i32 {
        self.cell / 2
    }

    /// The cell centre just below and right of the middle of the canvas.
    pub fn center(&self) -> Coord {
        Coord::new(self.width / 2 + self.half_cell(), self.height / 2 + self.half_cell())
    }

    pub fn contains(&self, pos: Coord) -> bool {
        let half = self.half_cell();
        pos.x >= half && pos.x < self.width && pos.y >= half && pos.y < self.height
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_a_fortieth_of_the_width() {
        assert_eq!(Arena::new(400, 400).cell, 10);
        assert_eq!(Arena::new(800, 300).cell, 20);
    }

    #[test]
    fn center_is_offset_by_half_a_cell() {
        assert_eq!(Arena::new(400, 400).center(), Coord::new(205, 205));
        assert_eq!(Arena::new(400, 300).center(), Coord::new(205, 155));
    }

    #[test]
    fn contains_respects_the_half_cell_margin() {
        let arena = Arena::new(400, 400);
        assert!(arena.contains(Coord::new(5, 5)));
        assert!(arena.contains(Coord::new(395, 395)));
        assert!(!arena.contains(Coord::new(4, 200)));
        assert!(!arena.contains(Coord::new(200, -5)));
        assert!(!arena.contains(Coord::new(400, 200)));
        assert!(!arena.contains(Coord::new(200, 400)));
    }

    #[test]
    fn grid_dimensions() {
        let arena = Arena::new(400, 300);
        assert_eq!(arena.columns(), 40);
        assert_eq!(arena.rows(), 30);
    }
}
