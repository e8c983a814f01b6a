use rand::Rng;

use crate::canvas::{Canvas, Sprite};
use crate::{Arena, Coord};

/// Food columns are picked every fourth cell, rows every third.
const COLUMN_STRIDE: i32 = 4;
const ROW_STRIDE: i32 = 3;
const SLOTS: i32 = 10;

/// Rows of cells the food lattice spans from the top of the arena.
pub const FOOD_ROWS: i32 = ROW_STRIDE * SLOTS;

pub struct Food {
    pos: Coord,
    size: i32,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(arena: &Arena, rng: &mut R) -> Self {
        let mut food = Food { pos: Coord::new(0, 0), size: arena.cell };
        food.set(arena, rng);
        food
    }

    /// Picks a new spot on a coarse lattice in the top-left of the arena.
    /// The snake's body is not taken into account.
    pub fn set<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        let cell = arena.cell;
        let half = arena.half_cell();
        self.size = cell;
        self.pos = Coord::new(
            rng.gen_range(1..=SLOTS) * cell * COLUMN_STRIDE - half,
            rng.gen_range(1..=SLOTS) * cell * ROW_STRIDE - half,
        );
    }

    /// Puts the food at an exact spot. Fixture setter for tests and tools;
    /// the game itself only moves food through `set`.
    #[doc(hidden)]
    pub fn place(&mut self, pos: Coord) {
        self.pos = pos;
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let half = self.size / 2;
        canvas.draw_sprite(Sprite::Error, self.pos.x - half, self.pos.y - half, self.size);
    }
}
