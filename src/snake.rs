use std::collections::{HashSet, VecDeque};

use crate::canvas::{Canvas, Sprite};
use crate::{Arena, Coord};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn inverse(&self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coord, old_tail: Option<Coord> },
    Ate { new_head: Coord },
    Crashed { at: Coord },
}

pub struct Snake {
    head: Coord,
    direction: Direction,
    // Oldest first, the head is the back.
    sections: VecDeque<Coord>,
    occupied: HashSet<Coord>,
}

impl Snake {
    pub fn new(arena: &Arena) -> Self {
        let mut snake = Snake {
            head: arena.center(),
            direction: Left,
            sections: VecDeque::new(),
            occupied: HashSet::new(),
        };
        snake.init(arena);
        snake
    }

    /// A single section at the centre of the arena, heading left.
    pub fn init(&mut self, arena: &Arena) {
        self.sections.clear();
        self.occupied.clear();
        self.direction = Left;
        self.head = arena.center();
        self.push_head(self.head);
    }

    pub fn head(&self) -> Coord {
        self.head
    }

    pub fn sections(&self) -> impl ExactSizeIterator<Item = &Coord> + '_ {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn occupies(&self, pos: Coord) -> bool {
        self.occupied.contains(&pos)
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.inverse() {
            self.direction = new_direction;
        }
    }

    /// Walls are the canvas edges less half a cell; any current section,
    /// tail included, counts as body.
    pub fn is_collision(&self, pos: Coord, arena: &Arena) -> bool {
        !arena.contains(pos) || self.occupies(pos)
    }

    /// Advances the head one cell. The body is left untouched on a crash.
    pub fn move_step(&mut self, arena: &Arena, food: Coord) -> MoveResult {
        let cell = arena.cell;
        let new_head = match self.direction {
            Up => Coord::new(self.head.x, self.head.y - cell),
            Down => Coord::new(self.head.x, self.head.y + cell),
            Left => Coord::new(self.head.x - cell, self.head.y),
            Right => Coord::new(self.head.x + cell, self.head.y),
        };

        if self.is_collision(new_head, arena) {
            return Crashed { at: new_head };
        }

        self.head = new_head;

        if new_head == food {
            self.push_head(new_head);
            Ate { new_head }
        } else {
            let old_tail = self.pop_tail();
            self.push_head(new_head);
            Moved { new_head, old_tail }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, arena: &Arena) {
        let half = arena.half_cell();
        for pos in &self.sections {
            canvas.draw_sprite(Sprite::Hero, pos.x - half, pos.y - half, arena.cell);
        }
    }

    /// Replaces the body, oldest first. The last section becomes the head.
    /// Fixture setter for tests and tools.
    #[doc(hidden)]
    pub fn set_sections(&mut self, sections: &[Coord], direction: Direction) {
        self.sections.clear();
        self.occupied.clear();
        for &pos in sections {
            self.push_head(pos);
        }
        if let Some(&head) = sections.last() {
            self.head = head;
        }
        self.direction = direction;
    }

    ///////////////////////////////////////////////////////////////////////////

    fn push_head(&mut self, pos: Coord) {
        self.sections.push_back(pos);
        self.occupied.insert(pos);
    }

    fn pop_tail(&mut self) -> Option<Coord> {
        let tail = self.sections.pop_front()?;
        self.occupied.remove(&tail);
        Some(tail)
    }
}
