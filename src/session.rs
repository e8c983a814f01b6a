//! Owns the game, the snake and the food, and runs one tick at a time.

use std::time::Duration;

use log::{debug, info};
use rand::RngCore;

use crate::canvas::Canvas;
use crate::food::Food;
use crate::game::{Game, Rules};
use crate::input::{action_for, Action};
use crate::snake::{Direction, MoveResult, Snake};
use crate::Arena;

/// A celebration fires every this many points.
pub const CELEBRATE_EVERY: u32 = 10;

/// Called with the new score whenever a celebration is due.
pub type CelebrationHook = Box<dyn FnMut(u32)>;

pub struct Session {
    arena: Arena,
    game: Game,
    snake: Snake,
    food: Food,
    rng: Box<dyn RngCore>,
    dir_change: Option<Direction>,
    on_celebrate: Option<CelebrationHook>,
}

impl Session {
    pub fn new(arena: Arena, rules: Rules, mut rng: Box<dyn RngCore>) -> Self {
        let food = Food::new(&arena, &mut rng);
        Session {
            arena,
            game: Game::new(rules),
            snake: Snake::new(&arena),
            food,
            rng,
            dir_change: None,
            on_celebrate: None,
        }
    }

    pub fn set_celebration_hook(&mut self, hook: CelebrationHook) {
        self.on_celebrate = Some(hook);
    }

    pub fn start(&mut self) {
        self.game.start();
        self.snake.init(&self.arena);
        self.food.set(&self.arena, &mut self.rng);
        self.dir_change = None;
    }

    /// Applies a browser key code. Unmapped keys are ignored.
    pub fn handle_key(&mut self, key_code: u32) {
        match action_for(key_code) {
            Some(action) => self.handle_action(action),
            None => debug!("Ignoring key code {}", key_code),
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            // Applied on the next move so two presses in one tick cannot reverse the snake
            Action::Turn(dir) => self.dir_change = Some(dir),
            Action::StartGame if self.game.is_over() => self.start(),
            Action::StartGame => self.game.toggle_pause(),
        }
    }

    /// Advances the snake by one cell. Does nothing unless the game is live.
    pub fn move_snake(&mut self) {
        if !self.game.is_live() {
            return;
        }

        if let Some(dir) = self.dir_change.take() {
            self.snake.set_direction(dir);
        }

        match self.snake.move_step(&self.arena, self.food.pos()) {
            MoveResult::Crashed { at } => {
                debug!("Crashed at ({}, {})", at.x, at.y);
                self.game.stop();
            }
            MoveResult::Ate { new_head } => {
                let score = self.game.score_point();
                debug!("Ate at ({}, {}), score {}", new_head.x, new_head.y, score);
                self.food.set(&self.arena, &mut self.rng);

                if score % CELEBRATE_EVERY == 0 {
                    info!("Celebrating {} errors", score);
                    if let Some(hook) = self.on_celebrate.as_mut() {
                        hook(score);
                    }
                }
            }
            MoveResult::Moved { .. } => {}
        }
    }

    /// Clears, updates and renders one frame, and returns how long to wait
    /// before the next one.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) -> Duration {
        self.game.reset_canvas(canvas);

        if !self.game.is_over() {
            if !self.game.is_paused() {
                self.move_snake();
            }
            self.food.draw(canvas);
            self.snake.draw(canvas, &self.arena);
        }

        self.game.draw_score(canvas);
        self.game.draw_message(canvas);

        self.frame_interval()
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.game.fps())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Fixture access for tests and tools.
    #[doc(hidden)]
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Fixture access for tests and tools.
    #[doc(hidden)]
    pub fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }
}
