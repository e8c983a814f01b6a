use log::{debug, error, info};

use crate::canvas::{Canvas, Rgb, TextStyle};

pub const START_MESSAGE: &str = "Press Space to Start";
pub const GAME_OVER_MESSAGE: &str = "GAME OVER";
pub const PAUSED_MESSAGE: &str = "Press space to continue";

const PAUSED_TITLE: &str = "Paused";
const PAUSED_HINT: &str = "Press Space to Continue";

/// Frame rate before the first game is started.
const IDLE_FPS: f64 = 5.0;

/// How the frame rate ramps up as the score grows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rules {
    pub base_fps: f64,
    /// The frame rate goes up once every this many points.
    pub speed_every: u32,
    pub speed_step: f64,
    pub max_fps: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Rules { base_fps: 8.0, speed_every: 5, speed_step: 1.0, max_fps: 60.0 }
    }
}

pub struct Game {
    score: u32,
    fps: f64,
    over: bool,
    paused: bool,
    message: Option<String>,
    rules: Rules,
}

impl Game {
    pub fn new(rules: Rules) -> Self {
        Game {
            score: 0,
            fps: IDLE_FPS,
            over: true,
            paused: false,
            message: Some(START_MESSAGE.to_string()),
            rules,
        }
    }

    /// Resets the round. The caller re-initialises the snake and the food.
    pub fn start(&mut self) {
        self.over = false;
        self.paused = false;
        self.message = None;
        self.score = 0;
        self.fps = self.rules.base_fps;
        info!("Game started at {} fps", self.fps);
    }

    pub fn stop(&mut self) {
        self.over = true;
        self.message = Some(GAME_OVER_MESSAGE.to_string());
        info!("Game over with {} errors", self.score);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.message = if self.paused { Some(PAUSED_MESSAGE.to_string()) } else { None };
        debug!("Paused: {}", self.paused);
    }

    /// Counts one eaten food and speeds up on every `speed_every`th point.
    /// Returns the new score.
    pub fn score_point(&mut self) -> u32 {
        self.score += 1;

        let every = self.rules.speed_every.max(1);
        if self.score % every == 0 && self.fps < self.rules.max_fps {
            self.fps = (self.fps + self.rules.speed_step).min(self.rules.max_fps);
            debug!("Score {} raised the frame rate to {}", self.score, self.fps);
        }

        self.score
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_live(&self) -> bool {
        !self.over && !self.paused
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn reset_canvas(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
    }

    pub fn draw_score(&self, canvas: &mut dyn Canvas) {
        match canvas.score_display() {
            Some(display) => display.set_text(&format!("Errors: {}", self.score)),
            None => error!("Score display not found, score is {}", self.score),
        }

        let (w, h) = (canvas.width(), canvas.height());
        let style = TextStyle { fill: Rgb::GREY, stroke: Rgb::BLACK, font_px: h, background: true };
        canvas.draw_text(&self.score.to_string(), w / 2, h / 2, &style);
    }

    pub fn draw_message(&self, canvas: &mut dyn Canvas) {
        let message = match &self.message {
            Some(m) => m,
            None => return,
        };

        let (w, h) = (canvas.width(), canvas.height());
        let mut style = TextStyle { fill: Rgb::BLUE, stroke: Rgb::WHITE, font_px: h / 12, background: false };

        if self.paused {
            canvas.draw_text(PAUSED_TITLE, w / 2, h / 2 - 30, &style);
            style.font_px = h / 20;
            canvas.draw_text(PAUSED_HINT, w / 2, h / 2 + 20, &style);
        } else {
            canvas.draw_text(message, w / 2, h / 2, &style);
        }
    }
}
