#![allow(dead_code)]

use errorsnake::canvas::{Canvas, ScoreDisplay, Sprite, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Sprite { sprite: Sprite, x: i32, y: i32, size: i32 },
    Text { text: String, x: i32, y: i32, style: TextStyle },
}

/// Remembers everything drawn since the last `clear`.
pub struct RecordingCanvas {
    pub width: i32,
    pub height: i32,
    pub ops: Vec<Op>,
    pub score_display: Option<ScoreDisplay>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        RecordingCanvas { width, height, ops: vec![], score_display: Some(ScoreDisplay::default()) }
    }

    pub fn without_score_display(width: i32, height: i32) -> Self {
        RecordingCanvas { score_display: None, ..Self::new(width, height) }
    }

    pub fn sprites(&self, which: Sprite) -> Vec<(i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Sprite { sprite, x, y, .. } if *sprite == which => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn score_text(&self) -> Option<&str> {
        self.score_display.as_ref().map(|d| d.text())
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(Op::Clear);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32, size: i32) {
        self.ops.push(Op::Sprite { sprite, x, y, size });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle) {
        self.ops.push(Op::Text { text: text.to_string(), x, y, style: *style });
    }

    fn score_display(&mut self) -> Option<&mut ScoreDisplay> {
        self.score_display.as_mut()
    }
}
