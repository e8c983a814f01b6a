//! The drawing surface the game renders onto.
//!
//! Everything is measured in canvas pixels. A host (the terminal, or a test
//! recorder) decides how pixels end up on screen.

/// A fill or stroke colour, written the way the game's palette is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#999`
    pub const GREY: Rgb = Rgb(0x99, 0x99, 0x99);
    /// `#00F`
    pub const BLUE: Rgb = Rgb(0x00, 0x00, 0xFF);
    /// `#FFF`
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    /// `#000`
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
}

/// Image assets blitted as squares of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Hero,
    Error,
}

impl Sprite {
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Hero => "hero.png",
            Sprite::Error => "error.png",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub fill: Rgb,
    pub stroke: Rgb,
    pub font_px: i32,
    /// Drawn behind sprites instead of over them.
    pub background: bool,
}

/// The external element showing `Errors: {score}` next to the canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreDisplay {
    text: String,
}

impl ScoreDisplay {
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An immediate-mode 2D surface. Nothing drawn survives `clear`.
pub trait Canvas {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn clear(&mut self);

    /// Blits `sprite` as a `size`×`size` square whose top-left corner is `(x, y)`.
    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32, size: i32);

    /// Draws `text` horizontally centred on `x` with its baseline at `y`,
    /// filled and then stroked.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle);

    /// The score element, if the host has one.
    fn score_display(&mut self) -> Option<&mut ScoreDisplay>;
}
