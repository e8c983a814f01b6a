use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyEvent, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::Arena;
use crate::canvas::{Canvas, Rgb, ScoreDisplay, Sprite, TextStyle};

/// Terminal columns per grid cell, so cells come out roughly square.
const COLUMNS_PER_CELL: i32 = 2;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'X';
const EMPTY_CHAR: char = ' ';

#[derive(Copy, Clone, Debug, PartialEq)]
struct Glyph {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Glyph = Glyph { ch: EMPTY_CHAR, fg: Color::Reset, bg: Color::Reset };

/// A `Canvas` drawn onto the terminal: the arena's grid cells become pairs
/// of character cells and the score display is the row underneath.
pub struct TermCanvas {
    arena: Arena,
    columns: u16,
    rows: u16,
    stdout: Stdout,
    screen: Vec<Glyph>,
    shown: Vec<Glyph>,
    score_display: Option<ScoreDisplay>,
    shown_score: Option<String>,
}

impl TermCanvas {
    /// Fails when the terminal is too small to hold the arena.
    pub fn new(arena: Arena) -> io::Result<Self> {
        let (term_width, term_height) = terminal::size()?;
        Self::with_terminal_size(arena, term_width, term_height)
    }

    fn with_terminal_size(arena: Arena, term_width: u16, term_height: u16) -> io::Result<Self> {
        let columns = arena.columns() * COLUMNS_PER_CELL;
        let rows = arena.rows();

        if columns > term_width as i32 || rows > term_height as i32 {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "terminal is {}x{} but a {}x{} canvas needs {}x{}",
                    term_width, term_height, arena.width, arena.height, columns, rows
                ),
            ));
        }

        let size = columns as usize * rows as usize;
        // The score display needs one spare row below the arena
        let score_display = if rows < term_height as i32 { Some(ScoreDisplay::default()) } else { None };

        Ok(TermCanvas {
            arena,
            columns: columns as u16,
            rows: rows as u16,
            stdout: stdout(),
            screen: vec![BLANK; size],
            shown: vec![BLANK; size],
            score_display,
            shown_score: None,
        })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_events_queue(&self) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Writes every character cell that changed since the last call.
    pub fn present(&mut self) -> io::Result<()> {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let idx = self.index(col, row);
                let glyph = self.screen[idx];
                if glyph != self.shown[idx] {
                    queue!(
                        self.stdout,
                        cursor::MoveTo(col, row),
                        style::SetForegroundColor(glyph.fg),
                        style::SetBackgroundColor(glyph.bg),
                        style::Print(glyph.ch)
                    )?;
                    self.shown[idx] = glyph;
                }
            }
        }

        if let Some(display) = &self.score_display {
            if self.shown_score.as_deref() != Some(display.text()) {
                queue!(
                    self.stdout,
                    cursor::MoveTo(0, self.rows),
                    style::ResetColor,
                    terminal::Clear(ClearType::CurrentLine),
                    style::Print(display.text())
                )?;
                self.shown_score = Some(display.text().to_string());
            }
        }

        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, col: u16, row: u16) -> usize {
        self.columns as usize * row as usize + col as usize
    }

    fn put(&mut self, col: i32, row: i32, glyph: Glyph) {
        if col < 0 || row < 0 || col >= self.columns as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = self.index(col as u16, row as u16);
        self.screen[idx] = glyph;
    }

    fn is_blank(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col >= self.columns as i32 || row >= self.rows as i32 {
            return false;
        }
        self.screen[self.index(col as u16, row as u16)].ch == EMPTY_CHAR
    }
}

impl Canvas for TermCanvas {
    fn width(&self) -> i32 {
        self.arena.width
    }

    fn height(&self) -> i32 {
        self.arena.height
    }

    fn clear(&mut self) {
        self.screen.iter_mut().for_each(|g| *g = BLANK);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32, size: i32) {
        let glyph = match sprite {
            Sprite::Hero => Glyph { ch: SNAKE_BODY_CHAR, fg: Color::Green, bg: Color::Reset },
            Sprite::Error => Glyph { ch: FOOD_CHAR, fg: Color::Red, bg: Color::Reset },
        };
        let cell = self.arena.cell;
        let (first_col, first_row) = (x.div_euclid(cell), y.div_euclid(cell));
        let (last_col, last_row) = ((x + size - 1).div_euclid(cell), (y + size - 1).div_euclid(cell));

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                for sub in 0..COLUMNS_PER_CELL {
                    self.put(col * COLUMNS_PER_CELL + sub, row, glyph);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle) {
        let cell = self.arena.cell;
        let row = y.div_euclid(cell);
        let len = text.chars().count() as i32;
        let start = x.div_euclid(cell) * COLUMNS_PER_CELL - len / 2;
        let (fg, bg) = (to_color(style.fill), to_color(style.stroke));

        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i32;
            if style.background && !self.is_blank(col, row) {
                continue;
            }
            self.put(col, row, Glyph { ch, fg, bg });
        }
    }

    fn score_display(&mut self) -> Option<&mut ScoreDisplay> {
        self.score_display.as_mut()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    fn canvas() -> TermCanvas {
        TermCanvas::with_terminal_size(Arena::new(400, 300), 80, 31).unwrap()
    }

    fn row_text(canvas: &TermCanvas, row: u16) -> String {
        (0..canvas.columns).map(|col| canvas.screen[canvas.index(col, row)].ch).collect()
    }

    #[test]
    fn too_small_terminals_are_rejected() {
        assert!(TermCanvas::with_terminal_size(Arena::new(400, 300), 79, 31).is_err());
        assert!(TermCanvas::with_terminal_size(Arena::new(400, 300), 80, 29).is_err());
    }

    #[test]
    fn score_display_needs_a_spare_row() {
        assert!(canvas().score_display().is_some());
        let mut exact = TermCanvas::with_terminal_size(Arena::new(400, 300), 80, 30).unwrap();
        assert!(exact.score_display().is_none());
    }

    #[test]
    fn sprites_fill_two_columns_per_cell() {
        let mut canvas = canvas();
        let pos = Coord::new(205, 155);
        canvas.draw_sprite(Sprite::Hero, pos.x - 5, pos.y - 5, 10);

        let row = row_text(&canvas, 15);
        assert_eq!(row.chars().nth(40), Some(SNAKE_BODY_CHAR));
        assert_eq!(row.chars().nth(41), Some(SNAKE_BODY_CHAR));
        assert_eq!(row.chars().filter(|c| *c != EMPTY_CHAR).count(), 2);
    }

    #[test]
    fn off_canvas_sprites_are_clipped() {
        let mut canvas = canvas();
        canvas.draw_sprite(Sprite::Error, -10, -10, 10);
        canvas.draw_sprite(Sprite::Error, 400, 300, 10);
        assert!(canvas.screen.iter().all(|g| *g == BLANK));
    }

    #[test]
    fn text_is_centred_on_its_row() {
        let mut canvas = canvas();
        let style = TextStyle { fill: Rgb::BLUE, stroke: Rgb::WHITE, font_px: 25, background: false };
        canvas.draw_text("GAME OVER", 200, 150, &style);

        assert_eq!(row_text(&canvas, 15).trim(), "GAME OVER");
        assert_eq!(row_text(&canvas, 15).find('G'), Some(36));
    }

    #[test]
    fn background_text_stays_behind_sprites() {
        let mut canvas = canvas();
        canvas.draw_sprite(Sprite::Hero, 200, 150, 10);
        let style = TextStyle { fill: Rgb::GREY, stroke: Rgb::BLACK, font_px: 300, background: true };
        canvas.draw_text("12345", 200, 150, &style);

        assert_eq!(row_text(&canvas, 15).trim(), "12██5");
    }

    #[test]
    fn clear_blanks_the_screen() {
        let mut canvas = canvas();
        canvas.draw_sprite(Sprite::Hero, 0, 0, 10);
        canvas.clear();
        assert!(canvas.screen.iter().all(|g| *g == BLANK));
    }
}
