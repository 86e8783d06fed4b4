//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Particle};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellTag, CELL_SIZE, EMPTY, GRID_HEIGHT, GRID_WIDTH};

const BLOCK: char = '█';
const PARTICLE: char = '*';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Which host screen is drawn over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
    GameOver,
}

/// A lightweight terminal renderer for the block-falling game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Outer rectangle of the bordered play field, border included.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);

fn text_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), BOARD_BG)
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        screen: Screen,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(text_style().into_cell(' '));

        let board_w = u16::from(GRID_WIDTH) * self.cell_w;
        let board_h = u16::from(GRID_HEIGHT) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_w + 2) / 2,
            y: viewport.height.saturating_sub(board_h + 2) / 2,
            w: board_w + 2,
            h: board_h + 2,
        };

        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                self.draw_cell(fb, frame, x as i8, y as i8, tag);
            }
        }

        if screen == Screen::Playing {
            if let Some(active) = snap.active {
                for (x, y) in active.cells() {
                    self.draw_cell(fb, frame, x, y, active.color);
                }
            }
        }

        for particle in &snap.particles {
            self.draw_particle(fb, frame, particle);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match screen {
            Screen::Title => self.draw_overlay(
                fb,
                frame,
                &[("BLOCKFALL", None), ("", None), ("ENTER: start", None), ("Q: quit", None)],
            ),
            Screen::GameOver => self.draw_overlay(
                fb,
                frame,
                &[
                    ("GAME OVER", None),
                    ("", None),
                    ("SCORE ", Some(snap.score)),
                    ("LEVEL ", Some(snap.level)),
                    ("", None),
                    ("ENTER: restart", None),
                    ("SPACE: quit", None),
                ],
            ),
            Screen::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, screen: Screen, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, screen, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    /// Draw one grid cell; coordinates outside the grid are skipped.
    fn draw_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, tag: CellTag) {
        if x < 0 || y < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return;
        }
        let (ch, style) = if tag == EMPTY {
            ('·', CellStyle::new(Rgb::new(60, 60, 70), BOARD_BG).dim())
        } else {
            (BLOCK, CellStyle::new(Rgb::from_tag(tag), BOARD_BG))
        };
        let px = f.x + 1 + x as u16 * self.cell_w;
        let py = f.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Particles live in pixel space; map them onto the cell they fall through.
    fn draw_particle(&self, fb: &mut FrameBuffer, f: Frame, p: &Particle) {
        if p.x < 0.0 || p.y < 0.0 {
            return;
        }
        let cx = (p.x / f32::from(CELL_SIZE)) as u16;
        let cy = (p.y / f32::from(CELL_SIZE)) as u16;
        if cx >= u16::from(GRID_WIDTH) || cy >= u16::from(GRID_HEIGHT) {
            return;
        }
        let style = CellStyle::new(Rgb::from_tag(p.color), BOARD_BG).bold();
        fb.put_char(f.x + 1 + cx * self.cell_w, f.y + 1 + cy * self.cell_h, PARTICLE, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = text_style().bold();
        let value = text_style();

        fb.put_str(panel_x, f.y, "SCORE", label);
        fb.put_u32(panel_x, f.y + 1, snap.score, value);
        fb.put_str(panel_x, f.y + 3, "LEVEL", label);
        fb.put_u32(panel_x, f.y + 4, snap.level, value);
    }

    /// Centered lines over the play field; a number, when given, follows its label.
    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[(&str, Option<u32>)]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
        let top = (f.y + f.h / 2).saturating_sub(lines.len() as u16 / 2);

        for (i, (text, number)) in lines.iter().enumerate() {
            let y = top + i as u16;
            let width = text.chars().count() as u16 + number.map_or(0, digit_count);
            let x = f.x + f.w.saturating_sub(width) / 2;

            // Blank the whole interior row so the board does not show through.
            fb.fill_rect(f.x + 1, y, f.w - 2, 1, ' ', style);
            fb.put_str(x, y, text, style);
            if let Some(n) = *number {
                fb.put_u32(x + text.chars().count() as u16, y, n, style);
            }
        }
    }
}

fn digit_count(n: u32) -> u16 {
    n.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn test_cell_size_clamped() {
        let view = GameView::new(0, 0);
        assert_eq!((view.cell_w, view.cell_h), (1, 1));
    }
}
