//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously flushed one and only changed runs
//! of cells are re-emitted. The bell is written through the same buffered
//! stream so it never interleaves with a half-drawn frame.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// ASCII BEL, the terminal's audible cue.
const BELL: &str = "\x07";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame flushed; `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Ring the terminal bell.
    pub fn bell(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(BELL))?;
        self.flush_buf()
    }

    /// Draw a framebuffer, then swap it with the renderer's previous frame.
    ///
    /// After the call `fb` holds stale contents of the right size; the caller
    /// re-renders into it next frame so no buffer is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|()| self.stdout.flush())
            .context("write to terminal")
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style = None;
    for y in 0..fb.height() {
        encode_run(fb, 0, y, fb.width(), &mut current_style, out)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style = None;
    for (x, y, len) in changed_runs(prev, next) {
        encode_run(next, x, y, len, &mut current_style, out)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn encode_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current_style: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for cx in x..x + len {
        let cell = fb.get(cx, y).unwrap_or_default();
        if *current_style != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *current_style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal horizontal runs `(x, y, len)` of differing cells, row by row.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let w = next.width();
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut run_start = None;
        for x in 0..=w {
            let differs = x < w && prev.get(x, y) != next.get(x, y);
            match (differs, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    runs.push((start, y, x - start));
                    run_start = None;
                }
                _ => {}
            }
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn mark(fb: &mut FrameBuffer, x: u16, y: u16) {
        fb.set(
            x,
            y,
            Cell {
                ch: 'X',
                style: CellStyle::default(),
            },
        );
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            mark(&mut b, x, 0);
        }
        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_runs_split_and_reach_edge() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        mark(&mut b, 0, 0);
        mark(&mut b, 4, 0);
        mark(&mut b, 5, 0);
        mark(&mut b, 2, 1);
        assert_eq!(changed_runs(&a, &b), vec![(0, 0, 1), (4, 0, 2), (2, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 3);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(!out.contains(&b' '));
    }

    #[test]
    fn full_redraw_prints_every_cell() {
        let mut fb = FrameBuffer::new(3, 2);
        mark(&mut fb, 1, 1);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches('X').count(), 1);
    }

    #[test]
    fn palette_color_conversion() {
        assert_eq!(
            rgb_to_color(Rgb::from_tag(5)),
            Color::Rgb { r: 0xFF, g: 0, b: 0 }
        );
    }
}
