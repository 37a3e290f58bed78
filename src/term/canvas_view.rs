//! CanvasView: maps a core `Canvas` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Canvas, CharMap};
use crate::term::fb::{CellStyle, FrameBuffer, TermColor, Viewport};

/// Renders canvases centered in the viewport with a box border and an
/// optional status line underneath.
pub struct CanvasView {
    charmap: CharMap,
    border: bool,
}

impl CanvasView {
    pub fn new(charmap: CharMap) -> Self {
        Self {
            charmap,
            border: true,
        }
    }

    pub fn without_border(mut self) -> Self {
        self.border = false;
        self
    }

    pub fn charmap(&self) -> &CharMap {
        &self.charmap
    }

    /// Top-left corner of the (bordered) canvas frame within the viewport.
    pub fn origin(&self, canvas: &Canvas, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(canvas);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;
        (x, y)
    }

    pub fn frame_size(&self, canvas: &Canvas) -> (u16, u16) {
        let pad = if self.border { 2 } else { 0 };
        (canvas.width() + pad, canvas.height() + pad)
    }

    /// Render a canvas into a fresh framebuffer sized to the viewport.
    pub fn render(&self, canvas: &Canvas, viewport: Viewport, status: Option<&str>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(&mut fb, canvas, status);
        fb
    }

    /// Render a canvas into an existing framebuffer (cleared first).
    pub fn render_into(&self, fb: &mut FrameBuffer, canvas: &Canvas, status: Option<&str>) {
        fb.clear(Default::default());

        let viewport = Viewport::new(fb.width(), fb.height());
        let (start_x, start_y) = self.origin(canvas, viewport);
        let (frame_w, frame_h) = self.frame_size(canvas);
        let inset = if self.border { 1 } else { 0 };

        if self.border {
            draw_border(fb, start_x, start_y, frame_w, frame_h, border_style());
        }

        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let Some(pixel) = canvas.get(x, y) else {
                    continue;
                };
                let style = CellStyle::fg(match pixel.color {
                    Some(index) => TermColor::Ansi(index),
                    None => TermColor::Default,
                });
                fb.put_char(
                    start_x + inset + x,
                    start_y + inset + y,
                    self.charmap.glyph(pixel.intensity),
                    style,
                );
            }
        }

        if let Some(status) = status {
            let status_y = start_y.saturating_add(frame_h);
            if status_y < viewport.height {
                fb.put_str(start_x, status_y, status, status_style());
            }
        }
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(CharMap::default())
    }
}

pub(crate) fn border_style() -> CellStyle {
    CellStyle::fg(TermColor::Rgb(200, 200, 200))
}

pub(crate) fn status_style() -> CellStyle {
    CellStyle {
        fg: TermColor::Rgb(160, 160, 160),
        bg: TermColor::Default,
        bold: false,
        dim: true,
    }
}

pub(crate) fn draw_border(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: CellStyle,
) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

pub(crate) fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        fg: TermColor::Rgb(255, 255, 255),
        bg: TermColor::Rgb(0, 0, 0),
        bold: true,
        dim: false,
    };
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pixel;

    #[test]
    fn test_glyphs_land_inside_border() {
        let mut canvas = Canvas::new(4, 2);
        canvas.set(0, 0, Pixel::new(255, Some(46)));

        let view = CanvasView::default();
        let fb = view.render(&canvas, Viewport::new(20, 10), None);

        let (ox, oy) = view.origin(&canvas, Viewport::new(20, 10));
        let cell = fb.get(ox + 1, oy + 1).unwrap();
        assert_eq!(cell.ch, '@');
        assert_eq!(cell.style.fg, TermColor::Ansi(46));
        assert_eq!(fb.get(ox, oy).unwrap().ch, '┌');
    }

    #[test]
    fn test_zero_intensity_renders_blank() {
        let canvas = Canvas::new(4, 2);
        let view = CanvasView::default();
        let fb = view.render(&canvas, Viewport::new(20, 10), None);

        let (ox, oy) = view.origin(&canvas, Viewport::new(20, 10));
        assert_eq!(fb.get(ox + 1, oy + 1).unwrap().ch, ' ');
    }

    #[test]
    fn test_status_line_below_frame() {
        let canvas = Canvas::new(4, 2);
        let view = CanvasView::default();
        let fb = view.render(&canvas, Viewport::new(20, 10), Some("frame 3"));

        let (ox, oy) = view.origin(&canvas, Viewport::new(20, 10));
        let (_, fh) = view.frame_size(&canvas);
        assert_eq!(fb.get(ox, oy + fh).unwrap().ch, 'f');
    }

    #[test]
    fn test_viewport_smaller_than_canvas_does_not_panic() {
        let canvas = Canvas::new(40, 20);
        let view = CanvasView::default();
        let fb = view.render(&canvas, Viewport::new(10, 5), Some("s"));
        assert_eq!(fb.width(), 10);
    }
}
