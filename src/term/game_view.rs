//! GameView: maps the game model into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. Each grid cell renders
//! as 2 terminal columns by 1 row to compensate for glyph aspect ratio; the
//! board is centered in the viewport with a box-drawing border, and a side
//! panel shows score, level, lines and the next piece preview.

use crate::core::GameModel;
use crate::term::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

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

/// Foreground for a locked or falling cell of the given color identity.
fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(0, 255, 255),
        Color::Yellow => Rgb::new(255, 255, 0),
        Color::Purple => Rgb::new(128, 0, 128),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Blue => Rgb::new(0, 0, 255),
        Color::Green => Rgb::new(0, 255, 0),
        Color::Red => Rgb::new(255, 0, 0),
    }
}

/// A lightweight terminal view over the game model.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into a fresh framebuffer of the viewport's size.
    pub fn render(&self, model: &GameModel, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(model, &mut fb);
        fb
    }

    /// Render into an existing framebuffer (sized by the caller), reusing
    /// its allocation frame over frame.
    pub fn render_into(&self, model: &GameModel, fb: &mut FrameBuffer) {
        let background = GlyphStyle::default();
        fb.clear(Glyph {
            ch: ' ',
            style: background,
        });

        let grid_cols = (GRID_WIDTH as u16) * self.cell_w;
        let grid_rows = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = grid_cols + 2;
        let frame_h = grid_rows + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let well = GlyphStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 20),
            bold: false,
            dim: false,
        };
        let border = GlyphStyle {
            fg: Rgb::new(128, 128, 128),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, grid_cols, grid_rows, ' ', well);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, colored by their stored identity.
        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                if let Some(Some(color)) = model.board().get(x, y) {
                    self.draw_grid_cell(fb, start_x, start_y, x as u16, y as u16, color);
                }
            }
        }

        // The falling piece, in its own color. Skipped once the game is
        // over: the terminal spawn may overlap the stack.
        if !model.game_over() {
            let piece = model.current();
            for (r, c) in piece.shape.cells() {
                let x = piece.x + c as i8;
                let y = piece.y + r as i8;
                if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
                    self.draw_grid_cell(fb, start_x, start_y, x as u16, y as u16, piece.color);
                }
            }
        }

        self.draw_side_panel(fb, model, start_x, start_y, frame_w);

        if model.game_over() {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: GlyphStyle,
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

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        color: Color,
    ) {
        let style = GlyphStyle {
            fg: color_rgb(color),
            bg: Rgb::new(20, 20, 20),
            bold: true,
            dim: false,
        };
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        model: &GameModel,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= fb.width() || fb.width() - panel_x < 10 {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y.saturating_add(1);
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", model.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", model.level()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", model.lines()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, model, panel_x, y);
    }

    /// Draw the queued piece's shape matrix in its color, one framebuffer
    /// rect per occupied cell, same 2x1 cell metrics as the board.
    fn draw_preview(&self, fb: &mut FrameBuffer, model: &GameModel, x: u16, y: u16) {
        let next = model.next();
        let style = GlyphStyle {
            fg: color_rgb(next.color),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for (r, c) in next.shape.cells() {
            fb.fill_rect(
                x + (c as u16) * self.cell_w,
                y + (r as u16) * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let headline = GlyphStyle {
            fg: Rgb::new(255, 0, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let hint = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        self.put_centered(fb, start_x, mid_y, frame_w, "GAME OVER", headline);
        self.put_centered(fb, start_x, mid_y + 1, frame_w, "press q to quit", hint);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        style: GlyphStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_palette_is_distinct() {
        for a in Color::ALL {
            for b in Color::ALL {
                if a != b {
                    assert_ne!(color_rgb(a), color_rgb(b));
                }
            }
        }
    }

    #[test]
    fn test_custom_cell_metrics() {
        let model = GameModel::new(1);
        // 1x1 cells: board pixels 10x20, framed 12x22.
        let view = GameView::new(1, 1);
        let fb = view.render(&model, Viewport::new(12, 22));

        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(0, 21).unwrap().ch, '└');
        assert_eq!(fb.get(11, 21).unwrap().ch, '┘');
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        let model = GameModel::new(1);
        let view = GameView::default();
        // Must clip, not panic.
        let fb = view.render(&model, Viewport::new(4, 3));
        assert_eq!((fb.width(), fb.height()), (4, 3));
    }
}
