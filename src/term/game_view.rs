//! GameView: maps the Flappy Bird state into a terminal framebuffer.
//!
//! Pure except for an internal scratch canvas; unit-testable.

use crate::core::{Canvas, CharMap};
use crate::game::FlappyGame;
use crate::term::canvas_view::{draw_overlay_text, CanvasView};
use crate::term::fb::{CellStyle, FrameBuffer, TermColor, Viewport};

pub struct GameView {
    view: CanvasView,
    scratch: Canvas,
}

impl GameView {
    pub fn new(charmap: CharMap, width: u16, height: u16) -> Self {
        Self {
            view: CanvasView::new(charmap),
            scratch: Canvas::new(width, height),
        }
    }

    pub fn for_game(game: &FlappyGame, charmap: CharMap) -> Self {
        Self::new(charmap, game.width(), game.height())
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&mut self, game: &FlappyGame, viewport: Viewport) -> FrameBuffer {
        game.render_into(&mut self.scratch);

        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.view.render_into(&mut fb, &self.scratch, None);

        let (start_x, start_y) = self.view.origin(&self.scratch, viewport);
        let (frame_w, frame_h) = self.view.frame_size(&self.scratch);

        self.draw_hud(&mut fb, game, viewport, start_x, start_y, frame_w);

        if game.paused() {
            draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if game.game_over() {
            draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            let final_score = format!("FINAL SCORE {}", game.score());
            draw_overlay_text(
                &mut fb,
                start_x,
                start_y.saturating_add(2),
                frame_w,
                frame_h,
                &final_score,
            );
            draw_overlay_text(
                &mut fb,
                start_x,
                start_y.saturating_add(4),
                frame_w,
                frame_h,
                "press r to restart",
            );
        }

        fb
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        game: &FlappyGame,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let label = CellStyle {
            fg: TermColor::Rgb(220, 220, 220),
            bg: TermColor::Default,
            bold: true,
            dim: false,
        };
        let value = CellStyle::fg(TermColor::Rgb(200, 200, 200));
        let hint = CellStyle {
            fg: TermColor::Rgb(160, 160, 160),
            bg: TermColor::Default,
            bold: false,
            dim: true,
        };

        // Score above the frame, controls hint below it.
        let score = format!("SCORE {}", game.score());
        if start_y > 0 {
            fb.put_str(start_x, start_y - 1, "FLAPPY", label);
            let score_x = start_x
                .saturating_add(frame_w)
                .saturating_sub(score.chars().count() as u16);
            fb.put_str(score_x, start_y - 1, &score, value);
        }

        let hint_y = start_y.saturating_add(self.view.frame_size(&self.scratch).1);
        if hint_y < viewport.height {
            fb.put_str(start_x, hint_y, "space flap  p pause  q quit", hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameAction, BIRD_X};

    fn find_text(fb: &FrameBuffer, text: &str) -> bool {
        let w = fb.width() as usize;
        let row_chars: Vec<char> = fb.cells().iter().map(|c| c.ch).collect();
        row_chars
            .chunks(w)
            .map(|row| row.iter().collect::<String>())
            .any(|row| row.contains(text))
    }

    fn view_for(game: &FlappyGame) -> (GameView, Viewport) {
        let viewport = Viewport::new(game.width() + 10, game.height() + 6);
        (GameView::for_game(game, CharMap::default()), viewport)
    }

    #[test]
    fn test_bird_is_rendered_bright() {
        let mut game = FlappyGame::with_size(40, 15, 1);
        game.start();
        let (mut view, viewport) = view_for(&game);
        let fb = view.render(&game, viewport);

        let (ox, oy) = (
            (viewport.width - 42) / 2,
            (viewport.height - 17) / 2,
        );
        let bird = fb
            .get(ox + 1 + BIRD_X, oy + 1 + game.bird_y() as u16)
            .unwrap();
        assert_eq!(bird.ch, '@');
        assert_eq!(bird.style.fg, TermColor::Ansi(3));
    }

    #[test]
    fn test_score_in_hud() {
        let mut game = FlappyGame::with_size(40, 15, 1);
        game.start();
        let (mut view, viewport) = view_for(&game);
        let fb = view.render(&game, viewport);
        assert!(find_text(&fb, "SCORE 0"));
    }

    #[test]
    fn test_paused_overlay() {
        let mut game = FlappyGame::with_size(40, 15, 1);
        game.start();
        game.apply_action(GameAction::Pause);
        let (mut view, viewport) = view_for(&game);
        let fb = view.render(&game, viewport);
        assert!(find_text(&fb, "PAUSED"));
    }

    #[test]
    fn test_game_over_overlay_shows_final_score() {
        let mut game = FlappyGame::with_size(40, 15, 1);
        game.start();
        while !game.game_over() {
            game.tick(100);
        }
        let (mut view, viewport) = view_for(&game);
        let fb = view.render(&game, viewport);
        assert!(find_text(&fb, "GAME OVER"));
        assert!(find_text(&fb, "FINAL SCORE 0"));
    }
}
