//! Flappy Bird game state
//!
//! Runs on a fixed 100ms update: gravity pulls the bird down, a flap sets an
//! upward impulse, pipes spawn probabilistically behind a cooldown and march
//! left one column per update. Difficulty scales with score: pipes spawn
//! more often in absolute time early on, gaps narrow as the score grows.
//!
//! Everything is deterministic given a seed and a sequence of tick calls.

use arrayvec::ArrayVec;

use crate::core::{Canvas, Pixel, SimpleRng};
use crate::types::{
    GameAction, BIRD_X, FLAP_VELOCITY, GAME_HEIGHT, GAME_UPDATE_MS, GAME_WIDTH, GRAVITY,
    PIPE_KILL_X, PIPE_SPAWN_BASE_PERMILLE, PIPE_SPAWN_COOLDOWN_MS, PIPE_SPAWN_FLOOR_PERMILLE,
    PIPE_WIDTH,
};

/// Upper bound on concurrently live pipes. At one column per update a pipe
/// lives for about (width + 5) updates, and spawns are at least 1.5s apart,
/// so the real count stays well under this.
const MAX_PIPES: usize = 16;

/// A pipe pair: everything in the column except the gap is solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    /// Leftmost column; may go negative as the pipe leaves the screen.
    pub x: i16,
    /// Top row of the gap.
    pub gap_y: u16,
    /// Gap height in rows.
    pub gap_h: u16,
}

impl Pipe {
    /// Whether a bird at (col, row) hits this pipe.
    fn hits(&self, col: u16, row: f32) -> bool {
        let col = col as i16;
        if !(self.x..self.x + PIPE_WIDTH).contains(&col) {
            return false;
        }
        !(row >= self.gap_y as f32 && row < (self.gap_y + self.gap_h) as f32)
    }
}

/// Complete Flappy Bird state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    width: u16,
    height: u16,
    bird_y: f32,
    velocity: f32,
    pipes: ArrayVec<Pipe, MAX_PIPES>,
    score: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    update_timer_ms: u32,
    /// Time since the last pipe spawned.
    since_spawn_ms: u32,
    rng: SimpleRng,
}

impl FlappyGame {
    /// Create a game at the default playfield size.
    pub fn new(seed: u32) -> Self {
        Self::with_size(GAME_WIDTH, GAME_HEIGHT, seed)
    }

    pub fn with_size(width: u16, height: u16, seed: u32) -> Self {
        Self {
            width,
            height,
            bird_y: (height / 2) as f32,
            velocity: 0.0,
            pipes: ArrayVec::new(),
            score: 0,
            started: false,
            paused: false,
            game_over: false,
            update_timer_ms: 0,
            since_spawn_ms: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird_y(&self) -> f32 {
        self.bird_y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// True when nothing on screen is moving (throttled rendering is safe).
    pub fn is_static(&self) -> bool {
        !self.started || self.paused || self.game_over
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Flap => {
                if self.started && !self.paused && !self.game_over {
                    self.velocity = FLAP_VELOCITY;
                }
            }
            GameAction::Pause => {
                if self.started && !self.game_over {
                    self.paused = !self.paused;
                }
            }
            GameAction::Restart => {
                // Reseed from the live RNG so each run gets a fresh pipe
                // sequence while staying deterministic overall.
                let seed = self.rng.state();
                let (w, h) = (self.width, self.height);
                *self = Self::with_size(w, h, seed);
                self.start();
            }
        }
    }

    /// Advance game time. Runs zero or more fixed 100ms updates.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.is_static() {
            return;
        }

        self.update_timer_ms += elapsed_ms;
        while self.update_timer_ms >= GAME_UPDATE_MS {
            self.update_timer_ms -= GAME_UPDATE_MS;
            self.update();
            if self.game_over {
                self.update_timer_ms = 0;
                break;
            }
        }
    }

    /// One fixed update: physics, spawning, movement, collision, scoring.
    fn update(&mut self) {
        self.velocity += GRAVITY;
        self.bird_y += self.velocity;

        if self.bird_y < 0.0 {
            self.bird_y = 0.0;
            self.velocity = 0.0;
        } else if self.bird_y >= self.height as f32 {
            self.game_over = true;
            return;
        }

        self.maybe_spawn_pipe();

        for pipe in self.pipes.iter_mut() {
            pipe.x -= 1;
        }
        self.pipes.retain(|pipe| pipe.x > PIPE_KILL_X);

        for i in 0..self.pipes.len() {
            let pipe = self.pipes[i];
            if pipe.hits(BIRD_X, self.bird_y) {
                self.game_over = true;
            }
            if pipe.x == BIRD_X as i16 - 1 {
                self.score += 1;
            }
        }
    }

    fn maybe_spawn_pipe(&mut self) {
        self.since_spawn_ms = self.since_spawn_ms.saturating_add(GAME_UPDATE_MS);
        if self.since_spawn_ms <= PIPE_SPAWN_COOLDOWN_MS {
            return;
        }

        let rate = PIPE_SPAWN_BASE_PERMILLE
            .saturating_sub(self.score)
            .max(PIPE_SPAWN_FLOOR_PERMILLE);
        if !self.rng.chance(rate, 1000) {
            return;
        }

        let h = self.height as i32;
        let score = self.score as i32;

        // Gap placement range tightens toward the edges as score grows, then
        // falls back to the full safe band when it inverts.
        let mut min_gap = (15 - score / 5).max(5);
        let mut max_gap = (h - 15 + score / 5).min(h - 5);
        if min_gap >= max_gap {
            min_gap = 5;
            max_gap = h - 5;
        }
        let gap_y = if min_gap < max_gap {
            min_gap + self.rng.next_range((max_gap - min_gap + 1) as u32) as i32
        } else {
            h / 2
        };

        let gap_h = (15 - score / 3).max(5);

        let _ = self.pipes.try_push(Pipe {
            x: self.width as i16 - 1,
            gap_y: gap_y.clamp(0, h - 1) as u16,
            gap_h: gap_h as u16,
        });
        self.since_spawn_ms = 0;
    }

    /// Draw the playfield into a canvas of matching size.
    ///
    /// Ceiling/floor are dim brown bands, the bird a bright yellow cell,
    /// pipes green columns. The draw order matches the original: bird first,
    /// pipes over it.
    pub fn render_into(&self, canvas: &mut Canvas) {
        canvas.clear();

        let band = Pixel::new(100, Some(130));
        canvas.fill_row(0, band);
        canvas.fill_row(self.height.saturating_sub(1), band);

        if self.bird_y >= 0.0 && self.bird_y < self.height as f32 {
            canvas.set(BIRD_X, self.bird_y as u16, Pixel::new(255, Some(3)));
        }

        let pipe_pixel = Pixel::new(200, Some(2));
        for pipe in &self.pipes {
            for y in 0..self.height {
                if y >= pipe.gap_y && y < pipe.gap_y + pipe.gap_h {
                    continue;
                }
                for dx in 0..PIPE_WIDTH {
                    let x = pipe.x + dx;
                    if x >= 0 && (x as u16) < self.width {
                        canvas.set(x as u16, y, pipe_pixel);
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub fn push_pipe_for_test(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    #[cfg(test)]
    pub fn set_score_for_test(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_game(seed: u32) -> FlappyGame {
        let mut game = FlappyGame::new(seed);
        game.start();
        game
    }

    /// Drive the spawner (cooldown plus probability roll) until it yields.
    fn spawn_one_pipe(game: &mut FlappyGame) -> Pipe {
        for _ in 0..1000 {
            game.maybe_spawn_pipe();
            if let Some(pipe) = game.pipes.first() {
                return *pipe;
            }
        }
        panic!("spawner produced no pipe in 1000 rolls");
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let mut game = started_game(1);
        let y0 = game.bird_y();
        game.tick(GAME_UPDATE_MS);
        assert!(game.bird_y() > y0);
        assert!(game.velocity() > 0.0);
    }

    #[test]
    fn test_flap_sets_upward_impulse() {
        let mut game = started_game(1);
        game.tick(GAME_UPDATE_MS);
        game.apply_action(GameAction::Flap);
        assert_eq!(game.velocity(), FLAP_VELOCITY);
    }

    #[test]
    fn test_ceiling_clamps_and_zeroes_velocity() {
        let mut game = started_game(1);
        // Flap repeatedly to slam into the ceiling.
        for _ in 0..40 {
            game.apply_action(GameAction::Flap);
            game.tick(GAME_UPDATE_MS);
        }
        assert!(!game.game_over());
        assert!(game.bird_y() >= 0.0);
    }

    #[test]
    fn test_falling_to_floor_ends_game() {
        let mut game = started_game(1);
        for _ in 0..200 {
            game.tick(GAME_UPDATE_MS);
            if game.game_over() {
                break;
            }
        }
        assert!(game.game_over());
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut game = FlappyGame::new(1);
        let y0 = game.bird_y();
        game.tick(1000);
        assert_eq!(game.bird_y(), y0);
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut game = started_game(1);
        game.apply_action(GameAction::Pause);
        let y0 = game.bird_y();
        game.tick(1000);
        assert_eq!(game.bird_y(), y0);

        game.apply_action(GameAction::Pause);
        game.tick(GAME_UPDATE_MS);
        assert!(game.bird_y() > y0);
    }

    #[test]
    fn test_no_pipe_before_cooldown() {
        let mut game = started_game(1);
        // Flap every update to stay alive through the whole cooldown window.
        for _ in 0..(PIPE_SPAWN_COOLDOWN_MS / GAME_UPDATE_MS) {
            game.apply_action(GameAction::Flap);
            game.tick(GAME_UPDATE_MS);
        }
        assert!(!game.game_over());
        assert!(game.pipes().is_empty());
    }

    #[test]
    fn test_pipes_eventually_spawn_and_move_left() {
        let mut game = started_game(12345);
        let mut last_x = None;
        for _ in 0..400 {
            // Keep the bird alive in midair.
            if game.velocity() > 0.5 {
                game.apply_action(GameAction::Flap);
            }
            game.tick(GAME_UPDATE_MS);
            if game.game_over() {
                break;
            }
            if let Some(pipe) = game.pipes().first() {
                if let Some(prev) = last_x {
                    assert!(pipe.x < prev || pipe.x == game.width() as i16 - 1);
                }
                last_x = Some(pipe.x);
            }
        }
        assert!(last_x.is_some(), "no pipe spawned in 40 seconds");
    }

    #[test]
    fn test_collision_with_pipe_ends_game() {
        let mut game = started_game(1);
        // Gap far away from the bird's row; after one update the pipe body
        // still covers the bird column.
        game.push_pipe_for_test(Pipe {
            x: BIRD_X as i16,
            gap_y: 0,
            gap_h: 1,
        });
        game.tick(GAME_UPDATE_MS);
        assert!(game.game_over());
    }

    #[test]
    fn test_bird_passes_through_gap() {
        let game = started_game(1);
        let pipe = Pipe {
            x: BIRD_X as i16,
            gap_y: 0,
            gap_h: game.height(),
        };
        assert!(!pipe.hits(BIRD_X, game.bird_y()));
    }

    #[test]
    fn test_score_increments_when_pipe_passes_bird() {
        let mut game = started_game(1);
        game.push_pipe_for_test(Pipe {
            x: BIRD_X as i16,
            gap_y: 0,
            gap_h: game.height(),
        });
        // One update moves the pipe to bird_x - 1.
        game.apply_action(GameAction::Flap);
        game.tick(GAME_UPDATE_MS);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_gap_range_falls_back_when_inverted() {
        // On a 25-row field at low scores the tightening formulas invert
        // (min 15 vs max 10), so gaps must come from the [5, h-5] band.
        for seed in 1..20 {
            let mut game = started_game(seed);
            let pipe = spawn_one_pipe(&mut game);
            assert!(
                (5..=20).contains(&pipe.gap_y),
                "seed {}: gap_y {} outside safe band",
                seed,
                pipe.gap_y
            );
        }
    }

    #[test]
    fn test_gap_range_tightens_at_high_score() {
        // Score 30 on a 25-row field: min max(5, 15-6) = 9,
        // max min(20, 10+6) = 16, gap height max(15-10, 5) = 5.
        for seed in 1..20 {
            let mut game = started_game(seed);
            game.set_score_for_test(30);
            let pipe = spawn_one_pipe(&mut game);
            assert!(
                (9..=16).contains(&pipe.gap_y),
                "seed {}: gap_y {} outside tightened range",
                seed,
                pipe.gap_y
            );
            assert_eq!(pipe.gap_h, 5);
        }
    }

    #[test]
    fn test_gap_centers_when_field_too_short_for_fallback() {
        // On a 10-row field even the fallback band [5, h-5] collapses to a
        // single row, so the gap sits at mid-height.
        let mut game = FlappyGame::with_size(40, 10, 7);
        game.start();
        let pipe = spawn_one_pipe(&mut game);
        assert_eq!(pipe.gap_y, 5);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut game = started_game(1);
        for _ in 0..200 {
            game.tick(GAME_UPDATE_MS);
            if game.game_over() {
                break;
            }
        }
        assert!(game.game_over());

        game.apply_action(GameAction::Restart);
        assert!(game.started());
        assert!(!game.game_over());
        assert_eq!(game.score(), 0);
        assert!(game.pipes().is_empty());
        assert_eq!(game.bird_y(), (game.height() / 2) as f32);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let run = |seed: u32| {
            let mut game = started_game(seed);
            for step in 0..300 {
                if step % 7 == 0 {
                    game.apply_action(GameAction::Flap);
                }
                game.tick(GAME_UPDATE_MS);
            }
            (game.score(), game.pipes().to_vec(), game.game_over())
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_render_places_bird_and_bands() {
        let mut game = started_game(1);
        let mut canvas = Canvas::new(game.width(), game.height());
        game.render_into(&mut canvas);

        let band = Pixel::new(100, Some(130));
        assert_eq!(canvas.get(0, 0), Some(band));
        assert_eq!(canvas.get(0, game.height() - 1), Some(band));
        assert_eq!(
            canvas.get(BIRD_X, game.bird_y() as u16),
            Some(Pixel::new(255, Some(3)))
        );

        // Pipes draw over everything in their column except the gap.
        game.push_pipe_for_test(Pipe {
            x: 50,
            gap_y: 10,
            gap_h: 5,
        });
        game.render_into(&mut canvas);
        assert_eq!(canvas.get(50, 5), Some(Pixel::new(200, Some(2))));
        assert_eq!(canvas.get(50, 12), Some(Pixel::default()));
    }
}
