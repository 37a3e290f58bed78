//! ASCII engine runner.
//!
//! Two subcommands:
//! - `demo`: play a procedural scene (sine wave, gradient, bouncing chars)
//! - `play`: Flappy Bird
//!
//! Uses crossterm for input and a framebuffer-based diff renderer.

use std::env;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use ascii_engine::core::{CharMap, Clip, Player};
use ascii_engine::game::FlappyGame;
use ascii_engine::input::{handle_key_event, should_quit};
use ascii_engine::scenes;
use ascii_engine::term::{CanvasView, GameView, RenderThrottle, TerminalRenderer, Viewport};
use ascii_engine::types::{
    GameAction, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEMO_FRAME_MS,
    STATIC_RENDER_INTERVAL_MS, TICK_MS,
};

const USAGE: &str = "\
usage: ascii-engine <command> [options]

commands:
  demo    play a procedural scene
  play    Flappy Bird

demo options:
  --scene <sine|gradient|bounce>   scene to play (default: sine)
  --width <n>  --height <n>        canvas size (default: 80x25)
  --seed <n>                       rng seed (default: 1)
  --charmap <default|detailed>     glyph ramp (default: default)

play options:
  --seed <n>                       rng seed (default: 1)
  --charmap <default|detailed>     glyph ramp (default: default)
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SceneKind {
    Sine,
    Gradient,
    Bounce,
}

impl SceneKind {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "sine" => Some(SceneKind::Sine),
            "gradient" => Some(SceneKind::Gradient),
            "bounce" => Some(SceneKind::Bounce),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SceneKind::Sine => "sine",
            SceneKind::Gradient => "gradient",
            SceneKind::Bounce => "bounce",
        }
    }
}

#[derive(Debug)]
enum Command {
    Demo {
        scene: SceneKind,
        width: u16,
        height: u16,
        seed: u32,
        charmap: CharMap,
    },
    Play {
        seed: u32,
        charmap: CharMap,
    },
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match command {
        Command::Demo {
            scene,
            width,
            height,
            seed,
            charmap,
        } => run_demo(&mut term, scene, width, height, seed, charmap),
        Command::Play { seed, charmap } => run_play(&mut term, seed, charmap),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn parse_args(args: &[String]) -> Result<Command> {
    let (name, rest) = match args.split_first() {
        Some((name, rest)) => (name.as_str(), rest),
        // Bare invocation behaves like the original demo script.
        None => ("demo", &[][..]),
    };

    match name {
        "demo" => {
            let mut scene = SceneKind::Sine;
            let mut width = DEFAULT_CANVAS_WIDTH;
            let mut height = DEFAULT_CANVAS_HEIGHT;
            let mut seed: u32 = 1;
            let mut charmap = CharMap::default();

            let mut i = 0usize;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--scene" => {
                        let v = flag_value(rest, &mut i, "--scene")?;
                        scene = SceneKind::from_str(v)
                            .ok_or_else(|| anyhow!("demo: unknown scene: {}", v))?;
                    }
                    "--width" => width = parse_number(flag_value(rest, &mut i, "--width")?)?,
                    "--height" => height = parse_number(flag_value(rest, &mut i, "--height")?)?,
                    "--seed" => seed = parse_number(flag_value(rest, &mut i, "--seed")?)?,
                    "--charmap" => {
                        let v = flag_value(rest, &mut i, "--charmap")?;
                        charmap = CharMap::named(v)
                            .ok_or_else(|| anyhow!("demo: unknown charmap: {}", v))?;
                    }
                    other => return Err(anyhow!("demo: unknown argument: {}", other)),
                }
                i += 1;
            }

            if width < 2 || height < 2 {
                return Err(anyhow!("demo: canvas must be at least 2x2"));
            }

            Ok(Command::Demo {
                scene,
                width,
                height,
                seed,
                charmap,
            })
        }
        "play" => {
            let mut seed: u32 = 1;
            let mut charmap = CharMap::default();

            let mut i = 0usize;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--seed" => seed = parse_number(flag_value(rest, &mut i, "--seed")?)?,
                    "--charmap" => {
                        let v = flag_value(rest, &mut i, "--charmap")?;
                        charmap = CharMap::named(v)
                            .ok_or_else(|| anyhow!("play: unknown charmap: {}", v))?;
                    }
                    other => return Err(anyhow!("play: unknown argument: {}", other)),
                }
                i += 1;
            }

            Ok(Command::Play { seed, charmap })
        }
        other => Err(anyhow!("unknown command: {}", other)),
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid number: {}", value))
}

fn build_clip(scene: SceneKind, width: u16, height: u16, seed: u32) -> Clip {
    match scene {
        SceneKind::Sine => Clip::new(scenes::sine_wave(width, height, 100), DEMO_FRAME_MS, true),
        SceneKind::Gradient => {
            Clip::new(vec![scenes::gradient(width, height)], DEMO_FRAME_MS, false)
        }
        SceneKind::Bounce => Clip::new(
            scenes::bouncing_chars(width, height, 300, 7, seed),
            DEMO_FRAME_MS,
            true,
        ),
    }
}

fn run_demo(
    term: &mut TerminalRenderer,
    scene: SceneKind,
    width: u16,
    height: u16,
    seed: u32,
    charmap: CharMap,
) -> Result<()> {
    let clip = build_clip(scene, width, height, seed);
    let total_frames = clip.len();
    let mut player = Player::new(clip);
    let view = CanvasView::new(charmap);
    let mut throttle = RenderThrottle::new(STATIC_RENDER_INTERVAL_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if let Some(frame) = player.frame() {
            let status = format!(
                "{}  frame {}/{}  space step  p pause  q quit",
                scene.name(),
                player.frame_index() + 1,
                total_frames
            );
            let mut fb = view.render(frame, Viewport::new(w, h), Some(&status));
            let is_static = player.paused() || player.finished() || total_frames <= 1;
            let now_ms = started.elapsed().as_millis() as u64;
            if throttle.should_render(now_ms, fb.fingerprint(), is_static) {
                term.draw_swap(&mut fb)?;
            }
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        // Space steps paused or static scenes frame by frame.
                        Some(GameAction::Flap) => player.step(),
                        Some(GameAction::Pause) => player.set_paused(!player.paused()),
                        Some(GameAction::Restart) => player.restart(),
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed().as_millis() as u32;
            last_tick = Instant::now();
            player.tick(elapsed);
        }
    }
}

fn run_play(term: &mut TerminalRenderer, seed: u32, charmap: CharMap) -> Result<()> {
    let mut game = FlappyGame::new(seed);
    game.start();

    let mut view = GameView::for_game(&game, charmap);
    let mut throttle = RenderThrottle::new(STATIC_RENDER_INTERVAL_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&game, Viewport::new(w, h));
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fb.fingerprint(), game.is_static()) {
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed().as_millis() as u32;
            last_tick = Instant::now();
            game.tick(elapsed);
        }
    }
}
