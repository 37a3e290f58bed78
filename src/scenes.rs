//! Demo scenes - procedural frame generators
//!
//! Pure functions producing frame sequences for the demo subcommand. All
//! randomness goes through `SimpleRng` so a scene is reproducible from its
//! seed.

use crate::core::{Canvas, Pixel, SimpleRng};

/// Animated sine wave sweeping across the canvas, color cycling through the
/// ANSI 6x6x6 cube.
pub fn sine_wave(width: u16, height: u16, num_frames: usize) -> Vec<Canvas> {
    let mut frames = Vec::with_capacity(num_frames);
    for i in 0..num_frames {
        let mut canvas = Canvas::new(width, height);
        for x in 0..width {
            let xf = x as f32;
            let fi = i as f32;
            let y = ((xf * 0.2 + fi * 0.3).sin() + 1.0) / 2.0 * (height.saturating_sub(1) as f32);
            let y = y.round() as i32;
            if y < 0 || y >= height as i32 {
                continue;
            }

            // The sine term truncates toward zero before the offset is added.
            let intensity = (150 + ((xf * 0.1 + fi * 0.2).sin() * 105.0) as i32).clamp(0, 255) as u8;
            let color = 16 + ((i + (x as usize) / 2) % 216) as u8;
            canvas.set(x, y as u16, Pixel::new(intensity, Some(color)));
        }
        frames.push(canvas);
    }
    frames
}

/// A single static frame: horizontal intensity ramp with blue/green/red
/// thirds.
pub fn gradient(width: u16, height: u16) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    if width == 0 {
        return canvas;
    }

    for y in 0..height {
        for x in 0..width {
            let intensity = if width > 1 {
                ((x as u32) * 255 / (width as u32 - 1)) as u8
            } else {
                255
            };
            let color = if (x as u32) * 3 < width as u32 {
                21 // blue
            } else if (x as u32) * 3 < (width as u32) * 2 {
                46 // green
            } else {
                196 // red
            };
            canvas.set(x, y, Pixel::new(intensity, Some(color)));
        }
    }
    canvas
}

/// One bouncing sprite: position, unit velocity, ANSI cube color.
#[derive(Debug, Clone, Copy)]
struct Sprite {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    color: u8,
}

/// Full-brightness characters bouncing off the canvas edges.
pub fn bouncing_chars(
    width: u16,
    height: u16,
    num_frames: usize,
    num_chars: usize,
    seed: u32,
) -> Vec<Canvas> {
    let mut rng = SimpleRng::new(seed);
    let w = width as i32;
    let h = height as i32;

    let mut sprites: Vec<Sprite> = (0..num_chars)
        .map(|_| Sprite {
            x: 1 + rng.next_range((w - 2).max(1) as u32) as i32,
            y: 1 + rng.next_range((h - 2).max(1) as u32) as i32,
            dx: if rng.chance(1, 2) { 1 } else { -1 },
            dy: if rng.chance(1, 2) { 1 } else { -1 },
            color: 16 + rng.next_range(216) as u8,
        })
        .collect();

    let mut frames = Vec::with_capacity(num_frames);
    for _ in 0..num_frames {
        let mut canvas = Canvas::new(width, height);

        for sprite in sprites.iter_mut() {
            sprite.x += sprite.dx;
            sprite.y += sprite.dy;

            // Bounce off walls, stepping back into bounds immediately.
            if sprite.x <= 0 || sprite.x >= w - 1 {
                sprite.dx = -sprite.dx;
                sprite.x += sprite.dx;
            }
            if sprite.y <= 0 || sprite.y >= h - 1 {
                sprite.dy = -sprite.dy;
                sprite.y += sprite.dy;
            }
            sprite.x = sprite.x.clamp(0, w - 1);
            sprite.y = sprite.y.clamp(0, h - 1);

            canvas.set(
                sprite.x as u16,
                sprite.y as u16,
                Pixel::new(255, Some(sprite.color)),
            );
        }

        frames.push(canvas);
    }
    frames
}
