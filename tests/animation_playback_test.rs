//! Integration tests for scene generation driven through the player.

use ascii_engine::core::{Clip, Player};
use ascii_engine::scenes;
use ascii_engine::types::DEMO_FRAME_MS;

#[test]
fn sine_scene_plays_through_all_frames() {
    let frames = scenes::sine_wave(40, 10, 5);
    let mut player = Player::new(Clip::new(frames, DEMO_FRAME_MS, false));

    let mut seen = vec![player.frame_index()];
    while !player.finished() {
        if player.tick(DEMO_FRAME_MS) {
            seen.push(player.frame_index());
        }
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn looping_scene_never_finishes() {
    let frames = scenes::bouncing_chars(20, 8, 10, 3, 5);
    let mut player = Player::new(Clip::new(frames, DEMO_FRAME_MS, true));

    for _ in 0..100 {
        player.tick(DEMO_FRAME_MS);
    }
    assert!(!player.finished());
    assert!(player.frame().is_some());
}

#[test]
fn playback_is_independent_of_tick_granularity() {
    let frames = scenes::sine_wave(20, 8, 10);
    let clip = Clip::new(frames, DEMO_FRAME_MS, false);

    // Coarse: one tick per frame duration.
    let mut coarse = Player::new(clip.clone());
    for _ in 0..6 {
        coarse.tick(DEMO_FRAME_MS);
    }

    // Fine: 16ms ticks adding up to the same total.
    let mut fine = Player::new(clip);
    let total = DEMO_FRAME_MS * 6;
    let mut spent = 0;
    while spent + 16 <= total {
        fine.tick(16);
        spent += 16;
    }
    fine.tick(total - spent);

    assert_eq!(coarse.frame_index(), fine.frame_index());
}

#[test]
fn single_frame_clip_behaves_as_static() {
    let frames = vec![scenes::gradient(20, 8)];
    let mut player = Player::new(Clip::new(frames, DEMO_FRAME_MS, false));

    assert!(player.frame().is_some());
    player.tick(DEMO_FRAME_MS * 10);
    assert!(player.finished());
    // The frame stays available after finishing.
    assert!(player.frame().is_some());
    assert_eq!(player.frame_index(), 0);
}
