//! Decrypt animator tests

use mentor_core::animation::{DecryptAnimator, DecryptConfig, DecryptText};
use mentor_core::constants::SCRAMBLE_ALPHABET;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tokio::time::Instant;

fn assert_frame_shape(target: &str, shown: usize, frame: &str) {
    let target: Vec<char> = target.chars().collect();
    let frame: Vec<char> = frame.chars().collect();
    assert_eq!(frame.len(), target.len());
    assert_eq!(&frame[..shown], &target[..shown]);
    for (idx, c) in frame.iter().enumerate().skip(shown) {
        if target[idx] == ' ' {
            assert_eq!(*c, ' ', "space at {idx} must stay a space");
        } else {
            assert!(SCRAMBLE_ALPHABET.contains(*c), "unexpected {c:?} at {idx}");
        }
    }
}

#[test]
fn revealed_prefix_matches_target_on_every_tick() {
    let mut rng = StdRng::seed_from_u64(42);
    for target in ["Breaking Point", "ver 1.0", "x", "  spaced  out  ", "naïve café"] {
        let mut animator = DecryptAnimator::new(target, 2);
        loop {
            let shown = animator.revealed();
            let frame = animator.tick(&mut rng);
            if frame.finished {
                assert_eq!(frame.text, target);
                break;
            }
            assert_frame_shape(target, shown, &frame.text);
        }
        assert_eq!(animator.revealed(), animator.len());
    }
}

#[test]
fn revealed_count_never_decreases() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut animator = DecryptAnimator::new("monotonic", 3);
    let mut last = 0;
    for _ in 0..64 {
        animator.tick(&mut rng);
        assert!(animator.revealed() >= last);
        assert!(animator.revealed() <= animator.len());
        last = animator.revealed();
    }
    assert!(animator.is_finished());
}

#[test]
fn ticks_after_finish_keep_the_target() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut animator = DecryptAnimator::new("ok", 2);
    for _ in 0..4 {
        animator.tick(&mut rng);
    }
    let frame = animator.tick(&mut rng);
    assert!(frame.finished);
    assert_eq!(frame.text, "ok");
}

#[tokio::test(start_paused = true)]
async fn two_letters_settle_after_four_ticks() {
    let start = Instant::now();
    let (mut display, task) = DecryptText::new("Hi").spawn();

    let mut frames = Vec::new();
    while display.changed().await.is_ok() {
        frames.push(display.borrow_and_update().clone());
    }

    assert_eq!(frames.len(), 4);
    assert_eq!(frames.last().map(String::as_str), Some("Hi"));
    // First tick at t=0, then every 30ms.
    assert_eq!(start.elapsed(), Duration::from_millis(90));

    tokio::task::yield_now().await;
    assert!(task.is_finished());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(*display.borrow(), "Hi");
}

#[tokio::test(start_paused = true)]
async fn empty_text_completes_with_empty_display() {
    let (mut display, _task) = DecryptText::new("").spawn();

    let mut frames = Vec::new();
    while display.changed().await.is_ok() {
        frames.push(display.borrow_and_update().clone());
    }

    assert_eq!(frames, vec![String::new()]);
}

#[tokio::test(start_paused = true)]
async fn delay_postpones_first_tick() {
    let start = Instant::now();
    let (mut display, _task) = DecryptText::new("ver 1.0")
        .with_delay(Duration::from_millis(250))
        .spawn();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(display.borrow().is_empty());
    assert!(!display.has_changed().unwrap_or(true));

    display.changed().await.expect("first frame");
    assert_eq!(start.elapsed(), Duration::from_millis(250));
    assert_eq!(display.borrow().chars().nth(3), Some(' '));
}

#[tokio::test(start_paused = true)]
async fn custom_config_changes_pacing() {
    let start = Instant::now();
    let config = DecryptConfig {
        tick_interval: Duration::from_millis(10),
        iterations_per_char: 1,
    };
    let (mut display, _task) = DecryptText::new("abc").with_config(config).spawn();

    while display.changed().await.is_ok() {}

    assert_eq!(*display.borrow(), "abc");
    assert_eq!(start.elapsed(), Duration::from_millis(20));
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_display_updates() {
    let (mut display, task) = DecryptText::new("a fairly long headline").spawn();

    display.changed().await.expect("first frame");
    task.cancel();
    let snapshot = display.borrow_and_update().clone();

    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(task.is_cancelled());
    assert!(!display.has_changed().unwrap_or(false));
    assert_eq!(*display.borrow(), snapshot);
    assert_ne!(snapshot, "a fairly long headline");
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels() {
    let (mut display, task) = DecryptText::new("dropped early").spawn();

    display.changed().await.expect("first frame");
    drop(task);
    let snapshot = display.borrow_and_update().clone();

    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(!display.has_changed().unwrap_or(false));
    assert_eq!(*display.borrow(), snapshot);
}
