use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_core::color_mode::{ColorController, ColorMode, DotColoring};
use viz_core::palette::{are_similar, BLACK, WHITE};

#[test]
fn startup_change_applies_random_scheme() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut ctl = ColorController::new();
    let change = ctl.force_change(&mut rng);
    assert_eq!(change.mode, ColorMode::Random);
    assert_ne!(change.text, change.background);
    assert!(!are_similar(change.text, change.background));
    assert_eq!(change.dots, DotColoring::Uniform(change.text));
    assert_eq!(ctl.mode(), ColorMode::Random);
}

#[test]
fn zone_entry_after_startup_switches_to_monochrome() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut ctl = ColorController::new();
    ctl.force_change(&mut rng);

    let change = ctl.on_pointer(true, &mut rng).expect("edge should fire");
    assert_eq!(change.mode, ColorMode::Monochrome);
    assert_eq!(change.text, WHITE);
    assert_eq!(change.background, BLACK);
    assert_eq!(change.dots, DotColoring::PerDotRandom);
}

#[test]
fn repeated_events_on_the_same_side_fire_once() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut ctl = ColorController::new();
    ctl.force_change(&mut rng);

    // still outside: no edge
    assert!(ctl.on_pointer(false, &mut rng).is_none());
    assert!(ctl.on_pointer(false, &mut rng).is_none());

    // entering fires exactly once
    assert!(ctl.on_pointer(true, &mut rng).is_some());
    assert!(ctl.on_pointer(true, &mut rng).is_none());
    assert!(ctl.on_pointer(true, &mut rng).is_none());

    // leaving fires again
    assert!(ctl.on_pointer(false, &mut rng).is_some());
    assert!(ctl.on_pointer(false, &mut rng).is_none());
}

#[test]
fn transitions_alternate_with_odd_counts_monochrome() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut ctl = ColorController::new();
    ctl.force_change(&mut rng); // RANDOM is the post-startup state

    let mut inside = false;
    for n in 1..=10 {
        inside = !inside;
        let change = ctl.on_pointer(inside, &mut rng).expect("edge should fire");
        let expected = if n % 2 == 1 {
            ColorMode::Monochrome
        } else {
            ColorMode::Random
        };
        assert_eq!(change.mode, expected, "transition {n}");
        assert_eq!(ctl.mode(), expected);
    }
}

#[test]
fn random_schemes_never_pick_green_on_yellow() {
    let mut rng = StdRng::seed_from_u64(14);
    let mut ctl = ColorController::new();
    for _ in 0..500 {
        let change = ctl.force_change(&mut rng);
        if change.mode == ColorMode::Random {
            assert_ne!(change.text, change.background);
            assert!(!are_similar(change.text, change.background));
        }
    }
}
