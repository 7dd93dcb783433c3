use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_core::palette::{
    are_similar, contrasting_pair, random_color, Rgb, BLUE, CYAN, GREEN, MAGENTA, PALETTE, RED,
    YELLOW,
};

#[test]
fn palette_has_five_distinct_colors() {
    assert_eq!(PALETTE.len(), 5);
    for (i, a) in PALETTE.iter().enumerate() {
        for (j, b) in PALETTE.iter().enumerate() {
            if i != j {
                assert_ne!(a, b, "duplicate palette entries at {i} and {j}");
            }
        }
    }
}

#[test]
fn magenta_is_not_in_the_active_palette() {
    assert!(!PALETTE.contains(&MAGENTA));
}

#[test]
fn css_hex_formatting() {
    assert_eq!(RED.to_css_hex(), "#ff0000");
    assert_eq!(CYAN.to_css_hex(), "#00ffff");
    assert_eq!(Rgb::new(0xff, 0x69, 0xb4).to_css_hex(), "#ff69b4");
}

#[test]
fn float_components_are_normalized() {
    assert_eq!(RED.to_f32(), [1.0, 0.0, 0.0]);
    assert_eq!(YELLOW.to_f32(), [1.0, 1.0, 0.0]);
}

#[test]
fn similarity_is_symmetric() {
    assert!(are_similar(GREEN, YELLOW));
    assert!(are_similar(YELLOW, GREEN));
    assert!(are_similar(BLUE, CYAN));
    assert!(are_similar(CYAN, BLUE));
    assert!(are_similar(RED, MAGENTA));
    assert!(!are_similar(RED, GREEN));
    assert!(!are_similar(RED, CYAN));
    assert!(!are_similar(YELLOW, CYAN));
}

#[test]
fn random_color_stays_in_palette() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let c = random_color(&mut rng);
        assert!(PALETTE.contains(&c));
    }
}

#[test]
fn contrasting_pair_is_never_equal_or_similar() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        let (text, background) = contrasting_pair(&mut rng);
        assert_ne!(text, background);
        assert!(!are_similar(text, background));
        // the concrete pair called out by the similar list
        assert!(
            !(text == GREEN && background == YELLOW) && !(text == YELLOW && background == GREEN)
        );
    }
}
