use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_core::cloud::DotCloud;
use viz_core::color_mode::DotColoring;
use viz_core::constants::{CLOUD_INNER_RADIUS, CLOUD_OUTER_RADIUS, DOT_COUNT};
use viz_core::palette::{PALETTE, RED};

#[test]
fn generates_exactly_the_fixed_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let cloud = DotCloud::generate(&mut rng);
    assert_eq!(cloud.len(), DOT_COUNT);
    assert!(!cloud.is_empty());
    assert_eq!(cloud.spin, 0.0);
}

#[test]
fn every_dot_lies_in_the_shell() {
    let mut rng = StdRng::seed_from_u64(2);
    let cloud = DotCloud::generate(&mut rng);
    for dot in &cloud.dots {
        let r = dot.position.length();
        assert!(
            (CLOUD_INNER_RADIUS..CLOUD_OUTER_RADIUS).contains(&r),
            "dot at radius {r} escaped the shell"
        );
    }
}

#[test]
fn colors_come_only_from_the_palette() {
    let mut rng = StdRng::seed_from_u64(3);
    let cloud = DotCloud::generate(&mut rng);
    for dot in &cloud.dots {
        assert!(PALETTE.contains(&dot.color));
    }
}

#[test]
fn dots_cover_both_hemispheres() {
    // phi from an inverse cosine should not cluster at a pole
    let mut rng = StdRng::seed_from_u64(4);
    let cloud = DotCloud::generate(&mut rng);
    let above = cloud.dots.iter().filter(|d| d.position.z > 0.0).count();
    let below = cloud.dots.iter().filter(|d| d.position.z < 0.0).count();
    assert!(above > DOT_COUNT / 4, "only {above} dots above the plane");
    assert!(below > DOT_COUNT / 4, "only {below} dots below the plane");
}

#[test]
fn recoloring_never_moves_a_dot() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut cloud = DotCloud::generate(&mut rng);
    let positions: Vec<_> = cloud.dots.iter().map(|d| d.position).collect();

    cloud.recolor_uniform(RED);
    assert!(cloud.dots.iter().all(|d| d.color == RED));

    cloud.recolor_random(&mut rng);
    assert!(cloud.dots.iter().all(|d| PALETTE.contains(&d.color)));

    for (dot, original) in cloud.dots.iter().zip(&positions) {
        assert_eq!(dot.position, *original);
    }
    assert_eq!(cloud.len(), DOT_COUNT);
}

#[test]
fn apply_coloring_matches_the_directive() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut cloud = DotCloud::generate(&mut rng);

    cloud.apply_coloring(DotColoring::Uniform(RED), &mut rng);
    assert!(cloud.dots.iter().all(|d| d.color == RED));

    cloud.apply_coloring(DotColoring::PerDotRandom, &mut rng);
    // a fresh independent draw per dot essentially never stays uniform
    let distinct: std::collections::HashSet<_> = cloud.dots.iter().map(|d| d.color).collect();
    assert!(distinct.len() > 1);
}
