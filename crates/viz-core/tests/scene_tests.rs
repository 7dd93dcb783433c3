use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_core::color_mode::ColorMode;
use viz_core::constants::{DOT_COUNT, MODEL_SCALE, ROTATION_STEP_RADIANS};
use viz_core::model::{Material, MeshData, ModelNode, INITIAL_MODEL_COLOR};
use viz_core::palette::{BLACK, WHITE};
use viz_core::scene::SceneState;

fn bare_model() -> ModelNode {
    ModelNode {
        mesh: MeshData::default(),
        material: Material {
            color: INITIAL_MODEL_COLOR,
            cast_shadow: true,
            receive_shadow: true,
        },
        orientation: Quat::IDENTITY,
        scale: MODEL_SCALE,
        position: Vec3::ZERO,
    }
}

#[test]
fn advance_frame_is_safe_before_the_model_exists() {
    let mut scene = SceneState::new(16.0 / 9.0);
    for _ in 0..100 {
        scene.advance_frame();
    }
    assert!(scene.model.is_none());
    assert!(scene.cloud.is_none());
}

#[test]
fn install_model_creates_the_full_cloud() {
    let mut rng = StdRng::seed_from_u64(20);
    let mut scene = SceneState::new(1.0);
    scene.install_model(bare_model(), &mut rng);

    let model = scene.model.as_ref().expect("model installed");
    assert_eq!(model.orientation, Quat::IDENTITY);
    assert_eq!(model.scale, MODEL_SCALE);
    assert_eq!(scene.cloud.as_ref().map(|c| c.len()), Some(DOT_COUNT));
}

#[test]
fn rotation_accumulates_about_the_world_vertical_axis() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut scene = SceneState::new(1.0);
    scene.install_model(bare_model(), &mut rng);

    let steps = 100;
    for _ in 0..steps {
        scene.advance_frame();
    }

    let expected = Quat::from_axis_angle(Vec3::Y, steps as f32 * ROTATION_STEP_RADIANS);
    let got = scene.model.as_ref().unwrap().orientation;
    assert!(
        got.dot(expected).abs() > 1.0 - 1e-5,
        "orientation {got:?} != expected {expected:?}"
    );
    assert!((got.length() - 1.0).abs() < 1e-5, "orientation drifted off unit length");

    let spin = scene.cloud.as_ref().unwrap().spin;
    assert!((spin + steps as f32 * ROTATION_STEP_RADIANS).abs() < 1e-5);
}

#[test]
fn rotation_increment_is_left_multiplied() {
    let mut model = bare_model();
    model.orientation = Quat::from_axis_angle(Vec3::X, 1.0);
    let initial = model.orientation;
    model.rotate_step(ROTATION_STEP_RADIANS);
    let expected = Quat::from_axis_angle(Vec3::Y, ROTATION_STEP_RADIANS) * initial;
    assert!(model.orientation.dot(expected).abs() > 1.0 - 1e-6);
}

#[test]
fn pointer_events_drive_the_scheme_through_the_scene() {
    let mut rng = StdRng::seed_from_u64(22);
    let mut scene = SceneState::new(1.0);
    scene.install_model(bare_model(), &mut rng);
    scene.startup_scheme(&mut rng);

    let (w, h) = (1000.0, 1000.0);

    // center of the viewport is inside the zone: entering flips to monochrome
    let change = scene
        .pointer_moved(w / 2.0, h / 2.0, w, h, &mut rng)
        .expect("entering the zone should fire");
    assert_eq!(change.mode, ColorMode::Monochrome);
    assert_eq!(scene.text_color, WHITE);
    assert_eq!(scene.background, BLACK);

    // still inside: nothing fires
    assert!(scene.pointer_moved(w / 2.0 + 5.0, h / 2.0, w, h, &mut rng).is_none());

    // leaving flips back to random and recolors the cloud uniformly
    let change = scene
        .pointer_moved(0.0, 0.0, w, h, &mut rng)
        .expect("leaving the zone should fire");
    assert_eq!(change.mode, ColorMode::Random);
    assert_eq!(scene.text_color, change.text);
    assert_eq!(scene.background, change.background);
    let cloud = scene.cloud.as_ref().unwrap();
    assert!(cloud.dots.iter().all(|d| d.color == change.text));
}

#[test]
fn startup_scheme_recolors_an_existing_cloud() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut scene = SceneState::new(1.0);
    scene.install_model(bare_model(), &mut rng);

    let change = scene.startup_scheme(&mut rng);
    assert_eq!(change.mode, ColorMode::Random);
    let cloud = scene.cloud.as_ref().unwrap();
    assert!(cloud.dots.iter().all(|d| d.color == change.text));
}

#[test]
fn startup_scheme_without_a_cloud_still_sets_colors() {
    let mut rng = StdRng::seed_from_u64(24);
    let mut scene = SceneState::new(1.0);
    let change = scene.startup_scheme(&mut rng);
    assert_eq!(scene.text_color, change.text);
    assert_eq!(scene.background, change.background);
    assert!(scene.cloud.is_none());
}
