use glam::Vec3;
use viz_core::camera::{Camera, OrbitController};
use viz_core::constants::{
    CAMERA_EYE_Z, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
};

const DT: f32 = 1.0 / 60.0;

#[test]
fn initial_camera_matches_the_fixed_setup() {
    let cam = Camera::initial(16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_EYE_Z));
    assert_eq!(cam.target, Vec3::ZERO);
    let vp = cam.view_proj();
    assert!(vp.is_finite());
}

#[test]
fn idle_orbit_keeps_the_startup_eye() {
    let mut orbit = OrbitController::new(CAMERA_EYE_Z);
    let eye = orbit.update(DT, Vec3::ZERO);
    assert!((eye - Vec3::new(0.0, 0.0, CAMERA_EYE_Z)).length() < 1e-4);
}

#[test]
fn orbit_preserves_distance_while_dragging() {
    let mut orbit = OrbitController::new(CAMERA_EYE_Z);
    orbit.apply_drag(30.0, -12.0);
    for _ in 0..120 {
        let eye = orbit.update(DT, Vec3::ZERO);
        assert!((eye.length() - CAMERA_EYE_Z).abs() < 1e-3);
    }
}

#[test]
fn drag_velocity_damps_out() {
    let mut orbit = OrbitController::new(CAMERA_EYE_Z);
    orbit.apply_drag(100.0, 0.0);
    // settle for a few seconds of simulated frames
    let mut previous = Vec3::ZERO;
    for _ in 0..600 {
        previous = orbit.update(DT, Vec3::ZERO);
    }
    let settled = orbit.update(DT, Vec3::ZERO);
    assert!((settled - previous).length() < 1e-4, "orbit never settled");
}

#[test]
fn zoom_clamps_to_the_distance_range() {
    let mut orbit = OrbitController::new(CAMERA_EYE_Z);
    for _ in 0..10_000 {
        orbit.apply_zoom(120.0);
    }
    assert!(orbit.distance() <= ORBIT_MAX_DISTANCE);
    for _ in 0..10_000 {
        orbit.apply_zoom(-120.0);
    }
    assert!(orbit.distance() >= ORBIT_MIN_DISTANCE);
}
