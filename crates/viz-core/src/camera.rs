//! Camera types shared with the web frontend.
//!
//! These intentionally avoid platform-specific APIs; the frontend consumes
//! them to build view/projection matrices and to damp pointer-driven orbit
//! motion each frame.

use crate::constants::{
    CAMERA_EYE_Z, CAMERA_FAR, CAMERA_FOVY_DEGREES, CAMERA_NEAR, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MAX_PITCH, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed startup camera looking at the origin from down the +Z axis.
    pub fn initial(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_EYE_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Damped orbit control. Pointer drags feed yaw/pitch velocities, the wheel
/// scales distance; `update` integrates and bleeds the velocities each
/// frame before the draw call.
#[derive(Clone, Debug)]
pub struct OrbitController {
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    pub dragging: bool,
}

impl OrbitController {
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            dragging: false,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Pointer drag delta in CSS pixels.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity += dx * ORBIT_ROTATE_SPEED;
        self.pitch_velocity += dy * ORBIT_ROTATE_SPEED;
    }

    /// Wheel delta; positive zooms out.
    pub fn apply_zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 + delta * ORBIT_ZOOM_SPEED))
            .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Integrate velocities with frame-rate-independent damping and return
    /// the new eye position around `target`.
    pub fn update(&mut self, dt_sec: f32, target: Vec3) -> Vec3 {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(-ORBIT_MAX_PITCH, ORBIT_MAX_PITCH);
        // ORBIT_DAMPING is calibrated per 60fps frame
        let decay = (1.0 - ORBIT_DAMPING).powf(dt_sec * 60.0);
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(CAMERA_EYE_Z)
    }
}
