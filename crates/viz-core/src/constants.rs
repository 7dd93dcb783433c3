// Shared scene and interaction tuning constants used by the web frontend.

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE_Z: f32 = 40.0; // pulled back so the whole cloud reads as a halo

// Orbit controller
pub const ORBIT_DAMPING: f32 = 0.05; // per-frame velocity bleed at 60fps
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per dragged pixel
pub const ORBIT_ZOOM_SPEED: f32 = 0.001; // distance multiplier per wheel unit
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 200.0;
pub const ORBIT_MAX_PITCH: f32 = 1.55; // just shy of the poles

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

// Model
pub const MODEL_ASSET_PATH: &str = "brain.glb";
pub const MODEL_SCALE: f32 = 0.5;

// Animation
pub const ROTATION_STEP_RADIANS: f32 = 0.002;

// Dot cloud
pub const DOT_COUNT: usize = 2000;
pub const CLOUD_INNER_RADIUS: f32 = 10.0; // leaves a hollow zone around the model
pub const CLOUD_OUTER_RADIUS: f32 = 60.0;
pub const DOT_RADIUS: f32 = 0.08;

// Interaction zone, as fractions of the viewport
pub const ZONE_LEFT_FRAC: f32 = 0.2;
pub const ZONE_RIGHT_FRAC: f32 = 0.8;
pub const ZONE_TOP_FRAC: f32 = 0.2;
pub const ZONE_BOTTOM_FRAC: f32 = 0.9;
