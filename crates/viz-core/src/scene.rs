use crate::camera::{Camera, OrbitController};
use crate::cloud::DotCloud;
use crate::color_mode::{ColorController, SchemeChange};
use crate::constants::{CAMERA_EYE_Z, ROTATION_STEP_RADIANS};
use crate::model::ModelNode;
use crate::palette::{Rgb, BLACK, WHITE};
use crate::zone;
use rand::Rng;

/// Whole-application state: constructed synchronously at startup,
/// async-populated by the asset loader, then advanced once per animation
/// frame. Model and cloud are absent until the load completes and every
/// consumer treats that as a normal steady state.
pub struct SceneState {
    pub model: Option<ModelNode>,
    pub cloud: Option<DotCloud>,
    pub camera: Camera,
    pub orbit: OrbitController,
    pub controller: ColorController,
    pub text_color: Rgb,
    pub background: Rgb,
}

impl SceneState {
    pub fn new(aspect: f32) -> Self {
        Self {
            model: None,
            cloud: None,
            camera: Camera::initial(aspect),
            orbit: OrbitController::new(CAMERA_EYE_Z),
            controller: ColorController::new(),
            text_color: WHITE,
            background: BLACK,
        }
    }

    /// Install the loaded model and generate the surrounding dot cloud.
    pub fn install_model<R: Rng>(&mut self, model: ModelNode, rng: &mut R) {
        self.model = Some(model);
        self.cloud = Some(DotCloud::generate(rng));
    }

    /// One animation step: rotate the model about world +Y and counter-spin
    /// the cloud by the same increment. Total; absent model/cloud no-op.
    pub fn advance_frame(&mut self) {
        if let Some(model) = &mut self.model {
            model.rotate_step(ROTATION_STEP_RADIANS);
        }
        if let Some(cloud) = &mut self.cloud {
            cloud.spin -= ROTATION_STEP_RADIANS;
        }
    }

    /// Zone test plus edge detection for one pointer/touch position in
    /// viewport coordinates. Returns the scheme change if one fired; the
    /// scene-side effects (background, dot colors) are already applied.
    pub fn pointer_moved<R: Rng>(
        &mut self,
        x: f32,
        y: f32,
        viewport_w: f32,
        viewport_h: f32,
        rng: &mut R,
    ) -> Option<SchemeChange> {
        let inside = zone::is_within_zone(x, y, viewport_w, viewport_h);
        let change = self.controller.on_pointer(inside, rng)?;
        self.apply_scheme(&change, rng);
        Some(change)
    }

    /// Forced startup transition establishing the initial visible colors.
    pub fn startup_scheme<R: Rng>(&mut self, rng: &mut R) -> SchemeChange {
        let change = self.controller.force_change(rng);
        self.apply_scheme(&change, rng);
        change
    }

    fn apply_scheme<R: Rng>(&mut self, change: &SchemeChange, rng: &mut R) {
        self.text_color = change.text;
        self.background = change.background;
        if let Some(cloud) = &mut self.cloud {
            cloud.apply_coloring(change.dots, rng);
        }
    }
}
