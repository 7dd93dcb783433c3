use crate::constants::MODEL_SCALE;
use crate::palette::Rgb;
use glam::{Mat4, Quat, Vec3};
use thiserror::Error;

/// Color every mesh is overridden to at load time.
pub const INITIAL_MODEL_COLOR: Rgb = Rgb::new(0xff, 0x69, 0xb4);

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("glb parse error: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("mesh primitive has no POSITION attribute")]
    MissingPositions,
    #[error("asset contains no mesh geometry")]
    Empty,
}

/// Triangle geometry flattened from every mesh primitive in the asset.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Per-mesh material state. Shadow flags are carried as data only; the
/// renderer has no shadow-map pass.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: Rgb,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// The loaded 3D asset. Absent from the scene until the async load
/// completes; orientation is the only field mutated per frame.
#[derive(Clone, Debug)]
pub struct ModelNode {
    pub mesh: MeshData,
    pub material: Material,
    pub orientation: Quat,
    pub scale: f32,
    pub position: Vec3,
}

impl ModelNode {
    /// Parse a binary glTF asset and apply the fixed initial transform and
    /// material. Missing normals are tolerated (zeroed); missing indices
    /// mean non-indexed triangles.
    pub fn from_glb(bytes: &[u8]) -> Result<Self, ModelError> {
        let (document, buffers, _images) = gltf::import_slice(bytes)?;
        let mut mesh = MeshData::default();
        for m in document.meshes() {
            for primitive in m.primitives() {
                let reader =
                    primitive.reader(|b| buffers.get(b.index()).map(|data| data.0.as_slice()));
                let base = mesh.positions.len() as u32;
                let positions: Vec<[f32; 3]> = reader
                    .read_positions()
                    .ok_or(ModelError::MissingPositions)?
                    .collect();
                let normals: Vec<[f32; 3]> = match reader.read_normals() {
                    Some(iter) => iter.collect(),
                    None => vec![[0.0; 3]; positions.len()],
                };
                match reader.read_indices() {
                    Some(indices) => mesh.indices.extend(indices.into_u32().map(|i| base + i)),
                    None => mesh
                        .indices
                        .extend((0..positions.len() as u32).map(|i| base + i)),
                }
                mesh.positions.extend(positions);
                mesh.normals.extend(normals);
            }
        }
        if mesh.positions.is_empty() {
            return Err(ModelError::Empty);
        }
        log::debug!(
            "glb parsed: {} vertices, {} indices",
            mesh.positions.len(),
            mesh.indices.len()
        );
        Ok(Self {
            mesh,
            material: Material {
                color: INITIAL_MODEL_COLOR,
                cast_shadow: true,
                receive_shadow: true,
            },
            orientation: Quat::IDENTITY,
            scale: MODEL_SCALE,
            position: Vec3::ZERO,
        })
    }

    /// World transform for the renderer.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.position,
        )
    }

    /// Compose a small rotation about the world vertical axis. The
    /// increment is left-multiplied so rotation accumulates in world space,
    /// not object-local space.
    pub fn rotate_step(&mut self, angle: f32) {
        self.orientation = (Quat::from_axis_angle(Vec3::Y, angle) * self.orientation).normalize();
    }
}
