use crate::color_mode::DotColoring;
use crate::constants::{CLOUD_INNER_RADIUS, CLOUD_OUTER_RADIUS, DOT_COUNT};
use crate::palette::{self, Rgb};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// A single marker: position fixed at creation, color mutable.
#[derive(Clone, Copy, Debug)]
pub struct Dot {
    pub position: Vec3,
    pub color: Rgb,
}

/// The decorative cloud of markers surrounding the model. Generated once;
/// only colors and the group spin change afterwards.
pub struct DotCloud {
    pub dots: Vec<Dot>,
    /// Group rotation about +Y in radians, decremented each frame so the
    /// cloud turns opposite to the model.
    pub spin: f32,
}

impl DotCloud {
    /// Sample `DOT_COUNT` dots over the spherical shell between the inner
    /// and outer radii. Phi comes from the inverse cosine of a uniform
    /// value so density is even over the sphere instead of clustering at
    /// the poles.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut dots = Vec::with_capacity(DOT_COUNT);
        for _ in 0..DOT_COUNT {
            let color = palette::random_color(rng);
            let radius = rng.gen_range(CLOUD_INNER_RADIUS..CLOUD_OUTER_RADIUS);
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(-1.0f32..1.0).acos();
            let position = Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            );
            dots.push(Dot { position, color });
        }
        log::debug!("dot cloud generated: {} markers", dots.len());
        Self { dots, spin: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn recolor_uniform(&mut self, color: Rgb) {
        for dot in &mut self.dots {
            dot.color = color;
        }
    }

    pub fn recolor_random<R: Rng>(&mut self, rng: &mut R) {
        for dot in &mut self.dots {
            dot.color = palette::random_color(rng);
        }
    }

    pub fn apply_coloring<R: Rng>(&mut self, coloring: DotColoring, rng: &mut R) {
        match coloring {
            DotColoring::Uniform(color) => self.recolor_uniform(color),
            DotColoring::PerDotRandom => self.recolor_random(rng),
        }
    }
}
