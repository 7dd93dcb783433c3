use crate::palette::{self, Rgb, BLACK, WHITE};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Monochrome,
    Random,
}

/// How the dot cloud should be recolored by a scheme change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotColoring {
    /// Every dot takes the same color.
    Uniform(Rgb),
    /// Every dot takes an independent fresh palette draw.
    PerDotRandom,
}

/// One confirmed color-scheme transition, to be applied to the DOM link,
/// the renderer clear color, and the dot cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeChange {
    pub mode: ColorMode,
    pub text: Rgb,
    pub background: Rgb,
    pub dots: DotColoring,
}

/// Two-state controller alternating MONOCHROME and RANDOM schemes.
///
/// The toggle records the last inside-ness of the pointer relative to the
/// interaction zone; a transition fires only when a pointer event disagrees
/// with it. It starts true so the forced startup change applies RANDOM
/// before any pointer interaction.
#[derive(Clone, Debug)]
pub struct ColorController {
    toggle: bool,
}

impl Default for ColorController {
    fn default() -> Self {
        Self { toggle: true }
    }
}

impl ColorController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode, meaningful once the startup change has fired.
    pub fn mode(&self) -> ColorMode {
        if self.toggle {
            ColorMode::Monochrome
        } else {
            ColorMode::Random
        }
    }

    /// Edge-triggered zone event: fires only on a change of inside-ness,
    /// never on repeated events on the same side of the boundary.
    pub fn on_pointer<R: Rng>(&mut self, inside: bool, rng: &mut R) -> Option<SchemeChange> {
        (inside != self.toggle).then(|| self.transition(rng))
    }

    /// Unconditional transition; called once at startup to establish the
    /// initial visible colors.
    pub fn force_change<R: Rng>(&mut self, rng: &mut R) -> SchemeChange {
        self.transition(rng)
    }

    fn transition<R: Rng>(&mut self, rng: &mut R) -> SchemeChange {
        let change = if self.toggle {
            let (text, background) = palette::contrasting_pair(rng);
            SchemeChange {
                mode: ColorMode::Random,
                text,
                background,
                dots: DotColoring::Uniform(text),
            }
        } else {
            SchemeChange {
                mode: ColorMode::Monochrome,
                text: WHITE,
                background: BLACK,
                dots: DotColoring::PerDotRandom,
            }
        };
        self.toggle = !self.toggle;
        change
    }
}
