use rand::Rng;

/// sRGB color with 8-bit channels. Compared exactly; the palette is a small
/// fixed set so no tolerance is needed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. "#ff69b4", for DOM style mutation.
    pub fn to_css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Normalized float components for the renderer.
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
pub const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

// Not in the active palette; kept only as a member of SIMILAR_PAIRS.
pub const MAGENTA: Rgb = Rgb::new(0xff, 0x00, 0xff);

/// The fixed set all randomized color choices draw from.
pub const PALETTE: [Rgb; 5] = [RED, GREEN, BLUE, YELLOW, CYAN];

/// Pairs too close to read as text on background. The (red, magenta) entry
/// can no longer co-occur since magenta left the palette.
pub const SIMILAR_PAIRS: [(Rgb, Rgb); 3] = [(RED, MAGENTA), (GREEN, YELLOW), (BLUE, CYAN)];

/// Uniform draw from the palette.
#[inline]
pub fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

/// Symmetric membership test on the similar-pairs list.
#[inline]
pub fn are_similar(a: Rgb, b: Rgb) -> bool {
    SIMILAR_PAIRS
        .iter()
        .any(|&(p, q)| (a == p && b == q) || (a == q && b == p))
}

/// Two independent palette draws, rejected until they differ and are not a
/// similar pair. Terminates because dissimilar unequal pairs exist by
/// construction.
pub fn contrasting_pair<R: Rng>(rng: &mut R) -> (Rgb, Rgb) {
    loop {
        let text = random_color(rng);
        let background = random_color(rng);
        if text != background && !are_similar(text, background) {
            return (text, background);
        }
    }
}
