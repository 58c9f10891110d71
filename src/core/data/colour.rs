#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Source-over blend of `self` onto an opaque destination pixel.
    #[must_use]
    pub fn blend_over(self, dest: [u8; 3]) -> [u8; 3] {
        let alpha = u32::from(self.a);
        let mix = |src: u8, dst: u8| -> u8 {
            ((u32::from(src) * alpha + u32::from(dst) * (255 - alpha) + 127) / 255) as u8
        };

        [mix(self.r, dest[0]), mix(self.g, dest[1]), mix(self.b, dest[2])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colour_replaces_destination() {
        assert_eq!(Colour::WHITE.blend_over([10, 20, 30]), [255, 255, 255]);
    }

    #[test]
    fn transparent_colour_keeps_destination() {
        assert_eq!(Colour::TRANSPARENT.blend_over([10, 20, 30]), [10, 20, 30]);
        assert!(Colour::TRANSPARENT.is_transparent());
    }

    #[test]
    fn half_alpha_white_over_black_is_mid_grey() {
        let outline = Colour::rgba(255, 255, 255, 128);

        assert_eq!(outline.blend_over([0, 0, 0]), [128, 128, 128]);
    }
}
