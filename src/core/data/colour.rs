#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Builds a colour from unit-range channels, clamping each into `[0, 1]`.
    #[must_use]
    pub fn from_unit_rgb([r, g, b]: [f64; 3]) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_rgb_maps_extremes() {
        assert_eq!(Colour::from_unit_rgb([0.0, 0.0, 0.0]), Colour::BLACK);
        assert_eq!(
            Colour::from_unit_rgb([1.0, 1.0, 1.0]),
            Colour { r: 255, g: 255, b: 255 }
        );
    }

    #[test]
    fn test_from_unit_rgb_clamps_out_of_range() {
        let colour = Colour::from_unit_rgb([-0.5, 1.5, f64::NAN]);

        assert_eq!(colour.r, 0);
        assert_eq!(colour.g, 255);
        assert_eq!(colour.b, 0);
    }
}
