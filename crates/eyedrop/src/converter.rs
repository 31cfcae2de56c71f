use crate::core::{
    rgb_to_cmyk, rgb_to_hsb, rgb_to_hsl, round_device_independent, ColorMath, PaletteMath,
    Rounding, Space,
};
use crate::error::FormatError;
use crate::format::FormatConfig;
use crate::{ColorValue, Float};

/// A color space converter.
///
/// A converter derives color values in other color spaces from a color's
/// 24-bit source coordinates. It computes RGB, hex, HSL, HSB, and CMYK by
/// itself and delegates the device-independent color spaces to its
/// [`ColorMath`] provider. Either way, the resulting channels are rounded to
/// display precision.
///
/// The converter also is the one place where HSL's [`Rounding`] policy is
/// configured.
///
/// # Examples
///
/// ```
/// # use eyedrop::{ColorValue, Converter, Space};
/// # use eyedrop::format::FormatConfig;
/// let converter = Converter::default();
/// let green = ColorValue::from_24bit(0, 255, 0);
///
/// let hsl = converter.convert(&green, Space::Hsl);
/// assert_eq!(hsl.channels(), &[120.0, 100.0, 50.0]);
///
/// let text = converter.format(&green, Space::Hsl, FormatConfig::default());
/// assert_eq!(text, Ok("hsl(120, 100, 50)".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct Converter<M = PaletteMath> {
    math: M,
    rounding: Rounding,
}

impl Default for Converter<PaletteMath> {
    fn default() -> Self {
        Self::new(PaletteMath, Rounding::default())
    }
}

#[inline]
fn extend3(channels: [Float; 3]) -> [Float; 4] {
    let [c1, c2, c3] = channels;
    [c1, c2, c3, 0.0]
}

impl<M: ColorMath> Converter<M> {
    /// Create a new converter with the given provider and rounding policy.
    pub const fn new(math: M, rounding: Rounding) -> Self {
        Self { math, rounding }
    }

    /// Get the provider.
    pub const fn math(&self) -> &M {
        &self.math
    }

    /// Get the rounding policy for HSL.
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Update the rounding policy for HSL.
    pub fn set_rounding(&mut self, rounding: Rounding) {
        self.rounding = rounding;
    }

    /// Convert the color value to the given color space.
    ///
    /// Conversion always starts from the color value's source coordinates, so
    /// converting a converted value does not accumulate error.
    pub fn convert(&self, color: &ColorValue, space: Space) -> ColorValue {
        use Space::*;

        let rgb = color.to_24bit();
        let channels = match space {
            Hex | Rgb => {
                let [r, g, b] = rgb;
                [r as Float, g as Float, b as Float, 0.0]
            }
            Hsl => extend3(rgb_to_hsl(rgb, self.rounding)),
            Hsb => extend3(rgb_to_hsb(rgb)),
            Cmyk => rgb_to_cmyk(rgb),
            Hwb => extend3(round_device_independent(Hwb, self.math.to_hwb(rgb))),
            Lab => extend3(round_device_independent(Lab, self.math.to_lab(rgb))),
            Lch => extend3(round_device_independent(Lch, self.math.to_lch(rgb))),
            Oklab => extend3(round_device_independent(Oklab, self.math.to_oklab(rgb))),
            Oklch => extend3(round_device_independent(Oklch, self.math.to_oklch(rgb))),
        };

        ColorValue::new(space, channels, rgb)
    }

    /// Convert the color value to the given color space and format it.
    ///
    /// # Errors
    ///
    /// This method returns [`FormatError::UnsupportedSpace`] if the color
    /// space has no notation for the configured syntax.
    pub fn format(
        &self,
        color: &ColorValue,
        space: Space,
        config: FormatConfig,
    ) -> Result<String, FormatError> {
        self.convert(color, space).format(config)
    }

    /// Format the color value in every color space.
    ///
    /// The result lists the color spaces in the same order as [`Space::ALL`].
    /// It is the table of details shown for a swatch. Color spaces without
    /// notation for the configured syntax have an error instead of text.
    pub fn details(
        &self,
        color: &ColorValue,
        config: FormatConfig,
    ) -> Vec<(Space, Result<String, FormatError>)> {
        Space::ALL
            .into_iter()
            .map(|space| (space, self.format(color, space, config)))
            .collect()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Converter;
    use crate::core::{ColorMath, Rounding};
    use crate::error::FormatError;
    use crate::format::{FormatConfig, Syntax, Unit};
    use crate::{ColorValue, Float, Space};

    /// A provider returning the same raw coordinates for every color.
    struct FixedMath;

    impl ColorMath for FixedMath {
        fn to_lab(&self, _: [u8; 3]) -> [Float; 3] {
            [53.2408, 80.0925, 67.2032]
        }

        fn to_lch(&self, _: [u8; 3]) -> [Float; 3] {
            [53.2408, 104.5518, 40.0]
        }

        fn to_oklab(&self, _: [u8; 3]) -> [Float; 3] {
            [0.627955, 0.224863, 0.125846]
        }

        fn to_oklch(&self, _: [u8; 3]) -> [Float; 3] {
            [0.627955, 0.257683, 29.233885]
        }

        fn to_hwb(&self, _: [u8; 3]) -> [Float; 3] {
            [0.0, 0.0, 0.0]
        }
    }

    fn red() -> ColorValue {
        ColorValue::from_24bit(255, 0, 0)
    }

    #[test]
    fn test_convert() {
        let converter = Converter::new(FixedMath, Rounding::Floor);
        let red = red();

        let hex = converter.convert(&red, Space::Hex);
        assert_eq!(hex.space(), Space::Hex);
        assert_eq!(hex.channels(), &[255.0, 0.0, 0.0]);
        assert_eq!(hex.to_24bit(), [255, 0, 0]);

        assert_eq!(
            converter.convert(&red, Space::Hsl).channels(),
            &[0.0, 100.0, 50.0]
        );
        assert_eq!(
            converter.convert(&red, Space::Hsb).channels(),
            &[0.0, 100.0, 100.0]
        );
        assert_eq!(
            converter.convert(&red, Space::Cmyk).channels(),
            &[0.0, 100.0, 100.0, 0.0]
        );
        assert_eq!(
            converter.convert(&red, Space::Lab).channels(),
            &[53.24, 80.09, 67.2]
        );
        assert_eq!(
            converter.convert(&red, Space::Oklab).channels(),
            &[0.628, 0.2249, 0.1258]
        );
        assert_eq!(
            converter.convert(&red, Space::Oklch).channels(),
            &[0.628, 0.2577, 29.23]
        );

        // Converting a converted value starts over from the source.
        let oklch = converter.convert(&red, Space::Oklch);
        assert_eq!(converter.convert(&oklch, Space::Rgb), red);
    }

    #[test]
    fn test_rounding() {
        let gray = ColorValue::from_24bit(127, 127, 127);

        let floor = Converter::new(FixedMath, Rounding::Floor);
        assert_eq!(floor.convert(&gray, Space::Hsl).channels(), &[0.0, 0.0, 49.0]);

        let mut nearest = Converter::new(FixedMath, Rounding::Floor);
        nearest.set_rounding(Rounding::Nearest);
        assert_eq!(nearest.rounding(), Rounding::Nearest);
        assert_eq!(nearest.convert(&gray, Space::Hsl).channels(), &[0.0, 0.0, 50.0]);
    }

    #[test]
    fn test_format() -> Result<(), FormatError> {
        let converter = Converter::new(FixedMath, Rounding::Floor);
        let red = red();

        let config = FormatConfig::new(Syntax::Modern, Unit::Percentage, false);
        assert_eq!(converter.format(&red, Space::Rgb, config)?, "rgb(100% 0% 0%)");
        assert_eq!(
            converter.format(&red, Space::Oklch, config)?,
            "oklch(62.8% 64.42% 29.23)"
        );
        assert_eq!(converter.format(&red, Space::Hex, config)?, "#ff0000");

        assert_eq!(
            converter.format(&red, Space::Lch, FormatConfig::default()),
            Err(FormatError::UnsupportedSpace {
                space: Space::Lch,
                syntax: Syntax::Legacy
            })
        );
        Ok(())
    }

    #[test]
    fn test_details() {
        let converter = Converter::new(FixedMath, Rounding::Floor);
        let details = converter.details(&red(), FormatConfig::default());

        assert_eq!(details.len(), Space::ALL.len());
        assert_eq!(details[0], (Space::Hex, Ok("#ff0000".to_string())));
        assert_eq!(details[1], (Space::Rgb, Ok("rgb(255, 0, 0)".to_string())));
        assert_eq!(details[2], (Space::Hsl, Ok("hsl(0, 100, 50)".to_string())));
        assert!(details[3].1.is_err());
        assert_eq!(details[8], (Space::Hsb, Ok("hsb(0, 100, 100)".to_string())));
        assert_eq!(
            details[9],
            (Space::Cmyk, Ok("cmyk(0, 100, 100, 0)".to_string()))
        );
    }

    #[test]
    fn test_palette_math() {
        let converter = Converter::default();
        let white = ColorValue::from_24bit(255, 255, 255);

        assert_eq!(
            converter.convert(&white, Space::Lab).channels(),
            &[100.0, 0.0, 0.0]
        );
        assert_eq!(
            converter.convert(&white, Space::Hwb).channels(),
            &[0.0, 100.0, 0.0]
        );
        assert_eq!(
            converter.convert(&white, Space::Oklab).channels(),
            &[1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_achromatic_polar() -> Result<(), FormatError> {
        let converter = Converter::default();

        for rgb in [[0, 0, 0], [128, 128, 128], [255, 255, 255]] {
            let gray = ColorValue::from(rgb);
            for space in [Space::Lch, Space::Oklch] {
                let channels = converter.convert(&gray, space).channels().to_vec();
                assert_eq!(channels[1], 0.0, "{:?} in {}", rgb, space);
                assert_eq!(channels[2], 0.0, "{:?} in {}", rgb, space);
            }
        }

        let white = ColorValue::from_24bit(255, 255, 255);
        let config = FormatConfig::new(Syntax::Modern, Unit::Numbers, false);
        assert_eq!(converter.format(&white, Space::Lch, config)?, "lch(100 0 0)");
        assert_eq!(converter.format(&white, Space::Oklch, config)?, "oklch(1 0 0)");
        Ok(())
    }
}
