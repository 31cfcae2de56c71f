use crate::core::{parse, rgb_to_hex, to_eq_channels, to_percentages, Space};
use crate::error::{ColorFormatError, FormatError};
use crate::format::{render, FormatConfig, Syntax, Unit};
use crate::Float;

/// A sampled color.
///
/// Every color value has a [color space](Space), the channels for that color
/// space, and the 24-bit sRGB coordinates it was derived from. A pixel sample
/// starts out as an RGB value. [`Converter::convert`](crate::Converter::convert)
/// derives values in other color spaces, which all remember the same source.
///
/// # Channels
///
/// The number and meaning of channels depends on the color space:
///
///   * RGB and hex have three integral channels `0..=255`;
///   * HSL and HSB have an integral hue `0..360` followed by two integral
///     percentages;
///   * CMYK has four integral percentages;
///   * HWB has an integral hue followed by whiteness and blackness in percent;
///   * CIELAB, CIELCh, Oklab, and Oklch have channels rounded to two or four
///     decimals.
///
/// # Equality Testing and Hashing
///
/// Two color values are equal if they have the same color space and channels.
/// Equality testing and hashing normalize channels with the same function, so
/// negative zero and positive zero compare equal. Note that values in
/// different color spaces never are equal, even if they share the same source.
/// The palette deduplicates on [`ColorValue::to_24bit`] instead.
///
/// # Examples
///
/// ```
/// # use eyedrop::{ColorValue, Space};
/// # use eyedrop::error::ColorFormatError;
/// let value: ColorValue = "#FF0AAB".parse()?;
/// assert_eq!(value.space(), Space::Rgb);
/// assert_eq!(value.channels(), &[255.0, 10.0, 171.0]);
/// assert_eq!(value.to_hex_format(), "#ff0aab");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Clone)]
pub struct ColorValue {
    space: Space,
    channels: [Float; 4],
    source: [u8; 3],
}

impl ColorValue {
    /// Instantiate a new color value with the given space, channels, and
    /// source. The caller is responsible for channels matching the space.
    #[inline]
    pub(crate) const fn new(space: Space, channels: [Float; 4], source: [u8; 3]) -> Self {
        Self {
            space,
            channels,
            source,
        }
    }

    /// Instantiate a new RGB color value from 24-bit coordinates.
    ///
    /// This is the only way of creating a color value from scratch; all other
    /// color spaces are derived by conversion.
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            Space::Rgb,
            [r as Float, g as Float, b as Float, 0.0],
            [r, g, b],
        )
    }

    /// Get this color value's space.
    #[inline]
    pub const fn space(&self) -> Space {
        self.space
    }

    /// Get this color value's channels. There are as many channels as the
    /// color space's [arity](Space::arity).
    #[inline]
    pub fn channels(&self) -> &[Float] {
        &self.channels[..self.space.arity()]
    }

    /// Get the 24-bit sRGB coordinates this color value was derived from.
    #[inline]
    pub const fn to_24bit(&self) -> [u8; 3] {
        self.source
    }

    /// Format the source coordinates in `#rrggbb` notation.
    pub fn to_hex_format(&self) -> String {
        rgb_to_hex(self.source)
    }

    /// Determine whether this color value is a gray, i.e., has the same red,
    /// green, and blue coordinates.
    pub fn is_achromatic(&self) -> bool {
        let [r, g, b] = self.source;
        r == g && g == b
    }

    /// Format this color value as text.
    ///
    /// If the configuration calls for percentages, this method first scales
    /// magnitudes by their reference quantity and then
    /// [renders](crate::format::render) the result.
    ///
    /// # Errors
    ///
    /// This method returns [`FormatError::UnsupportedSpace`] if the color
    /// space has no notation for the configured syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eyedrop::ColorValue;
    /// # use eyedrop::format::FormatConfig;
    /// # use eyedrop::error::FormatError;
    /// let red = ColorValue::from_24bit(255, 0, 0);
    /// let config: FormatConfig = "legacy-syntax-percentage-commas".parse().unwrap();
    /// assert_eq!(red.format(config)?, "rgb(100%, 0%, 0%)");
    /// # Ok::<(), FormatError>(())
    /// ```
    pub fn format(&self, config: FormatConfig) -> Result<String, FormatError> {
        match config.unit {
            Unit::Numbers => render(config, self.space, self.channels()),
            Unit::Percentage => {
                let scaled = to_percentages(self.space, &self.channels);
                render(config, self.space, &scaled[..self.space.arity()])
            }
        }
    }
}

impl core::str::FromStr for ColorValue {
    type Err = ColorFormatError;

    /// Parse a color in hashed hexadecimal notation into an RGB color value.
    ///
    /// The string may have three or six hexadecimal digits. Leading and
    /// trailing white space is ignored and so is letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|[r, g, b]| Self::from_24bit(r, g, b))
    }
}

impl TryFrom<&str> for ColorValue {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<[u8; 3]> for ColorValue {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::from_24bit(r, g, b)
    }
}

impl core::hash::Hash for ColorValue {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);
        to_eq_channels(&self.channels).hash(state);
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.space == other.space
            && to_eq_channels(&self.channels) == to_eq_channels(&other.channels)
    }
}

impl Eq for ColorValue {}

impl core::fmt::Debug for ColorValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "ColorValue({:?}, {:?}, {})",
            self.space,
            self.channels(),
            self.to_hex_format()
        ))
    }
}

impl core::fmt::Display for ColorValue {
    /// Format this color value with modern syntax and numbers.
    ///
    /// Every color space has a modern notation, so formatting cannot fail.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let config = FormatConfig::new(Syntax::Modern, Unit::Numbers, false);
        let text = self.format(config).map_err(|_| core::fmt::Error)?;
        f.write_str(&text)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::ColorValue;
    use crate::error::ColorFormatError;
    use crate::format::FormatConfig;
    use crate::Space;

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        for _ in 0..1_000 {
            let rgb = [
                rand::random::<u8>(),
                rand::random::<u8>(),
                rand::random::<u8>(),
            ];
            let value = ColorValue::from(rgb);
            let parsed: ColorValue = value.to_hex_format().parse()?;
            assert_eq!(parsed.to_24bit(), rgb);
            assert_eq!(parsed, value);
        }

        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        let value = ColorValue::try_from(" #0F8 ")?;
        assert_eq!(value.space(), Space::Rgb);
        assert_eq!(value.to_24bit(), [0x00, 0xff, 0x88]);
        assert_eq!(
            "0f8".parse::<ColorValue>(),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }

    #[test]
    fn test_display() {
        let value = ColorValue::from_24bit(255, 0, 0);
        assert_eq!(value.to_string(), "rgb(255 0 0)");
        assert_eq!(
            format!("{:?}", value),
            "ColorValue(Rgb, [255.0, 0.0, 0.0], #ff0000)"
        );
        assert!(!value.is_achromatic());
        assert!(ColorValue::from_24bit(7, 7, 7).is_achromatic());
    }

    #[test]
    fn test_format() {
        let value = ColorValue::from_24bit(255, 0, 51);
        let config = FormatConfig::default();
        assert_eq!(value.format(config), Ok("rgb(255, 0, 51)".to_string()));

        let config: FormatConfig = "modern-syntax-only-percentage"
            .parse()
            .expect("format id is valid");
        assert_eq!(value.format(config), Ok("100% 0% 20%".to_string()));
    }
}
