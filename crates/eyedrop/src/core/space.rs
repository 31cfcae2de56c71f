use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The kind of a color channel.
///
/// The distinction matters when formatting with percentages: Magnitudes take a
/// `%` suffix, whereas hues always are plain numbers of degrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Magnitude,
}

use Channel::{Hue, Magnitude};

const MMM: [Channel; 3] = [Magnitude, Magnitude, Magnitude];
const HMM: [Channel; 3] = [Hue, Magnitude, Magnitude];
const MMH: [Channel; 3] = [Magnitude, Magnitude, Hue];
const MMMM: [Channel; 4] = [Magnitude, Magnitude, Magnitude, Magnitude];

/// The enumeration of color spaces a picked color can be shown in.
///
/// # Device-Dependent Spaces
///
/// sRGB with 24-bit coordinates is the source of every picked color. The
/// hashed hexadecimal notation packs those same bytes. HSL and HSB (also known
/// as HSV) are cylindrical rearrangements of the RGB cube, and CMYK is the
/// naive subtractive counterpart. All of them are derived by hand from the
/// 24-bit coordinates.
///
/// # Device-Independent Spaces
///
/// CIELAB, its polar form CIELCh, Oklab, its polar form Oklch, and HWB require
/// actual color science. Their conversion is delegated to a
/// [`ColorMath`](crate::ColorMath) provider. None of them has a legacy,
/// comma-separated CSS notation.
///
/// # Channels
///
/// | Space | Channels            |
/// | ----- | ------------------- |
/// | hex   | r, g, b             |
/// | rgb   | r, g, b             |
/// | hsl   | hº, s, l            |
/// | hwb   | hº, w, b            |
/// | lab   | L, a, b             |
/// | lch   | L, C, hº            |
/// | oklab | L, a, b             |
/// | oklch | L, C, hº            |
/// | hsb   | hº, s, b            |
/// | cmyk  | c, m, y, k          |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    Hex,
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
    Hsb,
    Cmyk,
}

impl Space {
    /// All color spaces, in the order a swatch's details list them.
    pub const ALL: [Space; 10] = [
        Space::Hex,
        Space::Rgb,
        Space::Hsl,
        Space::Hwb,
        Space::Lab,
        Space::Lch,
        Space::Oklab,
        Space::Oklch,
        Space::Hsb,
        Space::Cmyk,
    ];

    /// Get the number of channels.
    pub const fn arity(&self) -> usize {
        match *self {
            Self::Cmyk => 4,
            _ => 3,
        }
    }

    /// Determine whether this color space is derived by a
    /// [`ColorMath`](crate::ColorMath) provider.
    pub const fn is_device_independent(&self) -> bool {
        use Space::*;
        matches!(*self, Hwb | Lab | Lch | Oklab | Oklch)
    }

    /// Determine whether this color space is polar, i.e., has a hue.
    pub const fn is_polar(&self) -> bool {
        use Space::*;
        matches!(*self, Hsl | Hwb | Lch | Oklch | Hsb)
    }

    /// Get the kinds of this color space's channels.
    pub const fn channels(&self) -> &'static [Channel] {
        use Space::*;
        match *self {
            Hex | Rgb | Lab | Oklab => &MMM,
            Hsl | Hwb | Hsb => &HMM,
            Lch | Oklch => &MMH,
            Cmyk => &MMMM,
        }
    }

    /// Get this color space's name.
    ///
    /// Except for hex, the name doubles as CSS-like function name.
    pub const fn name(&self) -> &'static str {
        use Space::*;
        match *self {
            Hex => "hex",
            Rgb => "rgb",
            Hsl => "hsl",
            Hwb => "hwb",
            Lab => "lab",
            Lch => "lch",
            Oklab => "oklab",
            Oklch => "oklch",
            Hsb => "hsb",
            Cmyk => "cmyk",
        }
    }
}

impl core::str::FromStr for Space {
    type Err = ConfigError;

    /// Parse the name of a color space. Parsing is case-insensitive and ignores
    /// surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Space::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or(ConfigError::UnknownSpace)
    }
}

impl core::fmt::Display for Space {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
