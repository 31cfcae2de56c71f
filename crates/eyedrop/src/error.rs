//! Utility module with eyedrop's errors.

use crate::format::Syntax;
use crate::Space;

/// An erroneous hashed hexadecimal color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color that does not start with `#`.
    UnknownFormat,

    /// A color with an unexpected number of characters. For example, `#00` is
    /// missing a hexadecimal digit, whereas `#💩00` has the right number of
    /// bytes but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color with a malformed hexadecimal coordinate. For example, `#efg`
    /// has a malformed third coordinate.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str("color should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color should have 3 or 6 hexadecimal digits after the `#`")
            }
            MalformedHex => {
                f.write_str("color coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An error while formatting a color as text.
///
/// Formatting never guesses. If the requested combination has no valid
/// notation, the caller gets this error instead of a string and should tell
/// the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The color space has no notation for the syntax. Currently, that is the
    /// case for the legacy, comma-separated syntax and HWB, CIELAB, CIELCh,
    /// Oklab, and Oklch.
    UnsupportedSpace { space: Space, syntax: Syntax },

    /// The number of channels does not match the color space.
    ChannelCount { space: Space, count: usize },
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::UnsupportedSpace { space, syntax } => f.write_fmt(format_args!(
                "{} colors cannot be formatted with {} syntax",
                space, syntax
            )),
            Self::ChannelCount { space, count } => f.write_fmt(format_args!(
                "{} colors have {} channels, not {}",
                space,
                space.arity(),
                count
            )),
        }
    }
}

impl std::error::Error for FormatError {}

// ====================================================================================================================

/// An unrecognized configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A format identifier other than the eight known ones, e.g.,
    /// `modern-syntax`.
    UnknownFormat,
    /// A color space name other than `hex`, `rgb`, `hsl`, `hwb`, `lab`,
    /// `lch`, `oklab`, `oklch`, `hsb`, or `cmyk`.
    UnknownSpace,
    /// A logging volume other than `silent`, `regular`, or `detailed`.
    UnknownVolume,
    /// A rounding policy other than `floor` or `nearest`.
    UnknownRounding,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ConfigError::*;

        match *self {
            UnknownFormat => {
                f.write_str("format should be one of the 8 legacy or modern syntaxes")
            }
            UnknownSpace => f.write_str(
                "color space should be hex, rgb, hsl, hwb, lab, lch, oklab, oklch, hsb, or cmyk",
            ),
            UnknownVolume => f.write_str("volume should be silent, regular, or detailed"),
            UnknownRounding => f.write_str("rounding should be floor or nearest"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorFormatError, ConfigError, FormatError};
    use crate::format::{FormatConfig, Syntax};
    use crate::Space;

    #[test]
    fn test_display() {
        assert_eq!(
            FormatError::UnsupportedSpace {
                space: Space::Lab,
                syntax: Syntax::Legacy
            }
            .to_string(),
            "lab colors cannot be formatted with legacy syntax"
        );
        assert_eq!(
            FormatError::ChannelCount {
                space: Space::Cmyk,
                count: 3
            }
            .to_string(),
            "cmyk colors have 4 channels, not 3"
        );
        assert_eq!(
            ColorFormatError::UnknownFormat.to_string(),
            "color should start with `#`"
        );
        assert!(ConfigError::UnknownSpace.to_string().contains("oklch"));
    }

    #[test]
    fn test_unknown_format() {
        assert_eq!(
            "modern-syntax".parse::<FormatConfig>(),
            Err(ConfigError::UnknownFormat)
        );
        assert!("modern-syntax-only-numbers".parse::<FormatConfig>().is_ok());
    }
}
