//! Formatting colors as text.
//!
//! A [`FormatConfig`] combines three independent choices:
//!
//!   * the [`Syntax`], i.e., legacy with commas or modern with spaces;
//!   * the [`Unit`], i.e., plain numbers or percentages;
//!   * whether the result is bare, i.e., lacks the `name(...)` wrapper.
//!
//! That makes for eight configurations, each with a stable identifier such as
//! `legacy-syntax-numbers-commas` or `modern-syntax-only-percentage`. The
//! `only` infix marks bare formats.
//!
//! [`render`] turns a color space and its channels into text. It does not
//! round. Numbers are written in their shortest form without trailing zeros.
//!
//! ```
//! # use eyedrop::format::{render, FormatConfig, Syntax, Unit};
//! # use eyedrop::error::FormatError;
//! # use eyedrop::Space;
//! let modern = FormatConfig::new(Syntax::Modern, Unit::Percentage, true);
//! assert_eq!(modern.id(), "modern-syntax-only-percentage");
//! assert_eq!(render(modern, Space::Hsl, &[120.0, 100.0, 50.0])?, "120 100% 50%");
//!
//! let legacy = FormatConfig::default();
//! assert_eq!(legacy.id(), "legacy-syntax-numbers-commas");
//! assert_eq!(render(legacy, Space::Rgb, &[255.0, 0.0, 0.0])?, "rgb(255, 0, 0)");
//! assert_eq!(
//!     render(legacy, Space::Lab, &[53.24, 80.09, 67.2]),
//!     Err(FormatError::UnsupportedSpace { space: Space::Lab, syntax: Syntax::Legacy })
//! );
//! # Ok::<(), FormatError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{rgb_to_hex, write_number, Channel, Space};
use crate::error::{ConfigError, FormatError};
use crate::Float;

/// The syntax for formatting colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// The comma-separated syntax, e.g., `rgb(255, 0, 0)`.
    #[default]
    Legacy,
    /// The space-separated syntax, e.g., `rgb(255 0 0)`.
    Modern,
}

impl Syntax {
    /// Get the separator between channels.
    pub const fn separator(&self) -> &'static str {
        match *self {
            Self::Legacy => ", ",
            Self::Modern => " ",
        }
    }

    /// Determine whether colors in the given space can be formatted with this
    /// syntax.
    ///
    /// The legacy syntax predates HWB, CIELAB, CIELCh, Oklab, and Oklch.
    pub const fn supports(&self, space: Space) -> bool {
        use Space::*;

        match (*self, space) {
            (Self::Legacy, Hex | Rgb | Hsl | Hsb | Cmyk) => true,
            (Self::Legacy, Hwb | Lab | Lch | Oklab | Oklch) => false,
            (Self::Modern, _) => true,
        }
    }

    /// Get this syntax's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Legacy => "legacy",
            Self::Modern => "modern",
        }
    }
}

impl core::fmt::Display for Syntax {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The unit for channel magnitudes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Plain numbers.
    #[default]
    Numbers,
    /// Percentages. Hues are exempt and always are plain numbers of degrees.
    Percentage,
}

impl Unit {
    /// Get this unit's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Numbers => "numbers",
            Self::Percentage => "percentage",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A format configuration.
///
/// The configuration serializes as its identifier, so that hosts can persist
/// it as a single string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FormatConfig {
    pub syntax: Syntax,
    pub unit: Unit,
    pub bare: bool,
}

impl FormatConfig {
    /// All eight format configurations, in the order of the settings panel.
    pub const ALL: [FormatConfig; 8] = [
        Self::new(Syntax::Legacy, Unit::Numbers, false),
        Self::new(Syntax::Legacy, Unit::Numbers, true),
        Self::new(Syntax::Legacy, Unit::Percentage, false),
        Self::new(Syntax::Legacy, Unit::Percentage, true),
        Self::new(Syntax::Modern, Unit::Numbers, false),
        Self::new(Syntax::Modern, Unit::Numbers, true),
        Self::new(Syntax::Modern, Unit::Percentage, false),
        Self::new(Syntax::Modern, Unit::Percentage, true),
    ];

    /// Create a new format configuration.
    pub const fn new(syntax: Syntax, unit: Unit, bare: bool) -> Self {
        Self { syntax, unit, bare }
    }

    /// Get the identifier for this format configuration.
    pub const fn id(&self) -> &'static str {
        use Syntax::*;
        use Unit::*;

        match (self.syntax, self.unit, self.bare) {
            (Legacy, Numbers, false) => "legacy-syntax-numbers-commas",
            (Legacy, Numbers, true) => "legacy-syntax-only-numbers-commas",
            (Legacy, Percentage, false) => "legacy-syntax-percentage-commas",
            (Legacy, Percentage, true) => "legacy-syntax-only-percentage-commas",
            (Modern, Numbers, false) => "modern-syntax-numbers",
            (Modern, Numbers, true) => "modern-syntax-only-numbers",
            (Modern, Percentage, false) => "modern-syntax-percentage",
            (Modern, Percentage, true) => "modern-syntax-only-percentage",
        }
    }
}

impl core::str::FromStr for FormatConfig {
    type Err = ConfigError;

    /// Parse a format identifier. Parsing is case-insensitive and ignores
    /// surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|config| config.id() == id)
            .ok_or(ConfigError::UnknownFormat)
    }
}

impl TryFrom<String> for FormatConfig {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormatConfig> for String {
    fn from(value: FormatConfig) -> Self {
        value.id().to_string()
    }
}

impl core::fmt::Display for FormatConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

// ====================================================================================================================

/// Convert a channel to a byte, saturating at both ends.
#[inline]
fn to_byte(channel: Float) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

/// Render the channels of a color in the given space as text.
///
/// Hex always renders as `#rrggbb`, no matter the configuration. All other
/// color spaces render their channels joined by the syntax's separator. If
/// the unit is percentage, magnitudes take a `%` suffix but hues do not. The
/// result is wrapped as `name(...)` unless the configuration is bare.
///
/// This function does not scale or round channels. Use
/// [`ColorValue::format`](crate::ColorValue::format) for that.
///
/// # Errors
///
/// This function returns [`FormatError::ChannelCount`] if the number of
/// channels does not match the color space and
/// [`FormatError::UnsupportedSpace`] if the syntax has no notation for the
/// color space.
pub fn render(config: FormatConfig, space: Space, channels: &[Float]) -> Result<String, FormatError> {
    if channels.len() != space.arity() {
        return Err(FormatError::ChannelCount {
            space,
            count: channels.len(),
        });
    } else if !config.syntax.supports(space) {
        return Err(FormatError::UnsupportedSpace {
            space,
            syntax: config.syntax,
        });
    }

    if let (Space::Hex, &[r, g, b]) = (space, channels) {
        return Ok(rgb_to_hex([to_byte(r), to_byte(g), to_byte(b)]));
    }

    let mut text = String::with_capacity(32);
    if !config.bare {
        text.push_str(space.name());
        text.push('(');
    }

    for (index, (channel, kind)) in channels.iter().zip(space.channels()).enumerate() {
        if 0 < index {
            text.push_str(config.syntax.separator());
        }

        write_number(*channel, &mut text);
        if config.unit == Unit::Percentage && *kind == Channel::Magnitude {
            text.push('%');
        }
    }

    if !config.bare {
        text.push(')');
    }

    Ok(text)
}

// ====================================================================================================================
