//! Helper module with the options for a picking session.
//!
//! This module provides the options for a [`Session`](crate::session::Session)
//! and the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use eyedrop::opt::{Options, Volume};
//! # use eyedrop::Space;
//! let options = Options::builder()
//!     .palette_space(Space::Oklch)
//!     .volume(Volume::Regular)
//!     .build();
//!
//! assert_eq!(options.palette_space(), Space::Oklch);
//! assert_eq!(options.notice_delay(), 10);
//! ```
//!
//!
//! # Environment Variables
//!
//! [`Options::from_environment`] starts with the defaults and then overrides
//! them from the following environment variables:
//!
//!   * `EYEDROP_FORMAT` holds a format identifier such as
//!     `modern-syntax-numbers`;
//!   * `EYEDROP_PALETTE_SPACE` holds the name of a color space such as `hex`;
//!   * `EYEDROP_LOG` holds a volume such as `regular`.
//!
//! Values that do not parse are ignored.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Rounding, Space};
use crate::error::ConfigError;
use crate::format::FormatConfig;
use crate::notice::NoticeTimer;
use crate::util::{Env, Environment};

/// The diagnostic logging volume.
///
/// Volumes are ordered from silent to detailed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volume {
    #[default]
    Silent,
    Regular,
    Detailed,
}

impl Volume {
    /// Get this volume's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Silent => "silent",
            Self::Regular => "regular",
            Self::Detailed => "detailed",
        }
    }
}

impl core::str::FromStr for Volume {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "regular" => Ok(Self::Regular),
            "detailed" => Ok(Self::Detailed),
            _ => Err(ConfigError::UnknownVolume),
        }
    }
}

impl core::fmt::Display for Volume {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct OptionData {
    volume: Volume,
    format: FormatConfig,
    palette_space: Space,
    rounding: Rounding,
    notice_delay: u32,
    notice_duration: u32,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            volume: Volume::Silent,
            format: FormatConfig::ALL[0],
            palette_space: Space::Hex,
            rounding: Rounding::Floor,
            notice_delay: 10,
            notice_duration: 2_000,
        }
    }
}

impl Default for OptionData {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the format for copying colors.
    pub fn format(&mut self, format: FormatConfig) -> &mut Self {
        self.0.format = format;
        self
    }

    /// Set the color space for copying the whole palette.
    pub fn palette_space(&mut self, space: Space) -> &mut Self {
        self.0.palette_space = space;
        self
    }

    /// Set the rounding policy for HSL.
    pub fn rounding(&mut self, rounding: Rounding) -> &mut Self {
        self.0.rounding = rounding;
        self
    }

    /// Set the delay before a notice becomes visible in milliseconds.
    pub fn notice_delay(&mut self, millis: u32) -> &mut Self {
        self.0.notice_delay = millis;
        self
    }

    /// Set the duration a notice stays visible in milliseconds.
    pub fn notice_duration(&mut self, millis: u32) -> &mut Self {
        self.0.notice_duration = millis;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
///
/// Options serialize as a flat map with kebab-case keys. Missing keys take
/// their default values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(OptionData);

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular debugging output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed debugging output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Create a new builder with these options' values.
    pub fn to_builder(&self) -> OptionBuilder {
        OptionBuilder(self.0.clone())
    }

    /// Instantiate the options from the process environment.
    pub fn from_environment() -> Options {
        Self::from_env(&Env::default())
    }

    /// Instantiate the options from the given environment.
    pub(crate) fn from_env<E: Environment>(env: &E) -> Options {
        let mut builder = Self::builder();

        if let Some(Ok(format)) = env.parse::<FormatConfig>("EYEDROP_FORMAT") {
            builder.format(format);
        }
        if let Some(Ok(space)) = env.parse::<Space>("EYEDROP_PALETTE_SPACE") {
            builder.palette_space(space);
        }
        if let Some(Ok(volume)) = env.parse::<Volume>("EYEDROP_LOG") {
            builder.volume(volume);
        }

        builder.build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Determine whether the volume is anything but silent.
    pub fn verbose(&self) -> bool {
        self.0.volume != Volume::Silent
    }

    /// Get the format for copying colors.
    pub fn format(&self) -> FormatConfig {
        self.0.format
    }

    /// Get the color space for copying the whole palette.
    pub fn palette_space(&self) -> Space {
        self.0.palette_space
    }

    /// Get the rounding policy for HSL.
    pub fn rounding(&self) -> Rounding {
        self.0.rounding
    }

    /// Get the delay before a notice becomes visible in milliseconds.
    pub fn notice_delay(&self) -> u32 {
        self.0.notice_delay
    }

    /// Get the duration a notice stays visible in milliseconds.
    pub fn notice_duration(&self) -> u32 {
        self.0.notice_duration
    }

    /// Create a notice timer with these options' delay and duration.
    pub fn notice_timer(&self) -> NoticeTimer {
        NoticeTimer::new(
            Duration::from_millis(self.0.notice_delay.into()),
            Duration::from_millis(self.0.notice_duration.into()),
        )
    }
}

// ====================================================================================================================
