//! # Eyedrop 💧
//!
//! Eyedrop is the engine behind an image color picker. It turns a sampled
//! pixel into text for ten color spaces, honoring a configurable syntax, and
//! keeps a palette of the colors picked so far.
//!
//!
//! ## 1. Overview
//!
//! Eyedrop's main abstractions are:
//!
//!   * [`ColorValue`] is a **sampled color** in one of the ten color spaces
//!     enumerated by [`Space`]. It remembers the 24-bit sRGB coordinates it
//!     was derived from.
//!   * [`Converter`] implements **conversion between color spaces**. It
//!     derives RGB, hex, HSL, HSB, and CMYK by itself and delegates CIELAB,
//!     CIELCh, Oklab, Oklch, and HWB to a [`ColorMath`] provider, by default
//!     [`PaletteMath`].
//!   * The [`format`] module renders colors as **text** according to a
//!     [`FormatConfig`](format::FormatConfig), which combines legacy or modern
//!     syntax, numbers or percentages, and wrapped or bare notation.
//!   * The [`store`] module maintains the **palette** of selected colors,
//!     without duplicates and with at most one selected entry.
//!   * The [`session`] module ties everything together for one **picking
//!     session**, including clipboard, notices, and logging, configured by
//!     [`Options`](opt::Options).
//!
//!
//! ## 2. Picking Colors
//!
//! ```
//! # use eyedrop::{ColorValue, Converter, Space};
//! # use eyedrop::error::FormatError;
//! # use eyedrop::format::{FormatConfig, Syntax, Unit};
//! let converter = Converter::default();
//! let pixel = ColorValue::from_24bit(255, 0, 0);
//!
//! let legacy = FormatConfig::default();
//! assert_eq!(converter.format(&pixel, Space::Rgb, legacy)?, "rgb(255, 0, 0)");
//! assert_eq!(converter.format(&pixel, Space::Cmyk, legacy)?, "cmyk(0, 100, 100, 0)");
//! assert!(converter.format(&pixel, Space::Oklch, legacy).is_err());
//!
//! let modern = FormatConfig::new(Syntax::Modern, Unit::Percentage, false);
//! assert_eq!(converter.format(&pixel, Space::Hsl, modern)?, "hsl(0 100% 50%)");
//! # Ok::<(), FormatError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Eyedrop supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod converter;
mod core;
pub mod error;
pub mod format;
pub mod notice;
pub mod opt;
pub mod session;
pub mod store;
mod util;
mod value;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use converter::Converter;
pub use core::{Channel, ColorMath, PaletteMath, Rounding, Space};
pub use value::ColorValue;
