use palette::white_point::D65;
use palette::{FromColor, Hwb, Lab, Lch, Oklab, Oklch, Srgb};

use crate::Float;

/// A provider of color science.
///
/// The device-independent color spaces require nonlinear transforms from sRGB
/// through XYZ. Instead of reimplementing them, eyedrop delegates to a
/// provider. Every method takes 24-bit sRGB coordinates and returns raw,
/// unrounded coordinates:
///
///   * CIELAB and CIELCh with lightness in `0..=100`;
///   * Oklab and Oklch with lightness in `0..=1`;
///   * HWB with whiteness and blackness in `0..=1`;
///   * all hues in degrees.
///
/// [`PaletteMath`] is the default provider.
pub trait ColorMath {
    /// Convert to CIELAB L, a, b.
    fn to_lab(&self, rgb: [u8; 3]) -> [Float; 3];

    /// Convert to CIELCh L, C, hº.
    fn to_lch(&self, rgb: [u8; 3]) -> [Float; 3];

    /// Convert to Oklab L, a, b.
    fn to_oklab(&self, rgb: [u8; 3]) -> [Float; 3];

    /// Convert to Oklch L, C, hº.
    fn to_oklch(&self, rgb: [u8; 3]) -> [Float; 3];

    /// Convert to HWB hº, w, b.
    fn to_hwb(&self, rgb: [u8; 3]) -> [Float; 3];
}

impl<M: ColorMath + ?Sized> ColorMath for &M {
    fn to_lab(&self, rgb: [u8; 3]) -> [Float; 3] {
        (**self).to_lab(rgb)
    }

    fn to_lch(&self, rgb: [u8; 3]) -> [Float; 3] {
        (**self).to_lch(rgb)
    }

    fn to_oklab(&self, rgb: [u8; 3]) -> [Float; 3] {
        (**self).to_oklab(rgb)
    }

    fn to_oklch(&self, rgb: [u8; 3]) -> [Float; 3] {
        (**self).to_oklch(rgb)
    }

    fn to_hwb(&self, rgb: [u8; 3]) -> [Float; 3] {
        (**self).to_hwb(rgb)
    }
}

/// The default color science provider, backed by the
/// [palette](https://crates.io/crates/palette) crate.
///
/// CIELAB and CIELCh use the D65 white point, which is also sRGB's white
/// point, so that no chromatic adaptation is necessary.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaletteMath;

#[inline]
fn srgb(rgb: [u8; 3]) -> Srgb<Float> {
    let [r, g, b] = rgb;
    Srgb::new(r, g, b).into_format()
}

impl ColorMath for PaletteMath {
    fn to_lab(&self, rgb: [u8; 3]) -> [Float; 3] {
        let lab = Lab::<D65, Float>::from_color(srgb(rgb));
        [lab.l, lab.a, lab.b]
    }

    fn to_lch(&self, rgb: [u8; 3]) -> [Float; 3] {
        let lch = Lch::<D65, Float>::from_color(srgb(rgb));
        [lch.l, lch.chroma, lch.hue.into_positive_degrees()]
    }

    fn to_oklab(&self, rgb: [u8; 3]) -> [Float; 3] {
        let oklab = Oklab::<Float>::from_color(srgb(rgb));
        [oklab.l, oklab.a, oklab.b]
    }

    fn to_oklch(&self, rgb: [u8; 3]) -> [Float; 3] {
        let oklch = Oklch::<Float>::from_color(srgb(rgb));
        [oklch.l, oklch.chroma, oklch.hue.into_positive_degrees()]
    }

    fn to_hwb(&self, rgb: [u8; 3]) -> [Float; 3] {
        let hwb = Hwb::<palette::encoding::Srgb, Float>::from_color(srgb(rgb));
        [hwb.hue.into_positive_degrees(), hwb.whiteness, hwb.blackness]
    }
}

// ====================================================================================================================
