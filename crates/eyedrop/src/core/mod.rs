mod conversion;
mod equality;
mod provider;
mod space;
mod string;

// conversion
pub use conversion::Rounding;
pub(crate) use conversion::{
    rgb_to_cmyk, rgb_to_hex, rgb_to_hsb, rgb_to_hsl, round_device_independent, to_percentages,
};

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_channels;

// provider
pub use provider::{ColorMath, PaletteMath};

// space
pub use space::{Channel, Space};

// string
pub(crate) use string::{parse, write_number};
