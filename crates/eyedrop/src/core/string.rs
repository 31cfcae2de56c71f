use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let start = 1 + factor * index;
        let t = s
            .get(start..start + factor)
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Parse the string into 24-bit coordinates.
///
/// This function recognizes the three and six digit hashed hexadecimal
/// formats. Before parsing, it trims leading and trailing white space and
/// converts ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase();
    parse_hashed(lowercase.as_str())
}

// --------------------------------------------------------------------------------------------------------------------

/// Write an already rounded number without trailing zeros.
///
/// Formatting floats with a precision produces trailing zeros. But the numbers
/// are rounded before they get here, so the shortest representation suffices.
/// An integral number needs an explicit precision of zero. Negative zero is
/// written as `0`.
pub(crate) fn write_number(number: Float, out: &mut String) {
    use core::fmt::Write;

    let n = if number == 0.0 { 0.0 } else { number };
    // Writing to a string cannot fail.
    let _ = if n == n.trunc() {
        write!(out, "{:.0}", n)
    } else {
        write!(out, "{}", n)
    };
}

// ====================================================================================================================
