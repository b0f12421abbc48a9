use crate::error::WireError;

/// The single octet separating an octet count from the frame content.
pub const SEPARATOR: u8 = b' ';

/// Read the decimal octet count starting at `offset` in `buf`.
///
/// The digit run is taken greedily: every consecutive ASCII digit belongs
/// to the count. Leading zeros are accepted and carry no meaning, so
/// `007` reads as 7 with 3 digits consumed.
///
/// # Returns
///
/// `(octet_count, digits_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::MissingLength`] if the byte at `offset` is not a digit
///   (including when `offset` is at or past the end of `buf`).
/// - [`WireError::LengthOverflow`] if the digit run exceeds `usize::MAX`.
///
/// # Wire format examples
///
/// | Input         | Count | Digits |
/// |---------------|-------|--------|
/// | `5 hello`     | 5     | 1      |
/// | `58 <34>1 …`  | 58    | 2      |
/// | `007 abcdefg` | 7     | 3      |
/// | `0 `          | 0     | 1      |
pub fn decode_length_prefix(buf: &[u8], offset: usize) -> Result<(usize, usize), WireError> {
    let rest = buf.get(offset..).unwrap_or_default();

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(WireError::MissingLength { offset });
    }

    let mut value: usize = 0;
    for &byte in &rest[..digits] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(byte - b'0')))
            .ok_or(WireError::LengthOverflow { offset })?;
    }

    Ok((value, digits))
}

/// Check that the octet at `offset` is the frame separator.
///
/// # Errors
///
/// [`WireError::MissingSeparator`] if the octet is absent or not a space.
pub fn expect_separator(buf: &[u8], offset: usize) -> Result<(), WireError> {
    match buf.get(offset) {
        Some(&SEPARATOR) => Ok(()),
        _ => Err(WireError::MissingSeparator { offset }),
    }
}

/// Number of decimal digits needed to write `value`.
pub fn prefix_width(value: usize) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}
