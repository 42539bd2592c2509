//! Lowercase-hex rendering shared by the fixed-width byte newtypes.

use std::fmt::{self, Write};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Write `bytes` as lowercase hex, two characters per byte.
pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for &byte in bytes {
        f.write_char(HEX_DIGITS[usize::from(byte >> 4)] as char)?;
        f.write_char(HEX_DIGITS[usize::from(byte & 0x0f)] as char)?;
    }
    Ok(())
}

/// The abbreviated `Name(xxxxxxxx…)` form the byte newtypes use for
/// `Debug`: the type name and the first four bytes, so logs stay readable
/// while still distinguishing values.
pub(crate) fn write_abbreviated(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    bytes: &[u8],
) -> fmt::Result {
    f.write_str(name)?;
    f.write_char('(')?;
    write_hex(f, &bytes[..4])?;
    f.write_str("\u{2026})")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hex<'a>(&'a [u8]);

    impl fmt::Display for Hex<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_hex(f, self.0)
        }
    }

    #[test]
    fn agrees_with_std_per_byte_formatting() {
        let bytes = [0x00, 0x0f, 0xa5, 0xff, 0x3c];
        let expected: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(Hex(&bytes).to_string(), expected);
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(Hex(&[]).to_string(), "");
    }
}
