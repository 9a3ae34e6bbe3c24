//! Conversion to and from hex-encoded strings
//!
//! Ledger primitives such as hashes and addresses are commonly handed around
//! as hex strings rather than raw bytes. The helpers in this module are used
//! by those primitives to accept either form on encode, and to render byte
//! values in diagnostics.

use crate::error::HexConvError;
use std::fmt::Write;

/// Formats a sequence of bytes into an undelimited lowercase hexadecimal `String`
///
/// # Examples
///
/// ```
/// # use uplc_cast::hexstring::hex_of_bytes;
/// assert_eq!(hex_of_bytes(&[0xde, 0xad, 0xbe, 0xef]), String::from("deadbeef"));
/// ```
#[must_use]
pub fn hex_of_bytes(bytes: &[u8]) -> String {
    let mut hex: String = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        match write!(&mut hex, "{byte:02x}") {
            Ok(_) => (),
            Err(_) => unreachable!("write to String should never fail"),
        };
    }
    hex
}

/// Attempt to parse a hexadecimally encoded string, returning either
/// a `Vec<u8>` holding the decoded bytes or an error containing the invalid
/// string.
///
/// # Errors
///
/// If `src` has odd length, `Err(OddParity)` is returned.
///
/// Otherwise, if `src` contains any character that is not a valid
/// hexadecimal digit (case-insensitive), returns `Err(NonHex)`.
///
/// # Examples
///
/// ```
/// # use uplc_cast::hexstring::bytes_of_hex;
/// assert_eq!(Ok(vec![0xde, 0xad, 0xbe, 0xef]), bytes_of_hex("deadbeef"));
/// ```
pub fn bytes_of_hex(src: &str) -> Result<Vec<u8>, HexConvError> {
    let ascii_len = src.len();

    if ascii_len % 2 != 0 {
        return Err(HexConvError::OddParity(src.to_owned()));
    }

    let mut dst = Vec::with_capacity(ascii_len / 2);

    for ix in (0..ascii_len).step_by(2) {
        match src
            .get(ix..ix + 2)
            .filter(|pair| pair.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        {
            Some(word) => dst.push(word),
            None => return Err(HexConvError::NonHex(src.to_owned())),
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_conv() {
        assert_eq!(bytes_of_hex(""), Ok(Vec::new()));
        assert_eq!(bytes_of_hex("00FFa0"), Ok(vec![0x00, 0xff, 0xa0]));
        assert_eq!(hex_of_bytes(&[0x00, 0xff, 0xa0]), "00ffa0");
    }

    #[test]
    fn hex_conv_errors() {
        assert_eq!(
            bytes_of_hex("abc"),
            Err(HexConvError::OddParity("abc".into()))
        );
        assert_eq!(
            bytes_of_hex("zz"),
            Err(HexConvError::NonHex("zz".into()))
        );
        // multibyte characters must not split a char boundary
        assert!(matches!(bytes_of_hex("aéa"), Err(HexConvError::NonHex(_))));
        // integer sign prefixes are not hex digits
        assert_eq!(
            bytes_of_hex("+a+b"),
            Err(HexConvError::NonHex("+a+b".into()))
        );
        assert_eq!(
            bytes_of_hex("-1"),
            Err(HexConvError::NonHex("-1".into()))
        );
    }
}
