use bytes::Bytes;

use crate::{error::FromStrError, Address, Binary, Hash};

/// Strips every leading `0x` / `0X` prefix.
pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    let mut rest = input;
    while let Some(tail) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
    {
        rest = tail;
    }
    rest
}

fn hex_value(chr: u8, idx: usize) -> Result<u8, FromStrError> {
    match chr {
        b'0'..=b'9' => Ok(chr - b'0'),
        b'a'..=b'f' => Ok(chr - b'a' + 10),
        b'A'..=b'F' => Ok(chr - b'A' + 10),
        _ => Err(FromStrError::InvalidCharacter { chr, idx }),
    }
}

fn decode_hex(input: &str) -> Result<Bytes, FromStrError> {
    let digits = strip_hex_prefix(input);
    if input.is_empty() {
        return Err(FromStrError::InvalidLength(0));
    }
    if digits.len() % 2 != 0 {
        return Err(FromStrError::InvalidLength(digits.len()));
    }
    // Error positions refer to the original input, prefixes included.
    let offset = input.len() - digits.len();
    let mut buffer = vec![0u8; digits.len() / 2];
    for (idx, chr) in digits.bytes().enumerate() {
        let val = hex_value(chr, offset + idx)?;
        buffer[idx / 2] |= if idx % 2 == 0 { val << 4 } else { val };
    }
    Ok(Bytes::from(buffer))
}

impl ::std::str::FromStr for Binary {
    type Err = FromStrError;

    /// Parses an even-length hexadecimal string, optionally carrying one or
    /// more `0x` prefixes. A bare prefix with zero digits parses to the empty
    /// value; the empty string does not parse.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        decode_hex(input).map(Binary)
    }
}

macro_rules! impl_fixed_fromstr {
    ($name:ident, $bytes_size:expr) => {
        impl ::std::str::FromStr for $name {
            type Err = FromStrError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let binary: Binary = input.parse()?;
                if binary.len() != $bytes_size {
                    return Err(FromStrError::InvalidLength(binary.len() * 2));
                }
                Ok($name(binary))
            }
        }
    };
}

impl_fixed_fromstr!(Address, 20);
impl_fixed_fromstr!(Hash, 32);
