//! Permissive input normalization.

use std::str::FromStr;

use bytes::Bytes;

use crate::{Address, Binary, Hash};

/// Conversion of heterogeneous caller input into a [`Binary`].
///
/// This is the statically-typed seam for ingesting untrusted input: hex
/// strings carrying one or more `0x` prefixes, raw byte buffers, unsigned
/// integers, and existing values all normalize to `Some`; anything without a
/// well-defined byte representation yields `None` instead of an error.
///
/// Owned buffers (`Vec<u8>`, [`Bytes`]) are adopted without copying; borrowed
/// buffers are copied.
pub trait IntoBinary {
    /// Normalizes `self`, or returns `None` when it has no byte representation.
    fn into_binary(self) -> Option<Binary>;
}

impl IntoBinary for Binary {
    fn into_binary(self) -> Option<Binary> {
        Some(self)
    }
}

impl IntoBinary for &Binary {
    fn into_binary(self) -> Option<Binary> {
        // Shares the buffer, never copies.
        Some(self.clone())
    }
}

impl IntoBinary for Address {
    fn into_binary(self) -> Option<Binary> {
        Some(self.0)
    }
}

impl IntoBinary for &Address {
    fn into_binary(self) -> Option<Binary> {
        Some(self.0.clone())
    }
}

impl IntoBinary for Hash {
    fn into_binary(self) -> Option<Binary> {
        Some(self.0)
    }
}

impl IntoBinary for &Hash {
    fn into_binary(self) -> Option<Binary> {
        Some(self.0.clone())
    }
}

impl IntoBinary for Bytes {
    fn into_binary(self) -> Option<Binary> {
        Some(Binary(self))
    }
}

impl IntoBinary for Vec<u8> {
    fn into_binary(self) -> Option<Binary> {
        Some(Binary(Bytes::from(self)))
    }
}

impl IntoBinary for &Vec<u8> {
    fn into_binary(self) -> Option<Binary> {
        Some(Binary::copy_from_slice(self))
    }
}

impl IntoBinary for &[u8] {
    fn into_binary(self) -> Option<Binary> {
        Some(Binary::copy_from_slice(self))
    }
}

impl<const N: usize> IntoBinary for [u8; N] {
    fn into_binary(self) -> Option<Binary> {
        Some(Binary::copy_from_slice(&self))
    }
}

impl<const N: usize> IntoBinary for &[u8; N] {
    fn into_binary(self) -> Option<Binary> {
        Some(Binary::copy_from_slice(self))
    }
}

impl IntoBinary for &str {
    fn into_binary(self) -> Option<Binary> {
        Binary::from_str(self).ok()
    }
}

impl IntoBinary for String {
    fn into_binary(self) -> Option<Binary> {
        Binary::from_str(&self).ok()
    }
}

impl IntoBinary for &String {
    fn into_binary(self) -> Option<Binary> {
        Binary::from_str(self).ok()
    }
}

impl IntoBinary for u64 {
    fn into_binary(self) -> Option<Binary> {
        Some(Binary::from_uint(self))
    }
}

impl IntoBinary for i64 {
    fn into_binary(self) -> Option<Binary> {
        u64::try_from(self).ok().map(Binary::from_uint)
    }
}

impl IntoBinary for f64 {
    fn into_binary(self) -> Option<Binary> {
        // Only finite, non-negative values without a fractional part have a
        // byte representation.
        if self.is_finite() && self >= 0.0 && self.trunc() == self && self <= u64::MAX as f64 {
            Some(Binary::from_uint(self as u64))
        } else {
            None
        }
    }
}

impl<T: IntoBinary> IntoBinary for Option<T> {
    fn into_binary(self) -> Option<Binary> {
        self.and_then(IntoBinary::into_binary)
    }
}
