//! Adapter to third-party binary-interchange types.

use bytes::Bytes;

/// The contract of a binary-interchange value, such as the binary field type
/// of a document database.
///
/// Implement this for the serialization type of the storage or transport
/// layer in use; [`Binary::from_interchange`](crate::Binary::from_interchange)
/// and [`Binary::to_interchange`](crate::Binary::to_interchange) convert in
/// both directions through it.
pub trait Interchange {
    /// Total number of bytes held by the value.
    fn len(&self) -> usize;
    /// Whether the value holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Copies out `length` bytes starting at `offset`.
    fn read(&self, offset: usize, length: usize) -> Vec<u8>;
    /// Builds a value holding a copy of `bytes`.
    fn from_slice(bytes: &[u8]) -> Self
    where
        Self: Sized;
}

impl Interchange for Vec<u8> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn read(&self, offset: usize, length: usize) -> Vec<u8> {
        self[offset..offset + length].to_vec()
    }

    fn from_slice(bytes: &[u8]) -> Self {
        bytes.to_vec()
    }
}

impl Interchange for Bytes {
    fn len(&self) -> usize {
        Bytes::len(self)
    }

    fn read(&self, offset: usize, length: usize) -> Vec<u8> {
        self[offset..offset + length].to_vec()
    }

    fn from_slice(bytes: &[u8]) -> Self {
        Bytes::copy_from_slice(bytes)
    }
}
