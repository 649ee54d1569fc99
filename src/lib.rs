//! Immutable binary value types for Ethereum-style identifiers.
//!
//! Provides [`Binary`], an immutable byte-sequence value with a canonical
//! `0x`-prefixed lowercase hex representation, and the two fixed-length
//! specializations [`Address`] (20 bytes) and [`Hash`] (32 bytes).
//!
//! Values never change after construction. Constructors that take ownership
//! of a buffer (`Vec<u8>`, [`Bytes`](bytes::Bytes)) adopt it without copying;
//! constructors that borrow always copy, so later mutation of the caller's
//! buffer cannot affect the value. Cloning or re-wrapping an existing value
//! shares the underlying buffer.
//!
//! Each type has two construction surfaces:
//!
//! - strict: `FromStr`, `TryFrom<Binary>`, `from_slice` — return a typed
//!   error on bad input;
//! - permissive: [`Binary::ingest`] (and the fixed-length equivalents) —
//!   normalize heterogeneous input (hex strings, buffers, unsigned integers,
//!   other values) and return `None` on anything malformed.

pub mod error;
pub mod interchange;
pub mod source;

mod impls;
mod serde;
mod std_convert;
mod std_default;
mod std_fmt;
mod std_str;

#[cfg(test)]
mod tests;

pub use bytes::Bytes;

/// An immutable sequence of bytes with value semantics.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binary(pub(crate) Bytes);

/// A [`Binary`] of exactly 20 bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub(crate) Binary);

/// A [`Binary`] of exactly 32 bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash(pub(crate) Binary);
