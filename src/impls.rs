use bytes::Bytes;

use crate::{
    error::FromSliceError, interchange::Interchange, source::IntoBinary, Address, Binary, Hash,
};

impl Binary {
    /// Adopts an already-owned buffer without copying.
    #[inline]
    pub fn new(bytes: Bytes) -> Self {
        Binary(bytes)
    }

    /// Copies a borrowed buffer into a new value.
    ///
    /// Later mutation of `slice`'s source cannot affect the value.
    #[inline]
    pub fn copy_from_slice(slice: &[u8]) -> Self {
        Binary(Bytes::copy_from_slice(slice))
    }

    /// Encodes an unsigned integer as its minimal big-endian byte
    /// representation, always at least one byte.
    ///
    /// ```rust
    /// use ethereum_binary::Binary;
    ///
    /// assert_eq!(Binary::from_uint(0).to_string(), "0x00");
    /// assert_eq!(Binary::from_uint(17).to_string(), "0x11");
    /// assert_eq!(Binary::from_uint(9999).to_string(), "0x270f");
    /// ```
    pub fn from_uint(value: u64) -> Self {
        let bytes = value.to_be_bytes();
        let skip = bytes
            .iter()
            .take_while(|chr| **chr == 0)
            .count()
            .min(bytes.len() - 1);
        Binary(Bytes::copy_from_slice(&bytes[skip..]))
    }

    /// Normalizes heterogeneous input into a value, or `None` when the input
    /// is malformed.
    ///
    /// ```rust
    /// use ethereum_binary::Binary;
    ///
    /// assert!(Binary::ingest("0x0x00112233").is_some());
    /// assert!(Binary::ingest("xyz").is_none());
    /// ```
    #[inline]
    pub fn ingest<T: IntoBinary>(input: T) -> Option<Self> {
        input.into_binary()
    }

    /// Number of bytes held.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the value holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }

    /// Copies the bytes into a fresh buffer the caller may mutate freely.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Unwraps the shared buffer.
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Value equality against anything normalizable through [`IntoBinary`].
    ///
    /// Input that fails to normalize compares unequal; this never panics.
    pub fn is_equal<T: IntoBinary>(&self, other: T) -> bool {
        matches!(other.into_binary(), Some(other) if other.0 == self.0)
    }

    /// Reads a value out of a binary-interchange representation.
    pub fn from_interchange<T: Interchange>(source: &T) -> Self {
        Binary(Bytes::from(source.read(0, source.len())))
    }

    /// Converts into a binary-interchange representation holding a copy of
    /// the bytes.
    pub fn to_interchange<T: Interchange>(&self) -> T {
        T::from_slice(self.as_bytes())
    }
}

macro_rules! impl_fixed_methods {
    ($name:ident, $bytes_size:expr) => {
        #[allow(clippy::len_without_is_empty)]
        impl $name {
            /// The exact byte length of this type.
            pub const LENGTH: usize = $bytes_size;

            /// Wraps a [`Binary`] of exactly [`Self::LENGTH`] bytes, sharing
            /// its buffer.
            pub fn new(binary: Binary) -> Result<Self, FromSliceError> {
                if binary.len() != $bytes_size {
                    Err(FromSliceError::InvalidLength(binary.len()))
                } else {
                    Ok($name(binary))
                }
            }

            /// To convert the byte slice back into `Self`.
            pub fn from_slice(input: &[u8]) -> Result<Self, FromSliceError> {
                if input.len() != $bytes_size {
                    Err(FromSliceError::InvalidLength(input.len()))
                } else {
                    Ok($name(Binary::copy_from_slice(input)))
                }
            }

            /// Normalizes heterogeneous input, or `None` when the input is
            /// malformed or not exactly [`Self::LENGTH`] bytes.
            pub fn ingest<T: IntoBinary>(input: T) -> Option<Self> {
                input.into_binary().and_then(|binary| Self::new(binary).ok())
            }

            /// Number of bytes held, always [`Self::LENGTH`].
            #[inline]
            pub const fn len(&self) -> usize {
                $bytes_size
            }

            /// Borrows the underlying [`Binary`].
            #[inline]
            pub fn as_binary(&self) -> &Binary {
                &self.0
            }

            /// Unwraps the underlying [`Binary`], sharing its buffer.
            #[inline]
            pub fn into_binary(self) -> Binary {
                self.0
            }

            /// Borrows the bytes.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }

            /// Copies the bytes into a fresh buffer the caller may mutate
            /// freely.
            #[inline]
            pub fn to_vec(&self) -> Vec<u8> {
                self.0.to_vec()
            }

            /// Value equality against anything normalizable through
            /// [`IntoBinary`]; never panics.
            pub fn is_equal<T: IntoBinary>(&self, other: T) -> bool {
                self.0.is_equal(other)
            }

            /// Converts into a binary-interchange representation holding a
            /// copy of the bytes.
            pub fn to_interchange<T: Interchange>(&self) -> T {
                self.0.to_interchange()
            }
        }
    };
}

impl_fixed_methods!(Address, 20);
impl_fixed_methods!(Hash, 32);
