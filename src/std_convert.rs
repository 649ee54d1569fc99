use bytes::Bytes;

use crate::{error::FromSliceError, Address, Binary, Hash};

impl ::std::convert::From<Bytes> for Binary {
    #[inline]
    fn from(bytes: Bytes) -> Self {
        Binary(bytes)
    }
}

impl ::std::convert::From<Vec<u8>> for Binary {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Binary(Bytes::from(bytes))
    }
}

impl ::std::convert::From<&[u8]> for Binary {
    #[inline]
    fn from(slice: &[u8]) -> Self {
        Binary::copy_from_slice(slice)
    }
}

impl<const N: usize> ::std::convert::From<[u8; N]> for Binary {
    #[inline]
    fn from(bytes: [u8; N]) -> Self {
        Binary::copy_from_slice(&bytes)
    }
}

impl ::std::convert::AsRef<[u8]> for Binary {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

macro_rules! impl_fixed_convert {
    ($name:ident, $bytes_size:expr) => {
        impl ::std::convert::From<[u8; $bytes_size]> for $name {
            #[inline]
            fn from(bytes: [u8; $bytes_size]) -> Self {
                $name(Binary::copy_from_slice(&bytes))
            }
        }
        impl ::std::convert::From<$name> for Binary {
            #[inline]
            fn from(value: $name) -> Self {
                value.into_binary()
            }
        }
        impl ::std::convert::TryFrom<Binary> for $name {
            type Error = FromSliceError;

            #[inline]
            fn try_from(binary: Binary) -> Result<Self, Self::Error> {
                $name::new(binary)
            }
        }
        impl ::std::convert::AsRef<[u8]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }
    };
}

impl_fixed_convert!(Address, 20);
impl_fixed_convert!(Hash, 32);
