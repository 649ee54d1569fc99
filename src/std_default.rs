use bytes::Bytes;

use crate::{Address, Binary, Hash};

impl Default for Binary {
    /// The empty value.
    #[inline]
    fn default() -> Self {
        Binary(Bytes::new())
    }
}

macro_rules! impl_fixed_default {
    ($name:ident, $bytes_size:expr) => {
        impl Default for $name {
            /// All zeros.
            #[inline]
            fn default() -> Self {
                $name(Binary(Bytes::from_static(&[0u8; $bytes_size])))
            }
        }
    };
}

impl_fixed_default!(Address, 20);
impl_fixed_default!(Hash, 32);
