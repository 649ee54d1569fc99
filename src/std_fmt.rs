use crate::{Address, Binary, Hash};

macro_rules! impl_std_fmt {
    ($name:ident) => {
        impl ::std::fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, concat!(stringify!($name), "(0x"))?;
                for chr in self.as_bytes().iter() {
                    write!(f, "{:02x}", chr)?;
                }
                write!(f, ")")
            }
        }
        impl ::std::fmt::LowerHex for $name {
            #[inline]
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                if f.alternate() {
                    write!(f, "0x")?;
                }
                for chr in self.as_bytes().iter() {
                    write!(f, "{:02x}", chr)?;
                }
                Ok(())
            }
        }
        impl ::std::fmt::Display for $name {
            /// Canonical text form: `0x`-prefixed lowercase hex, two digits
            /// per byte.
            #[inline]
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{:#x}", self)
            }
        }
    };
}

impl_std_fmt!(Binary);
impl_std_fmt!(Address);
impl_std_fmt!(Hash);
