//! JSON-friendly serde impls: values encode as `0x`-prefixed lowercase hex
//! strings, one canonical prefix, two digits per byte.

use std::fmt;

use faster_hex::{hex_decode, hex_encode};

use crate::{Address, Binary, Hash};

fn serialize_hex<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let mut buffer = vec![0u8; bytes.len() * 2 + 2];
    buffer[0] = b'0';
    buffer[1] = b'x';
    hex_encode(bytes, &mut buffer[2..]).map_err(serde::ser::Error::custom)?;
    let encoded = ::std::str::from_utf8(&buffer).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(encoded)
}

struct BinaryVisitor;

impl<'b> serde::de::Visitor<'b> for BinaryVisitor {
    type Value = Binary;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a 0x-prefixed hex string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v.len() < 2 || &v.as_bytes()[0..2] != b"0x" || v.len() & 1 != 0 {
            return Err(E::invalid_value(serde::de::Unexpected::Str(v), &self));
        }
        let bytes = &v.as_bytes()[2..];
        if bytes.is_empty() {
            return Ok(Binary::default());
        }
        let mut buffer = vec![0; bytes.len() / 2];
        hex_decode(bytes, &mut buffer)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))?;
        Ok(Binary::from(buffer))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_str(&v)
    }
}

impl serde::Serialize for Binary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_hex(self.as_bytes(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Binary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(BinaryVisitor)
    }
}

macro_rules! impl_fixed_serde {
    ($name:ident, $visitor:ident, $bytes_size:expr) => {
        struct $visitor;

        impl<'b> serde::de::Visitor<'b> for $visitor {
            type Value = $name;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a 0x-prefixed hex string with {} digits",
                    $bytes_size * 2
                )
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v.len() != $bytes_size * 2 + 2 || &v.as_bytes()[0..2] != b"0x" {
                    return Err(E::invalid_value(serde::de::Unexpected::Str(v), &self));
                }
                let mut buffer = [0u8; $bytes_size];
                hex_decode(&v.as_bytes()[2..], &mut buffer)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))?;
                Ok($name::from(buffer))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_str(&v)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serialize_hex(self.as_bytes(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_str($visitor)
            }
        }
    };
}

impl_fixed_serde!(Address, AddressVisitor, 20);
impl_fixed_serde!(Hash, HashVisitor, 32);
