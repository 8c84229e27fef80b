use crate::bn254::{BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use serde::de::{SeqAccess, Visitor};
use serde::{Deserializer, Serializer};

/// Helper trait to serialize objects that have a canonical byte encoding.
pub trait FromToBytes: Sized {
    /// Convert to bytes.
    fn to_canonical_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn from_canonical_bytes(bytes: &[u8]) -> Result<Self>;
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl FromToBytes for $t {
            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn from_canonical_bytes(bytes: &[u8]) -> Result<$t> {
                if bytes.len() != <$t as Scalar>::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                $t::from_bytes(bytes)
            }
        }
    };
}

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl FromToBytes for $g {
            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn from_canonical_bytes(bytes: &[u8]) -> Result<$g> {
                $g::from_compressed_bytes(bytes)
            }
        }
    };
}

macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&b64enc(&self.to_canonical_bytes()))
                } else {
                    serializer.serialize_bytes(&self.to_canonical_bytes())
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str(BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes(BytesVisitor)?
                };
                $t::from_canonical_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
            }
        }
    };
}

to_from_bytes_scalar!(BN254Scalar);
to_from_bytes_group!(BN254G1);
to_from_bytes_group!(BN254G2);
to_from_bytes_group!(BN254Gt);

serialize_deserialize!(BN254Scalar);
serialize_deserialize!(BN254G1);
serialize_deserialize!(BN254G2);
serialize_deserialize!(BN254Gt);

/// Visitor collecting the byte encoding from either a base64 string or raw bytes.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("a canonical byte encoding")
    }

    fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut vec: Vec<u8> = vec![];
        while let Some(x) = seq.next_element()? {
            vec.push(x);
        }
        Ok(vec)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        b64dec(v).map_err(serde::de::Error::custom)
    }
}
