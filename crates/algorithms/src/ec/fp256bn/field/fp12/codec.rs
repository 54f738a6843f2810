//! Fixed-width big-endian encoding of Fp12 elements.
//!
//! Layout: the twelve base field coefficients, 32 bytes each, in the order
//! a.c0.c0, a.c0.c1, a.c1.c0, a.c1.c1, then the same for b and c.

use super::Fp12;
use crate::ec::fp256bn::field::fp4::Fp4;
use crate::error::{to_core_result, validate, Error, Result};
use pairfield_api::{Result as ApiResult, Serialize};
use pairfield_params::pairing::fp256bn::{FP256BN_FP12_SIZE, FP256BN_FP4_SIZE};
use alloc::vec::Vec;

impl Fp12 {
    /// Encode to the 384-byte big-endian representation
    pub fn to_bytes(&self) -> [u8; FP256BN_FP12_SIZE] {
        let mut res = [0u8; FP256BN_FP12_SIZE];
        for (chunk, part) in res
            .chunks_exact_mut(FP256BN_FP4_SIZE)
            .zip([&self.a, &self.b, &self.c])
        {
            chunk.copy_from_slice(&part.to_bytes());
        }
        res
    }

    /// Write the encoding into the first 384 bytes of `out`
    pub fn write_bytes(&self, out: &mut [u8]) -> Result<()> {
        validate::min_length("Fp12::write_bytes", out.len(), FP256BN_FP12_SIZE)?;
        out[..FP256BN_FP12_SIZE].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    /// Decode from the 384-byte big-endian representation.
    ///
    /// Bytes past the first 384 are ignored. Every coefficient must be
    /// below p.
    pub fn from_bytes(bytes: &[u8]) -> Result<Fp12> {
        validate::min_length("Fp12::from_bytes", bytes.len(), FP256BN_FP12_SIZE)?;

        let mut parts = [Fp4::zero(); 3];
        for (part, chunk) in parts
            .iter_mut()
            .zip(bytes[..FP256BN_FP12_SIZE].chunks_exact(FP256BN_FP4_SIZE))
        {
            let mut buf = [0u8; FP256BN_FP4_SIZE];
            buf.copy_from_slice(chunk);
            *part = Option::<Fp4>::from(Fp4::from_bytes(&buf)).ok_or_else(|| {
                log::debug!("Fp12::from_bytes: coefficient not below the modulus");
                Error::NonCanonical {
                    context: "Fp12::from_bytes",
                }
            })?;
        }

        Ok(Fp12::new(parts[0], parts[1], parts[2]))
    }
}

impl Serialize for Fp12 {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        to_core_result(Fp12::from_bytes(bytes), "Serialize::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        Fp12::to_bytes(self).to_vec()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Fp12;
    use core::fmt;
    use pairfield_params::pairing::fp256bn::FP256BN_FP12_SIZE;
    use serde::de::{Error as DError, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Fp12 {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }

    impl<'de> Deserialize<'de> for Fp12 {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct Fp12Visitor;

            impl<'de> Visitor<'de> for Fp12Visitor {
                type Value = Fp12;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    write!(formatter, "{} bytes encoding an Fp12 element", FP256BN_FP12_SIZE)
                }

                fn visit_bytes<E>(self, value: &[u8]) -> Result<Fp12, E>
                where
                    E: DError,
                {
                    if value.len() != FP256BN_FP12_SIZE {
                        return Err(E::invalid_length(value.len(), &self));
                    }
                    Fp12::from_bytes(value).map_err(E::custom)
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Fp12, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut buf = [0u8; FP256BN_FP12_SIZE];
                    for (i, byte) in buf.iter_mut().enumerate() {
                        *byte = seq
                            .next_element()?
                            .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                    }
                    if seq.next_element::<u8>()?.is_some() {
                        return Err(A::Error::invalid_length(FP256BN_FP12_SIZE + 1, &self));
                    }
                    Fp12::from_bytes(&buf).map_err(A::Error::custom)
                }
            }

            deserializer.deserialize_bytes(Fp12Visitor)
        }
    }
}
