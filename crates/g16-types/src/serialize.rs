// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks → hex/JSON encoding for keys, proofs and public witnesses.
//!
//! Every envelope carries the [`CurveId`] it was produced for; decoding into a
//! different engine fails with [`CodecError::CurveMismatch`].
//!
//! # Encoding
//!
//! - **G1/G2 points**: compressed arkworks canonical form, hex.
//! - **Scalars**: decimal strings. `0x`-prefixed big-endian hex is accepted on
//!   input. Values must be canonical (strictly below the field modulus).
//!
//! Proof points are decoded without subgroup validation: rejecting a
//! malformed proof is the verifier's job, and it reports the dedicated
//! subgroup failure instead of a generic decoding error.

use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use serde::{Deserialize, Serialize};

use crate::curve::{Curve, CurveId};
use crate::keys::{KeyError, VerifyingKey};
use crate::proof::Proof;
use crate::witness::PublicWitness;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("curve mismatch: encoded for {found}, expected {expected}")]
    CurveMismatch { expected: CurveId, found: CurveId },

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid point encoding: {0}")]
    Serialization(#[from] ark_serialize::SerializationError),

    #[error("invalid scalar {0:?}: expected a canonical decimal or 0x-hex field element")]
    Scalar(String),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize any arkworks value to compressed hex
pub fn to_hex<T: CanonicalSerialize>(value: &T) -> Result<String, CodecError> {
    let mut bytes = Vec::with_capacity(value.compressed_size());
    value.serialize_compressed(&mut bytes)?;
    Ok(hex::encode(bytes))
}

/// Deserialize compressed hex, with or without curve/subgroup validation
pub fn from_hex<T: CanonicalDeserialize>(s: &str, validate: Validate) -> Result<T, CodecError> {
    let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))?;
    let mut reader = bytes.as_slice();
    let value = T::deserialize_with_mode(&mut reader, Compress::Yes, validate)?;
    if !reader.is_empty() {
        return Err(ark_serialize::SerializationError::InvalidData.into());
    }
    Ok(value)
}

/// Decimal representation of a field element
pub fn scalar_to_string<F: PrimeField>(value: &F) -> String {
    value.into_bigint().to_string()
}

/// Parse a canonical decimal or `0x` big-endian hex field element
pub fn parse_scalar<F: PrimeField>(s: &str) -> Result<F, CodecError> {
    let s = s.trim();
    let invalid = || CodecError::Scalar(s.to_string());
    if s.is_empty() {
        return Err(invalid());
    }

    if let Some(h) = s.strip_prefix("0x") {
        if h.is_empty() {
            return Err(invalid());
        }
        let bytes = hex::decode(h)?;
        let value = F::from_be_bytes_mod_order(&bytes);
        // reduction happened iff the bytes don't survive the roundtrip
        let round = value.into_bigint().to_bytes_be();
        if strip_zeros(&round) != strip_zeros(&bytes) {
            return Err(invalid());
        }
        return Ok(value);
    }

    let digits = s.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value = F::from_str(digits).map_err(|_| invalid())?;
    if value.into_bigint().to_string() != digits {
        return Err(invalid());
    }
    Ok(value)
}

fn strip_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

fn expect_curve<E: Curve>(found: CurveId) -> Result<(), CodecError> {
    if found != E::ID {
        return Err(CodecError::CurveMismatch {
            expected: E::ID,
            found,
        });
    }
    Ok(())
}

/// Serialized verifying key
///
/// Only the setup values travel; `gamma_neg`, `delta_neg` and `e` are
/// recomputed on decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKeyJson {
    pub curve: CurveId,
    pub alpha_g1: String,
    pub beta_g2: String,
    pub gamma_g2: String,
    pub delta_g2: String,
    /// k\[0\] = constant term, k\[1..\] = public input coefficients
    pub k: Vec<String>,
}

impl VerifyingKeyJson {
    pub fn encode<E: Curve>(vk: &VerifyingKey<E>) -> Result<Self, CodecError> {
        Ok(Self {
            curve: E::ID,
            alpha_g1: to_hex(vk.alpha_g1())?,
            beta_g2: to_hex(vk.beta_g2())?,
            gamma_g2: to_hex(vk.gamma_g2())?,
            delta_g2: to_hex(vk.delta_g2())?,
            k: vk.k().iter().map(to_hex).collect::<Result<_, _>>()?,
        })
    }

    pub fn decode<E: Curve>(&self) -> Result<VerifyingKey<E>, CodecError> {
        expect_curve::<E>(self.curve)?;
        let k = self
            .k
            .iter()
            .map(|p| from_hex(p, Validate::Yes))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(VerifyingKey::new(
            from_hex(&self.alpha_g1, Validate::Yes)?,
            from_hex(&self.beta_g2, Validate::Yes)?,
            from_hex(&self.gamma_g2, Validate::Yes)?,
            from_hex(&self.delta_g2, Validate::Yes)?,
            k,
        )?)
    }
}

/// Serialized proof
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub curve: CurveId,
    pub ar: String,
    pub bs: String,
    pub krs: String,
}

impl ProofJson {
    pub fn encode<E: Curve>(proof: &Proof<E>) -> Result<Self, CodecError> {
        Ok(Self {
            curve: E::ID,
            ar: to_hex(&proof.ar)?,
            bs: to_hex(&proof.bs)?,
            krs: to_hex(&proof.krs)?,
        })
    }

    pub fn decode<E: Curve>(&self) -> Result<Proof<E>, CodecError> {
        expect_curve::<E>(self.curve)?;
        Ok(Proof::new(
            from_hex(&self.ar, Validate::No)?,
            from_hex(&self.bs, Validate::No)?,
            from_hex(&self.krs, Validate::No)?,
        ))
    }
}

/// Serialized public witness
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessJson {
    pub curve: CurveId,
    pub public: Vec<String>,
}

impl WitnessJson {
    pub fn encode<E: Curve>(witness: &PublicWitness<E>) -> Self {
        Self {
            curve: E::ID,
            public: witness.iter().map(scalar_to_string).collect(),
        }
    }

    pub fn decode<E: Curve>(&self) -> Result<PublicWitness<E>, CodecError> {
        expect_curve::<E>(self.curve)?;
        self.public.iter().map(|s| parse_scalar(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fq, G1Affine, G1Projective, G2Projective};
    use ark_bn254::Bn254;
    use ark_ec::CurveGroup;
    use ark_ff::One;
    use ark_std::{test_rng, UniformRand};

    type Fr = ark_bls12_381::Fr;

    fn random_vk() -> VerifyingKey<Bls12_381> {
        let mut rng = test_rng();
        VerifyingKey::new(
            G1Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            (0..3).map(|_| G1Projective::rand(&mut rng).into_affine()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn vk_json_recomputes_precomputed_fields() {
        let vk = random_vk();
        let json = serde_json::to_string(&VerifyingKeyJson::encode(&vk).unwrap()).unwrap();
        let decoded: VerifyingKeyJson = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.curve, CurveId::Bls12_381);
        assert_eq!(decoded.decode::<Bls12_381>().unwrap(), vk);
    }

    #[test]
    fn vk_json_curve_mismatch() {
        let enc = VerifyingKeyJson::encode(&random_vk()).unwrap();
        match enc.decode::<Bn254>() {
            Err(CodecError::CurveMismatch { expected, found }) => {
                assert_eq!(expected, CurveId::Bn254);
                assert_eq!(found, CurveId::Bls12_381);
            }
            other => panic!("expected curve mismatch, got {other:?}"),
        }
    }

    #[test]
    fn vk_json_empty_k() {
        let mut enc = VerifyingKeyJson::encode(&random_vk()).unwrap();
        enc.k.clear();
        assert!(matches!(
            enc.decode::<Bls12_381>(),
            Err(CodecError::Key(KeyError::EmptyK))
        ));
    }

    #[test]
    fn proof_decode_keeps_off_subgroup_points() {
        let mut rng = test_rng();
        let mut x = Fq::one();
        let bad = loop {
            if let Some(p) = G1Affine::get_point_from_x_unchecked(x, true) {
                if !p.is_in_correct_subgroup_assuming_on_curve() {
                    break p;
                }
            }
            x += Fq::one();
        };
        let proof = Proof::<Bls12_381>::new(
            bad,
            G2Projective::rand(&mut rng).into_affine(),
            G1Projective::rand(&mut rng).into_affine(),
        );
        let decoded = ProofJson::encode(&proof).unwrap().decode::<Bls12_381>().unwrap();
        assert_eq!(decoded, proof);
        assert!(!decoded.is_valid());

        // the same bytes are rejected where validation is on
        assert!(from_hex::<G1Affine>(&to_hex(&bad).unwrap(), Validate::Yes).is_err());
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut rng = test_rng();
        let p = G1Projective::rand(&mut rng).into_affine();
        let hex = format!("{}00", to_hex(&p).unwrap());
        assert!(from_hex::<G1Affine>(&hex, Validate::Yes).is_err());
    }

    #[test]
    fn scalar_formats() {
        assert_eq!(parse_scalar::<Fr>("5").unwrap(), Fr::from(5u64));
        assert_eq!(parse_scalar::<Fr>("0005").unwrap(), Fr::from(5u64));
        assert_eq!(parse_scalar::<Fr>("0").unwrap(), Fr::from(0u64));
        assert_eq!(parse_scalar::<Fr>("0x05").unwrap(), Fr::from(5u64));
        assert_eq!(parse_scalar::<Fr>("0x00").unwrap(), Fr::from(0u64));
        assert_eq!(parse_scalar::<Fr>(" 7 ").unwrap(), Fr::from(7u64));
        assert!(matches!(parse_scalar::<Fr>(""), Err(CodecError::Scalar(_))));
        assert!(matches!(parse_scalar::<Fr>("   "), Err(CodecError::Scalar(_))));
        assert!(matches!(parse_scalar::<Fr>("0x"), Err(CodecError::Scalar(_))));
        assert!(parse_scalar::<Fr>("-1").is_err());
        assert!(parse_scalar::<Fr>("five").is_err());
        assert_eq!(scalar_to_string(&Fr::from(42u64)), "42");
    }

    #[test]
    fn non_canonical_scalars_rejected() {
        let modulus = Fr::MODULUS.to_string();
        assert!(parse_scalar::<Fr>(&modulus).is_err());

        let modulus_hex = format!("0x{}", hex::encode(Fr::MODULUS.to_bytes_be()));
        assert!(parse_scalar::<Fr>(&modulus_hex).is_err());

        let max = -Fr::one();
        assert_eq!(parse_scalar::<Fr>(&scalar_to_string(&max)).unwrap(), max);
    }

    #[test]
    fn witness_json_roundtrip() {
        let w: PublicWitness<Bls12_381> = vec![Fr::from(5u64), -Fr::one()].into();
        let enc = WitnessJson::encode(&w);
        assert_eq!(enc.public[0], "5");
        assert_eq!(enc.decode::<Bls12_381>().unwrap(), w);
        assert!(enc.decode::<Bn254>().is_err());
    }

    #[test]
    fn blank_witness_entry_rejected() {
        let json = WitnessJson {
            curve: CurveId::Bls12_381,
            public: vec!["5".into(), "".into()],
        };
        assert!(matches!(json.decode::<Bls12_381>(), Err(CodecError::Scalar(_))));
    }
}
