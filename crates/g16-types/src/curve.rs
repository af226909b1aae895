// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Curve identification for keys, proofs and witnesses.

use std::fmt;
use std::str::FromStr;

use ark_ec::pairing::Pairing;
use serde::{Deserialize, Serialize};

/// Pairing-friendly curves supported by the verifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    #[serde(rename = "bn254")]
    Bn254,
    #[serde(rename = "bls12-381")]
    Bls12_381,
}

impl CurveId {
    pub const ALL: [CurveId; 2] = [CurveId::Bn254, CurveId::Bls12_381];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurveId::Bn254 => "bn254",
            CurveId::Bls12_381 => "bls12-381",
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown curve: {0} (expected one of: bn254, bls12-381)")]
pub struct UnknownCurve(pub String);

impl FromStr for CurveId {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bn254" | "bn256" => Ok(CurveId::Bn254),
            "bls12-381" | "bls12_381" | "bls12381" => Ok(CurveId::Bls12_381),
            other => Err(UnknownCurve(other.to_string())),
        }
    }
}

/// A pairing engine with a known [`CurveId`]
pub trait Curve: Pairing {
    const ID: CurveId;
}

impl Curve for ark_bn254::Bn254 {
    const ID: CurveId = CurveId::Bn254;
}

impl Curve for ark_bls12_381::Bls12_381 {
    const ID: CurveId = CurveId::Bls12_381;
}
