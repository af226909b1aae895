// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arithmetic seam between the verifier and the curve library.
//!
//! The verifier only ever touches group and pairing arithmetic through
//! [`Arithmetic`]; [`Arkworks`] is the production implementation.

use std::marker::PhantomData;

use ark_ec::pairing::{MillerLoopOutput, Pairing, PairingOutput};
use ark_ec::VariableBaseMSM;
use ark_ff::One;
use g16_types::in_subgroup;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("multi-exponentiation over {bases} bases with {scalars} scalars")]
    MsmLength { bases: usize, scalars: usize },

    #[error("miller loop over {g1} G1 points and {g2} G2 points")]
    PairingLength { g1: usize, g2: usize },

    #[error("final exponentiation of a zero miller loop output")]
    DegenerateMillerLoop,
}

/// Group and pairing operations the verifier relies on
pub trait Arithmetic<E: Pairing>: Sync {
    /// Identifies the backend in logs
    fn name(&self) -> &'static str;

    /// On-curve and prime-order subgroup membership
    fn g1_in_subgroup(&self, p: &E::G1Affine) -> bool;

    fn g2_in_subgroup(&self, p: &E::G2Affine) -> bool;

    /// Σ scalars\[i\]·bases\[i\]
    ///
    /// Scalars are field elements as stored (Montgomery form); conversion to
    /// the canonical integer happens inside the MSM.
    fn msm(&self, bases: &[E::G1Affine], scalars: &[E::ScalarField]) -> Result<E::G1, ArithmeticError>;

    /// Product of the Miller loops over the pairs `(g1[i], g2[i])`
    fn miller_loop(&self, g1: &[E::G1Affine], g2: &[E::G2Affine]) -> Result<MillerLoopOutput<E>, ArithmeticError>;

    /// Multiplies the Miller loop outputs together and applies a single
    /// final exponentiation
    fn final_exponentiation(&self, parts: &[MillerLoopOutput<E>]) -> Result<PairingOutput<E>, ArithmeticError>;
}

/// Arkworks-backed arithmetic
#[derive(Debug)]
pub struct Arkworks<E>(PhantomData<fn() -> E>);

impl<E> Arkworks<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for Arkworks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Arkworks<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Arkworks<E> {}

impl<E: Pairing> Arithmetic<E> for Arkworks<E> {
    fn name(&self) -> &'static str {
        "arkworks"
    }

    fn g1_in_subgroup(&self, p: &E::G1Affine) -> bool {
        in_subgroup(p)
    }

    fn g2_in_subgroup(&self, p: &E::G2Affine) -> bool {
        in_subgroup(p)
    }

    fn msm(&self, bases: &[E::G1Affine], scalars: &[E::ScalarField]) -> Result<E::G1, ArithmeticError> {
        E::G1::msm(bases, scalars).map_err(|_| ArithmeticError::MsmLength {
            bases: bases.len(),
            scalars: scalars.len(),
        })
    }

    fn miller_loop(&self, g1: &[E::G1Affine], g2: &[E::G2Affine]) -> Result<MillerLoopOutput<E>, ArithmeticError> {
        if g1.len() != g2.len() {
            return Err(ArithmeticError::PairingLength {
                g1: g1.len(),
                g2: g2.len(),
            });
        }
        Ok(E::multi_miller_loop(g1.iter().copied(), g2.iter().copied()))
    }

    fn final_exponentiation(&self, parts: &[MillerLoopOutput<E>]) -> Result<PairingOutput<E>, ArithmeticError> {
        let product = parts
            .iter()
            .fold(E::TargetField::one(), |acc, ml| acc * ml.0);
        E::final_exponentiation(MillerLoopOutput(product)).ok_or(ArithmeticError::DegenerateMillerLoop)
    }
}
