// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifying key with the values the verifier precomputes at setup.

use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{AffineRepr, CurveGroup};

use crate::curve::{Curve, CurveId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("verifying key must hold at least the constant term K[0]")]
    EmptyK,
}

/// Groth16 verifying key
///
/// `k` is a unified vector: `k[0]` is the constant (ONE_WIRE) term, `k[1..]`
/// match the public inputs in order. `gamma_neg`, `delta_neg` and
/// `e = e(alpha, beta)` are derived in [`VerifyingKey::new`] and cannot be set
/// independently, so a key is always internally consistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey<E: Pairing> {
    alpha_g1: E::G1Affine,
    beta_g2: E::G2Affine,
    gamma_g2: E::G2Affine,
    delta_g2: E::G2Affine,
    k: Vec<E::G1Affine>,
    gamma_neg: E::G2Affine,
    delta_neg: E::G2Affine,
    e: PairingOutput<E>,
}

impl<E: Pairing> VerifyingKey<E> {
    pub fn new(
        alpha_g1: E::G1Affine,
        beta_g2: E::G2Affine,
        gamma_g2: E::G2Affine,
        delta_g2: E::G2Affine,
        k: Vec<E::G1Affine>,
    ) -> Result<Self, KeyError> {
        if k.is_empty() {
            return Err(KeyError::EmptyK);
        }
        let e = E::pairing(alpha_g1, beta_g2);
        Ok(Self {
            alpha_g1,
            beta_g2,
            gamma_g2,
            delta_g2,
            k,
            gamma_neg: (-gamma_g2.into_group()).into_affine(),
            delta_neg: (-delta_g2.into_group()).into_affine(),
            e,
        })
    }

    pub fn alpha_g1(&self) -> &E::G1Affine {
        &self.alpha_g1
    }

    pub fn beta_g2(&self) -> &E::G2Affine {
        &self.beta_g2
    }

    pub fn gamma_g2(&self) -> &E::G2Affine {
        &self.gamma_g2
    }

    pub fn delta_g2(&self) -> &E::G2Affine {
        &self.delta_g2
    }

    /// K[0..n] in G1
    pub fn k(&self) -> &[E::G1Affine] {
        &self.k
    }

    pub fn gamma_neg(&self) -> &E::G2Affine {
        &self.gamma_neg
    }

    pub fn delta_neg(&self) -> &E::G2Affine {
        &self.delta_neg
    }

    /// Precomputed e(alpha, beta)
    pub fn e(&self) -> &PairingOutput<E> {
        &self.e
    }

    /// Number of public inputs the key expects (ONE_WIRE excluded)
    pub fn nb_public_witness(&self) -> usize {
        self.k.len() - 1
    }
}

impl<E: Curve> VerifyingKey<E> {
    pub fn curve_id(&self) -> CurveId {
        E::ID
    }
}

impl<E: Pairing> TryFrom<&ark_groth16::VerifyingKey<E>> for VerifyingKey<E> {
    type Error = KeyError;

    fn try_from(vk: &ark_groth16::VerifyingKey<E>) -> Result<Self, Self::Error> {
        Self::new(
            vk.alpha_g1,
            vk.beta_g2,
            vk.gamma_g2,
            vk.delta_g2,
            vk.gamma_abc_g1.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, G1Affine, G1Projective, G2Projective};
    use ark_std::{test_rng, UniformRand};

    fn random_key(n_public: usize) -> VerifyingKey<Bls12_381> {
        let mut rng = test_rng();
        let k: Vec<G1Affine> = (0..=n_public)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect();
        VerifyingKey::new(
            G1Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            k,
        )
        .unwrap()
    }

    #[test]
    fn empty_k_rejected() {
        let mut rng = test_rng();
        let res = VerifyingKey::<Bls12_381>::new(
            G1Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            vec![],
        );
        assert_eq!(res.unwrap_err(), KeyError::EmptyK);
    }

    #[test]
    fn precomputed_values() {
        let vk = random_key(3);
        assert_eq!(vk.nb_public_witness(), 3);
        assert_eq!(*vk.e(), Bls12_381::pairing(*vk.alpha_g1(), *vk.beta_g2()));
        assert_eq!(*vk.gamma_neg(), -*vk.gamma_g2());
        assert_eq!(*vk.delta_neg(), -*vk.delta_g2());
        assert_eq!(vk.curve_id(), CurveId::Bls12_381);
    }

    #[test]
    fn constant_only_key() {
        let vk = random_key(0);
        assert_eq!(vk.k().len(), 1);
        assert_eq!(vk.nb_public_witness(), 0);
    }
}
