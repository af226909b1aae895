// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_ec::pairing::Pairing;
use ark_serialize::Valid;

/// Groth16 proof
///
/// Points are kept exactly as received; [`Proof::is_valid`] must pass before
/// any of them is fed to a pairing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof<E: Pairing> {
    /// \[A\]₁
    pub ar: E::G1Affine,
    /// \[B\]₂
    pub bs: E::G2Affine,
    /// \[C\]₁
    pub krs: E::G1Affine,
}

impl<E: Pairing> Proof<E> {
    pub fn new(ar: E::G1Affine, bs: E::G2Affine, krs: E::G1Affine) -> Self {
        Self { ar, bs, krs }
    }

    /// True iff every point is on its curve and in the prime-order subgroup
    pub fn is_valid(&self) -> bool {
        in_subgroup(&self.ar) && in_subgroup(&self.bs) && in_subgroup(&self.krs)
    }
}

/// On-curve and prime-order subgroup membership for a single affine point
pub fn in_subgroup<P: Valid>(p: &P) -> bool {
    p.check().is_ok()
}

impl<E: Pairing> From<ark_groth16::Proof<E>> for Proof<E> {
    fn from(proof: ark_groth16::Proof<E>) -> Self {
        Self {
            ar: proof.a,
            bs: proof.b,
            krs: proof.c,
        }
    }
}

impl<E: Pairing> From<Proof<E>> for ark_groth16::Proof<E> {
    fn from(proof: Proof<E>) -> Self {
        Self {
            a: proof.ar,
            b: proof.bs,
            c: proof.krs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fq, G1Affine, G1Projective, G2Projective};
    use ark_ec::CurveGroup;
    use ark_ff::One;
    use ark_std::{test_rng, UniformRand};

    /// First point on E(Fq) found from small x that is outside the r-torsion
    fn off_subgroup_g1() -> G1Affine {
        let mut x = Fq::one();
        loop {
            if let Some(p) = G1Affine::get_point_from_x_unchecked(x, false) {
                if !p.is_in_correct_subgroup_assuming_on_curve() {
                    return p;
                }
            }
            x += Fq::one();
        }
    }

    #[test]
    fn random_proof_is_valid() {
        let mut rng = test_rng();
        let proof = Proof::<Bls12_381>::new(
            G1Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G1Projective::rand(&mut rng).into_affine(),
        );
        assert!(proof.is_valid());
    }

    #[test]
    fn off_subgroup_point_is_invalid() {
        let mut rng = test_rng();
        let bad = off_subgroup_g1();
        assert!(bad.is_on_curve());

        let proof = Proof::<Bls12_381>::new(
            G1Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            bad,
        );
        assert!(!proof.is_valid());
    }

    #[test]
    fn ark_conversion_keeps_points() {
        let mut rng = test_rng();
        let proof = Proof::<Bls12_381>::new(
            G1Projective::rand(&mut rng).into_affine(),
            G2Projective::rand(&mut rng).into_affine(),
            G1Projective::rand(&mut rng).into_affine(),
        );
        let ark: ark_groth16::Proof<Bls12_381> = proof.clone().into();
        assert_eq!(ark.a, proof.ar);
        assert_eq!(ark.b, proof.bs);
        assert_eq!(ark.c, proof.krs);
        assert_eq!(Proof::from(ark), proof);
    }
}
