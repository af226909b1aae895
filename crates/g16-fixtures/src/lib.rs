// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 fixtures for exercising the verifier.
//!
//! Runs an `ark-groth16` setup and prove over one of the sample
//! [`circuits`] and hands back the key, proof and public witness in
//! `g16-types` form.

pub mod circuits;

use ark_ec::pairing::Pairing;
use ark_groth16::{Groth16, ProvingKey};
use ark_relations::r1cs::ConstraintSynthesizer;
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use g16_types::{KeyError, Proof, PublicWitness, VerifyingKey};

pub use circuits::{PolynomialCircuit, ProductCircuit, RootCircuit, SquareCircuit};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("setup failed: {0}")]
    Setup(String),

    #[error("proving failed: {0}")]
    Prove(String),

    #[error(transparent)]
    Key(#[from] KeyError),
}

/// A verifying key with one valid proof and its public witness
#[derive(Clone, Debug)]
pub struct Fixture<E: Pairing> {
    pub vk: VerifyingKey<E>,
    pub proof: Proof<E>,
    pub witness: PublicWitness<E>,
}

/// Run Groth16 trusted setup for `circuit`
pub fn setup<E, C, R>(circuit: C, rng: &mut R) -> Result<(ProvingKey<E>, VerifyingKey<E>), FixtureError>
where
    E: Pairing,
    C: ConstraintSynthesizer<E::ScalarField>,
    R: RngCore + CryptoRng,
{
    let (pk, vk) = Groth16::<E>::circuit_specific_setup(circuit, rng)
        .map_err(|e| FixtureError::Setup(e.to_string()))?;
    let vk = VerifyingKey::try_from(&vk)?;
    Ok((pk, vk))
}

/// Generate a Groth16 proof for an assigned `circuit`
pub fn prove<E, C, R>(pk: &ProvingKey<E>, circuit: C, rng: &mut R) -> Result<Proof<E>, FixtureError>
where
    E: Pairing,
    C: ConstraintSynthesizer<E::ScalarField>,
    R: RngCore + CryptoRng,
{
    let proof = Groth16::<E>::prove(pk, circuit, rng).map_err(|e| FixtureError::Prove(e.to_string()))?;
    Ok(proof.into())
}

/// [`SquareCircuit`] with public input `[x]`
pub fn square<E: Pairing, R: RngCore + CryptoRng>(x: u64, rng: &mut R) -> Result<Fixture<E>, FixtureError> {
    let x = E::ScalarField::from(x);
    let (pk, vk) = setup(SquareCircuit::<E::ScalarField>::empty(), rng)?;
    let proof = prove(&pk, SquareCircuit { x: Some(x) }, rng)?;
    Ok(Fixture {
        vk,
        proof,
        witness: vec![x].into(),
    })
}

/// [`PolynomialCircuit`] with public input `[x² + 5]`
pub fn polynomial<E: Pairing, R: RngCore + CryptoRng>(x: u64, rng: &mut R) -> Result<Fixture<E>, FixtureError> {
    let x = E::ScalarField::from(x);
    let y = x * x + E::ScalarField::from(5u64);
    let (pk, vk) = setup(PolynomialCircuit { x: None, y }, rng)?;
    let proof = prove(&pk, PolynomialCircuit { x: Some(x), y }, rng)?;
    Ok(Fixture {
        vk,
        proof,
        witness: vec![y].into(),
    })
}

/// [`ProductCircuit`] with public inputs `[a, b, a·b]`
pub fn product<E: Pairing, R: RngCore + CryptoRng>(a: u64, b: u64, rng: &mut R) -> Result<Fixture<E>, FixtureError> {
    let (a, b) = (E::ScalarField::from(a), E::ScalarField::from(b));
    let (pk, vk) = setup(ProductCircuit::<E::ScalarField>::empty(), rng)?;
    let proof = prove(&pk, ProductCircuit { a: Some(a), b: Some(b) }, rng)?;
    Ok(Fixture {
        vk,
        proof,
        witness: vec![a, b, a * b].into(),
    })
}

/// [`RootCircuit`]: no public inputs, so `K` holds only the constant term
pub fn root<E: Pairing, R: RngCore + CryptoRng>(rng: &mut R) -> Result<Fixture<E>, FixtureError> {
    let (pk, vk) = setup(RootCircuit::<E::ScalarField> { root: None }, rng)?;
    let proof = prove(&pk, RootCircuit { root: Some(E::ScalarField::from(3u64)) }, rng)?;
    Ok(Fixture {
        vk,
        proof,
        witness: PublicWitness::new(vec![]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Bn254;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    /// Same deterministic seed as `ark_std::test_rng`, but typed as `StdRng` so it satisfies `CryptoRng`.
    fn test_rng() -> StdRng {
        StdRng::from_seed([
            1, 0, 0, 0, 23, 0, 0, 0, 200, 1, 0, 0, 210, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ])
    }

    #[test]
    fn fixture_shapes() {
        let mut rng = test_rng();

        let sq = square::<Bn254, _>(5, &mut rng).unwrap();
        assert_eq!(sq.vk.k().len(), 2);
        assert_eq!(sq.witness.len(), 1);
        assert!(sq.proof.is_valid());

        let pr = product::<Bn254, _>(6, 7, &mut rng).unwrap();
        assert_eq!(pr.vk.nb_public_witness(), 3);
        assert_eq!(pr.witness[2], ark_bn254::Fr::from(42u64));

        let rt = root::<Bn254, _>(&mut rng).unwrap();
        assert_eq!(rt.vk.k().len(), 1);
        assert!(rt.witness.is_empty());
    }

    #[test]
    fn fixture_agrees_with_ark_groth16() {
        let mut rng = test_rng();
        let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(SquareCircuit::<ark_bn254::Fr>::empty(), &mut rng).unwrap();
        let x = ark_bn254::Fr::from(5u64);
        let proof = prove(&pk, SquareCircuit { x: Some(x) }, &mut rng).unwrap();

        let ark_proof: ark_groth16::Proof<Bn254> = proof.into();
        assert!(Groth16::<Bn254>::verify(&vk, &[x], &ark_proof).unwrap());
    }
}
