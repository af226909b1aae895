// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier
//!
//! Checks `e(Ar, Bs) · e(Krs, −δ) · e(Σ wᵢ·Kᵢ, −γ) == e(α, β)`:
//! 1. `double_ml` = Miller loop over `{(Krs, −δ), (Ar, Bs)}` (auxiliary thread)
//! 2. `right` = Miller loop over `{(K[0] + MSM(K[1..], w), −γ)}` (calling thread)
//! 3. one final exponentiation over `right · double_ml`, compared to `vk.e`

use std::marker::PhantomData;
use std::thread;
use std::time::Instant;

use ark_ec::pairing::MillerLoopOutput;
use ark_ec::CurveGroup;
use g16_types::{Curve, Proof, PublicWitness, VerifyingKey};

use crate::backend::{Arithmetic, Arkworks};
use crate::error::{VerifyError, VerifyResult};

/// Runtime knobs for [`Verifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierOptions {
    /// Run the proof-only Miller loop on its own thread. When off, both
    /// halves run on the calling thread; outcomes are identical.
    pub concurrent: bool,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        Self { concurrent: true }
    }
}

/// Groth16 verifier over curve `E` with arithmetic backend `A`
///
/// Holds no per-proof state: one instance may verify any number of proofs,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Verifier<E: Curve, A = Arkworks<E>> {
    backend: A,
    options: VerifierOptions,
    _curve: PhantomData<fn() -> E>,
}

impl<E: Curve> Verifier<E> {
    pub fn new() -> Self {
        Self::with_backend(Arkworks::new())
    }
}

impl<E: Curve> Default for Verifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Curve, A: Arithmetic<E>> Verifier<E, A> {
    pub fn with_backend(backend: A) -> Self {
        Self {
            backend,
            options: VerifierOptions::default(),
            _curve: PhantomData,
        }
    }

    pub fn with_options(mut self, options: VerifierOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> VerifierOptions {
        self.options
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }

    /// Verify `proof` against `vk` for the given public inputs
    ///
    /// Witness size and subgroup membership are checked before any pairing
    /// work. Every failure is final for this call.
    pub fn verify(
        &self,
        proof: &Proof<E>,
        vk: &VerifyingKey<E>,
        public_witness: &PublicWitness<E>,
    ) -> VerifyResult<()> {
        let expected = vk.nb_public_witness();
        if public_witness.len() != expected {
            return Err(VerifyError::WitnessSizeMismatch {
                got: public_witness.len(),
                expected,
            });
        }

        let span = tracing::debug_span!(
            "verify",
            curve = %E::ID,
            backend = "groth16",
            arithmetic = self.backend.name(),
        );
        let _enter = span.enter();
        let start = Instant::now();

        // check that the points in the proof are in the correct subgroup
        if !self.proof_in_subgroups(proof) {
            return Err(VerifyError::SubgroupCheckFailed);
        }

        let (right, double_ml) = if self.options.concurrent {
            thread::scope(|s| {
                let aux_span = span.clone();
                let aux = s.spawn(move || aux_span.in_scope(|| self.double_miller_loop(proof, vk)));

                let right = self.witness_miller_loop(vk, public_witness);

                // always join: a panicked auxiliary thread becomes an error
                // here rather than a panic out of the scope
                let double_ml = aux
                    .join()
                    .map_err(|_| VerifyError::AuxiliaryTask)
                    .and_then(|ml| ml);

                Ok::<_, VerifyError>((right?, double_ml?))
            })?
        } else {
            let right = self.witness_miller_loop(vk, public_witness)?;
            (right, self.double_miller_loop(proof, vk)?)
        };

        let result = self
            .backend
            .final_exponentiation(&[right, double_ml])
            .map_err(VerifyError::Pairing)?;
        if *vk.e() != result {
            return Err(VerifyError::PairingCheckFailed);
        }

        tracing::debug!(took = ?start.elapsed(), "verifier done");
        Ok(())
    }

    fn proof_in_subgroups(&self, proof: &Proof<E>) -> bool {
        self.backend.g1_in_subgroup(&proof.ar)
            && self.backend.g2_in_subgroup(&proof.bs)
            && self.backend.g1_in_subgroup(&proof.krs)
    }

    /// e(Krs, −δ) · e(Ar, Bs), before final exponentiation
    fn double_miller_loop(&self, proof: &Proof<E>, vk: &VerifyingKey<E>) -> VerifyResult<MillerLoopOutput<E>> {
        self.backend
            .miller_loop(&[proof.krs, proof.ar], &[*vk.delta_neg(), proof.bs])
            .map_err(VerifyError::Pairing)
    }

    /// e(K[0] + Σ wᵢ·K[i+1], −γ), before final exponentiation
    fn witness_miller_loop(
        &self,
        vk: &VerifyingKey<E>,
        public_witness: &PublicWitness<E>,
    ) -> VerifyResult<MillerLoopOutput<E>> {
        let k = vk.k();
        let mut k_sum = self
            .backend
            .msm(&k[1..], public_witness)
            .map_err(VerifyError::MultiExp)?;
        k_sum += k[0];
        let k_sum_aff = k_sum.into_affine();

        self.backend
            .miller_loop(&[k_sum_aff], &[*vk.gamma_neg()])
            .map_err(VerifyError::Pairing)
    }
}

/// Verify a proof with the default arkworks backend
pub fn verify<E: Curve>(
    proof: &Proof<E>,
    vk: &VerifyingKey<E>,
    public_witness: &PublicWitness<E>,
) -> VerifyResult<()> {
    Verifier::<E>::new().verify(proof, vk, public_witness)
}
