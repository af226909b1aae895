// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use g16_types::{Curve, CurveId, ProofJson, VerifyingKeyJson, WitnessJson};
use g16_verifier::{ErrorKind, Verifier, VerifierOptions, VerifyError};

use super::read_json;
use crate::output;

pub fn run(vk_path: &Path, proof_path: &Path, witness_path: &Path, sequential: bool) -> Result<()> {
    let vk: VerifyingKeyJson = read_json(vk_path, "verifying key")?;
    let proof: ProofJson = read_json(proof_path, "proof")?;
    let witness: WitnessJson = read_json(witness_path, "witness")?;

    for (what, curve) in [("proof", proof.curve), ("witness", witness.curve)] {
        if curve != vk.curve {
            return Err(output::fail_with_hint(
                &format!("{what} is for {curve}, verifying key is for {}", vk.curve),
                "key, proof and witness must come from the same curve",
            ));
        }
    }

    let options = VerifierOptions {
        concurrent: !sequential,
    };
    let outcome = match vk.curve {
        CurveId::Bn254 => check::<Bn254>(&vk, &proof, &witness, options)?,
        CurveId::Bls12_381 => check::<Bls12_381>(&vk, &proof, &witness, options)?,
    };

    match outcome {
        Ok(()) => {
            if output::is_json() {
                output::json_output(serde_json::json!({
                    "valid": true,
                    "curve": vk.curve,
                    "public_inputs": witness.public.len(),
                }));
            } else {
                output::success("proof valid");
                output::label("curve", vk.curve.as_str());
                output::label("public inputs", &witness.public.len().to_string());
            }
            Ok(())
        }
        Err(e) => {
            tracing::warn!(curve = %vk.curve, kind = %e.kind(), code = e.code(), "proof rejected");
            if output::is_json() {
                output::json_output(serde_json::json!({
                    "valid": false,
                    "curve": vk.curve,
                    "kind": e.kind().as_str(),
                    "code": e.code(),
                    "error": e.to_string(),
                }));
            }
            Err(output::fail_with_hint(
                &format!("proof rejected ({}): {e}", e.kind()),
                hint(&e),
            ))
        }
    }
}

/// Decode for curve `E` and verify. The outer error is a decode failure, the
/// inner one the verifier's verdict.
fn check<E: Curve>(
    vk: &VerifyingKeyJson,
    proof: &ProofJson,
    witness: &WitnessJson,
    options: VerifierOptions,
) -> Result<Result<(), VerifyError>> {
    let vk = vk.decode::<E>().context("cannot decode verifying key")?;
    let proof = proof.decode::<E>().context("cannot decode proof")?;
    let witness = witness.decode::<E>().context("cannot decode witness")?;

    Ok(Verifier::<E>::new().with_options(options).verify(&proof, &vk, &witness))
}

fn hint(e: &VerifyError) -> &'static str {
    match e.kind() {
        ErrorKind::Usage => "the witness must hold exactly the circuit's public inputs, without the leading 1",
        ErrorKind::InvalidProof => "the proof does not verify for this key and these public inputs",
        ErrorKind::Internal => "arithmetic failed while verifying; check the key was produced by a trusted setup",
    }
}
