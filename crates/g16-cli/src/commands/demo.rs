// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use g16_types::{Curve, CurveId, ProofJson, VerifyingKeyJson, WitnessJson};

use super::write_json;
use crate::output;

fn setup_rng() -> StdRng {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

pub fn run(curve: CurveId, value: u64, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let sp = output::spinner(&format!("running {curve} setup and proving x = {value}..."));
    let written = match curve {
        CurveId::Bn254 => write_fixture::<Bn254>(value, dir),
        CurveId::Bls12_381 => write_fixture::<Bls12_381>(value, dir),
    };
    sp.finish_and_clear();
    let [vk, proof, witness] = written?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": curve,
            "public_inputs": [value.to_string()],
            "vk": vk,
            "proof": proof,
            "witness": witness,
        }));
    } else {
        output::success(&format!("wrote {curve} demo for x = {value}"));
        output::label("vk", &vk);
        output::label("proof", &proof);
        output::label("witness", &witness);
        output::info(&format!("\ng16 verify --vk {vk} --proof {proof} --witness {witness}"));
    }
    Ok(())
}

fn write_fixture<E: Curve>(value: u64, dir: &Path) -> Result<[String; 3]> {
    let fixture = g16_fixtures::square::<E, _>(value, &mut setup_rng())?;

    let vk_path = dir.join("vk.json");
    let proof_path = dir.join("proof.json");
    let witness_path = dir.join("witness.json");

    write_json(&vk_path, &VerifyingKeyJson::encode(&fixture.vk)?)?;
    write_json(&proof_path, &ProofJson::encode(&fixture.proof)?)?;
    write_json(&witness_path, &WitnessJson::encode(&fixture.witness))?;

    tracing::debug!(curve = %E::ID, dir = %dir.display(), "demo fixture written");
    Ok([vk_path, proof_path, witness_path].map(|p| p.display().to_string()))
}
