// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use ark_bn254::Bn254;
use g16_export::export_solidity;
use g16_types::{CurveId, VerifyingKeyJson};

use super::read_json;
use crate::output;

pub fn run(vk_path: &Path, out: Option<&Path>) -> Result<()> {
    let vk_json: VerifyingKeyJson = read_json(vk_path, "verifying key")?;
    if vk_json.curve != CurveId::Bn254 {
        return Err(output::fail_with_hint(
            &format!("cannot export a {} verifying key to Solidity", vk_json.curve),
            "the EVM pairing precompiles only support bn254",
        ));
    }
    let vk = vk_json.decode::<Bn254>().context("cannot decode verifying key")?;
    if vk.nb_public_witness() == 0 {
        output::warn("key has no public inputs; the generated `uint256[0]` parameter will not compile");
    }

    match out {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            export_solidity(&vk, &mut BufWriter::new(file))?;

            if output::is_json() {
                output::json_output(serde_json::json!({
                    "out": path.display().to_string(),
                    "public_inputs": vk.nb_public_witness(),
                }));
            } else {
                output::success(&format!("verifier contract written to {}", path.display()));
                output::label("public inputs", &vk.nb_public_witness().to_string());
            }
        }
        None if output::is_json() => {
            let mut buf = Vec::new();
            export_solidity(&vk, &mut buf)?;
            output::json_output(serde_json::json!({
                "source": String::from_utf8_lossy(&buf),
                "public_inputs": vk.nb_public_witness(),
            }));
        }
        None => export_solidity(&vk, &mut io::stdout().lock())?,
    }
    Ok(())
}
