// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::io::Write;

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ff::PrimeField;
use g16_types::VerifyingKey;

use crate::template::{Context, Record, Template};
use crate::ExportError;

/// Verifier contract source with `{{…}}` slots for the key
pub const VERIFIER_TEMPLATE: &str = include_str!("../templates/verifier.sol");

/// Write a Solidity verifier for `vk` to `w`
///
/// The contract is rendered in full before anything is written, so a
/// template error leaves `w` untouched. Same key, same bytes.
pub fn export_solidity(vk: &VerifyingKey<Bn254>, w: &mut impl Write) -> Result<(), ExportError> {
    let template = Template::parse(VERIFIER_TEMPLATE)?;
    let source = template.render_to_string(&key_context(vk))?;
    w.write_all(source.as_bytes())?;
    w.flush()?;

    tracing::debug!(ic = vk.k().len(), bytes = source.len(), "solidity verifier exported");
    Ok(())
}

fn key_context(vk: &VerifyingKey<Bn254>) -> Context {
    let mut ctx = Context::new();
    ctx.set("base_modulus", Fq::MODULUS.to_string())
        .set("scalar_modulus", Fr::MODULUS.to_string());

    set_g1(&mut ctx, "alpha", vk.alpha_g1());
    set_g2(&mut ctx, "beta", vk.beta_g2());
    set_g2(&mut ctx, "gamma", vk.gamma_g2());
    set_g2(&mut ctx, "delta", vk.delta_g2());

    let ic = vk
        .k()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Record::from([
                ("index".to_string(), i.to_string()),
                ("x".to_string(), decimal(&p.x)),
                ("y".to_string(), decimal(&p.y)),
            ])
        })
        .collect();
    ctx.set_list("ic", ic);
    ctx
}

// the point at infinity keeps x = y = 0, which is what the precompiles expect
fn set_g1(ctx: &mut Context, name: &str, p: &G1Affine) {
    ctx.set(&format!("{name}_x"), decimal(&p.x))
        .set(&format!("{name}_y"), decimal(&p.y));
}

// `_x1`/`_x0` slots: the precompiles take the imaginary part first
fn set_g2(ctx: &mut Context, name: &str, p: &G2Affine) {
    set_fq2(ctx, &format!("{name}_x"), &p.x);
    set_fq2(ctx, &format!("{name}_y"), &p.y);
}

fn set_fq2(ctx: &mut Context, name: &str, v: &Fq2) {
    ctx.set(&format!("{name}0"), decimal(&v.c0))
        .set(&format!("{name}1"), decimal(&v.c1));
}

fn decimal(v: &Fq) -> String {
    v.into_bigint().to_string()
}
