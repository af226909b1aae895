// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::io::{self, Write};

use ark_bn254::Bn254;
use ark_ff::PrimeField;
use ark_std::rand::{rngs::StdRng, SeedableRng};

/// Same deterministic seed as `ark_std::test_rng`, but typed as `StdRng` so it satisfies `CryptoRng`.
fn test_rng() -> StdRng {
    StdRng::from_seed([
        1, 0, 0, 0, 23, 0, 0, 0, 200, 1, 0, 0, 210, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ])
}
use g16_export::{export_solidity, ExportError};
use g16_types::VerifyingKey;

fn product_vk() -> VerifyingKey<Bn254> {
    g16_fixtures::product::<Bn254, _>(6, 7, &mut test_rng())
        .unwrap()
        .vk
}

fn render(vk: &VerifyingKey<Bn254>) -> String {
    let mut buf = Vec::new();
    export_solidity(vk, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn dec(v: &ark_bn254::Fq) -> String {
    v.into_bigint().to_string()
}

#[test]
fn same_key_same_bytes() {
    let vk = product_vk();
    assert_eq!(render(&vk), render(&vk));
}

#[test]
fn different_keys_differ() {
    let mut rng = test_rng();
    let a = g16_fixtures::product::<Bn254, _>(6, 7, &mut rng).unwrap().vk;
    let b = g16_fixtures::product::<Bn254, _>(6, 7, &mut rng).unwrap().vk;
    assert_ne!(render(&a), render(&b));
}

#[test]
fn contract_carries_key_constants() {
    let vk = product_vk();
    let sol = render(&vk);

    assert!(sol.contains("library Pairing {"));
    assert!(sol.contains("contract Verifier {"));
    assert!(sol.contains("function verifyingKey()"));
    assert!(sol.contains("function verify(uint256[] memory input, Proof memory proof)"));

    let alpha = vk.alpha_g1();
    assert!(sol.contains(&format!(
        "vk.alfa1 = Pairing.G1Point(uint256({}), uint256({}));",
        dec(&alpha.x),
        dec(&alpha.y)
    )));

    let delta = vk.delta_g2();
    assert!(sol.contains(&format!(
        "vk.delta2 = Pairing.G2Point([uint256({}), uint256({})], [uint256({}), uint256({})]);",
        dec(&delta.x.c1),
        dec(&delta.x.c0),
        dec(&delta.y.c1),
        dec(&delta.y.c0)
    )));

    for (i, k) in vk.k().iter().enumerate() {
        let line = format!(
            "        vk.IC[{i}] = Pairing.G1Point(uint256({}), uint256({}));\n",
            dec(&k.x),
            dec(&k.y)
        );
        assert!(sol.contains(&line), "IC[{i}] missing");
    }
}

#[test]
fn array_sizes_follow_public_inputs() {
    // three public inputs: K has four entries
    let sol = render(&product_vk());
    assert!(sol.contains("Pairing.G1Point[4] IC;"));
    assert!(sol.contains("uint256[3] memory input"));
    assert!(!sol.contains("vk.IC[4]"));

    let sq = g16_fixtures::square::<Bn254, _>(5, &mut test_rng())
        .unwrap()
        .vk;
    let sol = render(&sq);
    assert!(sol.contains("Pairing.G1Point[2] IC;"));
    assert!(sol.contains("uint256[1] memory input"));
}

#[test]
fn moduli_are_rendered() {
    let sol = render(&product_vk());
    assert!(sol.contains(&format!(
        "uint256 constant SNARK_SCALAR_FIELD = {};",
        ark_bn254::Fr::MODULUS
    )));
    assert!(sol.contains(&format!("uint256 constant PRIME_Q = {};", ark_bn254::Fq::MODULUS)));
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_errors_surface_as_io() {
    let err = export_solidity(&product_vk(), &mut BrokenSink).unwrap_err();
    assert!(matches!(err, ExportError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}
