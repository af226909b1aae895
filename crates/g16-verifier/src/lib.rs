// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-verifier
//!
//! Groth16 proof verification in constant work per proof, independent of
//! circuit size.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`verifier`] | [`Verifier`] and the [`verify`] shorthand |
//! | [`backend`] | [`Arithmetic`] seam over group/pairing arithmetic |
//! | [`error`] | [`VerifyError`] and its [`ErrorKind`] classification |
//!
//! ```rust,no_run
//! use ark_bn254::Bn254;
//! use g16_types::{Proof, PublicWitness, VerifyingKey};
//!
//! # fn example(vk: &VerifyingKey<Bn254>, proof: &Proof<Bn254>, w: &PublicWitness<Bn254>) {
//! match g16_verifier::verify(proof, vk, w) {
//!     Ok(()) => println!("valid"),
//!     Err(e) => println!("rejected ({:?}): {e}", e.kind()),
//! }
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod verifier;

pub use backend::{Arithmetic, ArithmeticError, Arkworks};
pub use error::{ErrorKind, VerifyError, VerifyResult};
pub use verifier::{verify, Verifier, VerifierOptions};
