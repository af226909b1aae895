// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Render a BN254 Groth16 verifying key as a Solidity verifier contract.
//!
//! The contract follows the semaphore/OKIMS verifier layout: a `Pairing`
//! library over the EVM precompiles and a `Verifier` contract with the key
//! baked into `verifyingKey()`. Only key values change between renders.

pub mod solidity;
pub mod template;

pub use solidity::export_solidity;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("template error at line {line}: {reason}")]
    Template { line: usize, reason: String },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
