// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared types for Groth16 verification: verifying key, proof, public
//! witness and their serialized envelopes.

pub mod curve;
pub mod keys;
pub mod proof;
pub mod serialize;
pub mod witness;

pub use curve::{Curve, CurveId, UnknownCurve};
pub use keys::{KeyError, VerifyingKey};
pub use proof::{in_subgroup, Proof};
pub use serialize::{CodecError, ProofJson, VerifyingKeyJson, WitnessJson};
pub use witness::PublicWitness;
