// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for [`Verifier`](crate::Verifier) operations.

use crate::backend::ArithmeticError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid witness size, got {got}, expected {expected} (public - ONE_WIRE)")]
    WitnessSizeMismatch { got: usize, expected: usize },

    #[error("points in the proof are not in the correct subgroup")]
    SubgroupCheckFailed,

    #[error("pairing doesn't match")]
    PairingCheckFailed,

    #[error("multi-exponentiation: {0}")]
    MultiExp(#[source] ArithmeticError),

    #[error("pairing: {0}")]
    Pairing(#[source] ArithmeticError),

    #[error("auxiliary miller loop terminated without a result")]
    AuxiliaryTask,
}

/// Coarse classification for operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied malformed input; never a statement about the proof
    Usage,
    /// The proof is invalid for this key and witness
    InvalidProof,
    /// Arithmetic or runtime fault while verifying
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Usage => "usage",
            ErrorKind::InvalidProof => "invalid_proof",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl VerifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerifyError::WitnessSizeMismatch { .. } => ErrorKind::Usage,
            VerifyError::SubgroupCheckFailed | VerifyError::PairingCheckFailed => {
                ErrorKind::InvalidProof
            }
            VerifyError::MultiExp(_) | VerifyError::Pairing(_) | VerifyError::AuxiliaryTask => {
                ErrorKind::Internal
            }
        }
    }

    /// Stable snake_case name, used in machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            VerifyError::WitnessSizeMismatch { .. } => "witness_size_mismatch",
            VerifyError::SubgroupCheckFailed => "subgroup_check_failed",
            VerifyError::PairingCheckFailed => "pairing_check_failed",
            VerifyError::MultiExp(_) => "multi_exp_error",
            VerifyError::Pairing(_) => "pairing_error",
            VerifyError::AuxiliaryTask => "auxiliary_task_error",
        }
    }
}

pub type VerifyResult<T> = Result<T, VerifyError>;
