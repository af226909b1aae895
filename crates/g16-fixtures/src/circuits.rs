// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Small R1CS circuits with known public inputs.

use ark_ff::PrimeField;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};

/// "`x` is public and I know `s = x²`"
///
/// Public inputs: `[x]`.
#[derive(Clone)]
pub struct SquareCircuit<F: PrimeField> {
    pub x: Option<F>,
}

impl<F: PrimeField> SquareCircuit<F> {
    pub fn empty() -> Self {
        Self { x: None }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for SquareCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let x_var = cs.new_input_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let s_var = cs.new_witness_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x)
        })?;

        cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + s_var)?;
        Ok(())
    }
}

/// "I know `x` such that `x² + 5 = y`"
///
/// Public inputs: `[y]`.
#[derive(Clone)]
pub struct PolynomialCircuit<F: PrimeField> {
    pub x: Option<F>,
    pub y: F,
}

impl<F: PrimeField> ConstraintSynthesizer<F> for PolynomialCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let y_var = cs.new_input_variable(|| Ok(self.y))?;
        let x_var = cs.new_witness_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let x_squared_var = cs.new_witness_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x)
        })?;

        cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + x_squared_var)?;

        let five = F::from(5u64);
        cs.enforce_constraint(
            lc!() + x_squared_var + (five, Variable::One),
            lc!() + Variable::One,
            lc!() + y_var,
        )?;
        Ok(())
    }
}

/// "`a · b = c`" with all three public
///
/// Public inputs: `[a, b, c]`.
#[derive(Clone)]
pub struct ProductCircuit<F: PrimeField> {
    pub a: Option<F>,
    pub b: Option<F>,
}

impl<F: PrimeField> ProductCircuit<F> {
    pub fn empty() -> Self {
        Self { a: None, b: None }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for ProductCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let a = FpVar::new_input(cs.clone(), || self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b = FpVar::new_input(cs.clone(), || self.b.ok_or(SynthesisError::AssignmentMissing))?;
        let c = FpVar::new_input(cs, || {
            let a = self.a.ok_or(SynthesisError::AssignmentMissing)?;
            let b = self.b.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(a * b)
        })?;

        (&a * &b).enforce_equal(&c)?;
        Ok(())
    }
}

/// "I know a square root of 9", no public inputs
#[derive(Clone)]
pub struct RootCircuit<F: PrimeField> {
    pub root: Option<F>,
}

impl<F: PrimeField> ConstraintSynthesizer<F> for RootCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let r = cs.new_witness_variable(|| self.root.ok_or(SynthesisError::AssignmentMissing))?;
        cs.enforce_constraint(
            lc!() + r,
            lc!() + r,
            lc!() + (F::from(9u64), Variable::One),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_relations::r1cs::ConstraintSystem;

    fn satisfied<C: ConstraintSynthesizer<Fr>>(circuit: C) -> bool {
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        cs.is_satisfied().unwrap()
    }

    #[test]
    fn square_satisfied() {
        assert!(satisfied(SquareCircuit { x: Some(Fr::from(5u64)) }));
    }

    #[test]
    fn polynomial_checks_y() {
        let x = Some(Fr::from(3u64));
        assert!(satisfied(PolynomialCircuit { x, y: Fr::from(14u64) }));
        assert!(!satisfied(PolynomialCircuit { x, y: Fr::from(15u64) }));
    }

    #[test]
    fn product_satisfied() {
        assert!(satisfied(ProductCircuit {
            a: Some(Fr::from(6u64)),
            b: Some(Fr::from(7u64)),
        }));
    }

    #[test]
    fn root_checks_witness() {
        assert!(satisfied(RootCircuit { root: Some(Fr::from(3u64)) }));
        assert!(satisfied(RootCircuit { root: Some(-Fr::from(3u64)) }));
        assert!(!satisfied(RootCircuit { root: Some(Fr::from(4u64)) }));
    }

    fn instance_count<C: ConstraintSynthesizer<Fr>>(circuit: C) -> usize {
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        // includes the ONE_WIRE
        cs.num_instance_variables()
    }

    #[test]
    fn public_input_counts() {
        let one = Some(Fr::from(1u64));
        assert_eq!(instance_count(SquareCircuit { x: one }), 2);
        assert_eq!(instance_count(ProductCircuit { a: one, b: one }), 4);
        assert_eq!(instance_count(RootCircuit { root: one }), 1);
    }
}
