// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::ops::Deref;

use ark_ec::pairing::Pairing;

/// Public inputs of a circuit, in the same order as `K[1..]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicWitness<E: Pairing>(Vec<E::ScalarField>);

impl<E: Pairing> PublicWitness<E> {
    pub fn new(values: Vec<E::ScalarField>) -> Self {
        Self(values)
    }

    pub fn into_inner(self) -> Vec<E::ScalarField> {
        self.0
    }
}

impl<E: Pairing> Deref for PublicWitness<E> {
    type Target = [E::ScalarField];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E: Pairing> From<Vec<E::ScalarField>> for PublicWitness<E> {
    fn from(values: Vec<E::ScalarField>) -> Self {
        Self(values)
    }
}

impl<E: Pairing> FromIterator<E::ScalarField> for PublicWitness<E> {
    fn from_iter<I: IntoIterator<Item = E::ScalarField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
