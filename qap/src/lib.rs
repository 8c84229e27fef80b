//! Quadratic Arithmetic Programs over a pairing-friendly curve.
//!
//! An [`r1cs::R1CSInstance`] is interpolated over an [`polynomial::EvaluationPointSet`]
//! into the QAP triple (V, W, Y), evaluated at a secret point `s`, committed into
//! the pairing groups and checked with the pairing equation
//! `e(E(V), E(W)) = e(g1, E(Y)) * e(E(T), E(H))`.
#![deny(warnings)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for the commitment of QAP evaluations.
pub mod commitment;
/// Module for error handling.
pub mod errors;
/// Module for polynomials and Lagrange interpolation.
pub mod polynomial;
/// Module for the prover pipeline.
pub mod prover;
/// Module for the QAP builder.
pub mod qap;
/// Module for rank-1 constraint systems.
pub mod r1cs;
/// Module for the setup parameters.
pub mod setup;
/// Module for the pairing verifier.
pub mod verifier;

pub use errors::QapError;
