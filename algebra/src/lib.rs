//! Prime-field and pairing-group primitives used by the QAP pairing engine.
//!
//! The crate wraps the arkworks BN254 implementation behind the [`traits::Scalar`],
//! [`traits::Group`] and [`traits::Pairing`] traits so that the proof layer can be
//! written once against the traits.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(warnings)]
#![allow(clippy::upper_case_acronyms)]

/// Module for the BN254 curve.
pub mod bn254;

/// Module for error handling.
pub mod errors;

/// Module for the prelude.
pub mod prelude;

/// Module for test rngs.
pub mod rand_helper;

/// Module for serialization of scalars and group elements.
pub mod serialization;

/// Module for traits.
pub mod traits;

/// Module for utils.
pub mod utils;

pub use ark_std::{borrow, fmt, iter, marker, ops, rand, One, UniformRand, Zero};
