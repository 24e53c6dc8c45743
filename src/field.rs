//! Finite fields.
//!
//! This module exports the base field of the BN254 pairing-friendly curve,
//! which is the coefficient type for the extension fields, curve points and
//! pairing computations built on top of this crate.

pub use crate::backend::GFbn254;
