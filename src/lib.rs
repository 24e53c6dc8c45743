//! Gfbn254 is a Rust library for the base field of the BN254 curve.
//!
//! BN254 (also known as "alt_bn128") is a pairing-friendly Barreto-Naehrig
//! curve defined over the prime field of order:
//!
//! ```text
//! p = 0x30644E72E131A029B85045B68181585D97816A916871CA8D3C208C16D87CFD47
//! ```
//!
//! This library implements the arithmetic in that field: Montgomery
//! multiplication, exponentiation, inversion, square roots (p = 3 mod 4),
//! Legendre symbol, canonical sign, and encoding as 32 bytes (big-endian).
//! It also provides a hash-to-field function (`hash2field::hash_to_base()`)
//! which maps arbitrary messages into field elements, for use by
//! hash-to-curve constructions. Extension fields, curve points and the
//! pairing itself are meant to be built on top of this layer.
//!
//! # Usage
//!
//! The library is `no_std`. By default, it compiles against the standard
//! library, and enables the `hash2field` feature, which adds dependencies
//! on `hkdf`, `sha2` and `num-bigint`. The `bigint` feature (implied by
//! `hash2field`) provides conversions from and to `num_bigint::BigUint`.
//!
//! # Conventions
//!
//! All implemented functions should be strictly constant-time. In order to
//! avoid unwanted side-channel leaks, Booleans are avoided (compilers tend
//! to "optimize" things a bit too eagerly when handling `bool` values).
//! All functions that return or use a potentially secret Boolean value use
//! the `u32` type; the convention is that 0xFFFFFFFF means "true", and
//! 0x00000000 means "false". No other value shall be used, for they would
//! lead to unpredictable results. Similarly, the `Eq` or `PartialEq` traits
//! are not implemented.
//!
//! Field elements are plain `Copy` values. Functions that modify the
//! object on which they are called have a name in `set_*()` (e.g. for a
//! field element `x`, `x.set_invert()` replaces `x` with its inverse,
//! while `x.invert()` leaves `x` unmodified and returns the inverse as a
//! new instance).
//!
//! Exponentiation (and thus inversion, square roots and the Legendre
//! symbol) always performs the same sequence of 256 squarings and 256
//! multiplications, regardless of the exponent; exponent bits are only
//! used in constant-time selections.
//!
//! No inline assembly is used. On x86-64 architectures, the
//! `_addcarry_u64()` and `_subborrow_u64()` intrinsics are used
//! (from `core::arch::x86_64`); however, plain implementations with
//! no intrinsics are available (and used on other architectures).

#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

pub mod backend;
pub mod field;

#[cfg(feature = "hash2field")]
pub mod hash2field;
