//! Limb-level implementation of the BN254 base field.
//!
//! The field element type encapsulates a value modulo the BN254 prime
//! `p`, held as four 64-bit limbs in Montgomery representation. The
//! following properties apply:
//!
//!  - The constant values `GFbn254::ZERO`, `GFbn254::ONE` and
//!    `GFbn254::MINUS_ONE` contain the elements of value 0, 1 and -1.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, `/`, and the compound assignments `+=`, `-=`, `*=` and `/=`).
//!    Division by zero is tolerated, and yields zero (regardless of the
//!    dividend). Operators can use both the raw types, and references
//!    thereof.
//!
//!  - Functions that modify the instance in place are named `set_*()`
//!    (e.g. `set_square()`, `set_neg()`, `set_exp()`, `set_invert()`,
//!    `set_sqrt()`); corresponding functions without the prefix take
//!    `self` and return the result as a new instance.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets the
//!    instance to the value of `a` if `ctl` is 0xFFFFFFFF, or leaves it
//!    unmodified if `ctl` is 0x00000000. Function `select()` is the
//!    value-returning counterpart.
//!
//!  - `from_w64le()` and `from_w64be()` convert a 256-bit integer (four
//!    64-bit limbs) into the Montgomery representation (the value is
//!    implicitly reduced). `to_w64le()` is the reverse conversion.
//!    `from_i32()`, `from_i64()`, `from_u32()` and `from_u64()` convert
//!    machine integers.
//!
//!  - `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF if both values
//!    are equal, 0x00000000 otherwise; `iszero()` compares with zero.
//!
//!  - `exp(self, e: &[u64; 4])` raises the value to a 256-bit exponent,
//!    with a fixed sequence of 256 squarings and 256 multiplications. It
//!    is used for inversion (`invert()`), square roots (`sqrt()`), and
//!    the Legendre symbol (`legendre()`, which returns 0, +1 or -1).
//!
//!  - `sqrt()` does not verify that its input is a quadratic residue;
//!    `sqrt_checked()` does, and returns a status word.
//!
//!  - `sign0()` returns +1 if the normalized value is at least (p-1)/2,
//!    -1 otherwise.
//!
//!  - `encode()` (and `marshal()`) encode the value over exactly 32 bytes,
//!    with unsigned big-endian convention. `unmarshal()` decodes 32 bytes
//!    without range checking, `decode_ct()` and `decode()` reject
//!    non-canonical inputs, and `decode_reduce()` accepts any length and
//!    reduces the value modulo `p`.

pub mod w64;

/// Finite field: integers modulo the BN254 prime
/// `p = 0x30644E72E131A029B85045B68181585D97816A916871CA8D3C208C16D87CFD47`.
pub type GFbn254 = w64::gfbn254::GFbn254;
