use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{addcarry_u64, subborrow_u64, umull_add, umull_add2, zmask};
use crate::{CryptoRng, RngCore};

#[cfg(feature = "bigint")]
use num_bigint::BigUint;

/// Element of the base field of BN254.
///
/// The value is kept in Montgomery representation: the four limbs
/// (least significant first) hold `x*R mod p`, with `R = 2^256`. The
/// stored integer is always fully reduced (lower than `p`), so that two
/// elements are equal if and only if their limbs are equal.
#[derive(Clone, Copy)]
pub struct GFbn254([u64; 4]);

impl GFbn254 {

    // Modulus p = 36*u^4 + 36*u^3 + 24*u^2 + 6*u + 1, with
    // u = 4965661367192848881 (base 2^64, low-to-high order).
    pub const MODULUS: [u64; 4] = [
        0x3C208C16D87CFD47, 0x97816A916871CA8D,
        0xB85045B68181585D, 0x30644E72E131A029,
    ];

    // Encoded length, in bytes.
    pub const ENC_LEN: usize = 32;

    pub const ZERO: Self = Self([ 0, 0, 0, 0 ]);

    // R mod p
    pub const ONE: Self = Self([
        0xD35D438DC58F0D9D, 0x0A78EB28F5C70B3D,
        0x666EA36F7879462C, 0x0E0A77C19A07DF2F,
    ]);

    // p - (R mod p)
    pub const MINUS_ONE: Self = Self([
        0x68C3488912EDEFAA, 0x8D087F6872AABF4F,
        0x51E1A24709081231, 0x2259D6B14729C0FA,
    ]);

    // -1/p mod 2^64
    const M0I: u64 = Self::ninv64(Self::MODULUS[0]);

    // R^2 mod p; a Montgomery multiplication by this value converts
    // into Montgomery representation.
    const R2: Self = Self([
        0xF32CFC5B538AFA89, 0xB5E71911D44501FB,
        0x47AB1EFF0A417FF6, 0x06D89F71CAB8351F,
    ]);

    // R^3 mod p
    const R3: Self = Self([
        0xB1CD6DAFDA1530DF, 0x62F210E6A7283DB6,
        0xEF7F0B0C0ADA0AFB, 0x20FD6E902D592544,
    ]);

    // 1/R mod p
    const RN1: Self = Self([
        0xED84884A014AFA37, 0xEB2022850278EDF8,
        0xCF63E9CFB74492D9, 0x2E67157159E5C639,
    ]);

    // p - 2 (inversion exponent)
    const PM2: [u64; 4] = [
        0x3C208C16D87CFD45, 0x97816A916871CA8D,
        0xB85045B68181585D, 0x30644E72E131A029,
    ];

    // (p + 1)/4 (square root exponent, since p = 3 mod 4)
    const PP1D4: [u64; 4] = [
        0x4F082305B61F3F52, 0x65E05AA45A1C72A3,
        0x6E14116DA0605617, 0x0C19139CB84C680A,
    ];

    // (p - 1)/2 (Legendre symbol exponent, and sign threshold)
    const PM1D2: [u64; 4] = [
        0x9E10460B6C3E7EA3, 0xCBC0B548B438E546,
        0xDC2822DB40C0AC2E, 0x183227397098D014,
    ];

    // Create an element from its four 64-bit limbs, provided in
    // little-endian order (least significant limb first). The value is
    // converted to Montgomery representation; if it is not lower than
    // the modulus, then it is implicitly reduced.
    #[inline(always)]
    pub fn from_w64le(x: [u64; 4]) -> Self {
        let mut r = Self(x);
        r.set_mul(&Self::R2);
        r
    }

    // Same as from_w64le(), but with the limbs in big-endian order (most
    // significant limb first).
    #[inline(always)]
    pub fn from_w64be(x: [u64; 4]) -> Self {
        Self::from_w64le([ x[3], x[2], x[1], x[0] ])
    }

    // Get the four 64-bit limbs of the (normalized) value, in little-endian
    // order. This is the conversion out of Montgomery representation.
    #[inline(always)]
    pub fn to_w64le(self) -> [u64; 4] {
        let mut r = self;
        r.set_montyred();
        r.0
    }

    // Create an element from its internal (Montgomery) representation.
    // The value MUST be lower than the modulus.
    #[inline(always)]
    pub const fn from_monty_w64le(x: [u64; 4]) -> Self {
        Self(x)
    }

    // Get the internal (Montgomery) representation of this element.
    #[inline(always)]
    pub const fn monty_w64le(self) -> [u64; 4] {
        self.0
    }

    // Create an element by converting the provided integer. Negative
    // values are handled by encoding the absolute value, then negating.
    #[inline]
    pub fn from_i64(x: i64) -> Self {
        let mut r = Self::from_w64le([ x.unsigned_abs(), 0, 0, 0 ]);
        let n = -r;
        r.set_cond(&n, (x >> 63) as u32);
        r
    }

    #[inline(always)]
    pub fn from_i32(x: i32) -> Self {
        Self::from_i64(x as i64)
    }

    #[inline(always)]
    pub fn from_u64(x: u64) -> Self {
        Self::from_w64le([ x, 0, 0, 0 ])
    }

    #[inline(always)]
    pub fn from_u32(x: u32) -> Self {
        Self::from_w64le([ x as u64, 0, 0, 0 ])
    }

    /// Converts a non-negative big integer into a field element.
    ///
    /// Only the low 256 bits of `x` are used. Values in the `p` to
    /// `2^256-1` range are implicitly reduced, but larger values are
    /// truncated, not reduced: callers that need the field element
    /// `x mod p` must reduce `x` beforehand.
    #[cfg(feature = "bigint")]
    pub fn from_biguint(x: &BigUint) -> Self {
        let mut d = [0u64; 4];
        for (i, w) in x.iter_u64_digits().take(4).enumerate() {
            d[i] = w;
        }
        Self::from_w64le(d)
    }

    /// Returns the value of this element, as an integer in `0..p-1`.
    #[cfg(feature = "bigint")]
    pub fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_be(&self.encode())
    }

    /// Returns the modulus `p`.
    #[cfg(feature = "bigint")]
    pub fn modulus_biguint() -> BigUint {
        let mut d = [0u32; 8];
        for i in 0..4 {
            d[2 * i] = Self::MODULUS[i] as u32;
            d[2 * i + 1] = (Self::MODULUS[i] >> 32) as u32;
        }
        BigUint::from_slice(&d)
    }

    /// Generates a random element.
    ///
    /// 48 bytes are obtained from the provided RNG and reduced modulo
    /// `p`; the resulting bias is negligible.
    pub fn random<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        let mut buf = [0u8; 48];
        rng.fill_bytes(&mut buf);
        Self::decode_reduce(&buf)
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        // Since p < 2^254, the sum cannot overflow 256 bits.
        let (d0, cc) = addcarry_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = addcarry_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = addcarry_u64(self.0[2], rhs.0[2], cc);
        let (d3, _)  = addcarry_u64(self.0[3], rhs.0[3], cc);

        // Subtract the modulus; add it back if that yielded a borrow.
        let (d0, cc) = subborrow_u64(d0, Self::MODULUS[0], 0);
        let (d1, cc) = subborrow_u64(d1, Self::MODULUS[1], cc);
        let (d2, cc) = subborrow_u64(d2, Self::MODULUS[2], cc);
        let (d3, cc) = subborrow_u64(d3, Self::MODULUS[3], cc);
        let m = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, m & Self::MODULUS[0], 0);
        let (d1, cc) = addcarry_u64(d1, m & Self::MODULUS[1], cc);
        let (d2, cc) = addcarry_u64(d2, m & Self::MODULUS[2], cc);
        let (d3, _)  = addcarry_u64(d3, m & Self::MODULUS[3], cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        let (d0, cc) = subborrow_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = subborrow_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = subborrow_u64(self.0[2], rhs.0[2], cc);
        let (d3, cc) = subborrow_u64(self.0[3], rhs.0[3], cc);

        let m = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, m & Self::MODULUS[0], 0);
        let (d1, cc) = addcarry_u64(d1, m & Self::MODULUS[1], cc);
        let (d2, cc) = addcarry_u64(d2, m & Self::MODULUS[2], cc);
        let (d3, _)  = addcarry_u64(d3, m & Self::MODULUS[3], cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    // Negate this element.
    #[inline]
    pub fn set_neg(&mut self) {
        let (d0, cc) = subborrow_u64(0, self.0[0], 0);
        let (d1, cc) = subborrow_u64(0, self.0[1], cc);
        let (d2, cc) = subborrow_u64(0, self.0[2], cc);
        let (d3, cc) = subborrow_u64(0, self.0[3], cc);

        let m = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, m & Self::MODULUS[0], 0);
        let (d1, cc) = addcarry_u64(d1, m & Self::MODULUS[1], cc);
        let (d2, cc) = addcarry_u64(d2, m & Self::MODULUS[2], cc);
        let (d3, _)  = addcarry_u64(d3, m & Self::MODULUS[3], cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    // Set this instance to a if ctl is 0xFFFFFFFF; leave it unmodified
    // if ctl is 0x00000000.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0[0] ^= cw & (self.0[0] ^ a.0[0]);
        self.0[1] ^= cw & (self.0[1] ^ a.0[1]);
        self.0[2] ^= cw & (self.0[2] ^ a.0[2]);
        self.0[3] ^= cw & (self.0[3] ^ a.0[3]);
    }

    // Return a0 if ctl is 0x00000000, a1 if ctl is 0xFFFFFFFF.
    #[inline]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Montgomery reduction: divide the value by R modulo p. The input
    // may be any 256-bit integer; the output is at most p, and lower
    // than p whenever the input is lower than p.
    fn set_montyred(&mut self) {
        for _ in 0..4 {
            let f = self.0[0].wrapping_mul(Self::M0I);
            let (_, mut cc) = umull_add(f, Self::MODULUS[0], self.0[0]);
            for i in 1..4 {
                let (d, hi) = umull_add2(f, Self::MODULUS[i], self.0[i], cc);
                self.0[i - 1] = d;
                cc = hi;
            }
            self.0[3] = cc;
        }
    }

    // Montgomery multiplication: self <- self*rhs/R mod p. One of the
    // operands may be unreduced (up to 2^256-1); the output is always
    // fully reduced.
    fn set_mul(&mut self, rhs: &Self) {
        let mut t = [0u64; 4];

        // combined muls + reduction
        let mut cch = 0;
        for i in 0..4 {
            let f = rhs.0[i];
            let (lo, mut cc1) = umull_add(f, self.0[0], t[0]);
            let g = lo.wrapping_mul(Self::M0I);
            let (_, mut cc2) = umull_add(g, Self::MODULUS[0], lo);
            for j in 1..4 {
                let (d, hi1) = umull_add2(f, self.0[j], t[j], cc1);
                cc1 = hi1;
                let (d, hi2) = umull_add2(g, Self::MODULUS[j], d, cc2);
                cc2 = hi2;
                t[j - 1] = d;
            }
            let (d, ee) = addcarry_u64(cc1, cc2, cch);
            t[3] = d;
            cch = ee;
        }

        // final reduction: subtract modulus if necessary
        let mut cc = 0;
        for i in 0..4 {
            let (d, ee) = subborrow_u64(t[i], Self::MODULUS[i], cc);
            t[i] = d;
            cc = ee;
        }
        let mm = (cch as u64).wrapping_sub(cc as u64);
        cc = 0;
        for i in 0..4 {
            let (d, ee) = addcarry_u64(t[i], mm & Self::MODULUS[i], cc);
            self.0[i] = d;
            cc = ee;
        }
    }

    #[inline(always)]
    pub fn set_square(&mut self) {
        let r = *self;
        self.set_mul(&r);
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Raise this value to the power e. The exponent is given as four
    // 64-bit limbs, least significant first.
    //
    // Exponent bits are processed from low to high. The accumulator
    // starts at 1/R (raw value): each Montgomery multiplication by a
    // power x^(2^i) (in Montgomery representation) then multiplies the
    // accumulator by exactly x^(2^i), and the final multiplication by R^3
    // brings the result back into Montgomery representation.
    //
    // The sequence of operations does not depend on the exponent value:
    // there are always 256 multiplications and 256 squarings, and the
    // exponent bits only drive constant-time selections. This function
    // is thus safe to use with secret exponents.
    pub fn set_exp(&mut self, e: &[u64; 4]) {
        let mut sum = Self::RN1;
        let mut power = *self;
        for i in 0..4 {
            let ew = e[i];
            for j in 0..64 {
                let t = sum * power;
                sum.set_cond(&t, (((ew >> j) & 1) as u32).wrapping_neg());
                power.set_square();
            }
        }
        sum.set_mul(&Self::R3);
        *self = sum;
    }

    #[inline(always)]
    pub fn exp(self, e: &[u64; 4]) -> Self {
        let mut r = self;
        r.set_exp(e);
        r
    }

    // Invert this value (Fermat's little theorem: x^(p-2)). Zero has no
    // inverse; it is mapped to zero.
    #[inline(always)]
    pub fn set_invert(&mut self) {
        self.set_exp(&Self::PM2);
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    #[inline(always)]
    fn set_div(&mut self, y: &Self) {
        self.set_mul(&y.invert());
    }

    // Set this value to a square root candidate: x^((p+1)/4).
    //
    // No check is performed. If the value is a quadratic residue then the
    // result is one of its square roots; otherwise, the result is a square
    // root of the opposite value (-1 is not a square modulo p). Callers
    // that do not already know that the value is a square must use
    // legendre() or sqrt_checked().
    #[inline(always)]
    pub fn set_sqrt(&mut self) {
        self.set_exp(&Self::PP1D4);
    }

    #[inline(always)]
    pub fn sqrt(self) -> Self {
        let mut r = self;
        r.set_sqrt();
        r
    }

    // Compute a square root and verify it. Returned value is (r, 0xFFFFFFFF)
    // if this value is a quadratic residue, with r one of its square
    // roots; otherwise, (0, 0x00000000) is returned.
    pub fn sqrt_checked(self) -> (Self, u32) {
        let mut r = self.sqrt();
        let ok = r.square().equals(self);
        r.set_cond(&Self::ZERO, !ok);
        (r, ok)
    }

    // Compute the Legendre symbol on this value. Return value is:
    //   0   if this value is zero
    //  +1   if this value is a non-zero quadratic residue
    //  -1   if this value is not a quadratic residue
    pub fn legendre(self) -> i32 {
        // x^((p-1)/2) is 0, 1 or p-1. For this modulus, 1 is odd and
        // p-1 is even, so the low bit is enough to tell them apart.
        let f = self.exp(&Self::PM1D2);
        let z = f.iszero();
        let s = ((f.to_w64le()[0] & 1) as i32) * 2 - 1;
        s & !(z as i32)
    }

    // Get the "sign" of this value: +1 if the value (normalized in
    // 0..p-1) is at least (p-1)/2, -1 otherwise. For any non-zero x other
    // than (p-1)/2, x and -x have opposite signs; this is used to pick a
    // canonical root in compressed point encodings.
    pub fn sign0(self) -> i32 {
        let x = self.to_w64le();
        let (_, cc) = subborrow_u64(x[0], Self::PM1D2[0], 0);
        let (_, cc) = subborrow_u64(x[1], Self::PM1D2[1], cc);
        let (_, cc) = subborrow_u64(x[2], Self::PM1D2[2], cc);
        let (_, cc) = subborrow_u64(x[3], Self::PM1D2[3], cc);
        1 - 2 * (cc as i32)
    }

    // Equality check (constant-time): returned value is 0xFFFFFFFF on
    // equality, 0 otherwise.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        // Values have a single valid internal representation, so we
        // can do a simple comparison.
        let r = (self.0[0] ^ rhs.0[0])
              | (self.0[1] ^ rhs.0[1])
              | (self.0[2] ^ rhs.0[2])
              | (self.0[3] ^ rhs.0[3]);
        zmask(r) as u32
    }

    // Compare this value with zero (constant-time): returned value
    // is 0xFFFFFFFF if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        zmask(self.0[0] | self.0[1] | self.0[2] | self.0[3]) as u32
    }

    // Write the normalized value (0..p-1) into exactly 32 bytes, with
    // big-endian convention.
    #[inline]
    pub fn marshal(self, out: &mut [u8; 32]) {
        let x = self.to_w64le();
        for w in 0..4 {
            out[(8 * w)..(8 * w + 8)].copy_from_slice(&x[3 - w].to_be_bytes());
        }
    }

    #[inline(always)]
    pub fn encode(self) -> [u8; 32] {
        let mut d = [0u8; 32];
        self.marshal(&mut d);
        d
    }

    // Read 32 bytes as a big-endian 256-bit integer (as-is, no reduction).
    #[inline]
    fn w64le_from_be(buf: &[u8; 32]) -> [u64; 4] {
        let mut x = [0u64; 4];
        for w in 0..4 {
            for b in 0..8 {
                x[3 - w] = (x[3 - w] << 8) | (buf[8 * w + b] as u64);
            }
        }
        x
    }

    // Set this value by decoding 32 bytes with big-endian convention. No
    // range check is performed: a source integer which is not lower
    // than p is implicitly reduced.
    #[inline]
    pub fn set_unmarshal(&mut self, buf: &[u8; 32]) {
        *self = Self::from_w64le(Self::w64le_from_be(buf));
    }

    #[inline(always)]
    pub fn unmarshal(buf: &[u8; 32]) -> Self {
        let mut r = Self::ZERO;
        r.set_unmarshal(buf);
        r
    }

    // Decode a value from exactly 32 bytes (big-endian). If the provided
    // slice does not have length exactly 32 bytes, or if the value is not
    // strictly lower than the modulus, then the decoding fails: this
    // element is set to zero, and 0 is returned. Otherwise, this element
    // is set to the decoded value, and 0xFFFFFFFF is returned. For a
    // 32-byte input, the outcome is not leaked through timing.
    pub fn set_decode_ct(&mut self, buf: &[u8]) -> u32 {
        *self = Self::ZERO;

        // The slice length is not secret.
        if buf.len() != 32 {
            return 0;
        }
        let mut tmp = [0u8; 32];
        tmp.copy_from_slice(buf);
        let x = Self::w64le_from_be(&tmp);

        // Clear the value if not canonical.
        let (_, cc) = subborrow_u64(x[0], Self::MODULUS[0], 0);
        let (_, cc) = subborrow_u64(x[1], Self::MODULUS[1], cc);
        let (_, cc) = subborrow_u64(x[2], Self::MODULUS[2], cc);
        let (_, cc) = subborrow_u64(x[3], Self::MODULUS[3], cc);
        let m = (cc as u64).wrapping_neg();
        self.0 = [ x[0] & m, x[1] & m, x[2] & m, x[3] & m ];

        self.set_mul(&Self::R2);
        m as u32
    }

    #[inline(always)]
    pub fn decode_ct(buf: &[u8]) -> (Self, u32) {
        let mut r = Self::ZERO;
        let cc = r.set_decode_ct(buf);
        (r, cc)
    }

    // Decode a value from exactly 32 bytes (big-endian). Returned value
    // is None if the slice length is wrong or the value is out of range.
    // Side-channel analysis may reveal whether decoding succeeded.
    #[inline]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (r, cc) = Self::decode_ct(buf);
        if cc != 0 {
            Some(r)
        } else {
            None
        }
    }

    // Decode a value from bytes, with unsigned big-endian convention; the
    // integer is reduced modulo p. Any length is accepted (an empty slice
    // yields zero). This is constant-time, except for the slice length.
    pub fn set_decode_reduce(&mut self, buf: &[u8]) {
        *self = Self::ZERO;

        // Chunks of 32 bytes, from high to low; the first (top) chunk may
        // be shorter. For each chunk, the current value (in Montgomery
        // representation) is Montgomery-multiplied by R^2 (raw), which
        // multiplies it by 2^256, then the converted chunk is added.
        for chunk in buf.rchunks(32).rev() {
            let mut tmp = [0u8; 32];
            tmp[(32 - chunk.len())..].copy_from_slice(chunk);
            self.set_mul(&Self::R2);
            self.set_add(&Self::from_w64le(Self::w64le_from_be(&tmp)));
        }
    }

    #[inline(always)]
    pub fn decode_reduce(buf: &[u8]) -> Self {
        let mut r = Self::ZERO;
        r.set_decode_reduce(buf);
        r
    }

    // Return -1/x mod 2^64. It is assumed that x is odd.
    const fn ninv64(x: u64) -> u64 {
        let y = 2u64.wrapping_sub(x);
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
        y.wrapping_neg()
    }
}

// ========================================================================
// Formatting: the normalized value is printed as four 16-digit
// hexadecimal groups, most significant first. The LowerHex format
// prints the internal (Montgomery) limbs instead.

impl fmt::Display for GFbn254 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.to_w64le();
        write!(f, "{:016x}{:016x}{:016x}{:016x}", x[3], x[2], x[1], x[0])
    }
}

impl fmt::Debug for GFbn254 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GFbn254({})", self)
    }
}

impl fmt::LowerHex for GFbn254 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}{:016x}{:016x}",
            self.0[3], self.0[2], self.0[1], self.0[0])
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, *, /...) on field element instances, with or without references.

macro_rules! impl_binop { ($trait:ident, $fname:ident, $atrait:ident, $afname:ident, $setfn:ident) => {

    impl $trait<GFbn254> for GFbn254 {
        type Output = GFbn254;

        #[inline(always)]
        fn $fname(self, other: GFbn254) -> GFbn254 {
            let mut r = self;
            r.$setfn(&other);
            r
        }
    }

    impl $trait<&GFbn254> for GFbn254 {
        type Output = GFbn254;

        #[inline(always)]
        fn $fname(self, other: &GFbn254) -> GFbn254 {
            let mut r = self;
            r.$setfn(other);
            r
        }
    }

    impl $trait<GFbn254> for &GFbn254 {
        type Output = GFbn254;

        #[inline(always)]
        fn $fname(self, other: GFbn254) -> GFbn254 {
            let mut r = *self;
            r.$setfn(&other);
            r
        }
    }

    impl $trait<&GFbn254> for &GFbn254 {
        type Output = GFbn254;

        #[inline(always)]
        fn $fname(self, other: &GFbn254) -> GFbn254 {
            let mut r = *self;
            r.$setfn(other);
            r
        }
    }

    impl $atrait<GFbn254> for GFbn254 {
        #[inline(always)]
        fn $afname(&mut self, other: GFbn254) {
            self.$setfn(&other);
        }
    }

    impl $atrait<&GFbn254> for GFbn254 {
        #[inline(always)]
        fn $afname(&mut self, other: &GFbn254) {
            self.$setfn(other);
        }
    }

} }

impl_binop!(Add, add, AddAssign, add_assign, set_add);
impl_binop!(Sub, sub, SubAssign, sub_assign, set_sub);
impl_binop!(Mul, mul, MulAssign, mul_assign, set_mul);
impl_binop!(Div, div, DivAssign, div_assign, set_div);

impl Neg for GFbn254 {
    type Output = GFbn254;

    #[inline(always)]
    fn neg(self) -> GFbn254 {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &GFbn254 {
    type Output = GFbn254;

    #[inline(always)]
    fn neg(self) -> GFbn254 {
        let mut r = *self;
        r.set_neg();
        r
    }
}

// ========================================================================
