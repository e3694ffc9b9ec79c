//! Polynomial helpers over GF(2^8)
//!
//! Coefficient sequences are ordered most-significant first, so
//! `[1, 0x0f, 0x36, 0x78, 0x40]` is x⁴ + 0x0f·x³ + 0x36·x² + 0x78·x + 0x40.

use crate::galois::Galois8;

/// Evaluate a polynomial at `x` using Horner's method.
///
/// Leading zero coefficients contribute nothing, so evaluating a
/// fixed-width buffer with zero padding at the front is equivalent to
/// evaluating the trimmed polynomial.
pub fn eval(coeffs: &[Galois8], x: Galois8) -> Galois8 {
    let mut y = match coeffs.first() {
        Some(&c) => c,
        None => return Galois8::ZERO,
    };
    for &c in &coeffs[1..] {
        y = y * x + c;
    }
    y
}

/// Multiply every coefficient by `scalar`, returning a fresh buffer.
pub fn scale(coeffs: &[Galois8], scalar: Galois8) -> Vec<Galois8> {
    coeffs.iter().map(|&c| c * scalar).collect()
}
