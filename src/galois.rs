//! Galois Field GF(2^8) arithmetic for Reed-Solomon coding
//!
//! This module implements 8-bit Galois Field arithmetic over the primitive
//! irreducible polynomial **0x11D** (x⁸ + x⁴ + x³ + x² + 1). Addition and
//! subtraction are both bitwise XOR; multiplication, division and inversion
//! go through a log/antilog table pair built once from powers of the
//! primitive root α = 2.
//!
//! Every non-zero field element is α^e for exactly one exponent `e` in
//! `0..255`, which is what lets the decoder map error positions to field
//! elements and back.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;

/// GF(2^8) primitive polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
const GF8_GENERATOR: u16 = 0x11D;

/// Number of elements in the field
const FIELD_SIZE: usize = 256;

/// Multiplicative order of the primitive root (field size - 1)
pub const FIELD_ORDER: usize = FIELD_SIZE - 1;

/// Galois Field lookup tables for fast arithmetic
struct GaloisTable {
    log: [u8; FIELD_SIZE],
    antilog: [u8; FIELD_SIZE],
}

impl GaloisTable {
    fn new() -> Self {
        let mut table = GaloisTable {
            log: [0; FIELD_SIZE],
            antilog: [0; FIELD_SIZE],
        };
        table.build_tables();
        table
    }

    /// Walk α^0, α^1, ... by doubling and reducing whenever the 9th bit
    /// appears, recording both directions of the exponent map.
    fn build_tables(&mut self) {
        let mut b: u16 = 1;

        for l in 0..FIELD_ORDER {
            self.log[b as usize] = l as u8;
            self.antilog[l] = b as u8;

            b <<= 1;
            if b & FIELD_SIZE as u16 != 0 {
                b ^= GF8_GENERATOR;
            }
        }

        // 0 has no logarithm; the sentinel is never reached by arithmetic
        // because multiply/divide short-circuit on zero operands.
        self.log[0] = FIELD_ORDER as u8;
        self.antilog[FIELD_ORDER] = 0;
    }

    fn get() -> &'static GaloisTable {
        static TABLE: OnceLock<GaloisTable> = OnceLock::new();
        TABLE.get_or_init(GaloisTable::new)
    }
}

/// Galois Field element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Galois8 {
    value: u8,
}

impl Galois8 {
    /// The additive identity
    pub const ZERO: Galois8 = Galois8 { value: 0 };
    /// The multiplicative identity
    pub const ONE: Galois8 = Galois8 { value: 1 };

    pub fn new(value: u8) -> Self {
        Self { value }
    }

    pub fn value(self) -> u8 {
        self.value
    }

    pub fn is_zero(self) -> bool {
        self.value == 0
    }

    /// The primitive root raised to `exponent` (taken mod 255): α^e
    pub fn primitive_power(exponent: usize) -> Self {
        let table = GaloisTable::get();
        Self::new(table.antilog[exponent % FIELD_ORDER])
    }

    /// Multiplicative inverse: the unique `y` with `self * y == 1`.
    ///
    /// Zero has no inverse; by convention `inverse` of zero returns zero.
    /// The decode pipeline never inverts zero: denominators are checked
    /// before being inverted.
    pub fn inverse(self) -> Self {
        if self.value == 0 {
            return Self::ZERO;
        }
        let table = GaloisTable::get();
        let log_val = table.log[self.value as usize] as usize;
        Self::new(table.antilog[(FIELD_ORDER - log_val) % FIELD_ORDER])
    }
}

// Addition (XOR in Galois fields)
impl Add for Galois8 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl AddAssign for Galois8 {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Galois8 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl SubAssign for Galois8 {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Multiplication using log tables
impl Mul for Galois8 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.value == 0 || rhs.value == 0 {
            return Self::ZERO;
        }

        let table = GaloisTable::get();
        let log_sum = (table.log[self.value as usize] as usize
            + table.log[rhs.value as usize] as usize)
            % FIELD_ORDER;
        Self::new(table.antilog[log_sum])
    }
}

impl MulAssign for Galois8 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Division using log tables
impl Div for Galois8 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.value == 0 {
            panic!("Division by zero in Galois field");
        }
        if self.value == 0 {
            return Self::ZERO;
        }

        let table = GaloisTable::get();
        let log_diff = (table.log[self.value as usize] as i32
            - table.log[rhs.value as usize] as i32
            + FIELD_ORDER as i32)
            % FIELD_ORDER as i32;
        Self::new(table.antilog[log_diff as usize])
    }
}

impl DivAssign for Galois8 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Conversion traits
impl From<u8> for Galois8 {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Galois8> for u8 {
    fn from(val: Galois8) -> Self {
        val.value
    }
}

impl std::fmt::Display for Galois8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}", self.value)
    }
}
