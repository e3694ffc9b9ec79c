//! Reed-Solomon encoder and decoder over GF(2^8)
//!
//! ## Overview
//!
//! A systematic Reed-Solomon code appends `n` parity symbols to `k` data
//! symbols. The parity is the remainder of the message polynomial (shifted
//! by `n`) divided by a generator polynomial with roots α⁰..α^(n-1), so a
//! clean codeword evaluates to zero at every root. Decoding evaluates the
//! received word at those roots (syndromes), derives the error locator
//! polynomial with the Berlekamp-Massey recursion, finds its roots by
//! brute-force Chien search, and recovers each error magnitude with
//! Forney's formula.
//!
//! Up to `t = n/2` symbol errors at unknown positions are correctable.
//! Beyond that the decoder fails terminally rather than inventing a
//! plausible-looking message.
//!
//! ## Implementation Notes
//!
//! A `ReedSolomon` value is constructed once per `(k, n)` pair and owns its
//! generator polynomial; every decode call owns its own syndrome, locator
//! and magnitude buffers, so one codec can serve concurrent callers.

use crate::error::{CodecError, DecodeError, DecodeResult};
use crate::galois::{Galois8, FIELD_ORDER};
use crate::poly;
use log::debug;
use rayon::prelude::*;

/// Outcome of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// All syndromes were zero; the data symbols are returned as received
    Intact(Vec<u8>),
    /// Errors were located and corrected
    Corrected {
        message: Vec<u8>,
        /// Codeword positions that were corrected, in the order the root
        /// search found them (descending)
        positions: Vec<usize>,
    },
}

impl Decoded {
    /// The recovered data symbols, however the decode went.
    pub fn into_message(self) -> Vec<u8> {
        match self {
            Decoded::Intact(message) => message,
            Decoded::Corrected { message, .. } => message,
        }
    }
}

/// Reed-Solomon codec for a fixed data/parity split
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    data_len: usize,
    parity_len: usize,
    /// Generator polynomial, `parity_len + 1` coefficients, most-significant
    /// first; the leading coefficient is always 1.
    generator: Vec<Galois8>,
}

impl ReedSolomon {
    /// Create a codec for `data_len` data symbols and `parity_len` parity
    /// symbols.
    ///
    /// The codeword must fit the non-zero field elements: `parity_len > 0`
    /// and `data_len + parity_len <= 255`.
    pub fn new(data_len: usize, parity_len: usize) -> Result<Self, CodecError> {
        if parity_len == 0 || data_len + parity_len > FIELD_ORDER {
            return Err(CodecError::InvalidParameters {
                data_len,
                parity_len,
            });
        }

        Ok(Self {
            data_len,
            parity_len,
            generator: generator_polynomial(parity_len),
        })
    }

    /// Number of data symbols per codeword
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Number of parity symbols per codeword
    pub fn parity_len(&self) -> usize {
        self.parity_len
    }

    /// Total codeword length
    pub fn codeword_len(&self) -> usize {
        self.data_len + self.parity_len
    }

    /// Maximum number of correctable symbol errors, `t = n/2`
    pub fn capacity(&self) -> usize {
        self.parity_len / 2
    }

    /// Encode a message, returning the systematic codeword: the message
    /// followed by `parity_len` parity symbols.
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>, CodecError> {
        if message.len() != self.data_len {
            return Err(CodecError::LengthMismatch {
                expected: self.data_len,
                actual: message.len(),
            });
        }

        // Synthetic division of message(x) · x^n by the generator: for each
        // data position, fold generator multiples into the tail of the
        // working buffer. The remainder accumulates in the trailing n
        // symbols.
        let mut codeword = vec![0u8; self.codeword_len()];
        codeword[..self.data_len].copy_from_slice(message);

        for i in 0..self.data_len {
            let coefficient = Galois8::new(codeword[i]);
            if !coefficient.is_zero() {
                for (j, &g) in self.generator.iter().enumerate().skip(1) {
                    codeword[i + j] ^= (g * coefficient).value();
                }
            }
        }

        // The division clobbers the leading data region; systematic form
        // restores it from the input.
        codeword[..self.data_len].copy_from_slice(message);

        Ok(codeword)
    }

    /// Decode a received codeword, correcting up to `capacity()` symbol
    /// errors at unknown positions.
    ///
    /// Returns [`Decoded::Intact`] when the syndromes are all zero,
    /// [`Decoded::Corrected`] when errors were located and repaired, and a
    /// terminal [`DecodeError`] when the error pattern exceeds what the
    /// code can correct.
    pub fn decode(&self, codeword: &[u8]) -> DecodeResult<Decoded> {
        if codeword.len() != self.codeword_len() {
            return Err(DecodeError::LengthMismatch {
                expected: self.codeword_len(),
                actual: codeword.len(),
            });
        }

        let syndromes = self.syndromes(codeword);
        if syndromes.iter().all(|s| s.is_zero()) {
            debug!("all {} syndromes zero, codeword intact", self.parity_len);
            return Ok(Decoded::Intact(codeword[..self.data_len].to_vec()));
        }
        debug!(
            "non-zero syndromes {:02x?}, locating errors",
            syndromes.iter().map(|s| s.value()).collect::<Vec<_>>()
        );

        let (mut locator, locator_len) = self.error_locator(&syndromes);
        // The recursion builds coefficients in the reverse of the order the
        // evaluation convention expects; flip the whole fixed-width buffer
        // (the resulting leading zeros are harmless under Horner).
        locator.reverse();

        let positions = self.locate_errors(&locator)?;
        debug!("located error position(s): {:?}", positions);

        if positions.len() + 1 != locator_len {
            debug!(
                "{} root(s) found for a locator of degree {}, positions inconsistent",
                positions.len(),
                locator_len - 1
            );
            return Err(DecodeError::SingularCorrection);
        }

        let magnitudes = self.error_magnitudes(&syndromes, &locator, &positions)?;

        let mut corrected = codeword.to_vec();
        for (&position, &magnitude) in positions.iter().zip(&magnitudes) {
            debug!("correcting position {} by {:02x}", position, magnitude.value());
            corrected[position] ^= magnitude.value();
        }
        corrected.truncate(self.data_len);

        Ok(Decoded::Corrected {
            message: corrected,
            positions,
        })
    }

    /// Encode a batch of independent messages in parallel.
    pub fn encode_blocks(&self, messages: &[Vec<u8>]) -> Result<Vec<Vec<u8>>, CodecError> {
        messages
            .par_iter()
            .map(|message| self.encode(message))
            .collect()
    }

    /// Decode a batch of independent codewords in parallel.
    pub fn decode_blocks(&self, codewords: &[Vec<u8>]) -> Vec<DecodeResult<Decoded>> {
        codewords
            .par_iter()
            .map(|codeword| self.decode(codeword))
            .collect()
    }

    /// Evaluate the received word at every root used for encoding. A clean
    /// codeword is a multiple of the generator and vanishes at all of them.
    fn syndromes(&self, codeword: &[u8]) -> Vec<Galois8> {
        let received: Vec<Galois8> = codeword.iter().map(|&b| Galois8::new(b)).collect();
        (0..self.parity_len)
            .map(|i| poly::eval(&received, Galois8::primitive_power(i)))
            .collect()
    }

    /// Berlekamp-Massey: derive the error locator polynomial from the
    /// syndromes.
    ///
    /// Two fixed-width `parity_len` buffers hold the current and previous
    /// locator candidates; `current_len`/`previous_len` track the occupied
    /// prefix (degree + 1), never the buffer width. Returns the finished
    /// buffer and its occupied length; the caller reverses the buffer
    /// before evaluating it.
    fn error_locator(&self, syndromes: &[Galois8]) -> (Vec<Galois8>, usize) {
        let n = self.parity_len;
        let mut current = vec![Galois8::ZERO; n];
        let mut previous = vec![Galois8::ZERO; n];
        current[0] = Galois8::ONE;
        previous[0] = Galois8::ONE;
        let mut current_len: usize = 1;
        let mut previous_len: usize = 1;

        for i in 0..n {
            let mut discrepancy = syndromes[i];
            for j in 1..current_len {
                discrepancy += current[current_len - 1 - j] * syndromes[i - j];
            }
            previous_len += 1;

            if discrepancy.is_zero() {
                // The current candidate already satisfies this syndrome.
                continue;
            }

            if previous_len > current_len {
                // The locator degree must grow: the previous candidate,
                // scaled by the discrepancy, takes over as current, and the
                // old current (scaled by the inverse) becomes the new
                // previous, lengths exchanged.
                let promoted = poly::scale(&previous, discrepancy);
                previous = poly::scale(&current, discrepancy.inverse());
                std::mem::swap(&mut previous_len, &mut current_len);
                current = promoted;
            }

            // Fold the scaled previous candidate into the current one,
            // right-aligned by the length difference.
            let correction = poly::scale(&previous, discrepancy);
            let shift = current_len - previous_len;
            for idx in shift..n {
                current[idx] += correction[idx - shift];
            }
        }

        (current, current_len)
    }

    /// Chien search: try every codeword position as a root of the (reversed)
    /// locator polynomial.
    ///
    /// Finding more than `t` roots proves the error pattern exceeds the
    /// code's capacity, so the search aborts the decode rather than letting
    /// a miscorrection through.
    fn locate_errors(&self, locator: &[Galois8]) -> DecodeResult<Vec<usize>> {
        let total = self.codeword_len();
        let capacity = self.capacity();
        let mut positions = Vec::new();

        for i in 0..total {
            if poly::eval(locator, Galois8::primitive_power(i)).is_zero() {
                if positions.len() == capacity {
                    debug!("more than {} locator roots found, aborting", capacity);
                    return Err(DecodeError::TooManyErrors { capacity });
                }
                positions.push(total - 1 - i);
            }
        }

        Ok(positions)
    }

    /// Forney's formula: recover the magnitude to XOR into each located
    /// position.
    ///
    /// `locator` is the reversed buffer produced for the root search; its
    /// occupied tail holds the ascending-order coefficients λ₀..λₑ.
    fn error_magnitudes(
        &self,
        syndromes: &[Galois8],
        locator: &[Galois8],
        positions: &[usize],
    ) -> DecodeResult<Vec<Galois8>> {
        let total = self.codeword_len();
        let errors = positions.len();
        let lambda = &locator[self.parity_len - (errors + 1)..];

        // Error evaluator: the low `errors` coefficients of
        // syndrome(x) · locator(x), laid out most-significant first with a
        // trailing zero so evaluation picks up the X⁻¹ factor the magnitude
        // formula expects.
        let mut evaluator = vec![Galois8::ZERO; errors + 1];
        for m in 0..errors {
            let mut acc = Galois8::ZERO;
            for j in 0..=m {
                acc += syndromes[j] * lambda[m - j];
            }
            evaluator[errors - 1 - m] = acc;
        }

        let locator_of = |position: usize| Galois8::primitive_power(FIELD_ORDER + 1 - total + position);

        let mut magnitudes = Vec::with_capacity(errors);
        for (l, &position) in positions.iter().enumerate() {
            let x_inv = locator_of(position);
            let x = x_inv.inverse();

            // Formal-derivative denominator of Forney's formula.
            let mut denominator = Galois8::ONE;
            for (j, &other) in positions.iter().enumerate() {
                if j != l {
                    denominator *= Galois8::ONE + x_inv * locator_of(other).inverse();
                }
            }
            if denominator.is_zero() {
                debug!("Forney denominator vanished at position {}", position);
                return Err(DecodeError::SingularCorrection);
            }

            let y = poly::eval(&evaluator, x_inv);
            magnitudes.push(x * y * denominator.inverse());
        }

        Ok(magnitudes)
    }
}

/// Build the generator polynomial of degree `parity_len`: the product of
/// `(x - α^i)` over `parity_len` consecutive powers of the primitive root,
/// coefficients most-significant first.
fn generator_polynomial(parity_len: usize) -> Vec<Galois8> {
    let mut generator = vec![Galois8::ONE];

    for i in 0..parity_len {
        let root = Galois8::primitive_power(i);
        let mut next = vec![Galois8::ZERO; generator.len() + 1];
        for (j, &coefficient) in generator.iter().enumerate() {
            next[j] += coefficient;
            next[j + 1] += coefficient * root;
        }
        generator = next;
    }

    generator
}
