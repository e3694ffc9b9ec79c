//! Reed-Solomon forward error correction over GF(2^8)
//!
//! Systematic encoding appends parity symbols to a message; decoding
//! detects corruption via syndromes and corrects up to `parity / 2` symbol
//! errors at unknown positions (Berlekamp-Massey locator derivation, Chien
//! root search, Forney magnitude recovery).
//!
//! ```
//! use rsfec::ReedSolomon;
//!
//! let rs = ReedSolomon::new(8, 4).unwrap();
//! let mut codeword = rs.encode(b"parities").unwrap();
//! codeword[3] ^= 0x42;
//! let recovered = rs.decode(&codeword).unwrap().into_message();
//! assert_eq!(recovered, b"parities");
//! ```

pub mod args;
pub mod codec;
pub mod error;
pub mod galois;
pub mod poly;

pub use args::parse_args;
pub use codec::{Decoded, ReedSolomon};
pub use error::{CodecError, DecodeError, DecodeResult};
pub use galois::Galois8;
