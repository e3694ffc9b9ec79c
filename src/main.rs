//! Reed-Solomon demonstration driver
//!
//! Encodes a message (by default a fixed 28-byte sample with 4 parity
//! symbols), optionally XORs corruption into chosen codeword offsets to
//! simulate transmission errors, then decodes and reports the outcome as
//! hex dumps and status lines.

use std::process;

use anyhow::{bail, Context, Result};
use rsfec::{parse_args, Decoded, DecodeError, ReedSolomon};

/// Sample message from the classic 28-data/4-parity demonstration vector
const SAMPLE_MESSAGE: &str = "40d2754776173206272696c6c69670ec37171773129137ab1b3dd7e2";

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run() -> Result<i32> {
    let matches = parse_args();

    let message = match matches.get_one::<Vec<u8>>("message") {
        Some(message) => message.clone(),
        None => hex::decode(SAMPLE_MESSAGE).expect("sample message is valid hex"),
    };
    let parity = *matches
        .get_one::<usize>("parity")
        .expect("parity has a default");

    let rs = ReedSolomon::new(message.len(), parity)
        .context("cannot build a codec for these parameters")?;

    let mut codeword = rs.encode(&message).context("encoding failed")?;
    println!(
        "Encoded {}-byte message to {}-byte codeword with {} trailing error correction symbols:",
        rs.data_len(),
        rs.codeword_len(),
        rs.parity_len()
    );
    println!("{}", hex_dump(&codeword));

    let corruptions: Vec<(usize, u8)> = matches
        .get_many::<(usize, u8)>("corrupt")
        .map(|values| values.copied().collect())
        .unwrap_or_default();

    for &(offset, delta) in &corruptions {
        if offset >= codeword.len() {
            bail!(
                "corruption offset {} is outside the {}-byte codeword",
                offset,
                codeword.len()
            );
        }
        codeword[offset] ^= delta;
    }
    if !corruptions.is_empty() {
        println!("\nCorrupted codeword:");
        println!("{}", hex_dump(&codeword));
    }

    match rs.decode(&codeword) {
        Ok(Decoded::Intact(_)) => {
            println!("\nMessage is not corrupted");
            Ok(0)
        }
        Ok(Decoded::Corrected { message, positions }) => {
            println!("\nCorrected {} error(s) at position(s) {:?}", positions.len(), positions);
            println!("Recovered message:");
            println!("{}", hex_dump(&message));
            Ok(0)
        }
        Err(DecodeError::TooManyErrors { .. }) => {
            println!("\nFound too many errors, message unrecoverable");
            Ok(1)
        }
        Err(DecodeError::SingularCorrection) => {
            println!("\nError locators error, message unrecoverable");
            Ok(1)
        }
        Err(err) => Err(err).context("decoding failed"),
    }
}

fn main() {
    // Initialize the logger
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}
