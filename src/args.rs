use clap::{Arg, ArgAction, Command};

pub fn parse_args() -> clap::ArgMatches {
    Command::new("rsfec")
        .version("0.1.0")
        .about("Reed-Solomon encode/decode demonstration over GF(2^8)")
        .arg(
            Arg::new("message")
                .long("message")
                .help("Message to encode, as a hex string (defaults to the built-in sample)")
                .value_parser(|message: &str| {
                    hex::decode(message)
                        .map_err(|_| String::from("Message must be an even-length hex string"))
                }),
        )
        .arg(
            Arg::new("parity")
                .long("parity")
                .help("Number of parity symbols to append")
                .default_value("4")
                .value_parser(|parity: &str| {
                    parity
                        .parse::<usize>()
                        .map_err(|_| String::from("Parity count must be a number"))
                }),
        )
        .arg(
            Arg::new("corrupt")
                .long("corrupt")
                .help("Corrupt the codeword before decoding: offset:hexbyte, e.g. 5:2e (repeatable)")
                .action(ArgAction::Append)
                .value_parser(|value: &str| {
                    let (offset, delta) = value
                        .split_once(':')
                        .ok_or_else(|| String::from("Corruption must be offset:hexbyte"))?;
                    let offset = offset
                        .parse::<usize>()
                        .map_err(|_| String::from("Corruption offset must be a number"))?;
                    let delta = u8::from_str_radix(delta, 16)
                        .map_err(|_| String::from("Corruption delta must be a hex byte"))?;
                    Ok::<(usize, u8), String>((offset, delta))
                }),
        )
        .get_matches()
}
