//! `pubkey-to-addrs`: print the P2PKH, P2SH-P2WPKH and Bech32 addresses of a
//! compressed public key.
//!
//! Results go to stdout; warnings and errors go to stderr.

mod args;
mod error;
mod output;

use std::io;
use std::process::ExitCode;

use keyaddr_core::{derive_address, derive_all, PublicKey};

use crate::error::CliError;
use crate::output::AddressRecord;

fn main() -> ExitCode {
    let matches = args::command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if matches!(e, CliError::MissingPubkey) {
                eprintln!("{}", args::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), CliError> {
    let options = args::parse_options(matches)?;
    for arg in &options.extra {
        eprintln!("[WARNING]: unknown non-option args: {}", arg);
    }

    let pubkey: PublicKey = options.pubkey.parse()?;

    let records: Vec<AddressRecord> = match options.address_type {
        Some(address_type) => {
            let address = derive_address(&pubkey, address_type, options.network)?;
            vec![AddressRecord::new(address_type, address)]
        }
        None => derive_all(&pubkey, options.network)?
            .into_iter()
            .map(|(address_type, address)| AddressRecord::new(address_type, address))
            .collect(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_records(&mut handle, &records, options.json)
}
