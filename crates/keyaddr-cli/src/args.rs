//! Command-line arguments.
//!
//! The public key and address type may be given as flags or positionally:
//!
//! ```text
//! pubkey-to-addrs <PUBKEY> [TYPE]
//! pubkey-to-addrs --pubkey=<PUBKEY> [--type=<TYPE>]
//! ```

use clap::{Arg, ArgAction, ArgMatches, Command};
use keyaddr_core::{AddressType, Network};

use crate::error::CliError;

/// Resolved invocation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub pubkey: String,
    /// `None` prints every address type.
    pub address_type: Option<AddressType>,
    pub network: Network,
    pub json: bool,
    /// Positional arguments left over after the public key and type.
    pub extra: Vec<String>,
}

pub fn command() -> Command {
    Command::new("pubkey-to-addrs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the Bitcoin addresses of a compressed public key")
        .after_help(
            "Examples:\n    \
             $ pubkey-to-addrs 0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\n    \
             [p2pkh addr]: 1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH\n    \
             [p2sh-p2wpkh addr]: 3JvL6Ymt8MVWiCNHC7oWU6nLeHNJKLZGLN\n    \
             [bech32 addr]: bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4\n    \
             \n    \
             $ pubkey-to-addrs --pubkey=0279be...1798 --type=bech32 --network=testnet\n    \
             [bech32 addr]: tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
        )
        .arg(
            Arg::new("pubkey")
                .short('p')
                .long("pubkey")
                .value_name("HEX")
                .help("Compressed public key as 66 hex digits"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .value_name("TYPE")
                .help("Address type: p2pkh, p2sh-p2wpkh or bech32 (default: all)"),
        )
        .arg(
            Arg::new("network")
                .short('n')
                .long("network")
                .value_name("NETWORK")
                .default_value("mainnet")
                .help("Network: mainnet, testnet or regtest"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the addresses as a JSON array"),
        )
        .arg(
            Arg::new("args")
                .value_name("PUBKEY [TYPE]")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Public key and address type, when not given as flags"),
        )
}

/// Merge flags and positional arguments into [`Options`].
///
/// Positionals fill the public key first, then the type, for whichever was
/// not given as a flag.
pub fn parse_options(matches: &ArgMatches) -> Result<Options, CliError> {
    let mut pubkey = matches.get_one::<String>("pubkey").cloned();
    let mut type_name = matches.get_one::<String>("type").cloned();
    let mut extra = Vec::new();

    let positionals = matches
        .get_many::<String>("args")
        .into_iter()
        .flatten()
        .cloned();
    for arg in positionals {
        if pubkey.is_none() {
            pubkey = Some(arg);
        } else if type_name.is_none() {
            type_name = Some(arg);
        } else {
            extra.push(arg);
        }
    }

    let pubkey = pubkey.ok_or(CliError::MissingPubkey)?;
    let address_type = type_name
        .map(|name| name.parse::<AddressType>())
        .transpose()?;

    let network_name = matches
        .get_one::<String>("network")
        .map(String::as_str)
        .unwrap_or("mainnet");
    let network = Network::from_name(network_name)
        .ok_or_else(|| CliError::UnknownNetwork(network_name.to_string()))?;

    Ok(Options {
        pubkey,
        address_type,
        network,
        json: matches.get_flag("json"),
        extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyaddr_core::AddressError;

    const KEY: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn parse(args: &[&str]) -> Result<Options, CliError> {
        let matches = command()
            .try_get_matches_from(std::iter::once("pubkey-to-addrs").chain(args.iter().copied()))
            .unwrap();
        parse_options(&matches)
    }

    #[test]
    fn test_positional_arguments() {
        let options = parse(&[KEY, "bech32"]).unwrap();
        assert_eq!(options.pubkey, KEY);
        assert_eq!(options.address_type, Some(AddressType::P2wpkh));
        assert_eq!(options.network, Network::Mainnet);
        assert!(!options.json);
        assert!(options.extra.is_empty());
    }

    #[test]
    fn test_flag_arguments() {
        let options = parse(&["--pubkey", KEY, "-t", "p2pkh", "-n", "testnet", "--json"]).unwrap();
        assert_eq!(options.pubkey, KEY);
        assert_eq!(options.address_type, Some(AddressType::P2pkh));
        assert_eq!(options.network, Network::Testnet);
        assert!(options.json);
    }

    #[test]
    fn test_positional_fills_missing_flag() {
        let options = parse(&["--type=p2sh-p2wpkh", KEY, "extra"]).unwrap();
        assert_eq!(options.pubkey, KEY);
        assert_eq!(options.address_type, Some(AddressType::P2shP2wpkh));
        assert_eq!(options.extra, vec!["extra".to_string()]);
    }

    #[test]
    fn test_no_type_means_all() {
        let options = parse(&[KEY]).unwrap();
        assert_eq!(options.address_type, None);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&[]), Err(CliError::MissingPubkey)));
        assert!(matches!(
            parse(&[KEY, "p2tr"]),
            Err(CliError::Address(AddressError::UnknownAddressType(_)))
        ));
        assert!(matches!(
            parse(&[KEY, "-n", "litecoin"]),
            Err(CliError::UnknownNetwork(name)) if name == "litecoin"
        ));
    }
}
