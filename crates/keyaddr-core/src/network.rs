//! Bitcoin network definitions and address prefixes.

/// Bitcoin network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Bitcoin mainnet
    #[default]
    Mainnet,
    /// Bitcoin testnet (testnet3, testnet4 and signet share prefixes)
    Testnet,
    /// Local regression test network
    Regtest,
}

impl Network {
    /// All supported networks.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Get the Bech32 human-readable part for this network.
    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet => "tb",
            Network::Regtest => "bcrt",
        }
    }

    /// Get the version byte for P2PKH addresses.
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::Regtest => 0x6f,
        }
    }

    /// Get the version byte for P2SH addresses.
    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet | Network::Regtest => 0xc4,
        }
    }

    /// Parse network from a name, ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        let matches = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(s));
        if matches(&["mainnet", "main", "bitcoin"]) {
            Some(Network::Mainnet)
        } else if matches(&["testnet", "testnet3", "testnet4", "test", "signet"]) {
            Some(Network::Testnet)
        } else if matches(&["regtest"]) {
            Some(Network::Regtest)
        } else {
            None
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_name() {
        assert_eq!(Network::from_name("mainnet"), Some(Network::Mainnet));
        assert_eq!(Network::from_name("MAINNET"), Some(Network::Mainnet));
        assert_eq!(Network::from_name("testnet4"), Some(Network::Testnet));
        assert_eq!(Network::from_name("regtest"), Some(Network::Regtest));
        assert_eq!(Network::from_name("invalid"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for network in Network::ALL {
            assert_eq!(Network::from_name(network.name()), Some(network));
        }
        assert_eq!(Network::default(), Network::Mainnet);
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(Network::Mainnet.bech32_hrp(), "bc");
        assert_eq!(Network::Regtest.bech32_hrp(), "bcrt");
        assert_eq!(Network::Testnet.p2pkh_version(), 0x6f);
        assert_eq!(Network::Regtest.p2sh_version(), 0xc4);
    }
}
