//! BCH checksum over 5-bit symbols (BIP-173 / BIP-350).
//!
//! The checksum is the remainder of the symbol polynomial modulo a degree-6
//! generator over GF(32). [`Polymod`] keeps the 30-bit running remainder and
//! folds in one symbol at a time.

/// Generator constants, selected by the five bits shifted out of the top of
/// the accumulator on each fold.
pub const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Number of checksum symbols appended to the data part.
pub const CHECKSUM_LENGTH: usize = 6;

/// Checksum variant, distinguished only by the constant XORed into the final
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// BIP-173 Bech32.
    Bech32,
    /// BIP-350 Bech32m.
    Bech32m,
}

impl Variant {
    /// The constant XORed into the remainder before extracting the checksum.
    pub const fn final_constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc830a3,
        }
    }

    /// Identify the variant from the remainder of a complete string
    /// (prefix, data and checksum).
    pub fn from_residue(residue: u32) -> Option<Self> {
        match residue {
            r if r == Variant::Bech32.final_constant() => Some(Variant::Bech32),
            r if r == Variant::Bech32m.final_constant() => Some(Variant::Bech32m),
            _ => None,
        }
    }

    /// Variant required for a segwit address of the given witness version:
    /// Bech32 for version 0, Bech32m for versions 1 through 16.
    pub const fn for_witness_version(version: u8) -> Self {
        if version == 0 {
            Variant::Bech32
        } else {
            Variant::Bech32m
        }
    }

    /// Lowercase name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Bech32 => "bech32",
            Variant::Bech32m => "bech32m",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Running 30-bit checksum accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polymod(u32);

impl Polymod {
    /// Start a new checksum. The accumulator starts at 1.
    pub const fn new() -> Self {
        Polymod(1)
    }

    /// Fold one 5-bit symbol into the accumulator.
    #[inline]
    pub fn fold(&mut self, symbol: u8) {
        debug_assert!(symbol < 32, "5-bit symbol out of range");
        let top = self.0 >> 25;
        self.0 = ((self.0 & 0x01ff_ffff) << 5) ^ u32::from(symbol);
        for (i, &g) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                self.0 ^= g;
            }
        }
    }

    /// Fold the expanded human-readable prefix: the high 3 bits of every
    /// character, a zero symbol for the separator, then the low 5 bits of
    /// every character.
    pub fn fold_hrp(&mut self, hrp: &[u8]) {
        for &c in hrp {
            self.fold(c >> 5);
        }
        self.fold(0);
        for &c in hrp {
            self.fold(c & 0x1f);
        }
    }

    /// Current accumulator value.
    pub fn residue(&self) -> u32 {
        self.0
    }

    /// Fold six zero symbols, apply the variant's final constant and return
    /// the checksum symbols, most significant first.
    pub fn finish(mut self, variant: Variant) -> [u8; CHECKSUM_LENGTH] {
        for _ in 0..CHECKSUM_LENGTH {
            self.fold(0);
        }
        let checksum = self.0 ^ variant.final_constant();

        let mut symbols = [0u8; CHECKSUM_LENGTH];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            // Masked to 5 bits, so the cast cannot truncate.
            *symbol = ((checksum >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
        }
        symbols
    }
}

impl Default for Polymod {
    fn default() -> Self {
        Polymod::new()
    }
}
