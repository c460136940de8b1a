use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, AlphabetError};

/// Each installation should use its own alphabet. At the very least, shuffle the characters of
/// this one (see [`random_alphabet`](crate::random_alphabet)).
pub const DEFAULT_ALPHABET: &str = "ygw96j2cetxuk3fq4rv5z7hsdamn8bp";
pub const DEFAULT_BLOCK_SIZE: u64 = 24;
pub const DEFAULT_CHECKSUM: u32 = 29;
/// Largest accepted block size. Scrambling can move a set bit up to position `block_size - 1`, so
/// the block size bounds the size of the numbers a token can decode to.
pub const MAX_BLOCK_SIZE: u64 = 1 << 16;
/// Default minimum number of symbols in a token body, excluding the checksum symbol.
pub const MIN_LENGTH: usize = 5;

/// Parameters of a [`Codec`](crate::Codec).
///
/// Missing fields are filled with their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub alphabet: Alphabet,
    /// Number of low-order bits to permute, at most [`MAX_BLOCK_SIZE`].
    pub block_size: u64,
    /// Checksum modulus, in `1..=alphabet.len()`.
    pub checksum: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid alphabet")]
    Alphabet(#[from] AlphabetError),
    #[error("checksum modulus must be in 1..={len}, got {modulus}")]
    ChecksumModulus { modulus: u32, len: usize },
    #[error("block size must be at most {}, got {0}", MAX_BLOCK_SIZE)]
    BlockSize(u64),
}

impl Configuration {
    /// A configuration whose checksum modulus is the alphabet length minus one, the way the
    /// `idencoder` command derives it from a custom alphabet.
    pub fn with_checksum_from_alphabet(alphabet: Alphabet) -> Self {
        Configuration {
            checksum: alphabet.radix() - 1,
            alphabet,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let len = self.alphabet.len();
        if self.checksum == 0 || self.checksum as usize > len {
            return Err(ConfigError::ChecksumModulus {
                modulus: self.checksum,
                len,
            });
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::BlockSize(self.block_size));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            alphabet: Alphabet::default(),
            block_size: DEFAULT_BLOCK_SIZE,
            checksum: DEFAULT_CHECKSUM,
        }
    }
}
