use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, UnrecognizedCharacter};
use crate::config::{ConfigError, Configuration, MIN_LENGTH};

/// Converts integer IDs to tokens and back.
///
/// A token is a checksum symbol followed by the base-N representation of the scrambled ID. A
/// `Codec` holds no mutable state and can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Configuration", into = "Configuration")]
pub struct Codec {
    config: Configuration,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty token")]
    Empty,
    /// The token contains a character outside the alphabet.
    #[error("unrecognized character {character:?} at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },
    /// The token is well-formed, but its checksum does not match the decoded value, meaning that
    /// it is corrupted or was not produced by this codec.
    #[error("incorrect checksum: expected {expected:?}, found {found:?}")]
    ChecksumMismatch { expected: char, found: char },
    #[error("decoded value does not fit in the target integer type")]
    Overflow,
}

impl Codec {
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "Using alphabet {} (block size {}, checksum modulus {})",
            config.alphabet,
            config.block_size,
            config.checksum
        );
        Ok(Codec { config })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.config.alphabet
    }

    /// Encodes `n` with the default minimum body length of [`MIN_LENGTH`].
    pub fn encode(&self, n: impl Into<BigUint>) -> String {
        self.encode_with_min_length(n, MIN_LENGTH)
    }

    /// Encodes `n`, padding the token body (everything after the checksum symbol) to at least
    /// `min_length` symbols.
    pub fn encode_with_min_length(&self, n: impl Into<BigUint>, min_length: usize) -> String {
        let n = n.into();
        let mut ret = String::new();
        ret.push(self.checksum(&n));
        ret.push_str(&self.enbase(&self.scramble(&n), min_length));
        ret
    }

    pub fn decode(&self, token: &str) -> Result<BigUint, DecodeError> {
        let mut chars = token.chars();
        let found = chars.next().ok_or(DecodeError::Empty)?;

        let value = self
            .debase(chars.as_str())
            .map_err(|e| DecodeError::UnrecognizedCharacter {
                character: e.character,
                // Account for the checksum symbol.
                position: e.position + 1,
            })?;
        let value = self.scramble(&value);

        let expected = self.checksum(&value);
        if expected != found {
            log::debug!("Rejecting token {:?}: incorrect checksum", token);
            return Err(DecodeError::ChecksumMismatch { expected, found });
        }

        Ok(value)
    }

    /// Like [`decode`](Codec::decode), but fails with [`DecodeError::Overflow`] if the value does
    /// not fit in a `u64`.
    pub fn decode_u64(&self, token: &str) -> Result<u64, DecodeError> {
        self.decode(token)?.to_u64().ok_or(DecodeError::Overflow)
    }

    pub fn scramble(&self, n: &BigUint) -> BigUint {
        crate::scramble::scramble(n, self.config.block_size)
    }

    pub fn enbase(&self, x: &BigUint, min_length: usize) -> String {
        self.config.alphabet.enbase(x, min_length)
    }

    pub fn debase(&self, s: &str) -> Result<BigUint, UnrecognizedCharacter> {
        self.config.alphabet.debase(s)
    }

    pub fn checksum(&self, n: &BigUint) -> char {
        crate::checksum::checksum(&self.config.alphabet, n, self.config.checksum)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Codec {
            config: Configuration::default(),
        }
    }
}

impl TryFrom<Configuration> for Codec {
    type Error = ConfigError;

    fn try_from(config: Configuration) -> Result<Self, Self::Error> {
        Codec::new(config)
    }
}

impl From<Codec> for Configuration {
    fn from(codec: Codec) -> Self {
        codec.config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn reference_vectors() {
        let codec = Codec::default();
        let vectors: &[(u64, &str)] = &[
            (0, "yyyyyy"),
            (1, "gtwvge"),
            (2, "w64d46"),
            (12, "k9kvk9"),
            (29, "y3gspn"),
            (30, "geqpfs"),
            (31, "wrvr4y"),
            (1000, "fg7czg"),
            (123456789, "56q6ex7"),
            (0xffffff, "5vjjwq"),
            (0x1000000, "zvjjw4"),
            (u64::MAX, "ss3ycjvu6jze2q"),
        ];
        for &(n, token) in vectors {
            assert_eq!(codec.encode(n), token, "encode({})", n);
            assert_eq!(codec.decode_u64(token), Ok(n), "decode({:?})", token);
        }
    }

    #[test]
    fn min_length() {
        let codec = Codec::default();
        assert_eq!(codec.encode_with_min_length(0_u32, 0), "y");
        assert_eq!(codec.encode_with_min_length(0_u32, 3), "yyyy");
        assert_eq!(codec.encode_with_min_length(12_u32, 8), "kyyy9kvk9");
        // The body grows past `min_length` when needed.
        assert_eq!(codec.encode_with_min_length(12_u32, 2), "k9kvk9");
        assert_eq!(codec.decode_u64("y"), Ok(0));
        assert_eq!(codec.decode_u64("yyyy"), Ok(0));
        assert_eq!(codec.decode_u64("kyyy9kvk9"), Ok(12));
    }

    #[test]
    fn checksum_mismatch() {
        let codec = Codec::default();
        assert_eq!(
            codec.decode("a9kvk9"),
            Err(DecodeError::ChecksumMismatch {
                expected: 'k',
                found: 'a',
            })
        );
        // A checksum symbol outside the alphabet is just a wrong checksum.
        assert!(matches!(
            codec.decode("!9kvk9"),
            Err(DecodeError::ChecksumMismatch { found: '!', .. })
        ));
    }

    #[test]
    fn unrecognized_character() {
        let codec = Codec::default();
        assert_eq!(
            codec.decode("k9kv!9"),
            Err(DecodeError::UnrecognizedCharacter {
                character: '!',
                position: 4,
            })
        );
        assert_eq!(
            codec.decode("k9KVK9"),
            Err(DecodeError::UnrecognizedCharacter {
                character: 'K',
                position: 2,
            })
        );
    }

    #[test]
    fn empty_token() {
        assert_eq!(Codec::default().decode(""), Err(DecodeError::Empty));
    }

    #[test]
    fn overflow() {
        let codec = Codec::default();
        let n = BigUint::from(u64::MAX) + 1_u32;
        let token = codec.encode(n.clone());
        assert_eq!(codec.decode(&token), Ok(n));
        assert_eq!(codec.decode_u64(&token), Err(DecodeError::Overflow));
    }

    #[test]
    fn arbitrary_precision() {
        let codec = Codec::default();
        let n = (BigUint::from(1_u32) << 100_u32) + 7_u32;
        let token = codec.encode(n.clone());
        assert_eq!(token, "9gnqua2krhwbd4q52pm8fq");
        assert_eq!(codec.decode(&token), Ok(n));
    }

    #[test]
    fn round_trip() {
        let codec = Codec::default();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let n = rng.gen::<u128>() >> rng.gen_range(0..128_u32);
            let min_length = rng.gen_range(0..20);
            let token = codec.encode_with_min_length(n, min_length);
            assert!(token.len() > min_length);
            assert_eq!(codec.decode(&token), Ok(BigUint::from(n)));
        }
    }

    #[test]
    fn sequential_ids_do_not_collide() {
        for block_size in [0, 1, 8, 24] {
            let codec = Codec::new(Configuration {
                block_size,
                ..Configuration::default()
            })
            .unwrap();
            let tokens: HashSet<String> = (0..5000_u32).map(|n| codec.encode(n)).collect();
            assert_eq!(tokens.len(), 5000);
        }
    }

    #[test]
    fn zero_block_size_is_plain_base_conversion() {
        let codec = Codec::new(Configuration {
            block_size: 0,
            ..Configuration::default()
        })
        .unwrap();
        assert_eq!(codec.encode(12_u32), "kyyyyk");
        assert_eq!(codec.encode_with_min_length(0_u32, 0), "y");
        assert_eq!(codec.decode_u64("kyyyyk"), Ok(12));
    }

    #[test]
    fn binary_alphabet() {
        let codec = Codec::new(Configuration {
            alphabet: "01".parse().unwrap(),
            block_size: 4,
            checksum: 1,
        })
        .unwrap();
        assert_eq!(codec.encode_with_min_length(1_u32, 0), "01000");
        assert_eq!(codec.encode_with_min_length(6_u32, 0), "0110");
        assert_eq!(codec.decode_u64("01000"), Ok(1));
    }

    #[test]
    fn full_width_checksum() {
        let config = Configuration {
            checksum: 31,
            ..Configuration::default()
        };
        let codec = Codec::new(config).unwrap();
        // With a modulus equal to the alphabet length, the last symbol becomes a checksum too.
        assert_eq!(codec.checksum(&BigUint::from(30_u32)), 'p');
        let token = codec.encode(30_u32);
        assert!(token.starts_with('p'));
        assert_eq!(codec.decode_u64(&token), Ok(30));
    }

    #[test]
    fn invalid_configuration() {
        let config = Configuration {
            checksum: 32,
            ..Configuration::default()
        };
        assert_eq!(
            Codec::new(config),
            Err(ConfigError::ChecksumModulus {
                modulus: 32,
                len: 31,
            })
        );
    }

    #[test]
    fn rejects_oversized_block_size() {
        let config = Configuration {
            block_size: u64::MAX,
            ..Configuration::default()
        };
        assert_eq!(Codec::new(config), Err(ConfigError::BlockSize(u64::MAX)));
        assert!(serde_urlencoded::from_str::<Codec>("block_size=1099511627776").is_err());

        let codec = Codec::new(Configuration {
            block_size: crate::MAX_BLOCK_SIZE,
            ..Configuration::default()
        })
        .unwrap();
        let token = codec.encode(1_u32);
        // The body holds 2^65535 written in base 31.
        assert!(token.len() > 10_000);
        assert_eq!(codec.decode_u64(&token), Ok(1));
    }

    #[test]
    fn deserialize() {
        let codec: Codec =
            serde_urlencoded::from_str("alphabet=0123456789&block_size=0&checksum=10").unwrap();
        assert_eq!(codec.encode(1234_u32), "401234");
        assert!(serde_urlencoded::from_str::<Codec>("checksum=0").is_err());
        assert_eq!(
            serde_urlencoded::from_str::<Codec>("").unwrap(),
            Codec::default()
        );
    }

    #[test]
    fn shared_between_threads() {
        let codec = Arc::new(Codec::default());
        let handles: Vec<_> = (0..4_u64)
            .map(|i| {
                let codec = Arc::clone(&codec);
                thread::spawn(move || {
                    for n in (i * 1000)..((i + 1) * 1000) {
                        assert_eq!(codec.decode_u64(&codec.encode(n)), Ok(n));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
