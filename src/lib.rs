//! Encodes (usually sequential) integer IDs into short tokens and back.
//!
//! The low [`block_size`](Configuration::block_size) bits of an ID are reversed so that
//! consecutive IDs do not produce consecutive tokens, then the result is written in base-N over
//! an [`Alphabet`] and prefixed with a one-character checksum. Both steps are bijections, so
//! distinct IDs always produce distinct tokens.
//!
//! ```
//! let codec = idencoder::Codec::default();
//! let token = codec.encode(12_u64);
//! assert_eq!(token, "k9kvk9");
//! assert_eq!(codec.decode_u64(&token).unwrap(), 12);
//! ```
//!
//! This is not encryption. Anyone who knows the alphabet and parameters can invert a token, and
//! the checksum only catches a fraction of typos. Every deployment should use its own alphabet
//! (see [`random_alphabet`]).

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod checksum;
pub mod codec;
pub mod config;
pub mod scramble;

pub use alphabet::{random_alphabet, Alphabet, AlphabetError, UnrecognizedCharacter};
pub use codec::{Codec, DecodeError};
pub use config::{
    ConfigError, Configuration, DEFAULT_ALPHABET, DEFAULT_BLOCK_SIZE, DEFAULT_CHECKSUM,
    MAX_BLOCK_SIZE, MIN_LENGTH,
};
pub use num_bigint::BigUint;
pub use scramble::scramble;
