use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::iter;
use std::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_ALPHABET;

/// An ordered set of unique symbols.
///
/// The index of a symbol is its digit value, so the alphabet length is the radix of the numeral
/// system tokens are written in. The symbol at index `0` is the zero digit and the padding
/// character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    string: String,
    symbols: Box<[char]>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("an alphabet must have at least 2 symbols, got {0}")]
    Length(usize),
    #[error("symbol {character:?} appears more than once in the alphabet")]
    Duplicate { character: char },
}

/// A character that is not a symbol of the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized character {character:?} at position {position}")]
pub struct UnrecognizedCharacter {
    pub character: char,
    /// Position of the character in the input, counted in `char`s.
    pub position: usize,
}

/// Returns a random permutation of [`DEFAULT_ALPHABET`].
///
/// The randomness source is not cryptographically secure.
pub fn random_alphabet() -> String {
    Alphabet::random().string
}

impl Alphabet {
    pub fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        let symbols: Box<[char]> = alphabet.chars().collect();
        if symbols.len() < 2 || u32::try_from(symbols.len()).is_err() {
            return Err(AlphabetError::Length(symbols.len()));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(&character) = symbols.iter().find(|&&c| !seen.insert(c)) {
            return Err(AlphabetError::Duplicate { character });
        }

        Ok(Alphabet {
            string: alphabet.to_owned(),
            symbols,
        })
    }

    /// Shuffles the symbols of [`DEFAULT_ALPHABET`] using the thread-local RNG.
    pub fn random() -> Self {
        Self::random_with(rand::thread_rng())
    }

    pub fn random_with<R: Rng>(mut rng: R) -> Self {
        let mut symbols: Box<[char]> = DEFAULT_ALPHABET.chars().collect();
        symbols.shuffle(&mut rng);
        Alphabet {
            string: symbols.iter().collect(),
            symbols,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn radix(&self) -> u32 {
        // `new` rejects alphabets whose length does not fit.
        self.symbols.len() as u32
    }

    /// The symbol for digit value zero.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub(crate) fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Writes `x` in base-N, most significant digit first, left-padded with the zero symbol to at
    /// least `min_length` symbols.
    ///
    /// Zero has no significant digits, so `enbase(0, 0)` is the empty string.
    pub fn enbase(&self, x: &BigUint, min_length: usize) -> String {
        let radix = BigUint::from(self.radix());
        let mut digits = Vec::new();
        let mut x = x.clone();
        while !x.is_zero() {
            let (quotient, remainder) = x.div_rem(&radix);
            digits.push(self.symbols[digit_value(&remainder)]);
            x = quotient;
        }

        let padding = min_length.saturating_sub(digits.len());
        iter::repeat(self.zero())
            .take(padding)
            .chain(digits.into_iter().rev())
            .collect()
    }

    /// Reads a base-N numeral. The inverse of [`enbase`](Alphabet::enbase).
    pub fn debase(&self, s: &str) -> Result<BigUint, UnrecognizedCharacter> {
        let radix = self.radix();
        s.chars()
            .enumerate()
            .try_fold(BigUint::zero(), |acc, (position, character)| {
                let digit = self
                    .index_of(character)
                    .ok_or(UnrecognizedCharacter {
                        character,
                        position,
                    })?;
                // `digit` is less than `radix`.
                Ok(acc * radix + digit as u32)
            })
    }
}

fn digit_value(remainder: &BigUint) -> usize {
    // The remainder is less than the radix, which fits in a single `u32` digit.
    remainder.to_u32_digits().first().map_or(0, |&d| d as usize)
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            string: DEFAULT_ALPHABET.to_owned(),
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Alphabet::new(&s)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.string
    }
}
