use idencoder::{Alphabet, Codec, Configuration, DEFAULT_BLOCK_SIZE};

#[derive(clap::Args)]
#[group(skip)]
pub struct Opt {
    /// Use ALPHA as the alphabet
    #[arg(short, long, value_name = "ALPHA", env = "IDENCODER_ALPHABET")]
    pub alphabet: Option<Alphabet>,
    /// Generate a random alphabet
    #[arg(short, long, conflicts_with = "alphabet")]
    pub random: bool,
    /// Number of low-order bits to scramble
    #[arg(short = 's', long, value_name = "BITS", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u64,
    /// Suppress formatting and instructional output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Opt {
    pub fn alphabet(&self) -> Alphabet {
        if self.random {
            let alphabet = Alphabet::random();
            announce_alphabet(&alphabet, self.quiet);
            alphabet
        } else {
            self.alphabet.clone().unwrap_or_default()
        }
    }

    /// Builds a codec whose checksum modulus is `checksum`, or the alphabet length minus one.
    pub fn codec(&self, checksum: Option<u32>) -> anyhow::Result<Codec> {
        let mut config = Configuration::with_checksum_from_alphabet(self.alphabet());
        config.block_size = self.block_size;
        if let Some(checksum) = checksum {
            config.checksum = checksum;
        }
        Ok(Codec::new(config)?)
    }
}

pub fn announce_alphabet(alphabet: &Alphabet, quiet: bool) {
    if quiet {
        // No decoration, so that the alphabet can be fed to another program.
        println!("{}", alphabet);
    } else {
        println!("Random alphabet: {}", alphabet);
    }
}
