use idencoder::{BigUint, MIN_LENGTH};

#[derive(clap::Args)]
pub struct Opt {
    #[arg(value_name = "NUM")]
    number: BigUint,
    /// Set the minimum encoded body length to NUM
    #[arg(short, long, value_name = "NUM", default_value_t = MIN_LENGTH)]
    length: usize,
    /// Checksum modulus (defaults to the alphabet length minus one)
    #[arg(short, long)]
    checksum: Option<u32>,
    #[command(flatten)]
    common: crate::common::Opt,
}

pub fn main(opt: Opt) -> anyhow::Result<()> {
    let codec = opt.common.codec(opt.checksum)?;
    println!("{}", codec.encode_with_min_length(opt.number, opt.length));
    Ok(())
}
