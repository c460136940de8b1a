use idencoder::Alphabet;

#[derive(clap::Args)]
pub struct Opt {
    /// Print the bare alphabet
    #[arg(short, long)]
    quiet: bool,
}

pub fn main(opt: Opt) -> anyhow::Result<()> {
    crate::common::announce_alphabet(&Alphabet::random(), opt.quiet);
    Ok(())
}
