use anyhow::Context;

#[derive(clap::Args)]
pub struct Opt {
    #[arg(value_name = "TOKEN")]
    token: String,
    /// Checksum modulus (defaults to the alphabet length minus one)
    #[arg(short, long)]
    checksum: Option<u32>,
    #[command(flatten)]
    common: crate::common::Opt,
}

pub fn main(opt: Opt) -> anyhow::Result<()> {
    let codec = opt.common.codec(opt.checksum)?;
    let value = codec
        .decode(&opt.token)
        .with_context(|| format!("failed to decode {:?}", opt.token))?;
    println!("{}", value);
    Ok(())
}
