use std::io::{stdout, Write};

use idencoder::{BigUint, Codec, MIN_LENGTH};

#[derive(clap::Args)]
pub struct Opt {
    #[arg(value_name = "NUM")]
    count: u64,
    #[command(flatten)]
    common: crate::common::Opt,
}

pub fn main(opt: Opt) -> anyhow::Result<()> {
    let codec = opt.common.codec(None)?;
    let stdout = stdout();
    let mut stdout = stdout.lock();

    for a in 0..opt.count {
        let row = cycle(&codec, a)?;
        // Printing nothing is useful for measuring speed.
        if !opt.common.quiet {
            writeln!(stdout, "{}", row)?;
        }
    }

    log::info!("Completed {} encode/decode cycles", opt.count);

    Ok(())
}

/// Runs one scramble/enbase/debase/scramble cycle on `a` and formats its intermediate values.
fn cycle(codec: &Codec, a: u64) -> anyhow::Result<String> {
    let a = BigUint::from(a);
    let b = codec.scramble(&a);
    let c = codec.enbase(&b, MIN_LENGTH);
    let d = codec.debase(&c)?;
    let e = codec.scramble(&d);

    anyhow::ensure!(b == d, "debase({:?}) = {}, expected {}", c, d, b);
    anyhow::ensure!(a == e, "round trip of {} produced {}", a, e);

    Ok(format!("{:>6} {:>12} {:>7} {:>12} {:>6}", a, b, c, d, e))
}
