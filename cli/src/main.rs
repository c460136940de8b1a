mod cmd;
mod common;

use clap::Parser;

/// Encode integer IDs into short tokens and back.
#[derive(Parser)]
#[command(name = "idencoder", version)]
enum Cmd {
    /// Encode NUM
    Encode(cmd::encode::Opt),
    /// Decode TOKEN
    Decode(cmd::decode::Opt),
    /// Run a series of NUM encode/decode cycles
    Benchmark(cmd::benchmark::Opt),
    /// Generate a random alphabet
    Random(cmd::random::Opt),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = Cmd::parse();
    match cmd {
        Cmd::Encode(opt) => cmd::encode::main(opt),
        Cmd::Decode(opt) => cmd::decode::main(opt),
        Cmd::Benchmark(opt) => cmd::benchmark::main(opt),
        Cmd::Random(opt) => cmd::random::main(opt),
    }
}
