use anyhow::Result;
use clap::Parser;

use certgen::cli::{self, Args};

fn main() -> Result<()> {
    // Library diagnostics go through `tracing`'s log bridge; filter with RUST_LOG.
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let output = cli::run(&args)?;

    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    Ok(())
}
