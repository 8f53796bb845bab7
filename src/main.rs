use anyhow::Result;
use std::io::{BufWriter, Write};

use value_records::{config::DEFAULT_LOG_FILTER, Runner};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.first().map(String::as_str) {
        Some("list") => Runner::all().list(&mut out)?,
        Some(_) => Runner::with_names(args.as_slice())?.run(&mut out)?,
        None => Runner::all().run(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
