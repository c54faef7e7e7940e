//! PIX Copy-and-Paste CLI
//!
//! Reads payment requests from CSV and writes one "Copia e Cola" code per
//! valid row.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- requests.csv > codes.csv
//! cargo run -- --always-dynamic requests.csv > codes.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use pix_copy_paste::{BatchGenerator, InitiationPolicy, MerchantConfig, PixError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut config = MerchantConfig::default();
    let mut input_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--always-dynamic" => config = config.with_initiation(InitiationPolicy::AlwaysDynamic),
            _ => input_path = Some(arg),
        }
    }

    let input_path = input_path.ok_or(PixError::MissingArgument)?;
    let file = File::open(&input_path)?;
    let reader = BufReader::new(file);

    let mut generator = BatchGenerator::new(config);
    generator.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    generator.write_output(handle)?;

    Ok(())
}
