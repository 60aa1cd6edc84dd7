//! Fedwire round-trip example.
//!
//! Reads a message from the file named on the command line (or a built-in
//! customer transfer), validates it, and writes it back in both wire shapes
//! and as JSON.
//!
//! Run with `RUST_LOG=debug` to see each record as it is assembled.

use fedwire::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;

const SAMPLE: &str = "\
{1500}30User ReqT \n\
{1510}1000\n\
{1520}20240115Source08000001\n\
{2000}000001234567\n\
{3100}121042882Wells Fargo NA*\n\
{3400}231380104Citadel*\n\
{3600}CTR*\n\
{4200}D1234*Beneficiary*\n\
{5000}D5678*Originator*\n";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ReaderConfig::new().with_validate_message(true);
    let message = match std::env::args().nth(1) {
        Some(path) => {
            info!("Reading message from {}", path);
            Reader::with_config(BufReader::new(File::open(path)?), config).read()?
        }
        None => {
            info!("Reading built-in sample message");
            Reader::with_config(SAMPLE.as_bytes(), config).read()?
        }
    };

    info!(
        "Read {} segments, business function {:?}",
        message.len(),
        message.business_function_code()
    );
    if let Some(amount) = message.segment::<Amount>().and_then(Amount::to_decimal) {
        info!("Transfer amount {}", amount);
    }

    println!("-- fixed --");
    Writer::new(io::stdout().lock()).write(&message)?;

    println!("-- variable --");
    let config = WriterConfigBuilder::new().variable_length_fields().build();
    Writer::with_config(io::stdout().lock(), config).write(&message)?;

    println!("-- json --");
    println!("{}", message.to_json()?);

    Ok(())
}
