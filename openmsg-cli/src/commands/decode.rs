use anyhow::{Context, Result};
use colored::*;
use openmsg_core::Endianness;
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

use crate::report::FieldReport;
use crate::sample;

/// Decode a sample record from `input` (`-` for stdin), returning its fields
pub fn decode_file(input: &str, order: Endianness) -> Result<Vec<FieldReport>> {
    info!("Decoding file: {}", input);

    let data = if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?
    };

    sample::decode(order, &data)
        .with_context(|| format!("{} is not a sample record", input))
}

pub fn execute(input: &str, order: Endianness) -> Result<()> {
    let fields = decode_file(input, order)?;

    println!("\n=== Decoded Record ({:?} endian) ===", order);
    for field in &fields {
        let status = if field.not_set {
            "-".dimmed()
        } else if field.in_bound {
            "✓".green()
        } else {
            warn!("Field {} is out of bounds: {}", field.name, field.value);
            "✗".red()
        };
        println!(
            "{} {:<12} @{:<3} {:<20} {}",
            status, field.name, field.offset, field.bytes, field.value
        );
    }

    let unset = fields.iter().filter(|f| f.not_set).count();
    println!("\nFields: {} ({} not set)", fields.len(), unset);

    Ok(())
}
