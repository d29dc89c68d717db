use anyhow::{Context, Result};
use openmsg_core::Endianness;
use std::fs;
use tracing::info;

use crate::sample;

pub fn execute(order: Endianness, output: Option<&str>, json: bool) -> Result<()> {
    info!("Building sample record ({:?} endian)", order);

    let bytes = sample::sample_bytes(order);

    if let Some(output_path) = output {
        fs::write(output_path, &bytes)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Wrote {} bytes to {}", bytes.len(), output_path);
    }

    if json {
        let fields = sample::describe(order);
        let json = serde_json::to_string_pretty(&fields)
            .with_context(|| "Failed to serialize sample record")?;
        println!("{}", json);
    } else {
        println!("{}", hex::encode(&bytes));
    }

    Ok(())
}
