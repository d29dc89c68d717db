use anyhow::{Context, Result};
use openmsg_core::Endianness;
use serde::Serialize;
use std::fs;
use tracing::info;

use crate::report::FieldReport;
use crate::sample;

#[derive(Serialize)]
struct Layout {
    order: Endianness,
    size: usize,
    fields: Vec<FieldReport>,
}

pub fn execute(order: Endianness, output: Option<&str>) -> Result<()> {
    let layout = Layout {
        order,
        size: sample::size(),
        fields: sample::describe(order),
    };

    let json =
        serde_json::to_string_pretty(&layout).with_context(|| "Failed to serialize layout")?;

    if let Some(output_path) = output {
        fs::write(output_path, &json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Wrote layout of {} fields to {}", layout.fields.len(), output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
