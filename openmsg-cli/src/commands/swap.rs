use anyhow::{bail, Context, Result};
use openmsg_core::bswap::{bswap16, bswap32, bswap64, bswap8};
use openmsg_core::{
    Accelerated, BigEndian, Bswap, Endianness, MemoryWrapper, Robust, Scalar,
};
use serde::Serialize;

use crate::WidthArg;

/// Result of swapping one value
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SwapReport {
    /// Width in bits
    pub width: u32,
    /// Input value
    pub value: u64,
    /// Byte-swapped value
    pub swapped: u64,
    /// Big-endian bytes, hex encoded
    pub big: String,
    /// Little-endian bytes, hex encoded
    pub little: String,
}

/// Parse a decimal or `0x`-prefixed hexadecimal value
pub fn parse_value(text: &str) -> Result<u64> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(&digits.replace('_', ""), 16),
        None => text.replace('_', "").parse::<u64>(),
    };
    parsed.with_context(|| format!("Invalid value: {}", text))
}

// Every strategy must produce the bytes of the portable swap
fn check_strategies<T: Scalar>(value: T) -> Result<()> {
    let expected = Bswap::to_memory::<T, BigEndian>(value);
    for (name, memory) in [
        (Robust::NAME, Robust::to_memory::<T, BigEndian>(value)),
        (Accelerated::NAME, Accelerated::to_memory::<T, BigEndian>(value)),
    ] {
        if memory != expected {
            bail!("Strategy {} disagrees: {:?} != {:?}", name, memory, expected);
        }
    }
    Ok(())
}

fn report<T: Scalar>(width: u32, value: u64, swapped: u64, host: T) -> Result<SwapReport> {
    check_strategies(host)?;
    Ok(SwapReport {
        width,
        value,
        swapped,
        big: hex::encode(Endianness::Big.encode(host)),
        little: hex::encode(Endianness::Little.encode(host)),
    })
}

/// Swap `value` as an unsigned integer of the given width
pub fn swap(width: WidthArg, value: u64) -> Result<SwapReport> {
    let max = match width {
        WidthArg::W64 => u64::MAX,
        other => (1u64 << (other.bytes() * 8)) - 1,
    };
    if value > max {
        bail!("Value {:#x} does not fit in {} bytes", value, width.bytes());
    }

    match width {
        WidthArg::W8 => {
            let v = value as u8;
            report(8, value, u64::from(bswap8(v)), v)
        }
        WidthArg::W16 => {
            let v = value as u16;
            report(16, value, u64::from(bswap16(v)), v)
        }
        WidthArg::W32 => {
            let v = value as u32;
            report(32, value, u64::from(bswap32(v)), v)
        }
        WidthArg::W64 => report(64, value, bswap64(value), value),
    }
}

pub fn execute(width: WidthArg, value: &str, json: bool) -> Result<()> {
    let value = parse_value(value)?;
    let report = swap(width, value)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let digits = width.bytes() * 2;
        println!("value:   {:#0w$x}", report.value, w = digits + 2);
        println!("swapped: {:#0w$x}", report.swapped, w = digits + 2);
        println!("big:     {}", report.big);
        println!("little:  {}", report.little);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("0xDEAD_BEEF").unwrap(), 0xDEAD_BEEF);
        assert_eq!(parse_value("1234").unwrap(), 1234);
        assert!(parse_value("nope").is_err());
    }

    #[test]
    fn test_swap_widths() {
        let r = swap(WidthArg::W32, 0xDEAD_BEEF).unwrap();
        assert_eq!(r.swapped, 0xEFBE_ADDE);
        assert_eq!(r.big, "deadbeef");
        assert_eq!(r.little, "efbeadde");

        assert_eq!(swap(WidthArg::W8, 0xAF).unwrap().swapped, 0xAF);
        assert_eq!(swap(WidthArg::W16, 0x8091).unwrap().swapped, 0x9180);
        assert_eq!(
            swap(WidthArg::W64, 0x8091_a2b3_c4d5_e6f7).unwrap().swapped,
            0xf7e6_d5c4_b3a2_9180
        );
    }

    #[test]
    fn test_swap_rejects_overflow() {
        assert!(swap(WidthArg::W8, 0x100).is_err());
        assert!(swap(WidthArg::W16, 0x1_0000).is_err());
    }
}
