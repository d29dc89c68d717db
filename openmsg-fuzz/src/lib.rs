//! Fuzzing entry points for openmsg-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_strategies

use bytemuck::{Pod, Zeroable};
use openmsg_core::{
    Accelerated, ArrayChar, BigEndian, Bswap, ByteOrder, EndianWrapper, Le, LittleEndian,
    Char8, MemoryWrapper, NativeEndian, Optionull, PackedRecord, Robust, Scalar,
};

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct Probe {
    a: EndianWrapper<u16>,
    b: Le<Optionull<i32>>,
    c: EndianWrapper<Optionull<f64>>,
    text: ArrayChar<7, true>,
}

impl PackedRecord for Probe {}

fn agree<T: Scalar, E: ByteOrder>(value: T) {
    let expected = Bswap::to_memory::<T, E>(value);
    assert_eq!(Robust::to_memory::<T, E>(value), expected);
    assert_eq!(Accelerated::to_memory::<T, E>(value), expected);

    let back: T = Robust::to_host::<T, E>(expected);
    assert_eq!(back.to_bits(), value.to_bits());
    let back: T = Accelerated::to_host::<T, E>(expected);
    assert_eq!(back.to_bits(), value.to_bits());
}

fn agree_all_orders<T: Scalar>(value: T) {
    agree::<T, BigEndian>(value);
    agree::<T, LittleEndian>(value);
    agree::<T, NativeEndian>(value);
}

/// Every conversion strategy must produce the same bytes and round-trip
pub fn fuzz_strategies(data: &[u8]) {
    for chunk in data.chunks_exact(8) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        let wide = u64::from_ne_bytes(raw);

        agree_all_orders(wide as u8);
        agree_all_orders(wide as u16);
        agree_all_orders(wide as u32);
        agree_all_orders(wide);
        agree_all_orders(wide as i32);
        agree_all_orders(f32::from_bits(wide as u32));
        agree_all_orders(f64::from_bits(wide));
        agree_all_orders(Char8(wide as u8));
    }
}

/// Text copies must honor capacity, padding and termination
pub fn fuzz_array_char(data: &[u8]) {
    let plain = ArrayChar::<16>::from_bytes(data);
    let terminated = ArrayChar::<16, true>::from_bytes(data);
    assert_eq!(terminated.as_bytes()[15], 0);
    assert!(terminated.length(true) <= 15);

    let limit = data.first().map_or(0, |b| usize::from(*b));
    let pointer = ArrayChar::<16>::from_array_pointer(data, limit);
    assert!(!pointer.view().contains(&0));

    let converted = ArrayChar::<8, true>::convert(&plain);
    assert_eq!(converted.as_bytes()[7], 0);
    let _ = plain.to_str(true);
}

/// Viewing arbitrary bytes as a record must never panic
pub fn fuzz_record(data: &[u8]) {
    match Probe::read_from_bytes(data) {
        Ok(probe) => {
            let _ = probe.a.get();
            let _ = probe.b.to_option();
            let _ = probe.c.in_bound();
            let _ = probe.text.view();
            assert_eq!(probe.as_bytes(), data);
        }
        Err(_) => assert_ne!(data.len(), Probe::size()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_strategies_empty() {
        fuzz_strategies(&[]);
    }

    #[test]
    fn test_fuzz_strategies_patterns() {
        fuzz_strategies(&[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]);
        fuzz_strategies(&[0xFF; 64]);
        // Signalling NaN bit patterns
        fuzz_strategies(&[0x01, 0x00, 0x80, 0x7F, 0x01, 0x00, 0xF0, 0x7F]);
    }

    #[test]
    fn test_fuzz_array_char_random() {
        fuzz_array_char(&[]);
        fuzz_array_char(b"\x05ab\0cdefghijklmnopqrstuvwxyz");
        fuzz_array_char(&[0xFF; 40]);
    }

    #[test]
    fn test_fuzz_record_sizes() {
        fuzz_record(&[]);
        fuzz_record(&[0xAB; 21]);
        fuzz_record(&[0x00; 2 + 4 + 8 + 7]);
    }
}
