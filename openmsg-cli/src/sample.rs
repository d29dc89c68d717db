//! The sample record used by `example`, `describe` and `decode`
//!
//! ```text
//! value      u32, required
//! pair16     [u16; 2], optional
//! pair32     [u32; 2], optional
//! short_text 9 bytes of text
//! long_text  9 bytes of text
//! ```

use bytemuck::{Pod, Zeroable};
use openmsg_core::{
    ArrayChar, BigEndian, EndianWrapper, Endianness, LayoutError, LittleEndian, Optionull,
    PackedRecord,
};

use crate::report::{FieldReport, RecordReport};

macro_rules! sample_record {
    ($name:ident, $order:ty) => {
        /// Sample record stored in one byte order
        #[derive(Clone, Copy, Pod, Zeroable)]
        #[repr(C)]
        pub struct $name {
            /// Required 32-bit value
            pub value: EndianWrapper<u32, $order>,
            /// Pair of optional 16-bit values
            pub pair16: [EndianWrapper<Optionull<u16>, $order>; 2],
            /// Pair of optional 32-bit values
            pub pair32: [EndianWrapper<Optionull<u32>, $order>; 2],
            /// Text shorter than its capacity
            pub short_text: ArrayChar<9>,
            /// Text truncated to its capacity
            pub long_text: ArrayChar<9>,
        }

        impl PackedRecord for $name {}

        impl $name {
            /// The fixed sample values
            pub fn sample() -> Self {
                Self {
                    value: EndianWrapper::new(0xDEAD_BEEF),
                    pair16: [EndianWrapper::new(0xDEAD), EndianWrapper::default()],
                    pair32: [EndianWrapper::new(0xDEAD_BEEF), EndianWrapper::default()],
                    short_text: ArrayChar::from_str("testme"),
                    long_text: ArrayChar::from_str("testmefurther"),
                }
            }

            /// Field-by-field report
            pub fn report(&self) -> Vec<FieldReport> {
                let mut report = RecordReport::new();
                report
                    .scalar("value", &self.value)
                    .scalars("pair16", &self.pair16)
                    .scalars("pair32", &self.pair32)
                    .text("short_text", &self.short_text)
                    .text("long_text", &self.long_text);
                report.finish()
            }
        }
    };
}

sample_record!(BigSample, BigEndian);
sample_record!(LittleSample, LittleEndian);

/// Size of the sample record in bytes
pub fn size() -> usize {
    BigSample::size()
}

/// Bytes of the sample record in `order`
pub fn sample_bytes(order: Endianness) -> Vec<u8> {
    match order {
        Endianness::Big => BigSample::sample().as_bytes().to_vec(),
        Endianness::Little => LittleSample::sample().as_bytes().to_vec(),
    }
}

/// Report of the sample record in `order`
pub fn describe(order: Endianness) -> Vec<FieldReport> {
    match order {
        Endianness::Big => BigSample::sample().report(),
        Endianness::Little => LittleSample::sample().report(),
    }
}

/// Report of a received sample record
pub fn decode(order: Endianness, bytes: &[u8]) -> Result<Vec<FieldReport>, LayoutError> {
    match order {
        Endianness::Big => Ok(BigSample::read_from_bytes(bytes)?.report()),
        Endianness::Little => Ok(LittleSample::read_from_bytes(bytes)?.report()),
    }
}
