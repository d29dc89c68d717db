//! # openmsg Core
//!
//! Fixed binary layouts for wire messages and on-disk records: every field
//! declares its byte order, its "no value" sentinel and, for text, a fixed
//! capacity with defined truncation and padding.
//!
//! ## Modules
//!
//! - `bswap`: Byte-swap engine (const-evaluable, checked against hardware)
//! - `scalar`: Scalar categories accepted by fields
//! - `bounds`: Default bounds and null sentinels per category
//! - `presence` / `attributes` / `field`: Presence, bound constants, host-order fields
//! - `memory_wrapper`: Byte order markers and the three conversion strategies
//! - `endian_wrapper`: Fields stored in a declared byte order
//! - `array_char`: Fixed-capacity character buffers
//! - `record`: Packed records viewed as bytes

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod array_char;
pub mod attributes;
pub mod bounds;
pub mod bswap;
pub mod endian_wrapper;
pub mod error;
pub mod field;
pub mod memory_wrapper;
pub mod presence;
pub mod record;
pub mod scalar;

// Re-export commonly used types
pub use array_char::{ArrayChar, ArrayCharacter};
pub use attributes::{Attributes, Constant, Optional};
pub use bounds::Bounds;
pub use endian_wrapper::{Be, BigEndianField, EndianWrapper, Le, LittleEndianField};
pub use error::LayoutError;
pub use field::{Field, Optionull};
pub use memory_wrapper::{
    Accelerated, BigEndian, ByteOrder, Bswap, DefaultWrapper, Endianness, LittleEndian,
    MemoryWrapper, NativeEndian, Robust,
};
pub use presence::Presence;
pub use record::PackedRecord;
pub use scalar::{Bits, Char8, Integer, IntegerKind, Scalar, ScalarCategory};

/// Result type alias for layout operations
pub type Result<T> = core::result::Result<T, LayoutError>;
