//! Host/memory byte order conversion strategies
//!
//! A strategy turns a host value into its memory representation (an unsigned
//! integer of the same width whose in-memory bytes follow the declared byte
//! order) and back. All strategies are interchangeable and produce identical
//! bytes:
//!
//! - [`Bswap`]: reinterpret as the unsigned integer and byte-swap it
//! - [`Robust`]: copy individual bytes to positions `i ^ (width - 1)`
//! - [`Accelerated`]: byte-order aware load/store (`movbe`, `rev`), falling
//!   back to [`Bswap`] on other targets
//!
//! When the declared order is the host order every strategy is the identity.

use core::fmt::Debug;
use serde::{Deserialize, Serialize};

use crate::bswap::{bswap, Bits};
use crate::scalar::Scalar;

/// Byte order of a field in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endianness {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

impl Endianness {
    /// Byte order of the executing machine
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// Check whether this is the host order
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (Endianness::Big, Endianness::Big) | (Endianness::Little, Endianness::Little)
        )
    }

    /// Bytes of `value` in this order
    pub fn encode<T: Scalar>(self, value: T) -> <T::Bits as Bits>::Bytes {
        match self {
            Endianness::Big => value.to_bits().to_be_bytes(),
            Endianness::Little => value.to_bits().to_le_bytes(),
        }
    }

    /// Value from bytes in this order
    pub fn decode<T: Scalar>(self, bytes: <T::Bits as Bits>::Bytes) -> T {
        let bits = match self {
            Endianness::Big => <T::Bits as Bits>::from_be_bytes(bytes),
            Endianness::Little => <T::Bits as Bits>::from_le_bytes(bytes),
        };
        T::from_bits(bits)
    }
}

/// Type-level byte order
pub trait ByteOrder: Copy + Default + Debug + Send + Sync + 'static {
    /// Runtime value of this order
    const ORDER: Endianness;

    /// Whether this order equals the host order
    const IS_NATIVE: bool = Self::ORDER.is_native();
}

/// Big-endian marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

/// Little-endian marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Host byte order marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeEndian;

impl ByteOrder for BigEndian {
    const ORDER: Endianness = Endianness::Big;
}

impl ByteOrder for LittleEndian {
    const ORDER: Endianness = Endianness::Little;
}

impl ByteOrder for NativeEndian {
    const ORDER: Endianness = Endianness::native();
}

/// Conversion between host values and their memory representation
pub trait MemoryWrapper: 'static {
    /// Strategy name, for diagnostics
    const NAME: &'static str;

    /// Host value to memory representation in order `E`
    fn to_memory<T: Scalar, E: ByteOrder>(host: T) -> T::Bits;

    /// Memory representation in order `E` to host value
    fn to_host<T: Scalar, E: ByteOrder>(memory: T::Bits) -> T;
}

/// Swap through [`bswap`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Bswap;

impl MemoryWrapper for Bswap {
    const NAME: &'static str = "bswap";

    #[inline]
    fn to_memory<T: Scalar, E: ByteOrder>(host: T) -> T::Bits {
        let bits = host.to_bits();
        if E::IS_NATIVE {
            bits
        } else {
            bswap(bits)
        }
    }

    #[inline]
    fn to_host<T: Scalar, E: ByteOrder>(memory: T::Bits) -> T {
        if E::IS_NATIVE {
            T::from_bits(memory)
        } else {
            T::from_bits(bswap(memory))
        }
    }
}

/// Swap one byte at a time, never reading through a wider type
#[derive(Debug, Clone, Copy, Default)]
pub struct Robust;

impl Robust {
    fn shuffle<B: Bits>(src: B::Bytes, swap: bool) -> B::Bytes {
        let mask = if swap { B::WIDTH - 1 } else { 0 };
        let mut dst = <B::Bytes as Default>::default();
        let out = dst.as_mut();
        for (position, byte) in src.as_ref().iter().enumerate() {
            out[position ^ mask] = *byte;
        }
        dst
    }
}

impl MemoryWrapper for Robust {
    const NAME: &'static str = "robust";

    #[inline]
    fn to_memory<T: Scalar, E: ByteOrder>(host: T) -> T::Bits {
        let bytes = Self::shuffle::<T::Bits>(host.to_bits().to_ne_bytes(), !E::IS_NATIVE);
        <T::Bits as Bits>::from_ne_bytes(bytes)
    }

    #[inline]
    fn to_host<T: Scalar, E: ByteOrder>(memory: T::Bits) -> T {
        let bytes = Self::shuffle::<T::Bits>(memory.to_ne_bytes(), !E::IS_NATIVE);
        T::from_bits(<T::Bits as Bits>::from_ne_bytes(bytes))
    }
}

/// Byte-order aware load/store
#[derive(Debug, Clone, Copy, Default)]
pub struct Accelerated;

#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm"
))]
impl MemoryWrapper for Accelerated {
    const NAME: &'static str = "accelerated";

    #[inline]
    fn to_memory<T: Scalar, E: ByteOrder>(host: T) -> T::Bits {
        let bits = host.to_bits();
        if E::IS_NATIVE {
            return bits;
        }
        // Lowered to a single `movbe`/`rev` store when the target feature is enabled
        let stored = match E::ORDER {
            Endianness::Big => bits.to_be_bytes(),
            Endianness::Little => bits.to_le_bytes(),
        };
        <T::Bits as Bits>::from_ne_bytes(stored)
    }

    #[inline]
    fn to_host<T: Scalar, E: ByteOrder>(memory: T::Bits) -> T {
        if E::IS_NATIVE {
            return T::from_bits(memory);
        }
        let stored = memory.to_ne_bytes();
        let bits = match E::ORDER {
            Endianness::Big => <T::Bits as Bits>::from_be_bytes(stored),
            Endianness::Little => <T::Bits as Bits>::from_le_bytes(stored),
        };
        T::from_bits(bits)
    }
}

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm"
)))]
impl MemoryWrapper for Accelerated {
    const NAME: &'static str = "accelerated";

    #[inline]
    fn to_memory<T: Scalar, E: ByteOrder>(host: T) -> T::Bits {
        Bswap::to_memory::<T, E>(host)
    }

    #[inline]
    fn to_host<T: Scalar, E: ByteOrder>(memory: T::Bits) -> T {
        Bswap::to_host::<T, E>(memory)
    }
}

/// Strategy used by wrappers that do not name one
pub type DefaultWrapper = Bswap;

#[cfg(test)]
mod tests {
    use super::*;

    fn stored<T: Scalar, E: ByteOrder, W: MemoryWrapper>(value: T) -> <T::Bits as Bits>::Bytes {
        W::to_memory::<T, E>(value).to_ne_bytes()
    }

    fn assert_all_strategies<T: Scalar>(value: T, big: &[u8], little: &[u8]) {
        assert_eq!(stored::<T, BigEndian, Bswap>(value).as_ref(), big);
        assert_eq!(stored::<T, BigEndian, Robust>(value).as_ref(), big);
        assert_eq!(stored::<T, BigEndian, Accelerated>(value).as_ref(), big);
        assert_eq!(stored::<T, LittleEndian, Bswap>(value).as_ref(), little);
        assert_eq!(stored::<T, LittleEndian, Robust>(value).as_ref(), little);
        assert_eq!(stored::<T, LittleEndian, Accelerated>(value).as_ref(), little);
    }

    #[test]
    fn test_known_layouts() {
        assert_all_strategies(0xAFu8, &[0xAF], &[0xAF]);
        assert_all_strategies(0x8091u16, &[0x80, 0x91], &[0x91, 0x80]);
        assert_all_strategies(0xDEAD_BEEFu32, &[0xDE, 0xAD, 0xBE, 0xEF], &[0xEF, 0xBE, 0xAD, 0xDE]);
        assert_all_strategies(
            0x8091_a2b3_c4d5_e6f7u64,
            &[0x80, 0x91, 0xa2, 0xb3, 0xc4, 0xd5, 0xe6, 0xf7],
            &[0xf7, 0xe6, 0xd5, 0xc4, 0xb3, 0xa2, 0x91, 0x80],
        );
        assert_all_strategies(-2i16, &[0xFF, 0xFE], &[0xFE, 0xFF]);
        assert_all_strategies(1.0f32, &[0x3F, 0x80, 0x00, 0x00], &[0x00, 0x00, 0x80, 0x3F]);
    }

    #[test]
    fn test_native_order_is_identity() {
        let value = 0x0123_4567_89AB_CDEFu64;
        assert_eq!(Bswap::to_memory::<u64, NativeEndian>(value), value);
        assert_eq!(Robust::to_memory::<u64, NativeEndian>(value), value);
        assert_eq!(Accelerated::to_memory::<u64, NativeEndian>(value), value);
        assert_eq!(Robust::to_host::<u64, NativeEndian>(value), value);
    }

    #[test]
    fn test_round_trip_nan_payload() {
        let value = f64::from_bits(0x7FF8_DEAD_BEEF_0001);
        let memory = Robust::to_memory::<f64, BigEndian>(value);
        let back: f64 = Robust::to_host::<f64, BigEndian>(memory);
        assert_eq!(back.to_bits(), value.to_bits());
    }

    #[test]
    fn test_endianness_runtime_helpers() {
        assert!(NativeEndian::IS_NATIVE);
        assert_ne!(BigEndian::IS_NATIVE, LittleEndian::IS_NATIVE);
        assert_eq!(Endianness::Big.encode(0x0102u16), [0x01, 0x02]);
        assert_eq!(Endianness::Little.encode(0x0102u16), [0x02, 0x01]);
        assert_eq!(Endianness::Big.decode::<i32>([0xFF, 0xFF, 0xFF, 0xFE]), -2);
    }
}
