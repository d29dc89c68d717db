//! Byte-swap engine
//!
//! The portable path splits a value into halves, swaps each half and
//! recombines them with the halves exchanged. Every step is a `const fn`, so
//! the same code folds at compile time and runs on live data. The hardware
//! path ([`Bits::swap_native`]) is only a runtime substitute and is checked
//! against the portable path in the tests below.

use core::fmt::Debug;
use core::hash::Hash;

/// Swap a single byte (identity)
#[inline]
pub const fn bswap8(value: u8) -> u8 {
    value
}

/// Swap the byte order of a 16-bit value
#[inline]
pub const fn bswap16(value: u16) -> u16 {
    let high = bswap8((value >> 8) as u8) as u16;
    let low = bswap8(value as u8) as u16;
    low << 8 | high
}

/// Swap the byte order of a 32-bit value
#[inline]
pub const fn bswap32(value: u32) -> u32 {
    let high = bswap16((value >> 16) as u16) as u32;
    let low = bswap16(value as u16) as u32;
    low << 16 | high
}

/// Swap the byte order of a 64-bit value
#[inline]
pub const fn bswap64(value: u64) -> u64 {
    let high = bswap32((value >> 32) as u32) as u64;
    let low = bswap32(value as u32) as u64;
    low << 32 | high
}

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned integer of width 1, 2, 4 or 8 bytes.
///
/// This is the memory representation of every wrapped scalar. The trait is
/// sealed: no other width can be bound to a field.
pub trait Bits: private::Sealed + Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {
    /// Width in bytes
    const WIDTH: usize;

    /// All bits cleared
    const ZERO: Self;

    /// Byte array of exactly `WIDTH` bytes
    type Bytes: Copy
        + Eq
        + Debug
        + Default
        + AsRef<[u8]>
        + AsMut<[u8]>
        + bytemuck::Pod
        + Send
        + Sync
        + 'static;

    /// Byte swap through the portable, const-evaluable path
    fn swap_portable(self) -> Self;

    /// Byte swap through the hardware instruction
    fn swap_native(self) -> Self;

    /// Bytes as laid out in host memory
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Rebuild from bytes laid out in host memory
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    /// Big-endian byte layout
    fn to_be_bytes(self) -> Self::Bytes;

    /// Rebuild from a big-endian byte layout
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Little-endian byte layout
    fn to_le_bytes(self) -> Self::Bytes;

    /// Rebuild from a little-endian byte layout
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_bits {
    ($($ty:ty => $width:literal, $portable:ident;)*) => {
        $(
            impl Bits for $ty {
                const WIDTH: usize = $width;
                const ZERO: Self = 0;
                type Bytes = [u8; $width];

                #[inline]
                fn swap_portable(self) -> Self {
                    $portable(self)
                }

                #[inline]
                fn swap_native(self) -> Self {
                    self.swap_bytes()
                }

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }

                #[inline]
                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }

                #[inline]
                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                #[inline]
                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }

                #[inline]
                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_bits! {
    u8 => 1, bswap8;
    u16 => 2, bswap16;
    u32 => 4, bswap32;
    u64 => 8, bswap64;
}

/// Reverse the byte order of `value`.
///
/// Uses the hardware byte-reverse instruction; results are identical to
/// [`bswap16`], [`bswap32`] and [`bswap64`].
#[inline]
pub fn bswap<B: Bits>(value: B) -> B {
    value.swap_native()
}
