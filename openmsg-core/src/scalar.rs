//! Scalar categories accepted by the marshaling layer
//!
//! A type can be bound to a field only if it implements [`Scalar`]. The
//! implementations here cover the fixed-width integers, `f32`/`f64` and the
//! restricted byte character [`Char8`]. Enumerations are declared with
//! [`open_enum!`](crate::open_enum). Anything else (Rust's 4-byte `char`,
//! 128-bit integers, wide character types) is rejected at compile time.

use core::fmt::Debug;
use serde::{Deserialize, Serialize};

use crate::bounds::{float_bounds, signed_bounds, unsigned_bounds, Bounds};

pub use crate::bswap::Bits;

/// Signedness of an integer category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerKind {
    /// Two's complement signed integer
    Signed,
    /// Unsigned integer
    Unsigned,
}

/// Classification of a scalar type; drives its default bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarCategory {
    /// Signed integer
    Signed,
    /// Unsigned integer
    Unsigned,
    /// IEEE 754 floating point
    Float,
    /// Enumeration stored as an integer of the given kind
    Enumeration(IntegerKind),
    /// Single-byte restricted character
    Character,
}

impl ScalarCategory {
    /// Short lowercase label
    pub const fn name(&self) -> &'static str {
        match self {
            ScalarCategory::Signed => "signed",
            ScalarCategory::Unsigned => "unsigned",
            ScalarCategory::Float => "float",
            ScalarCategory::Enumeration(_) => "enumeration",
            ScalarCategory::Character => "character",
        }
    }
}

/// A fixed-width value that can be stored in a field.
///
/// `to_bits`/`from_bits` reinterpret the bit pattern without changing it,
/// so NaN payloads survive a round trip.
pub trait Scalar: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Unsigned integer of the same width
    type Bits: Bits;

    /// Category of this type
    const CATEGORY: ScalarCategory;

    /// Zero-equivalent value (all bits cleared)
    const ZERO: Self;

    /// Default bounds and sentinel
    const BOUNDS: Bounds<Self>;

    /// Reinterpret as the unsigned integer of equal width
    fn to_bits(self) -> Self::Bits;

    /// Reinterpret an unsigned integer of equal width
    fn from_bits(bits: Self::Bits) -> Self;
}

/// Integer scalars usable as the representation of an enumeration
pub trait Integer: Scalar + Ord + Eq {
    /// Signedness
    const KIND: IntegerKind;
}

macro_rules! impl_integer {
    ($($ty:ty => $bits:ty, $kind:ident, $bounds:ident;)*) => {
        $(
            impl Scalar for $ty {
                type Bits = $bits;
                const CATEGORY: ScalarCategory = ScalarCategory::$kind;
                const ZERO: Self = 0;
                const BOUNDS: Bounds<Self> = $bounds!($ty);

                #[inline]
                fn to_bits(self) -> $bits {
                    self as $bits
                }

                #[inline]
                fn from_bits(bits: $bits) -> Self {
                    bits as $ty
                }
            }

            impl Integer for $ty {
                const KIND: IntegerKind = IntegerKind::$kind;
            }
        )*
    };
}

impl_integer! {
    i8 => u8, Signed, signed_bounds;
    i16 => u16, Signed, signed_bounds;
    i32 => u32, Signed, signed_bounds;
    i64 => u64, Signed, signed_bounds;
    u8 => u8, Unsigned, unsigned_bounds;
    u16 => u16, Unsigned, unsigned_bounds;
    u32 => u32, Unsigned, unsigned_bounds;
    u64 => u64, Unsigned, unsigned_bounds;
}

macro_rules! impl_float {
    ($($ty:ty => $bits:ty;)*) => {
        $(
            impl Scalar for $ty {
                type Bits = $bits;
                const CATEGORY: ScalarCategory = ScalarCategory::Float;
                const ZERO: Self = 0.0;
                const BOUNDS: Bounds<Self> = float_bounds!($ty);

                #[inline]
                fn to_bits(self) -> $bits {
                    <$ty>::to_bits(self)
                }

                #[inline]
                fn from_bits(bits: $bits) -> Self {
                    <$ty>::from_bits(bits)
                }
            }
        )*
    };
}

impl_float! {
    f32 => u32;
    f64 => u64;
}

/// Restricted single-byte character (UTF-8 code unit)
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(transparent)]
pub struct Char8(pub u8);

impl Scalar for Char8 {
    type Bits = u8;
    const CATEGORY: ScalarCategory = ScalarCategory::Character;
    const ZERO: Self = Char8(0);
    const BOUNDS: Bounds<Self> = Bounds::new(Char8(0x20), Char8(0xFF), Char8(0x00));

    #[inline]
    fn to_bits(self) -> u8 {
        self.0
    }

    #[inline]
    fn from_bits(bits: u8) -> Self {
        Char8(bits)
    }
}

impl From<u8> for Char8 {
    fn from(value: u8) -> Self {
        Char8(value)
    }
}

/// Declare an open enumeration usable as a field scalar.
///
/// The generated type is a transparent newtype over the representation, so
/// every representation value (including the null sentinel) is storable,
/// as with a C enum that has a fixed underlying type. Named values become
/// associated constants. Bounds are those of the representation.
///
/// ```
/// openmsg_core::open_enum! {
///     /// Order side
///     pub enum Side: u8 {
///         Buy = 1,
///         Sell = 2,
///     }
/// }
///
/// use openmsg_core::Scalar;
/// assert_eq!(Side::BOUNDS.null, Side(0xFF));
/// assert_eq!(Side::Sell.name(), Some("Sell"));
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name(pub $repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self($value);
            )*

            /// Wrap a raw representation value
            pub const fn from_repr(repr: $repr) -> Self {
                Self(repr)
            }

            /// Raw representation value
            pub const fn repr(self) -> $repr {
                self.0
            }

            /// Name of the matching declared value, if any
            pub fn name(self) -> ::core::option::Option<&'static str> {
                $(
                    if self == Self::$variant {
                        return ::core::option::Option::Some(stringify!($variant));
                    }
                )*
                ::core::option::Option::None
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    ::core::option::Option::Some(name) => {
                        write!(f, "{}::{}", stringify!($name), name)
                    }
                    ::core::option::Option::None => {
                        write!(f, "{}({:?})", stringify!($name), self.0)
                    }
                }
            }
        }

        impl $crate::scalar::Scalar for $name {
            type Bits = <$repr as $crate::scalar::Scalar>::Bits;
            const CATEGORY: $crate::scalar::ScalarCategory =
                $crate::scalar::ScalarCategory::Enumeration(
                    <$repr as $crate::scalar::Integer>::KIND,
                );
            const ZERO: Self = Self(<$repr as $crate::scalar::Scalar>::ZERO);
            const BOUNDS: $crate::bounds::Bounds<Self> = $crate::bounds::Bounds::new(
                Self(<$repr as $crate::scalar::Scalar>::BOUNDS.min),
                Self(<$repr as $crate::scalar::Scalar>::BOUNDS.max),
                Self(<$repr as $crate::scalar::Scalar>::BOUNDS.null),
            );

            #[inline]
            fn to_bits(self) -> Self::Bits {
                <$repr as $crate::scalar::Scalar>::to_bits(self.0)
            }

            #[inline]
            fn from_bits(bits: Self::Bits) -> Self {
                Self(<$repr as $crate::scalar::Scalar>::from_bits(bits))
            }
        }
    };
}
