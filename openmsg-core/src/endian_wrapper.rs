//! Fields stored in a declared byte order
//!
//! [`EndianWrapper`] holds its value already converted to the declared order,
//! as a plain byte array. It has the size of the scalar and an alignment of 1,
//! so consecutive wrappers in a `#[repr(C)]` record are laid out back to back
//! with no padding.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::attributes::Attributes;
use crate::bswap::Bits;
use crate::error::LayoutError;
use crate::field::Field;
use crate::memory_wrapper::{BigEndian, ByteOrder, DefaultWrapper, LittleEndian, MemoryWrapper};
use crate::scalar::Scalar;

/// Memory representation of the value described by `A`
pub type MemoryOf<A> = <<A as Attributes>::Value as Scalar>::Bits;

/// Stored bytes of the value described by `A`
pub type StorageOf<A> = <MemoryOf<A> as Bits>::Bytes;

/// A value of `A::Value` stored in byte order `E`, converted by strategy `W`.
///
/// `A` is either a bare scalar (required, default bounds), an
/// [`Optional`](crate::Optional) marker, a [`Field`] type such as
/// [`Optionull`](crate::Optionull), or a custom attribute set.
#[repr(transparent)]
pub struct EndianWrapper<A: Attributes, E: ByteOrder = BigEndian, W: MemoryWrapper = DefaultWrapper> {
    storage: StorageOf<A>,
    _marker: PhantomData<fn() -> (A, E, W)>,
}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> EndianWrapper<A, E, W> {
    /// Convert `value` to the declared order and store it
    #[inline]
    pub fn new(value: A::Value) -> Self {
        Self::from_memory(W::to_memory::<A::Value, E>(value))
    }

    #[inline]
    fn from_memory(memory: MemoryOf<A>) -> Self {
        Self {
            storage: memory.to_ne_bytes(),
            _marker: PhantomData,
        }
    }

    /// Wrap bytes that are already in the declared order
    #[inline]
    pub fn from_storage_bytes(bytes: StorageOf<A>) -> Self {
        Self {
            storage: bytes,
            _marker: PhantomData,
        }
    }

    /// Wrap a slice that is already in the declared order
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LayoutError> {
        let mut storage = <StorageOf<A> as Default>::default();
        if bytes.len() != storage.as_ref().len() {
            return Err(LayoutError::SizeMismatch {
                expected: storage.as_ref().len(),
                actual: bytes.len(),
            });
        }
        storage.as_mut().copy_from_slice(bytes);
        Ok(Self::from_storage_bytes(storage))
    }

    /// Value converted back to host order
    #[inline]
    pub fn get(&self) -> A::Value {
        W::to_host::<A::Value, E>(self.storage_value())
    }

    /// Replace the stored value
    #[inline]
    pub fn set(&mut self, value: A::Value) {
        *self = Self::new(value);
    }

    /// Memory representation, still in the declared order.
    ///
    /// Meant for checking wire compatibility.
    #[inline]
    pub fn storage_value(&self) -> MemoryOf<A> {
        <MemoryOf<A> as Bits>::from_ne_bytes(self.storage)
    }

    /// Stored bytes, in the declared order
    #[inline]
    pub fn storage_bytes(&self) -> StorageOf<A> {
        self.storage
    }

    /// Stored bytes as a slice
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_ref()
    }

    /// Host-order copy as a [`Field`]
    #[inline]
    pub fn as_field(&self) -> Field<A> {
        Field::new(self.get())
    }

    /// True when the field is optional and holds the null sentinel
    pub fn is_not_set(&self) -> bool {
        self.as_field().is_not_set()
    }

    /// True when the value lies in the attribute bounds
    pub fn in_bound(&self) -> bool {
        self.as_field().in_bound()
    }

    /// Value, or `None` when the field is unset
    pub fn to_option(&self) -> Option<A::Value> {
        self.as_field().to_option()
    }

    /// Size in bytes (equal to the scalar width)
    pub const fn size() -> usize {
        core::mem::size_of::<Self>()
    }
}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> Default for EndianWrapper<A, E, W> {
    fn default() -> Self {
        if A::IS_OPTIONAL {
            Self::new(A::NULL)
        } else {
            Self::from_storage_bytes(<StorageOf<A> as Default>::default())
        }
    }
}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> From<Field<A>> for EndianWrapper<A, E, W> {
    fn from(field: Field<A>) -> Self {
        Self::new(field.get())
    }
}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> Clone for EndianWrapper<A, E, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> Copy for EndianWrapper<A, E, W> {}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> PartialEq for EndianWrapper<A, E, W> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> Eq for EndianWrapper<A, E, W> {}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> Hash for EndianWrapper<A, E, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.as_ref().hash(state);
    }
}

impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> fmt::Debug for EndianWrapper<A, E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndianWrapper")
            .field("value", &self.get())
            .field("order", &E::ORDER)
            .finish()
    }
}

// SAFETY: `repr(transparent)` over `StorageOf<A>`, a `[u8; N]` (Pod by the
// `Bits::Bytes` bound), next to a zero-sized marker. Every bit pattern is a
// valid value and there is no padding.
unsafe impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> bytemuck::Zeroable
    for EndianWrapper<A, E, W>
{
}

// SAFETY: see `Zeroable` above.
unsafe impl<A: Attributes, E: ByteOrder, W: MemoryWrapper> bytemuck::Pod
    for EndianWrapper<A, E, W>
{
}

/// Field stored big-endian
pub type BigEndianField<A, W = DefaultWrapper> = EndianWrapper<A, BigEndian, W>;

/// Field stored little-endian
pub type LittleEndianField<A, W = DefaultWrapper> = EndianWrapper<A, LittleEndian, W>;

/// Short form of [`BigEndianField`]
pub type Be<A> = BigEndianField<A>;

/// Short form of [`LittleEndianField`]
pub type Le<A> = LittleEndianField<A>;

/// Fixed-width aliases, e.g. `be_u32`
#[allow(non_camel_case_types, missing_docs)]
pub mod aliases {
    use super::{Be, Le};

    pub type le_i8 = Le<i8>;
    pub type le_u8 = Le<u8>;
    pub type le_i16 = Le<i16>;
    pub type le_u16 = Le<u16>;
    pub type le_i32 = Le<i32>;
    pub type le_u32 = Le<u32>;
    pub type le_i64 = Le<i64>;
    pub type le_u64 = Le<u64>;
    pub type le_f32 = Le<f32>;
    pub type le_f64 = Le<f64>;

    pub type be_i8 = Be<i8>;
    pub type be_u8 = Be<u8>;
    pub type be_i16 = Be<i16>;
    pub type be_u16 = Be<u16>;
    pub type be_i32 = Be<i32>;
    pub type be_u32 = Be<u32>;
    pub type be_i64 = Be<i64>;
    pub type be_u64 = Be<u64>;
    pub type be_f32 = Be<f32>;
    pub type be_f64 = Be<f64>;
}
