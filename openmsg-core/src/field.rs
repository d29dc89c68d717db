//! A host-order value bound to its attributes

use core::fmt;
use core::marker::PhantomData;

use crate::attributes::{Attributes, Optional};
use crate::presence::Presence;
use crate::scalar::Scalar;

/// One value together with its presence and bounds.
///
/// Out-of-bound values are representable; [`Field::in_bound`] is an advisory
/// check to run before trusting or transmitting a value.
#[repr(transparent)]
pub struct Field<A: Attributes> {
    value: A::Value,
    _attributes: PhantomData<fn() -> A>,
}

/// A field whose presence is optional, with default bounds
pub type Optionull<T> = Field<Optional<T>>;

impl<A: Attributes> Field<A> {
    /// Wrap a value
    #[inline]
    pub const fn new(value: A::Value) -> Self {
        Self {
            value,
            _attributes: PhantomData,
        }
    }

    /// A field holding the null sentinel
    #[inline]
    pub const fn null() -> Self {
        Self::new(A::NULL)
    }

    /// Stored value
    #[inline]
    pub fn get(&self) -> A::Value {
        self.value
    }

    /// Replace the stored value
    #[inline]
    pub fn set(&mut self, value: A::Value) {
        self.value = value;
    }

    /// Reset to the default value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Presence declared by the attributes
    pub const fn presence(&self) -> Presence {
        A::PRESENCE
    }

    /// True when the field is optional and holds the null bit pattern
    #[inline]
    pub fn is_not_set(&self) -> bool {
        A::IS_OPTIONAL && self.value.to_bits() == A::NULL.to_bits()
    }

    /// True when the value lies in `[MIN, MAX]`
    #[inline]
    pub fn in_bound(&self) -> bool {
        A::MIN <= self.value && self.value <= A::MAX
    }

    /// True when the field is either unset or in bound
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_not_set() || self.in_bound()
    }

    /// The value, or `None` when the field is unset
    pub fn to_option(&self) -> Option<A::Value> {
        if self.is_not_set() {
            None
        } else {
            Some(self.value)
        }
    }
}

impl<A: Attributes> Default for Field<A> {
    fn default() -> Self {
        if A::IS_OPTIONAL {
            Self::new(A::NULL)
        } else {
            Self::new(<A::Value as Scalar>::ZERO)
        }
    }
}

impl<A: Attributes> Clone for Field<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Attributes> Copy for Field<A> {}

impl<A: Attributes> PartialEq for Field<A> {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits()
    }
}

impl<A: Attributes> Eq for Field<A> {}

impl<A: Attributes> fmt::Debug for Field<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_not_set() {
            f.write_str("Field(unset)")
        } else {
            f.debug_tuple("Field").field(&self.value).finish()
        }
    }
}

// A field is itself an attribute set, so wrappers accept `Optionull<T>`
// wherever they accept `Optional<T>`.
impl<A: Attributes> Attributes for Field<A> {
    type Value = A::Value;
    const PRESENCE: Presence = A::PRESENCE;
    const NULL: A::Value = A::NULL;
    const MIN: A::Value = A::MIN;
    const MAX: A::Value = A::MAX;
}
