//! Default bounds and sentinel values per scalar category
//!
//! | category   | null       | min           | max           |
//! |------------|------------|---------------|---------------|
//! | signed     | type min   | type min + 1  | type max      |
//! | unsigned   | type max   | type min      | type max - 1  |
//! | float      | quiet NaN  | -max finite   | +max finite   |
//! | character  | 0x00       | 0x20          | 0xFF          |
//! | enum       | bounds of the underlying integer              |
//!
//! The null value never lies inside `[min, max]`.

use crate::scalar::Scalar;

/// Inclusive value range plus the reserved "no value" sentinel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Smallest legitimate value
    pub min: T,
    /// Largest legitimate value
    pub max: T,
    /// Sentinel for an unset optional field
    pub null: T,
}

impl<T> Bounds<T> {
    /// Create bounds from explicit constants
    pub const fn new(min: T, max: T, null: T) -> Self {
        Self { min, max, null }
    }
}

impl<T: Scalar> Bounds<T> {
    /// Check that `value` lies in `[min, max]`
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Check that `value` has the same bit pattern as the sentinel.
    ///
    /// NaN sentinels compare equal to themselves here.
    #[inline]
    pub fn is_null(&self, value: T) -> bool {
        value.to_bits() == self.null.to_bits()
    }

    /// Check that the sentinel is not a legitimate value and the range is not empty
    pub fn is_consistent(&self) -> bool {
        self.min <= self.max && !self.contains(self.null)
    }
}

/// Signed integers: null is the type minimum
macro_rules! signed_bounds {
    ($ty:ty) => {
        $crate::bounds::Bounds::new(<$ty>::MIN + 1, <$ty>::MAX, <$ty>::MIN)
    };
}

/// Unsigned integers: null is the type maximum
macro_rules! unsigned_bounds {
    ($ty:ty) => {
        $crate::bounds::Bounds::new(<$ty>::MIN, <$ty>::MAX - 1, <$ty>::MAX)
    };
}

/// Floating point: null is a quiet NaN
macro_rules! float_bounds {
    ($ty:ty) => {
        $crate::bounds::Bounds::new(-<$ty>::MAX, <$ty>::MAX, <$ty>::NAN)
    };
}

pub(crate) use {float_bounds, signed_bounds, unsigned_bounds};
