//! Field attributes: presence plus bound constants
//!
//! Every [`Scalar`] is its own attribute set (required, default bounds).
//! [`Optional`] and [`Constant`] select another presence with default
//! bounds, and [`attributes!`](crate::attributes) declares a set with
//! overridden constants.

use core::marker::PhantomData;

use crate::bounds::Bounds;
use crate::presence::Presence;
use crate::scalar::Scalar;

/// Presence and bound constants attached to a value type
pub trait Attributes: 'static {
    /// Stored value type
    type Value: Scalar;

    /// Presence of the field
    const PRESENCE: Presence;

    /// Sentinel for "no value"
    const NULL: Self::Value;

    /// Smallest legitimate value
    const MIN: Self::Value;

    /// Largest legitimate value
    const MAX: Self::Value;

    /// `PRESENCE == Optional`
    const IS_OPTIONAL: bool = Self::PRESENCE.is_optional();

    /// The bound constants as a [`Bounds`]
    fn bounds() -> Bounds<Self::Value> {
        Bounds::new(Self::MIN, Self::MAX, Self::NULL)
    }
}

impl<T: Scalar> Attributes for T {
    type Value = T;
    const PRESENCE: Presence = Presence::Required;
    const NULL: T = T::BOUNDS.null;
    const MIN: T = T::BOUNDS.min;
    const MAX: T = T::BOUNDS.max;
}

/// Optional presence with the default bounds of `T`
pub struct Optional<T: Scalar>(PhantomData<fn() -> T>);

impl<T: Scalar> Attributes for Optional<T> {
    type Value = T;
    const PRESENCE: Presence = Presence::Optional;
    const NULL: T = T::BOUNDS.null;
    const MIN: T = T::BOUNDS.min;
    const MAX: T = T::BOUNDS.max;
}

/// Constant presence with the default bounds of `T`
pub struct Constant<T: Scalar>(PhantomData<fn() -> T>);

impl<T: Scalar> Attributes for Constant<T> {
    type Value = T;
    const PRESENCE: Presence = Presence::Constant;
    const NULL: T = T::BOUNDS.null;
    const MIN: T = T::BOUNDS.min;
    const MAX: T = T::BOUNDS.max;
}

/// Declare an attribute set with explicit presence and bounds.
///
/// ```
/// use openmsg_core::{attributes, Attributes, Field, Presence};
///
/// attributes! {
///     /// Price in ticks, zero means "no price"
///     pub struct PriceTicks: i64 {
///         presence: Optional,
///         null: 0,
///         min: 1,
///         max: 1_000_000,
///     }
/// }
///
/// assert_eq!(PriceTicks::PRESENCE, Presence::Optional);
/// let price = Field::<PriceTicks>::default();
/// assert!(price.is_not_set());
/// assert!(!Field::<PriceTicks>::new(2_000_000).in_bound());
/// ```
#[macro_export]
macro_rules! attributes {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $value:ty {
            presence: $presence:ident,
            null: $null:expr,
            min: $min:expr,
            max: $max:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::attributes::Attributes for $name {
            type Value = $value;
            const PRESENCE: $crate::presence::Presence = $crate::presence::Presence::$presence;
            const NULL: $value = $null;
            const MIN: $value = $min;
            const MAX: $value = $max;
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::attributes! {
        struct Percent: u8 {
            presence: Required,
            null: 0xFF,
            min: 0,
            max: 100,
        }
    }

    #[test]
    fn test_scalar_is_required_with_defaults() {
        assert_eq!(<u16 as Attributes>::PRESENCE, Presence::Required);
        assert!(!<u16 as Attributes>::IS_OPTIONAL);
        assert_eq!(<u16 as Attributes>::NULL, u16::MAX);
        assert_eq!(<u16 as Attributes>::MAX, u16::MAX - 1);
    }

    #[test]
    fn test_optional_marker() {
        assert!(<Optional<i32> as Attributes>::IS_OPTIONAL);
        assert_eq!(<Optional<i32> as Attributes>::NULL, i32::MIN);
    }

    #[test]
    fn test_constant_marker() {
        assert_eq!(<Constant<u8> as Attributes>::PRESENCE, Presence::Constant);
        assert!(!<Constant<u8> as Attributes>::IS_OPTIONAL);
    }

    #[test]
    fn test_custom_attributes() {
        let bounds = Percent::bounds();
        assert_eq!(bounds.max, 100);
        assert!(bounds.contains(42));
        assert!(!bounds.contains(101));
        assert!(bounds.is_null(0xFF));
    }
}
