//! Cascade strategies, cheapest first.
//!
//! Each one borrows the pending source slot and either produces the target or
//! says why it passed. A strategy only moves the source out when it succeeds,
//! so the next one always sees the original value.

mod dynamic;
mod force;
mod native;
mod switch;

use core::any::Any;

pub(crate) use dynamic::try_assert;
pub(crate) use force::{try_force, try_force_erased, try_force_raw};
pub(crate) use native::try_native;
pub(crate) use switch::try_switch;

/// Why a strategy passed. Internal: the cascade never hands one out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Mismatch {
    /// Source isn't a native kind the target can be built from.
    Kind = 1,
    /// Dynamic type isn't the target.
    DynamicType = 2,
    /// No wider view of the source holds a target.
    Shape = 3,
    /// Source has no raw layout.
    Opaque = 4,
    /// Source and target sizes differ.
    Size = 5,
    /// Target can't be rebuilt from these bytes.
    Unrepresentable = 6,
}

pub(crate) type Attempt<T> = Result<T, Mismatch>;

/// Takes the value out of `slot` if it is exactly an `Option<T>`.
#[inline(always)]
pub(crate) fn take_as<T: Any>(slot: &mut dyn Any) -> Option<T> {
    slot.downcast_mut::<Option<T>>().and_then(Option::take)
}

/// `value` as a `T`, when they're the same type.
#[inline(always)]
pub(crate) fn cast<U: Any, T: Any>(value: U) -> Option<T> {
    take_as(&mut Some(value))
}
