//! Force: the source's bytes, read back as the target.
//!
//! The size check comes first and is explicit. Nothing here relies on a
//! fault to notice that layouts don't line up.

use alloc::boxed::Box;
use core::any::Any;

use super::{Attempt, Mismatch};
use crate::core::coercible::Coercible;
use crate::core::layout;

#[inline]
fn rebuild<T: Coercible>(bits: &[u8]) -> Attempt<T> {
    if !layout::fits::<T>(bits) {
        return Err(Mismatch::Size);
    }
    T::from_bits(bits).ok_or(Mismatch::Unrepresentable)
}

/// Typed force. Only sees what `S` itself exposes.
pub(crate) fn try_force<S: Coercible, T: Coercible>(source: &Option<S>) -> Attempt<T> {
    let bits = source
        .as_ref()
        .and_then(Coercible::as_bits)
        .ok_or(Mismatch::Opaque)?;
    rebuild(bits)
}

/// Force on a value whose type was erased at the call site.
pub(crate) fn try_force_erased<T: Coercible>(source: &dyn Coercible) -> Attempt<T> {
    let bits = source.as_bits().ok_or(Mismatch::Opaque)?;
    rebuild(bits)
}

/// Raw force. Looks inside erased holders (`Box<dyn Coercible>`,
/// `&'static dyn Coercible`) and forces what they hold.
pub(crate) fn try_force_raw<S: Any, T: Coercible>(source: &Option<S>) -> Attempt<T> {
    let slot: &dyn Any = source;
    let held = slot
        .downcast_ref::<Option<Box<dyn Coercible>>>()
        .and_then(|cell| cell.as_deref())
        .or_else(|| {
            slot.downcast_ref::<Option<&'static dyn Coercible>>()
                .and_then(|cell| *cell)
        })
        .ok_or(Mismatch::Shape)?;
    try_force_erased(held)
}
