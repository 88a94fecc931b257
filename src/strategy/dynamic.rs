//! Dynamic assertion: the source is a `T`, or a boxed `dyn Any` or
//! `dyn Coercible` holding one.

use alloc::boxed::Box;
use core::any::Any;

use super::{take_as, Attempt, Mismatch};
use crate::core::coercible::{AsAny, Coercible};

pub(crate) fn try_assert<S: Any, T: Any>(source: &mut Option<S>) -> Attempt<T> {
    let slot: &mut dyn Any = source;

    if let Some(value) = take_as::<T>(slot) {
        return Ok(value);
    }

    macro_rules! unbox {
        ($($erased:ty),+) => {$(
            if let Some(cell) = slot.downcast_mut::<Option<Box<$erased>>>() {
                if cell.as_ref().is_some_and(|boxed| (**boxed).is::<T>()) {
                    if let Some(value) = cell.take().and_then(|boxed| boxed.downcast::<T>().ok()) {
                        return Ok(*value);
                    }
                }
            }
        )+};
    }

    unbox!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

    if let Some(cell) = slot.downcast_mut::<Option<Box<dyn Coercible>>>() {
        if cell.as_ref().is_some_and(|held| (**held).as_any().is::<T>()) {
            if let Some(value) = cell.take().and_then(|held| held.into_any().downcast::<T>().ok()) {
                return Ok(*value);
            }
        }
    }

    Err(Mismatch::DynamicType)
}
