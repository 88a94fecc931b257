//! Type switch: looks through the wrappers an assertion can't see past.
//!
//! Shared handles are only unwrapped when uniquely owned. Otherwise the
//! handle goes back into the slot untouched and the stage passes.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::any::Any;

use super::{take_as, Attempt, Mismatch};

pub(crate) fn try_switch<S: Any, T: Any>(source: &mut Option<S>) -> Attempt<T> {
    let slot: &mut dyn Any = source;

    if let Some(boxed) = take_as::<Box<T>>(slot) {
        return Ok(*boxed);
    }

    if let Some(cell) = slot.downcast_mut::<Option<Option<T>>>() {
        if let Some(value) = cell.as_mut().and_then(Option::take) {
            return Ok(value);
        }
    }

    if let Some(cell) = slot.downcast_mut::<Option<Rc<T>>>() {
        if let Some(shared) = cell.take() {
            match Rc::try_unwrap(shared) {
                Ok(value) => return Ok(value),
                Err(shared) => *cell = Some(shared),
            }
        }
    }

    if let Some(cell) = slot.downcast_mut::<Option<Arc<T>>>() {
        if let Some(shared) = cell.take() {
            match Arc::try_unwrap(shared) {
                Ok(value) => return Ok(value),
                Err(shared) => *cell = Some(shared),
            }
        }
    }

    if let Some(cell) = slot.downcast_mut::<Option<Rc<dyn Any>>>() {
        if let Some(shared) = cell.take() {
            match shared.downcast::<T>() {
                Ok(typed) => match Rc::try_unwrap(typed) {
                    Ok(value) => return Ok(value),
                    Err(typed) => *cell = Some(typed as Rc<dyn Any>),
                },
                Err(shared) => *cell = Some(shared),
            }
        }
    }

    // `Arc::downcast` only exists for `dyn Any + Send + Sync` and wants
    // `T: Send + Sync`, which `T` can't promise here. Only a sole owner with
    // no weak handles is taken, so a shared handle never leaves the slot.
    macro_rules! unwrap_erased_arc {
        ($($erased:ty),+) => {$(
            if let Some(cell) = slot.downcast_mut::<Option<Arc<$erased>>>() {
                let sole = cell.as_ref().is_some_and(|shared| {
                    (**shared).is::<T>()
                        && Arc::strong_count(shared) == 1
                        && Arc::weak_count(shared) == 0
                });
                if sole {
                    if let Some(shared) = cell.take() {
                        let raw = Arc::into_raw(shared).cast::<T>();
                        // SAFETY: the pointee was just checked to be a `T`, so
                        // this is the allocation of the `Arc<T>` it was unsized from.
                        let typed = unsafe { Arc::from_raw(raw) };
                        if let Ok(value) = Arc::try_unwrap(typed) {
                            return Ok(value);
                        }
                    }
                }
            }
        )+};
    }

    unwrap_erased_arc!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);
    Err(Mismatch::Shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_box_and_option() {
        let mut source = Some(Box::new(9i16));
        assert_eq!(try_switch::<_, i16>(&mut source), Ok(9));

        let mut source = Some(Some(String::from("inner")));
        assert_eq!(try_switch::<_, String>(&mut source).as_deref(), Ok("inner"));

        let mut source: Option<Option<u8>> = Some(None);
        assert_eq!(try_switch::<_, u8>(&mut source), Err(Mismatch::Shape));
        assert_eq!(source, Some(None));
    }

    #[test]
    fn test_unique_rc_unwraps() {
        let mut source = Some(Rc::new(String::from("solo")));
        assert_eq!(try_switch::<_, String>(&mut source).as_deref(), Ok("solo"));

        let mut source = Some(Arc::new(3u32));
        assert_eq!(try_switch::<_, u32>(&mut source), Ok(3));
    }

    #[test]
    fn test_shared_rc_is_left_intact() {
        let shared = Rc::new(5u64);
        let mut source = Some(Rc::clone(&shared));
        assert_eq!(try_switch::<_, u64>(&mut source), Err(Mismatch::Shape));
        assert_eq!(Rc::strong_count(&shared), 2);
        assert_eq!(source.as_deref(), Some(&5));
    }

    #[test]
    fn test_erased_rc() {
        let mut source: Option<Rc<dyn Any>> = Some(Rc::new(7i8));
        assert_eq!(try_switch::<_, i8>(&mut source), Ok(7));

        let mut source: Option<Rc<dyn Any>> = Some(Rc::new(7i8));
        assert_eq!(try_switch::<_, u8>(&mut source), Err(Mismatch::Shape));
        let kept = source.map(|shared| shared.is::<i8>());
        assert_eq!(kept, Some(true));
    }

    #[test]
    fn test_erased_arc() {
        let mut source: Option<Arc<dyn Any + Send + Sync>> = Some(Arc::new(3u32));
        assert_eq!(try_switch::<_, u32>(&mut source), Ok(3));
        assert!(source.is_none());

        let mut source: Option<Arc<dyn Any>> = Some(Arc::new(String::from("solo")));
        assert_eq!(try_switch::<_, String>(&mut source).as_deref(), Ok("solo"));

        let mut source: Option<Arc<dyn Any + Send>> = Some(Arc::new(7i8));
        assert_eq!(try_switch::<_, u8>(&mut source), Err(Mismatch::Shape));
        assert_eq!(source.map(|shared| shared.is::<i8>()), Some(true));
    }

    #[test]
    fn test_shared_erased_arc_is_left_intact() {
        let shared: Arc<dyn Any + Send + Sync> = Arc::new(5u64);
        let mut source = Some(Arc::clone(&shared));
        assert_eq!(try_switch::<_, u64>(&mut source), Err(Mismatch::Shape));
        assert_eq!(Arc::strong_count(&shared), 2);

        let weak = Arc::downgrade(&shared);
        drop(source);
        let mut source = Some(shared);
        assert_eq!(try_switch::<_, u64>(&mut source), Err(Mismatch::Shape));
        assert!(source.is_some());
        assert!(weak.upgrade().is_some());
    }

    #[test]
    fn test_unrelated_source() {
        let mut source = Some(1u32);
        assert_eq!(try_switch::<_, u64>(&mut source), Err(Mismatch::Shape));
        assert_eq!(source, Some(1));
    }
}
