//! The cascade. Strategies run cheapest and safest first; the first one that
//! produces a value wins. The zero value closes the chain, so every entry
//! point here returns a `T` for every input.
//!
//! Which stage produced the value is deliberately not reported. A caller
//! can't tell an exact match from a reinterpretation from a zero fallback.

use core::any::type_name;
use tracing::trace;

use crate::core::coercible::Coercible;
use crate::core::fallback::zero_of;
use crate::core::type_ref::TypeRef;
use crate::strategy::{
    try_assert, try_native, try_force, try_force_erased, try_force_raw, try_switch, Attempt,
};

/// One step of the cascade, in attempt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Stage {
    /// Std conversions between primitive kinds. Lossless or range-checked.
    Native = 0,
    /// Exact type, or a boxed `dyn Any` holding one.
    DynamicAssertion = 1,
    /// Through `Box`, `Option`, and uniquely owned `Rc`/`Arc`.
    TypeSwitch = 2,
    /// Source bytes read as the target. Sizes must match.
    Force = 3,
    /// Force on the contents of an erased `dyn Coercible` holder.
    RawForce = 4,
    /// `T::default()`. Cannot fail.
    Zero = 5,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Native,
        Stage::DynamicAssertion,
        Stage::TypeSwitch,
        Stage::Force,
        Stage::RawForce,
        Stage::Zero,
    ];

    /// Where a failed attempt goes next. `Zero` is its own successor.
    #[inline(always)]
    pub const fn next(self) -> Self {
        match self {
            Stage::Native => Stage::DynamicAssertion,
            Stage::DynamicAssertion => Stage::TypeSwitch,
            Stage::TypeSwitch => Stage::Force,
            Stage::Force => Stage::RawForce,
            Stage::RawForce | Stage::Zero => Stage::Zero,
        }
    }

    /// Checked stages never look at raw bytes.
    #[inline(always)]
    pub const fn is_checked(self) -> bool {
        matches!(
            self,
            Stage::Native | Stage::DynamicAssertion | Stage::TypeSwitch
        )
    }

    #[inline(always)]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Zero)
    }
}

/// Runs the cascade from `entry` onward. At most six attempts.
pub fn run<S, T>(entry: Stage, source: S, target: TypeRef<T>) -> T
where
    S: Coercible,
    T: Coercible + Default,
{
    let mut source = Some(source);
    let mut stage = entry;

    loop {
        let attempt: Attempt<T> = match stage {
            Stage::Native => try_native(&source),
            Stage::DynamicAssertion => try_assert(&mut source),
            Stage::TypeSwitch => try_switch(&mut source),
            Stage::Force => try_force(&source),
            Stage::RawForce => try_force_raw(&source),
            Stage::Zero => {
                trace!(
                    source = type_name::<S>(),
                    target = target.name(),
                    "coercion fell back to zero value"
                );
                return zero_of(target);
            }
        };

        match attempt {
            Ok(value) => return value,
            Err(mismatch) => {
                trace!(
                    ?stage,
                    ?mismatch,
                    source = type_name::<S>(),
                    target = target.name(),
                    "coercion stage passed"
                );
                stage = stage.next();
            }
        }
    }
}

/// Full cascade. Always returns a `T`.
#[inline]
pub fn coerce<S, T>(source: S, target: TypeRef<T>) -> T
where
    S: Coercible,
    T: Coercible + Default,
{
    run(Stage::Native, source, target)
}

/// Skips native conversion; starts at the dynamic assertion.
#[inline]
pub fn assert_checked<S, T>(source: S, target: TypeRef<T>) -> T
where
    S: Coercible,
    T: Coercible + Default,
{
    run(Stage::DynamicAssertion, source, target)
}

/// Starts at the type switch.
#[inline]
pub fn switch_checked<S, T>(source: S, target: TypeRef<T>) -> T
where
    S: Coercible,
    T: Coercible + Default,
{
    run(Stage::TypeSwitch, source, target)
}

/// Straight to reinterpretation, for callers who know no checked conversion
/// applies. Same-size sources come back bit-identical; anything else ends in
/// `T::default()`.
#[inline]
pub fn force_reinterpret<S, T>(source: S, target: TypeRef<T>) -> T
where
    S: Coercible,
    T: Coercible + Default,
{
    run(Stage::Force, source, target)
}

/// Reinterprets an already-erased value, or returns `T::default()`.
pub fn force_raw<T>(source: &dyn Coercible, target: TypeRef<T>) -> T
where
    T: Coercible + Default,
{
    match try_force_erased(source) {
        Ok(value) => value,
        Err(mismatch) => {
            trace!(?mismatch, target = target.name(), "raw force fell back to zero value");
            zero_of(target)
        }
    }
}

/// Dynamic assertion alone. The zero value on mismatch, no further stages.
pub fn assert_or_zero<S, T>(source: S, target: TypeRef<T>) -> T
where
    S: Coercible,
    T: Coercible + Default,
{
    try_assert(&mut Some(source)).unwrap_or_else(|_| zero_of(target))
}

/// Target-inferred shorthands.
///
/// ```
/// use coax::CoerceInto;
///
/// let wide: f64 = 5i32.coerce_into();
/// assert_eq!(wide, 5.0);
///
/// let bits: u32 = 1.0f32.force_into();
/// assert_eq!(bits, 0x3f80_0000);
/// ```
pub trait CoerceInto: Coercible + Sized {
    #[inline]
    fn coerce_into<T: Coercible + Default>(self) -> T {
        coerce(self, TypeRef::new())
    }

    #[inline]
    fn assert_into<T: Coercible + Default>(self) -> T {
        assert_checked(self, TypeRef::new())
    }

    #[inline]
    fn force_into<T: Coercible + Default>(self) -> T {
        force_reinterpret(self, TypeRef::new())
    }
}

impl<S: Coercible> CoerceInto for S {}
