//! Coercible: the capability every cascade participant declares.
//!
//! Reinterpretable types expose their bytes and can be rebuilt from bytes.
//! Opaque types keep the defaults and only take part in the checked stages.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use zerocopy::{FromBytes, Immutable, IntoBytes};

use super::layout;

/// Erasure helpers behind `dyn Coercible`. Blanket-implemented for every
/// `'static` type, so there is nothing to implement by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline(always)]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A type the cascade can move values into and out of.
///
/// Rules:
/// - `as_bits` returns every byte of the value, all initialized. No padding,
///   no pointers. Return `None` if you can't promise that.
/// - `from_bits` only accepts a slice of exactly `size_of::<Self>()` bytes
///   and must reject patterns that aren't valid values.
///
/// Don't implement this by hand. Use [`reinterpretable!`](crate::reinterpretable)
/// for zerocopy types and [`opaque!`](crate::opaque) for everything else.
pub trait Coercible: AsAny {
    fn as_bits(&self) -> Option<&[u8]> {
        None
    }

    fn from_bits(_bits: &[u8]) -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

/// Marks zerocopy types (`FromBytes + IntoBytes + Immutable`) as
/// reinterpretable by the force stages.
///
/// ```
/// use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
///
/// #[derive(Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
/// #[repr(C)]
/// struct Rgba {
///     r: u8,
///     g: u8,
///     b: u8,
///     a: u8,
/// }
///
/// coax::reinterpretable!(Rgba);
///
/// let px: Rgba = coax::force_reinterpret(u32::from_ne_bytes([1, 2, 3, 4]), coax::type_ref());
/// assert_eq!((px.r, px.a), (1, 4));
/// ```
#[macro_export]
macro_rules! reinterpretable {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Coercible for $ty {
            #[inline(always)]
            fn as_bits(&self) -> ::core::option::Option<&[u8]> {
                ::core::option::Option::Some($crate::layout::bits_of(self))
            }

            #[inline(always)]
            fn from_bits(bits: &[u8]) -> ::core::option::Option<Self> {
                $crate::layout::read_exact::<Self>(bits)
            }
        }
    )+};
}

/// Marks types that only take part in the checked stages.
#[macro_export]
macro_rules! opaque {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Coercible for $ty {}
    )+};
}

reinterpretable!(u8, u16, u32, u64, u128, usize);
reinterpretable!(i8, i16, i32, i64, i128, isize);
reinterpretable!(f32, f64, ());

// Not every bit pattern is a valid bool or char.
macro_rules! checked_pattern {
    ($($ty:ty),+) => {$(
        impl Coercible for $ty {
            #[inline(always)]
            fn as_bits(&self) -> Option<&[u8]> {
                Some(layout::bits_of(self))
            }

            #[inline(always)]
            fn from_bits(bits: &[u8]) -> Option<Self> {
                layout::try_read_exact::<Self>(bits)
            }
        }
    )+};
}

checked_pattern!(bool, char);

impl<E, const N: usize> Coercible for [E; N]
where
    E: FromBytes + IntoBytes + Immutable + 'static,
{
    #[inline(always)]
    fn as_bits(&self) -> Option<&[u8]> {
        Some(layout::bits_of(self))
    }

    #[inline(always)]
    fn from_bits(bits: &[u8]) -> Option<Self> {
        layout::read_exact::<Self>(bits)
    }
}

opaque!(String);

impl<E: 'static> Coercible for Vec<E> {}
impl<E: 'static> Coercible for Option<E> {}

// Wrappers are opaque themselves; the switch and raw-force stages look inside.
impl<E: ?Sized + 'static> Coercible for Box<E> {}
impl<E: ?Sized + 'static> Coercible for Rc<E> {}
impl<E: ?Sized + 'static> Coercible for Arc<E> {}
impl<E: ?Sized + 'static> Coercible for &'static E {}
