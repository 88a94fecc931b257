//! Native conversion: primitive kinds through the target's own std
//! conversions. Lossless or range-checked only; never `as`.

use alloc::string::String;
use core::any::{Any, TypeId};

use super::{cast, Attempt, Mismatch};

/// A source read as a native kind. Everything here is `Copy`, so reading one
/// never consumes the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Native {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(&'static str),
}

impl Native {
    pub(crate) fn read(source: &dyn Any) -> Option<Self> {
        macro_rules! kinds {
            ($($ty:ty => $variant:ident),+ $(,)?) => {$(
                if let Some(value) = source.downcast_ref::<$ty>() {
                    return Some(Native::$variant(*value));
                }
            )+};
        }

        kinds! {
            bool => Bool, char => Char,
            i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128, isize => Isize,
            u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128, usize => Usize,
            f32 => F32, f64 => F64,
            &'static str => Str,
        }
        None
    }
}

/// Built from a native kind with the type's own conversions.
pub(crate) trait FromNative: Sized {
    fn from_native(native: Native) -> Option<Self>;
}

macro_rules! integer_target {
    ($($ty:ty),+) => {$(
        impl FromNative for $ty {
            #[inline]
            fn from_native(native: Native) -> Option<Self> {
                match native {
                    Native::Bool(v) => Some(<$ty>::from(v)),
                    Native::Char(v) => <$ty>::try_from(u32::from(v)).ok(),
                    Native::I8(v) => <$ty>::try_from(v).ok(),
                    Native::I16(v) => <$ty>::try_from(v).ok(),
                    Native::I32(v) => <$ty>::try_from(v).ok(),
                    Native::I64(v) => <$ty>::try_from(v).ok(),
                    Native::I128(v) => <$ty>::try_from(v).ok(),
                    Native::Isize(v) => <$ty>::try_from(v).ok(),
                    Native::U8(v) => <$ty>::try_from(v).ok(),
                    Native::U16(v) => <$ty>::try_from(v).ok(),
                    Native::U32(v) => <$ty>::try_from(v).ok(),
                    Native::U64(v) => <$ty>::try_from(v).ok(),
                    Native::U128(v) => <$ty>::try_from(v).ok(),
                    Native::Usize(v) => <$ty>::try_from(v).ok(),
                    Native::F32(_) | Native::F64(_) | Native::Str(_) => None,
                }
            }
        }
    )+};
}

integer_target!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromNative for f64 {
    fn from_native(native: Native) -> Option<Self> {
        match native {
            Native::Bool(v) => Some(f64::from(v)),
            Native::I8(v) => Some(f64::from(v)),
            Native::I16(v) => Some(f64::from(v)),
            Native::I32(v) => Some(f64::from(v)),
            Native::U8(v) => Some(f64::from(v)),
            Native::U16(v) => Some(f64::from(v)),
            Native::U32(v) => Some(f64::from(v)),
            Native::F32(v) => Some(f64::from(v)),
            Native::F64(v) => Some(v),
            _ => None,
        }
    }
}

impl FromNative for f32 {
    fn from_native(native: Native) -> Option<Self> {
        match native {
            Native::Bool(v) => Some(f32::from(v)),
            Native::I8(v) => Some(f32::from(v)),
            Native::I16(v) => Some(f32::from(v)),
            Native::U8(v) => Some(f32::from(v)),
            Native::U16(v) => Some(f32::from(v)),
            Native::F32(v) => Some(v),
            _ => None,
        }
    }
}

impl FromNative for bool {
    fn from_native(native: Native) -> Option<Self> {
        match native {
            Native::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FromNative for char {
    fn from_native(native: Native) -> Option<Self> {
        match native {
            Native::Char(v) => Some(v),
            Native::U8(v) => Some(char::from(v)),
            Native::U32(v) => char::from_u32(v),
            _ => None,
        }
    }
}

impl FromNative for String {
    fn from_native(native: Native) -> Option<Self> {
        match native {
            Native::Str(v) => Some(String::from(v)),
            Native::Char(v) => Some(String::from(v)),
            _ => None,
        }
    }
}

impl FromNative for &'static str {
    fn from_native(native: Native) -> Option<Self> {
        match native {
            Native::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Builds a `T` from a native-kind source, or passes with `Kind`.
pub(crate) fn try_native<S: Any, T: Any>(source: &Option<S>) -> Attempt<T> {
    let native = source
        .as_ref()
        .and_then(|value| Native::read(value))
        .ok_or(Mismatch::Kind)?;

    let target = TypeId::of::<T>();
    macro_rules! targets {
        ($($ty:ty),+ $(,)?) => {$(
            if target == TypeId::of::<$ty>() {
                return <$ty>::from_native(native)
                    .and_then(cast::<$ty, T>)
                    .ok_or(Mismatch::Kind);
            }
        )+};
    }

    targets! {
        i8, i16, i32, i64, i128, isize,
        u8, u16, u32, u64, u128, usize,
        f32, f64, bool, char, String, &'static str,
    }
    Err(Mismatch::Kind)
}
