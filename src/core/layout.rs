//! Raw layout helpers. Every byte read or written by the force stages goes
//! through here, and all of it goes through zerocopy.

use core::mem::size_of;
use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, TryFromBytes};

/// Initialized bytes of a padding-free value.
#[inline(always)]
pub fn bits_of<S>(value: &S) -> &[u8]
where
    S: IntoBytes + Immutable,
{
    value.as_bytes()
}

/// Size precondition for reinterpreting `bits` as a `T`.
#[inline(always)]
pub const fn fits<T>(bits: &[u8]) -> bool {
    bits.len() == size_of::<T>()
}

#[inline(always)]
pub const fn same_size<S, T>() -> bool {
    size_of::<S>() == size_of::<T>()
}

/// Copies `bits` into a fresh `T`. `None` unless the length is exact.
#[inline(always)]
pub fn read_exact<T>(bits: &[u8]) -> Option<T>
where
    T: FromBytes,
{
    if !fits::<T>(bits) {
        return None;
    }
    T::read_from_bytes(bits).ok()
}

/// Like [`read_exact`], for types with invalid bit patterns (`bool`, `char`).
#[inline(always)]
pub fn try_read_exact<T>(bits: &[u8]) -> Option<T>
where
    T: TryFromBytes,
{
    if !fits::<T>(bits) {
        return None;
    }
    T::try_read_from_bytes(bits).ok()
}

/// Reinterprets `source` as a `T` of the same size.
///
/// A size mismatch is a compile error at monomorphization, not a runtime
/// fallback. Use the cascade when the types are not known to line up.
#[inline(always)]
pub fn reinterpret<S, T>(source: S) -> T
where
    S: IntoBytes + Immutable,
    T: FromBytes,
{
    const { assert!(same_size::<S, T>(), "reinterpret requires equal sizes") };
    T::read_from_bytes(source.as_bytes()).unwrap_or_else(|_| T::new_zeroed())
}
