//! TypeRef: names a type without a value of it.

use core::alloc::Layout;
use core::any::{type_name, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// Zero-sized handle for `T`. Never holds, builds, or drops a `T`.
///
/// Pass one to any cascade entry point to say what you want back. Build it
/// with [`type_ref`] when you know the type, or [`TypeRef::of`] when you only
/// have a sample value.
pub struct TypeRef<T>(PhantomData<fn() -> T>);

impl<T> TypeRef<T> {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Infers `T` from a sample. The sample is only borrowed.
    #[inline(always)]
    pub const fn of(_sample: &T) -> Self {
        Self(PhantomData)
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        type_name::<T>()
    }

    #[inline(always)]
    pub const fn layout(&self) -> Layout {
        Layout::new::<T>()
    }
}

impl<T: 'static> TypeRef<T> {
    /// Runtime identity, comparable across descriptors.
    #[inline(always)]
    pub fn id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    #[inline(always)]
    pub fn is<U: 'static>(&self) -> bool {
        TypeId::of::<T>() == TypeId::of::<U>()
    }
}

/// Descriptor for `T`.
#[inline(always)]
pub const fn type_ref<T>() -> TypeRef<T> {
    TypeRef::new()
}

impl<T> Clone for TypeRef<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeRef<T> {}

impl<T> Default for TypeRef<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for TypeRef<T> {
    #[inline(always)]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for TypeRef<T> {}

impl<T> Hash for TypeRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        type_name::<T>().hash(state);
    }
}

impl<T> fmt::Debug for TypeRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef<{}>", type_name::<T>())
    }
}
