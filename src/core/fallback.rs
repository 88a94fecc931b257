//! Terminal values: the zero value that ends every cascade, and nil.

use core::ptr;

use super::type_ref::TypeRef;

/// `T`'s canonical default. Cannot fail.
#[inline(always)]
pub fn zero_of<T: Default>(_target: TypeRef<T>) -> T {
    T::default()
}

/// Types with a representation of "absent": `None` for `Option`, null for
/// raw pointers.
pub trait Nilable: Sized {
    const NIL: Self;

    fn is_nil(&self) -> bool;
}

impl<T> Nilable for Option<T> {
    const NIL: Self = None;

    #[inline(always)]
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nilable for *const T {
    const NIL: Self = ptr::null();

    #[inline(always)]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T> Nilable for *mut T {
    const NIL: Self = ptr::null_mut();

    #[inline(always)]
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

/// `T`'s absent value. Targets without one don't compile.
#[inline(always)]
pub fn nil_of<T: Nilable>(_target: TypeRef<T>) -> T {
    T::NIL
}
