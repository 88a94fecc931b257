//! Total value coercion. Hand it a value and a [`TypeRef`] for the type you
//! want, get a value of that type back. Always.
//!
//! The cascade tries, cheapest and safest first: std conversions between
//! primitive kinds, a dynamic type check, a look through wrappers, a
//! size-checked reinterpretation of the raw bytes (typed, then through an
//! erased holder), and finally `T::default()`. Nothing escapes to the caller
//! and nothing tells the caller which step answered.
//!
//! This is an escape hatch for bridging loosely related types, not a
//! replacement for `From`/`TryFrom`. A silently wrong but well-typed value is
//! a legitimate outcome.
//!
//! ```
//! use coax::{coerce, force_reinterpret, type_ref};
//!
//! assert_eq!(coerce(5i32, type_ref::<f64>()), 5.0);
//! assert_eq!(force_reinterpret(1.0f32, type_ref::<u32>()), 0x3f80_0000);
//! assert_eq!(coerce(String::from("no"), type_ref::<u64>()), 0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub mod cascade;
pub mod core;
mod strategy;

#[cfg(feature = "invoke")]
pub mod invoke;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::cascade::{
        assert_checked, assert_or_zero, coerce, force_raw, force_reinterpret, run,
        switch_checked, CoerceInto, Stage,
    };
    pub use crate::core::{nil_of, type_ref, zero_of, Coercible, Nilable, TypeRef};

    #[cfg(feature = "invoke")]
    pub use crate::invoke::{invoke, Invocable, InvokeError};
}

// Re-export primary types at crate root for convenience.
pub use crate::cascade::{
    assert_checked, assert_or_zero, coerce, force_raw, force_reinterpret, run, switch_checked,
    CoerceInto, Stage,
};
pub use crate::core::{layout, nil_of, type_ref, zero_of, Coercible, Nilable, TypeRef};

#[cfg(feature = "invoke")]
pub use crate::invoke::{invoke, Callable, Invocable, InvokeError};
