//! The guts. Type descriptors, layout capability, terminal values.

pub mod coercible;
pub mod fallback;
pub mod layout;
pub mod type_ref;

pub use coercible::{AsAny, Coercible};
pub use fallback::{nil_of, zero_of, Nilable};
pub use type_ref::{type_ref, TypeRef};
