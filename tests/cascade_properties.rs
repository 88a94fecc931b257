//! Property-based tests for the cascade's guarantees.
//!
//! Totality, the identity law, bit-identical reinterpretation for matching
//! layouts, and a deterministic zero for everything else.

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use proptest::prelude::*;

use coax::{coerce, force_reinterpret, type_ref, zero_of, CoerceInto, Coercible};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(C)]
struct Wide {
    a: u64,
    b: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(C)]
struct Narrow {
    x: u32,
    y: u32,
}

coax::reinterpretable!(Wide, Narrow);

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn coerce_is_total_for_numbers(v in any::<i64>()) {
        // Every one of these returns; some answers are just zero.
        let _: f32 = coerce(v, type_ref());
        let _: u8 = coerce(v, type_ref());
        let _: char = coerce(v, type_ref());
        let _: bool = coerce(v, type_ref());
        let _: [u8; 3] = coerce(v, type_ref());
        let _: Narrow = coerce(v, type_ref());
        let _: String = coerce(v, type_ref());
    }

    #[test]
    fn coerce_is_total_for_strings(s in ".*") {
        let _: u64 = coerce(s.clone(), type_ref());
        let _: Wide = coerce(s.clone(), type_ref());
        let back: String = coerce(s.clone(), type_ref());
        prop_assert_eq!(back, s);
    }

    #[test]
    fn identity_law(v in any::<u64>(), w in any::<i16>(), s in "[a-z]{0,12}") {
        prop_assert_eq!(coerce(v, type_ref::<u64>()), v);
        prop_assert_eq!(coerce(w, type_ref::<i16>()), w);
        prop_assert_eq!(coerce(s.clone(), type_ref::<String>()), s);
        let pair = Narrow { x: v as u32, y: w as u32 };
        prop_assert_eq!(coerce(pair, type_ref::<Narrow>()), pair);
    }

    #[test]
    fn identity_law_through_erased_holders(
        v in any::<u64>(),
        s in "[a-z]{0,12}",
        bytes in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let pair = Narrow { x: v as u32, y: (v >> 32) as u32 };

        let erased: Box<dyn Any> = Box::new(s.clone());
        prop_assert_eq!(coerce(erased, type_ref::<String>()), s.clone());
        let erased: Box<dyn Any> = Box::new(pair);
        prop_assert_eq!(coerce(erased, type_ref::<Narrow>()), pair);

        let held: Box<dyn Coercible> = Box::new(s.clone());
        prop_assert_eq!(coerce(held, type_ref::<String>()), s.clone());
        let held: Box<dyn Coercible> = Box::new(bytes.clone());
        prop_assert_eq!(coerce(held, type_ref::<Vec<u8>>()), bytes.clone());
        let held: Box<dyn Coercible> = Box::new(v);
        prop_assert_eq!(coerce(held, type_ref::<u64>()), v);
        let held: Box<dyn Coercible> = Box::new(pair);
        prop_assert_eq!(coerce(held, type_ref::<Narrow>()), pair);
    }

    #[test]
    fn identity_law_through_unique_handles(
        v in any::<u64>(),
        s in "[a-z]{0,12}",
        bytes in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        prop_assert_eq!(coerce(Rc::new(s.clone()), type_ref::<String>()), s.clone());
        prop_assert_eq!(coerce(Arc::new(bytes.clone()), type_ref::<Vec<u8>>()), bytes.clone());
        prop_assert_eq!(coerce(Rc::new(v), type_ref::<u64>()), v);

        let erased: Rc<dyn Any> = Rc::new(s.clone());
        prop_assert_eq!(coerce(erased, type_ref::<String>()), s.clone());
        let erased: Arc<dyn Any + Send + Sync> = Arc::new(bytes.clone());
        prop_assert_eq!(coerce(erased, type_ref::<Vec<u8>>()), bytes);
        let erased: Arc<dyn Any + Send + Sync> = Arc::new(v);
        prop_assert_eq!(coerce(erased, type_ref::<u64>()), v);
    }

    #[test]
    fn force_same_layout_is_bit_identical(bits in any::<u32>(), a in any::<u64>(), b in any::<u64>()) {
        let f = f32::from_bits(bits);
        prop_assert_eq!(force_reinterpret(f, type_ref::<u32>()), bits);
        prop_assert_eq!(force_reinterpret(bits, type_ref::<[u8; 4]>()), bits.to_ne_bytes());

        let wide = Wide { a, b };
        let raw: [u64; 2] = force_reinterpret(wide, type_ref());
        prop_assert_eq!(raw, [a, b]);
        prop_assert_eq!(force_reinterpret(raw, type_ref::<Wide>()), wide);
    }

    #[test]
    fn force_mismatched_layout_is_zero(a in any::<u64>(), b in any::<u64>()) {
        let wide = Wide { a, b };
        prop_assert_eq!(force_reinterpret(wide, type_ref::<Narrow>()), Narrow::default());
        prop_assert_eq!(force_reinterpret(a, type_ref::<u32>()), 0);
        prop_assert_eq!(coerce(wide, type_ref::<Narrow>()), zero_of(type_ref::<Narrow>()));
    }

    #[test]
    fn native_widening_preserves_value(v in any::<i32>(), u in any::<u16>()) {
        prop_assert_eq!(coerce(v, type_ref::<f64>()), f64::from(v));
        prop_assert_eq!(coerce(v, type_ref::<i128>()), i128::from(v));
        prop_assert_eq!(u.coerce_into::<u64>(), u64::from(u));
    }

    #[test]
    fn narrowing_in_range_keeps_value(v in 0u64..=u64::from(u16::MAX)) {
        prop_assert_eq!(coerce(v, type_ref::<u16>()) as u64, v);
    }

    #[test]
    fn narrowing_out_of_range_is_zero(v in (u64::from(u16::MAX) + 1)..) {
        prop_assert_eq!(coerce(v, type_ref::<u16>()), 0);
    }

    #[test]
    fn bool_patterns(byte in any::<u8>()) {
        let forced: bool = force_reinterpret(byte, type_ref());
        prop_assert_eq!(forced, byte == 1);
    }
}

#[test]
fn zero_of_is_idempotent() {
    assert_eq!(zero_of(type_ref::<Wide>()), zero_of(type_ref::<Wide>()));
    assert_eq!(zero_of(type_ref::<String>()), zero_of(type_ref::<String>()));
    assert_eq!(zero_of(type_ref::<[i8; 16]>()), [0; 16]);
}
