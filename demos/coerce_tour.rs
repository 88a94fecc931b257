//! A walk down the cascade: one call per stage, plus the dynamic call boundary.

use std::any::Any;
use std::rc::Rc;

use coax::{coerce, force_raw, force_reinterpret, nil_of, type_ref, Coercible, Nilable};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Packed pixel. Same size as a u32, so the force stage can read one.
#[derive(Debug, Clone, Copy, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(C)]
struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

coax::reinterpretable!(Rgba);

#[derive(Debug, Clone, Default)]
struct Account {
    owner: String,
}

coax::opaque!(Account);

fn main() {
    // 1. Native: std conversion between primitive kinds
    let wide = coerce(5i32, type_ref::<f64>());
    println!("5i32 as f64: {wide}");

    // 2. Dynamic assertion: a boxed Any holding the target
    let erased: Box<dyn Any> = Box::new(Account { owner: "ada".into() });
    let account = coerce(erased, type_ref::<Account>());
    println!("unboxed account owner: {}", account.owner);

    // 3. Type switch: uniquely owned handles are unwrapped
    let shared = Rc::new(Account { owner: "grace".into() });
    println!("rc owner: {}", coerce(shared, type_ref::<Account>()).owner);

    // 4. Force: same-size reinterpretation
    let px = coerce(u32::from_ne_bytes([10, 20, 30, 255]), type_ref::<Rgba>());
    println!("pixel: {px:?}");
    println!("1.0f32 bits: {:#x}", force_reinterpret(1.0f32, type_ref::<u32>()));

    // 5. Raw force: the value sits behind an erased holder
    let held: Box<dyn Coercible> = Box::new(px);
    println!("pixel as u32: {:#x}", coerce(held, type_ref::<u32>()));
    println!("erased f64 bits: {:#x}", force_raw(&2.0f64, type_ref::<u64>()));

    // 6. Zero: nothing applied
    println!("string as u64: {}", coerce(String::from("42"), type_ref::<u64>()));
    println!("u64 as pixel: {:?}", coerce(u64::MAX, type_ref::<Rgba>()));

    // Nil for pointer-like types
    let none = nil_of(type_ref::<Option<Box<Account>>>());
    println!("nil account is nil: {}", none.is_nil());

    #[cfg(feature = "invoke")]
    {
        use coax::{invoke, Invocable};

        let scale = Invocable::new(|x: i32, k: i32| x * k);
        let args: Vec<Box<dyn Any>> = vec![Box::new(6i32), Box::new(7i32)];
        match invoke(&scale, args) {
            Ok(out) => println!("invoked: {}", coerce(out, type_ref::<i32>())),
            Err(e) => println!("invoke failed: {e}"),
        }
    }
}
