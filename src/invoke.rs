//! Dynamic invocation. Call a type-erased function with a type-erased
//! argument list and get its result back boxed.
//!
//! This sits outside the cascade: a bad call is reported, not absorbed.
//! Feed the result to [`coerce`](crate::coerce) if you want a typed value
//! with the cascade's guarantees.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

/// Why a dynamic call didn't happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeError {
    /// Wrong number of arguments.
    Arity { expected: usize, found: usize },
    /// Argument at `index` isn't the parameter's type.
    Argument { index: usize },
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::Arity { expected, found } => {
                write!(f, "expected {expected} arguments, got {found}")
            }
            InvokeError::Argument { index } => write!(f, "argument {index} has the wrong type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvokeError {}

/// A function callable with erased arguments. `Args` is the parameter tuple;
/// it only keeps impls for different arities apart.
pub trait Callable<Args> {
    fn arity(&self) -> usize;

    fn call_erased(&self, args: Vec<Box<dyn Any>>) -> Result<Box<dyn Any>, InvokeError>;
}

macro_rules! callable {
    ($arity:expr $(; $($param:ident $value:ident $index:expr),+)?) => {
        impl<F, R $($(, $param)+)?> Callable<($($($param,)+)?)> for F
        where
            F: Fn($($($param),+)?) -> R,
            R: Any,
            $($($param: Any,)+)?
        {
            #[inline]
            fn arity(&self) -> usize {
                $arity
            }

            fn call_erased(&self, args: Vec<Box<dyn Any>>) -> Result<Box<dyn Any>, InvokeError> {
                let [$($($value),+)?] = <[Box<dyn Any>; $arity]>::try_from(args)
                    .map_err(|args: Vec<Box<dyn Any>>| InvokeError::Arity {
                        expected: $arity,
                        found: args.len(),
                    })?;
                $($(
                    let $value = $value
                        .downcast::<$param>()
                        .map_err(|_| InvokeError::Argument { index: $index })?;
                )+)?
                Ok(Box::new(self($($(*$value),+)?)))
            }
        }
    };
}

callable!(0);
callable!(1; A a 0);
callable!(2; A a 0, B b 1);
callable!(3; A a 0, B b 1, C c 2);
callable!(4; A a 0, B b 1, C c 2, D d 3);

type ErasedFn = dyn Fn(Vec<Box<dyn Any>>) -> Result<Box<dyn Any>, InvokeError>;

/// A callable handle with its parameter types erased.
pub struct Invocable {
    arity: usize,
    call: Box<ErasedFn>,
}

impl Invocable {
    pub fn new<F, Args>(callable: F) -> Self
    where
        F: Callable<Args> + 'static,
    {
        Self {
            arity: callable.arity(),
            call: Box::new(move |args| callable.call_erased(args)),
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Debug for Invocable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocable").field("arity", &self.arity).finish()
    }
}

/// Calls `callable` with `args` in order and returns its result.
pub fn invoke(callable: &Invocable, args: Vec<Box<dyn Any>>) -> Result<Box<dyn Any>, InvokeError> {
    (callable.call)(args)
}
