//! Callables: the [`Invoke`] protocol every helper in this crate calls through, and wrappers that
//! adapt a callable's argument list.
//!
//! Arguments are always passed as one flat tuple, so that a single trait can describe callables of
//! every arity. Every closure and function implements [`Invoke`] for the tuple of its parameters.
//! A type may also implement [`Invoke`] by hand for several different argument tuples, which is
//! how a callable that accepts differently-typed arguments on different calls is written (for
//! example, one visiting the elements of heterogeneous tuples).

use std::ops::ControlFlow;

use crate::tuple::Tuple;
use crate::unary::*;

mod defaults;
mod stride;

pub use defaults::{DefaultOffset, FuncWithDefaults, Provide};
pub use stride::{iter_n, Chunks, Stride, SupportedStride};

/// A callable accepting the argument tuple `Args`.
///
/// # Examples
///
/// Closures implement `Invoke` for the tuple of their parameters:
///
/// ```
/// use mg::functional::Invoke;
///
/// let mut add = |a: i32, b: i32| a + b;
/// assert_eq!(add.invoke((2, 3)), 5);
/// ```
///
/// A hand-written callable can accept several argument types:
///
/// ```
/// use mg::functional::Invoke;
///
/// struct Describe;
///
/// impl Invoke<(i32,)> for Describe {
///     type Output = String;
///     fn invoke(&mut self, (n,): (i32,)) -> String {
///         format!("int {}", n)
///     }
/// }
///
/// impl<'a> Invoke<(&'a str,)> for Describe {
///     type Output = String;
///     fn invoke(&mut self, (s,): (&'a str,)) -> String {
///         format!("str {}", s)
///     }
/// }
///
/// assert_eq!(Describe.invoke((1,)), "int 1");
/// assert_eq!(Describe.invoke(("x",)), "str x");
/// ```
pub trait Invoke<Args> {
    /// The value returned by the call.
    type Output;

    /// Call with the given arguments.
    fn invoke(&mut self, args: Args) -> Self::Output;
}

/// The shape of a function pointer type: its parameters, return type and arity.
///
/// This is implemented for `fn(A0, ..., An) -> R` for up to 16 parameters. Functions, methods
/// named by path (`Type::method`, whose receiver is the first parameter) and closures that capture
/// nothing all coerce to such a type.
///
/// Only concrete parameter types are covered: a pointer type that is generic over a lifetime
/// (such as `for<'a> fn(&'a str)`) has no `Signature`.
///
/// # Examples
///
/// ```
/// use mg::functional::Signature;
///
/// assert_eq!(<fn(String, u8) -> bool as Signature>::ARITY, 2);
/// assert_eq!(<fn() as Signature>::ARITY, 0);
/// ```
pub trait Signature {
    /// The parameter types, as a flat tuple.
    type Params: Tuple;
    /// The return type.
    type Output;
    /// The number of parameters, as a unary type-level number.
    type Arity: Unary;

    /// The number of parameters.
    const ARITY: usize = <Self::Arity as Unary>::VALUE;
}

mg_macro::impl_callables!(16);

/// A wrapper that forwards every call, unchanged, to the callable it holds.
///
/// When the wrapped callable is a function item or a closure capturing nothing, the wrapper takes
/// up no space.
///
/// # Examples
///
/// ```
/// use mg::functional::{Func, Invoke};
///
/// fn concat(pre: String, post: String) -> String {
///     pre + &post
/// }
///
/// let mut f = Func::new(concat);
/// assert_eq!(f.invoke(("hello ".to_string(), "world".to_string())), "hello world");
/// assert_eq!(std::mem::size_of_val(&f), 0);
///
/// // Methods take their receiver as the first argument
/// let mut len = Func::new(Vec::<u8>::len);
/// assert_eq!(len.invoke((&vec![1, 2, 3],)), 3);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Func<F>(F);

impl<F> Func<F> {
    /// Wrap a callable.
    pub const fn new(func: F) -> Self {
        Func(func)
    }

    /// Unwrap the callable.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, Args> Invoke<Args> for Func<F>
where
    F: Invoke<Args>,
{
    type Output = F::Output;

    fn invoke(&mut self, args: Args) -> F::Output {
        self.0.invoke(args)
    }
}

/// A callable that ignores its arguments, whatever their number and types, and returns a clone of
/// one fixed value.
///
/// # Examples
///
/// ```
/// use mg::functional::{ConstantFunc, Invoke};
///
/// let mut two = ConstantFunc::new(2);
/// assert_eq!(two.invoke(()), 2);
/// assert_eq!(two.invoke((1, 5, 3.4, "")), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstantFunc<C>(C);

impl<C> ConstantFunc<C> {
    /// Create a callable always returning `value`.
    pub const fn new(value: C) -> Self {
        ConstantFunc(value)
    }

    /// The value returned by every call.
    pub fn value(&self) -> &C {
        &self.0
    }
}

impl<C: Clone, Args> Invoke<Args> for ConstantFunc<C> {
    type Output = C;

    fn invoke(&mut self, _: Args) -> C {
        self.0.clone()
    }
}

/// A wrapper that calls the callable it holds and discards the result.
///
/// Helpers that read a callable's result as a [`ContinueSignal`] accept only `bool`, `()` and
/// [`ControlFlow`] results. Wrapping a callable returning anything else in `Ignore` makes it
/// return `()`, so that it visits every position.
///
/// # Examples
///
/// ```
/// use mg::functional::{Ignore, Invoke};
/// use std::collections::HashMap;
///
/// let mut map = HashMap::new();
/// let mut insert = Ignore::new(|k: &'static str, v: u8| map.insert(k, v));
/// insert.invoke(("a", 1));
/// insert.invoke(("a", 2));
/// drop(insert);
/// assert_eq!(map["a"], 2);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ignore<F>(F);

impl<F> Ignore<F> {
    /// Wrap a callable.
    pub const fn new(func: F) -> Self {
        Ignore(func)
    }

    /// Unwrap the callable.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, Args> Invoke<Args> for Ignore<F>
where
    F: Invoke<Args>,
{
    type Output = ();

    fn invoke(&mut self, args: Args) {
        let _ = self.0.invoke(args);
    }
}

/// Interpretation of a callable's result as a decision to keep iterating.
///
/// For a callable whose result means something else, see [`Ignore`].
///
/// `bool` means what it says, `()` (a callable with nothing to report) always continues, and a
/// [`ControlFlow`] continues unless it is [`Break`](ControlFlow::Break).
pub trait ContinueSignal {
    /// Whether iteration should go on.
    fn should_continue(self) -> bool;
}

impl ContinueSignal for bool {
    fn should_continue(self) -> bool {
        self
    }
}

impl ContinueSignal for () {
    fn should_continue(self) -> bool {
        true
    }
}

impl<B, C> ContinueSignal for ControlFlow<B, C> {
    fn should_continue(self) -> bool {
        matches!(self, ControlFlow::Continue(_))
    }
}
