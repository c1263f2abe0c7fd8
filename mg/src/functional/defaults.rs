use std::fmt::Debug;

use super::{Invoke, Signature};
use crate::sequence::Concat;
use crate::tuple::{HasLength, List, Tuple};
use crate::unary::*;

/// A callable with default values for its trailing parameters.
///
/// `Sig` is the function pointer type of the wrapped callable, and `Providers` is a tuple of
/// *providers*: callables taking no arguments, each producing the default value for one of the
/// trailing parameters. The last provider supplies the last parameter, the one before it the
/// second-to-last, and so on.
///
/// Calling the wrapper with `received` arguments, when the wrapped callable takes `arity`
/// parameters and there are `count` providers, works like a call to a function with default
/// parameters:
///
/// - `required = arity - count` arguments must always be given;
/// - the providers at positions `received - required` up to `count` are each called once, in
///   order, and their results appended after the given arguments;
/// - the providers for parameters the caller did give are not called at all.
///
/// Providers are invoked afresh on every call; their results are never cached. Calling with
/// fewer than `required` or more than `arity` arguments does not compile.
///
/// # Examples
///
/// ```
/// use mg::functional::{FuncWithDefaults, Invoke};
///
/// fn greet(greeting: String, name: String) -> String {
///     format!("{}, {}!", greeting, name)
/// }
///
/// #[derive(Default)]
/// struct World;
///
/// impl Invoke<()> for World {
///     type Output = String;
///     fn invoke(&mut self, (): ()) -> String {
///         "world".to_string()
///     }
/// }
///
/// let mut greet = FuncWithDefaults::<fn(String, String) -> String, (World,)>::new(greet);
///
/// assert_eq!(greet.invoke(("Hello".to_string(),)), "Hello, world!");
/// assert_eq!(greet.invoke(("Hi".to_string(), "there".to_string())), "Hi, there!");
/// ```
///
/// Leaving out a parameter that has no default is a compile error:
///
/// ```compile_fail
/// # use mg::functional::{ConstantFunc, FuncWithDefaults, Invoke};
/// fn add(a: i32, b: i32) -> i32 { a + b }
///
/// let mut add = FuncWithDefaults::<fn(i32, i32) -> i32, (ConstantFunc<i32>,)>::with_providers(
///     add,
///     (ConstantFunc::new(1),),
/// );
/// add.invoke(());
/// ```
///
/// And so is passing more arguments than the callable takes:
///
/// ```compile_fail
/// # use mg::functional::{ConstantFunc, FuncWithDefaults, Invoke};
/// fn add(a: i32, b: i32) -> i32 { a + b }
///
/// let mut add = FuncWithDefaults::<fn(i32, i32) -> i32, (ConstantFunc<i32>,)>::with_providers(
///     add,
///     (ConstantFunc::new(1),),
/// );
/// add.invoke((1, 2, 3));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "Sig: Debug"),
    Clone(bound = "Sig: Clone, Providers::AsList: Clone"),
    Copy(bound = "Sig: Copy, Providers::AsList: Copy")
)]
pub struct FuncWithDefaults<Sig, Providers: Tuple> {
    func: Sig,
    #[derivative(Debug = "ignore")]
    providers: Providers::AsList,
}

impl<Sig: Signature, Providers: Tuple + Default> FuncWithDefaults<Sig, Providers> {
    /// Wrap `func`, default-constructing every provider once, here.
    pub fn new(func: Sig) -> Self {
        Self::with_providers(func, Providers::default())
    }
}

impl<Sig: Signature, Providers: Tuple> FuncWithDefaults<Sig, Providers> {
    /// Wrap `func` together with already constructed providers.
    ///
    /// This allows providers that are not [`Default`], such as closures.
    pub fn with_providers(func: Sig, providers: Providers) -> Self {
        FuncWithDefaults {
            func,
            providers: providers.into_list(),
        }
    }

    /// The wrapped callable.
    pub fn func(&self) -> &Sig {
        &self.func
    }
}

/// The number of leading providers a call skips, because the caller gave those arguments
/// explicitly.
///
/// `Self` is the number of arguments received plus the number of providers, and `Arity` is the
/// number of parameters of the wrapped callable; the offset is their difference.
#[diagnostic::on_unimplemented(
    message = "too few arguments: even with every default supplied, the call is missing parameters",
    label = "arguments given plus defaults available is `{Self}`, fewer than the arity `{Arity}`"
)]
pub trait DefaultOffset<Arity: Unary>: Unary {
    /// The index of the first provider to invoke.
    type Offset: Unary;
}

impl<N: Unary> DefaultOffset<Z> for N {
    type Offset = N;
}

impl<N: Unary, M: Unary> DefaultOffset<S<M>> for S<N>
where
    N: DefaultOffset<M>,
{
    type Offset = N::Offset;
}

/// A list of providers, of which all from index `Offset` onward can be invoked.
#[diagnostic::on_unimplemented(
    message = "too many arguments: the call gives more arguments than the callable has parameters",
    label = "no parameter is left for some of these arguments"
)]
pub trait Provide<Offset: Unary> {
    /// The list of provided values.
    type Output;

    /// Invoke the providers from `Offset` onward, in order.
    fn provide(&mut self) -> Self::Output;
}

impl Provide<Z> for () {
    type Output = ();

    fn provide(&mut self) {}
}

impl<P, Ps> Provide<Z> for (P, Ps)
where
    P: Invoke<()>,
    Ps: Provide<Z>,
{
    type Output = (P::Output, Ps::Output);

    fn provide(&mut self) -> Self::Output {
        let value = self.0.invoke(());
        (value, self.1.provide())
    }
}

impl<P, Ps, N: Unary> Provide<S<N>> for (P, Ps)
where
    Ps: Provide<N>,
{
    type Output = Ps::Output;

    fn provide(&mut self) -> Self::Output {
        self.1.provide()
    }
}

type Len<L> = <L as HasLength>::Length;

/// The offset of the first provider a call with the argument list `A` invokes.
type OffsetOf<Sig, A, Ps> =
    <<(Len<A>, Len<Ps>) as Add>::Result as DefaultOffset<<Sig as Signature>::Arity>>::Offset;

/// The full argument list of a call with the argument list `A`: `A` followed by the defaults.
type Completed<Sig, A, Ps> = <A as Concat<<Ps as Provide<OffsetOf<Sig, A, Ps>>>::Output>>::Output;

impl<Sig, Providers, Args> Invoke<Args> for FuncWithDefaults<Sig, Providers>
where
    Sig: Signature,
    Providers: Tuple,
    Providers::AsList: HasLength + Provide<OffsetOf<Sig, Args::AsList, Providers::AsList>>,
    Args: Tuple,
    Args::AsList: HasLength
        + Concat<
            <Providers::AsList as Provide<OffsetOf<Sig, Args::AsList, Providers::AsList>>>::Output,
        >,
    (Len<Args::AsList>, Len<Providers::AsList>): Add,
    <(Len<Args::AsList>, Len<Providers::AsList>) as Add>::Result: DefaultOffset<Sig::Arity>,
    Completed<Sig, Args::AsList, Providers::AsList>: List,
    Sig: Invoke<<Completed<Sig, Args::AsList, Providers::AsList> as List>::AsTuple>,
{
    type Output =
        <Sig as Invoke<<Completed<Sig, Args::AsList, Providers::AsList> as List>::AsTuple>>::Output;

    fn invoke(&mut self, args: Args) -> Self::Output {
        let defaults = self.providers.provide();
        let full = args.into_list().concat(defaults).into_tuple();
        self.func.invoke(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::ConstantFunc;
    use std::cell::Cell;
    use std::rc::Rc;

    fn scale(value: i64, factor: i64, offset: i64) -> i64 {
        value * factor + offset
    }

    #[derive(Default)]
    struct Ten;

    impl Invoke<()> for Ten {
        type Output = i64;

        fn invoke(&mut self, (): ()) -> i64 {
            10
        }
    }

    #[test]
    fn defaults_fill_trailing_parameters() {
        let mut f = FuncWithDefaults::<fn(i64, i64, i64) -> i64, (Ten, Ten)>::new(scale);

        assert_eq!(f.invoke((2i64,)), 2 * 10 + 10);
        assert_eq!(f.invoke((2i64, 3i64)), 2 * 3 + 10);
        assert_eq!(f.invoke((2i64, 3i64, 4i64)), 2 * 3 + 4);
    }

    #[test]
    fn only_uncovered_providers_run() {
        let calls = Rc::new(Cell::new(0));
        let counted = {
            let calls = Rc::clone(&calls);
            move || {
                calls.set(calls.get() + 1);
                5i64
            }
        };
        let mut f = FuncWithDefaults::<fn(i64, i64) -> i64, _>::with_providers(
            |a, b| a - b,
            (counted,),
        );

        assert_eq!(f.invoke((8i64,)), 3);
        assert_eq!(calls.get(), 1);

        assert_eq!(f.invoke((8i64, 1i64)), 7);
        assert_eq!(calls.get(), 1);

        assert_eq!(f.invoke((9i64,)), 4);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn providers_run_in_parameter_order() {
        let order = Rc::new(Cell::new(0));
        let next = |order: &Rc<Cell<u32>>| {
            let order = Rc::clone(order);
            move || {
                order.set(order.get() + 1);
                order.get()
            }
        };
        let mut f = FuncWithDefaults::<fn(u32, u32, u32) -> (u32, u32, u32), _>::with_providers(
            |a, b, c| (a, b, c),
            (next(&order), next(&order), next(&order)),
        );

        assert_eq!(f.invoke(()), (1, 2, 3));
        assert_eq!(f.invoke((0u32,)), (0, 4, 5));
    }

    #[test]
    fn no_providers_is_a_plain_call() {
        let mut f = FuncWithDefaults::<fn(i64, i64, i64) -> i64, ()>::new(scale);
        assert_eq!(f.invoke((1i64, 2i64, 3i64)), 5);
    }

    #[test]
    fn constant_providers() {
        let mut f = FuncWithDefaults::<fn(String, usize) -> String, (ConstantFunc<usize>,)>::new(
            |s: String, n: usize| s.repeat(n),
        );
        assert_eq!(f.invoke(("ab".to_string(),)), "");
        assert_eq!(f.invoke(("ab".to_string(), 2usize)), "abab");
    }
}
