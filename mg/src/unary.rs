//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! Every count this crate reasons about at compile time (the length of a tuple, an index into a
//! type sequence, the number of defaults a wrapped call needs) is one of these numbers, so that
//! arithmetic on counts is done by trait resolution instead of at runtime.

/// The number zero.
///
/// # Examples
///
/// ```
/// use mg::unary::{Unary, Z};
///
/// assert_eq!(Z::VALUE, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use mg::unary::{Unary, S, Z};
///
/// assert_eq!(<S<S<Z>>>::VALUE, 2);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number corresponding to the constant `N`.
///
/// Defined for every `N` up to 64.
///
/// # Examples
///
/// ```
/// use mg::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(UnaryOf<0>, Z);
/// assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Add two unary numbers at the type level.
///
/// # Examples
///
/// ```
/// use mg::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<0>) as Add>::Result, UnaryOf<0>);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<7>) as Add>::Result, UnaryOf<9>);
/// ```
pub trait Add: sealed::Pair {
    /// The result of the addition.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// The smaller of two unary numbers.
///
/// # Examples
///
/// ```
/// use mg::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<3>, UnaryOf<2>) as Min>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<5>) as Min>::Result, Z);
/// assert_type_eq_all!(<(UnaryOf<4>, UnaryOf<4>) as Min>::Result, UnaryOf<4>);
/// ```
pub trait Min: sealed::Pair {
    /// The result of the comparison.
    type Result: Unary;
}

impl<N: Unary> Min for (Z, N) {
    type Result = Z;
}

impl<N: Unary> Min for (S<N>, Z) {
    type Result = Z;
}

impl<N: Unary, M: Unary> Min for (S<N>, S<M>)
where
    (N, M): Min,
{
    type Result = S<<(N, M) as Min>::Result>;
}

/// Subtract the second of two unary numbers from the first.
///
/// Only defined when the result is a natural number, i.e. when the first is at least the second.
///
/// # Examples
///
/// ```
/// use mg::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<7>, UnaryOf<2>) as Sub>::Result, UnaryOf<5>);
/// assert_type_eq_all!(<(UnaryOf<3>, UnaryOf<3>) as Sub>::Result, Z);
/// ```
///
/// ```compile_fail
/// use mg::unary::*;
///
/// fn bad() -> <(UnaryOf<1>, UnaryOf<2>) as Sub>::Result { unimplemented!() }
/// ```
pub trait Sub: sealed::Pair {
    /// The result of the subtraction.
    type Result: Unary;
}

impl<N: Unary> Sub for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Sub for (S<N>, S<M>)
where
    (N, M): Sub,
{
    type Result = <(N, M) as Sub>::Result;
}

/// Assert that a unary number is strictly less than `N`.
///
/// # Examples
///
/// ```
/// use mg::unary::*;
///
/// fn ok() where UnaryOf<2>: LessThan<UnaryOf<5>> {}
/// ```
///
/// ```compile_fail
/// use mg::unary::*;
///
/// fn bad() where UnaryOf<4>: LessThan<UnaryOf<4>> {}
/// ```
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// Compare two unary numbers and select one of three types accordingly.
///
/// # Examples
///
/// ```
/// use mg::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u32);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Pair {
    /// `IfLess`, `IfEqual` or `IfGreater`, by how the first number compares to the second.
    type Result;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values to allow implementing traits on them.
#[allow(missing_debug_implementations, missing_copy_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// Conversion from a wrapped `usize` constant to its unary representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Conversion from a unary number back to a wrapped `usize` constant.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

mg_macro::generate_unary_conversion_impls!(64);

mod sealed {
    use super::*;

    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Pair {}
    impl<N: Unary, M: Unary> Pair for (N, M) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(<UnaryOf<5> as ToConstant>::AsConstant, Number<5>);
    assert_type_eq_all!(<(UnaryOf<6>, UnaryOf<9>) as Min>::Result, UnaryOf<6>);
    assert_type_eq_all!(<(UnaryOf<9>, UnaryOf<6>) as Sub>::Result, UnaryOf<3>);
    assert_type_eq_all!(<(UnaryOf<9>, Z) as Sub>::Result, UnaryOf<9>);
    assert_type_eq_all!(<(UnaryOf<3>, UnaryOf<8>) as Compare<(), bool, char>>::Result, ());
    assert_type_eq_all!(<(UnaryOf<8>, UnaryOf<8>) as Compare<(), bool, char>>::Result, bool);
    assert_type_eq_all!(<(UnaryOf<8>, UnaryOf<3>) as Compare<(), bool, char>>::Result, char);
    assert_impl_all!(UnaryOf<0>: LessThan<UnaryOf<1>>);
    assert_impl_all!(UnaryOf<31>: LessThan<UnaryOf<32>>);
    assert_not_impl_any!(UnaryOf<3>: LessThan<UnaryOf<3>>, LessThan<UnaryOf<2>>);

    #[test]
    fn values_match_constants() {
        assert_eq!(<UnaryOf<0>>::VALUE, 0);
        assert_eq!(<UnaryOf<1>>::VALUE, 1);
        assert_eq!(<UnaryOf<17>>::VALUE, 17);
        assert_eq!(<<(UnaryOf<20>, UnaryOf<22>) as Add>::Result as Unary>::VALUE, 42);
    }
}
