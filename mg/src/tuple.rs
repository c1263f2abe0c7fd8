//! Conversions back and forth between flat tuples like `(P, Q, R)` and their corresponding
//! inductive lists like `(P, (Q, (R, ())))`.
//!
//! Every algorithm in this crate walks tuples one element at a time by recursing on the inductive
//! form, but presents an external interface in terms of flat tuples, for readability. The traits
//! here convert between the two equivalent representations, at the type level and the value
//! level alike.
//!
//! At present, tuples up to size 32 are supported.

use crate::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
///
/// # Examples
///
/// ```
/// use mg::tuple::Tuple;
///
/// let list = (1, "two", 3.0).into_list();
/// assert_eq!(list, (1, ("two", (3.0, ()))));
/// ```
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Restructure this tuple into its inductive list, moving every element.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Flatten this list into its tuple, moving every element.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Take the length of a type-level list as a unary type-level number.
///
/// # Examples
///
/// ```
/// use mg::tuple::{HasLength, Tuple};
///
/// assert_eq!(<<(u8, u16, u32) as Tuple>::AsList as HasLength>::LEN, 3);
/// assert_eq!(<() as HasLength>::LEN, 0);
/// ```
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;

    /// The length of a type-level list, as a `usize`.
    const LEN: usize = <Self::Length as Unary>::VALUE;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Borrow every element of a tuple, producing a tuple of shared references.
///
/// # Examples
///
/// ```
/// use mg::tuple::TupleRefs;
///
/// let owned = (String::from("a"), 7);
/// let (s, n) = owned.as_refs();
/// assert_eq!((s.as_str(), *n), ("a", 7));
/// ```
pub trait TupleRefs<'a> {
    /// The tuple of `&'a` references to each element.
    type Refs: Tuple;

    /// Borrow each element in place.
    fn as_refs(&'a self) -> Self::Refs;
}

/// Mutably borrow every element of a tuple, producing a tuple of exclusive references.
///
/// # Examples
///
/// ```
/// use mg::tuple::TupleMuts;
///
/// let mut counts = (1, 2);
/// let (a, b) = counts.as_muts();
/// *a += 10;
/// *b += 20;
/// assert_eq!(counts, (11, 22));
/// ```
pub trait TupleMuts<'a> {
    /// The tuple of `&'a mut` references to each element.
    type Muts: Tuple;

    /// Mutably borrow each element in place.
    fn as_muts(&'a mut self) -> Self::Muts;
}

mg_macro::impl_tuples!(32);
