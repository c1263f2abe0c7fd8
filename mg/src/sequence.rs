//! Ordered sequences of types and of integer constants, built at compile time.
//!
//! A type sequence is an inductive list (see [`tuple`](crate::tuple)); [`Seq`] spells one from a
//! flat tuple. Concatenation, slicing and indexing are type-level functions over those lists, and
//! every one of them preserves element order.
//!
//! Integer sequences are constant arrays computed by const evaluation; see [`offset_sequence!`](crate::offset_sequence).

use crate::tuple::Tuple;
use crate::unary::*;

/// The type sequence holding the element types of the tuple `T`, in order.
pub type Seq<T> = <T as Tuple>::AsList;

/// Append one sequence to another: all of `Self`, then all of `Rhs`.
///
/// This is also available at the value level, where it moves every element of both lists into the
/// result.
///
/// # Examples
///
/// ```
/// use mg::sequence::{Concat, Concatenated, Seq};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Concatenated<Seq<(u8, u16)>, Seq<(u32,)>>, Seq<(u8, u16, u32)>);
/// assert_type_eq_all!(Concatenated<Seq<()>, Seq<(bool,)>>, Seq<(bool,)>);
///
/// assert_eq!((1, ()).concat((2, (3, ()))), (1, (2, (3, ()))));
/// ```
pub trait Concat<Rhs> {
    /// The combined sequence.
    type Output;

    /// Concatenate two lists of values.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Concat<Rhs> for () {
    type Output = Rhs;

    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<T, Ts: Concat<Rhs>, Rhs> Concat<Rhs> for (T, Ts) {
    type Output = (T, Ts::Output);

    fn concat(self, rhs: Rhs) -> Self::Output {
        let (head, tail) = self;
        (head, tail.concat(rhs))
    }
}

/// The concatenation of the sequences `A` and `B`.
pub type Concatenated<A, B> = <A as Concat<B>>::Output;

/// Drop the first `N` elements of a sequence, or all of them if it has fewer than `N`.
pub trait Skip<N: Unary> {
    /// The remaining sequence.
    type Output;
}

impl<N: Unary> Skip<N> for () {
    type Output = ();
}

impl<T, Ts> Skip<Z> for (T, Ts) {
    type Output = (T, Ts);
}

impl<T, Ts: Skip<N>, N: Unary> Skip<S<N>> for (T, Ts) {
    type Output = Ts::Output;
}

/// Keep only the first `N` elements of a sequence, or all of them if it has fewer than `N`.
pub trait Take<N: Unary> {
    /// The retained sequence.
    type Output;
}

impl<N: Unary> Take<N> for () {
    type Output = ();
}

impl<T, Ts> Take<Z> for (T, Ts) {
    type Output = ();
}

impl<T, Ts: Take<N>, N: Unary> Take<S<N>> for (T, Ts) {
    type Output = (T, Ts::Output);
}

/// At most `Count` elements of a sequence, starting at index `Start`.
///
/// Slicing never fails: a `Start` at or beyond the end, or a `Count` of zero, gives the empty
/// sequence, and a `Count` reaching past the end is clamped to the elements that exist.
///
/// # Examples
///
/// ```
/// use mg::sequence::{Seq, Sliced};
/// use static_assertions::assert_type_eq_all;
///
/// type Abc = Seq<(char, bool, u8)>;
///
/// assert_type_eq_all!(Sliced<Abc, 1, 1>, Seq<(bool,)>);
/// assert_type_eq_all!(Sliced<Abc, 1, 10>, Seq<(bool, u8)>);
/// assert_type_eq_all!(Sliced<Abc, 3, 1>, Seq<()>);
/// assert_type_eq_all!(Sliced<Abc, 0, 0>, Seq<()>);
/// ```
pub trait Slice<Start: Unary, Count: Unary> {
    /// The selected elements.
    type Output;
}

impl<L, Start: Unary, Count: Unary> Slice<Start, Count> for L
where
    L: Skip<Start>,
    L::Output: Take<Count>,
{
    type Output = <L::Output as Take<Count>>::Output;
}

/// At most `COUNT` elements of the sequence `L`, starting at index `START`.
pub type Sliced<L, const START: usize, const COUNT: usize> =
    <L as Slice<UnaryOf<START>, UnaryOf<COUNT>>>::Output;

/// The element at index `N` of a sequence.
///
/// Unlike [`Slice`], indexing out of range is an error.
///
/// ```compile_fail
/// use mg::sequence::{Nth, Seq};
/// use mg::unary::UnaryOf;
///
/// type Oops = <Seq<(u8, u16)> as Nth<UnaryOf<2>>>::Output;
/// let _: Oops = 0;
/// ```
#[diagnostic::on_unimplemented(
    message = "index `{N}` is out of range for the type sequence `{Self}`",
    label = "no element at this index"
)]
pub trait Nth<N: Unary> {
    /// The selected element type.
    type Output;
}

impl<T, Ts> Nth<Z> for (T, Ts) {
    type Output = T;
}

impl<T, Ts: Nth<N>, N: Unary> Nth<S<N>> for (T, Ts) {
    type Output = Ts::Output;
}

/// The element at index `N` of the sequence `L`.
pub type NthOf<L, const N: usize> = <L as Nth<UnaryOf<N>>>::Output;

/// A constant array of the integers `MIN, MIN + STRIDE, MIN + 2 * STRIDE, ...`, stopping before
/// the first value that is not below `MAX`.
///
/// The syntax is `offset_sequence!(T; MIN, MAX)` or `offset_sequence!(T; MIN, MAX, STRIDE)`, where
/// `T` is a primitive integer type and the bounds are constant expressions. `STRIDE` defaults to
/// 1. If `MIN >= MAX` the array is empty. The whole sequence, including its length, is computed
/// during compilation.
///
/// # Examples
///
/// ```
/// use mg::offset_sequence;
///
/// assert_eq!(offset_sequence!(i32; 1, 3), [1, 2]);
/// assert_eq!(offset_sequence!(i32; -1, 5), [-1, 0, 1, 2, 3, 4]);
/// assert_eq!(offset_sequence!(u8; 0, 10, 4), [0, 4, 8]);
/// assert_eq!(offset_sequence!(i32; 4, 4), [0i32; 0]);
/// assert_eq!(offset_sequence!(i32; 4, 3), [0i32; 0]);
/// ```
///
/// A stride that is not positive would never reach `MAX`, and is rejected during compilation:
///
/// ```compile_fail
/// use mg::offset_sequence;
///
/// let _ = offset_sequence!(i32; 0, 5, 0);
/// ```
#[macro_export]
macro_rules! offset_sequence {
    ($t:ty; $min:expr, $max:expr, $stride:expr) => {{
        const __MG_OFFSET_MIN: $t = $min;
        const __MG_OFFSET_MAX: $t = $max;
        const __MG_OFFSET_STRIDE: $t = $stride;
        const __MG_OFFSET_LEN: usize = {
            assert!(__MG_OFFSET_STRIDE > 0, "the stride of an offset sequence must be positive");
            let mut len = 0usize;
            let mut next = __MG_OFFSET_MIN;
            while next < __MG_OFFSET_MAX {
                len += 1;
                next = match next.checked_add(__MG_OFFSET_STRIDE) {
                    Some(next) => next,
                    None => break,
                };
            }
            len
        };
        const __MG_OFFSET_SEQUENCE: [$t; __MG_OFFSET_LEN] = {
            let mut sequence = [__MG_OFFSET_MIN; __MG_OFFSET_LEN];
            let mut next = __MG_OFFSET_MIN;
            let mut i = 0;
            while i < __MG_OFFSET_LEN {
                sequence[i] = next;
                next = next.wrapping_add(__MG_OFFSET_STRIDE);
                i += 1;
            }
            sequence
        };
        __MG_OFFSET_SEQUENCE
    }};
    ($t:ty; $min:expr, $max:expr) => {
        $crate::offset_sequence!($t; $min, $max, 1)
    };
}

/// The `usize` form of [`offset_sequence!`]: `index_offset_sequence!(__MG_OFFSET_MIN, __MG_OFFSET_MAX)` or
/// `index_offset_sequence!(__MG_OFFSET_MIN, __MG_OFFSET_MAX, __MG_OFFSET_STRIDE)`.
///
/// # Examples
///
/// ```
/// use mg::index_offset_sequence;
///
/// assert_eq!(index_offset_sequence!(4, 10, 2), [4, 6, 8]);
/// assert_eq!(index_offset_sequence!(0, 3), [0, 1, 2]);
/// ```
#[macro_export]
macro_rules! index_offset_sequence {
    ($min:expr, $max:expr $(, $stride:expr)?) => {
        $crate::offset_sequence!(usize; $min, $max $(, $stride)?)
    };
}
