//! Iteration over the elements of tuples, and uniqueness checks over collections.
//!
//! Tuples are heterogeneous, so a callable visiting their elements must accept a different
//! argument type at each position. Closures do this when every element has the same type; for
//! mixed element types, implement [`Invoke`] by hand once per element type.

use std::collections::hash_map::RandomState;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use tracing::{debug, trace};

use crate::functional::{ContinueSignal, Invoke};
use crate::tuple::{HasLength, List, Tuple};
use crate::unary::*;

/// An inductive list of flat tuples, which can be lined up for zipping.
///
/// `Length` is the length of the shortest tuple, or zero when the list is empty.
pub trait Zippable {
    /// The tuples, each converted to its inductive list.
    type Lists;
    /// The number of positions every tuple in the list has.
    type Length: Unary;

    /// Convert every tuple to its inductive list.
    fn into_lists(self) -> Self::Lists;
}

impl Zippable for () {
    type Lists = ();
    type Length = Z;

    fn into_lists(self) {}
}

impl<T> Zippable for (T, ())
where
    T: Tuple,
    T::AsList: HasLength,
{
    type Lists = (T::AsList, ());
    type Length = <T::AsList as HasLength>::Length;

    fn into_lists(self) -> Self::Lists {
        (self.0.into_list(), ())
    }
}

impl<T, U, Us> Zippable for (T, (U, Us))
where
    T: Tuple,
    T::AsList: HasLength,
    (U, Us): Zippable,
    (<T::AsList as HasLength>::Length, <(U, Us) as Zippable>::Length): Min,
{
    type Lists = (T::AsList, <(U, Us) as Zippable>::Lists);
    type Length =
        <(<T::AsList as HasLength>::Length, <(U, Us) as Zippable>::Length) as Min>::Result;

    fn into_lists(self) -> Self::Lists {
        let (t, rest) = self;
        (t.into_list(), rest.into_lists())
    }
}

/// Split an inductive list of non-empty inductive lists into the list of their first elements and
/// the list of their remainders.
pub trait SplitHeads {
    /// The first element of every list.
    type Heads: List;
    /// Every list without its first element.
    type Tails;

    /// Take the first element off every list.
    fn split_heads(self) -> (Self::Heads, Self::Tails);
}

impl SplitHeads for () {
    type Heads = ();
    type Tails = ();

    fn split_heads(self) -> ((), ()) {
        ((), ())
    }
}

impl<H, Hs, Rest> SplitHeads for ((H, Hs), Rest)
where
    Rest: SplitHeads,
    (H, Rest::Heads): List,
{
    type Heads = (H, Rest::Heads);
    type Tails = (Hs, Rest::Tails);

    fn split_heads(self) -> (Self::Heads, Self::Tails) {
        let ((head, tail), rest) = self;
        let (heads, tails) = rest.split_heads();
        ((head, heads), (tail, tails))
    }
}

/// Call `F` on the first `N` positions of an inductive list of inductive lists, stopping as soon
/// as a call asks to.
pub trait ZipWith<N: Unary, F> {
    /// Returns `false` if a call asked to stop, `true` otherwise.
    fn zip_with(self, f: &mut F) -> bool;
}

impl<L, F> ZipWith<Z, F> for L {
    fn zip_with(self, _: &mut F) -> bool {
        true
    }
}

impl<L, F, N: Unary> ZipWith<S<N>, F> for L
where
    L: SplitHeads,
    F: Invoke<<L::Heads as List>::AsTuple>,
    F::Output: ContinueSignal,
    L::Tails: ZipWith<N, F>,
{
    fn zip_with(self, f: &mut F) -> bool {
        let (heads, tails) = self.split_heads();
        if !f.invoke(heads.into_tuple()).should_continue() {
            trace!(remaining = N::VALUE, "zipped iteration stopped early");
            return false;
        }
        tails.zip_with(f)
    }
}

/// Call `f` once per position shared by all the given tuples, passing the elements at that
/// position as separate arguments.
///
/// `tuples` is a tuple of tuples `(t1, t2, ..., tn)`. For every index `i` below the length of the
/// shortest of them, in increasing order, `f` receives `(t1.i, t2.i, ..., tn.i)`. Elements past the
/// end of the shortest tuple are dropped without being visited.
///
/// The result of `f` is read as a [`ContinueSignal`]: once a call returns `false` (or
/// [`ControlFlow::Break`](std::ops::ControlFlow::Break)), no further position is visited and the
/// function returns `false`. Otherwise it returns `true`, which includes the case where some tuple
/// (or the list of tuples) is empty and `f` is never called.
///
/// A callable returning any other type is not accepted as is. Wrap it in
/// [`Ignore`](crate::functional::Ignore) to discard its results and visit every position.
///
/// Elements are moved into `f`. To visit them by reference, pass
/// [`as_refs`](crate::tuple::TupleRefs::as_refs) or [`as_muts`](crate::tuple::TupleMuts::as_muts)
/// of each tuple.
///
/// # Examples
///
/// ```
/// use mg::collections::iter_zipped_tuples;
///
/// let mut sums = Vec::new();
/// let finished = iter_zipped_tuples(|a: i32, b: i32| sums.push(a + b), ((1, 2, 3), (10, 20)));
///
/// assert!(finished);
/// assert_eq!(sums, [11, 22]);
/// ```
///
/// Stopping early:
///
/// ```
/// use mg::collections::iter_zipped_tuples;
///
/// let mut seen = 0;
/// let finished = iter_zipped_tuples(
///     |a: u8, b: u8| {
///         seen += 1;
///         a != b
///     },
///     ((1, 2, 3, 4), (5, 2, 7, 8)),
/// );
///
/// assert!(!finished);
/// assert_eq!(seen, 2);
/// ```
///
/// Discarding results that are not continue signals:
///
/// ```
/// use mg::collections::iter_zipped_tuples;
/// use mg::functional::Ignore;
/// use std::collections::HashMap;
///
/// let mut map = HashMap::new();
/// let finished = iter_zipped_tuples(
///     Ignore::new(|k: &'static str, v: i32| map.insert(k, v)),
///     (("a", "b"), (1, 2)),
/// );
///
/// assert!(finished);
/// assert_eq!(map.len(), 2);
/// ```
pub fn iter_zipped_tuples<F, Tuples>(mut f: F, tuples: Tuples) -> bool
where
    Tuples: Tuple,
    Tuples::AsList: Zippable,
    <Tuples::AsList as Zippable>::Lists: ZipWith<<Tuples::AsList as Zippable>::Length, F>,
{
    let lists = tuples.into_list().into_lists();
    lists.zip_with(&mut f)
}

/// Apply `F` to every element of an inductive list, collecting the results into a new list.
pub trait MapEach<F> {
    /// The list of results.
    type Output: List;

    /// Apply `f` to each element, from first to last.
    fn map_each(self, f: &mut F) -> Self::Output;
}

impl<F> MapEach<F> for () {
    type Output = ();

    fn map_each(self, _: &mut F) {}
}

impl<F, T, Ts> MapEach<F> for (T, Ts)
where
    F: Invoke<(T,)>,
    Ts: MapEach<F>,
    (F::Output, Ts::Output): List,
{
    type Output = (F::Output, Ts::Output);

    fn map_each(self, f: &mut F) -> Self::Output {
        let (head, tail) = self;
        let head = f.invoke((head,));
        (head, tail.map_each(f))
    }
}

/// A new tuple of the same length as `tuple`, holding `f` applied to each of its elements.
///
/// `f` is called on the elements in order, by value, so it may consume them. Each result is
/// whatever `f` returns; if `f` returns a reference, the result holds that same reference.
///
/// # Examples
///
/// ```
/// use mg::collections::tuple_map;
///
/// assert_eq!(tuple_map((1, 2, 3), |x: i32| x * 10), (10, 20, 30));
///
/// let lengths = tuple_map((String::from("ab"), String::from("cde")), |s: String| s.len());
/// assert_eq!(lengths, (2, 3));
/// ```
pub fn tuple_map<T, F>(tuple: T, mut f: F) -> <<T::AsList as MapEach<F>>::Output as List>::AsTuple
where
    T: Tuple,
    T::AsList: MapEach<F>,
{
    tuple.into_list().map_each(&mut f).into_tuple()
}

/// Whether no two elements of `iter` are equal.
///
/// `iter` must yield references; the elements themselves are neither copied nor moved. The scan
/// stops at the first duplicate.
///
/// # Examples
///
/// ```
/// use mg::collections::all_unique;
///
/// assert!(all_unique(&[1, 2, 3]));
/// assert!(!all_unique(&vec!["a", "b", "a"]));
/// assert!(all_unique(&Vec::<u8>::new()));
/// ```
///
/// Iterators producing values rather than references are rejected:
///
/// ```compile_fail
/// use mg::collections::all_unique;
///
/// all_unique(0..3);
/// ```
pub fn all_unique<'a, I, T>(iter: I) -> bool
where
    I: IntoIterator<Item = &'a T>,
    T: Hash + Eq + ?Sized + 'a,
{
    all_unique_with_hasher(iter, RandomState::new())
}

/// [`all_unique`], hashing with the given [`BuildHasher`].
///
/// # Examples
///
/// ```
/// use mg::collections::all_unique_with_hasher;
/// use std::collections::hash_map::RandomState;
///
/// assert!(all_unique_with_hasher(&['x', 'y'], RandomState::new()));
/// ```
pub fn all_unique_with_hasher<'a, I, T, H>(iter: I, build_hasher: H) -> bool
where
    I: IntoIterator<Item = &'a T>,
    T: Hash + Eq + ?Sized + 'a,
    H: BuildHasher,
{
    let iter = iter.into_iter();
    let mut seen = HashSet::with_capacity_and_hasher(iter.size_hint().0, build_hasher);
    for (index, element) in iter.enumerate() {
        if !seen.insert(element) {
            debug!(index, "duplicate element found");
            return false;
        }
    }
    true
}

/// [`all_unique`] with a caller-supplied hash function and equivalence.
///
/// Elements are considered equal when `eq` says so. `hash` must give equal hashes for elements
/// `eq` considers equal; apart from that, collisions only cost time.
///
/// # Examples
///
/// ```
/// use mg::collections::all_unique_by;
///
/// let words = ["Apple", "banana", "APPLE"];
/// let hash = |w: &&str| w.len() as u64;
/// let eq = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
///
/// assert!(!all_unique_by(&words, hash, eq));
/// assert!(all_unique_by(&words[..2], hash, eq));
/// ```
pub fn all_unique_by<'a, I, T, Hf, Ef>(iter: I, hash: Hf, eq: Ef) -> bool
where
    I: IntoIterator<Item = &'a T>,
    T: ?Sized + 'a,
    Hf: Fn(&T) -> u64,
    Ef: Fn(&T, &T) -> bool,
{
    let mut buckets: HashMap<u64, Vec<&'a T>> = HashMap::new();
    for (index, element) in iter.into_iter().enumerate() {
        let bucket = buckets.entry(hash(element)).or_default();
        if bucket.iter().any(|other| eq(other, element)) {
            debug!(index, "duplicate element found");
            return false;
        }
        bucket.push(element);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::Ignore;
    use crate::tuple::TupleRefs;
    use std::cell::RefCell;
    use std::ops::ControlFlow;

    #[test]
    fn zip_visits_each_shared_position() {
        let mut rows = Vec::new();
        let finished = iter_zipped_tuples(
            |a: i32, b: i32, c: i32| rows.push((a, b, c)),
            ((1, 2, 3), (2, 4, 6), (3, 6, 9)),
        );

        assert!(finished);
        assert_eq!(rows, [(1, 2, 3), (2, 4, 6), (3, 6, 9)]);
        for (a, b, c) in rows {
            assert_eq!((b, c), (2 * a, 3 * a));
        }
    }

    #[test]
    fn zip_stops_at_the_shortest_tuple() {
        let mut pairs = Vec::new();
        assert!(iter_zipped_tuples(
            |a: i32, b: i32| pairs.push([a, b]),
            ((1, 2, 3), (4, 5))
        ));
        assert_eq!(pairs, [[1, 4], [2, 5]]);
    }

    #[test]
    fn zip_with_an_empty_tuple_never_calls() {
        let mut calls = 0;
        assert!(iter_zipped_tuples(
            |_: i32, _: ()| calls += 1,
            ((1, 2, 3), ())
        ));
        assert!(iter_zipped_tuples(|| calls += 1, ()));
        assert!(iter_zipped_tuples(
            |_: i32, _: i32, _: i32| calls += 1,
            ((1, 2, 3), (4, 5), ())
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn zip_collects_pairs_up_to_the_shortest() {
        let mut pairs = Vec::new();
        assert!(iter_zipped_tuples(
            |a: i32, b: i32| pairs.push((a, b)),
            ((1, 2, 3), (4, 5))
        ));
        assert_eq!(pairs, [(1, 4), (2, 5)]);
    }

    #[test]
    fn zip_ignoring_non_signal_results() {
        let mut calls = 0;
        let finished = iter_zipped_tuples(
            Ignore::new(|a: i32, b: i32| {
                calls += 1;
                a + b
            }),
            ((1, 2), (3, 4)),
        );
        assert!(finished);
        assert_eq!(calls, 2);
    }

    #[test]
    fn zip_early_stop() {
        let mut visited = Vec::new();
        let finished = iter_zipped_tuples(
            |a: i32| {
                visited.push(a);
                if a < 2 {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            },
            ((0, 1, 2, 3, 4),),
        );

        assert!(!finished);
        assert_eq!(visited, [0, 1, 2]);
    }

    struct Render(RefCell<Vec<String>>);

    impl<'s> Invoke<(i32, &'s str)> for &Render {
        type Output = bool;

        fn invoke(&mut self, (n, s): (i32, &'s str)) -> bool {
            self.0.borrow_mut().push(format!("{}:{}", n, s));
            true
        }
    }

    impl Invoke<(f64, char)> for &Render {
        type Output = bool;

        fn invoke(&mut self, (x, c): (f64, char)) -> bool {
            self.0.borrow_mut().push(format!("{}:{}", x, c));
            true
        }
    }

    #[test]
    fn zip_over_heterogeneous_positions() {
        let render = Render(RefCell::new(Vec::new()));
        assert!(iter_zipped_tuples(&render, ((7i32, 0.5f64), ("seven", 'h'))));
        assert_eq!(*render.0.borrow(), ["7:seven", "0.5:h"]);
    }

    #[test]
    fn zip_by_reference() {
        let left = (String::from("a"), String::from("b"));
        let right = (String::from("x"), String::from("y"));
        let mut joined = Vec::new();
        assert!(iter_zipped_tuples(
            |l: &String, r: &String| joined.push(format!("{}{}", l, r)),
            (left.as_refs(), right.as_refs()),
        ));
        assert_eq!(joined, ["ax", "by"]);
        assert_eq!(left.0, "a");
    }

    #[test]
    fn map_scales_every_element() {
        assert_eq!(tuple_map((1, 2, 3), |x: i32| x * 10), (10, 20, 30));
        let () = tuple_map((), |x: i32| x);
        assert_eq!(
            tuple_map((1, 10, 100, 1000), |x: i32| x * 10),
            (10, 100, 1000, 10000)
        );
    }

    #[test]
    fn map_consumes_owned_elements() {
        let owned = (String::from("left"), String::from("right"));
        let bytes = tuple_map(owned, String::into_bytes);
        assert_eq!(bytes, (b"left".to_vec(), b"right".to_vec()));
    }

    struct IntPair {
        first: i32,
        second: i32,
    }

    fn secondary(pair: &IntPair) -> &i32 {
        &pair.second
    }

    #[test]
    fn map_can_return_references_into_the_elements() {
        let a = IntPair { first: 1, second: 2 };
        let b = IntPair { first: 3, second: 4 };

        let (sa, sb) = tuple_map((&a, &b), secondary);

        assert!(std::ptr::eq(sa, &a.second));
        assert!(std::ptr::eq(sb, &b.second));
        assert_eq!(a.first + b.first, 4);
    }

    #[test]
    fn map_runs_in_order() {
        let mut order = Vec::new();
        let _ = tuple_map((3, 1, 2), |x: u8| order.push(x));
        assert_eq!(order, [3, 1, 2]);
    }

    #[test]
    fn unique_elements() {
        assert!(all_unique(&[1, 2, 3, 4]));
        assert!(!all_unique(&[1, 2, 3, 1]));
        assert!(!all_unique(&[0, 1, 2, 3, 4, 0]));
        assert!(all_unique(&[0u8; 0]));
        assert!(all_unique(&[42]));
        assert!(all_unique(["ab", "cd"].iter()));
        assert!(!all_unique(vec![String::from("s"), String::from("s")].iter()));
    }

    #[test]
    fn unique_borrowed_str_slices() {
        let words: Vec<&str> = "the quick brown fox".split(' ').collect();
        assert!(all_unique(words.iter().copied()));
    }

    #[test]
    fn unique_by_custom_equivalence() {
        let values = [10, 21, 32, 43];
        let by_last_digit = |a: &i32, b: &i32| a % 10 == b % 10;

        // Every element hashes alike, so equivalence alone decides.
        assert!(all_unique_by(&values, |_| 0, by_last_digit));
        assert!(!all_unique_by(&[10, 21, 30], |_| 0, by_last_digit));
        assert!(all_unique_by(&[0u8; 0], |_| 0, |_, _| true));
    }

    #[test]
    fn unique_with_hasher() {
        assert!(all_unique_with_hasher(&[1, 2], RandomState::new()));
        assert!(!all_unique_with_hasher(&[2, 2], RandomState::new()));
    }
}
