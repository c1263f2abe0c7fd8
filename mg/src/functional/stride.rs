use super::Invoke;
use crate::tuple::Tuple;

/// A stride for [`iter_n`]: the number of consecutive arguments passed to each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stride<const N: usize>;

/// The strides [`iter_n`] supports.
#[diagnostic::on_unimplemented(
    message = "`iter_n` does not support a stride of {Self}",
    label = "only strides of 1, 2 and 3 are supported"
)]
pub trait SupportedStride: sealed::SupportedStride {}

impl SupportedStride for Stride<1> {}
impl SupportedStride for Stride<2> {}
impl SupportedStride for Stride<3> {}

mod sealed {
    use super::Stride;

    pub trait SupportedStride {}
    impl SupportedStride for Stride<1> {}
    impl SupportedStride for Stride<2> {}
    impl SupportedStride for Stride<3> {}
}

/// An inductive list of arguments that splits evenly into chunks of the stride `St`, each of which
/// `F` accepts.
#[diagnostic::on_unimplemented(
    message = "the arguments `{Self}` cannot be split into calls of `{F}` with {St}",
    label = "the number of arguments must be a multiple of the stride, and every chunk a valid call"
)]
pub trait Chunks<St, F> {
    /// Call `f` once per chunk, in order.
    fn for_each_chunk(self, f: &mut F);
}

impl<St, F> Chunks<St, F> for () {
    fn for_each_chunk(self, _: &mut F) {}
}

impl<F, A, Rest> Chunks<Stride<1>, F> for (A, Rest)
where
    F: Invoke<(A,)>,
    Rest: Chunks<Stride<1>, F>,
{
    fn for_each_chunk(self, f: &mut F) {
        let (a, rest) = self;
        let _ = f.invoke((a,));
        rest.for_each_chunk(f);
    }
}

impl<F, A, B, Rest> Chunks<Stride<2>, F> for (A, (B, Rest))
where
    F: Invoke<(A, B)>,
    Rest: Chunks<Stride<2>, F>,
{
    fn for_each_chunk(self, f: &mut F) {
        let (a, (b, rest)) = self;
        let _ = f.invoke((a, b));
        rest.for_each_chunk(f);
    }
}

impl<F, A, B, C, Rest> Chunks<Stride<3>, F> for (A, (B, (C, Rest)))
where
    F: Invoke<(A, B, C)>,
    Rest: Chunks<Stride<3>, F>,
{
    fn for_each_chunk(self, f: &mut F) {
        let (a, (b, (c, rest))) = self;
        let _ = f.invoke((a, b, c));
        rest.for_each_chunk(f);
    }
}

/// Call `f` on consecutive, non-overlapping groups of `N` arguments, in order, discarding the
/// results.
///
/// `f` is called `len / N` times, where `len` is the number of arguments; with no arguments it is
/// never called. The number of arguments must be a multiple of `N`, and `N` must be 1, 2 or 3.
///
/// # Examples
///
/// ```
/// use mg::functional::iter_n;
///
/// let mut sum = 0;
/// iter_n::<2, _, _>(|a: i32, b: i32| sum += a * b, (1, 2, 3, 4));
/// assert_eq!(sum, 14);
/// ```
///
/// Arguments that do not split evenly do not compile:
///
/// ```compile_fail
/// use mg::functional::iter_n;
///
/// iter_n::<2, _, _>(|a: i32, b: i32| drop(a + b), (1, 2, 3));
/// ```
///
/// Nor do unsupported strides:
///
/// ```compile_fail
/// use mg::functional::iter_n;
///
/// iter_n::<4, _, _>(|a: i32, b: i32, c: i32, d: i32| drop(a + b + c + d), (1, 2, 3, 4));
/// ```
pub fn iter_n<const N: usize, F, Args>(mut f: F, args: Args)
where
    Stride<N>: SupportedStride,
    Args: Tuple,
    Args::AsList: Chunks<Stride<N>, F>,
{
    args.into_list().for_each_chunk(&mut f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Stride<1>: SupportedStride);
    assert_impl_all!(Stride<3>: SupportedStride);
    assert_not_impl_any!(Stride<0>: SupportedStride);
    assert_not_impl_any!(Stride<4>: SupportedStride);

    #[test]
    fn stride_one_visits_every_argument() {
        let mut sum = 0;
        iter_n::<1, _, _>(|a: i32| sum += a, (1, 2, 3, 4));
        assert_eq!(sum, 10);
    }

    #[test]
    fn stride_two_pairs_up_arguments() {
        let mut sum = 0;
        iter_n::<2, _, _>(|a: i32, b: i32| sum += a * b, (1, 2, 3, 4));
        assert_eq!(sum, 14);
    }

    #[test]
    fn stride_three() {
        let mut sum = 0;
        iter_n::<3, _, _>(|a: i32, b: i32, c: i32| sum += a * b - c, (1, 2, 3, 4, 5, 6));
        assert_eq!(sum, 13);
    }

    #[test]
    fn no_arguments_no_calls() {
        let mut calls = 0;
        iter_n::<2, _, _>(|_: i32, _: i32| calls += 1, ());
        assert_eq!(calls, 0);
    }

    #[test]
    fn chunks_arrive_in_order_and_may_mix_types() {
        let mut seen = Vec::new();
        iter_n::<2, _, _>(
            |name: &str, n: u8| seen.push(format!("{}={}", name, n)),
            ("a", 1u8, "b", 2u8, "c", 3u8),
        );
        assert_eq!(seen, ["a=1", "b=2", "c=3"]);
    }
}
