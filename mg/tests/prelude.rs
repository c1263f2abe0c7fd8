use mg::prelude::*;
use static_assertions::assert_type_eq_all;
use std::cell::Cell;
use std::ops::ControlFlow;

assert_type_eq_all!(
    Concatenated<Sliced<Seq<(u8, u16, u32, u64)>, 1, 2>, Seq<(char,)>>,
    Seq<(u16, u32, char)>
);
assert_type_eq_all!(Sliced<Seq<(u8, u16)>, 2, 5>, Seq<()>);

const EVENS: [usize; 4] = index_offset_sequence!(0, 8, 2);

#[test]
fn offset_sequences_are_constants() {
    assert_eq!(EVENS, [0, 2, 4, 6]);
    assert_eq!(offset_sequence!(i32; 1, 3), [1, 2]);
    assert_eq!(index_offset_sequence!(4, 10, 2), [4, 6, 8]);
}

#[test]
fn offset_sequence_bounds_from_caller_consts() {
    const MIN: usize = 1;
    const MAX: usize = 5;
    const STRIDE: usize = 2;
    assert_eq!(mg::index_offset_sequence!(0, MAX), [0, 1, 2, 3, 4]);
    assert_eq!(mg::index_offset_sequence!(MIN, MAX, STRIDE), [1, 3]);
}

#[test]
fn stride_sums() {
    let mut total = 0;
    iter_n::<1, _, _>(|a: i32| total += a, (1, 2, 3, 4));
    assert_eq!(total, 10);

    let mut total = 0;
    iter_n::<2, _, _>(|a: i32, b: i32| total += a * b, (1, 2, 3, 4));
    assert_eq!(total, 14);

    let mut total = 0;
    iter_n::<3, _, _>(|a: i32, b: i32, c: i32| total += a * b - c, (1, 2, 3, 4, 5, 6));
    assert_eq!(total, 13);
}

#[test]
fn zipping_mutable_views() {
    let mut left = (1, 2, 3);
    let right = (10, 20, 30, 40);

    assert!(iter_zipped_tuples(
        |l: &mut i32, r: &i32| *l += *r,
        (left.as_muts(), right.as_refs())
    ));
    assert_eq!(left, (11, 22, 33));
}

#[test]
fn zipping_uneven_tuples_with_early_exit() {
    let mut visited = Vec::new();
    let finished = iter_zipped_tuples(
        |a: i32, b: i32| {
            visited.push((a, b));
            if a + b > 6 {
                ControlFlow::Break(a + b)
            } else {
                ControlFlow::Continue(())
            }
        },
        ((1, 4), (2, 5, 7)),
    );
    assert!(!finished);
    assert_eq!(visited, [(1, 2), (4, 5)]);
}

#[test]
fn defaults_are_provided_per_call() {
    fn describe(name: String, count: u32) -> String {
        format!("{} x{}", name, count)
    }

    let provided = Cell::new(0u32);
    let next = || {
        provided.set(provided.get() + 1);
        provided.get()
    };
    let mut f = FuncWithDefaults::<fn(String, u32) -> String, _>::with_providers(describe, (next,));

    assert_eq!(f.invoke(("a".to_string(),)), "a x1");
    assert_eq!(f.invoke(("b".to_string(), 9u32)), "b x9");
    assert_eq!(f.invoke(("c".to_string(),)), "c x2");
    assert_eq!(provided.get(), 2);
}

#[test]
fn wrappers_compose() {
    let mut constant = Func::new(ConstantFunc::new("fixed"));
    assert_eq!(constant.invoke(()), "fixed");
    assert_eq!(constant.invoke((1, 'x', vec![2.0])), "fixed");

    let doubled = tuple_map((1u8, 2u8), |x: u8| u16::from(x) * 2);
    assert_eq!(doubled, (2u16, 4u16));
}

#[test]
fn uniqueness_and_powers() {
    let names = vec!["ada", "grace", "barbara"];
    assert!(all_unique(&names));
    assert!(!all_unique(names.iter().chain(names.first())));
    assert!(all_unique_by(
        &names,
        |n: &&str| n.len() as u64,
        |a: &&str, b: &&str| a == b
    ));

    assert_eq!(whole_pow(8, 2), Ok(64));
    assert_eq!(whole_pow(-2, 4), Err(PowError::NegativeBase));
}
