/*!
Compile-time utilities for tuples, type sequences and callables.

Rust has no variadic generics, but it does have tuples of any size, and trait resolution powerful
enough to compute with types. This crate uses both to offer, for tuples of up to 32 elements:

- **type sequences** ([`sequence`]): concatenating, slicing and indexing ordered lists of types,
  plus constant arrays of evenly spaced integers, all computed during compilation;
- **iteration over tuples** ([`collections`]): calling a function on the elements of several
  tuples in lockstep with [`iter_zipped_tuples`], or on each element of one with [`tuple_map`];
- **argument adaptors** ([`functional`]): splitting an argument list into fixed-size calls with
  [`iter_n`], and giving a function defaults for its trailing parameters with
  [`FuncWithDefaults`];
- and a few runtime helpers: [`all_unique`] checks a collection for duplicate elements and
  [`whole_pow`] raises whole numbers to whole powers.

Everything that can be a compile error is one. Calling [`iter_n`] with an argument count that does
not divide evenly, or a [`FuncWithDefaults`] with too few arguments, is rejected by the compiler
with a message saying so, rather than failing at runtime.

# Callables

Every function in this crate that takes a callable calls it through the [`Invoke`] trait, which
passes all the arguments together as a single flat tuple. Closures and functions implement
[`Invoke`] automatically. A callable that must accept differently-typed arguments (for instance,
to visit the elements of a tuple whose types differ) is written by implementing [`Invoke`] once per
argument type:

```
use mg::prelude::*;

struct Show;

impl Invoke<(u8,)> for Show {
    type Output = String;
    fn invoke(&mut self, (n,): (u8,)) -> String {
        format!("{}u8", n)
    }
}

impl Invoke<(bool,)> for Show {
    type Output = String;
    fn invoke(&mut self, (b,): (bool,)) -> String {
        b.to_string()
    }
}

assert_eq!(tuple_map((7u8, true), Show), ("7u8".to_string(), "true".to_string()));
```

# Representation

Internally, tuples are processed as inductive lists: `(A, B, C)` becomes `(A, (B, (C, ())))`, and
counts are unary type-level numbers. The [`tuple`] and [`unary`] modules provide these
representations; most users will never name them directly.

The **[`prelude`]** module exports the functions and traits needed for everyday use.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod collections;
pub mod error;
pub mod functional;
pub mod math;
pub mod sequence;
pub mod tuple;
pub mod unary;

pub use collections::{all_unique, all_unique_by, iter_zipped_tuples, tuple_map};
pub use error::PowError;
pub use functional::{iter_n, ConstantFunc, Func, FuncWithDefaults, Ignore, Invoke, Signature};
pub use math::whole_pow;

/// The prelude module for quickly getting started with this crate.
///
/// This module is designed to be imported as `use mg::prelude::*;`, which brings into scope the
/// functions, wrappers and traits you need for everyday use.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::collections::{
        all_unique, all_unique_by, all_unique_with_hasher, iter_zipped_tuples, tuple_map,
    };
    #[doc(no_inline)]
    pub use crate::functional::{
        iter_n, ConstantFunc, ContinueSignal, Func, FuncWithDefaults, Ignore, Invoke, Signature,
    };
    #[doc(no_inline)]
    pub use crate::math::whole_pow;
    #[doc(no_inline)]
    pub use crate::sequence::{Concatenated, Seq, Sliced};
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple, TupleMuts, TupleRefs};
    #[doc(no_inline)]
    pub use crate::{index_offset_sequence, offset_sequence, PowError};
}
