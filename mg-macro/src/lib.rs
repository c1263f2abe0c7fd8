//! Code generation for the `mg` crate.
//!
//! Rust has no variadic generics, so every trait `mg` implements "for all tuples" or "for all
//! closures" is implemented once per arity. The macros here write those impls out up to a given
//! maximum arity. They are invoked from inside `mg` and refer to its traits by their bare names,
//! which must be in scope at the invocation site.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, Span, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::{parse_macro_input, Ident, LitInt, Lifetime},
};

/// Implement `Tuple`, `List`, `TupleRefs` and `TupleMuts` for every tuple arity from zero up to
/// and including the given bound.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    expand_up_to(input, tuple_impls)
}

/// Implement `Invoke` for every `FnMut` and `Signature` for every `fn` pointer type, for each arity
/// from zero up to and including the given bound.
#[proc_macro]
pub fn impl_callables(input: TokenStream) -> TokenStream {
    expand_up_to(input, callable_impls)
}

/// Implement `ToUnary` for `Number<N>` and `ToConstant` for the matching unary type, for each `N`
/// from zero up to and including the given bound.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    expand_up_to(input, unary_conversion_impls)
}

fn expand_up_to(input: TokenStream, generate: fn(usize) -> TokenStream2) -> TokenStream {
    let bound = parse_macro_input!(input as LitInt);
    let max = match bound.base10_parse::<usize>() {
        Ok(max) => max,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut output = TokenStream2::new();
    for arity in 0..=max {
        output.extend(generate(arity));
    }
    output.into()
}

fn numbered(prefix: &str, count: usize) -> Vec<Ident> {
    (0..count).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

/// Nest items into an inductive list: `a, b, c` becomes `(a, (b, (c, ())))`.
fn nested(items: &[Ident]) -> TokenStream2 {
    items
        .iter()
        .rev()
        .fold(quote!(()), |tail, head| quote!((#head, #tail)))
}

/// The unary spelling of `n`: `S<S<...<Z>>>` with `n` successors.
fn unary(n: usize) -> TokenStream2 {
    (0..n).fold(quote!(Z), |inner, _| quote!(S<#inner>))
}

fn tuple_impls(arity: usize) -> TokenStream2 {
    let types = numbered("T", arity);
    let values = numbered("t", arity);
    let list_type = nested(&types);
    let list_value = nested(&values);
    let lt = Lifetime::new("'a", Span::call_site());

    quote! {
        impl<#(#types),*> Tuple for (#(#types,)*) {
            type AsList = #list_type;

            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let (#(#values,)*) = self;
                #list_value
            }
        }

        impl<#(#types),*> List for #list_type {
            type AsTuple = (#(#types,)*);

            #[allow(clippy::unused_unit)]
            fn into_tuple(self) -> Self::AsTuple {
                let #list_value = self;
                (#(#values,)*)
            }
        }

        impl<#lt, #(#types: #lt),*> TupleRefs<#lt> for (#(#types,)*) {
            type Refs = (#(&#lt #types,)*);

            #[allow(clippy::unused_unit)]
            fn as_refs(&#lt self) -> Self::Refs {
                let (#(#values,)*) = self;
                (#(#values,)*)
            }
        }

        impl<#lt, #(#types: #lt),*> TupleMuts<#lt> for (#(#types,)*) {
            type Muts = (#(&#lt mut #types,)*);

            #[allow(clippy::unused_unit)]
            fn as_muts(&#lt mut self) -> Self::Muts {
                let (#(#values,)*) = self;
                (#(#values,)*)
            }
        }
    }
}

fn callable_impls(arity: usize) -> TokenStream2 {
    let args = numbered("A", arity);
    let values = numbered("a", arity);
    let arity_type = unary(arity);

    quote! {
        impl<Fun, Ret, #(#args),*> Invoke<(#(#args,)*)> for Fun
        where
            Fun: FnMut(#(#args),*) -> Ret,
        {
            type Output = Ret;

            fn invoke(&mut self, (#(#values,)*): (#(#args,)*)) -> Ret {
                (*self)(#(#values),*)
            }
        }

        impl<Ret, #(#args),*> Signature for fn(#(#args),*) -> Ret {
            type Params = (#(#args,)*);
            type Output = Ret;
            type Arity = #arity_type;
        }
    }
}

fn unary_conversion_impls(n: usize) -> TokenStream2 {
    let value = Literal::usize_unsuffixed(n);
    let unary = unary(n);

    quote! {
        impl ToUnary for Number<#value> {
            type AsUnary = #unary;
        }

        impl ToConstant for #unary {
            type AsConstant = Number<#value>;
        }
    }
}
