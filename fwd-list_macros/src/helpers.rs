// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Expr, Result, Token};

/// The input of `fwd_list!`, following the two forms of `vec!`.
pub(crate) enum ListLiteral {
    /// `fwd_list![a, b, c]`, possibly empty and with a trailing comma.
    Elements(Punctuated<Expr, Token![,]>),
    /// `fwd_list![element; count]`
    Repeat { element: Expr, count: Expr },
}

impl Parse for ListLiteral {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::Elements(Punctuated::new()));
        }

        let first: Expr = input.parse()?;

        if input.peek(Token![;]) {
            input.parse::<Token![;]>()?;
            let count: Expr = input.parse()?;

            if !input.is_empty() {
                return Err(input.error("unexpected tokens after the element count"));
            }

            return Ok(Self::Repeat {
                element: first,
                count,
            });
        }

        let mut elements = Punctuated::new();
        elements.push_value(first);

        while !input.is_empty() {
            elements.push_punct(input.parse::<Token![,]>()?);

            if input.is_empty() {
                break;
            }

            elements.push_value(input.parse()?);
        }

        Ok(Self::Elements(elements))
    }
}

/// Expands a parsed `fwd_list!` invocation into a block evaluating to a `ForwardList`.
///
/// Listed elements are appended through a single cursor, so they are evaluated in order and
/// the whole list is built in *O*(*n*) time.
pub(crate) fn expand_list_literal(input: ListLiteral) -> TokenStream {
    match input {
        ListLiteral::Elements(elements) if elements.is_empty() => quote! {
            ::fwd_list::ForwardList::new()
        },
        ListLiteral::Elements(elements) => {
            // Keep our locals out of reach of the element expressions.
            let list = Ident::new("list", Span::mixed_site());
            let cursor = Ident::new("cursor", Span::mixed_site());
            let elements = elements.into_iter();

            quote! {
                {
                    let mut #list = ::fwd_list::ForwardList::new();
                    {
                        let mut #cursor = #list.before_begin_mut();
                        #(#cursor.insert_after(#elements);)*
                    }
                    #list
                }
            }
        }
        ListLiteral::Repeat { element, count } => quote! {
            ::core::iter::repeat(#element)
                .take(#count)
                .collect::<::fwd_list::ForwardList<_>>()
        },
    }
}
