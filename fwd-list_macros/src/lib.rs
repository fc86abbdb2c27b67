// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

mod helpers;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use helpers::ListLiteral;

#[proc_macro]
pub fn fwd_list(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ListLiteral);
    helpers::expand_list_literal(input).into()
}
