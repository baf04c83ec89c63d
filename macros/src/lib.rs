use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, LitStr};

/// Declares a hidden item named after an error code.
///
/// Two errors sharing a code in the same module expand to the same item name,
/// which turns a duplicated code into a compile error.
#[proc_macro]
pub fn error_code_to_ident(input: TokenStream) -> TokenStream {
    let code = parse_macro_input!(input as LitStr);
    let value = code.value();

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return syn::Error::new(code.span(), "error codes must be non-empty and alphanumeric")
            .to_compile_error()
            .into();
    }

    let ident = format_ident!("__ERROR_CODE_{}", value);

    quote! {
        #[allow(non_upper_case_globals, dead_code)]
        const #ident: () = ();
    }
    .into()
}
