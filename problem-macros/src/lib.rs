use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, ExprLit, ItemFn, Lit, ReturnType, Token};

/// Builds the expression producing the context text.
///
/// No arguments gives `"in <fn_name>"`. A single non-literal expression is
/// converted with `ToString`. Anything else is handed to `format!`.
fn context_message(args: &Punctuated<Expr, Token![,]>, input: &ItemFn) -> TokenStream2 {
    if args.is_empty() {
        let text = format!("in {}", input.sig.ident);
        return quote! { #text };
    }

    let mut iter = args.iter();
    if let (Some(expr), None) = (iter.next(), iter.next()) {
        let is_str_literal = matches!(
            expr,
            Expr::Lit(ExprLit {
                lit: Lit::Str(_),
                ..
            })
        );
        if !is_str_literal {
            return quote! { ::std::string::ToString::to_string(&(#expr)) };
        }
    }

    let args = args.iter();
    quote! { ::std::format!(#(#args),*) }
}

/// Adds a context entry to any problem returned by the function.
///
/// The function must return an `Outcome` (or `Result<_, Problem<_>>`).
/// The context text is only built when the function returns an error.
///
/// # Example
///
/// ```ignore
/// // Context: in validate_email
/// #[context]
/// fn validate_email(email: &str) -> Outcome<(), SignupError> { ... }
///
/// // Context: loading user 42
/// #[context("loading user {}", id)]
/// async fn load_user(id: u32) -> Outcome<User, DbError> { ... }
/// ```
#[proc_macro_attribute]
pub fn context(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemFn);

    let args = match Punctuated::<Expr, Token![,]>::parse_terminated.parse(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let output = match &input.sig.output {
        ReturnType::Type(_, ty) => ty.clone(),
        ReturnType::Default => {
            return syn::Error::new_spanned(
                &input.sig,
                "#[context] requires a function returning an Outcome",
            )
            .to_compile_error()
            .into();
        }
    };

    let message = context_message(&args, &input);
    let block = &input.block;

    // Run the original body in its own scope so early returns and `?` land
    // in the outcome instead of leaving the function.
    let body = if input.sig.asyncness.is_some() {
        quote! { async #block.await }
    } else {
        quote! { (|| -> #output #block)() }
    };

    input.block = syn::parse_quote!({
        #[allow(clippy::redundant_closure_call)]
        let __problem_outcome: #output = #body;
        ::problem::OutcomeExt::with_context_lazy(__problem_outcome, || #message)
    });

    TokenStream::from(quote! { #input })
}
