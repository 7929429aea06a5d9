#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the AMIA workspace: error enums, API models
//! and handlers, feature slice handles, and the runtime entry point.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own
//! macros in doctests; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns `async fn main` into a synchronous `main` running on an `amia_runtime` profile.
///
/// Accepted profiles: `high_performance`, `memory_efficient`, `default` (or no argument).
/// The function must be `async` and return a `Result`.
///
/// ```rust,ignore
/// #[amia_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Marks a struct as a wire model of the public API.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` when they are not derived already.
/// * Adds `utoipa::ToSchema` behind the consuming crate's `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` and `#[serde(deny_unknown_fields)]`
///   unless overridden with `rename_all = "..."` / `deny_unknown_fields = false`.
///
/// ```rust,ignore
/// #[amia_derive::api_model]
/// pub struct QuestionRequest {
///     pub name: String,
///     pub email: String,
///     pub question: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Wraps an Axum handler and registers it with `utoipa::path` under the `server` feature.
///
/// Arguments are forwarded verbatim to `utoipa::path`.
///
/// ```rust,ignore
/// #[amia_derive::api_handler(
///     post,
///     path = "/api/questions",
///     request_body = QuestionRequest,
///     responses((status = OK, body = ActionResponse)),
///     tag = QUESTIONS_TAG,
/// )]
/// pub async fn submit_question(/* extractors */) -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a crate error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when missing.
/// * A `Result<T, E = Error>` alias in the same module.
/// * A `<Error>Ext` trait with `.context(...)` for `Result<T, Error>` and for results
///   of every wrapped source error type.
/// * `From<Source>` for each variant carrying a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-local `format_context` helper for the `#[error(...)]` strings.
///
/// Variants must use named fields; a variant carrying a source must also carry
/// `context: Option<Cow<'static, str>>`. Only one enum per module, since the alias
/// and the helper are module-scoped.
///
/// ```rust,ignore
/// #[amia_derive::amia_error]
/// pub enum MailerError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal mailer error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn amia_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`, and `<Name>` is generated as a cheap
/// `Arc` wrapper that derefs to it and implements `amia_kernel::domain::registry::FeatureSlice`.
/// The argument names the `FeatureSet` flag the slice serves.
///
/// ```rust,ignore
/// #[amia_derive::amia_slice(QUESTIONS)]
/// pub struct Questions {
///     pub recipient: String,
/// }
///
/// let slice = Questions::new(QuestionsInner { recipient: "team@example.com".to_owned() });
/// assert_eq!(slice.feature(), FeatureSet::QUESTIONS);
/// ```
#[proc_macro_attribute]
pub fn amia_slice(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(attr.into(), input).into()
}
