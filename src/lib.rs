//! Containers that keep sensitive values out of rendered output.
//!
//! This crate separates:
//! - **Containers**: [`Sensitive`] and [`SensitiveArray`] own a value and
//!   expose no accessor to it.
//! - **Redaction strategies**: composable [`Redactor`] combinators that
//!   decide how much of the value a rendering may expose.
//!
//! Rendering goes through the standard formatter: `{}` applies the default
//! strategy, `{:#}` the alternate, `{:.P}` bounds the exposure to at most
//! `P` trailing characters, and widths pad the redacted text. The raw value
//! never reaches the output except through the owner's strategy.
//!
//! ```
//! use sensitive::Sensitive;
//! use sensitive::tin::Tin;
//!
//! let card = Sensitive::masked("4111111111111111");
//! assert_eq!(format!("{card:.4}"), "############1111");
//!
//! let tin: Tin = "123-45-6789".parse()?;
//! assert_eq!(format!("{tin}"), "#####6789");
//! assert_eq!(format!("{tin:#}"), "###-##-6789");
//! # Ok::<(), sensitive::tin::ParseTinError>(())
//! ```
//!
//! What this crate does:
//! - defines the strategy combinators and the rendering protocol
//! - provides the taxpayer-identifier family behind the `tin` feature
//! - provides integrations behind feature flags (`serde`, `slog`, `tracing`)
//!
//! What it does not do:
//! - encrypt or persist anything
//! - scan free-form text for embedded sensitive data
//! - perform I/O or logging of its own

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod containers;
mod redactor;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tin")]
pub mod tin;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from the containers module
pub use containers::{RedactedRender, RenderOptions, Sensitive, SensitiveArray};
// Re-exports from the redactor module
pub use redactor::{DELIMITER_CHAR, MASK_CHAR, Redactor, concatenate, delimit, delimit_by};
#[cfg(feature = "slog")]
pub use crate::slog::SlogRedacted;
#[cfg(feature = "tracing")]
pub use crate::tracing::TracingRedactedExt;
