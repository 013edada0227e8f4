//! Redaction strategies: the [`Redactor`] type, its combinators, and the
//! sequence joiners.
//!
//! This module provides:
//!
//! - **Combinators** (`combinators`): the [`Redactor`] strategy type with
//!   [`empty`](Redactor::empty), [`limited`](Redactor::limited),
//!   [`defaulted_by`](Redactor::defaulted_by), [`mask`](Redactor::mask) and
//!   friends, plus the [`MASK_CHAR`] and [`DELIMITER_CHAR`] constants.
//!
//! - **Joiners** (`join`): [`concatenate`], [`delimit`], and [`delimit_by`]
//!   for flattening component sequences into one renderable string.
//!
//! # Example
//!
//! ```
//! use sensitive::{MASK_CHAR, Redactor};
//!
//! // Expose at most the trailing half, and only when asked to.
//! let redactor = Redactor::defaulted_half(Redactor::<str>::mask(MASK_CHAR));
//! assert_eq!(redactor.apply("test case", None), "#####case");
//! assert_eq!(redactor.apply("test case", Some(2)), "#######se");
//! ```

mod combinators;
mod join;

pub use combinators::{DELIMITER_CHAR, MASK_CHAR, Redactor};
pub use join::{concatenate, delimit, delimit_by};
