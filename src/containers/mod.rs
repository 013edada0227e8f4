//! Sensitive containers and the rendering protocol.
//!
//! This module provides:
//!
//! - **`container`**: [`Sensitive`], the scalar container.
//! - **`array`**: [`SensitiveArray`], the sequence container with structural
//!   equality and join-based strategies.
//! - **`render`**: [`RenderOptions`] and [`RedactedRender`], the protocol
//!   that turns a strategy's output into final, padded text.

mod array;
mod container;
mod render;

pub use array::SensitiveArray;
pub use container::Sensitive;
pub use render::{RedactedRender, RenderOptions};

pub(crate) use render::fmt_with_protocol;
