//! Adapters for emitting sensitive containers through `tracing`.
//!
//! This module provides [`TracingRedactedExt`], an extension trait that
//! renders a container through its default strategy and wraps the result as
//! a `tracing` display value. The raw value has no path into the event.
//!
//! # Example
//!
//! ```ignore
//! use sensitive::tracing::TracingRedactedExt;
//!
//! tracing::info!(tin = %tin.tracing_redacted(), "taxpayer verified");
//! // => tin: "#####6789"
//! ```

use tracing::field::{DisplayValue, display};

use crate::containers::{RedactedRender, RenderOptions};

/// Extension trait for logging the default redacted rendering as a
/// `tracing` field value.
pub trait TracingRedactedExt {
    /// Renders through the default strategy and wraps the result for
    /// `tracing`.
    fn tracing_redacted(&self) -> DisplayValue<String>;
}

impl<T> TracingRedactedExt for T
where
    T: RedactedRender,
{
    fn tracing_redacted(&self) -> DisplayValue<String> {
        display(self.render(&RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::TracingRedactedExt;
    use crate::containers::Sensitive;

    #[test]
    fn tracing_redacted_wraps_the_default_rendering() {
        let field = Sensitive::masked("test case");
        let value = field.tracing_redacted();
        assert_eq!(format!("{value:?}"), "#########");
    }
}
