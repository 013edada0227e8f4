//! The rendering protocol shared by all sensitive containers.
//!
//! This module provides:
//!
//! - [`RenderOptions`]: the flags, width, and precision of one rendering
//!   request.
//! - [`RedactedRender`]: strategy selection plus the case, padding, and sink
//!   steps that turn a redacted string into final output.
//! - The `Display` bridge used by every container, which maps the standard
//!   formatter's state onto the protocol.

use std::fmt;

/// The parameters of one rendering request.
///
/// The default request selects the default strategy, leaves the precision to
/// the strategy, applies no case transform, and pads nothing.
///
/// # Example
///
/// ```
/// use sensitive::{RedactedRender, RenderOptions, Sensitive};
///
/// let field = Sensitive::masked("abc");
/// let options = RenderOptions::new().precision(1).width(5);
/// assert_eq!(field.render(&options), "  ##c");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Selects the alternate strategy instead of the default one.
    pub alternate: bool,
    /// Applies Unicode uppercase conversion to the redacted text.
    pub uppercase: bool,
    /// Pads on the right instead of the left.
    pub left_justify: bool,
    /// Minimum rendered width in characters; zero disables padding.
    pub width: usize,
    /// Number of trailing raw characters the rendering may expose; `None`
    /// leaves the choice to the strategy.
    pub precision: Option<usize>,
}

impl RenderOptions {
    /// The default rendering request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the alternate strategy.
    #[must_use]
    pub fn alternate(mut self) -> Self {
        self.alternate = true;
        self
    }

    /// Uppercases the redacted text before padding.
    #[must_use]
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Pads on the right instead of the left.
    #[must_use]
    pub fn left_justified(mut self) -> Self {
        self.left_justify = true;
        self
    }

    /// Sets the minimum rendered width in characters.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets an explicit precision.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Types that render through a redaction strategy.
///
/// Implementors supply [`redacted`](Self::redacted), the strategy-selection
/// and application step; the provided methods add the case, padding, and
/// sink-writing steps. The raw value is consulted exactly once per request,
/// inside the chosen strategy.
pub trait RedactedRender {
    /// Applies the applicable strategy and returns the redacted text.
    ///
    /// `alternate` selects the alternate strategy where one exists.
    #[must_use]
    fn redacted(&self, alternate: bool, precision: Option<usize>) -> String;

    /// Renders into `out` according to `options`.
    ///
    /// Case conversion happens before padding, so the padded width is
    /// measured on the final text. Errors from the sink propagate to the
    /// caller; they are never retried or swallowed.
    fn render_to(&self, options: &RenderOptions, out: &mut dyn fmt::Write) -> fmt::Result {
        let mut text = self.redacted(options.alternate, options.precision);
        if options.uppercase {
            text = text.to_uppercase();
        }

        let pad = options.width.saturating_sub(text.chars().count());
        if pad > 0 && !options.left_justify {
            write_spaces(out, pad)?;
        }
        out.write_str(&text)?;
        if pad > 0 && options.left_justify {
            write_spaces(out, pad)?;
        }
        Ok(())
    }

    /// Renders to an owned string according to `options`.
    #[must_use]
    fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        self.render_to(options, &mut out)
            .expect("formatting into a String does not fail");
        out
    }
}

fn write_spaces(out: &mut dyn fmt::Write, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char(' ')?;
    }
    Ok(())
}

/// Maps a standard formatter's state onto the protocol and renders into it.
///
/// `{:#}` selects the alternate strategy, `{:N}` sets the width, `{:.P}`
/// sets the precision, and `{:<}` requests left justification. Padding
/// defaults to the left (right justification), including for plain `{}`
/// with a width. Uppercase has no `Display` syntax and is reachable only
/// through [`RenderOptions`].
pub(crate) fn fmt_with_protocol<R: RedactedRender + ?Sized>(
    value: &R,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let options = RenderOptions {
        alternate: f.alternate(),
        uppercase: false,
        left_justify: matches!(f.align(), Some(fmt::Alignment::Left)),
        width: f.width().unwrap_or(0),
        precision: f.precision(),
    };
    value.render_to(&options, f)
}
