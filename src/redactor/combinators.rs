//! The redaction strategy type and its combinators.
//!
//! A [`Redactor`] maps a borrowed value and an optional precision to the text
//! that is allowed to leave the containing wrapper. Combinators build new
//! strategies out of existing ones; every strategy is a pure function of its
//! inputs and the parameters it closed over.

use std::{fmt, sync::Arc};

/// Default character used to replace redacted characters.
pub const MASK_CHAR: char = '#';

/// Default character used to delimit the segments of a structured identifier.
pub const DELIMITER_CHAR: char = '-';

type ApplyFn<T> = dyn Fn(&T, Option<usize>) -> String + Send + Sync;

/// A redaction strategy for values of type `T`.
///
/// `precision` is the number of trailing raw characters a rendering may
/// expose; `None` means the caller did not specify one and leaves the choice
/// to the strategy. Strategies are immutable, cheap to clone, and safe to
/// share across threads.
///
/// # Example
///
/// ```
/// use sensitive::Redactor;
///
/// let mask = Redactor::<str>::mask('#');
/// assert_eq!(mask.apply("abc", Some(1)), "##c");
/// assert_eq!(mask.apply("abc", None), "###");
/// ```
pub struct Redactor<T: ?Sized>(Arc<ApplyFn<T>>);

impl<T: ?Sized> Clone for Redactor<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for Redactor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Redactor")
    }
}

impl<T: ?Sized + 'static> Redactor<T> {
    /// Wraps an arbitrary redaction function as a strategy.
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&T, Option<usize>) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(apply))
    }

    /// Applies the strategy to `value` with the given precision.
    #[must_use]
    pub fn apply(&self, value: &T, precision: Option<usize>) -> String {
        (self.0)(value, precision)
    }

    /// A strategy that ignores its input and renders nothing.
    ///
    /// This is the safe default for any type with no defined masking rule.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(|_, _| String::new())
    }

    /// Wraps `after` with a hard maximum precision.
    ///
    /// An unspecified precision resolves to `max`; an explicit precision is
    /// clamped to `max`.
    #[must_use]
    pub fn limited(max: usize, after: Redactor<T>) -> Self {
        Self::new(move |value, precision| {
            let exposed = precision.map_or(max, |p| p.min(max));
            after.apply(value, Some(exposed))
        })
    }

    /// Wraps `after` with a precision limit of half the value's length.
    ///
    /// The limit is recomputed per call from `length`, so it tracks
    /// variable-length inputs.
    #[must_use]
    pub fn limited_by<F>(length: F, after: Redactor<T>) -> Self
    where
        F: Fn(&T) -> usize + Send + Sync + 'static,
    {
        Self::new(move |value, precision| {
            let max = length(value) / 2;
            let exposed = precision.map_or(max, |p| p.min(max));
            after.apply(value, Some(exposed))
        })
    }

    /// Wraps `after` with a default precision of half the value's length.
    ///
    /// Unlike [`Redactor::limited_by`], an explicit precision passes through
    /// unclamped; only the unspecified case is substituted.
    #[must_use]
    pub fn defaulted_by<F>(length: F, after: Redactor<T>) -> Self
    where
        F: Fn(&T) -> usize + Send + Sync + 'static,
    {
        Self::new(move |value, precision| {
            let exposed = precision.unwrap_or_else(|| length(value) / 2);
            after.apply(value, Some(exposed))
        })
    }
}

impl<T: AsRef<str> + ?Sized + 'static> Redactor<T> {
    /// The terminal masking strategy for string-like values.
    ///
    /// Replaces all but the trailing `precision` characters with `masking`.
    /// A precision of zero (or an unresolved precision) masks everything; a
    /// precision at or beyond the value's length exposes it unchanged. Only
    /// trailing characters are ever exposed. Lengths are counted in Unicode
    /// scalar values.
    #[must_use]
    pub fn mask(masking: char) -> Self {
        Self::new(move |value, precision| {
            let text = value.as_ref();
            let len = text.chars().count();
            let exposed = precision.unwrap_or(0);
            if exposed >= len {
                text.to_string()
            } else {
                let mut out: String = std::iter::repeat_n(masking, len - exposed).collect();
                if exposed > 0 {
                    out.extend(text.chars().skip(len - exposed));
                }
                out
            }
        })
    }

    /// [`Redactor::limited_by`] with the length taken from the text itself.
    #[must_use]
    pub fn limited_half(after: Redactor<T>) -> Self {
        Self::limited_by(|value: &T| value.as_ref().chars().count(), after)
    }

    /// [`Redactor::defaulted_by`] with the length taken from the text itself.
    #[must_use]
    pub fn defaulted_half(after: Redactor<T>) -> Self {
        Self::defaulted_by(|value: &T| value.as_ref().chars().count(), after)
    }
}
