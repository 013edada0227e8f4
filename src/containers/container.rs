//! The scalar sensitive container.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use super::render::{RedactedRender, fmt_with_protocol};
#[cfg(feature = "serde")]
use super::render::RenderOptions;
use crate::redactor::{MASK_CHAR, Redactor};

/// Container for a sensitive value, protecting it from being inadvertently
/// rendered as plain text.
///
/// **There is no accessor for the raw value.** Every textual rendering goes
/// through the container's redaction strategies: the default strategy, and
/// an optional alternate selected with `{:#}` or
/// [`RenderOptions::alternate`]. A container built with [`Sensitive::new`]
/// renders nothing at all.
///
/// Equality and hashing operate on the owned value, not its redacted form:
/// containers are compared for business purposes such as deduplication,
/// which requires true equivalence even though display is redacted.
/// Injected strategies do not participate in equality.
///
/// # Example
///
/// ```
/// use sensitive::Sensitive;
///
/// let password = Sensitive::new(String::from("hunter2"));
/// assert_eq!(format!("{password}"), "");
/// assert_eq!(format!("{password:9}"), "         ");
///
/// let card = Sensitive::masked("4111111111111111");
/// assert_eq!(format!("{card:.4}"), "############1111");
/// ```
pub struct Sensitive<T> {
    pub(crate) value: T,
    redactor: Redactor<T>,
    alternate: Option<Redactor<T>>,
}

impl<T: 'static> Sensitive<T> {
    /// Wraps a sensitive value with the [`Redactor::empty`] strategy.
    pub fn new(value: T) -> Self {
        Self::with_redactor(value, Redactor::empty())
    }

    /// Wraps a sensitive value with an injected default strategy.
    pub fn with_redactor(value: T, redactor: Redactor<T>) -> Self {
        Self {
            value,
            redactor,
            alternate: None,
        }
    }

    /// Wraps a sensitive value with distinct default and alternate
    /// strategies.
    pub fn with_strategies(value: T, redactor: Redactor<T>, alternate: Redactor<T>) -> Self {
        Self {
            value,
            redactor,
            alternate: Some(alternate),
        }
    }
}

impl Sensitive<String> {
    /// Wraps a sensitive text field masked with [`MASK_CHAR`].
    ///
    /// The strategy is the raw [`Redactor::mask`]: with no explicit
    /// precision the text renders fully masked.
    pub fn masked(value: impl Into<String>) -> Self {
        Self::masked_with(value, MASK_CHAR)
    }

    /// Wraps a sensitive text field masked with a custom character.
    pub fn masked_with(value: impl Into<String>, masking: char) -> Self {
        Self::with_redactor(value.into(), Redactor::mask(masking))
    }
}

impl<T: 'static> RedactedRender for Sensitive<T> {
    fn redacted(&self, alternate: bool, precision: Option<usize>) -> String {
        let strategy = if alternate {
            self.alternate.as_ref().unwrap_or(&self.redactor)
        } else {
            &self.redactor
        };
        strategy.apply(&self.value, precision)
    }
}

impl<T: 'static> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_protocol(self, f)
    }
}

impl<T: 'static> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sensitive")
            .field(&self.redacted(false, None))
            .finish()
    }
}

impl<T: 'static> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            redactor: self.redactor.clone(),
            alternate: self.alternate.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Sensitive<T> {}

impl<T: Hash> Hash for Sensitive<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<T: 'static> serde::Serialize for Sensitive<T> {
    /// Serializes the default redacted rendering, never the raw value.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.render(&RenderOptions::default()))
    }
}
