//! The sequence-valued sensitive container.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use super::{
    container::Sensitive,
    render::{RedactedRender, fmt_with_protocol},
};
#[cfg(feature = "serde")]
use super::render::RenderOptions;
use crate::redactor::{Redactor, concatenate, delimit};

/// Container for an ordered sequence of sensitive components.
///
/// A `SensitiveArray` is a [`Sensitive`] over a component vector: the same
/// protection (no accessor, strategy-driven rendering), plus structural
/// equality and hashing over the components and redactor factories that
/// join the components into one renderable string. The component sequence
/// is fixed at construction.
///
/// Individual components are not validated at this layer; subtypes that
/// impose per-component rules (such as the taxpayer identifier family)
/// validate before construction.
///
/// # Example
///
/// ```
/// use sensitive::{MASK_CHAR, Redactor, SensitiveArray};
///
/// let strategy = SensitiveArray::joined(Redactor::defaulted_half(Redactor::mask(MASK_CHAR)));
/// let account = SensitiveArray::with_redactor(
///     vec![String::from("1234"), String::from("5678")],
///     strategy,
/// );
/// assert_eq!(format!("{account}"), "####5678");
/// ```
pub struct SensitiveArray<T> {
    inner: Sensitive<Vec<T>>,
}

impl<T: 'static> SensitiveArray<T> {
    /// Wraps a component sequence with the [`Redactor::empty`] strategy.
    pub fn new(components: Vec<T>) -> Self {
        Self {
            inner: Sensitive::new(components),
        }
    }

    /// Wraps a component sequence with an injected default strategy.
    pub fn with_redactor(components: Vec<T>, redactor: Redactor<Vec<T>>) -> Self {
        Self {
            inner: Sensitive::with_redactor(components, redactor),
        }
    }

    /// Wraps a component sequence with distinct default and alternate
    /// strategies.
    pub fn with_strategies(
        components: Vec<T>,
        redactor: Redactor<Vec<T>>,
        alternate: Redactor<Vec<T>>,
    ) -> Self {
        Self {
            inner: Sensitive::with_strategies(components, redactor, alternate),
        }
    }

    /// The owned components, for subtypes that expose individual segments.
    #[cfg_attr(not(feature = "tin"), allow(dead_code))]
    pub(crate) fn components(&self) -> &[T] {
        &self.inner.value
    }
}

impl<T: AsRef<str> + 'static> SensitiveArray<T> {
    /// A strategy that concatenates the components and applies `after` to
    /// the joined text.
    #[must_use]
    pub fn joined(after: Redactor<str>) -> Redactor<Vec<T>> {
        Redactor::new(move |components: &Vec<T>, precision| {
            after.apply(&concatenate(components), precision)
        })
    }

    /// A strategy that joins the components with `separator` and applies
    /// `after` to the joined text.
    ///
    /// The separator counts toward the joined length, so length-derived
    /// precisions see the delimited text.
    #[must_use]
    pub fn delimited(separator: char, after: Redactor<str>) -> Redactor<Vec<T>> {
        Redactor::new(move |components: &Vec<T>, precision| {
            after.apply(&delimit(components, separator), precision)
        })
    }
}

impl<T: 'static> RedactedRender for SensitiveArray<T> {
    fn redacted(&self, alternate: bool, precision: Option<usize>) -> String {
        self.inner.redacted(alternate, precision)
    }
}

impl<T: 'static> fmt::Display for SensitiveArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_protocol(self, f)
    }
}

impl<T: 'static> fmt::Debug for SensitiveArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SensitiveArray")
            .field(&self.redacted(false, None))
            .finish()
    }
}

impl<T: 'static> From<Vec<T>> for SensitiveArray<T> {
    fn from(components: Vec<T>) -> Self {
        Self::new(components)
    }
}

impl<T: Clone> Clone for SensitiveArray<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for SensitiveArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for SensitiveArray<T> {}

impl<T: Hash> Hash for SensitiveArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<T: 'static> serde::Serialize for SensitiveArray<T> {
    /// Serializes the default redacted rendering, never the raw components.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.render(&RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use super::SensitiveArray;
    use crate::redactor::{MASK_CHAR, Redactor};

    fn components(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| (*part).to_string()).collect()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn default_strategy_renders_nothing() {
        let array = SensitiveArray::new(components(&["a", "b"]));
        assert_eq!(array.to_string(), "");
    }

    #[test]
    fn equality_is_structural() {
        let first = SensitiveArray::new(components(&["a", "b"]));
        let second = SensitiveArray::new(components(&["a", "b"]));
        let longer = SensitiveArray::new(components(&["a", "b", "c"]));
        let reordered = SensitiveArray::new(components(&["b", "a"]));

        assert_eq!(first, first);
        assert_eq!(first, second);
        assert_ne!(first, longer);
        assert_ne!(first, reordered);
    }

    #[test]
    fn hash_is_consistent_with_equality() {
        let first = SensitiveArray::new(components(&["a", "b"]));
        let second = SensitiveArray::new(components(&["a", "b"]));
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn joined_concatenates_before_redacting() {
        let strategy =
            SensitiveArray::joined(Redactor::defaulted_half(Redactor::mask(MASK_CHAR)));
        let array = SensitiveArray::with_redactor(components(&["123", "45", "6789"]), strategy);
        assert_eq!(array.to_string(), "#####6789");
        assert_eq!(format!("{array:.2}"), "#######89");
    }

    #[test]
    fn delimited_joins_with_the_separator() {
        let strategy = SensitiveArray::delimited('-', Redactor::mask(MASK_CHAR));
        let array = SensitiveArray::with_redactor(components(&["123", "45", "6789"]), strategy);
        // The delimited text is 11 characters long; the mask covers it all.
        assert_eq!(array.to_string(), "###########");
        assert_eq!(format!("{array:.4}"), "#######6789");
    }

    #[test]
    fn empty_component_sequences_are_permitted() {
        let strategy = SensitiveArray::joined(Redactor::mask(MASK_CHAR));
        let array = SensitiveArray::<String>::with_redactor(Vec::new(), strategy);
        assert_eq!(array.to_string(), "");
    }

    #[test]
    fn debug_shows_the_redacted_form_only() {
        let strategy = SensitiveArray::joined(Redactor::mask(MASK_CHAR));
        let array = SensitiveArray::with_redactor(components(&["123", "45"]), strategy);
        let debug = format!("{array:?}");
        assert!(debug.contains("#####"));
        assert!(!debug.contains("123"));
    }
}
