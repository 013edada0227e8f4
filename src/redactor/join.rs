//! Joiners that flatten an ordered sequence of components into one
//! renderable string.
//!
//! These are the building blocks used by sequence-level strategies: join
//! first, then hand the flat text to a terminal strategy such as
//! [`Redactor::mask`](super::Redactor::mask).

/// Joins components with no separator.
pub fn concatenate<S: AsRef<str>>(components: &[S]) -> String {
    let mut out = String::new();
    for component in components {
        out.push_str(component.as_ref());
    }
    out
}

/// Joins components with `separator` interposed between adjacent elements.
///
/// The separator never appears before the first or after the last element.
pub fn delimit<S: AsRef<str>>(components: &[S], separator: char) -> String {
    let mut out = String::new();
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(component.as_ref());
    }
    out
}

/// Like [`delimit`], but projects each element through `extract` first.
///
/// Use this when the components are not themselves string-like.
pub fn delimit_by<T, S, F>(components: &[T], separator: char, extract: F) -> String
where
    S: AsRef<str>,
    F: Fn(&T) -> S,
{
    let mut out = String::new();
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(extract(component).as_ref());
    }
    out
}
