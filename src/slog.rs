//! Adapters for emitting sensitive containers through `slog`.
//!
//! This module connects the rendering protocol with `slog` by providing
//! `slog::Value` implementations for every container. The logged
//! representation is always the default redacted rendering; the raw value
//! has no path into the log record.
//!
//! It does not configure `slog` or decide what gets logged.
//!
//! # Example
//!
//! ```ignore
//! use sensitive::tin::Tin;
//!
//! let tin: Tin = "123-45-6789".parse()?;
//! slog::info!(logger, "taxpayer verified"; "tin" => &tin);
//! // => tin: "#####6789"
//! ```

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::containers::{RedactedRender, RenderOptions, Sensitive, SensitiveArray};
#[cfg(feature = "tin")]
use crate::tin::{Ein, Ssn, Tin};

/// Marker trait for types whose `slog::Value` implementation emits only
/// redacted output.
///
/// Implemented for the sensitive containers, never for raw values.
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

fn emit_redacted<R: RedactedRender>(
    value: &R,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult {
    serializer.emit_str(key, &value.render(&RenderOptions::default()))
}

impl<T: 'static> SlogValue for Sensitive<T> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_redacted(self, key, serializer)
    }
}

impl<T: 'static> SlogRedacted for Sensitive<T> {}

impl<T: 'static> SlogValue for SensitiveArray<T> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_redacted(self, key, serializer)
    }
}

impl<T: 'static> SlogRedacted for SensitiveArray<T> {}

#[cfg(feature = "tin")]
impl SlogValue for Ssn {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_redacted(self, key, serializer)
    }
}

#[cfg(feature = "tin")]
impl SlogRedacted for Ssn {}

#[cfg(feature = "tin")]
impl SlogValue for Ein {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_redacted(self, key, serializer)
    }
}

#[cfg(feature = "tin")]
impl SlogRedacted for Ein {}

#[cfg(feature = "tin")]
impl SlogValue for Tin {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_redacted(self, key, serializer)
    }
}

#[cfg(feature = "tin")]
impl SlogRedacted for Tin {}
