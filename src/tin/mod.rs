//! United States taxpayer identification numbers.
//!
//! This module provides:
//!
//! - [`Ssn`]: a Social Security number, parsed into area, group, and serial
//!   segments.
//! - [`Ein`]: an Employer Identification Number, parsed into prefix and
//!   serial segments.
//! - [`Tin`]: the tagged union over both, with a length-driven
//!   classification factory.
//! - [`ParseTinError`]: the construction failure taxonomy. Error messages
//!   never echo the offending input.
//!
//! Both identifier kinds are [`SensitiveArray`](crate::SensitiveArray)s of
//! digit segments: the default rendering masks all but the trailing half of
//! the nine digits, and the alternate rendering (`{:#}`) re-inserts the
//! conventional delimiters into the already-redacted text.
//!
//! # Example
//!
//! ```
//! use sensitive::tin::Tin;
//!
//! let tin = Tin::parse("123-45-6789", false)?;
//! assert_eq!(format!("{tin}"), "#####6789");
//! assert_eq!(format!("{tin:#}"), "###-##-6789");
//! # Ok::<(), sensitive::tin::ParseTinError>(())
//! ```

mod us;

pub use us::{EIN_PATTERN, Ein, SSN_PATTERN, Ssn, Tin};

/// Failure to construct a taxpayer identification number.
///
/// Messages deliberately carry no part of the rejected input, so an error
/// logged verbatim cannot leak the identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseTinError {
    /// The raw input was empty.
    #[error("cannot parse an empty taxpayer identification number")]
    Empty,
    /// The raw input's length matches neither identifier kind.
    #[error("length matches neither an SSN nor an EIN")]
    UnrecognizedLength,
    /// The raw input does not match the SSN digit pattern.
    #[error("input does not match the SSN format")]
    InvalidSsn,
    /// The raw input does not match the EIN digit pattern.
    #[error("input does not match the EIN format")]
    InvalidEin,
}
