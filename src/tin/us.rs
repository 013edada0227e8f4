//! SSN and EIN parsing, classification, and rendering strategies.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use super::ParseTinError;
use crate::{
    containers::{RedactedRender, SensitiveArray, fmt_with_protocol},
    redactor::{DELIMITER_CHAR, MASK_CHAR, Redactor},
};

/// Digit pattern of a Social Security number, with optional separators.
pub const SSN_PATTERN: &str = r"^(?P<area>\d{3})-?(?P<group>\d{2})-?(?P<serial>\d{4})$";

/// Digit pattern of an Employer Identification Number, with an optional
/// separator.
pub const EIN_PATTERN: &str = r"^(?P<prefix>\d{2})-?(?P<serial>\d{7})$";

// Compiled patterns (compiled once, reused).
static SSN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(SSN_PATTERN).expect("SSN pattern compiles"));
static EIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EIN_PATTERN).expect("EIN pattern compiles"));

// Default strategy shared by both identifier kinds: concatenate the digit
// segments, then expose at most the trailing half unless the caller asked
// for a specific precision.
static DIGITS: Lazy<Redactor<Vec<String>>> =
    Lazy::new(|| SensitiveArray::joined(Redactor::defaulted_half(Redactor::mask(MASK_CHAR))));

// The alternates operate on the already-redacted buffer; the raw segments
// are never re-read. Offsets follow the fixed segment widths, with the
// later insertion first so the earlier offset stays valid.
fn ssn_alternate() -> Redactor<Vec<String>> {
    Redactor::new(|components, precision| {
        let mut buffer = DIGITS.apply(components, precision);
        buffer.insert(5, DELIMITER_CHAR);
        buffer.insert(3, DELIMITER_CHAR);
        buffer
    })
}

fn ein_alternate() -> Redactor<Vec<String>> {
    Redactor::new(|components, precision| {
        let mut buffer = DIGITS.apply(components, precision);
        buffer.insert(2, DELIMITER_CHAR);
        buffer
    })
}

// =============================================================================
// Ssn
// =============================================================================

/// A Social Security number: three digit segments (area, group, serial),
/// stored without separators.
///
/// Renders like any sensitive container: `{}` masks all but the trailing
/// half of the nine digits, `{:#}` additionally re-inserts the `-`
/// delimiters, `{:.P}` bounds the exposure to `P` trailing digits.
///
/// The segment accessors return the raw segment text and are intentionally
/// less protected than whole-identifier rendering; callers needing
/// protection must render instead of reading segments.
///
/// # Example
///
/// ```
/// use sensitive::tin::Ssn;
///
/// let ssn: Ssn = "123-45-6789".parse()?;
/// assert_eq!(format!("{ssn}"), "#####6789");
/// assert_eq!(format!("{ssn:#}"), "###-##-6789");
/// assert_eq!(ssn.serial(), "6789");
/// # Ok::<(), sensitive::tin::ParseTinError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ssn {
    components: SensitiveArray<String>,
}

impl Ssn {
    /// Parses an SSN from its raw text, with or without separators.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTinError::InvalidSsn`] if the input does not match
    /// [`SSN_PATTERN`]. The error never contains the input.
    pub fn parse(raw: &str) -> Result<Self, ParseTinError> {
        let caps = SSN_RE.captures(raw).ok_or(ParseTinError::InvalidSsn)?;
        Ok(Self::from_components(
            &caps["area"],
            &caps["group"],
            &caps["serial"],
        ))
    }

    /// Builds an SSN from pre-split segments.
    ///
    /// Segments are stored as given, without validation; the alternate
    /// rendering's delimiter offsets assume the canonical 3-2-4 widths.
    pub fn from_components(
        area: impl Into<String>,
        group: impl Into<String>,
        serial: impl Into<String>,
    ) -> Self {
        let components = vec![area.into(), group.into(), serial.into()];
        Self {
            components: SensitiveArray::with_strategies(components, DIGITS.clone(), ssn_alternate()),
        }
    }

    /// Builds an SSN from numeric segments, zero-padded to the canonical
    /// widths.
    pub fn from_numbers(area: u32, group: u32, serial: u32) -> Self {
        Self::from_components(
            format!("{area:03}"),
            format!("{group:02}"),
            format!("{serial:04}"),
        )
    }

    /// The three-digit area segment.
    #[must_use]
    pub fn area(&self) -> &str {
        self.components.components()[0].as_str()
    }

    /// The two-digit group segment.
    #[must_use]
    pub fn group(&self) -> &str {
        self.components.components()[1].as_str()
    }

    /// The four-digit serial segment.
    #[must_use]
    pub fn serial(&self) -> &str {
        self.components.components()[2].as_str()
    }
}

impl RedactedRender for Ssn {
    fn redacted(&self, alternate: bool, precision: Option<usize>) -> String {
        self.components.redacted(alternate, precision)
    }
}

impl fmt::Display for Ssn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_protocol(self, f)
    }
}

impl fmt::Debug for Ssn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ssn").field(&self.redacted(false, None)).finish()
    }
}

impl FromStr for Ssn {
    type Err = ParseTinError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

// =============================================================================
// Ein
// =============================================================================

/// An Employer Identification Number: two digit segments (prefix, serial),
/// stored without the separator.
///
/// Rendering follows [`Ssn`], with the single delimiter of the `##-#######`
/// convention re-inserted by the alternate strategy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ein {
    components: SensitiveArray<String>,
}

impl Ein {
    /// Parses an EIN from its raw text, with or without the separator.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTinError::InvalidEin`] if the input does not match
    /// [`EIN_PATTERN`]. The error never contains the input.
    pub fn parse(raw: &str) -> Result<Self, ParseTinError> {
        let caps = EIN_RE.captures(raw).ok_or(ParseTinError::InvalidEin)?;
        Ok(Self::from_components(&caps["prefix"], &caps["serial"]))
    }

    /// Builds an EIN from pre-split segments.
    ///
    /// Segments are stored as given, without validation; the alternate
    /// rendering's delimiter offset assumes the canonical 2-7 widths.
    pub fn from_components(prefix: impl Into<String>, serial: impl Into<String>) -> Self {
        let components = vec![prefix.into(), serial.into()];
        Self {
            components: SensitiveArray::with_strategies(components, DIGITS.clone(), ein_alternate()),
        }
    }

    /// Builds an EIN from numeric segments, zero-padded to the canonical
    /// widths.
    pub fn from_numbers(prefix: u32, serial: u32) -> Self {
        Self::from_components(format!("{prefix:02}"), format!("{serial:07}"))
    }

    /// The two-digit prefix segment.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.components.components()[0].as_str()
    }

    /// The seven-digit serial segment.
    #[must_use]
    pub fn serial(&self) -> &str {
        self.components.components()[1].as_str()
    }
}

impl RedactedRender for Ein {
    fn redacted(&self, alternate: bool, precision: Option<usize>) -> String {
        self.components.redacted(alternate, precision)
    }
}

impl fmt::Display for Ein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_protocol(self, f)
    }
}

impl fmt::Debug for Ein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ein").field(&self.redacted(false, None)).finish()
    }
}

impl FromStr for Ein {
    type Err = ParseTinError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

// =============================================================================
// Tin
// =============================================================================

/// A taxpayer identification number of either kind.
///
/// [`Tin::parse`] classifies the raw text by length before delegating to
/// the matching variant's parser; rendering, equality, and hashing forward
/// to the variant. Two `Tin`s of different kinds are never equal, even over
/// the same digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Tin {
    /// A Social Security number.
    Ssn(Ssn),
    /// An Employer Identification Number.
    Ein(Ein),
}

impl Tin {
    /// Parses a taxpayer identification number, classifying by length.
    ///
    /// Nine characters are ambiguous between the two undelimited forms;
    /// `prefer_ein` breaks the tie. Ten characters must be a delimited EIN
    /// and eleven a delimited SSN.
    ///
    /// # Errors
    ///
    /// [`ParseTinError::Empty`] for empty input,
    /// [`ParseTinError::UnrecognizedLength`] when the length matches
    /// neither kind, and the variant parser's error when the digit pattern
    /// does not match.
    pub fn parse(raw: &str, prefer_ein: bool) -> Result<Self, ParseTinError> {
        match raw.chars().count() {
            0 => Err(ParseTinError::Empty),
            9 if prefer_ein => Ein::parse(raw).map(Self::Ein),
            9 => Ssn::parse(raw).map(Self::Ssn),
            10 => Ein::parse(raw).map(Self::Ein),
            11 => Ssn::parse(raw).map(Self::Ssn),
            _ => Err(ParseTinError::UnrecognizedLength),
        }
    }

    /// The SSN variant, if this is one.
    #[must_use]
    pub fn as_ssn(&self) -> Option<&Ssn> {
        match self {
            Self::Ssn(ssn) => Some(ssn),
            Self::Ein(_) => None,
        }
    }

    /// The EIN variant, if this is one.
    #[must_use]
    pub fn as_ein(&self) -> Option<&Ein> {
        match self {
            Self::Ssn(_) => None,
            Self::Ein(ein) => Some(ein),
        }
    }
}

impl RedactedRender for Tin {
    fn redacted(&self, alternate: bool, precision: Option<usize>) -> String {
        match self {
            Self::Ssn(ssn) => ssn.redacted(alternate, precision),
            Self::Ein(ein) => ein.redacted(alternate, precision),
        }
    }
}

impl fmt::Display for Tin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_protocol(self, f)
    }
}

impl fmt::Debug for Tin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ssn(ssn) => fmt::Debug::fmt(ssn, f),
            Self::Ein(ein) => fmt::Debug::fmt(ein, f),
        }
    }
}

impl FromStr for Tin {
    type Err = ParseTinError;

    /// Parses with `prefer_ein = false`: nine undelimited digits classify
    /// as an SSN.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw, false)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Ein, Ssn, Tin};
    use crate::containers::{RedactedRender, RenderOptions};

    // Serialization emits the default redacted rendering, never the digits.
    macro_rules! serialize_redacted {
        ($ty:ty) => {
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(&self.render(&RenderOptions::default()))
                }
            }
        };
    }

    serialize_redacted!(Ssn);
    serialize_redacted!(Ein);
    serialize_redacted!(Tin);
}
