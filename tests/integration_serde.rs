//! Integration tests for the serde implementations.
//!
//! Serialization must emit the default redacted rendering and nothing else:
//! a container that reaches a JSON log or API payload stays redacted.

#![cfg(feature = "serde")]

use sensitive::{Redactor, Sensitive, SensitiveArray};

#[test]
fn masked_field_serializes_redacted() {
    let field = Sensitive::masked("test case");
    assert_eq!(serde_json::to_string(&field).unwrap(), "\"#########\"");
}

#[test]
fn plain_container_serializes_an_empty_string() {
    let sensitive = Sensitive::new(String::from("secret"));
    assert_eq!(serde_json::to_string(&sensitive).unwrap(), "\"\"");
}

#[test]
fn array_serializes_through_its_strategy() {
    let strategy = SensitiveArray::joined(Redactor::defaulted_half(Redactor::mask('#')));
    let array = SensitiveArray::with_redactor(
        vec![String::from("123"), String::from("45"), String::from("6789")],
        strategy,
    );
    assert_eq!(serde_json::to_string(&array).unwrap(), "\"#####6789\"");
}

#[cfg(feature = "tin")]
mod tin {
    use sensitive::tin::{Ein, Ssn, Tin};

    #[test]
    fn identifiers_serialize_the_default_rendering() {
        let ssn = Ssn::parse("123-45-6789").unwrap();
        assert_eq!(serde_json::to_string(&ssn).unwrap(), "\"#####6789\"");

        let ein = Ein::parse("12-3456789").unwrap();
        assert_eq!(serde_json::to_string(&ein).unwrap(), "\"#####6789\"");

        let tin = Tin::parse("123456789", true).unwrap();
        assert_eq!(serde_json::to_string(&tin).unwrap(), "\"#####6789\"");
    }

    #[test]
    fn serialized_output_never_contains_the_leading_digits() {
        let ssn = Ssn::parse("987-65-4321").unwrap();
        let json = serde_json::to_string(&ssn).unwrap();
        assert!(!json.contains("98765"));
    }
}
