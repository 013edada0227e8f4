//! Edge-case coverage: unicode payloads, extreme precisions, empty
//! sequences, and protocol corner cases.

use sensitive::{MASK_CHAR, RedactedRender, RenderOptions, Redactor, Sensitive, SensitiveArray};

#[test]
fn mask_operates_on_scalar_values_not_bytes() {
    let field = Sensitive::masked("naïve café");
    // 10 scalar values, 12 bytes.
    assert_eq!(format!("{field}"), "##########");
    assert_eq!(format!("{field:.4}"), "######café");
}

#[test]
fn width_counts_scalar_values() {
    let field = Sensitive::with_redactor(String::from("héllo"), Redactor::mask(MASK_CHAR));
    // Fully exposed at precision 5; padded to 7 scalar values.
    assert_eq!(format!("{field:7.5}"), "  héllo");
}

#[test]
fn huge_precision_is_full_exposure_not_a_panic() {
    let field = Sensitive::masked("abc");
    assert_eq!(format!("{field:.prec$}", prec = 2000000), "abc");
}

#[test]
fn zero_precision_masks_everything() {
    let field = Sensitive::masked("abc");
    assert_eq!(format!("{field:.0}"), "###");
}

#[test]
fn empty_text_renders_empty_for_every_precision() {
    let field = Sensitive::masked("");
    assert_eq!(format!("{field}"), "");
    assert_eq!(format!("{field:.3}"), "");
    assert_eq!(format!("{field:4}"), "    ");
}

#[test]
fn empty_component_sequence_renders_empty() {
    let strategy = SensitiveArray::joined(Redactor::mask(MASK_CHAR));
    let array = SensitiveArray::<String>::with_redactor(Vec::new(), strategy);
    assert_eq!(format!("{array}"), "");
    assert_eq!(format!("{array:3}"), "   ");
}

#[test]
fn single_component_needs_no_delimiter() {
    let strategy = SensitiveArray::delimited('-', Redactor::mask(MASK_CHAR));
    let array = SensitiveArray::with_redactor(vec![String::from("1234")], strategy);
    assert_eq!(format!("{array:.4}"), "1234");
}

#[test]
fn odd_lengths_round_the_default_exposure_down() {
    let field = Sensitive::with_redactor(
        String::from("abcde"),
        Redactor::defaulted_half(Redactor::mask(MASK_CHAR)),
    );
    assert_eq!(format!("{field}"), "###de");
}

#[test]
fn defaulted_does_not_clamp_but_limited_does() {
    let defaulted = Sensitive::with_redactor(
        String::from("abcdef"),
        Redactor::defaulted_half(Redactor::mask(MASK_CHAR)),
    );
    let limited = Sensitive::with_redactor(
        String::from("abcdef"),
        Redactor::limited_half(Redactor::mask(MASK_CHAR)),
    );

    // Same default when the caller specifies nothing...
    assert_eq!(format!("{defaulted}"), "###def");
    assert_eq!(format!("{limited}"), "###def");

    // ...but an explicit precision beyond half passes through only the
    // defaulted wrapper.
    assert_eq!(format!("{defaulted:.5}"), "#bcdef");
    assert_eq!(format!("{limited:.5}"), "###def");
}

#[test]
fn uppercase_growth_is_measured_after_conversion() {
    let field = Sensitive::with_redactor(String::from("straße"), Redactor::mask(MASK_CHAR));
    // "straße" uppercases to "STRASSE": seven scalar values, so a width of
    // seven adds no padding.
    let options = RenderOptions::new().precision(6).uppercase().width(7);
    assert_eq!(field.render(&options), "STRASSE");
}

#[test]
fn strategies_shared_across_threads() {
    let field = std::sync::Arc::new(Sensitive::masked("test case"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let field = std::sync::Arc::clone(&field);
            std::thread::spawn(move || format!("{field:.4}"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "#####case");
    }
}
