//! Tests for the Optional sum type

use super::Optional;
use pretty_assertions::assert_eq;

// ============================================================================
// Variant Inspection
// ============================================================================

#[test]
fn test_is_some() {
    assert!(Optional::Some(1).is_some());
    assert!(!Optional::<i64>::None.is_some());
}

#[test]
fn test_is_none_is_negation_of_is_some() {
    let present = Optional::Some("value");
    let absent: Optional<&str> = Optional::None;

    assert_eq!(present.is_none(), !present.is_some());
    assert_eq!(absent.is_none(), !absent.is_some());
    assert!(!present.is_none());
    assert!(absent.is_none());
}

// ============================================================================
// Eager Extraction
// ============================================================================

#[test]
fn test_value_or_default_some() {
    assert_eq!(Optional::Some(5).value_or_default(0), 5);
    assert_eq!(Optional::Some("found").value_or_default("fallback"), "found");
}

#[test]
fn test_value_or_default_none() {
    assert_eq!(Optional::<i64>::None.value_or_default(0), 0);
    assert_eq!(Optional::<&str>::None.value_or_default("fallback"), "fallback");
}

#[test]
fn test_value_or_default_transfers_ownership() {
    let payload = String::from("owned");
    let extracted = Optional::Some(payload).value_or_default(String::new());
    assert_eq!(extracted, "owned");
}

// ============================================================================
// Lazy Extraction
// ============================================================================

#[test]
fn test_value_or_some_never_invokes_fallback() {
    let mut invocations = 0;
    let value = Optional::Some(5).value_or(|| {
        invocations += 1;
        0
    });
    assert_eq!(value, 5);
    assert_eq!(invocations, 0);
}

#[test]
fn test_value_or_none_invokes_fallback_exactly_once() {
    let mut invocations = 0;
    let value = Optional::<i64>::None.value_or(|| {
        invocations += 1;
        42
    });
    assert_eq!(value, 42);
    assert_eq!(invocations, 1);
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_as_ref() {
    let present = Optional::Some(String::from("shared"));
    assert_eq!(present.as_ref().map(String::len), Optional::Some(6));
    // The receiver is still usable after borrowing.
    assert!(present.is_some());

    let absent: Optional<String> = Optional::None;
    assert!(absent.as_ref().is_none());
}

#[test]
fn test_as_mut() {
    let mut counter = Optional::Some(1);
    if let Optional::Some(value) = counter.as_mut() {
        *value += 10;
    }
    assert_eq!(counter, Optional::Some(11));
}

#[test]
fn test_map() {
    assert_eq!(Optional::Some(21).map(|n| n * 2), Optional::Some(42));
    assert_eq!(Optional::<i64>::None.map(|n| n * 2), Optional::None);
}

#[test]
fn test_take() {
    let mut slot = Optional::Some(7);
    assert_eq!(slot.take(), Optional::Some(7));
    assert_eq!(slot, Optional::None);
    assert_eq!(slot.take(), Optional::None);
}

// ============================================================================
// Host Interop and Defaults
// ============================================================================

#[test]
fn test_option_round_trip() {
    assert_eq!(Optional::from(Some(3)), Optional::Some(3));
    assert_eq!(Optional::<i64>::from(None), Optional::None);
    assert_eq!(Optional::Some(3).into_option(), Some(3));
    assert_eq!(Optional::<i64>::None.into_option(), None);
}

#[test]
fn test_default_is_none() {
    assert_eq!(Optional::<i64>::default(), Optional::None);
}

#[test]
fn test_reference_payload_is_pointer_sized() {
    assert_eq!(size_of::<Optional<&u8>>(), size_of::<usize>());
}
