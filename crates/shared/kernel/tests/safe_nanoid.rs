use amia_kernel::{SAFE_ALPHABET, safe_nanoid};
use std::collections::HashSet;

#[test]
fn submission_reference_is_twelve_unambiguous_chars() {
    let reference = safe_nanoid!();
    assert_eq!(reference.len(), 12);
    assert!(reference.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "{reference}");
    assert!(!reference.contains(['0', 'O', '1', 'l', 'I']));
}

#[test]
fn references_do_not_repeat_across_a_busy_day() {
    let references: HashSet<String> = (0..5_000).map(|_| safe_nanoid!()).collect();
    assert_eq!(references.len(), 5_000);
}

#[test]
fn custom_length() {
    assert_eq!(safe_nanoid!(20).len(), 20);
}
