//! Property tests over generated records

use proptest::prelude::*;
use tagrule::{FieldDescriptor, MessageOverrides, Validator};

proptest! {
    #[test]
    fn records_without_rules_never_fail(
        numbers in prop::collection::vec(any::<i64>(), 0..8),
        words in prop::collection::vec(".*", 0..8),
    ) {
        let mut record: Vec<FieldDescriptor> = Vec::new();
        for (i, n) in numbers.iter().enumerate() {
            record.push(FieldDescriptor::of(format!("N{i}"), n, ""));
        }
        for (i, w) in words.iter().enumerate() {
            record.push(FieldDescriptor::of(format!("W{i}"), w.as_str(), ""));
        }
        let violations = Validator::new().validate(&record, &MessageOverrides::new()).unwrap();
        prop_assert!(violations.is_empty());
    }

    #[test]
    fn numeric_min_fails_exactly_below_bound(value in any::<i32>(), bound in any::<i32>()) {
        let rules = format!("min:{bound}");
        let record = vec![FieldDescriptor::of("N", &value, rules)];
        let violations = Validator::new().validate(&record, &MessageOverrides::new()).unwrap();
        prop_assert_eq!(violations.len(), usize::from(value < bound));
    }

    #[test]
    fn string_length_counts_chars(word in "\\PC{0,12}", bound in 0usize..12) {
        let record = vec![
            FieldDescriptor::of("S", word.as_str(), format!("min:{bound}|max:{bound}")),
        ];
        let violations = Validator::new().validate(&record, &MessageOverrides::new()).unwrap();
        let len = word.chars().count();
        prop_assert_eq!(violations.len(), usize::from(len < bound) + usize::from(len > bound));
    }
}
