//! Tests for built-in rules.

use super::*;
use crate::rule::ValidationRule;

// ============================================================================
// LengthRule Tests
// ============================================================================

mod length_rule {
    use super::*;

    #[test]
    fn test_bounds() {
        let rule = LengthRule::<Vec<bool>>::between(10, 1028);
        assert_eq!(rule.min(), 10);
        assert_eq!(rule.max(), 1028);

        assert!(rule.run(&vec![true; 10]).is_ok());
        assert!(rule.run(&vec![false; 1028]).is_ok());
        assert_eq!(
            rule.run(&vec![true; 5]).unwrap_err().identifier(),
            "lengthTooShort"
        );
        assert_eq!(
            rule.run(&vec![false; 1029]).unwrap_err().identifier(),
            "lengthTooLong"
        );
    }

    #[test]
    fn test_reason() {
        let rule = LengthRule::<String>::at_most(3);
        let err = rule.run(&"four".to_string()).unwrap_err();
        assert_eq!(err.reason(), "Length of collection value is greater than 3");
    }

    #[test]
    fn test_string_measured_in_chars() {
        let rule = LengthRule::<String>::at_most(3);
        assert!(rule.run(&"héé".to_string()).is_ok());
    }

    #[test]
    fn test_maps_and_sets() {
        use std::collections::{BTreeSet, HashMap};

        let rule = LengthRule::<HashMap<String, String>>::at_least(1);
        assert!(rule.run(&HashMap::new()).is_err());

        let rule = LengthRule::<BTreeSet<i32>>::at_most(2);
        assert!(rule.run(&[1, 2].into_iter().collect()).is_ok());
        assert!(rule.run(&[1, 2, 3].into_iter().collect()).is_err());
    }

    #[test]
    fn test_fixed_length() {
        let rule = FixedLength::<[u8; 4], 1, 3>::default();
        assert_eq!(rule.run(&[0; 4]).unwrap_err().identifier(), "lengthTooLong");

        let rule = FixedLength::<Vec<u8>, 1, 3>::default();
        assert!(rule.run(&vec![1, 2]).is_ok());
    }

    #[test]
    fn test_default_accepts_everything() {
        let rule = LengthRule::<Vec<u8>>::default();
        assert!(rule.run(&Vec::new()).is_ok());
        assert_eq!(rule, LengthRule::between(0, usize::MAX));
    }
}

// ============================================================================
// RangeRule Tests
// ============================================================================

mod range_rule {
    use super::*;

    #[test]
    fn test_between() {
        let rule = RangeRule::between(1_000, 9_999);
        assert!(rule.run(&1_000).is_ok());
        assert!(rule.run(&9_999).is_ok());

        let err = rule.run(&999).unwrap_err();
        assert_eq!(err.identifier(), "valueTooSmall");
        assert_eq!(err.reason(), "Value passed in is less than 1000");

        let err = rule.run(&10_000).unwrap_err();
        assert_eq!(err.identifier(), "valueTooGreat");
        assert_eq!(err.reason(), "Value passed in is greater than 9999");
    }

    #[test]
    fn test_one_sided() {
        let rule = RangeRule::at_least(42);
        assert!(rule.run(&i32::MAX).is_ok());
        assert!(rule.run(&41).is_err());

        let rule = RangeRule::at_most(1.5);
        assert!(rule.run(&f64::MIN).is_ok());
        assert!(rule.run(&1.6).is_err());
    }

    #[test]
    fn test_unbounded() {
        let rule = RangeRule::<i64>::default();
        assert!(rule.min().is_none());
        assert!(rule.max().is_none());
        assert!(rule.run(&i64::MIN).is_ok());
    }

    #[test]
    fn test_inverted_bounds_reports_max_first() {
        let rule = RangeRule::between(10, 0);
        assert_eq!(rule.run(&5).unwrap_err().identifier(), "valueTooGreat");
    }

    #[test]
    fn test_float_bounds() {
        let rule = RangeRule::between(0.0, 1.0);
        assert!(rule.run(&0.0).is_ok());
        assert!(rule.run(&1.0).is_ok());
        assert_eq!(rule.run(&-0.1).unwrap_err().identifier(), "valueTooSmall");
        assert_eq!(rule.run(&1.1).unwrap_err().identifier(), "valueTooGreat");
    }

    #[test]
    fn test_nan_rejected() {
        let rule = RangeRule::between(0.0, 1.0);
        assert_eq!(rule.run(&f64::NAN).unwrap_err().identifier(), "valueTooGreat");

        let rule = RangeRule::at_least(0.0_f32);
        assert_eq!(rule.run(&f32::NAN).unwrap_err().identifier(), "valueTooSmall");

        assert!(MagnitudeRule::<f64>::new().run(&f64::NAN).is_err());
    }

    #[test]
    fn test_fixed_range() {
        let rule = FixedRange::<1_000, 9_999>;
        assert!(rule.run(&5_000).is_ok());
        assert_eq!(rule.run(&999).unwrap_err().identifier(), "valueTooSmall");
    }

    #[test]
    fn test_magnitude() {
        let rule = MagnitudeRule::<i32>::new();
        assert!(rule.run(&0).is_ok());
        assert!(rule.run(&7).is_ok());
        assert_eq!(rule.run(&-1).unwrap_err().identifier(), "invalidMagnitude");

        let rule = MagnitudeRule::<f64>::default();
        assert!(rule.run(&-0.5).is_err());
    }
}

// ============================================================================
// PatternRule Tests
// ============================================================================

mod pattern_rule {
    use super::*;

    const US_PHONE: &str = r"^1?-?\(?[0-9]{3}\)?-?[0-9]{3}-?[0-9]{4}$";

    #[test]
    fn test_phone_number() {
        let rule = PatternRule::new(US_PHONE).unwrap();
        assert!(rule.run(&"7319434316".to_string()).is_ok());
        assert!(rule.run(&"1-(731)-943-4316".to_string()).is_ok());

        let err = rule.run(&String::new()).unwrap_err();
        assert_eq!(err.identifier(), "noRegexMatch");
        assert!(err.reason().contains(US_PHONE));
    }

    #[test]
    fn test_unanchored_matches_anywhere() {
        let rule = PatternRule::new("[0-9]+").unwrap();
        assert!(rule.run(&"abc123def".to_string()).is_ok());
        assert!(rule.run(&"abc".to_string()).is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternRule::new("(unclosed").is_err());
    }

    #[test]
    fn test_pattern_accessor() {
        let rule: PatternRule = regex::Regex::new("^a$").unwrap().into();
        assert_eq!(rule.pattern(), "^a$");
    }
}

// ============================================================================
// Optional Tests
// ============================================================================

mod optional {
    use super::*;

    #[test]
    fn test_not_none() {
        let rule = NotNone::<bool>::new();
        assert!(rule.run(&Some(true)).is_ok());
        assert!(rule.run(&Some(false)).is_ok());
        assert_eq!(rule.run(&None).unwrap_err().identifier(), "valueIsNil");
    }

    #[test]
    fn test_if_present() {
        let rule = IfPresent::new(LengthRule::<String>::between(10, 1028));
        assert!(rule.run(&Some("x".repeat(10))).is_ok());
        assert!(rule.run(&Some("x".repeat(1028))).is_ok());
        assert!(rule.run(&None).is_ok());
        assert_eq!(
            rule.run(&Some("x".repeat(9))).unwrap_err().identifier(),
            "lengthTooShort"
        );
        assert_eq!(
            rule.run(&Some("x".repeat(1029))).unwrap_err().identifier(),
            "lengthTooLong"
        );
    }

    #[test]
    fn test_if_present_runs_inner_tree() {
        let inner = crate::rule::AppendedRule::new(RangeRule::at_least(0), RangeRule::at_most(9));
        let rule = IfPresent::new(inner);
        assert_eq!(rule.run(&Some(10)).unwrap_err().identifier(), "valueTooGreat");
    }
}

// ============================================================================
// ElementRule Tests
// ============================================================================

mod element_rule {
    use super::*;

    #[test]
    fn test_each_element() {
        let rule = ElementRule::<Vec<String>, _>::new(LengthRule::<String>::at_most(1028));
        let longest = "g".repeat(1028);
        assert!(rule
            .run(&vec!["G".into(), "OOOO".into(), "World".into(), longest])
            .is_ok());

        let too_long = "x".repeat(1029);
        assert_eq!(
            rule.run(&vec!["G".into(), "O".into(), too_long])
                .unwrap_err()
                .identifier(),
            "lengthTooLong"
        );
    }

    #[test]
    fn test_first_failing_element_reported() {
        let rule = ElementRule::<Vec<i32>, _>::new(RangeRule::between(0, 10));
        assert_eq!(rule.run(&vec![5, -1, 11]).unwrap_err().identifier(), "valueTooSmall");
    }

    #[test]
    fn test_empty_collection() {
        let rule = ElementRule::<Vec<i32>, _>::new(RangeRule::between(0, 10));
        assert!(rule.run(&Vec::new()).is_ok());
    }
}

// ============================================================================
// BoundsRule Tests
// ============================================================================

mod bounds_rule {
    use super::*;

    #[test]
    fn test_endpoints() {
        let rule = BoundsRule::new(RangeRule::between(0, 100));
        assert!(rule.run(&(0..=100)).is_ok());
        assert_eq!(rule.run(&(-1..=5)).unwrap_err().identifier(), "valueTooSmall");
        assert_eq!(rule.run(&(5..=101)).unwrap_err().identifier(), "valueTooGreat");
    }

    #[test]
    fn test_nan_endpoint() {
        let rule = BoundsRule::new(RangeRule::between(0.0, 1.0));
        assert_eq!(
            rule.run(&(f64::NAN..=0.5)).unwrap_err().identifier(),
            "invalidBounds"
        );
    }

    #[test]
    fn test_inverted() {
        let rule = BoundsRule::new(NoRule::<i32>::new());
        assert_eq!(rule.run(&(3..=1)).unwrap_err().identifier(), "invalidBounds");
        assert!(rule.run(&(1..=1)).is_ok());
    }
}

mod no_rule {
    use super::*;

    #[test]
    fn test_accepts_everything() {
        let rule = NoRule::<String>::default();
        assert!(rule.run(&String::new()).is_ok());
        assert!(rule.subrules().is_empty());
    }
}
