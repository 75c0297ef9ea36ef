//! Behavioral tests for the range validator.

use cps_model::{RangeTable, StatRecord, ValidRange};
use cps_validate::validate_ranges;
use proptest::prelude::*;

fn stat(name: &str, min: f64, max: f64) -> StatRecord {
    StatRecord {
        name: name.to_string(),
        mean: 0.0,
        min,
        max,
        n: 1000.0,
    }
}

fn table() -> RangeTable {
    let mut table = RangeTable::default();
    table.insert(
        "PRTAGE",
        ValidRange {
            min: 0.0,
            max: 85.0,
            description: "Age".to_string(),
        },
    );
    table.insert(
        "PESEX",
        ValidRange {
            min: 1.0,
            max: 2.0,
            description: "Sex".to_string(),
        },
    );
    table
}

#[test]
fn violations_preserve_stat_input_order() {
    let stats = vec![
        stat("PESEX", 0.0, 2.0),
        stat("UNKNOWNVAR", -99.0, 99.0),
        stat("PRTAGE", -1.0, 90.0),
    ];
    let violations = validate_ranges(&stats, &table());
    let names: Vec<&str> = violations.iter().map(|v| v.variable.as_str()).collect();
    assert_eq!(names, vec!["PESEX", "PRTAGE"]);
}

#[test]
fn repeated_stat_lines_append_to_the_first_entry() {
    // The same mnemonic twice in the stats block: the second max breach
    // finds the entry pushed for the first and extends its issue text.
    let stats = vec![stat("PRTAGE", 5.0, 90.0), stat("PRTAGE", 5.0, 91.0)];
    let violations = validate_ranges(&stats, &table());
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].issue,
        "Data maximum (90) exceeds valid maximum (85) \
         AND data maximum (91) exceeds valid maximum (85)"
    );
}

#[test]
fn violation_carries_both_ranges_and_description() {
    let violations = validate_ranges(&[stat("PRTAGE", -1.0, 90.0)], &table());
    let violation = &violations[0];
    assert_eq!(violation.variable, "PRTAGE");
    assert_eq!(violation.data_min, -1.0);
    assert_eq!(violation.data_max, 90.0);
    assert_eq!(violation.valid_min, 0.0);
    assert_eq!(violation.valid_max, 85.0);
    assert_eq!(violation.description, "Age");
}

proptest! {
    #[test]
    fn idempotent_over_the_same_inputs(min in -200.0f64..200.0, max in -200.0f64..200.0) {
        let stats = vec![stat("PRTAGE", min, max), stat("PESEX", min, max)];
        let first = validate_ranges(&stats, &table());
        let second = validate_ranges(&stats, &table());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_most_one_entry_per_distinct_variable(min in -200.0f64..200.0, max in -200.0f64..200.0) {
        let stats = vec![stat("PRTAGE", min, max)];
        let violations = validate_ranges(&stats, &table());
        prop_assert!(violations.len() <= 1);
        let expected = min < 0.0 || max > 85.0;
        prop_assert_eq!(!violations.is_empty(), expected);
    }
}
