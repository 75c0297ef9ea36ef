//! Range validation for CPS summary statistics.

use cps_model::{RangeTable, RangeViolation, StatRecord};

/// Compare each stat record against the documented valid ranges.
///
/// Minimum and maximum are checked independently in one pass over the
/// stats, in input order. The maximum check looks up violations already
/// pushed for the same variable within this pass and appends to their
/// issue text instead of pushing a second entry; keeping both checks in
/// the same iteration cycle is what bounds the list to one entry per
/// variable. Names absent from the table are skipped without diagnostic.
///
/// NaN stats compare false against both bounds and never trip a check.
pub fn validate_ranges(stats: &[StatRecord], ranges: &RangeTable) -> Vec<RangeViolation> {
    let mut violations: Vec<RangeViolation> = Vec::new();
    for stat in stats {
        let Some(range) = ranges.get(&stat.name) else {
            continue;
        };
        if stat.min < range.min {
            violations.push(RangeViolation {
                variable: stat.name.clone(),
                data_min: stat.min,
                data_max: stat.max,
                valid_min: range.min,
                valid_max: range.max,
                description: range.description.clone(),
                issue: format!(
                    "Data minimum ({}) is below valid minimum ({})",
                    stat.min, range.min
                ),
            });
        }
        if stat.max > range.max {
            match violations
                .iter_mut()
                .find(|violation| violation.variable == stat.name)
            {
                Some(existing) => {
                    existing.issue.push_str(&format!(
                        " AND data maximum ({}) exceeds valid maximum ({})",
                        stat.max, range.max
                    ));
                }
                None => violations.push(RangeViolation {
                    variable: stat.name.clone(),
                    data_min: stat.min,
                    data_max: stat.max,
                    valid_min: range.min,
                    valid_max: range.max,
                    description: range.description.clone(),
                    issue: format!(
                        "Data maximum ({}) exceeds valid maximum ({})",
                        stat.max, range.max
                    ),
                }),
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use cps_model::ValidRange;

    fn stat(name: &str, min: f64, max: f64) -> StatRecord {
        StatRecord {
            name: name.to_string(),
            mean: (min + max) / 2.0,
            min,
            max,
            n: 1000.0,
        }
    }

    fn age_table() -> RangeTable {
        let mut table = RangeTable::default();
        table.insert(
            "PRTAGE",
            ValidRange {
                min: 0.0,
                max: 85.0,
                description: "Age".to_string(),
            },
        );
        table
    }

    #[test]
    fn both_bounds_tripped_yields_one_joined_entry() {
        let violations = validate_ranges(&[stat("PRTAGE", -1.0, 90.0)], &age_table());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].issue,
            "Data minimum (-1) is below valid minimum (0) \
             AND data maximum (90) exceeds valid maximum (85)"
        );
    }

    #[test]
    fn minimum_only() {
        let violations = validate_ranges(&[stat("PRTAGE", -1.0, 80.0)], &age_table());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].issue,
            "Data minimum (-1) is below valid minimum (0)"
        );
    }

    #[test]
    fn maximum_only() {
        let violations = validate_ranges(&[stat("PRTAGE", 5.0, 90.0)], &age_table());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].issue,
            "Data maximum (90) exceeds valid maximum (85)"
        );
    }

    #[test]
    fn in_range_stats_produce_nothing() {
        assert!(validate_ranges(&[stat("PRTAGE", 0.0, 85.0)], &age_table()).is_empty());
    }

    #[test]
    fn unknown_variables_are_skipped() {
        let violations = validate_ranges(&[stat("UNKNOWNVAR", 0.0, 10.0)], &age_table());
        assert!(violations.is_empty());
    }

    #[test]
    fn nan_stats_never_trip_a_check() {
        let violations = validate_ranges(&[stat("PRTAGE", f64::NAN, f64::NAN)], &age_table());
        assert!(violations.is_empty());
    }
}
