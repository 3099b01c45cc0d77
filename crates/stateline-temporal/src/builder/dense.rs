//! Dense-interval materialization: per-label interval containment.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use stateline_core::errors::{BuildError, StateResult};
use stateline_core::models::{IntervalFact, SparseRow};

/// Reject intervals with `start >= end` before any table is touched.
pub fn validate_intervals(facts: &[IntervalFact]) -> StateResult<()> {
    for fact in facts {
        if fact.start_time >= fact.end_time {
            return Err(BuildError::MalformedInterval {
                entity_id: fact.entity_id,
                state: fact.state.clone(),
                start: fact.start_time.to_rfc3339(),
                end: fact.end_time.to_rfc3339(),
            }
            .into());
        }
    }
    Ok(())
}

/// One row per (entity, as-of date) at which the entity holds at least
/// one tracked state. A state boolean is true iff some interval with
/// that label contains the date (`start <= d < end`); overlapping
/// intervals with the same label OR together. Dates at which an entity
/// holds no state produce no row.
pub fn materialize(
    facts: &[IntervalFact],
    labels: &[String],
    as_of_dates: &[DateTime<Utc>],
) -> Vec<SparseRow> {
    let entities: BTreeSet<i64> = facts.iter().map(|f| f.entity_id).collect();

    let mut rows = Vec::new();
    for &entity_id in &entities {
        for &as_of_date in as_of_dates {
            let flags: Vec<bool> = labels
                .iter()
                .map(|label| {
                    facts.iter().any(|f| {
                        f.entity_id == entity_id && &f.state == label && f.contains(as_of_date)
                    })
                })
                .collect();
            if flags.iter().any(|&flag| flag) {
                rows.push(SparseRow {
                    entity_id,
                    as_of_date,
                    flags,
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn fact(entity_id: i64, state: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> IntervalFact {
        IntervalFact {
            entity_id,
            state: state.to_string(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn interval_end_is_exclusive() {
        let facts = vec![fact(5, "permitted", date(2016, 1, 1), date(2016, 6, 1))];
        let labels = vec!["permitted".to_string()];
        let dates = vec![date(2016, 5, 1), date(2016, 6, 1)];

        let rows = materialize(&facts, &labels, &dates);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_of_date, date(2016, 5, 1));
        assert_eq!(rows[0].flags, vec![true]);
    }

    #[test]
    fn overlapping_same_label_intervals_or_together() {
        let facts = vec![
            fact(1, "permitted", date(2016, 1, 1), date(2016, 3, 1)),
            fact(1, "permitted", date(2016, 2, 1), date(2016, 5, 1)),
        ];
        let labels = vec!["permitted".to_string()];
        let dates = vec![date(2016, 2, 15), date(2016, 4, 1)];

        let rows = materialize(&facts, &labels, &dates);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.flags == vec![true]));
    }

    #[test]
    fn uncovered_dates_produce_no_row() {
        let facts = vec![fact(1, "injail", date(2014, 7, 7), date(2014, 7, 15))];
        let labels = vec!["injail".to_string()];
        let dates = vec![date(2016, 1, 1), date(2016, 2, 1)];

        assert!(materialize(&facts, &labels, &dates).is_empty());
    }

    #[test]
    fn flags_align_with_the_label_order() {
        let facts = vec![
            fact(1, "injail", date(2016, 3, 7), date(2016, 4, 2)),
            fact(1, "permitted", date(2016, 1, 1), date(2016, 2, 1)),
        ];
        let labels = vec!["injail".to_string(), "permitted".to_string()];
        let dates = vec![date(2016, 1, 15), date(2016, 4, 1)];

        let rows = materialize(&facts, &labels, &dates);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].flags, vec![false, true]);
        assert_eq!(rows[1].flags, vec![true, false]);
    }

    #[test]
    fn backwards_interval_is_rejected() {
        let facts = vec![fact(1, "permitted", date(2016, 6, 1), date(2016, 1, 1))];
        assert!(validate_intervals(&facts).is_err());
    }
}
