//! Property tests for the pure materialization logic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use stateline_core::models::{EventFact, IntervalFact};
use stateline_temporal::builder::{dense, events};

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()
}

fn day(offset: i64) -> DateTime<Utc> {
    base_date() + Duration::days(offset)
}

/// Monthly-ish as-of grid over roughly a year.
fn as_of_grid() -> Vec<DateTime<Utc>> {
    (0..12).map(|i| day(i * 30)).collect()
}

fn event_strategy() -> impl Strategy<Value = Vec<EventFact>> {
    proptest::collection::vec((0i64..8, 0i64..400, any::<bool>()), 1..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(entity_id, offset, outcome)| EventFact {
                entity_id,
                event_time: day(offset),
                outcome,
            })
            .collect()
    })
}

fn interval_strategy() -> impl Strategy<Value = Vec<IntervalFact>> {
    proptest::collection::vec((0i64..8, 0usize..2, 0i64..380, 1i64..60), 1..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(entity_id, label_idx, start, len)| IntervalFact {
                entity_id,
                state: ["parole", "custody"][label_idx].to_string(),
                start_time: day(start),
                end_time: day(start + len),
            })
            .collect()
    })
}

proptest! {
    // Once active at some as-of date, active at every later one,
    // whatever false-outcome events exist.
    #[test]
    fn prop_event_activity_is_monotonic(facts in event_strategy()) {
        let dates = as_of_grid();
        let rows = events::materialize(&facts, &dates);

        let entities: std::collections::BTreeSet<i64> =
            facts.iter().map(|e| e.entity_id).collect();
        for &entity_id in &entities {
            let mut seen_active = false;
            for &as_of in &dates {
                let row = rows
                    .iter()
                    .find(|r| r.entity_id == entity_id && r.as_of_date == as_of)
                    .expect("cross product row missing");
                let active = row.flags[0];
                prop_assert!(!(seen_active && !active), "active flag was cleared");
                seen_active |= active;

                // Ground truth: OR over qualifying events.
                let expected = facts.iter().any(|e| {
                    e.entity_id == entity_id && e.outcome && e.event_time <= as_of
                });
                prop_assert_eq!(active, expected);
            }
        }
    }

    // Exactly one row per (entity, as-of date) pair in event mode.
    #[test]
    fn prop_event_cross_product_is_complete(facts in event_strategy()) {
        let dates = as_of_grid();
        let rows = events::materialize(&facts, &dates);

        let entities: std::collections::BTreeSet<i64> =
            facts.iter().map(|e| e.entity_id).collect();
        prop_assert_eq!(rows.len(), entities.len() * dates.len());

        let pairs: std::collections::BTreeSet<(i64, DateTime<Utc>)> =
            rows.iter().map(|r| (r.entity_id, r.as_of_date)).collect();
        prop_assert_eq!(pairs.len(), rows.len());
    }

    // Every emitted dense row matches brute-force containment, and the
    // only omitted pairs are all-false ones.
    #[test]
    fn prop_dense_rows_match_bruteforce(facts in interval_strategy()) {
        let labels = vec!["custody".to_string(), "parole".to_string()];
        let dates = as_of_grid();
        let rows = dense::materialize(&facts, &labels, &dates);

        let entities: std::collections::BTreeSet<i64> =
            facts.iter().map(|f| f.entity_id).collect();
        for &entity_id in &entities {
            for &as_of in &dates {
                let expected: Vec<bool> = labels
                    .iter()
                    .map(|label| {
                        facts.iter().any(|f| {
                            f.entity_id == entity_id
                                && &f.state == label
                                && f.start_time <= as_of
                                && as_of < f.end_time
                        })
                    })
                    .collect();
                let row = rows
                    .iter()
                    .find(|r| r.entity_id == entity_id && r.as_of_date == as_of);
                match row {
                    Some(row) => prop_assert_eq!(&row.flags, &expected),
                    None => prop_assert!(expected.iter().all(|&f| !f)),
                }
            }
        }
    }
}
