//! Property-based tests for the project store.

#[cfg(test)]
mod tests {
    use crate::model::record::{Draft, DraftField, ProjectRecord, ProjectStatus, RecordId};
    use crate::model::store::{CommitOutcome, ProjectRecordStore};
    use proptest::prelude::*;

    fn arb_status() -> impl Strategy<Value = ProjectStatus> {
        prop::sample::select(ProjectStatus::ALL.to_vec())
    }

    fn arb_records() -> impl Strategy<Value = Vec<ProjectRecord>> {
        prop::collection::vec((0u8..=100, arb_status(), 0u32..1_000_000, 0i64..50), 0..12).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (progress, status, budget, team))| {
                        ProjectRecord::from_draft(
                            RecordId(i as i64 + 1),
                            Draft {
                                name: format!("Project {i}"),
                                progress,
                                status,
                                team,
                                budget: f64::from(budget),
                                ..Draft::default()
                            },
                        )
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn adjust_progress_stays_in_range(start in 0u8..=100, delta in any::<i64>()) {
            let mut store = ProjectRecordStore::with_records(vec![ProjectRecord::from_draft(
                RecordId(1),
                Draft { progress: start, ..Draft::default() },
            )]);
            let progress = store.adjust_progress(RecordId(1), delta).unwrap();
            prop_assert!(progress <= 100);
        }

        #[test]
        fn zero_adjustment_changes_nothing(records in arb_records()) {
            let mut store = ProjectRecordStore::with_records(records.clone());
            for record in &records {
                store.adjust_progress(record.id, 0);
            }
            prop_assert_eq!(store.records(), records.as_slice());
        }

        #[test]
        fn draft_progress_always_clamped(raw in "\\PC*") {
            let mut store = ProjectRecordStore::new();
            store.begin_create();
            store.update_draft_field(DraftField::Progress, &raw);
            prop_assert!(store.draft().unwrap().progress <= 100);
        }

        #[test]
        fn deleting_twice_equals_deleting_once(records in arb_records(), pick in 0i64..15) {
            let mut once = ProjectRecordStore::with_records(records.clone());
            once.delete_record(RecordId(pick));
            let mut twice = ProjectRecordStore::with_records(records);
            twice.delete_record(RecordId(pick));
            twice.delete_record(RecordId(pick));
            prop_assert_eq!(once.records(), twice.records());
        }

        #[test]
        fn total_budget_is_exact_sum(records in arb_records()) {
            let expected: f64 = records.iter().map(|r| r.budget).sum();
            let store = ProjectRecordStore::with_records(records);
            prop_assert_eq!(store.summary().total_budget, expected);
        }

        #[test]
        fn create_adds_exactly_one(records in arb_records(), name in "[a-zA-Z ]{0,20}") {
            let mut store = ProjectRecordStore::with_records(records.clone());
            store.begin_create();
            store.update_draft_field(DraftField::Name, &name);
            let outcome = store.commit_draft();
            prop_assert_eq!(store.records().len(), records.len() + 1);
            let created = store.records().last().unwrap();
            prop_assert_eq!(outcome, CommitOutcome::Created(created.id));
            prop_assert!(records.iter().all(|r| r.id != created.id));
            prop_assert_eq!(&created.name, &name);
        }
    }
}
