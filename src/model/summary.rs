use super::record::{ProjectRecord, ProjectStatus};

/// Aggregate figures shown in the dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_count: usize,
    pub active_count: usize,
    pub completed_count: usize,
    pub total_budget: f64,
    /// Rounded mean progress, `None` when there are no records.
    pub average_progress: Option<u8>,
}

impl Summary {
    /// Compute all figures in a single pass over `records`.
    pub fn compute(records: &[ProjectRecord]) -> Self {
        let mut summary = Summary::default();
        let mut progress_sum: u64 = 0;

        for record in records {
            summary.total_count += 1;
            match record.status {
                ProjectStatus::InProgress => summary.active_count += 1,
                ProjectStatus::Completed => summary.completed_count += 1,
                ProjectStatus::Planning | ProjectStatus::OnHold => {}
            }
            summary.total_budget += record.budget;
            progress_sum += u64::from(record.progress);
        }

        if summary.total_count > 0 {
            let mean = progress_sum as f64 / summary.total_count as f64;
            summary.average_progress = Some(mean.round() as u8);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{Draft, RecordId};
    use pretty_assertions::assert_eq;

    fn record(id: i64, progress: u8, status: ProjectStatus, budget: f64) -> ProjectRecord {
        ProjectRecord::from_draft(
            RecordId(id),
            Draft {
                progress,
                status,
                budget,
                ..Draft::default()
            },
        )
    }

    #[test]
    fn empty_set_has_no_average() {
        assert_eq!(
            Summary::compute(&[]),
            Summary {
                total_count: 0,
                active_count: 0,
                completed_count: 0,
                total_budget: 0.0,
                average_progress: None,
            }
        );
    }

    #[test]
    fn four_record_dashboard() {
        let records = vec![
            record(1, 75, ProjectStatus::InProgress, 15000.0),
            record(2, 45, ProjectStatus::InProgress, 25000.0),
            record(3, 100, ProjectStatus::Completed, 8000.0),
            record(4, 20, ProjectStatus::Planning, 40000.0),
        ];
        assert_eq!(
            Summary::compute(&records),
            Summary {
                total_count: 4,
                active_count: 2,
                completed_count: 1,
                total_budget: 88000.0,
                average_progress: Some(60),
            }
        );
    }

    #[test]
    fn average_rounds_half_up() {
        let records = vec![
            record(1, 0, ProjectStatus::OnHold, 0.0),
            record(2, 1, ProjectStatus::OnHold, 0.0),
        ];
        assert_eq!(Summary::compute(&records).average_progress, Some(1));

        let records = vec![
            record(1, 10, ProjectStatus::Planning, 0.0),
            record(2, 10, ProjectStatus::Planning, 0.0),
            record(3, 11, ProjectStatus::Planning, 0.0),
        ];
        assert_eq!(Summary::compute(&records).average_progress, Some(10));
    }
}
