use chrono::Utc;

use super::record::{clamp_progress, Draft, DraftField, ProjectRecord, ProjectStatus, RecordId};
use super::summary::Summary;

/// What a save of the project dialog will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Append a new record.
    New,
    /// Replace the fields of an existing record.
    Existing(RecordId),
}

/// Result of [`ProjectRecordStore::commit_draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// No dialog was open, or the edited record no longer exists.
    Unchanged,
}

/// An open project dialog: the draft being edited and where it will land.
#[derive(Debug, Clone)]
struct EditSession {
    target: EditTarget,
    draft: Draft,
}

/// In-memory collection of project records plus the pending dialog draft.
///
/// Every operation succeeds: unknown ids are ignored and form input is
/// coerced rather than rejected. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct ProjectRecordStore {
    records: Vec<ProjectRecord>,
    session: Option<EditSession>,
    last_issued: i64,
}

impl ProjectRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded with `records`, keeping their ids.
    pub fn with_records(records: Vec<ProjectRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// The four demonstration projects the dashboard opens with.
    pub fn with_sample_projects() -> Self {
        let sample = |id: i64,
                      name: &str,
                      client: &str,
                      progress: u8,
                      status: ProjectStatus,
                      deadline: &str,
                      team: i64,
                      budget: f64| ProjectRecord {
            id: RecordId(id),
            name: name.to_string(),
            client: client.to_string(),
            progress,
            status,
            team,
            budget,
            deadline: deadline.to_string(),
        };

        Self::with_records(vec![
            sample(1, "Website Redesign", "ABC Corp", 75, ProjectStatus::InProgress, "2024-02-15", 4, 15000.0),
            sample(2, "Mobile App Development", "XYZ Ltd", 45, ProjectStatus::InProgress, "2024-03-20", 6, 25000.0),
            sample(3, "Database Migration", "Tech Solutions", 100, ProjectStatus::Completed, "2024-01-10", 3, 8000.0),
            sample(4, "E-commerce Platform", "Online Store", 20, ProjectStatus::Planning, "2024-04-30", 8, 40000.0),
        ])
    }

    // --- Read accessors ---

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// The draft of the open dialog, if any.
    pub fn draft(&self) -> Option<&Draft> {
        self.session.as_ref().map(|s| &s.draft)
    }

    pub fn edit_target(&self) -> Option<EditTarget> {
        self.session.as_ref().map(|s| s.target)
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.records)
    }

    // --- Dialog lifecycle ---

    /// Open the dialog with an empty draft for a new project.
    pub fn begin_create(&mut self) {
        self.session = Some(EditSession {
            target: EditTarget::New,
            draft: Draft::default(),
        });
    }

    /// Open the dialog on a copy of record `id`. Ignored if `id` is unknown.
    pub fn begin_edit(&mut self, id: RecordId) {
        let Some(record) = self.record(id) else {
            tracing::debug!(%id, "edit requested for unknown project");
            return;
        };
        self.session = Some(EditSession {
            target: EditTarget::Existing(id),
            draft: Draft::from(record),
        });
    }

    /// Write a raw form value into the open draft. Ignored when no dialog is open.
    pub fn update_draft_field(&mut self, field: DraftField, raw: &str) {
        if let Some(session) = self.session.as_mut() {
            session.draft.set_field(field, raw);
        }
    }

    /// Save the open draft and close the dialog.
    pub fn commit_draft(&mut self) -> CommitOutcome {
        let Some(EditSession { target, draft }) = self.session.take() else {
            return CommitOutcome::Unchanged;
        };

        match target {
            EditTarget::New => {
                let id = self.issue_id();
                self.records.push(ProjectRecord::from_draft(id, draft));
                tracing::debug!(%id, "project created");
                CommitOutcome::Created(id)
            }
            EditTarget::Existing(id) => match self.records.iter_mut().find(|r| r.id == id) {
                Some(record) => {
                    record.apply_draft(draft);
                    tracing::debug!(%id, "project updated");
                    CommitOutcome::Updated(id)
                }
                None => {
                    tracing::debug!(%id, "edited project vanished before save");
                    CommitOutcome::Unchanged
                }
            },
        }
    }

    /// Close the dialog, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    // --- Record mutations ---

    /// Remove record `id`. Returns whether a record was removed.
    pub fn delete_record(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            tracing::debug!(%id, "project deleted");
        }
        removed
    }

    /// Shift the progress of record `id` by `delta`, clamped to 0..=100.
    /// Returns the new progress, or `None` if `id` is unknown.
    pub fn adjust_progress(&mut self, id: RecordId, delta: i64) -> Option<u8> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.progress = clamp_progress(i64::from(record.progress).saturating_add(delta));
        tracing::debug!(%id, progress = record.progress, "project progress adjusted");
        Some(record.progress)
    }

    /// Time-based id, bumped past every id issued or present so it stays unique.
    /// Once the id space above the highest id is exhausted, the smallest free
    /// positive id is reused.
    fn issue_id(&mut self) -> RecordId {
        let highest = self
            .records
            .iter()
            .map(|r| r.id.0)
            .max()
            .unwrap_or(0)
            .max(self.last_issued);
        match highest.checked_add(1) {
            Some(next) => {
                let id = Utc::now().timestamp_millis().max(next);
                self.last_issued = id;
                RecordId(id)
            }
            None => RecordId(self.smallest_free_id()),
        }
    }

    fn smallest_free_id(&self) -> i64 {
        let mut taken: Vec<i64> = self.records.iter().map(|r| r.id.0).filter(|&id| id > 0).collect();
        taken.sort_unstable();
        taken.dedup();
        let mut candidate = 1;
        for id in taken {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }
}
