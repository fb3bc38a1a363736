pub mod proptests;
pub mod record;
pub mod store;
pub mod summary;

pub use record::{Draft, DraftField, ProjectRecord, ProjectStatus, RecordId};
pub use store::{CommitOutcome, EditTarget, ProjectRecordStore};
pub use summary::Summary;
