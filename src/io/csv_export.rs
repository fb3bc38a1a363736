use crate::model::ProjectRecord;
use std::path::Path;

/// Errors raised while writing the CSV report.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 7] = [
    "Project Name",
    "Client",
    "Progress",
    "Status",
    "Team Size",
    "Budget",
    "Deadline",
];

/// Export the project overview table to a comma-delimited CSV file.
///
/// Rows follow display order. Returns the number of projects written.
pub fn export_csv(records: &[ProjectRecord], path: &Path) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path)?;
    write_records(records, file)
}

fn write_records<W: std::io::Write>(
    records: &[ProjectRecord],
    out: W,
) -> Result<usize, ExportError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record([
            record.name.as_str(),
            record.client.as_str(),
            &record.progress.to_string(),
            record.status.label(),
            &record.team.to_string(),
            &record.budget.to_string(),
            record.deadline.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectRecordStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_header_and_rows_in_order() {
        let store = ProjectRecordStore::with_sample_projects();
        let mut buf = Vec::new();
        let count = write_records(store.records(), &mut buf).unwrap();
        assert_eq!(count, 4);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Project Name,Client,Progress,Status,Team Size,Budget,Deadline"
        );
        assert_eq!(
            lines[1],
            "Website Redesign,ABC Corp,75,In Progress,4,15000,2024-02-15"
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn quotes_fields_with_commas() {
        let mut store = ProjectRecordStore::new();
        store.begin_create();
        store.update_draft_field(crate::model::DraftField::Client, "Smith, Jones & Co");
        store.commit_draft();

        let mut buf = Vec::new();
        write_records(store.records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"Smith, Jones & Co\""));
    }

    #[test]
    fn export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.csv");
        let store = ProjectRecordStore::with_sample_projects();
        assert_eq!(export_csv(store.records(), &path).unwrap(), 4);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Database Migration,Tech Solutions,100,Completed,3,8000,2024-01-10"));
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("projects.csv");
        assert!(matches!(export_csv(&[], &path), Err(ExportError::Io(_))));
    }
}
