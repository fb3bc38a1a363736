use std::fmt;

/// Identity of a project record. Issued once at creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Human-readable label, as shown in the status chip and the form select.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }

    /// Parse a status label. Case, spaces, hyphens and underscores are ignored,
    /// so `"In Progress"`, `"in-progress"` and `"InProgress"` all match.
    pub fn from_label(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match normalized.as_str() {
            "planning" => Some(ProjectStatus::Planning),
            "inprogress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            "onhold" => Some(ProjectStatus::OnHold),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tracked project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: RecordId,
    pub name: String,
    pub client: String,
    /// Percent complete, always within 0..=100.
    pub progress: u8,
    pub status: ProjectStatus,
    /// Team headcount.
    pub team: i64,
    pub budget: f64,
    /// ISO date string (`YYYY-MM-DD`), kept verbatim.
    pub deadline: String,
}

impl ProjectRecord {
    /// Build a record from a committed draft.
    pub fn from_draft(id: RecordId, draft: Draft) -> Self {
        Self {
            id,
            name: draft.name,
            client: draft.client,
            progress: draft.progress,
            status: draft.status,
            team: draft.team,
            budget: draft.budget,
            deadline: draft.deadline,
        }
    }

    /// Overwrite every field except `id` with the draft's values.
    pub fn apply_draft(&mut self, draft: Draft) {
        let id = self.id;
        *self = Self::from_draft(id, draft);
    }
}

/// Edit buffer for the project dialog: a record's fields minus its id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub name: String,
    pub client: String,
    pub progress: u8,
    pub status: ProjectStatus,
    pub team: i64,
    pub budget: f64,
    pub deadline: String,
}

impl From<&ProjectRecord> for Draft {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            name: record.name.clone(),
            client: record.client.clone(),
            progress: record.progress,
            status: record.status,
            team: record.team,
            budget: record.budget,
            deadline: record.deadline.clone(),
        }
    }
}

/// Addressable fields of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Client,
    Progress,
    Status,
    Team,
    Budget,
    Deadline,
}

impl Draft {
    /// Store a raw form value into the draft, coercing numeric fields.
    ///
    /// Never fails: unparseable numbers become 0, progress is clamped to
    /// 0..=100 and an unknown status label leaves the status as it was.
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Name => self.name = raw.to_string(),
            DraftField::Client => self.client = raw.to_string(),
            DraftField::Deadline => self.deadline = raw.to_string(),
            DraftField::Progress => self.progress = clamp_progress(parse_int_lenient(raw)),
            DraftField::Team => self.team = parse_int_lenient(raw),
            DraftField::Budget => self.budget = parse_float_lenient(raw),
            DraftField::Status => {
                if let Some(status) = ProjectStatus::from_label(raw) {
                    self.status = status;
                }
            }
        }
    }
}

/// Clamp any integer into the valid progress range.
pub fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Parse the leading integer of `raw`, or 0 if there is none.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so `"42%"` is 42 and `"3.9"` is 3. Values beyond `i64`
/// saturate.
pub fn parse_int_lenient(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Parse the leading decimal number of `raw`, or 0 if there is none or it is
/// not finite. Accepts a sign, a fractional part and an exponent.
pub fn parse_float_lenient(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }
    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_parse_takes_leading_digits() {
        assert_eq!(parse_int_lenient("42"), 42);
        assert_eq!(parse_int_lenient("  7 people"), 7);
        assert_eq!(parse_int_lenient("3.9"), 3);
        assert_eq!(parse_int_lenient("-5"), -5);
        assert_eq!(parse_int_lenient("+12"), 12);
    }

    #[test]
    fn int_parse_falls_back_to_zero() {
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("abc"), 0);
        assert_eq!(parse_int_lenient("-"), 0);
        assert_eq!(parse_int_lenient("x12"), 0);
    }

    #[test]
    fn int_parse_saturates() {
        assert_eq!(parse_int_lenient("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn float_parse_handles_common_inputs() {
        assert_eq!(parse_float_lenient("15000"), 15000.0);
        assert_eq!(parse_float_lenient("1234.5"), 1234.5);
        assert_eq!(parse_float_lenient(".5"), 0.5);
        assert_eq!(parse_float_lenient("2e3"), 2000.0);
        assert_eq!(parse_float_lenient("2e"), 2.0);
        assert_eq!(parse_float_lenient("12abc"), 12.0);
        assert_eq!(parse_float_lenient("-3.25"), -3.25);
    }

    #[test]
    fn float_parse_falls_back_to_zero() {
        assert_eq!(parse_float_lenient(""), 0.0);
        assert_eq!(parse_float_lenient("abc"), 0.0);
        assert_eq!(parse_float_lenient("."), 0.0);
        assert_eq!(parse_float_lenient("1e999"), 0.0);
    }

    #[test]
    fn status_labels_round_trip() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(ProjectStatus::from_label("InProgress"), Some(ProjectStatus::InProgress));
        assert_eq!(ProjectStatus::from_label("on-hold"), Some(ProjectStatus::OnHold));
        assert_eq!(ProjectStatus::from_label("Cancelled"), None);
    }

    #[test]
    fn set_field_coerces_numbers() {
        let mut draft = Draft::default();
        draft.set_field(DraftField::Progress, "abc");
        assert_eq!(draft.progress, 0);
        draft.set_field(DraftField::Progress, "150");
        assert_eq!(draft.progress, 100);
        draft.set_field(DraftField::Progress, "-20");
        assert_eq!(draft.progress, 0);
        draft.set_field(DraftField::Team, "-3");
        assert_eq!(draft.team, -3);
        draft.set_field(DraftField::Budget, "oops");
        assert_eq!(draft.budget, 0.0);
    }

    #[test]
    fn set_field_keeps_text_verbatim_and_ignores_unknown_status() {
        let mut draft = Draft::default();
        draft.set_field(DraftField::Name, "  Site  ");
        draft.set_field(DraftField::Deadline, "2024-02-15");
        draft.set_field(DraftField::Status, "Completed");
        draft.set_field(DraftField::Status, "Archived");
        assert_eq!(draft.name, "  Site  ");
        assert_eq!(draft.deadline, "2024-02-15");
        assert_eq!(draft.status, ProjectStatus::Completed);
    }

    #[test]
    fn apply_draft_preserves_id() {
        let mut record = ProjectRecord::from_draft(RecordId(9), Draft::default());
        let draft = Draft {
            name: "Renamed".into(),
            progress: 40,
            ..Draft::default()
        };
        record.apply_draft(draft.clone());
        assert_eq!(record.id, RecordId(9));
        assert_eq!(Draft::from(&record), draft);
    }
}
