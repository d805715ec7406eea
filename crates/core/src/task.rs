//! Task status vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Progress label of a task. Serialized exactly as the variant name, which
/// is also how it appears in the CSV file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Ongoing,
    Complete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Incomplete, Self::Ongoing, Self::Complete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "Incomplete",
            Self::Ongoing => "Ongoing",
            Self::Complete => "Complete",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown task status '{wanted}'. Valid statuses: {}",
                    Self::ALL.map(|s| s.as_str()).join(", ")
                ))
            })
    }
}

/// Parse an optional `?status=` query value. An absent or blank value means
/// "no filter".
pub fn parse_status_filter(raw: Option<&str>) -> Result<Option<TaskStatus>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}
