//! Announcement audience enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who an announcement is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementTarget {
    /// Everyone.
    All,
    /// Teaching staff.
    Teacher,
    /// All students.
    Student,
    /// One class; requires a class id.
    Class,
}

impl AnnouncementTarget {
    /// Return the target as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Class => "class",
        }
    }
}

impl fmt::Display for AnnouncementTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnnouncementTarget {
    type Err = schoolhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            "class" => Ok(Self::Class),
            _ => Err(schoolhub_core::AppError::validation(format!(
                "Invalid announcement target: '{s}'. Expected one of: all, teacher, student, class"
            ))),
        }
    }
}
