//! Status values shared by both lifecycles.
//!
//! Stored statuses are plain strings and writes are unchecked; this enum
//! only supplies the server-side defaults and cascade values.

use std::fmt;
use std::str::FromStr;

/// Known lifecycle status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A request awaiting volunteers.
    Pending,
    /// Work in progress.
    Helping,
    /// Work finished.
    Completed,
}

impl Status {
    /// The wire representation of this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Helping => "helping",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "helping" => Ok(Status::Helping),
            "completed" => Ok(Status::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
