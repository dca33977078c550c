//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its two-state status.
//! - Provide display helpers used by list/item views.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes.
//! - `status` is the only mutable field, and only the store mutates it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project record.
///
/// UUID v4 keeps collision probability negligible for session-sized boards.
pub type ProjectId = Uuid;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress. Every new project starts here.
    Active,
    /// Work completed. Not terminal; a project may move back to `Active`.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase label (`active|finished`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a status label, ignoring surrounding whitespace and case.
    pub fn parse(value: &str) -> Result<Self, ProjectStatusParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ProjectStatusParseError(other.to_string())),
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status label is neither `active` nor `finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatusParseError(pub String);

impl Display for ProjectStatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ProjectStatusParseError {}

/// One tracked project entry.
///
/// Fields are private to the crate so that records can only be created by
/// `ProjectStore::create_project`; callers read them through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub(crate) id: ProjectId,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) people: u32,
    pub(crate) status: ProjectStatus,
}

impl ProjectRecord {
    /// Builds a fresh `Active` record with a newly generated id.
    pub(crate) fn new_active(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Human-readable team size, e.g. `1 person` or `3 people`.
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }
}
