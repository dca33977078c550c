//! Project store: sole authority over the project collection.
//!
//! # Responsibility
//! - Create project records and move them between `Active` and `Finished`.
//! - Announce every completed mutation to subscribers with a fresh snapshot.
//!
//! # Invariants
//! - Record ids are unique within one store instance.
//! - Insertion order equals creation order; records are never removed.
//! - Unknown ids and same-status transitions are silent no-ops and never
//!   notify subscribers.
//! - The collection borrow is released before any subscriber runs.
//!
//! One store exists per process. `AppContext` creates it and hands out
//! `Rc<ProjectStore>` clones; nothing else should call [`ProjectStore::new`]
//! outside tests.

use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::state::store::StateStore;
use log::{debug, info};
use std::cell::RefCell;

/// Result of one [`ProjectStore::transition_project`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Status changed and subscribers were notified.
    Moved {
        from: ProjectStatus,
        to: ProjectStatus,
    },
    /// Record already had the requested status.
    Unchanged,
    /// No record with the given id.
    NotFound,
}

impl TransitionOutcome {
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    fn label(self) -> &'static str {
        match self {
            Self::Moved { .. } => "moved",
            Self::Unchanged => "unchanged",
            Self::NotFound => "not_found",
        }
    }
}

/// Observable project collection.
#[derive(Default)]
pub struct ProjectStore {
    state: StateStore<ProjectRecord>,
    projects: RefCell<Vec<ProjectRecord>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for collection changes.
    ///
    /// The callback is not invoked on registration; it first runs on the
    /// next mutation.
    pub fn subscribe(&self, listener: impl Fn(Vec<ProjectRecord>) + 'static) {
        self.state.subscribe(listener);
    }

    /// Appends a new `Active` project and notifies subscribers.
    ///
    /// Input is expected to be validated upstream; this never fails.
    pub fn create_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let record = ProjectRecord::new_active(title, description, people);
        let id = record.id();
        self.projects.borrow_mut().push(record);

        info!(
            "event=project_create module=state status=ok project_id={} people={}",
            id, people
        );
        self.update_listeners();
        id
    }

    /// Moves a project to `new_status`.
    ///
    /// Lookup is a linear scan. Missing ids (for example a stale drag
    /// payload) and redundant transitions are reported through the outcome
    /// and do not notify.
    pub fn transition_project(&self, id: ProjectId, new_status: ProjectStatus) -> TransitionOutcome {
        let outcome = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| project.id == id) {
                None => TransitionOutcome::NotFound,
                Some(project) if project.status == new_status => TransitionOutcome::Unchanged,
                Some(project) => {
                    let from = project.status;
                    project.status = new_status;
                    TransitionOutcome::Moved {
                        from,
                        to: new_status,
                    }
                }
            }
        };

        if outcome.is_moved() {
            info!(
                "event=project_transition module=state status={} project_id={} to={}",
                outcome.label(),
                id,
                new_status
            );
            self.update_listeners();
        } else {
            debug!(
                "event=project_transition module=state status={} project_id={} to={}",
                outcome.label(),
                id,
                new_status
            );
        }
        outcome
    }

    /// Returns a point-in-time copy of every project in insertion order.
    pub fn snapshot(&self) -> Vec<ProjectRecord> {
        self.projects.borrow().clone()
    }

    /// Returns a copy of one project, if present.
    pub fn get_project(&self, id: ProjectId) -> Option<ProjectRecord> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    /// Returns copies of the projects currently in `status`.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<ProjectRecord> {
        filter_by_status(&self.projects.borrow(), status)
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }

    fn update_listeners(&self) {
        let snapshot = self.snapshot();
        self.state.notify(&snapshot);
    }
}

/// Partitions a snapshot by status, preserving insertion order.
pub fn filter_by_status(projects: &[ProjectRecord], status: ProjectStatus) -> Vec<ProjectRecord> {
    projects
        .iter()
        .filter(|project| project.status == status)
        .cloned()
        .collect()
}
