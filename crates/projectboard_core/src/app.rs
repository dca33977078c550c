//! Board composition root.
//!
//! # Responsibility
//! - Create the process's single `ProjectStore` and hand it to every view.
//! - Dispatch a full drag gesture (start, over, drop or leave) for drivers.
//!
//! # Invariants
//! - Exactly one `AppContext` should exist per process; it owns the only
//!   store instance and lives until exit.
//! - Lists subscribe in the order Active, Finished.

use crate::config::BoardConfig;
use crate::dnd::{DragEvent, DragTarget, Draggable, DropOutcome};
use crate::model::project::{ProjectId, ProjectStatus};
use crate::state::project_store::ProjectStore;
use crate::view::project_input::ProjectInput;
use crate::view::project_item::ProjectItem;
use crate::view::project_list::ProjectList;
use log::{debug, info};
use std::rc::Rc;

pub struct AppContext {
    store: Rc<ProjectStore>,
    input: ProjectInput,
    active_list: ProjectList,
    finished_list: ProjectList,
}

impl AppContext {
    pub fn new(config: &BoardConfig) -> Self {
        let store = Rc::new(ProjectStore::new());
        let input = ProjectInput::new(Rc::clone(&store), config.constraints);
        let active_list = ProjectList::new(ProjectStatus::Active, Rc::clone(&store));
        let finished_list = ProjectList::new(ProjectStatus::Finished, Rc::clone(&store));

        info!(
            "event=board_ready module=app status=ok listeners={}",
            store.listener_count()
        );
        Self {
            store,
            input,
            active_list,
            finished_list,
        }
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn list(&self, kind: ProjectStatus) -> &ProjectList {
        match kind {
            ProjectStatus::Active => &self.active_list,
            ProjectStatus::Finished => &self.finished_list,
        }
    }

    /// Drags the card for `id` onto the `target` column.
    ///
    /// The drag starts from whichever column currently renders the card. An
    /// unknown id starts an empty gesture; the target declines it during
    /// drag-over and the result is `DropOutcome::Declined`.
    pub fn drag_project(&self, id: ProjectId, target: ProjectStatus) -> DropOutcome {
        let mut start = DragEvent::with_empty_transfer();
        if self
            .with_item(id, |item| item.drag_start_handler(&mut start))
            .is_none()
        {
            debug!(
                "event=drag_start module=app status=no_source project_id={}",
                id
            );
        }

        let mut over = start.follow_up();
        let outcome = dispatch_drop(self.list(target), &mut over);

        let mut end = start.follow_up();
        self.with_item(id, |item| item.drag_end_handler(&mut end));
        outcome
    }

    fn with_item<R>(&self, id: ProjectId, f: impl FnOnce(&ProjectItem) -> R) -> Option<R> {
        let item = self
            .active_list
            .find_item(id)
            .or_else(|| self.finished_list.find_item(id))?;
        Some(f(&item))
    }
}

/// Runs drag-over then drop (or leave, when the target declines) on `target`.
pub fn dispatch_drop(target: &dyn DragTarget, event: &mut DragEvent) -> DropOutcome {
    target.drag_over_handler(event);
    if event.default_prevented() {
        let mut drop_event = event.follow_up();
        target.drop_handler(&mut drop_event)
    } else {
        target.drag_leave_handler(event);
        DropOutcome::Declined
    }
}
