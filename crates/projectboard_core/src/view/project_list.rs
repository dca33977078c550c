//! Status column; subscriber of the store and drop target.

use crate::dnd::{DragEvent, DragTarget, DropOutcome, MEDIA_TYPE_PLAIN_TEXT};
use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::state::project_store::{filter_by_status, ProjectStore};
use crate::view::project_item::{ProjectItem, RenderedItem};
use crate::view::Component;
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// State touched by the store subscription.
struct ListView {
    kind: ProjectStatus,
    list_id: String,
    heading: RefCell<String>,
    assigned_projects: RefCell<Vec<ProjectRecord>>,
    items: RefCell<Vec<ProjectItem>>,
    droppable: Cell<bool>,
    render_count: Cell<usize>,
}

impl ListView {
    fn assign(&self, projects: Vec<ProjectRecord>) {
        *self.assigned_projects.borrow_mut() = filter_by_status(&projects, self.kind);
        self.render_projects();
    }

    fn render_projects(&self) {
        let items = self
            .assigned_projects
            .borrow()
            .iter()
            .cloned()
            .map(|project| ProjectItem::new(self.list_id.as_str(), project))
            .collect();
        *self.items.borrow_mut() = items;
        self.render_count.set(self.render_count.get() + 1);
    }
}

/// One column of the board (`active-projects` or `finished-projects`).
pub struct ProjectList {
    element_id: String,
    store: Rc<ProjectStore>,
    view: Rc<ListView>,
}

impl ProjectList {
    /// Builds the column, subscribes it to `store` and renders its heading.
    pub fn new(kind: ProjectStatus, store: Rc<ProjectStore>) -> Self {
        let list = Self {
            element_id: format!("{}-projects", kind.as_str()),
            store,
            view: Rc::new(ListView {
                kind,
                list_id: format!("{}-projects-list", kind.as_str()),
                heading: RefCell::new(String::new()),
                assigned_projects: RefCell::new(Vec::new()),
                items: RefCell::new(Vec::new()),
                droppable: Cell::new(false),
                render_count: Cell::new(0),
            }),
        };
        list.configure();
        list.render_content();
        list
    }

    /// Status this column shows and assigns on drop.
    pub fn kind(&self) -> ProjectStatus {
        self.view.kind
    }

    pub fn list_id(&self) -> &str {
        &self.view.list_id
    }

    pub fn heading(&self) -> String {
        self.view.heading.borrow().clone()
    }

    /// Projects from the latest snapshot whose status matches this column.
    pub fn assigned_projects(&self) -> Vec<ProjectRecord> {
        self.view.assigned_projects.borrow().clone()
    }

    pub fn rendered_items(&self) -> Vec<RenderedItem> {
        self.view
            .items
            .borrow()
            .iter()
            .map(ProjectItem::rendered)
            .collect()
    }

    /// Card for `id` built from the latest snapshot, if this column shows it.
    ///
    /// The card is a detached copy, so holding it across a drop is safe.
    pub fn find_item(&self, id: ProjectId) -> Option<ProjectItem> {
        self.view
            .assigned_projects
            .borrow()
            .iter()
            .find(|project| project.id() == id)
            .cloned()
            .map(|project| ProjectItem::new(self.view.list_id.as_str(), project))
    }

    /// Whether the drop indicator is shown.
    pub fn is_droppable(&self) -> bool {
        self.view.droppable.get()
    }

    /// Number of item re-renders since construction.
    pub fn render_count(&self) -> usize {
        self.view.render_count.get()
    }
}

impl Component for ProjectList {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn configure(&self) {
        let view: Weak<ListView> = Rc::downgrade(&self.view);
        self.store.subscribe(move |projects| {
            if let Some(view) = view.upgrade() {
                view.assign(projects);
            }
        });
    }

    fn render_content(&self) {
        *self.view.heading.borrow_mut() =
            format!("{} PROJECTS", self.view.kind.as_str().to_ascii_uppercase());
    }
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, event: &mut DragEvent) {
        let accepts = event
            .data_transfer
            .as_ref()
            .and_then(|transfer| transfer.first_type())
            == Some(MEDIA_TYPE_PLAIN_TEXT);
        if accepts {
            event.prevent_default();
            self.view.droppable.set(true);
        }
    }

    fn drop_handler(&self, event: &mut DragEvent) -> DropOutcome {
        self.view.droppable.set(false);

        let Some(payload) = event
            .data_transfer
            .as_ref()
            .and_then(|transfer| transfer.get_data(MEDIA_TYPE_PLAIN_TEXT))
        else {
            debug!(
                "event=drop module=view status=no_payload target={}",
                self.element_id
            );
            return DropOutcome::NoPayload;
        };

        let Ok(project_id) = Uuid::parse_str(payload.trim()) else {
            warn!(
                "event=drop module=view status=invalid_payload target={} payload_len={}",
                self.element_id,
                payload.len()
            );
            return DropOutcome::InvalidPayload;
        };

        let outcome = self.store.transition_project(project_id, self.view.kind);
        DropOutcome::Transitioned {
            project_id,
            outcome,
        }
    }

    fn drag_leave_handler(&self, _event: &mut DragEvent) {
        self.view.droppable.set(false);
    }
}
