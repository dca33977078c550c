//! Single project card; the drag source.

use crate::dnd::{DragEvent, DropEffect, Draggable, MEDIA_TYPE_PLAIN_TEXT};
use crate::model::project::{ProjectId, ProjectRecord};
use crate::view::Component;
use log::debug;
use std::cell::RefCell;

/// Text content of one rendered card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedItem {
    pub title: String,
    pub persons: String,
    pub description: String,
}

pub struct ProjectItem {
    host_id: String,
    element_id: String,
    project: ProjectRecord,
    rendered: RefCell<RenderedItem>,
}

impl ProjectItem {
    /// Builds and renders a card for `project` inside the list `host_id`.
    pub fn new(host_id: impl Into<String>, project: ProjectRecord) -> Self {
        let item = Self {
            host_id: host_id.into(),
            element_id: project.id().to_string(),
            project,
            rendered: RefCell::new(RenderedItem::default()),
        };
        item.configure();
        item.render_content();
        item
    }

    pub fn project_id(&self) -> ProjectId {
        self.project.id()
    }

    pub fn project(&self) -> &ProjectRecord {
        &self.project
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    pub fn rendered(&self) -> RenderedItem {
        self.rendered.borrow().clone()
    }
}

impl Component for ProjectItem {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    // Drag events reach this item through its `Draggable` impl.
    fn configure(&self) {}

    fn render_content(&self) {
        *self.rendered.borrow_mut() = RenderedItem {
            title: self.project.title().to_string(),
            persons: self.project.persons_label(),
            description: self.project.description().to_string(),
        };
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, event: &mut DragEvent) {
        let transfer = event.data_transfer.get_or_insert_with(Default::default);
        transfer.set_data(MEDIA_TYPE_PLAIN_TEXT, self.project.id().to_string());
        transfer.set_effect_allowed(DropEffect::Move);
        debug!(
            "event=drag_start module=view status=ok project_id={}",
            self.project.id()
        );
    }

    fn drag_end_handler(&self, _event: &mut DragEvent) {}
}

#[cfg(test)]
mod tests {
    use super::ProjectItem;
    use crate::dnd::{DragEvent, DropEffect, Draggable, MEDIA_TYPE_PLAIN_TEXT};
    use crate::model::project::ProjectRecord;
    use crate::view::Component;

    #[test]
    fn renders_title_persons_and_description() {
        let record = ProjectRecord::new_active("Build shed", "Weekend project", 1);
        let item = ProjectItem::new("active-projects-list", record.clone());

        let rendered = item.rendered();
        assert_eq!(rendered.title, "Build shed");
        assert_eq!(rendered.persons, "1 person");
        assert_eq!(rendered.description, "Weekend project");
        assert_eq!(item.element_id(), record.id().to_string());
        assert_eq!(item.host_id(), "active-projects-list");
    }

    #[test]
    fn drag_start_attaches_id_as_plain_text_with_move_effect() {
        let record = ProjectRecord::new_active("a", "abcde", 2);
        let item = ProjectItem::new("host", record.clone());

        let mut event = DragEvent::new(None);
        item.drag_start_handler(&mut event);

        let transfer = event.data_transfer.expect("drag start creates a transfer");
        assert_eq!(
            transfer.get_data(MEDIA_TYPE_PLAIN_TEXT),
            Some(record.id().to_string().as_str())
        );
        assert_eq!(transfer.first_type(), Some(MEDIA_TYPE_PLAIN_TEXT));
        assert_eq!(transfer.effect_allowed(), DropEffect::Move);
    }
}
