//! Core logic for the project board.
//! This crate is the single source of truth for project records and the
//! drag-and-drop transitions that move them between columns.

pub mod app;
pub mod config;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod state;
pub mod validation;
pub mod view;

pub use app::{dispatch_drop, AppContext};
pub use config::{BoardConfig, ConfigError, InputConstraints};
pub use dnd::{DataTransfer, DragEvent, DragTarget, Draggable, DropEffect, DropOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::project::{ProjectId, ProjectRecord, ProjectStatus, ProjectStatusParseError};
pub use state::project_store::{ProjectStore, TransitionOutcome};
pub use state::store::StateStore;
pub use validation::{validate, InputValue, Validatable};
pub use view::project_input::{InputError, InputField, ProjectDraft, ProjectInput};
pub use view::project_item::{ProjectItem, RenderedItem};
pub use view::project_list::ProjectList;
pub use view::Component;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
