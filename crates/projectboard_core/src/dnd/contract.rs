//! Capability contracts for drag sources and drop targets.

use crate::dnd::transfer::DragEvent;
use crate::model::project::ProjectId;
use crate::state::project_store::TransitionOutcome;

/// Something the user can pick up (a rendered project item).
pub trait Draggable {
    /// Attaches the payload and allowed effect to `event`.
    fn drag_start_handler(&self, event: &mut DragEvent);

    fn drag_end_handler(&self, event: &mut DragEvent);
}

/// Something that accepts drops (a project list).
pub trait DragTarget {
    /// Opts into the drop when the payload type is acceptable.
    fn drag_over_handler(&self, event: &mut DragEvent);

    fn drop_handler(&self, event: &mut DragEvent) -> DropOutcome;

    fn drag_leave_handler(&self, event: &mut DragEvent);
}

/// What a drop ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Payload resolved to an id; the store reported `outcome`.
    Transitioned {
        project_id: ProjectId,
        outcome: TransitionOutcome,
    },
    /// No transfer or no `text/plain` entry.
    NoPayload,
    /// Payload was present but is not a project id.
    InvalidPayload,
    /// The target did not accept the drag during drag-over.
    Declined,
}

impl DropOutcome {
    /// True only when a project actually changed status.
    pub fn moved(self) -> bool {
        matches!(
            self,
            Self::Transitioned { outcome, .. } if outcome.is_moved()
        )
    }
}
