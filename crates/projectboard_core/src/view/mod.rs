//! Headless views bound to the project store.
//!
//! # Responsibility
//! - Turn store snapshots into render models (text, ids, indicator flags).
//! - Adapt user gestures (form submit, drag/drop) into store calls.
//!
//! # Invariants
//! - Views never mutate a received snapshot back into the store.
//! - Subscriber closures hold `Weak` handles, so a dropped view stops
//!   rendering without unsubscribing.

pub mod project_input;
pub mod project_item;
pub mod project_list;

/// Contract every view fulfils.
pub trait Component {
    /// Id of the view's root element.
    fn element_id(&self) -> &str;

    /// Wires the view to its event sources.
    fn configure(&self);

    /// Fills in the view's static content.
    fn render_content(&self);
}
