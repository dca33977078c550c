//! Drag-and-drop transfer protocol.
//!
//! # Responsibility
//! - Model the payload carried from drag start to drop (`DataTransfer`).
//! - Define the `Draggable` / `DragTarget` capability contracts.
//!
//! # Invariants
//! - The only payload is a project id tagged as `text/plain`.
//! - Drops are rejected unless a drag-over handler opts in via
//!   `DragEvent::prevent_default`.
//! - A missing or malformed payload never panics; it transitions nothing.

pub mod contract;
pub mod transfer;

pub use contract::{DragTarget, Draggable, DropOutcome};
pub use transfer::{DataTransfer, DragEvent, DropEffect, MEDIA_TYPE_PLAIN_TEXT};
