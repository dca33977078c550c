//! Observable state containers.
//!
//! # Responsibility
//! - Provide a generic subscribe/notify subject (`StateStore`).
//! - Own the live project collection (`ProjectStore`).
//!
//! # Invariants
//! - Subscribers only ever receive owned copies of the collection.
//! - Notification is synchronous and follows registration order.

pub mod project_store;
pub mod store;
